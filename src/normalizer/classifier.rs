// ==========================================
// Normalizador SINAPI - Classificador material / mão de obra
// ==========================================
// Disjunção de substrings sobre a descrição do insumo, insensível
// a maiúsculas. Sem ocorrência de palavra-chave => material
// ==========================================

use crate::domain::{PrecoInsumo, TipoInsumo};

/// Termos ocupacionais que marcam um insumo como mão de obra.
/// Lista fixa; pode ser refinada para maior precisão.
pub const MAO_DE_OBRA_KEYWORDS: &[&str] = &[
    "PEDREIRO",
    "SERVENTE",
    "CARPINTEIRO",
    "ARMADOR",
    "ELETRICISTA",
    "ENCANADOR",
    "PINTOR",
    "OPERADOR",
    "MOTORISTA",
    "ENCARREGADO",
    "MESTRE",
    "TECNICO",
    "ENGENHEIRO",
    "TOPOGRAFO",
    "APONTADOR",
    "AUXILIAR",
    "MONTADOR",
    "SOLDADOR",
    "MARTELETEIRO",
];

/// Classifica a descrição contra a lista de palavras-chave
pub fn classify(descricao: &str, keywords: &[String]) -> TipoInsumo {
    let upper = descricao.to_uppercase();
    if keywords.iter().any(|k| upper.contains(k.as_str())) {
        TipoInsumo::MaoDeObra
    } else {
        TipoInsumo::Material
    }
}

/// Classifica e etiqueta o preço unitário na variante correspondente
pub fn classify_preco(descricao: &str, preco_unitario: f64, keywords: &[String]) -> PrecoInsumo {
    match classify(descricao, keywords) {
        TipoInsumo::MaoDeObra => PrecoInsumo::MaoDeObra(preco_unitario),
        TipoInsumo::Material => PrecoInsumo::Material(preco_unitario),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keywords() -> Vec<String> {
        MAO_DE_OBRA_KEYWORDS.iter().map(|k| k.to_string()).collect()
    }

    #[test]
    fn test_classifica_mao_de_obra() {
        assert_eq!(
            classify("PEDREIRO COM ENCARGOS COMPLEMENTARES", &keywords()),
            TipoInsumo::MaoDeObra
        );
        assert_eq!(
            classify("AJUDANTE DE ELETRICISTA", &keywords()),
            TipoInsumo::MaoDeObra
        );
    }

    #[test]
    fn test_classifica_material_por_padrao() {
        assert_eq!(
            classify("CIMENTO PORTLAND COMPOSTO CP II-32", &keywords()),
            TipoInsumo::Material
        );
        assert_eq!(classify("", &keywords()), TipoInsumo::Material);
    }

    #[test]
    fn test_insensivel_a_caixa() {
        assert_eq!(classify("Servente de obras", &keywords()), TipoInsumo::MaoDeObra);
        assert_eq!(classify("pedreiro", &keywords()), TipoInsumo::MaoDeObra);
    }

    #[test]
    fn test_palavra_no_meio_da_descricao() {
        // Substring basta; não exige palavra isolada
        assert_eq!(
            classify("LOCACAO DE OPERADOR DE GUINDASTE", &keywords()),
            TipoInsumo::MaoDeObra
        );
    }

    #[test]
    fn test_classify_preco_etiqueta_variante() {
        let preco = classify_preco("PEDREIRO", 50.0, &keywords());
        assert_eq!(preco, PrecoInsumo::MaoDeObra(50.0));

        let preco = classify_preco("CIMENTO", 1200.5, &keywords());
        assert_eq!(preco, PrecoInsumo::Material(1200.5));
    }
}
