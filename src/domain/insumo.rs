// ==========================================
// Normalizador SINAPI - Entidades de insumo
// ==========================================
// Invariante central: os preços material/mão de obra são mutuamente
// exclusivos. Internamente o preço é uma união etiquetada; as duas
// colunas planas só existem na borda de serialização
// ==========================================

use serde::Serialize;

/// Classificação de um insumo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TipoInsumo {
    #[serde(rename = "material")]
    Material,
    #[serde(rename = "mao_de_obra")]
    MaoDeObra,
}

/// Preço unitário já classificado.
///
/// A variante garante estruturalmente que apenas um dos dois campos
/// planos será preenchido na projeção.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PrecoInsumo {
    Material(f64),
    MaoDeObra(f64),
}

impl PrecoInsumo {
    pub fn tipo(&self) -> TipoInsumo {
        match self {
            PrecoInsumo::Material(_) => TipoInsumo::Material,
            PrecoInsumo::MaoDeObra(_) => TipoInsumo::MaoDeObra,
        }
    }

    /// Projeção para a coluna `preco_material`
    pub fn material(&self) -> f64 {
        match self {
            PrecoInsumo::Material(v) => *v,
            PrecoInsumo::MaoDeObra(_) => 0.0,
        }
    }

    /// Projeção para a coluna `preco_mao_obra`
    pub fn mao_obra(&self) -> f64 {
        match self {
            PrecoInsumo::Material(_) => 0.0,
            PrecoInsumo::MaoDeObra(v) => *v,
        }
    }
}

/// Insumo normalizado (forma interna, preço ainda etiquetado)
#[derive(Debug, Clone)]
pub struct Insumo {
    pub codigo_item: String,
    pub descricao: String,
    pub unidade: String,
    pub preco: PrecoInsumo,
    pub estado: String,
    pub desonerado: bool,
}

/// Linha do arquivo de saída de insumos (esquema de destino,
/// ordem das colunas fixada pela ordem dos campos)
#[derive(Debug, Clone, Serialize)]
pub struct InsumoRow {
    pub base_id: u32,
    pub codigo_item: String,
    pub descricao: String,
    pub unidade: String,
    pub preco_material: f64,
    pub preco_mao_obra: f64,
    pub tipo_insumo: TipoInsumo,
    pub estado: String,
    pub desonerado: bool,
}

impl From<Insumo> for InsumoRow {
    fn from(insumo: Insumo) -> Self {
        InsumoRow {
            base_id: crate::BASE_ID,
            codigo_item: insumo.codigo_item,
            descricao: insumo.descricao,
            unidade: insumo.unidade,
            preco_material: insumo.preco.material(),
            preco_mao_obra: insumo.preco.mao_obra(),
            tipo_insumo: insumo.preco.tipo(),
            estado: insumo.estado,
            desonerado: insumo.desonerado,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preco_material_zera_mao_obra() {
        let preco = PrecoInsumo::Material(1200.5);
        assert_eq!(preco.material(), 1200.5);
        assert_eq!(preco.mao_obra(), 0.0);
        assert_eq!(preco.tipo(), TipoInsumo::Material);
    }

    #[test]
    fn test_preco_mao_obra_zera_material() {
        let preco = PrecoInsumo::MaoDeObra(50.0);
        assert_eq!(preco.material(), 0.0);
        assert_eq!(preco.mao_obra(), 50.0);
        assert_eq!(preco.tipo(), TipoInsumo::MaoDeObra);
    }

    #[test]
    fn test_projecao_para_linha_plana() {
        let insumo = Insumo {
            codigo_item: "88316".to_string(),
            descricao: "PEDREIRO COM ENCARGOS".to_string(),
            unidade: "H".to_string(),
            preco: PrecoInsumo::MaoDeObra(50.0),
            estado: "SP".to_string(),
            desonerado: false,
        };
        let row: InsumoRow = insumo.into();
        assert_eq!(row.base_id, 1);
        assert_eq!(row.preco_mao_obra, 50.0);
        assert_eq!(row.preco_material, 0.0);
        assert_eq!(row.tipo_insumo, TipoInsumo::MaoDeObra);
    }
}
