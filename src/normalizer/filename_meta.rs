// ==========================================
// Normalizador SINAPI - Metadados do nome do arquivo
// ==========================================
// Convenção posicional: segmentos separados por '_' carregam a UF
// e o marcador do regime de desoneração, em índices fixos que
// diferem entre as duas famílias de arquivo
// ==========================================

use crate::normalizer::error::{NormalizeError, NormalizeResult};

/// Índices fixos de uma convenção de nome de arquivo
#[derive(Debug, Clone, Copy)]
pub struct FilenameConvention {
    /// Segmento que carrega a sigla da UF
    pub estado_segment: usize,
    /// Segmento que carrega o marcador do regime ("Desonerado"/"NaoDesonerado")
    pub regime_segment: usize,
}

/// Convenção dos arquivos de insumos
/// (SINAPI_Preco_Ref_Insumos_{UF}_{referencia}_{regime}.csv)
pub const INSUMO_FILENAME: FilenameConvention = FilenameConvention {
    estado_segment: 4,
    regime_segment: 6,
};

/// Convenção dos arquivos analíticos de composições
/// (SINAPI_Custo_Ref_Composicoes_Analitico_{UF}_{referencia}_{regime}.csv)
pub const COMPOSICAO_FILENAME: FilenameConvention = FilenameConvention {
    estado_segment: 5,
    regime_segment: 7,
};

/// Metadados extraídos de um nome de arquivo
#[derive(Debug, Clone, PartialEq)]
pub struct FileMeta {
    pub estado: String,
    pub desonerado: bool,
}

impl FilenameConvention {
    /// Extrai UF e regime de desoneração do nome do arquivo.
    ///
    /// Falha fechado: nome com menos segmentos do que a convenção exige
    /// gera erro por arquivo (o lote continua sem ele), em vez de
    /// indexar às cegas.
    pub fn extract(&self, filename: &str) -> NormalizeResult<FileMeta> {
        let parts: Vec<&str> = filename.split('_').collect();
        let expected = self.regime_segment.max(self.estado_segment) + 1;

        if parts.len() < expected {
            return Err(NormalizeError::FilenameFormat {
                filename: filename.to_string(),
                expected,
                actual: parts.len(),
            });
        }

        let regime = parts[self.regime_segment];
        // "NaoDesonerado" contém "Desonerado"; o teste de substring puro
        // classificaria o regime não desonerado como desonerado
        let desonerado = regime.contains("Desonerado") && !regime.contains("NaoDesonerado");

        Ok(FileMeta {
            estado: parts[self.estado_segment].to_string(),
            desonerado,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insumo_desonerado() {
        let meta = INSUMO_FILENAME
            .extract("SINAPI_Preco_Ref_Insumos_SP_202401_Desonerado.csv")
            .unwrap();
        assert_eq!(meta.estado, "SP");
        assert!(meta.desonerado);
    }

    #[test]
    fn test_insumo_nao_desonerado() {
        let meta = INSUMO_FILENAME
            .extract("SINAPI_Preco_Ref_Insumos_SC_202401_NaoDesonerado.csv")
            .unwrap();
        assert_eq!(meta.estado, "SC");
        assert!(!meta.desonerado);
    }

    #[test]
    fn test_composicao_segmentos_deslocados() {
        // A família de composições tem um segmento a mais ("Analitico")
        let meta = COMPOSICAO_FILENAME
            .extract("SINAPI_Custo_Ref_Composicoes_Analitico_RJ_202401_Desonerado.csv")
            .unwrap();
        assert_eq!(meta.estado, "RJ");
        assert!(meta.desonerado);
    }

    #[test]
    fn test_nome_com_poucos_segmentos_falha() {
        let result = INSUMO_FILENAME.extract("SINAPI_Insumos.csv");
        assert!(matches!(
            result,
            Err(NormalizeError::FilenameFormat { actual: 2, .. })
        ));
    }
}
