// ==========================================
// Normalizador SINAPI - Biblioteca principal
// ==========================================
// Normaliza os extratos CSV de referência do SINAPI (insumos,
// composições e itens de composição) em três tabelas planas,
// referencialmente consistentes, prontas para carga em banco
// relacional. Aquisição dos extratos e carga no banco ficam fora
// do escopo desta biblioteca
// ==========================================

// ==========================================
// Declaração dos módulos
// ==========================================

// Camada de domínio - registros das tabelas de destino
pub mod domain;

// Camada de normalização - as três etapas do pipeline
pub mod normalizer;

// Camada de configuração - caminhos e enumerações injetáveis
pub mod config;

// Sistema de log
pub mod logging;

// ==========================================
// Reexportação dos tipos centrais
// ==========================================

pub use config::PipelineConfig;
pub use domain::{ComposicaoItemRow, ComposicaoRow, Insumo, InsumoRow, PrecoInsumo, TipoInsumo};
pub use normalizer::{
    ComposicaoNormalizer, InsumoNormalizer, ItemNormalizer, NormalizeError, NormalizeResult,
    StageSummary,
};

// ==========================================
// Constantes do sistema
// ==========================================

// Versão da crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Edição do catálogo de origem etiquetada em cada linha de saída
pub const BASE_ID: u32 = 1;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
