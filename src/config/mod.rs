// ==========================================
// Normalizador SINAPI - Camada de configuração
// ==========================================

pub mod pipeline;

pub use pipeline::{
    PipelineConfig, COMPOSICAO_OUTPUT_FILE, INSUMO_OUTPUT_FILE, ITEM_OUTPUT_FILE, RETAINED_STATES,
};
