// ==========================================
// Normalizador SINAPI - Camada de domínio
// ==========================================
// Registros planos das três tabelas de destino + união etiquetada
// de preço do insumo
// ==========================================

pub mod composicao;
pub mod insumo;

pub use composicao::{ComposicaoItemRow, ComposicaoRow};
pub use insumo::{Insumo, InsumoRow, PrecoInsumo, TipoInsumo};
