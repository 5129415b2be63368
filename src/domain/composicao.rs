// ==========================================
// Normalizador SINAPI - Entidades de composição
// ==========================================

use serde::Serialize;

/// Linha do arquivo de saída de composições (esquema de destino).
///
/// O conjunto dos valores de `codigo` retidos aqui define a lista
/// de permissão consumida pela etapa de itens.
#[derive(Debug, Clone, Serialize)]
pub struct ComposicaoRow {
    pub base_id: u32,
    pub codigo: String,
    pub descricao: String,
    pub unidade: String,
    pub custo_total_material: f64,
    pub valor_mao_de_obra: f64,
    pub custo_total: f64,
    pub estado: String,
    pub desonerado: bool,
}

/// Linha do arquivo de saída de itens de composição.
///
/// `codigo_composicao` referencia `ComposicaoRow.codigo`; a garantia
/// é por filtragem na etapa de itens, não por tipo.
#[derive(Debug, Clone, Serialize)]
pub struct ComposicaoItemRow {
    pub codigo_composicao: String,
    pub codigo_insumo: String,
    pub tipo_item: String,
    pub coeficiente: f64,
    pub preco_unitario: f64,
    pub custo_total: f64,
}
