// ==========================================
// Normalizador SINAPI - Configuração do pipeline
// ==========================================
// Caminhos e enumerações fixas como struct injetável, para que as
// etapas rodem contra diretórios de fixture nos testes
// ==========================================

use crate::normalizer::classifier::MAO_DE_OBRA_KEYWORDS;
use std::path::{Path, PathBuf};

/// UFs retidas nas etapas de insumos e composições (a etapa de
/// itens herda o efeito pela lista de permissão)
pub const RETAINED_STATES: &[&str] = &["SC", "SP", "RS", "RJ", "PR"];

/// Nome do arquivo de saída da etapa de insumos
pub const INSUMO_OUTPUT_FILE: &str = "insumos_para_importar.csv";

/// Nome do arquivo de saída da etapa de composições
pub const COMPOSICAO_OUTPUT_FILE: &str = "composicoes_para_importar.csv";

/// Nome do arquivo de saída da etapa de itens de composição
pub const ITEM_OUTPUT_FILE: &str = "composicao_itens_temp.csv";

/// Configuração das três etapas de normalização
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Diretório com os extratos CSV publicados
    pub source_dir: PathBuf,
    /// Diretório onde os arquivos normalizados são gravados
    pub output_dir: PathBuf,
    /// UFs mantidas após a consolidação
    pub retained_states: Vec<String>,
    /// Termos ocupacionais do classificador de mão de obra
    pub labor_keywords: Vec<String>,
    /// Avisar quando um valor numérico não interpretável for coagido a zero
    pub warn_on_zeroed: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::new("CSV", ".")
    }
}

impl PipelineConfig {
    pub fn new(source_dir: impl AsRef<Path>, output_dir: impl AsRef<Path>) -> Self {
        PipelineConfig {
            source_dir: source_dir.as_ref().to_path_buf(),
            output_dir: output_dir.as_ref().to_path_buf(),
            retained_states: RETAINED_STATES.iter().map(|s| s.to_string()).collect(),
            labor_keywords: MAO_DE_OBRA_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            warn_on_zeroed: false,
        }
    }

    pub fn insumo_output_path(&self) -> PathBuf {
        self.output_dir.join(INSUMO_OUTPUT_FILE)
    }

    pub fn composicao_output_path(&self) -> PathBuf {
        self.output_dir.join(COMPOSICAO_OUTPUT_FILE)
    }

    pub fn item_output_path(&self) -> PathBuf {
        self.output_dir.join(ITEM_OUTPUT_FILE)
    }

    /// Predicado do filtro de UFs retidas
    pub fn retains_state(&self, estado: &str) -> bool {
        self.retained_states.iter().any(|s| s == estado)
    }
}
