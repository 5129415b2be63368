// ==========================================
// Normalizador SINAPI - Tipos de erro do pipeline
// ==========================================
// Ferramenta: macro derive do thiserror
// ==========================================

use thiserror::Error;

/// Erros do pipeline de normalização
#[derive(Error, Debug)]
pub enum NormalizeError {
    // ===== Erros de pré-requisito =====
    #[error("arquivo pré-requisito não encontrado: {0} (execute a etapa de composições primeiro)")]
    MissingPrerequisite(String),

    // ===== Erros por arquivo (capturados e o arquivo é pulado) =====
    #[error("nome de arquivo fora da convenção: {filename} ({actual} segmentos, esperados ao menos {expected})")]
    FilenameFormat {
        filename: String,
        expected: usize,
        actual: usize,
    },

    #[error("falha de leitura de arquivo: {0}")]
    FileRead(String),

    #[error("falha ao interpretar CSV: {0}")]
    CsvParse(String),

    #[error("coluna esperada '{column}' ausente em {filename}")]
    MissingColumn { filename: String, column: String },

    // ===== Genérico =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<std::io::Error> for NormalizeError {
    fn from(err: std::io::Error) -> Self {
        NormalizeError::FileRead(err.to_string())
    }
}

impl From<csv::Error> for NormalizeError {
    fn from(err: csv::Error) -> Self {
        NormalizeError::CsvParse(err.to_string())
    }
}

/// Alias de Result do pipeline
pub type NormalizeResult<T> = Result<T, NormalizeError>;
