// ==========================================
// Normalizador SINAPI - Resumo de execução de etapa
// ==========================================
// Superfície de reporte por etapa: contagens de arquivos e linhas,
// e o caminho da saída quando houve algo a gravar
// ==========================================

use std::path::PathBuf;

/// Resultado consolidado de uma execução de etapa
#[derive(Debug, Clone, Default)]
pub struct StageSummary {
    /// Arquivos-fonte encontrados pela descoberta
    pub files_found: usize,
    /// Arquivos interpretados com sucesso
    pub files_processed: usize,
    /// Arquivos pulados por erro (nome fora da convenção, CSV malformado...)
    pub files_skipped: usize,
    /// Linhas gravadas na saída após os filtros
    pub rows_written: usize,
    /// Caminho gravado; None quando a etapa não produziu nada
    pub output: Option<PathBuf>,
}

impl StageSummary {
    /// Resumo de etapa encerrada sem saída (nenhum arquivo ou nenhuma linha)
    pub fn empty(files_found: usize, files_processed: usize, files_skipped: usize) -> Self {
        StageSummary {
            files_found,
            files_processed,
            files_skipped,
            rows_written: 0,
            output: None,
        }
    }
}
