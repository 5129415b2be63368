// ==========================================
// Normalizador SINAPI - Etapa 2: composições
// ==========================================
// Os extratos analíticos intercalam linhas de cabeçalho de composição
// e linhas de detalhe de item; a sentinela é a coluna TIPO ITEM,
// vazia nas linhas de cabeçalho. Esta etapa retém só os cabeçalhos
// ==========================================

use crate::config::PipelineConfig;
use crate::domain::ComposicaoRow;
use crate::normalizer::discovery::{discover_files, filename_of, COMPOSICAO_FILE_PREFIX};
use crate::normalizer::error::NormalizeResult;
use crate::normalizer::file_parser::{FixedLayoutParser, COMPOSICAO_HEADER_ROWS};
use crate::normalizer::filename_meta::COMPOSICAO_FILENAME;
use crate::normalizer::numeric::NumericNormalizer;
use crate::normalizer::summary::StageSummary;
use crate::normalizer::writer::write_table;
use crate::BASE_ID;
use std::collections::HashSet;
use std::path::Path;
use tracing::{info, warn};

pub(crate) const COL_TIPO_ITEM: &str = "TIPO ITEM";
pub(crate) const COL_CODIGO_COMPOSICAO: &str = "CODIGO DA COMPOSICAO";
const COL_DESCRICAO: &str = "DESCRICAO DA COMPOSICAO";
const COL_UNIDADE: &str = "UNIDADE";
const COL_CUSTO_TOTAL: &str = "CUSTO TOTAL";
const COL_CUSTO_MATERIAL: &str = "CUSTO MATERIAL";
const COL_CUSTO_MAO_DE_OBRA: &str = "CUSTO MAO DE OBRA";

/// Normalizador dos cabeçalhos de composição
pub struct ComposicaoNormalizer {
    config: PipelineConfig,
}

impl ComposicaoNormalizer {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Executa a etapa contra o diretório-fonte configurado
    pub fn run(&self) -> NormalizeResult<StageSummary> {
        self.run_collecting().map(|(summary, _)| summary)
    }

    /// Executa a etapa e devolve também o conjunto de códigos retidos,
    /// para repasse em memória à etapa de itens quando as duas rodam
    /// no mesmo processo
    pub fn run_collecting(&self) -> NormalizeResult<(StageSummary, HashSet<String>)> {
        let files = discover_files(&self.config.source_dir, COMPOSICAO_FILE_PREFIX)?;
        if files.is_empty() {
            info!("nenhum arquivo de composições encontrado no diretório-fonte");
            return Ok((StageSummary::empty(0, 0, 0), HashSet::new()));
        }

        info!(files = files.len(), "arquivos de composições encontrados");

        let parser = FixedLayoutParser::new(COMPOSICAO_HEADER_ROWS);
        let mut rows: Vec<ComposicaoRow> = Vec::new();
        let mut processed = 0usize;
        let mut skipped = 0usize;

        for path in &files {
            let filename = filename_of(path);
            match self.normalize_file(path, &filename, &parser) {
                Ok(mut file_rows) => {
                    info!(file = %filename, rows = file_rows.len(), "arquivo processado");
                    processed += 1;
                    rows.append(&mut file_rows);
                }
                Err(e) => {
                    warn!(file = %filename, error = %e, "erro ao processar arquivo; pulando");
                    skipped += 1;
                }
            }
        }

        rows.retain(|row| self.config.retains_state(&row.estado));

        if rows.is_empty() {
            info!("nenhuma composição restante após os filtros; nada a gravar");
            return Ok((
                StageSummary::empty(files.len(), processed, skipped),
                HashSet::new(),
            ));
        }

        let output = self.config.composicao_output_path();
        write_table(&output, &rows)?;
        info!(
            rows = rows.len(),
            output = %output.display(),
            "etapa de composições concluída"
        );

        let codigos = rows.iter().map(|row| row.codigo.clone()).collect();

        Ok((
            StageSummary {
                files_found: files.len(),
                files_processed: processed,
                files_skipped: skipped,
                rows_written: rows.len(),
                output: Some(output),
            },
            codigos,
        ))
    }

    fn normalize_file(
        &self,
        path: &Path,
        filename: &str,
        parser: &FixedLayoutParser,
    ) -> NormalizeResult<Vec<ComposicaoRow>> {
        let meta = COMPOSICAO_FILENAME.extract(filename)?;
        let table = parser.parse(path)?;
        table.require_columns(
            &[
                COL_TIPO_ITEM,
                COL_CODIGO_COMPOSICAO,
                COL_DESCRICAO,
                COL_UNIDADE,
                COL_CUSTO_TOTAL,
                COL_CUSTO_MATERIAL,
                COL_CUSTO_MAO_DE_OBRA,
            ],
            filename,
        )?;

        let numeric = NumericNormalizer::new(self.config.warn_on_zeroed);
        let mut rows = Vec::new();

        for row in &table.rows {
            // Linha de detalhe (TIPO ITEM preenchido) pertence à etapa de itens
            if !is_header_row(row.get(COL_TIPO_ITEM)) {
                continue;
            }

            let custo = |col: &str| -> f64 {
                numeric.parse(row.get(col).map(String::as_str).unwrap_or(""), col, filename)
            };

            rows.push(ComposicaoRow {
                base_id: BASE_ID,
                codigo: row.get(COL_CODIGO_COMPOSICAO).cloned().unwrap_or_default(),
                descricao: row.get(COL_DESCRICAO).cloned().unwrap_or_default(),
                unidade: row.get(COL_UNIDADE).cloned().unwrap_or_default(),
                custo_total_material: custo(COL_CUSTO_MATERIAL),
                valor_mao_de_obra: custo(COL_CUSTO_MAO_DE_OBRA),
                custo_total: custo(COL_CUSTO_TOTAL),
                estado: meta.estado.clone(),
                desonerado: meta.desonerado,
            });
        }

        Ok(rows)
    }
}

/// Sentinela do layout analítico: TIPO ITEM vazio marca cabeçalho
pub(crate) fn is_header_row(tipo_item: Option<&String>) -> bool {
    tipo_item.map(|v| v.is_empty()).unwrap_or(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_header_row() {
        assert!(is_header_row(None));
        assert!(is_header_row(Some(&String::new())));
        assert!(!is_header_row(Some(&"INSUMO".to_string())));
        assert!(!is_header_row(Some(&"COMPOSICAO".to_string())));
    }
}
