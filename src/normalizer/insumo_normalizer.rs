// ==========================================
// Normalizador SINAPI - Etapa 1: insumos
// ==========================================
// Fluxo: descoberta → por arquivo (metadados do nome → leitura →
// preço localizado → classificação) → consolidação → filtro de UFs
// → gravação
// ==========================================

use crate::config::PipelineConfig;
use crate::domain::{Insumo, InsumoRow};
use crate::normalizer::classifier::classify_preco;
use crate::normalizer::discovery::{discover_files, filename_of, INSUMO_FILE_PREFIX};
use crate::normalizer::error::NormalizeResult;
use crate::normalizer::file_parser::{FixedLayoutParser, INSUMO_HEADER_ROWS};
use crate::normalizer::filename_meta::INSUMO_FILENAME;
use crate::normalizer::numeric::NumericNormalizer;
use crate::normalizer::summary::StageSummary;
use crate::normalizer::writer::write_table;
use std::path::Path;
use tracing::{info, warn};

const COL_CODIGO: &str = "CODIGO";
const COL_DESCRICAO: &str = "DESCRICAO DO INSUMO";
const COL_UNIDADE: &str = "UNIDADE DE MEDIDA";
const COL_PRECO: &str = "PRECO MEDIANO R$";

/// Normalizador dos extratos de preços de insumos
pub struct InsumoNormalizer {
    config: PipelineConfig,
}

impl InsumoNormalizer {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Executa a etapa contra o diretório-fonte configurado.
    ///
    /// Erros por arquivo são registrados e o arquivo é pulado; só
    /// falhas fora do laço (ex.: diretório-fonte ilegível) abortam.
    pub fn run(&self) -> NormalizeResult<StageSummary> {
        let files = discover_files(&self.config.source_dir, INSUMO_FILE_PREFIX)?;
        if files.is_empty() {
            info!("nenhum arquivo de insumos encontrado no diretório-fonte");
            return Ok(StageSummary::empty(0, 0, 0));
        }

        info!(files = files.len(), "arquivos de insumos encontrados");

        let parser = FixedLayoutParser::new(INSUMO_HEADER_ROWS);
        let mut rows: Vec<InsumoRow> = Vec::new();
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
            info!("nenhum insumo restante após os filtros; nada a gravar");
            return Ok(StageSummary::empty(files.len(), processed, skipped));
        }

        let output = self.config.insumo_output_path();
        write_table(&output, &rows)?;
        info!(
            rows = rows.len(),
            output = %output.display(),
            "etapa de insumos concluída"
        );

        Ok(StageSummary {
            files_found: files.len(),
            files_processed: processed,
            files_skipped: skipped,
            rows_written: rows.len(),
            output: Some(output),
        })
    }

    fn normalize_file(
        &self,
        path: &Path,
        filename: &str,
        parser: &FixedLayoutParser,
    ) -> NormalizeResult<Vec<InsumoRow>> {
        let meta = INSUMO_FILENAME.extract(filename)?;
        let table = parser.parse(path)?;
        table.require_columns(&[COL_CODIGO, COL_DESCRICAO, COL_UNIDADE, COL_PRECO], filename)?;

        let numeric = NumericNormalizer::new(self.config.warn_on_zeroed);
        let mut rows = Vec::with_capacity(table.rows.len());

        for row in &table.rows {
            let descricao = row.get(COL_DESCRICAO).cloned().unwrap_or_default();
            let preco_unitario =
                numeric.parse(row.get(COL_PRECO).map(String::as_str).unwrap_or(""), COL_PRECO, filename);
            let preco = classify_preco(&descricao, preco_unitario, &self.config.labor_keywords);

            rows.push(
                Insumo {
                    codigo_item: row.get(COL_CODIGO).cloned().unwrap_or_default(),
                    descricao,
                    unidade: row.get(COL_UNIDADE).cloned().unwrap_or_default(),
                    preco,
                    estado: meta.estado.clone(),
                    desonerado: meta.desonerado,
                }
                .into(),
            );
        }

        Ok(rows)
    }
}
