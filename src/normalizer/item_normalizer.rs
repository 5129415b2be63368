// ==========================================
// Normalizador SINAPI - Etapa 3: itens de composição
// ==========================================
// Relê os mesmos extratos analíticos da etapa 2, retendo só as
// linhas de detalhe cuja composição-mãe foi retida antes. A lista
// de permissão vem do arquivo de composições gravado (lotes
// independentes) ou de um conjunto em memória (mesmo processo)
// ==========================================

use crate::config::PipelineConfig;
use crate::domain::ComposicaoItemRow;
use crate::normalizer::composicao_normalizer::{
    is_header_row, COL_CODIGO_COMPOSICAO, COL_TIPO_ITEM,
};
use crate::normalizer::discovery::{discover_files, filename_of, COMPOSICAO_FILE_PREFIX};
use crate::normalizer::error::{NormalizeError, NormalizeResult};
use crate::normalizer::file_parser::{FixedLayoutParser, COMPOSICAO_HEADER_ROWS};
use crate::normalizer::numeric::NumericNormalizer;
use crate::normalizer::summary::StageSummary;
use crate::normalizer::writer::write_table;
use std::collections::HashSet;
use std::path::Path;
use tracing::{info, warn};

const COL_CODIGO_ITEM: &str = "CODIGO ITEM";
const COL_COEFICIENTE: &str = "COEFICIENTE";
const COL_PRECO_UNITARIO: &str = "PRECO UNITARIO";
// O layout repete "CUSTO TOTAL"; a ocorrência das linhas de detalhe
// recebe o sufixo .1 na normalização de cabeçalhos
const COL_CUSTO_TOTAL_ITEM: &str = "CUSTO TOTAL.1";

/// Normalizador das linhas de detalhe das composições
pub struct ItemNormalizer {
    config: PipelineConfig,
}

impl ItemNormalizer {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Executa a etapa carregando a lista de permissão do arquivo
    /// gravado pela etapa de composições.
    ///
    /// Falha rápido, sem trabalho parcial, se o arquivo pré-requisito
    /// não existir.
    pub fn run(&self) -> NormalizeResult<StageSummary> {
        let allow_list = self.load_allow_list()?;
        self.run_with_allow_list(&allow_list)
    }

    /// Executa a etapa com uma lista de permissão já em memória
    /// (repasse direto quando as etapas 2 e 3 rodam no mesmo processo)
    pub fn run_with_allow_list(&self, allow_list: &HashSet<String>) -> NormalizeResult<StageSummary> {
        let files = discover_files(&self.config.source_dir, COMPOSICAO_FILE_PREFIX)?;
        if files.is_empty() {
            info!("nenhum arquivo de composições encontrado no diretório-fonte");
            return Ok(StageSummary::empty(0, 0, 0));
        }

        info!(
            files = files.len(),
            allow_list = allow_list.len(),
            "arquivos de composições encontrados para extração de itens"
        );

        let parser = FixedLayoutParser::new(COMPOSICAO_HEADER_ROWS);
        let mut rows: Vec<ComposicaoItemRow> = Vec::new();
        let mut processed = 0usize;
        let mut skipped = 0usize;

        for path in &files {
            let filename = filename_of(path);
            match self.normalize_file(path, &filename, &parser, allow_list) {
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

        if rows.is_empty() {
            info!("nenhum item de composição restante após os filtros; nada a gravar");
            return Ok(StageSummary::empty(files.len(), processed, skipped));
        }

        let output = self.config.item_output_path();
        write_table(&output, &rows)?;
        info!(
            rows = rows.len(),
            output = %output.display(),
            "etapa de itens de composição concluída"
        );

        Ok(StageSummary {
            files_found: files.len(),
            files_processed: processed,
            files_skipped: skipped,
            rows_written: rows.len(),
            output: Some(output),
        })
    }

    /// Lê a coluna `codigo` da saída da etapa de composições
    fn load_allow_list(&self) -> NormalizeResult<HashSet<String>> {
        let path = self.config.composicao_output_path();
        if !path.exists() {
            return Err(NormalizeError::MissingPrerequisite(
                path.display().to_string(),
            ));
        }

        let mut reader = csv::Reader::from_path(&path)?;
        let headers = reader.headers()?.clone();
        let codigo_idx = headers
            .iter()
            .position(|h| h == "codigo")
            .ok_or_else(|| NormalizeError::MissingColumn {
                filename: path.display().to_string(),
                column: "codigo".to_string(),
            })?;

        let mut allow_list = HashSet::new();
        for record in reader.records() {
            let record = record?;
            if let Some(codigo) = record.get(codigo_idx) {
                allow_list.insert(codigo.to_string());
            }
        }

        Ok(allow_list)
    }

    fn normalize_file(
        &self,
        path: &Path,
        filename: &str,
        parser: &FixedLayoutParser,
        allow_list: &HashSet<String>,
    ) -> NormalizeResult<Vec<ComposicaoItemRow>> {
        let table = parser.parse(path)?;
        table.require_columns(
            &[
                COL_TIPO_ITEM,
                COL_CODIGO_COMPOSICAO,
                COL_CODIGO_ITEM,
                COL_COEFICIENTE,
                COL_PRECO_UNITARIO,
                COL_CUSTO_TOTAL_ITEM,
            ],
            filename,
        )?;

        let numeric = NumericNormalizer::new(self.config.warn_on_zeroed);
        let mut rows = Vec::new();

        for row in &table.rows {
            // Linha de cabeçalho pertence à etapa de composições
            if is_header_row(row.get(COL_TIPO_ITEM)) {
                continue;
            }

            // Item de composição filtrada na etapa anterior não é emitido
            let codigo_composicao = row.get(COL_CODIGO_COMPOSICAO).cloned().unwrap_or_default();
            if !allow_list.contains(&codigo_composicao) {
                continue;
            }

            let valor = |col: &str| -> f64 {
                numeric.parse(row.get(col).map(String::as_str).unwrap_or(""), col, filename)
            };

            rows.push(ComposicaoItemRow {
                codigo_composicao,
                codigo_insumo: row.get(COL_CODIGO_ITEM).cloned().unwrap_or_default(),
                tipo_item: row.get(COL_TIPO_ITEM).cloned().unwrap_or_default(),
                coeficiente: valor(COL_COEFICIENTE),
                preco_unitario: valor(COL_PRECO_UNITARIO),
                custo_total: valor(COL_CUSTO_TOTAL_ITEM),
            });
        }

        Ok(rows)
    }
}
