// ==========================================
// Normalizador SINAPI - Leitor dos extratos CSV
// ==========================================
// Layout fixo dos extratos publicados: N linhas de metadados antes
// do cabeçalho (6 p/ insumos, 5 p/ composições), codificação
// Latin-1, tudo lido como texto (números são tratados depois,
// para controlar a semântica de localidade)
// ==========================================

use crate::normalizer::error::{NormalizeError, NormalizeResult};
use csv::ReaderBuilder;
use std::collections::HashMap;
use std::path::Path;

/// Linhas de metadados antes do cabeçalho nos arquivos de insumos
pub const INSUMO_HEADER_ROWS: usize = 6;

/// Linhas de metadados antes do cabeçalho nos arquivos de composições
pub const COMPOSICAO_HEADER_ROWS: usize = 5;

/// Tabela crua de um extrato: cabeçalhos normalizados + linhas como texto
#[derive(Debug)]
pub struct ParsedTable {
    pub headers: Vec<String>,
    pub rows: Vec<HashMap<String, String>>,
}

impl ParsedTable {
    /// Garante a presença das colunas esperadas (erro por arquivo se faltar)
    pub fn require_columns(&self, columns: &[&str], filename: &str) -> NormalizeResult<()> {
        for col in columns {
            if !self.headers.iter().any(|h| h == col) {
                return Err(NormalizeError::MissingColumn {
                    filename: filename.to_string(),
                    column: col.to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Leitor de extrato com prefixo fixo de linhas de metadados
pub struct FixedLayoutParser {
    pub skip_rows: usize,
}

impl FixedLayoutParser {
    pub fn new(skip_rows: usize) -> Self {
        Self { skip_rows }
    }

    /// Lê o arquivo inteiro, decodifica de Latin-1, descarta o prefixo
    /// de metadados e interpreta o restante como CSV com cabeçalho.
    pub fn parse(&self, path: &Path) -> NormalizeResult<ParsedTable> {
        let bytes = std::fs::read(path)?;
        let text = encoding_rs::mem::decode_latin1(&bytes);
        let body = skip_lines(&text, self.skip_rows);

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(body.as_bytes());

        let headers = dedup_headers(reader.headers()?.iter());

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            let mut row = HashMap::new();

            for (idx, value) in record.iter().enumerate() {
                if let Some(header) = headers.get(idx) {
                    row.insert(header.clone(), value.trim().to_string());
                }
            }

            // Linhas totalmente vazias (rodapé dos extratos) são descartadas
            if row.values().all(|v| v.is_empty()) {
                continue;
            }

            rows.push(row);
        }

        Ok(ParsedTable { headers, rows })
    }
}

/// Descarta as primeiras `n` linhas do texto
fn skip_lines(text: &str, n: usize) -> &str {
    let mut rest = text;
    for _ in 0..n {
        match rest.find('\n') {
            Some(pos) => rest = &rest[pos + 1..],
            None => return "",
        }
    }
    rest
}

/// Normaliza cabeçalhos: TRIM + desambiguação de nomes repetidos.
///
/// O layout analítico repete "CUSTO TOTAL" (custo da composição e
/// custo do item); a segunda ocorrência vira "CUSTO TOTAL.1".
fn dedup_headers<'a>(raw: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut headers = Vec::new();

    for cell in raw {
        let name = cell.trim().to_string();
        let count = seen.entry(name.clone()).or_insert(0);
        if *count == 0 {
            headers.push(name.clone());
        } else {
            headers.push(format!("{}.{}", name, count));
        }
        *count += 1;
    }

    headers
}
