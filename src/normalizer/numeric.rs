// ==========================================
// Normalizador SINAPI - Normalização numérica de localidade
// ==========================================
// Convenção dos extratos: '.' separa milhar, ',' separa decimal
// ("1.234,56" => 1234.56). Valor não interpretável vira 0.0 por
// política (a linha sobrevive com o campo zerado)
// ==========================================

use tracing::warn;

/// Converte um número no formato pt-BR para f64.
///
/// Remove todos os '.', troca ',' por '.' e interpreta como f64;
/// qualquer falha resulta em 0.0.
pub fn parse_decimal_br(raw: &str) -> f64 {
    let cleaned = raw.trim().replace('.', "").replace(',', ".");
    cleaned.parse::<f64>().unwrap_or(0.0)
}

/// Normalizador numérico com rastreamento opcional de coerções a zero
pub struct NumericNormalizer {
    warn_on_zeroed: bool,
}

impl NumericNormalizer {
    pub fn new(warn_on_zeroed: bool) -> Self {
        Self { warn_on_zeroed }
    }

    /// Interpreta o valor de uma coluna numérica.
    ///
    /// Com `warn_on_zeroed` ligado, valores não vazios que foram
    /// coagidos a 0.0 por falha de interpretação geram um aviso
    /// com o contexto da coluna.
    pub fn parse(&self, raw: &str, column: &str, filename: &str) -> f64 {
        let value = parse_decimal_br(raw);

        if self.warn_on_zeroed && value == 0.0 {
            let trimmed = raw.trim();
            if !trimmed.is_empty() && parse_decimal_br_strict(trimmed).is_none() {
                warn!(
                    file = %filename,
                    column = %column,
                    raw = %trimmed,
                    "valor numérico não interpretável coagido a zero"
                );
            }
        }

        value
    }
}

fn parse_decimal_br_strict(raw: &str) -> Option<f64> {
    raw.replace('.', "").replace(',', ".").parse::<f64>().ok()
}
