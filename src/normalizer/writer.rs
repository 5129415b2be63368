// ==========================================
// Normalizador SINAPI - Gravação das tabelas consolidadas
// ==========================================
// Saída: CSV UTF-8 com linha de cabeçalho, delimitador ',' e ordem
// de colunas fixada pelos structs de linha. Sobrescrita incondicional
// (reexecução idempotente, sem modo incremental)
// ==========================================

use crate::normalizer::error::NormalizeResult;
use serde::Serialize;
use std::path::Path;

/// Grava as linhas consolidadas de uma etapa.
///
/// O chamador só invoca esta função quando há ao menos uma linha;
/// etapa sem resultado não grava arquivo algum.
pub fn write_table<T: Serialize>(path: &Path, rows: &[T]) -> NormalizeResult<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ComposicaoItemRow;
    use tempfile::tempdir;

    #[test]
    fn test_write_table_cabecalho_e_linhas() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("saida.csv");

        let rows = vec![ComposicaoItemRow {
            codigo_composicao: "1001".to_string(),
            codigo_insumo: "88316".to_string(),
            tipo_item: "INSUMO".to_string(),
            coeficiente: 0.5,
            preco_unitario: 50.0,
            custo_total: 25.0,
        }];
        write_table(&path, &rows).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next().unwrap(),
            "codigo_composicao,codigo_insumo,tipo_item,coeficiente,preco_unitario,custo_total"
        );
        assert_eq!(lines.next().unwrap(), "1001,88316,INSUMO,0.5,50.0,25.0");
    }

    #[test]
    fn test_write_table_sobrescreve() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("saida.csv");

        let linha = |codigo: &str| ComposicaoItemRow {
            codigo_composicao: codigo.to_string(),
            codigo_insumo: "1".to_string(),
            tipo_item: "INSUMO".to_string(),
            coeficiente: 1.0,
            preco_unitario: 1.0,
            custo_total: 1.0,
        };

        write_table(&path, &[linha("1001"), linha("1002")]).unwrap();
        write_table(&path, &[linha("2001")]).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 2);
        assert!(content.contains("2001"));
        assert!(!content.contains("1001"));
    }
}
