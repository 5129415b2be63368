// ==========================================
// Normalizador SINAPI - Descoberta de arquivos-fonte
// ==========================================
// Responsabilidade: localizar os extratos CSV de cada família
// pelo prefixo do nome do arquivo (sem inspecionar conteúdo)
// ==========================================

use crate::normalizer::error::NormalizeResult;
use std::path::{Path, PathBuf};

/// Prefixo dos extratos de preços de insumos
pub const INSUMO_FILE_PREFIX: &str = "SINAPI_Preco_Ref_Insumos_";

/// Prefixo dos extratos analíticos de composições
pub const COMPOSICAO_FILE_PREFIX: &str = "SINAPI_Custo_Ref_Composicoes_Analitico_";

/// Lista os arquivos `.csv` do diretório cujo nome começa com `prefix`.
///
/// O resultado vem ordenado por nome de arquivo, para que reexecuções
/// produzam a saída na mesma ordem (read_dir não garante ordem).
/// Zero arquivos não é erro; a etapa decide o que reportar.
pub fn discover_files(dir: &Path, prefix: &str) -> NormalizeResult<Vec<PathBuf>> {
    let mut matches = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let name = match path.file_name().and_then(|n| n.to_str()) {
            Some(n) => n,
            None => continue,
        };

        if name.starts_with(prefix) && name.ends_with(".csv") {
            matches.push(path);
        }
    }

    matches.sort();
    Ok(matches)
}

/// Nome do arquivo para logs e extração de metadados
pub fn filename_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
