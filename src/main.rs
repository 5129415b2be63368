// ==========================================
// Normalizador SINAPI - Executor de etapas
// ==========================================
// Uso:
//   sinapi-normalizer <insumos|composicoes|itens|all> [dir_fonte] [dir_saida]
//
// "all" roda as três etapas em sequência, repassando a lista de
// permissão de composições em memória para a etapa de itens
// ==========================================

use anyhow::{bail, Context, Result};
use sinapi_normalizer::normalizer::StageSummary;
use sinapi_normalizer::{ComposicaoNormalizer, InsumoNormalizer, ItemNormalizer, PipelineConfig};

fn main() -> Result<()> {
    sinapi_normalizer::logging::init();

    let mut args = std::env::args().skip(1);
    let stage = args
        .next()
        .context("informe a etapa: insumos | composicoes | itens | all")?;
    let source_dir = args.next().unwrap_or_else(|| "CSV".to_string());
    let output_dir = args.next().unwrap_or_else(|| ".".to_string());

    let config = PipelineConfig::new(&source_dir, &output_dir);

    tracing::info!(
        version = sinapi_normalizer::VERSION,
        stage = %stage,
        source_dir = %source_dir,
        output_dir = %output_dir,
        "normalizador SINAPI"
    );

    match stage.as_str() {
        "insumos" => {
            report("insumos", &InsumoNormalizer::new(config).run()?);
        }
        "composicoes" => {
            report("composicoes", &ComposicaoNormalizer::new(config).run()?);
        }
        "itens" => {
            report("itens", &ItemNormalizer::new(config).run()?);
        }
        "all" => {
            report("insumos", &InsumoNormalizer::new(config.clone()).run()?);

            // Repasse em memória: evita reler o arquivo recém-gravado
            let (composicoes, allow_list) =
                ComposicaoNormalizer::new(config.clone()).run_collecting()?;
            report("composicoes", &composicoes);

            report(
                "itens",
                &ItemNormalizer::new(config).run_with_allow_list(&allow_list)?,
            );
        }
        other => bail!("etapa desconhecida: {other} (use insumos | composicoes | itens | all)"),
    }

    Ok(())
}

fn report(stage: &str, summary: &StageSummary) {
    println!(
        "{}: {} arquivo(s) encontrados, {} processados, {} pulados, {} linha(s) gravadas{}",
        stage,
        summary.files_found,
        summary.files_processed,
        summary.files_skipped,
        summary.rows_written,
        summary
            .output
            .as_ref()
            .map(|p| format!(" em {}", p.display()))
            .unwrap_or_default()
    );
}
