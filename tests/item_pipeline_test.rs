// ==========================================
// Normalizador SINAPI - Testes da etapa de itens de composição
// ==========================================
// Pré-requisito entre etapas, filtragem referencial pela lista de
// permissão e idempotência da reexecução
// ==========================================


use sinapi_normalizer::{
    logging, ComposicaoNormalizer, ItemNormalizer, NormalizeError, PipelineConfig,
};
use std::collections::HashSet;
use tempfile::tempdir;
use test_helpers::{column, read_table, write_composicao_file};

fn setup() -> (tempfile::TempDir, tempfile::TempDir, PipelineConfig) {
    logging::init_test();
    let source = tempdir().unwrap();
    let output = tempdir().unwrap();
    let config = PipelineConfig::new(source.path(), output.path());
    (source, output, config)
}

/// Fixture do cenário entre etapas: composição 1001 (SP, retida) com
/// um detalhe próprio e um detalhe referenciando 9999, que só existe
/// em arquivo de UF não retida
fn write_cross_stage_fixture(source: &std::path::Path) {
    write_composicao_file(
        source,
        "SINAPI_Custo_Ref_Composicoes_Analitico_SP_202401_NaoDesonerado.csv",
        &[
            "1001,ALVENARIA DE VEDACAO,M2,\"1.500,00\",\"1.000,00\",\"500,00\",,,,,",
            "1001,ALVENARIA DE VEDACAO,M2,,,,INSUMO,88316,\"0,5000\",\"50,00\",\"25,00\"",
            "9999,COMPOSICAO NAO RETIDA,M2,,,,INSUMO,1379,\"1,0000\",\"2,00\",\"2,00\"",
        ],
    );
    write_composicao_file(
        source,
        "SINAPI_Custo_Ref_Composicoes_Analitico_AM_202401_NaoDesonerado.csv",
        &["9999,COMPOSICAO NAO RETIDA,M2,\"10,00\",\"5,00\",\"5,00\",,,,,"],
    );
}

#[test]
fn test_pre_requisito_ausente_falha_rapido() {
    let (_source, _output, config) = setup();

    let result = ItemNormalizer::new(config.clone()).run();
    assert!(matches!(
        result,
        Err(NormalizeError::MissingPrerequisite(_))
    ));
    assert!(!config.item_output_path().exists());
}

#[test]
fn test_cenario_entre_etapas() {
    let (source, _output, config) = setup();
    write_cross_stage_fixture(source.path());

    ComposicaoNormalizer::new(config.clone()).run().unwrap();
    let summary = ItemNormalizer::new(config.clone()).run().unwrap();
    assert_eq!(summary.rows_written, 1);

    let (headers, rows) = read_table(&config.item_output_path());
    assert_eq!(
        headers,
        vec![
            "codigo_composicao",
            "codigo_insumo",
            "tipo_item",
            "coeficiente",
            "preco_unitario",
            "custo_total"
        ]
    );
    assert_eq!(rows.len(), 1);

    let item = &rows[0];
    assert_eq!(column(&headers, item, "codigo_composicao"), "1001");
    assert_eq!(column(&headers, item, "codigo_insumo"), "88316");
    assert_eq!(column(&headers, item, "tipo_item"), "INSUMO");
    assert_eq!(
        column(&headers, item, "coeficiente").parse::<f64>().unwrap(),
        0.5
    );
    assert_eq!(
        column(&headers, item, "preco_unitario").parse::<f64>().unwrap(),
        50.0
    );
    assert_eq!(
        column(&headers, item, "custo_total").parse::<f64>().unwrap(),
        25.0
    );
}

#[test]
fn test_saida_e_subconjunto_da_lista_de_permissao() {
    let (source, _output, config) = setup();
    write_cross_stage_fixture(source.path());

    ComposicaoNormalizer::new(config.clone()).run().unwrap();
    ItemNormalizer::new(config.clone()).run().unwrap();

    let (comp_headers, comp_rows) = read_table(&config.composicao_output_path());
    let retidos: HashSet<String> = comp_rows
        .iter()
        .map(|r| column(&comp_headers, r, "codigo").to_string())
        .collect();

    let (item_headers, item_rows) = read_table(&config.item_output_path());
    for row in &item_rows {
        let codigo = column(&item_headers, row, "codigo_composicao");
        assert!(retidos.contains(codigo), "item órfão: {codigo}");
    }
}

#[test]
fn test_reexecucao_idempotente() {
    let (source, _output, config) = setup();
    write_cross_stage_fixture(source.path());

    ComposicaoNormalizer::new(config.clone()).run().unwrap();

    ItemNormalizer::new(config.clone()).run().unwrap();
    let primeira = std::fs::read(config.item_output_path()).unwrap();

    ItemNormalizer::new(config.clone()).run().unwrap();
    let segunda = std::fs::read(config.item_output_path()).unwrap();

    assert_eq!(primeira, segunda);
}

#[test]
fn test_repasse_da_lista_em_memoria() {
    let (source, _output, config) = setup();
    write_cross_stage_fixture(source.path());

    // Sem arquivo de composições em disco; a lista vem do chamador
    let allow_list: HashSet<String> = ["1001".to_string()].into_iter().collect();
    let summary = ItemNormalizer::new(config.clone())
        .run_with_allow_list(&allow_list)
        .unwrap();

    assert_eq!(summary.rows_written, 1);
    let (headers, rows) = read_table(&config.item_output_path());
    assert_eq!(column(&headers, &rows[0], "codigo_composicao"), "1001");
}

#[test]
fn test_nenhum_item_retido_nao_grava() {
    let (source, _output, config) = setup();
    write_cross_stage_fixture(source.path());

    let summary = ItemNormalizer::new(config.clone())
        .run_with_allow_list(&HashSet::new())
        .unwrap();

    assert_eq!(summary.rows_written, 0);
    assert!(summary.output.is_none());
    assert!(!config.item_output_path().exists());
}
