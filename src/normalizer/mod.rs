// ==========================================
// Normalizador SINAPI - Camada de normalização
// ==========================================
// Responsabilidade: transformar os extratos publicados nas três
// tabelas planas de importação
// Padrão por etapa: descobrir → interpretar/limpar/remodelar por
// arquivo → consolidar → filtrar por lista → gravar
// ==========================================

// Declaração dos módulos
pub mod classifier;
pub mod composicao_normalizer;
pub mod discovery;
pub mod error;
pub mod file_parser;
pub mod filename_meta;
pub mod insumo_normalizer;
pub mod item_normalizer;
pub mod numeric;
pub mod summary;
pub mod writer;

// Reexportação dos tipos centrais
pub use composicao_normalizer::ComposicaoNormalizer;
pub use discovery::{discover_files, COMPOSICAO_FILE_PREFIX, INSUMO_FILE_PREFIX};
pub use error::{NormalizeError, NormalizeResult};
pub use file_parser::{FixedLayoutParser, ParsedTable};
pub use filename_meta::{FileMeta, FilenameConvention};
pub use insumo_normalizer::InsumoNormalizer;
pub use item_normalizer::ItemNormalizer;
pub use numeric::parse_decimal_br;
pub use summary::StageSummary;
