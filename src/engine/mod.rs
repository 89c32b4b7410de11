// ============================================================================
// Engine Module
// Orchestrates scanning and evaluation over a whole source
// ============================================================================

mod literal_reader;

pub mod factory;

pub use factory::{create_from_config, LiteralReaderBuilder};
pub use literal_reader::{LiteralReader, ReadLiteral, ReadOutput};
