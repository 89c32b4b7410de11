// ============================================================================
// Domain Models Module
// Literal spans, literal kinds and scanner configuration
// ============================================================================

pub mod config;
pub mod literal;

pub use config::ScannerConfig;
pub use literal::{LiteralKind, LiteralSpan};
