// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod event_handler;
mod literal_matcher;

pub use event_handler::{LoggingEventHandler, NoOpEventHandler, ScanEvent, ScanEventHandler};
pub use literal_matcher::LiteralMatcher;
