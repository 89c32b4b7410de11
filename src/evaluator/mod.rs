// ============================================================================
// Evaluator Module
// Turns literal spans into exact decimal values
// ============================================================================

mod escapes;
mod literal_evaluator;

pub use escapes::decode_escape;
pub use literal_evaluator::{LiteralEvaluator, MAX_EXPONENT_MAGNITUDE};
