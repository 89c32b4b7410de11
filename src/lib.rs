// ============================================================================
// Decimal Literals Library
// Numeric literal scanner with exact arbitrary-precision decimal arithmetic
// ============================================================================

//! # Decimal Literals
//!
//! Recognizes numeric literals in source text and evaluates them to exact
//! decimal values.
//!
//! ## Features
//!
//! - **Ordered literal recognition**: scientific, based (`16#ff`), float,
//!   grouped (`1_000`), plain integer and character (`$a`) literals
//! - **Syntax diagnostics** for malformed literals, reported as spans
//! - **Exact decimal arithmetic** with truncating division and remainder
//! - **Pluggable event handlers** for logging and diagnostics collection
//!
//! ## Example
//!
//! ```rust
//! use decimal_literals::prelude::*;
//! use std::sync::Arc;
//!
//! let reader = LiteralReader::new(
//!     NumericLiteralScanner::new(),
//!     LiteralEvaluator::new(),
//!     Arc::new(NoOpEventHandler),
//! );
//!
//! let output = reader.read("Total = 16#ff + 1_000 + 2.5e-1.");
//! let values: Vec<&DecimalValue> = output.values().collect();
//! assert_eq!(values.len(), 3);
//!
//! let sum = values.iter().fold(DecimalValue::zero(), |acc, v| &acc + *v);
//! assert_eq!(sum.to_display_string(), "1255.25");
//!
//! let (quotient, remainder) = DecimalValue::from(-9).div_rem(&DecimalValue::from(7)).unwrap();
//! assert_eq!((quotient.to_i64(), remainder.to_i64()), (Ok(-1), Ok(-2)));
//! ```

pub mod domain;
pub mod engine;
pub mod evaluator;
pub mod interfaces;
pub mod numeric;
pub mod scanner;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{LiteralKind, LiteralSpan, ScannerConfig};
    pub use crate::engine::{
        create_from_config, LiteralReader, LiteralReaderBuilder, ReadLiteral, ReadOutput,
    };
    pub use crate::evaluator::LiteralEvaluator;
    pub use crate::interfaces::{
        LiteralMatcher, LoggingEventHandler, NoOpEventHandler, ScanEvent, ScanEventHandler,
    };
    pub use crate::numeric::{DecimalValue, NumericError, NumericResult};
    pub use crate::scanner::{NumericLiteralScanner, ScanOutput};
}
