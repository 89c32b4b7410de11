// ============================================================================
// Numeric Module
// Exact arbitrary-precision decimal arithmetic
// ============================================================================
//
// This module provides:
// - DecimalValue: immutable digits × 10^exponent value type
// - Add/Sub operators, checked_mul and truncating div_rem
// - NumericError: Error types for conversion and arithmetic
//
// Design principles:
// - No floating-point operations
// - Fallible operations return Result (no panics)
// - Digit storage inline for typical literal sizes

mod arithmetic;
mod decimal_value;
mod errors;

pub use decimal_value::{DecimalValue, MAX_EXPONENT};
pub use errors::{NumericError, NumericResult};

pub(crate) use decimal_value::Digits;
