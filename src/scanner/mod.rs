// ============================================================================
// Scanner Module
// Recognizes numeric literals in a character sequence
// ============================================================================

mod literal_scanner;
mod matchers;
mod validation;

pub use literal_scanner::{NumericLiteralScanner, ScanOutput};
pub use matchers::{
    default_matchers, BasedIntegerMatcher, CharLiteralMatcher, FloatMatcher, IntegerMatcher,
    ScientificMatcher, UnderscoredIntegerMatcher,
};
pub use validation::{split_exponent, validate, RADIX_RANGE};
