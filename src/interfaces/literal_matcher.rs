// ============================================================================
// Literal Matcher Interface
// Defines the contract for one entry of the scanner's dispatch table
// ============================================================================

use crate::domain::{LiteralKind, ScannerConfig};

/// One literal form the scanner can recognize.
///
/// The scanner holds an ordered table of matchers and asks each in turn; the
/// first that reports a match decides the span. Implementations only measure
/// the text, validation happens afterwards on the matched run.
pub trait LiteralMatcher: Send + Sync {
    /// Kind assigned to text this matcher accepts
    fn kind(&self) -> LiteralKind;

    /// Match a literal starting at `start`
    ///
    /// # Arguments
    /// * `chars` - The whole character sequence
    /// * `start` - Position of the first character to consider
    /// * `config` - Marker characters of the literal syntax
    ///
    /// # Returns
    /// Exclusive end of the longest match, `None` if nothing matches. A
    /// returned end is always greater than `start`.
    fn match_at(&self, chars: &[char], start: usize, config: &ScannerConfig) -> Option<usize>;

    /// Get the matcher name for logging
    fn name(&self) -> &str {
        self.kind().name()
    }
}
