// ============================================================================
// Scanner Configuration
// Marker characters of the literal syntax
// ============================================================================

use crate::numeric::{NumericError, NumericResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Characters that shape the numeric literal syntax.
///
/// The default is the Erlang-style syntax: `1_000`, `16#ff`, `1.5e-3`, `$a`,
/// `$\n`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScannerConfig {
    /// Digit grouping separator (`1_000`)
    pub grouping_separator: char,

    /// Separates the radix from the digits of a based integer (`16#ff`)
    pub radix_marker: char,

    /// Separates integer and fractional part of a float (`1.5`)
    pub decimal_point: char,

    /// Opens a character literal (`$a`)
    pub char_opener: char,

    /// Introduces an escape inside a character literal (`$\n`)
    pub escape_marker: char,

    /// Accept `E` as well as `e` as the exponent marker
    pub allow_uppercase_exponent: bool,
}

impl ScannerConfig {
    /// Builder method: Set grouping separator
    pub fn with_grouping_separator(mut self, separator: char) -> Self {
        self.grouping_separator = separator;
        self
    }

    /// Builder method: Set radix marker
    pub fn with_radix_marker(mut self, marker: char) -> Self {
        self.radix_marker = marker;
        self
    }

    /// Builder method: Set decimal point
    pub fn with_decimal_point(mut self, point: char) -> Self {
        self.decimal_point = point;
        self
    }

    /// Builder method: Set char literal opener
    pub fn with_char_opener(mut self, opener: char) -> Self {
        self.char_opener = opener;
        self
    }

    /// Builder method: Set escape marker
    pub fn with_escape_marker(mut self, marker: char) -> Self {
        self.escape_marker = marker;
        self
    }

    /// Builder method: Accept or reject `E` as exponent marker
    pub fn with_uppercase_exponent(mut self, allow: bool) -> Self {
        self.allow_uppercase_exponent = allow;
        self
    }

    /// Marker characters paired with their role, for validation and messages.
    fn markers(&self) -> [(&'static str, char); 5] {
        [
            ("grouping separator", self.grouping_separator),
            ("radix marker", self.radix_marker),
            ("decimal point", self.decimal_point),
            ("char opener", self.char_opener),
            ("escape marker", self.escape_marker),
        ]
    }

    /// Validate the configuration
    pub fn validate(&self) -> NumericResult<()> {
        let markers = self.markers();

        for (role, marker) in markers {
            if !marker.is_ascii_punctuation() {
                return Err(NumericError::InvalidConfig(format!(
                    "{} '{}' must be ASCII punctuation",
                    role, marker
                )));
            }
        }

        // exponent signs would make scientific literals ambiguous
        for (role, marker) in &markers[..3] {
            if *marker == '+' || *marker == '-' {
                return Err(NumericError::InvalidConfig(format!(
                    "{} cannot be a sign character",
                    role
                )));
            }
        }

        for (i, (role, marker)) in markers.iter().enumerate() {
            if let Some((other, _)) = markers[i + 1..].iter().find(|(_, m)| m == marker) {
                return Err(NumericError::InvalidConfig(format!(
                    "{} and {} are both '{}'",
                    role, other, marker
                )));
            }
        }

        Ok(())
    }

    /// Whether `c` marks the exponent of a scientific literal.
    #[inline]
    pub fn is_exponent_marker(&self, c: char) -> bool {
        c == 'e' || (self.allow_uppercase_exponent && c == 'E')
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl ScannerConfig {
    /// Erlang-style literal syntax
    /// - `_` groups digits
    /// - `#` separates radix and digits
    /// - `$` opens a character literal, `\` escapes
    /// - both `e` and `E` mark an exponent
    pub fn erlang() -> Self {
        Self {
            grouping_separator: '_',
            radix_marker: '#',
            decimal_point: '.',
            char_opener: '$',
            escape_marker: '\\',
            allow_uppercase_exponent: true,
        }
    }

    /// Erlang-style syntax accepting only lowercase `e` as exponent marker
    pub fn lowercase_exponent() -> Self {
        Self::erlang().with_uppercase_exponent(false)
    }
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self::erlang()
    }
}
