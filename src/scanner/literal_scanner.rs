// ============================================================================
// Numeric Literal Scanner
// Ordered first-match dispatch over the matcher table
// ============================================================================

use super::matchers::default_matchers;
use super::validation::validate;
use crate::domain::{LiteralSpan, ScannerConfig};
use crate::interfaces::LiteralMatcher;
use crate::numeric::NumericResult;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of scanning a whole character sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScanOutput {
    /// Every literal found, in source order
    pub spans: Vec<LiteralSpan>,

    /// The source with each literal character replaced by a space
    pub residual: String,
}

impl ScanOutput {
    /// Spans that failed validation
    pub fn errors(&self) -> impl Iterator<Item = &LiteralSpan> {
        self.spans.iter().filter(|span| span.is_error())
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }
}

/// Recognizes numeric literals in a character sequence.
///
/// The matcher table is consulted in order and the first matcher that
/// accepts text at the position decides the span; later matchers are not
/// compared by length. The scanner holds no mutable state, so one instance
/// can serve any number of threads.
///
/// # Example
/// ```
/// use decimal_literals::prelude::*;
///
/// let scanner = NumericLiteralScanner::new();
/// let source: Vec<char> = "X = 16#4f.".chars().collect();
///
/// let span = scanner.scan(&source, 4).unwrap();
/// assert_eq!(span.kind(), LiteralKind::BasedInteger);
/// assert_eq!(span.text, "16#4f");
/// assert_eq!((span.start, span.end), (4, 8));
/// ```
pub struct NumericLiteralScanner {
    config: ScannerConfig,
    matchers: Vec<Box<dyn LiteralMatcher>>,
}

impl NumericLiteralScanner {
    /// Create a scanner for the default literal syntax
    pub fn new() -> Self {
        Self {
            config: ScannerConfig::default(),
            matchers: default_matchers(),
        }
    }

    /// Create a scanner for a custom literal syntax
    ///
    /// # Errors
    /// Returns `InvalidConfig` if the configuration fails validation.
    pub fn with_config(config: ScannerConfig) -> NumericResult<Self> {
        Self::with_matchers(config, default_matchers())
    }

    /// Create a scanner with a custom matcher table, consulted in order
    pub fn with_matchers(
        config: ScannerConfig,
        matchers: Vec<Box<dyn LiteralMatcher>>,
    ) -> NumericResult<Self> {
        config.validate()?;
        Ok(Self { config, matchers })
    }

    pub fn config(&self) -> &ScannerConfig {
        &self.config
    }

    /// Names of the matchers in dispatch order
    pub fn matcher_names(&self) -> Vec<&str> {
        self.matchers.iter().map(|m| m.name()).collect()
    }

    /// Scan one literal starting exactly at `position`.
    ///
    /// Returns `None` if no literal form starts there. A literal that fails
    /// validation is still returned, as a
    /// [`LiteralKind::SyntaxError`](crate::domain::LiteralKind::SyntaxError) span
    /// covering the whole matched text.
    pub fn scan(&self, chars: &[char], position: usize) -> Option<LiteralSpan> {
        if position >= chars.len() {
            return None;
        }

        let (matcher, end) = self.matchers.iter().find_map(|matcher| {
            matcher
                .match_at(chars, position, &self.config)
                .filter(|&end| end > position && end <= chars.len())
                .map(|end| (matcher, end))
        })?;

        let text = &chars[position..end];
        let literal: String = text.iter().collect();
        let problems = validate(text, matcher.kind(), &self.config);

        if problems.is_empty() {
            tracing::trace!(
                start = position,
                end = end - 1,
                kind = matcher.name(),
                "Literal recognized: {}",
                literal
            );
            Some(LiteralSpan::new(position, end - 1, matcher.kind(), literal))
        } else {
            let diagnostic = problems.join("; ");
            tracing::debug!(
                start = position,
                end = end - 1,
                matched = matcher.name(),
                "Syntax error in literal: {}",
                diagnostic
            );
            Some(LiteralSpan::syntax_error(
                position,
                end - 1,
                matcher.kind(),
                literal,
                diagnostic,
            ))
        }
    }

    /// Scan every literal in `chars`.
    ///
    /// A position directly after an identifier character that was not part
    /// of a literal is skipped, so `X1` or `Var_2` yield nothing. A decimal
    /// point right after a skipped digit keeps skipping, so `A1.5` yields
    /// nothing either.
    pub fn scan_all(&self, chars: &[char]) -> ScanOutput {
        let mut spans = Vec::new();
        let mut residual = String::with_capacity(chars.len());
        let mut inside_word = false;
        let mut position = 0;

        while position < chars.len() {
            let span = if inside_word {
                None
            } else {
                self.scan(chars, position)
            };

            match span {
                Some(span) => {
                    residual.extend(std::iter::repeat(' ').take(span.width()));
                    position = span.end + 1;
                    inside_word = false;
                    spans.push(span);
                },
                None => {
                    let c = chars[position];
                    residual.push(c);
                    inside_word = is_identifier_char(c)
                        || (inside_word
                            && c == self.config.decimal_point
                            && position > 0
                            && chars[position - 1].is_ascii_digit());
                    position += 1;
                },
            }
        }

        tracing::trace!(
            literals = spans.len(),
            chars = chars.len(),
            "Scanned character sequence"
        );
        ScanOutput { spans, residual }
    }

    /// Scan every literal in `source`; see [`NumericLiteralScanner::scan_all`].
    pub fn scan_str(&self, source: &str) -> ScanOutput {
        let chars: Vec<char> = source.chars().collect();
        self.scan_all(&chars)
    }
}

impl Default for NumericLiteralScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for NumericLiteralScanner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NumericLiteralScanner")
            .field("config", &self.config)
            .field("matchers", &self.matcher_names())
            .finish()
    }
}

/// Characters that continue an identifier in the host language.
fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '@'
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LiteralKind;

    fn chars(text: &str) -> Vec<char> {
        text.chars().collect()
    }

    fn scan_at(text: &str, position: usize) -> Option<LiteralSpan> {
        NumericLiteralScanner::new().scan(&chars(text), position)
    }

    #[test]
    fn test_scan_based_integer() {
        let span = scan_at("16#4f.", 0).unwrap();
        assert_eq!(span.kind(), LiteralKind::BasedInteger);
        assert_eq!((span.start, span.end), (0, 4));
        assert_eq!(span.text, "16#4f");

        let span = scan_at("1_6#4_f", 0).unwrap();
        assert_eq!(span.kind(), LiteralKind::BasedInteger);
        assert_eq!(span.end, 6);
    }

    #[test]
    fn test_scan_priority_order() {
        assert_eq!(scan_at("1.5e+3", 0).unwrap().kind(), LiteralKind::ScientificFloat);
        assert_eq!(scan_at("1.5e3", 0).unwrap().kind(), LiteralKind::Float);
        assert_eq!(scan_at("1.5e3", 0).unwrap().text, "1.5");
        assert_eq!(scan_at("1_000.", 0).unwrap().kind(), LiteralKind::UnderscoredInteger);
        assert_eq!(scan_at("42)", 0).unwrap().kind(), LiteralKind::Integer);
        assert_eq!(scan_at("$a", 0).unwrap().kind(), LiteralKind::CharLiteral);
        assert_eq!(scan_at("16#", 0).unwrap().text, "16");
    }

    #[test]
    fn test_scan_syntax_errors() {
        let span = scan_at("1__6", 0).unwrap();
        assert_eq!(span.kind(), LiteralKind::SyntaxError);
        assert_eq!(span.matched_kind(), LiteralKind::UnderscoredInteger);
        assert_eq!(span.text, "1__6");
        assert!(span.diagnostic().unwrap().contains("doubled separator"));

        let span = scan_at("1_6_ ", 0).unwrap();
        assert!(span.is_error());
        assert_eq!(span.text, "1_6_");

        let span = scan_at("1_6__", 0).unwrap();
        assert_eq!(
            span.diagnostic(),
            Some("doubled separator in 1_6__; trailing separator in 1_6__")
        );

        let span = scan_at("8#19", 0).unwrap();
        assert_eq!(span.matched_kind(), LiteralKind::BasedInteger);
        assert_eq!(
            span.diagnostic(),
            Some("digit '9' out of range for radix 8 in 8#19")
        );

        let span = scan_at("$", 0).unwrap();
        assert!(span.is_error());
        assert_eq!(span.matched_kind(), LiteralKind::CharLiteral);
    }

    #[test]
    fn test_scan_no_literal() {
        assert_eq!(scan_at("abc", 0), None);
        assert_eq!(scan_at("12", 2), None);
        assert_eq!(scan_at(".5", 0), None);
    }

    #[test]
    fn test_scan_all() {
        let scanner = NumericLiteralScanner::new();
        let output = scanner.scan_str("A = 16#4f + 1.5e-3, B = $a.");

        let texts: Vec<&str> = output.spans.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["16#4f", "1.5e-3", "$a"]);
        assert_eq!(output.residual, "A =       +       , B =   .");
        assert_eq!(output.residual.chars().count(), 27);
        assert!(!output.has_errors());
    }

    #[test]
    fn test_scan_all_skips_identifiers() {
        let output = NumericLiteralScanner::new().scan_str("X1 = Var_2 + foo@3 + 4");
        let texts: Vec<&str> = output.spans.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["4"]);
    }

    #[test]
    fn test_scan_all_skips_fraction_after_identifier() {
        let output = NumericLiteralScanner::new().scan_str("A1.5 + B.5 + 2.5, X1.");
        let texts: Vec<&str> = output.spans.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["5", "2.5"]);
        assert_eq!(output.spans[0].start, 9);
        assert!(output.residual.starts_with("A1.5 + B. "));
    }

    #[test]
    fn test_scan_all_adjacent_literals() {
        let output = NumericLiteralScanner::new().scan_str("$a1");
        let texts: Vec<&str> = output.spans.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["$a", "1"]);
        assert_eq!(output.residual, "   ");
    }

    #[test]
    fn test_scan_all_collects_errors() {
        let output = NumericLiteralScanner::new().scan_str("[1__6, 2]");
        assert_eq!(output.spans.len(), 2);
        assert!(output.has_errors());
        assert_eq!(output.errors().count(), 1);
    }

    #[test]
    fn test_custom_config() {
        let config = ScannerConfig::erlang()
            .with_grouping_separator('\'')
            .with_radix_marker(':');
        let scanner = NumericLiteralScanner::with_config(config).unwrap();
        let output = scanner.scan_str("16:ff 1'000");
        assert_eq!(output.spans[0].kind(), LiteralKind::BasedInteger);
        assert_eq!(output.spans[1].kind(), LiteralKind::UnderscoredInteger);
        assert_eq!(output.spans[1].text, "1'000");
    }

    struct ErrorKindMatcher;

    impl LiteralMatcher for ErrorKindMatcher {
        fn kind(&self) -> LiteralKind {
            LiteralKind::SyntaxError
        }

        fn match_at(
            &self,
            chars: &[char],
            start: usize,
            _config: &ScannerConfig,
        ) -> Option<usize> {
            (chars[start] == '?').then_some(start + 1)
        }
    }

    #[test]
    fn test_error_kind_matcher_gets_diagnostic() {
        let matchers: Vec<Box<dyn LiteralMatcher>> = vec![Box::new(ErrorKindMatcher)];
        let scanner =
            NumericLiteralScanner::with_matchers(ScannerConfig::default(), matchers).unwrap();
        let span = scanner.scan(&chars("?"), 0).unwrap();
        assert!(span.is_error());
        assert_eq!(span.diagnostic(), Some("no literal form matched ?"));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = ScannerConfig::erlang().with_decimal_point('#');
        assert!(NumericLiteralScanner::with_config(config).is_err());
    }

    #[test]
    fn test_custom_matcher_table() {
        use crate::scanner::IntegerMatcher;

        let matchers: Vec<Box<dyn LiteralMatcher>> = vec![Box::new(IntegerMatcher)];
        let scanner =
            NumericLiteralScanner::with_matchers(ScannerConfig::default(), matchers).unwrap();
        let span = scanner.scan(&chars("16#4f"), 0).unwrap();
        assert_eq!(span.kind(), LiteralKind::Integer);
        assert_eq!(span.text, "16");
        assert_eq!(scanner.matcher_names(), vec!["integer"]);
    }
}
