// ============================================================================
// Literal Matchers
// The scanner's dispatch table, most specific form first
// ============================================================================
//
// Every matcher greedily consumes its maximal run. Grouping separators follow
// one rule everywhere: a separator run stays inside the literal when a
// character of the current class follows it, and a trailing run is absorbed
// as well so that validation can report it (`1__6`, `1_6_` are one span).

use crate::domain::{LiteralKind, ScannerConfig};
use crate::interfaces::LiteralMatcher;

// ============================================================================
// Run Helpers
// ============================================================================

/// Exclusive end of a `class [separator class]*` run starting at `start`,
/// `None` if the character at `start` is not in the class.
///
/// `in_class` receives positions rather than characters so a run can stop
/// based on lookahead.
fn class_run(
    chars: &[char],
    start: usize,
    separator: char,
    in_class: impl Fn(usize) -> bool,
) -> Option<usize> {
    if start >= chars.len() || !in_class(start) {
        return None;
    }

    let mut pos = start + 1;
    loop {
        if pos < chars.len() && in_class(pos) {
            pos += 1;
            continue;
        }
        if pos < chars.len() && chars[pos] == separator {
            let mut after = pos;
            while after < chars.len() && chars[after] == separator {
                after += 1;
            }
            if after < chars.len() && in_class(after) {
                pos = after;
                continue;
            }
            // trailing separators belong to the literal
            return Some(after);
        }
        return Some(pos);
    }
}

/// `digit [_ digit]*`
fn decimal_run(chars: &[char], start: usize, config: &ScannerConfig) -> Option<usize> {
    class_run(chars, start, config.grouping_separator, |p| {
        chars[p].is_ascii_digit()
    })
}

/// `alnum [_ alnum]*` following a radix marker. A separator run directly after
/// the marker is taken into the run so validation can reject it.
fn radix_body_run(
    chars: &[char],
    start: usize,
    config: &ScannerConfig,
    stop_at_exponent: bool,
) -> Option<usize> {
    let in_class = |p: usize| {
        chars[p].is_ascii_alphanumeric() && !(stop_at_exponent && exponent_at(chars, p, config))
    };

    let mut first = start;
    while first < chars.len() && chars[first] == config.grouping_separator {
        first += 1;
    }
    if first < chars.len() && in_class(first) {
        class_run(chars, first, config.grouping_separator, in_class)
    } else {
        None
    }
}

/// Whether an exponent (`e` or `E`, a sign, a digit) begins at `pos`.
fn exponent_at(chars: &[char], pos: usize, config: &ScannerConfig) -> bool {
    pos + 2 < chars.len()
        && config.is_exponent_marker(chars[pos])
        && matches!(chars[pos + 1], '+' | '-')
        && chars[pos + 2].is_ascii_digit()
}

#[inline]
fn char_at(chars: &[char], pos: usize) -> Option<char> {
    chars.get(pos).copied()
}

// ============================================================================
// Matchers
// ============================================================================

/// `digits ('.' digits | '#' alnum) ('e'|'E') ('+'|'-') digits`
pub struct ScientificMatcher;

impl LiteralMatcher for ScientificMatcher {
    fn kind(&self) -> LiteralKind {
        LiteralKind::ScientificFloat
    }

    fn match_at(&self, chars: &[char], start: usize, config: &ScannerConfig) -> Option<usize> {
        let prefix_end = decimal_run(chars, start, config)?;
        let marker = char_at(chars, prefix_end)?;

        let body_end = if marker == config.decimal_point {
            decimal_run(chars, prefix_end + 1, config)?
        } else if marker == config.radix_marker {
            radix_body_run(chars, prefix_end + 1, config, true)?
        } else {
            return None;
        };

        if !exponent_at(chars, body_end, config) {
            return None;
        }
        decimal_run(chars, body_end + 2, config)
    }
}

/// `digits '#' alnum`
pub struct BasedIntegerMatcher;

impl LiteralMatcher for BasedIntegerMatcher {
    fn kind(&self) -> LiteralKind {
        LiteralKind::BasedInteger
    }

    fn match_at(&self, chars: &[char], start: usize, config: &ScannerConfig) -> Option<usize> {
        let prefix_end = decimal_run(chars, start, config)?;
        if char_at(chars, prefix_end)? != config.radix_marker {
            return None;
        }
        radix_body_run(chars, prefix_end + 1, config, false)
    }
}

/// `digits '.' digits`; a point not followed by a digit ends the match.
pub struct FloatMatcher;

impl LiteralMatcher for FloatMatcher {
    fn kind(&self) -> LiteralKind {
        LiteralKind::Float
    }

    fn match_at(&self, chars: &[char], start: usize, config: &ScannerConfig) -> Option<usize> {
        let integer_end = decimal_run(chars, start, config)?;
        if char_at(chars, integer_end)? != config.decimal_point {
            return None;
        }
        decimal_run(chars, integer_end + 1, config)
    }
}

/// `digits` holding at least one grouping separator.
pub struct UnderscoredIntegerMatcher;

impl LiteralMatcher for UnderscoredIntegerMatcher {
    fn kind(&self) -> LiteralKind {
        LiteralKind::UnderscoredInteger
    }

    fn match_at(&self, chars: &[char], start: usize, config: &ScannerConfig) -> Option<usize> {
        let end = decimal_run(chars, start, config)?;
        chars[start..end]
            .contains(&config.grouping_separator)
            .then_some(end)
    }
}

/// Maximal run of decimal digits.
pub struct IntegerMatcher;

impl LiteralMatcher for IntegerMatcher {
    fn kind(&self) -> LiteralKind {
        LiteralKind::Integer
    }

    fn match_at(&self, chars: &[char], start: usize, _config: &ScannerConfig) -> Option<usize> {
        let len = chars
            .get(start..)?
            .iter()
            .take_while(|c| c.is_ascii_digit())
            .count();
        (len > 0).then_some(start + len)
    }
}

/// `$` followed by one character, or by an escape and one character.
///
/// A lone `$` at the end of input still matches so the scanner can report it.
pub struct CharLiteralMatcher;

impl LiteralMatcher for CharLiteralMatcher {
    fn kind(&self) -> LiteralKind {
        LiteralKind::CharLiteral
    }

    fn match_at(&self, chars: &[char], start: usize, config: &ScannerConfig) -> Option<usize> {
        if char_at(chars, start)? != config.char_opener {
            return None;
        }
        match (char_at(chars, start + 1), char_at(chars, start + 2)) {
            (None, _) => Some(start + 1),
            (Some(c), Some(_)) if c == config.escape_marker => Some(start + 3),
            (Some(_), _) => Some(start + 2),
        }
    }
}

/// The dispatch table in priority order.
pub fn default_matchers() -> Vec<Box<dyn LiteralMatcher>> {
    vec![
        Box::new(ScientificMatcher),
        Box::new(BasedIntegerMatcher),
        Box::new(FloatMatcher),
        Box::new(UnderscoredIntegerMatcher),
        Box::new(IntegerMatcher),
        Box::new(CharLiteralMatcher),
    ]
}
