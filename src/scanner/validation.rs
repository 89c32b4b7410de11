// ============================================================================
// Literal Validation
// Checks applied to a matched run before its kind is final
// ============================================================================

use crate::domain::{LiteralKind, ScannerConfig};

/// Radixes a based integer may declare.
pub const RADIX_RANGE: std::ops::RangeInclusive<u32> = 2..=36;

/// Validate a matched literal.
///
/// Returns every problem found, in a fixed order; an empty list means the
/// text is a valid literal of `kind`.
pub fn validate(text: &[char], kind: LiteralKind, config: &ScannerConfig) -> Vec<String> {
    let literal: String = text.iter().collect();

    if kind == LiteralKind::SyntaxError {
        return vec![format!("no literal form matched {}", literal)];
    }
    if kind == LiteralKind::CharLiteral {
        return if text.len() < 2 {
            vec![format!("char literal without a character: {}", literal)]
        } else {
            Vec::new()
        };
    }

    let separator = config.grouping_separator;
    let followed_by = |first: char, second: char| text.windows(2).any(|w| w == [first, second]);
    let mut problems = Vec::new();

    if followed_by(separator, separator) {
        problems.push(format!("doubled separator in {}", literal));
    }
    if followed_by(separator, config.radix_marker) {
        problems.push(format!("separator before radix marker in {}", literal));
    }
    if followed_by(config.radix_marker, separator) {
        problems.push(format!("separator after radix marker in {}", literal));
    }
    if followed_by(separator, config.decimal_point) || followed_by(config.decimal_point, separator)
    {
        problems.push(format!("separator next to decimal point in {}", literal));
    }

    let mantissa = match kind {
        LiteralKind::ScientificFloat => split_exponent(text, config).map_or(text, |(m, _)| m),
        _ => text,
    };
    if kind == LiteralKind::ScientificFloat && mantissa.last() == Some(&separator) {
        problems.push(format!("separator before exponent in {}", literal));
    }
    if text.last() == Some(&separator) {
        problems.push(format!("trailing separator in {}", literal));
    }

    if let Some(marker) = mantissa.iter().position(|&c| c == config.radix_marker) {
        let (radix_text, body) = (&mantissa[..marker], &mantissa[marker + 1..]);
        check_radix_digits(radix_text, body, config, &literal, &mut problems);
    }

    problems
}

/// Split scientific text at the exponent marker into mantissa and signed
/// exponent digits. Markers are tried as `e+`, `e-`, `E+`, `E-`.
pub fn split_exponent<'a>(
    text: &'a [char],
    config: &ScannerConfig,
) -> Option<(&'a [char], &'a [char])> {
    let candidates = [('e', '+'), ('e', '-'), ('E', '+'), ('E', '-')];
    candidates
        .iter()
        .filter(|(marker, _)| config.is_exponent_marker(*marker))
        .find_map(|&(marker, sign)| {
            text.windows(2)
                .position(|w| w == [marker, sign])
                .map(|at| (&text[..at], &text[at + 1..]))
        })
}

fn check_radix_digits(
    radix_text: &[char],
    body: &[char],
    config: &ScannerConfig,
    literal: &str,
    problems: &mut Vec<String>,
) {
    let separator = config.grouping_separator;
    let radix_digits: String = radix_text.iter().filter(|&&c| c != separator).collect();

    let radix = match radix_digits.parse::<u32>() {
        Ok(radix) => radix,
        Err(_) => {
            problems.push(format!("invalid radix before radix marker in {}", literal));
            return;
        },
    };
    if !RADIX_RANGE.contains(&radix) {
        problems.push(format!(
            "radix {} out of range {}..={} in {}",
            radix,
            RADIX_RANGE.start(),
            RADIX_RANGE.end(),
            literal
        ));
        return;
    }

    for &c in body.iter().filter(|&&c| c != separator) {
        if c.to_digit(radix).is_none() {
            problems.push(format!(
                "digit '{}' out of range for radix {} in {}",
                c, radix, literal
            ));
        }
    }
}
