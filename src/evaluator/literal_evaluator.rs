// ============================================================================
// Literal Evaluator
// Converts scanned literal text into exact decimal values
// ============================================================================

use super::escapes::decode_escape;
use crate::domain::{LiteralKind, LiteralSpan, ScannerConfig};
use crate::numeric::{DecimalValue, Digits, NumericError, NumericResult};
use crate::scanner::{split_exponent, RADIX_RANGE};

/// Largest exponent magnitude accepted in scientific notation.
pub const MAX_EXPONENT_MAGNITUDE: u32 = 100_000;

/// Converts literal spans into [`DecimalValue`]s.
///
/// Integers and floats keep their digits as written (`12.50` stays
/// `[1, 2, 5, 0]` with exponent -2). Based integers are accumulated digit by
/// digit with decimal arithmetic only, so no radix/length combination can
/// overflow.
///
/// # Example
/// ```
/// use decimal_literals::prelude::*;
///
/// let evaluator = LiteralEvaluator::new();
/// let value = evaluator.evaluate_text("1_6#4_f", LiteralKind::BasedInteger).unwrap();
/// assert_eq!(value, DecimalValue::from(79));
///
/// let value = evaluator.evaluate_text("1.5e-3", LiteralKind::ScientificFloat).unwrap();
/// assert_eq!(value.to_display_string(), "0.0015");
/// ```
#[derive(Debug, Clone, Default)]
pub struct LiteralEvaluator {
    config: ScannerConfig,
}

impl LiteralEvaluator {
    /// Create an evaluator for the default literal syntax
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an evaluator for a custom literal syntax
    ///
    /// # Errors
    /// Returns `InvalidConfig` if the configuration fails validation.
    pub fn with_config(config: ScannerConfig) -> NumericResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ScannerConfig {
        &self.config
    }

    /// Evaluate a scanned span.
    ///
    /// # Errors
    /// - `SyntaxError` with the scanner diagnostic for a rejected span
    /// - any conversion error of [`LiteralEvaluator::evaluate_text`]
    pub fn evaluate(&self, span: &LiteralSpan) -> NumericResult<DecimalValue> {
        match span.diagnostic() {
            Some(diagnostic) => Err(NumericError::SyntaxError(diagnostic.to_string())),
            None => self.evaluate_text(&span.text, span.kind()),
        }
    }

    /// Evaluate literal text as the given kind.
    ///
    /// # Errors
    /// - `DigitConversion` for a character that is not a digit
    /// - `DigitOutOfRange` for a digit not below the radix
    /// - `BaseConversion` for an unusable radix
    /// - `Overflow` for an exponent above [`MAX_EXPONENT_MAGNITUDE`]
    /// - `InvalidInput` for text with no digits or a missing marker
    pub fn evaluate_text(&self, text: &str, kind: LiteralKind) -> NumericResult<DecimalValue> {
        let chars: Vec<char> = text.chars().collect();
        if kind == LiteralKind::CharLiteral {
            return self.char_literal(&chars);
        }

        let stripped: Vec<char> = chars
            .into_iter()
            .filter(|&c| c != self.config.grouping_separator)
            .collect();

        match kind {
            LiteralKind::Integer | LiteralKind::UnderscoredInteger | LiteralKind::Float => {
                self.decimal(&stripped)
            },
            LiteralKind::BasedInteger => self.based_integer(&stripped),
            LiteralKind::ScientificFloat => self.scientific(&stripped),
            LiteralKind::CharLiteral => self.char_literal(&stripped),
            LiteralKind::SyntaxError => Err(NumericError::SyntaxError(text.to_string())),
        }
    }

    // ========================================================================
    // Literal Forms
    // ========================================================================

    /// Decimal digits with an optional point; every digit after the point
    /// lowers the exponent by one.
    fn decimal(&self, chars: &[char]) -> NumericResult<DecimalValue> {
        let mut digits = Digits::with_capacity(chars.len());
        let mut exponent = 0i64;
        let mut after_point = false;

        for &c in chars {
            if c == self.config.decimal_point && !after_point {
                after_point = true;
                continue;
            }
            let digit = c
                .to_digit(10)
                .ok_or(NumericError::DigitConversion { character: c })?;
            digits.push(digit as u8);
            if after_point {
                exponent -= 1;
            }
        }

        if digits.is_empty() {
            return Err(NumericError::InvalidInput);
        }
        Ok(DecimalValue::from_raw(digits, exponent, false))
    }

    /// `radix # digits`, accumulated as Σ digit × radix^k.
    fn based_integer(&self, chars: &[char]) -> NumericResult<DecimalValue> {
        let marker = chars
            .iter()
            .position(|&c| c == self.config.radix_marker)
            .ok_or(NumericError::InvalidInput)?;
        let (radix_text, body) = (&chars[..marker], &chars[marker + 1..]);

        let (radix, radix_u32) = self.radix(radix_text)?;
        if body.is_empty() {
            return Err(NumericError::InvalidInput);
        }

        let mut value = DecimalValue::zero();
        for &c in body {
            let digit = c
                .to_digit(36)
                .map(DecimalValue::from)
                .ok_or(NumericError::DigitConversion { character: c })?;
            if digit >= radix {
                return Err(NumericError::DigitOutOfRange {
                    character: c,
                    radix: radix_u32,
                });
            }
            value = &value.checked_mul(&radix)? + &digit;
        }
        Ok(value)
    }

    /// Radix before the marker, as a decimal value and as a native integer
    /// for error reporting.
    fn radix(&self, text: &[char]) -> NumericResult<(DecimalValue, u32)> {
        let radix_string: String = text.iter().collect();
        let invalid = || NumericError::BaseConversion(radix_string.clone());

        if text.is_empty() || !text.iter().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        let radix = self.decimal(text)?;
        let lowest = DecimalValue::from(*RADIX_RANGE.start());
        let highest = DecimalValue::from(*RADIX_RANGE.end());
        if radix < lowest || radix > highest {
            return Err(invalid());
        }

        let native = radix
            .to_i64()
            .ok()
            .and_then(|r| u32::try_from(r).ok())
            .ok_or_else(invalid)?;
        Ok((radix, native))
    }

    /// `mantissa (e|E) (+|-) digits`; the mantissa is evaluated as a float or
    /// based integer and scaled by 10^(±digits).
    fn scientific(&self, chars: &[char]) -> NumericResult<DecimalValue> {
        let (mantissa_text, exponent_text) =
            split_exponent(chars, &self.config).ok_or(NumericError::InvalidInput)?;

        let mantissa = if mantissa_text.contains(&self.config.radix_marker) {
            self.based_integer(mantissa_text)?
        } else {
            self.decimal(mantissa_text)?
        };

        let (sign, magnitude_text) = exponent_text
            .split_first()
            .ok_or(NumericError::InvalidInput)?;
        let mut magnitude: u32 = 0;
        for &c in magnitude_text {
            let digit = c
                .to_digit(10)
                .ok_or(NumericError::DigitConversion { character: c })?;
            magnitude = magnitude
                .checked_mul(10)
                .and_then(|m| m.checked_add(digit))
                .filter(|&m| m <= MAX_EXPONENT_MAGNITUDE)
                .ok_or(NumericError::Overflow)?;
        }

        let power = power_of_ten(magnitude)?;
        let factor = if *sign == '-' {
            reciprocal_power(&power)
        } else {
            power
        };
        mantissa.checked_mul(&factor)
    }

    /// `$c` is the code point of `c`; `$\c` decodes the escape first.
    fn char_literal(&self, chars: &[char]) -> NumericResult<DecimalValue> {
        let escape = self.config.escape_marker;
        let character = match chars {
            [opener, escaped] if *opener == self.config.char_opener && *escaped == escape => escape,
            [opener, c] if *opener == self.config.char_opener => *c,
            [opener, marker, c] if *opener == self.config.char_opener && *marker == escape => {
                decode_escape(*c)
            },
            _ => return Err(NumericError::InvalidInput),
        };
        Ok(DecimalValue::from(u32::from(character)))
    }
}

/// 10^n by repeated multiplication by ten.
fn power_of_ten(n: u32) -> NumericResult<DecimalValue> {
    let ten = DecimalValue::ten();
    let mut power = DecimalValue::one();
    for _ in 0..n {
        power = power.checked_mul(&ten)?;
    }
    Ok(power)
}

/// 10^-n from 10^n: canonical form is `[1]` with exponent n, negate it.
fn reciprocal_power(power: &DecimalValue) -> DecimalValue {
    let canonical = power.normalize_zeros_into_exponent();
    DecimalValue::from_raw(
        Digits::from_slice(canonical.digits()),
        -canonical.exponent(),
        false,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::NumericLiteralScanner;
    use proptest::prelude::*;
    use rust_decimal::Decimal;

    fn eval(text: &str, kind: LiteralKind) -> NumericResult<DecimalValue> {
        LiteralEvaluator::new().evaluate_text(text, kind)
    }

    fn display(text: &str, kind: LiteralKind) -> String {
        eval(text, kind).unwrap().to_display_string()
    }

    #[test]
    fn test_based_integer() {
        assert_eq!(eval("16#4f", LiteralKind::BasedInteger), Ok(DecimalValue::from(79)));
        assert_eq!(eval("1_6#4_f", LiteralKind::BasedInteger), Ok(DecimalValue::from(79)));
        assert_eq!(eval("16#4F", LiteralKind::BasedInteger), Ok(DecimalValue::from(79)));
        assert_eq!(eval("2#1010", LiteralKind::BasedInteger), Ok(DecimalValue::from(10)));
        assert_eq!(eval("36#zz", LiteralKind::BasedInteger), Ok(DecimalValue::from(1295)));
        assert_eq!(
            display("16#ffffffffffffffffffffffffffffffff", LiteralKind::BasedInteger),
            "340282366920938463463374607431768211455"
        );
    }

    #[test]
    fn test_based_integer_errors() {
        assert_eq!(
            eval("8#19", LiteralKind::BasedInteger),
            Err(NumericError::DigitOutOfRange {
                character: '9',
                radix: 8
            })
        );
        assert_eq!(
            eval("16#4!", LiteralKind::BasedInteger),
            Err(NumericError::DigitConversion { character: '!' })
        );
        assert_eq!(
            eval("x#1", LiteralKind::BasedInteger),
            Err(NumericError::BaseConversion("x".to_string()))
        );
        assert_eq!(
            eval("37#1", LiteralKind::BasedInteger),
            Err(NumericError::BaseConversion("37".to_string()))
        );
        assert_eq!(eval("16#", LiteralKind::BasedInteger), Err(NumericError::InvalidInput));
    }

    #[test]
    fn test_decimal_forms_keep_digits() {
        let value = eval("12.50", LiteralKind::Float).unwrap();
        assert_eq!(value.digits(), &[1, 2, 5, 0]);
        assert_eq!(value.exponent(), -2);
        assert_eq!(display("1_000_000", LiteralKind::UnderscoredInteger), "1000000");
        assert_eq!(display("007", LiteralKind::Integer), "7");
        assert_eq!(
            eval("12a", LiteralKind::Integer),
            Err(NumericError::DigitConversion { character: 'a' })
        );
    }

    #[test]
    fn test_scientific() {
        assert_eq!(display("1.5e+3", LiteralKind::ScientificFloat), "1500");
        assert_eq!(display("1.5e-3", LiteralKind::ScientificFloat), "0.0015");
        assert_eq!(display("1_0.2_5E-1", LiteralKind::ScientificFloat), "1.025");
        assert_eq!(
            eval("2#101e+2", LiteralKind::ScientificFloat),
            Ok(DecimalValue::from(500))
        );
        assert_eq!(
            eval("16#4ee+4", LiteralKind::ScientificFloat),
            Ok(DecimalValue::from(780_000))
        );
        assert_eq!(
            eval("1.0e-0", LiteralKind::ScientificFloat),
            Ok(DecimalValue::one())
        );
    }

    #[test]
    fn test_scientific_errors() {
        assert_eq!(
            eval("1.5", LiteralKind::ScientificFloat),
            Err(NumericError::InvalidInput)
        );
        assert_eq!(
            eval("1.5e+100001", LiteralKind::ScientificFloat),
            Err(NumericError::Overflow)
        );
    }

    #[test]
    fn test_scientific_exponent_limit() {
        let smallest = eval("1.0e-100000", LiteralKind::ScientificFloat).unwrap();
        let canonical = smallest.normalize_zeros_into_exponent();
        assert_eq!(canonical.digits(), &[1]);
        assert_eq!(canonical.exponent(), -i64::from(MAX_EXPONENT_MAGNITUDE));

        for text in ["1.0e+100001", "1.0e-100001", "2#1e+4294967296"] {
            assert_eq!(
                eval(text, LiteralKind::ScientificFloat),
                Err(NumericError::Overflow),
                "{}",
                text
            );
        }
    }

    #[test]
    fn test_char_literals() {
        assert_eq!(eval("$a", LiteralKind::CharLiteral), Ok(DecimalValue::from(97)));
        assert_eq!(eval("$_", LiteralKind::CharLiteral), Ok(DecimalValue::from(95)));
        assert_eq!(eval("$\\n", LiteralKind::CharLiteral), Ok(DecimalValue::from(10)));
        assert_eq!(eval("$\\s", LiteralKind::CharLiteral), Ok(DecimalValue::from(32)));
        assert_eq!(eval("$\\z", LiteralKind::CharLiteral), Ok(DecimalValue::from(122)));
        assert_eq!(eval("$\\", LiteralKind::CharLiteral), Ok(DecimalValue::from(92)));
        assert_eq!(eval("$€", LiteralKind::CharLiteral), Ok(DecimalValue::from(0x20ac)));
        assert_eq!(eval("$", LiteralKind::CharLiteral), Err(NumericError::InvalidInput));
        assert_eq!(eval("a", LiteralKind::CharLiteral), Err(NumericError::InvalidInput));
    }

    #[test]
    fn test_syntax_error_span() {
        let scanner = NumericLiteralScanner::new();
        let chars: Vec<char> = "1__6".chars().collect();
        let span = scanner.scan(&chars, 0).unwrap();

        let result = LiteralEvaluator::new().evaluate(&span);
        assert_eq!(
            result,
            Err(NumericError::SyntaxError("doubled separator in 1__6".to_string()))
        );
    }

    #[test]
    fn test_custom_config() {
        let config = ScannerConfig::erlang()
            .with_grouping_separator('\'')
            .with_decimal_point(',');
        let evaluator = LiteralEvaluator::with_config(config).unwrap();
        let value = evaluator.evaluate_text("1'234,5", LiteralKind::Float).unwrap();
        assert_eq!(value.to_display_string(), "1234.5");
    }

    // ========================================================================
    // Property Tests
    // ========================================================================

    fn to_radix(mut n: u64, radix: u32) -> String {
        let mut out = Vec::new();
        loop {
            out.push(std::char::from_digit((n % u64::from(radix)) as u32, radix).unwrap());
            n /= u64::from(radix);
            if n == 0 {
                break;
            }
        }
        out.iter().rev().collect()
    }

    proptest! {
        #[test]
        fn prop_decimal_text_round_trip(mantissa in 0u64..u64::MAX, scale in 0u32..12) {
            let reference = Decimal::from_i128_with_scale(i128::from(mantissa), scale);
            let text = reference.to_string();
            let kind = if scale == 0 { LiteralKind::Integer } else { LiteralKind::Float };

            let value = eval(&text, kind).unwrap();
            prop_assert_eq!(value.to_display_string(), text);
            prop_assert_eq!(value, DecimalValue::from(reference));
        }

        #[test]
        fn prop_based_integer_matches_native(n in any::<u64>(), radix in 2u32..=36) {
            let text = format!("{}#{}", radix, to_radix(n, radix));
            let value = eval(&text, LiteralKind::BasedInteger).unwrap();
            prop_assert_eq!(value, DecimalValue::from(Decimal::from(n)));
        }

        #[test]
        fn prop_scanned_literal_evaluates(n in any::<u32>(), radix in 2u32..=36) {
            let source: Vec<char> = format!("X = {}#{}.", radix, to_radix(u64::from(n), radix))
                .chars()
                .collect();
            let span = NumericLiteralScanner::new().scan(&source, 4).unwrap();
            prop_assert_eq!(span.kind(), LiteralKind::BasedInteger);
            prop_assert_eq!(LiteralEvaluator::new().evaluate(&span), Ok(DecimalValue::from(n)));
        }
    }
}
