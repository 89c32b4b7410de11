// ============================================================================
// Decimal Value
// Exact arbitrary-precision base-10 numbers: digits × 10^exponent
// ============================================================================

use super::errors::{NumericError, NumericResult};
use smallvec::SmallVec;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Neg;

/// Digit storage. Most literals fit inline without a heap allocation.
pub(crate) type Digits = SmallVec<[u8; 32]>;

/// Largest scale a `rust_decimal::Decimal` can carry.
const MAX_DECIMAL_SCALE: u64 = 28;

/// Integer digits of `rust_decimal::Decimal::MAX`.
const MAX_DECIMAL_DIGITS: i64 = 29;

/// Largest exponent magnitude a value can be built with.
///
/// [`DecimalValue::from_digits`] and parsing reject anything outside
/// `-MAX_EXPONENT..=MAX_EXPONENT`, and multiplication reports a product
/// exponent outside it as `Overflow`. Canonical forms may exceed it by the
/// number of folded trailing zeros, which keeps all exponent arithmetic far
/// from `i64` limits.
pub const MAX_EXPONENT: i64 = i32::MAX as i64;

/// Exact decimal number.
///
/// The value is `digits × 10^exponent`, with `digits` read as a base-10
/// integer, most-significant digit first:
///
/// - `12.34` is digits `[1, 2, 3, 4]`, exponent `-2`
/// - `1234000` is digits `[1, 2, 3, 4]`, exponent `3`
///
/// Values are immutable: every operation returns a new value. Two values with
/// different digit/exponent splits can denote the same number; equality,
/// ordering and hashing work on the canonical form
/// (see [`DecimalValue::normalize_zeros_into_exponent`]).
///
/// # Example
/// ```
/// use decimal_literals::numeric::DecimalValue;
///
/// let price: DecimalValue = "12.5".parse().unwrap();
/// let total = price.checked_mul(&DecimalValue::from(4)).unwrap();
/// assert_eq!(total.to_display_string(), "50.0");
/// assert_eq!(total, DecimalValue::from(50));
/// ```
#[derive(Clone)]
pub struct DecimalValue {
    digits: Digits,
    exponent: i64,
    negative: bool,
}

impl DecimalValue {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Trusted constructor for digit sequences produced inside the crate.
    ///
    /// An empty sequence becomes `[0]`, and zero never keeps the negative sign.
    pub(crate) fn from_raw(digits: Digits, exponent: i64, negative: bool) -> Self {
        let mut digits = digits;
        if digits.is_empty() {
            digits.push(0);
        }
        let negative = negative && digits.iter().any(|&d| d != 0);
        Self {
            digits,
            exponent,
            negative,
        }
    }

    /// Create from explicit digits, exponent and sign.
    ///
    /// # Errors
    /// Returns `InvalidInput` if `digits` is empty, holds a value above 9, or
    /// `exponent` lies outside `±MAX_EXPONENT`.
    pub fn from_digits(digits: &[u8], exponent: i64, negative: bool) -> NumericResult<Self> {
        if digits.is_empty() || digits.iter().any(|&d| d > 9) {
            return Err(NumericError::InvalidInput);
        }
        if exponent.unsigned_abs() > MAX_EXPONENT.unsigned_abs() {
            return Err(NumericError::InvalidInput);
        }
        Ok(Self::from_raw(Digits::from_slice(digits), exponent, negative))
    }

    /// Zero (`[0]`, exponent 0).
    pub fn zero() -> Self {
        Self::from_raw(smallvec::smallvec![0], 0, false)
    }

    /// One (`[1]`, exponent 0).
    pub fn one() -> Self {
        Self::from_raw(smallvec::smallvec![1], 0, false)
    }

    /// Ten, stored as `[1]` with exponent 1.
    pub fn ten() -> Self {
        Self::from_raw(smallvec::smallvec![1], 1, false)
    }

    fn from_magnitude(magnitude: u128, negative: bool) -> Self {
        let mut reversed = Digits::new();
        let mut rest = magnitude;
        loop {
            reversed.push((rest % 10) as u8);
            rest /= 10;
            if rest == 0 {
                break;
            }
        }
        reversed.reverse();
        Self::from_raw(reversed, 0, negative)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Digit values, most-significant first.
    #[inline]
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// Power of ten applied to the digit sequence.
    #[inline]
    pub fn exponent(&self) -> i64 {
        self.exponent
    }

    /// Check if value is negative.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Check if value is zero, whatever its exponent.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.digits.iter().all(|&d| d == 0)
    }

    /// Get absolute value.
    pub fn abs(&self) -> Self {
        self.with_sign(false)
    }

    /// Same digits and exponent with the given sign.
    pub(crate) fn with_sign(&self, negative: bool) -> Self {
        Self::from_raw(self.digits.clone(), self.exponent, negative)
    }

    // ========================================================================
    // Normalization
    // ========================================================================

    /// Move a positive exponent into trailing zero digits.
    ///
    /// `[1, 2]` with exponent 3 becomes `[1, 2, 0, 0, 0]` with exponent 0.
    /// Values with a zero or negative exponent are returned unchanged.
    pub fn normalize_zeros_into_digits(&self) -> Self {
        if self.exponent <= 0 {
            return self.clone();
        }
        let mut digits = self.digits.clone();
        digits.extend(std::iter::repeat(0).take(self.exponent as usize));
        Self::from_raw(digits, 0, self.negative)
    }

    /// Canonical form: trailing zeros folded into the exponent, leading zeros
    /// stripped, at least one digit kept.
    ///
    /// Zero is always `[0]` with exponent 0.
    pub fn normalize_zeros_into_exponent(&self) -> Self {
        let Some(last) = self.digits.iter().rposition(|&d| d != 0) else {
            return Self::zero();
        };
        let first = self.digits.iter().position(|&d| d != 0).unwrap_or(last);
        let trailing = (self.digits.len() - 1 - last) as i64;
        Self::from_raw(
            Digits::from_slice(&self.digits[first..=last]),
            self.exponent + trailing,
            self.negative,
        )
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Numeric equality on the canonical forms.
    pub fn is_equal(&self, other: &Self) -> bool {
        let left = self.normalize_zeros_into_exponent();
        let right = other.normalize_zeros_into_exponent();
        left.exponent == right.exponent
            && left.negative == right.negative
            && left.digits == right.digits
    }

    /// Strictly-less-than, sign first and then magnitude.
    pub fn is_less_than(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Less
    }

    // ========================================================================
    // Rendering
    // ========================================================================

    /// Render as plain decimal text.
    ///
    /// The decimal point is placed where the exponent implies it; when it
    /// falls before the first digit a `0.` prefix and padding zeros are
    /// synthesized (`[1, 1]` with exponent -3 renders `0.011`). Redundant
    /// leading zeros of the integer part are dropped, fractional digits are
    /// kept as stored.
    pub fn to_display_string(&self) -> String {
        let expanded = self.normalize_zeros_into_digits();
        let digit_chars: String = expanded
            .digits
            .iter()
            .map(|&d| char::from(b'0' + d))
            .collect();

        let (integer, fraction) = if expanded.exponent >= 0 {
            (digit_chars, String::new())
        } else {
            let fraction_len = expanded.exponent.unsigned_abs() as usize;
            if fraction_len >= digit_chars.len() {
                let padding = "0".repeat(fraction_len - digit_chars.len());
                (String::new(), padding + &digit_chars)
            } else {
                let split = digit_chars.len() - fraction_len;
                (
                    digit_chars[..split].to_string(),
                    digit_chars[split..].to_string(),
                )
            }
        };

        let integer = integer.trim_start_matches('0');
        let mut out = String::with_capacity(integer.len() + fraction.len() + 3);
        if expanded.negative {
            out.push('-');
        }
        out.push_str(if integer.is_empty() { "0" } else { integer });
        if !fraction.is_empty() {
            out.push('.');
            out.push_str(&fraction);
        }
        out
    }

    // ========================================================================
    // Native Conversions
    // ========================================================================

    /// Convert to `i64`, truncating any fractional digits toward zero.
    ///
    /// # Errors
    /// Returns `Overflow` if the integer part does not fit an `i64`.
    pub fn to_i64(&self) -> NumericResult<i64> {
        let expanded = self.normalize_zeros_into_digits();
        let keep = if expanded.exponent < 0 {
            expanded
                .digits
                .len()
                .saturating_sub(expanded.exponent.unsigned_abs() as usize)
        } else {
            expanded.digits.len()
        };

        let mut magnitude: i128 = 0;
        for &digit in &expanded.digits[..keep] {
            magnitude = magnitude
                .checked_mul(10)
                .and_then(|m| m.checked_add(i128::from(digit)))
                .ok_or(NumericError::Overflow)?;
        }
        let signed = if expanded.negative {
            -magnitude
        } else {
            magnitude
        };
        i64::try_from(signed).map_err(|_| NumericError::Overflow)
    }

    /// Convert from rust_decimal::Decimal.
    ///
    /// Intended for API boundaries; every `Decimal` is exactly representable.
    pub fn from_decimal(d: rust_decimal::Decimal) -> Self {
        let mantissa = d.mantissa();
        Self::from_magnitude(mantissa.unsigned_abs(), mantissa < 0)
            .with_exponent(-i64::from(d.scale()))
    }

    /// Convert to rust_decimal::Decimal.
    ///
    /// # Errors
    /// - `PrecisionLoss` if more than 28 fractional digits are significant
    /// - `Overflow` if the digits exceed the 96-bit mantissa
    pub fn to_decimal(&self) -> NumericResult<rust_decimal::Decimal> {
        let canonical = self.normalize_zeros_into_exponent();
        if canonical.exponent + canonical.digits.len() as i64 > MAX_DECIMAL_DIGITS {
            return Err(NumericError::Overflow);
        }
        let canonical = canonical.normalize_zeros_into_digits();
        let scale = canonical.exponent.unsigned_abs();
        if scale > MAX_DECIMAL_SCALE {
            return Err(NumericError::PrecisionLoss);
        }

        let mut mantissa: i128 = 0;
        for &digit in canonical.digits.iter() {
            mantissa = mantissa
                .checked_mul(10)
                .and_then(|m| m.checked_add(i128::from(digit)))
                .ok_or(NumericError::Overflow)?;
        }
        if canonical.negative {
            mantissa = -mantissa;
        }
        rust_decimal::Decimal::try_from_i128_with_scale(mantissa, scale as u32)
            .map_err(|_| NumericError::Overflow)
    }

    fn with_exponent(mut self, exponent: i64) -> Self {
        self.exponent = exponent;
        self
    }
}

// ============================================================================
// Digit Helpers
// Shared by comparison and the arithmetic primitives
// ============================================================================

/// Digit at `position` counted from the least-significant end, `None` past the
/// most-significant digit.
#[inline]
pub(crate) fn digit_from_back(digits: &[u8], position: usize) -> Option<u8> {
    digits
        .len()
        .checked_sub(position + 1)
        .map(|index| digits[index])
}

/// Drop leading zeros, keeping at least one digit.
pub(crate) fn strip_leading_zeros(digits: &[u8]) -> Digits {
    match digits.iter().position(|&d| d != 0) {
        Some(first) => Digits::from_slice(&digits[first..]),
        None => smallvec::smallvec![0],
    }
}

/// Bring both digit sequences to the smaller of the two exponents by padding
/// the larger-exponent operand with trailing zeros.
pub(crate) fn align_exponents(a: &DecimalValue, b: &DecimalValue) -> (Digits, Digits, i64) {
    let exponent = a.exponent.min(b.exponent);
    let pad = |value: &DecimalValue| {
        let mut digits = value.digits.clone();
        digits.extend(std::iter::repeat(0).take((value.exponent - exponent) as usize));
        digits
    };
    (pad(a), pad(b), exponent)
}

/// Compare absolute values.
///
/// Values of different magnitude are decided by the position of their most
/// significant digit, so only operands of the same magnitude get padded.
pub(crate) fn compare_magnitude(a: &DecimalValue, b: &DecimalValue) -> Ordering {
    let (a, b) = (
        a.normalize_zeros_into_exponent(),
        b.normalize_zeros_into_exponent(),
    );
    match (a.is_zero(), b.is_zero()) {
        (true, true) => return Ordering::Equal,
        (true, false) => return Ordering::Less,
        (false, true) => return Ordering::Greater,
        (false, false) => {},
    }
    let magnitude = |value: &DecimalValue| value.exponent + value.digits.len() as i64;
    match magnitude(&a).cmp(&magnitude(&b)) {
        Ordering::Equal => {},
        decided => return decided,
    }

    let (left, right, _) = align_exponents(&a, &b);
    let width = left.len().max(right.len());
    for position in (0..width).rev() {
        let l = digit_from_back(&left, position).unwrap_or(0);
        let r = digit_from_back(&right, position).unwrap_or(0);
        match l.cmp(&r) {
            Ordering::Equal => continue,
            decided => return decided,
        }
    }
    Ordering::Equal
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for DecimalValue {
    fn default() -> Self {
        Self::zero()
    }
}

impl PartialEq for DecimalValue {
    fn eq(&self, other: &Self) -> bool {
        self.is_equal(other)
    }
}

impl Eq for DecimalValue {}

impl PartialOrd for DecimalValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DecimalValue {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => compare_magnitude(self, other),
            (true, true) => compare_magnitude(other, self),
        }
    }
}

impl Hash for DecimalValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let canonical = self.normalize_zeros_into_exponent();
        canonical.digits.hash(state);
        canonical.exponent.hash(state);
        canonical.negative.hash(state);
    }
}

impl Neg for DecimalValue {
    type Output = Self;

    fn neg(self) -> Self::Output {
        let negative = !self.negative;
        Self::from_raw(self.digits, self.exponent, negative)
    }
}

impl Neg for &DecimalValue {
    type Output = DecimalValue;

    fn neg(self) -> Self::Output {
        self.with_sign(!self.negative)
    }
}

impl From<i64> for DecimalValue {
    fn from(value: i64) -> Self {
        Self::from_magnitude(u128::from(value.unsigned_abs()), value < 0)
    }
}

impl From<i32> for DecimalValue {
    fn from(value: i32) -> Self {
        Self::from(i64::from(value))
    }
}

impl From<u32> for DecimalValue {
    fn from(value: u32) -> Self {
        Self::from_magnitude(u128::from(value), false)
    }
}

impl From<u64> for DecimalValue {
    fn from(value: u64) -> Self {
        Self::from_magnitude(u128::from(value), false)
    }
}

impl From<rust_decimal::Decimal> for DecimalValue {
    fn from(d: rust_decimal::Decimal) -> Self {
        Self::from_decimal(d)
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for DecimalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DecimalValue({}, digits={:?}, exponent={})",
            self,
            self.digits.as_slice(),
            self.exponent
        )
    }
}

impl fmt::Display for DecimalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_display_string())
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl std::str::FromStr for DecimalValue {
    type Err = NumericError;

    /// Parse plain decimal text.
    ///
    /// # Examples
    /// - "123" -> digits [1,2,3], exponent 0
    /// - "-0.50" -> digits [0,5,0], exponent -2, negative
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (negative, body) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s.strip_prefix('+').unwrap_or(s)),
        };

        let (int_str, frac_str) = match body.split_once('.') {
            Some((int_part, frac_part)) => (int_part, frac_part),
            None => (body, ""),
        };
        if int_str.is_empty() && frac_str.is_empty() {
            return Err(NumericError::InvalidInput);
        }
        if frac_str.len() as u64 > MAX_EXPONENT.unsigned_abs() {
            return Err(NumericError::InvalidInput);
        }

        let mut digits = Digits::with_capacity(int_str.len() + frac_str.len());
        for ch in int_str.chars().chain(frac_str.chars()) {
            let digit = ch.to_digit(10).ok_or(NumericError::InvalidInput)?;
            digits.push(digit as u8);
        }

        Ok(Self::from_raw(digits, -(frac_str.len() as i64), negative))
    }
}

// ============================================================================
// Serialization
// Values travel as their display string
// ============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for DecimalValue {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_display_string())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for DecimalValue {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn dv(digits: &[u8], exponent: i64, negative: bool) -> DecimalValue {
        DecimalValue::from_digits(digits, exponent, negative).unwrap()
    }

    #[test]
    fn test_constants() {
        assert_eq!(DecimalValue::zero().digits(), &[0]);
        assert_eq!(DecimalValue::one().digits(), &[1]);
        assert_eq!(DecimalValue::ten().digits(), &[1]);
        assert_eq!(DecimalValue::ten().exponent(), 1);
        assert_eq!(DecimalValue::ten(), DecimalValue::from(10));
    }

    #[test]
    fn test_from_digits_invalid() {
        assert_eq!(
            DecimalValue::from_digits(&[], 0, false),
            Err(NumericError::InvalidInput)
        );
        assert_eq!(
            DecimalValue::from_digits(&[1, 10], 0, false),
            Err(NumericError::InvalidInput)
        );
    }

    #[test]
    fn test_from_digits_exponent_range() {
        assert!(DecimalValue::from_digits(&[1], MAX_EXPONENT, false).is_ok());
        assert!(DecimalValue::from_digits(&[1], -MAX_EXPONENT, true).is_ok());
        for exponent in [MAX_EXPONENT + 1, -MAX_EXPONENT - 1, i64::MAX, i64::MIN] {
            assert_eq!(
                DecimalValue::from_digits(&[1, 0], exponent, false),
                Err(NumericError::InvalidInput)
            );
        }
    }

    #[test]
    fn test_compare_far_apart_exponents() {
        let high = dv(&[1, 0], MAX_EXPONENT, false);
        let low = dv(&[2], -MAX_EXPONENT, false);

        assert!(high.is_equal(&dv(&[1, 0, 0], MAX_EXPONENT - 1, false)));
        assert!(low.is_less_than(&high));
        assert!(!high.is_less_than(&low));
        assert!(dv(&[2], 10, false).is_less_than(&high));
        assert!((-&high).is_less_than(&-&low));
        assert_eq!(low.cmp(&dv(&[2, 0], -MAX_EXPONENT, false)), Ordering::Less);
    }

    #[test]
    fn test_zero_is_never_negative() {
        let z = dv(&[0, 0], 2, true);
        assert!(!z.is_negative());
        assert!(z.is_zero());
        assert!(!(-DecimalValue::zero()).is_negative());
    }

    #[test]
    fn test_from_i64() {
        let x = DecimalValue::from(-1234);
        assert_eq!(x.digits(), &[1, 2, 3, 4]);
        assert_eq!(x.exponent(), 0);
        assert!(x.is_negative());

        let min = DecimalValue::from(i64::MIN);
        assert_eq!(min.to_display_string(), "-9223372036854775808");
    }

    #[test]
    fn test_normalize_zeros_into_digits() {
        let x = dv(&[1, 2], 3, false).normalize_zeros_into_digits();
        assert_eq!(x.digits(), &[1, 2, 0, 0, 0]);
        assert_eq!(x.exponent(), 0);

        let y = dv(&[1, 2], -1, false).normalize_zeros_into_digits();
        assert_eq!(y.digits(), &[1, 2]);
        assert_eq!(y.exponent(), -1);
    }

    #[test]
    fn test_normalize_zeros_into_exponent() {
        let x = dv(&[0, 1, 2, 0, 3, 0, 0], 0, false).normalize_zeros_into_exponent();
        assert_eq!(x.digits(), &[1, 2, 0, 3]);
        assert_eq!(x.exponent(), 2);

        let y = dv(&[1, 5, 0], -2, true).normalize_zeros_into_exponent();
        assert_eq!(y.digits(), &[1, 5]);
        assert_eq!(y.exponent(), -1);
        assert!(y.is_negative());

        let z = dv(&[0, 0, 0], -5, false).normalize_zeros_into_exponent();
        assert_eq!(z.digits(), &[0]);
        assert_eq!(z.exponent(), 0);
    }

    #[test]
    fn test_is_equal_across_splits() {
        let a = dv(&[1, 2, 3], 2, false);
        let b = dv(&[1, 2, 3, 0, 0], 0, false);
        let c = dv(&[1, 2, 3, 0, 0, 0], -1, false);
        assert!(a.is_equal(&b));
        assert!(a.is_equal(&c));
        assert!(!a.is_equal(&a.abs().with_sign(true)));
        assert!(dv(&[0], 3, false).is_equal(&dv(&[0, 0], -2, true)));
    }

    #[test]
    fn test_is_less_than() {
        let small = DecimalValue::from(65);
        let large = dv(&[7, 1], 0, false);
        assert!(small.is_less_than(&large));
        assert!(!large.is_less_than(&small));
        assert!(!small.is_less_than(&small));

        // different exponents, same magnitude region
        let tenth = dv(&[1], -1, false);
        let hundredth = dv(&[1, 0], -3, false);
        assert!(hundredth.is_less_than(&tenth));

        // negatives invert the magnitude comparison
        let minus_two = DecimalValue::from(-2);
        let minus_three = DecimalValue::from(-3);
        assert!(minus_three.is_less_than(&minus_two));
        assert!(minus_two.is_less_than(&DecimalValue::zero()));
        assert!(DecimalValue::zero().is_less_than(&DecimalValue::one()));
    }

    #[test]
    fn test_display_string_exponent_walk() {
        let cases = [(-1, "1.1"), (-2, "0.11"), (-3, "0.011"), (-4, "0.0011")];
        for (exponent, expected) in cases {
            assert_eq!(dv(&[1, 1], exponent, false).to_display_string(), expected);
        }
    }

    #[test]
    fn test_display_string() {
        assert_eq!(DecimalValue::ten().to_display_string(), "10");
        assert_eq!(dv(&[1, 2], 3, true).to_display_string(), "-12000");
        assert_eq!(dv(&[0, 0, 7], 0, false).to_display_string(), "7");
        assert_eq!(dv(&[1, 5, 0], -2, false).to_display_string(), "1.50");
        assert_eq!(dv(&[5], -1, true).to_display_string(), "-0.5");
        assert_eq!(DecimalValue::zero().to_display_string(), "0");
        assert_eq!(format!("{}", dv(&[4, 2], -1, false)), "4.2");
    }

    #[test]
    fn test_from_str() {
        let x: DecimalValue = "123.456".parse().unwrap();
        assert_eq!(x.digits(), &[1, 2, 3, 4, 5, 6]);
        assert_eq!(x.exponent(), -3);

        let y: DecimalValue = "-0.001".parse().unwrap();
        assert!(y.is_negative());
        assert_eq!(y.to_display_string(), "-0.001");

        let z: DecimalValue = ".5".parse().unwrap();
        assert_eq!(z.to_display_string(), "0.5");
    }

    #[test]
    fn test_from_str_invalid() {
        for text in ["", "-", ".", "1.2.3", "12a", "1_000"] {
            let result: Result<DecimalValue, _> = text.parse();
            assert_eq!(result, Err(NumericError::InvalidInput), "{}", text);
        }
    }

    #[test]
    fn test_to_i64() {
        assert_eq!(DecimalValue::from(-42).to_i64(), Ok(-42));
        assert_eq!(dv(&[4, 2], 2, false).to_i64(), Ok(4200));
        assert_eq!(dv(&[1, 2, 9], -1, true).to_i64(), Ok(-12));
        assert_eq!(dv(&[9], -3, false).to_i64(), Ok(0));
        assert_eq!(DecimalValue::from(i64::MIN).to_i64(), Ok(i64::MIN));
        assert_eq!(dv(&[1], 19, false).to_i64(), Err(NumericError::Overflow));
    }

    #[test]
    fn test_decimal_round_trip() {
        use rust_decimal::Decimal;

        let d = Decimal::new(-12345, 2); // -123.45
        let x = DecimalValue::from_decimal(d);
        assert_eq!(x.to_display_string(), "-123.45");
        assert_eq!(x.to_decimal().unwrap(), d);
    }

    #[test]
    fn test_to_decimal_limits() {
        assert_eq!(
            dv(&[1], -29, false).to_decimal(),
            Err(NumericError::PrecisionLoss)
        );
        assert_eq!(dv(&[1], 40, false).to_decimal(), Err(NumericError::Overflow));
        assert_eq!(
            dv(&[1], MAX_EXPONENT, true).to_decimal(),
            Err(NumericError::Overflow)
        );
        // trailing zeros beyond the scale limit are not significant
        assert!(dv(&[1, 0, 0], -30, false).to_decimal().is_ok());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_as_display_string() {
        let value = dv(&[1, 2, 5, 0], -2, true);
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, "\"-12.50\"");

        let back: DecimalValue = serde_json::from_str(&json).unwrap();
        assert_eq!(back, value);
        assert!(serde_json::from_str::<DecimalValue>("\"1_0\"").is_err());
    }

    #[test]
    fn test_hash_follows_equality() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(dv(&[1, 2, 3], 2, false));
        assert!(set.contains(&dv(&[1, 2, 3, 0, 0], 0, false)));
        assert!(!set.contains(&dv(&[1, 2, 3], 1, false)));
    }
}
