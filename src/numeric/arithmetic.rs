// ============================================================================
// Decimal Arithmetic
// Digit-level add/sub/mul/div with truncating division semantics
// ============================================================================
//
// Every operator reduces its four sign combinations to a primitive that only
// sees non-negative magnitudes:
//
//   add:  (+,+) a+b     (+,-) a-|b|    (-,+) b-|a|     (-,-) -(|a|+|b|)
//   sub:  (+,+) a-b     (+,-) a+|b|    (-,+) -(|a|+b)  (-,-) |b|-|a|
//   mul:  |a|*|b|, sign is the XOR of the operand signs
//   div:  |a|/|b|, signs from the truncating-division table in `div_rem`

use super::decimal_value::{
    align_exponents, compare_magnitude, digit_from_back, strip_leading_zeros, DecimalValue,
    Digits, MAX_EXPONENT,
};
use super::errors::{NumericError, NumericResult};
use std::cmp::Ordering;
use std::ops::{Add, Sub};

// ============================================================================
// Signed Operations
// ============================================================================

impl DecimalValue {
    /// Exact sum.
    pub fn plus(&self, other: &Self) -> Self {
        match (self.is_negative(), other.is_negative()) {
            (false, false) => add_magnitudes(self, other),
            (false, true) => sub_magnitudes(self, &other.abs()),
            (true, false) => sub_magnitudes(other, &self.abs()),
            (true, true) => add_magnitudes(&self.abs(), &other.abs()).with_sign(true),
        }
    }

    /// Exact difference.
    pub fn minus(&self, other: &Self) -> Self {
        match (self.is_negative(), other.is_negative()) {
            (false, false) => sub_magnitudes(self, other),
            (false, true) => add_magnitudes(self, &other.abs()),
            (true, false) => add_magnitudes(&self.abs(), other).with_sign(true),
            (true, true) => sub_magnitudes(&other.abs(), &self.abs()),
        }
    }

    /// Exact product. The exponent of the result is the sum of the operand
    /// exponents.
    ///
    /// # Errors
    /// Returns `Overflow` if that sum falls outside `±MAX_EXPONENT`.
    pub fn checked_mul(&self, other: &Self) -> NumericResult<Self> {
        let negative = self.is_negative() != other.is_negative();
        Ok(mul_magnitudes(&self.abs(), &other.abs())?.with_sign(negative))
    }

    /// Truncating division, returning `(quotient, remainder)`.
    ///
    /// The quotient is rounded toward zero and the remainder takes the sign
    /// of the dividend, so `quotient × divisor + remainder == self`:
    ///
    /// | self | divisor | quotient | remainder |
    /// |------|---------|----------|-----------|
    /// | +    | +       | +        | +         |
    /// | +    | -       | -        | +         |
    /// | -    | +       | -        | -         |
    /// | -    | -       | +        | -         |
    ///
    /// The quotient is always integral; the remainder keeps the finer of the
    /// two operand exponents (`1.5 / 0.4` is `3` remainder `0.3`).
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `divisor` is zero.
    pub fn div_rem(&self, divisor: &Self) -> NumericResult<(Self, Self)> {
        if divisor.is_zero() {
            return Err(NumericError::DivisionByZero);
        }

        let (quotient, remainder) = div_magnitudes(&self.abs(), &divisor.abs())?;
        let (quotient_negative, remainder_negative) =
            match (self.is_negative(), divisor.is_negative()) {
                (false, false) => (false, false),
                (false, true) => (true, false),
                (true, false) => (true, true),
                (true, true) => (false, true),
            };

        Ok((
            quotient.with_sign(quotient_negative),
            remainder.with_sign(remainder_negative),
        ))
    }

    /// Quotient of [`DecimalValue::div_rem`].
    pub fn checked_div(&self, divisor: &Self) -> NumericResult<Self> {
        self.div_rem(divisor).map(|(quotient, _)| quotient)
    }

    /// Remainder of [`DecimalValue::div_rem`].
    pub fn checked_rem(&self, divisor: &Self) -> NumericResult<Self> {
        self.div_rem(divisor).map(|(_, remainder)| remainder)
    }
}

// ============================================================================
// Magnitude Primitives
// Operands are non-negative; callers attach the sign
// ============================================================================

fn add_magnitudes(a: &DecimalValue, b: &DecimalValue) -> DecimalValue {
    let (left, right, exponent) = align_exponents(a, b);

    let mut reversed = Digits::with_capacity(left.len().max(right.len()) + 1);
    let mut carry = 0u8;
    let mut position = 0;
    loop {
        let l = digit_from_back(&left, position);
        let r = digit_from_back(&right, position);
        if l.is_none() && r.is_none() && carry == 0 {
            break;
        }
        let sum = l.unwrap_or(0) + r.unwrap_or(0) + carry;
        reversed.push(sum % 10);
        carry = sum / 10;
        position += 1;
    }

    reversed.reverse();
    DecimalValue::from_raw(reversed, exponent, false)
}

/// `a - b` for non-negative operands in either order; when `a < b` the
/// operands are swapped and the result is negated.
fn sub_magnitudes(a: &DecimalValue, b: &DecimalValue) -> DecimalValue {
    let (larger, smaller, negative) = match compare_magnitude(a, b) {
        Ordering::Less => (b, a, true),
        _ => (a, b, false),
    };
    let (left, right, exponent) = align_exponents(larger, smaller);

    let mut reversed = Digits::with_capacity(left.len());
    let mut borrow = 0u8;
    for position in 0..left.len().max(right.len()) {
        let mut l = digit_from_back(&left, position).unwrap_or(0);
        let r = digit_from_back(&right, position).unwrap_or(0) + borrow;
        borrow = 0;
        if l < r {
            l += 10;
            borrow = 1;
        }
        reversed.push(l - r);
    }

    reversed.reverse();
    DecimalValue::from_raw(strip_leading_zeros(&reversed), exponent, negative)
}

/// Schoolbook long multiplication: one partial product per multiplier digit,
/// shifted by its position and accumulated with addition.
fn mul_magnitudes(a: &DecimalValue, b: &DecimalValue) -> NumericResult<DecimalValue> {
    if a.is_zero() || b.is_zero() {
        return Ok(DecimalValue::zero());
    }
    let multiplicand = a.normalize_zeros_into_exponent();
    let multiplier = b.normalize_zeros_into_exponent();
    let exponent = multiplicand
        .exponent()
        .checked_add(multiplier.exponent())
        .filter(|exponent| exponent.unsigned_abs() <= MAX_EXPONENT.unsigned_abs())
        .ok_or(NumericError::Overflow)?;

    let mut product = DecimalValue::zero();
    for (shift, &factor) in multiplier.digits().iter().rev().enumerate() {
        if factor == 0 {
            continue;
        }

        let mut reversed = Digits::with_capacity(multiplicand.digits().len() + shift + 1);
        let mut carry = 0u8;
        for &digit in multiplicand.digits().iter().rev() {
            let value = digit * factor + carry;
            reversed.push(value % 10);
            carry = value / 10;
        }
        if carry > 0 {
            reversed.push(carry);
        }
        reversed.reverse();
        reversed.extend(std::iter::repeat(0).take(shift));

        product = add_magnitudes(&product, &DecimalValue::from_raw(reversed, 0, false));
    }

    Ok(DecimalValue::from_raw(
        Digits::from_slice(product.digits()),
        exponent,
        false,
    ))
}

/// Naive division by repeated subtraction.
///
/// Correct for any magnitudes but linear in the quotient, so the long
/// division below only calls it when the quotient is a single digit.
pub(crate) fn div_by_subtraction(
    dividend: &DecimalValue,
    divisor: &DecimalValue,
) -> NumericResult<(DecimalValue, DecimalValue)> {
    if divisor.is_zero() {
        return Err(NumericError::DivisionByZero);
    }

    let one = DecimalValue::one();
    let mut quotient = DecimalValue::zero();
    let mut remainder = dividend.clone();
    while compare_magnitude(&remainder, divisor) != Ordering::Less {
        quotient = add_magnitudes(&quotient, &one);
        remainder = sub_magnitudes(&remainder, divisor);
    }
    Ok((quotient, remainder))
}

/// Long division, one dividend digit at a time.
///
/// Both operands are scaled to their common (smaller) exponent so they become
/// plain integers. Each step's partial dividend is below ten times the
/// divisor, so every call to [`div_by_subtraction`] loops at most 9 times.
fn div_magnitudes(
    a: &DecimalValue,
    b: &DecimalValue,
) -> NumericResult<(DecimalValue, DecimalValue)> {
    let (dividend, divisor_digits, exponent) = align_exponents(a, b);
    let divisor = DecimalValue::from_raw(strip_leading_zeros(&divisor_digits), 0, false);

    let mut quotient = Digits::with_capacity(dividend.len());
    let mut partial = Digits::new();
    for &digit in dividend.iter() {
        partial.push(digit);
        let partial_value = DecimalValue::from_raw(strip_leading_zeros(&partial), 0, false);

        if compare_magnitude(&partial_value, &divisor) == Ordering::Less {
            quotient.push(0);
            partial = Digits::from_slice(partial_value.digits());
            continue;
        }

        let (step_quotient, step_remainder) = div_by_subtraction(&partial_value, &divisor)?;
        quotient.extend_from_slice(step_quotient.digits());
        partial = Digits::from_slice(step_remainder.digits());
    }

    let quotient = DecimalValue::from_raw(strip_leading_zeros(&quotient), 0, false);
    let remainder = DecimalValue::from_raw(strip_leading_zeros(&partial), exponent, false);
    Ok((
        quotient.normalize_zeros_into_exponent(),
        remainder.normalize_zeros_into_exponent(),
    ))
}

// ============================================================================
// Operator Traits
// ============================================================================

macro_rules! forward_binop {
    ($trait:ident, $method:ident, $inherent:ident) => {
        impl $trait<&DecimalValue> for &DecimalValue {
            type Output = DecimalValue;

            #[inline]
            fn $method(self, rhs: &DecimalValue) -> DecimalValue {
                self.$inherent(rhs)
            }
        }

        impl $trait for DecimalValue {
            type Output = DecimalValue;

            #[inline]
            fn $method(self, rhs: DecimalValue) -> DecimalValue {
                self.$inherent(&rhs)
            }
        }
    };
}

forward_binop!(Add, add, plus);
forward_binop!(Sub, sub, minus);

// ============================================================================
// Tests
// ============================================================================
