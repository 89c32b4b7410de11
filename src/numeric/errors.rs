// ============================================================================
// Numeric Errors
// Error types for literal conversion and decimal arithmetic
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors that can occur while scanning, evaluating or computing with decimals.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NumericError {
    /// Malformed literal, carries the scanner diagnostic
    SyntaxError(String),
    /// Attempted division by zero
    DivisionByZero,
    /// A character that is not a digit in any supported radix
    DigitConversion { character: char },
    /// A digit whose value is not below the declared radix
    DigitOutOfRange { character: char, radix: u32 },
    /// The text before the radix marker is not a usable radix
    BaseConversion(String),
    /// Result does not fit the requested native type
    Overflow,
    /// Conversion would lose significant digits
    PrecisionLoss,
    /// Input string or digit sequence is invalid
    InvalidInput,
    /// Scanner configuration rejected by validation
    InvalidConfig(String),
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::SyntaxError(diagnostic) => write!(f, "syntax error: {}", diagnostic),
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::DigitConversion { character } => {
                write!(f, "digit conversion error: '{}' has no digit value", character)
            },
            NumericError::DigitOutOfRange { character, radix } => write!(
                f,
                "digit conversion error: '{}' is out of range for radix {}",
                character, radix
            ),
            NumericError::BaseConversion(text) => {
                write!(f, "base conversion error: '{}' is not a valid radix", text)
            },
            NumericError::Overflow => {
                write!(f, "arithmetic overflow: value exceeds the target range")
            },
            NumericError::PrecisionLoss => write!(
                f,
                "precision loss: conversion would lose significant digits"
            ),
            NumericError::InvalidInput => write!(f, "invalid input: could not parse value"),
            NumericError::InvalidConfig(reason) => write!(f, "invalid configuration: {}", reason),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
