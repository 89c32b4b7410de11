// ============================================================================
// Literal Spans
// Result of scanning one numeric literal out of a character sequence
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Form of a recognized numeric literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LiteralKind {
    /// Plain run of decimal digits: `1234`
    Integer,
    /// Decimal digits grouped with separators: `1_000_000`
    UnderscoredInteger,
    /// Decimal digits with a fractional part: `12.5`
    Float,
    /// Radix-prefixed integer: `16#4f`
    BasedInteger,
    /// Float or based integer with a signed decimal exponent: `1.5e-3`
    ScientificFloat,
    /// Code point of a single character: `$a`, `$\n`
    CharLiteral,
    /// Matched text that failed validation
    SyntaxError,
}

impl LiteralKind {
    /// Short lowercase name used in diagnostics and logs.
    pub fn name(&self) -> &'static str {
        match self {
            LiteralKind::Integer => "integer",
            LiteralKind::UnderscoredInteger => "underscored integer",
            LiteralKind::Float => "float",
            LiteralKind::BasedInteger => "based integer",
            LiteralKind::ScientificFloat => "scientific float",
            LiteralKind::CharLiteral => "char literal",
            LiteralKind::SyntaxError => "syntax error",
        }
    }
}

impl fmt::Display for LiteralKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One scanned literal.
///
/// `start` and `end` are inclusive character positions. A span whose kind is
/// [`LiteralKind::SyntaxError`] always carries a diagnostic and remembers the
/// form it was matched as; any other span carries no diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "SpanFields")
)]
pub struct LiteralSpan {
    pub start: usize,
    pub end: usize,
    pub text: String,
    kind: LiteralKind,
    diagnostic: Option<String>,
    matched_kind: LiteralKind,
}

impl LiteralSpan {
    /// Create a valid span.
    pub(crate) fn new(start: usize, end: usize, kind: LiteralKind, text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            kind,
            text: text.into(),
            diagnostic: None,
            matched_kind: kind,
        }
    }

    /// Create a span that matched `matched_kind` but failed validation.
    pub(crate) fn syntax_error(
        start: usize,
        end: usize,
        matched_kind: LiteralKind,
        text: impl Into<String>,
        diagnostic: impl Into<String>,
    ) -> Self {
        Self {
            start,
            end,
            kind: LiteralKind::SyntaxError,
            text: text.into(),
            diagnostic: Some(diagnostic.into()),
            matched_kind,
        }
    }

    /// Recognized form, or [`LiteralKind::SyntaxError`] if validation failed.
    #[inline]
    pub fn kind(&self) -> LiteralKind {
        self.kind
    }

    /// Validation messages, joined with `"; "`.
    #[inline]
    pub fn diagnostic(&self) -> Option<&str> {
        self.diagnostic.as_deref()
    }

    /// Form the text was matched as, before validation.
    #[inline]
    pub fn matched_kind(&self) -> LiteralKind {
        self.matched_kind
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        self.kind == LiteralKind::SyntaxError
    }

    /// Number of characters consumed, never zero.
    #[inline]
    pub fn width(&self) -> usize {
        self.end.saturating_sub(self.start).saturating_add(1)
    }
}

/// Wire shape of a [`LiteralSpan`], checked before it becomes a span.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct SpanFields {
    start: usize,
    end: usize,
    text: String,
    kind: LiteralKind,
    diagnostic: Option<String>,
    matched_kind: LiteralKind,
}

#[cfg(feature = "serde")]
impl TryFrom<SpanFields> for LiteralSpan {
    type Error = String;

    fn try_from(fields: SpanFields) -> Result<Self, Self::Error> {
        let is_error = fields.kind == LiteralKind::SyntaxError;
        if is_error != fields.diagnostic.is_some() {
            return Err(format!(
                "{} span '{}' must carry a diagnostic only when it is a syntax error",
                fields.kind, fields.text
            ));
        }
        if fields.end < fields.start {
            return Err(format!("span '{}' ends before it starts", fields.text));
        }
        Ok(Self {
            start: fields.start,
            end: fields.end,
            text: fields.text,
            kind: fields.kind,
            diagnostic: fields.diagnostic,
            matched_kind: fields.matched_kind,
        })
    }
}

impl fmt::Display for LiteralSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}' at {}..={}", self.kind, self.text, self.start, self.end)?;
        if let Some(diagnostic) = &self.diagnostic {
            write!(f, " ({})", diagnostic)?;
        }
        Ok(())
    }
}
