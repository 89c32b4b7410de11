// ============================================================================
// Literal Reader
// One scan → evaluate cycle per literal over a whole source
// ============================================================================

use crate::domain::LiteralSpan;
use crate::evaluator::LiteralEvaluator;
use crate::interfaces::{ScanEvent, ScanEventHandler};
use crate::numeric::{DecimalValue, NumericResult};
use crate::scanner::NumericLiteralScanner;
use std::sync::Arc;

/// A scanned literal together with its evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadLiteral {
    pub span: LiteralSpan,
    pub value: NumericResult<DecimalValue>,
}

/// Everything read from one source.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadOutput {
    /// Literals in source order
    pub literals: Vec<ReadLiteral>,

    /// The source with each literal character replaced by a space
    pub residual: String,
}

impl ReadOutput {
    /// Successfully evaluated values, in source order
    pub fn values(&self) -> impl Iterator<Item = &DecimalValue> {
        self.literals
            .iter()
            .filter_map(|literal| literal.value.as_ref().ok())
    }

    /// Literals that were rejected or failed to evaluate
    pub fn failures(&self) -> impl Iterator<Item = &ReadLiteral> {
        self.literals.iter().filter(|literal| literal.value.is_err())
    }

    pub fn is_clean(&self) -> bool {
        self.failures().next().is_none()
    }
}

/// Scans a source for numeric literals and evaluates each one.
///
/// Every step is reported to the event handler as one batch per call to
/// [`LiteralReader::read`].
pub struct LiteralReader {
    /// Literal recognition
    scanner: NumericLiteralScanner,

    /// Span to value conversion
    evaluator: LiteralEvaluator,

    /// Event handler for processing events
    event_handler: Arc<dyn ScanEventHandler>,
}

impl LiteralReader {
    /// Create a new literal reader
    pub fn new(
        scanner: NumericLiteralScanner,
        evaluator: LiteralEvaluator,
        event_handler: Arc<dyn ScanEventHandler>,
    ) -> Self {
        Self {
            scanner,
            evaluator,
            event_handler,
        }
    }

    pub fn scanner(&self) -> &NumericLiteralScanner {
        &self.scanner
    }

    pub fn evaluator(&self) -> &LiteralEvaluator {
        &self.evaluator
    }

    /// Read every literal in `source`
    pub fn read(&self, source: &str) -> ReadOutput {
        let chars: Vec<char> = source.chars().collect();
        self.read_chars(&chars)
    }

    /// Read every literal in an already materialized character sequence
    pub fn read_chars(&self, chars: &[char]) -> ReadOutput {
        let scanned = self.scanner.scan_all(chars);
        let mut events = Vec::with_capacity(scanned.spans.len() * 2);
        let mut literals = Vec::with_capacity(scanned.spans.len());

        for span in scanned.spans {
            if span.is_error() {
                events.push(ScanEvent::LiteralRejected { span: span.clone() });
            } else {
                events.push(ScanEvent::LiteralRecognized { span: span.clone() });
            }

            let value = self.evaluator.evaluate(&span);
            match &value {
                Ok(value) => events.push(ScanEvent::LiteralEvaluated {
                    span: span.clone(),
                    value: value.clone(),
                }),
                Err(error) => {
                    tracing::debug!(
                        start = span.start,
                        text = span.text.as_str(),
                        "Literal evaluation failed: {}",
                        error
                    );
                    events.push(ScanEvent::EvaluationFailed {
                        span: span.clone(),
                        error: error.clone(),
                    });
                },
            }
            literals.push(ReadLiteral { span, value });
        }

        let output = ReadOutput {
            literals,
            residual: scanned.residual,
        };
        tracing::debug!(
            literals = output.literals.len(),
            failures = output.failures().count(),
            "Literal reader finished"
        );

        self.event_handler.on_events(events);
        output
    }
}
