// ============================================================================
// Event Handler Interface
// Defines the contract for handling scan and evaluation events
// ============================================================================

use crate::domain::LiteralSpan;
use crate::numeric::{DecimalValue, NumericError};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Events emitted by the literal reader
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ScanEvent {
    /// Valid literal found in the source
    LiteralRecognized { span: LiteralSpan },

    /// Matched text failed validation
    LiteralRejected { span: LiteralSpan },

    /// Literal converted to a decimal value
    LiteralEvaluated {
        span: LiteralSpan,
        value: DecimalValue,
    },

    /// Literal could not be converted
    EvaluationFailed {
        span: LiteralSpan,
        error: NumericError,
    },
}

impl ScanEvent {
    /// Span the event refers to
    pub fn span(&self) -> &LiteralSpan {
        match self {
            ScanEvent::LiteralRecognized { span }
            | ScanEvent::LiteralRejected { span }
            | ScanEvent::LiteralEvaluated { span, .. }
            | ScanEvent::EvaluationFailed { span, .. } => span,
        }
    }
}

/// Event handler trait for processing reader events
/// Implementations can handle logging, diagnostics collection, metrics, etc.
pub trait ScanEventHandler: Send + Sync {
    /// Handle a scan event
    fn on_event(&self, event: ScanEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<ScanEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler for testing
pub struct NoOpEventHandler;

impl ScanEventHandler for NoOpEventHandler {
    fn on_event(&self, _event: ScanEvent) {
        // Do nothing
    }
}

/// Logging event handler
pub struct LoggingEventHandler;

impl ScanEventHandler for LoggingEventHandler {
    fn on_event(&self, event: ScanEvent) {
        match &event {
            ScanEvent::LiteralRejected { span } => {
                tracing::debug!(
                    start = span.start,
                    diagnostic = span.diagnostic().unwrap_or_default(),
                    "Literal rejected: {}",
                    span.text
                );
            },
            ScanEvent::EvaluationFailed { span, error } => {
                tracing::debug!(start = span.start, "Literal evaluation failed: {}", error);
            },
            _ => tracing::debug!("Literal reader event: {:?}", event),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LiteralKind;

    #[test]
    fn test_noop_handler() {
        let handler = NoOpEventHandler;
        handler.on_event(ScanEvent::LiteralRecognized {
            span: LiteralSpan::new(0, 1, LiteralKind::Integer, "42"),
        });
        // Should not panic
    }

    #[test]
    fn test_batch_dispatch_preserves_order() {
        let (tx, rx) = crossbeam::channel::unbounded();

        struct Forwarding(crossbeam::channel::Sender<ScanEvent>);
        impl ScanEventHandler for Forwarding {
            fn on_event(&self, event: ScanEvent) {
                let _ = self.0.send(event);
            }
        }

        let first = LiteralSpan::new(0, 0, LiteralKind::Integer, "1");
        let second = LiteralSpan::new(2, 2, LiteralKind::Integer, "2");
        Forwarding(tx).on_events(vec![
            ScanEvent::LiteralRecognized {
                span: first.clone(),
            },
            ScanEvent::LiteralEvaluated {
                span: second.clone(),
                value: DecimalValue::from(2),
            },
        ]);

        let received: Vec<ScanEvent> = rx.try_iter().collect();
        assert_eq!(received.len(), 2);
        assert_eq!(received[0].span(), &first);
        assert_eq!(received[1].span(), &second);
    }
}
