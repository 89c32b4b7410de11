// ============================================================================
// Literal Reader Factory
// Creates literal readers with proper configuration
// ============================================================================

use crate::domain::ScannerConfig;
use crate::engine::LiteralReader;
use crate::evaluator::LiteralEvaluator;
use crate::interfaces::{LiteralMatcher, NoOpEventHandler, ScanEventHandler};
use crate::numeric::NumericResult;
use crate::scanner::{default_matchers, NumericLiteralScanner};
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a literal reader from configuration
///
/// # Arguments
/// * `config` - Literal syntax configuration
/// * `event_handler` - Event handler for scan and evaluation events
///
/// # Returns
/// * `NumericResult<LiteralReader>` - Configured reader or `InvalidConfig`
///
/// # Example
/// ```
/// use decimal_literals::prelude::*;
/// use decimal_literals::engine::factory::create_from_config;
/// use std::sync::Arc;
///
/// let reader = create_from_config(ScannerConfig::erlang(), Arc::new(NoOpEventHandler)).unwrap();
/// let output = reader.read("X = 2#1010.");
/// assert_eq!(output.values().next(), Some(&DecimalValue::from(10)));
/// ```
pub fn create_from_config(
    config: ScannerConfig,
    event_handler: Arc<dyn ScanEventHandler>,
) -> NumericResult<LiteralReader> {
    let scanner = NumericLiteralScanner::with_config(config.clone())?;
    let evaluator = LiteralEvaluator::with_config(config)?;
    Ok(LiteralReader::new(scanner, evaluator, event_handler))
}

// ============================================================================
// Builder Pattern for Advanced Configuration
// ============================================================================

/// Builder for creating literal readers with fluent API
///
/// # Example
/// ```
/// use decimal_literals::prelude::*;
/// use decimal_literals::engine::factory::LiteralReaderBuilder;
/// use std::sync::Arc;
///
/// let reader = LiteralReaderBuilder::new()
///     .grouping_separator('\'')
///     .lowercase_exponent_only()
///     .with_event_handler(Arc::new(LoggingEventHandler))
///     .build()
///     .unwrap();
///
/// let output = reader.read("N = 1'000'000.");
/// assert_eq!(output.values().next(), Some(&DecimalValue::from(1_000_000)));
/// ```
pub struct LiteralReaderBuilder {
    config: ScannerConfig,
    matchers: Option<Vec<Box<dyn LiteralMatcher>>>,
    event_handler: Arc<dyn ScanEventHandler>,
}

impl LiteralReaderBuilder {
    /// Create a new builder with the default literal syntax
    pub fn new() -> Self {
        Self {
            config: ScannerConfig::default(),
            matchers: None,
            event_handler: Arc::new(NoOpEventHandler),
        }
    }

    // ========================================================================
    // Syntax Configuration
    // ========================================================================

    /// Replace the whole syntax configuration
    pub fn with_config(mut self, config: ScannerConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the digit grouping separator
    pub fn grouping_separator(mut self, separator: char) -> Self {
        self.config = self.config.with_grouping_separator(separator);
        self
    }

    /// Set the radix marker of based integers
    pub fn radix_marker(mut self, marker: char) -> Self {
        self.config = self.config.with_radix_marker(marker);
        self
    }

    /// Set the decimal point of floats
    pub fn decimal_point(mut self, point: char) -> Self {
        self.config = self.config.with_decimal_point(point);
        self
    }

    /// Accept only lowercase `e` as exponent marker
    pub fn lowercase_exponent_only(mut self) -> Self {
        self.config = self.config.with_uppercase_exponent(false);
        self
    }

    // ========================================================================
    // Collaborators
    // ========================================================================

    /// Replace the matcher table, consulted in the given order
    pub fn with_matchers(mut self, matchers: Vec<Box<dyn LiteralMatcher>>) -> Self {
        self.matchers = Some(matchers);
        self
    }

    /// Set the event handler
    pub fn with_event_handler(mut self, event_handler: Arc<dyn ScanEventHandler>) -> Self {
        self.event_handler = event_handler;
        self
    }

    /// Build the reader
    ///
    /// # Errors
    /// Returns `InvalidConfig` if the configuration fails validation.
    pub fn build(self) -> NumericResult<LiteralReader> {
        let matchers = self.matchers.unwrap_or_else(default_matchers);
        let scanner = NumericLiteralScanner::with_matchers(self.config.clone(), matchers)?;
        let evaluator = LiteralEvaluator::with_config(self.config)?;
        Ok(LiteralReader::new(scanner, evaluator, self.event_handler))
    }
}

impl Default for LiteralReaderBuilder {
    fn default() -> Self {
        Self::new()
    }
}
