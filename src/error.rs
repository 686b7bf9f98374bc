//! Error types for the persona engine.

use thiserror::Error;

/// Errors raised while validating an [`EngineConfig`](crate::EngineConfig).
///
/// Configuration is checked once, at engine construction, before any
/// interaction is processed. The arithmetic pipeline itself never errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A weight or coefficient is negative or not finite.
    #[error("configuration value `{name}` must be finite and non-negative, got {value}")]
    InvalidWeight { name: &'static str, value: f64 },

    /// A bounded parameter lies outside its permitted interval.
    #[error("configuration value `{name}` is out of range: got {value}, expected {expected}")]
    OutOfRange {
        name: &'static str,
        value: f64,
        expected: &'static str,
    },

    /// The emotional history ring must hold at least one entry.
    #[error("history_capacity must be at least 1")]
    ZeroHistoryCapacity,
}
