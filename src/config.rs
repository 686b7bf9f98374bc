//! Engine configuration.
//!
//! Every numeric literal of the affect pipeline lives here as a named,
//! overridable parameter. `EngineConfig::default()` carries the canonical
//! values; hosts may deserialize overrides from JSON and must pass the
//! result through engine construction, which validates it fail-fast.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Named parameter set for the emotional-state engine.
///
/// Validated once at engine construction; see [`EngineConfig::validate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Valence gain per personal-topic mention, scaled by familiarity.
    pub topic_weight_personal: f64,
    /// Valence gain per relational-topic mention, scaled by familiarity.
    pub topic_weight_relational: f64,
    /// Arousal gain per philosophy-topic mention, scaled by trait openness.
    pub topic_weight_philosophy: f64,
    /// Arousal gain per unit of linguistic intensity.
    pub intensity_weight: f64,
    /// Valence gain per unit of text complexity above the 0.5 baseline.
    pub complexity_weight: f64,
    /// Fatigue accumulated per idle hour.
    pub fatigue_time_coeff: f64,
    /// Fatigue accumulated per retained history entry.
    pub fatigue_history_coeff: f64,
    /// Lower bound for emotional stability.
    pub stability_floor: f64,
    /// Stability lost per unit of absolute valence impact.
    pub stability_decay: f64,
    /// Familiarity assigned to a user on first contact.
    pub familiarity_init: f64,
    /// Familiarity gained per repeat interaction.
    pub familiarity_increment: f64,
    /// Saturation ceiling for familiarity.
    pub familiarity_cap: f64,
    /// Capacity of the bounded emotional history ring.
    pub history_capacity: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            topic_weight_personal: 0.1,
            topic_weight_relational: 0.15,
            topic_weight_philosophy: 0.2,
            intensity_weight: 0.4,
            complexity_weight: 0.3,
            fatigue_time_coeff: 0.1,
            fatigue_history_coeff: 0.01,
            stability_floor: 0.3,
            stability_decay: 0.05,
            familiarity_init: 0.1,
            familiarity_increment: 0.05,
            familiarity_cap: 0.95,
            history_capacity: 100,
        }
    }
}

impl EngineConfig {
    /// Check every parameter before any interaction is processed.
    ///
    /// Weights and coefficients must be finite and non-negative; bounded
    /// parameters must lie inside their documented intervals; the history
    /// ring must hold at least one entry.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let weights = [
            ("topic_weight_personal", self.topic_weight_personal),
            ("topic_weight_relational", self.topic_weight_relational),
            ("topic_weight_philosophy", self.topic_weight_philosophy),
            ("intensity_weight", self.intensity_weight),
            ("complexity_weight", self.complexity_weight),
            ("fatigue_time_coeff", self.fatigue_time_coeff),
            ("fatigue_history_coeff", self.fatigue_history_coeff),
            ("stability_decay", self.stability_decay),
        ];
        for (name, value) in weights {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidWeight { name, value });
            }
        }

        if !(self.stability_floor > 0.0 && self.stability_floor <= 1.0) {
            return Err(ConfigError::OutOfRange {
                name: "stability_floor",
                value: self.stability_floor,
                expected: "a value in (0, 1]",
            });
        }
        if !(self.familiarity_init > 0.0 && self.familiarity_init < 1.0) {
            return Err(ConfigError::OutOfRange {
                name: "familiarity_init",
                value: self.familiarity_init,
                expected: "a value in (0, 1)",
            });
        }
        if !(self.familiarity_increment > 0.0 && self.familiarity_increment.is_finite()) {
            return Err(ConfigError::OutOfRange {
                name: "familiarity_increment",
                value: self.familiarity_increment,
                expected: "a positive finite value",
            });
        }
        if !(self.familiarity_cap >= self.familiarity_init && self.familiarity_cap < 1.0) {
            return Err(ConfigError::OutOfRange {
                name: "familiarity_cap",
                value: self.familiarity_cap,
                expected: "a value in [familiarity_init, 1)",
            });
        }
        if self.history_capacity == 0 {
            return Err(ConfigError::ZeroHistoryCapacity);
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
