//! The shared affect vector.

use serde::{Deserialize, Serialize};

/// Persona-wide affect state: one vector shared across all users.
///
/// Dimensions and ranges:
///
/// - `valence`: positivity/negativity axis, [-1, 1]
/// - `arousal`: activation/calm axis, [0, 1]
/// - `dominance`: dominant/submissive axis, [0, 1]; carried but never
///   updated by the transition (a static trait-like field)
/// - `stability`: volatility axis, [floor, 1] with a configured floor
/// - `fatigue`: mental fatigue, [0, 1]
///
/// Every field is re-clamped by the transition, so any reachable state
/// stays inside these bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AffectState {
    pub valence: f64,
    pub arousal: f64,
    pub dominance: f64,
    pub stability: f64,
    pub fatigue: f64,
}

impl Default for AffectState {
    /// The persona's waking state: mildly positive, calm, assertive.
    fn default() -> Self {
        Self {
            valence: 0.5,
            arousal: 0.4,
            dominance: 0.7,
            stability: 0.6,
            fatigue: 0.0,
        }
    }
}

impl AffectState {
    /// True when every dimension lies inside its documented range.
    pub fn in_bounds(&self, stability_floor: f64) -> bool {
        (-1.0..=1.0).contains(&self.valence)
            && (0.0..=1.0).contains(&self.arousal)
            && (0.0..=1.0).contains(&self.dominance)
            && (stability_floor..=1.0).contains(&self.stability)
            && (0.0..=1.0).contains(&self.fatigue)
    }
}
