//! Behavioral tone: a discrete label derived from the affect state.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::affect::AffectState;

/// Discrete behavioral tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Enthusiastic,
    Content,
    Irritated,
    Discouraged,
    Energized,
    Neutral,
}

impl Tone {
    /// All tones in canonical order.
    pub const ALL: [Tone; 6] = [
        Self::Enthusiastic,
        Self::Content,
        Self::Irritated,
        Self::Discouraged,
        Self::Energized,
        Self::Neutral,
    ];

    /// Stable lowercase label, matching the serde representation.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Enthusiastic => "enthusiastic",
            Self::Content => "content",
            Self::Irritated => "irritated",
            Self::Discouraged => "discouraged",
            Self::Energized => "energized",
            Self::Neutral => "neutral",
        }
    }

    /// Map the continuous affect state onto a tone.
    ///
    /// First-match-wins ordered rules; the order is part of the contract
    /// (a high-arousal negative state is irritated, not energized):
    ///
    /// 1. valence > 0.6 and arousal > 0.6 → enthusiastic
    /// 2. valence > 0.6 → content
    /// 3. valence < -0.4 and arousal > 0.5 → irritated
    /// 4. valence < -0.4 → discouraged
    /// 5. arousal > 0.7 → energized
    /// 6. otherwise → neutral
    pub fn classify(state: &AffectState) -> Tone {
        if state.valence > 0.6 {
            if state.arousal > 0.6 {
                return Tone::Enthusiastic;
            }
            return Tone::Content;
        }
        if state.valence < -0.4 {
            if state.arousal > 0.5 {
                return Tone::Irritated;
            }
            return Tone::Discouraged;
        }
        if state.arousal > 0.7 {
            return Tone::Energized;
        }
        Tone::Neutral
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn state(valence: f64, arousal: f64) -> AffectState {
        AffectState {
            valence,
            arousal,
            ..AffectState::default()
        }
    }

    #[test]
    fn test_tone_table() {
        let cases = [
            (0.7, 0.7, Tone::Enthusiastic),
            (0.7, 0.3, Tone::Content),
            (-0.5, 0.6, Tone::Irritated),
            (-0.5, 0.2, Tone::Discouraged),
            (0.1, 0.8, Tone::Energized),
            (0.1, 0.3, Tone::Neutral),
        ];
        for (valence, arousal, expected) in cases {
            assert_eq!(
                Tone::classify(&state(valence, arousal)),
                expected,
                "valence {valence}, arousal {arousal}"
            );
        }
    }

    #[test]
    fn test_thresholds_are_strict() {
        // Boundary values fall through to the later rules.
        assert_eq!(Tone::classify(&state(0.6, 0.9)), Tone::Energized);
        assert_eq!(Tone::classify(&state(-0.4, 0.9)), Tone::Energized);
        assert_eq!(Tone::classify(&state(0.0, 0.7)), Tone::Neutral);
    }

    #[test]
    fn test_negative_valence_outranks_high_arousal() {
        // Rule 3 fires before rule 5.
        assert_eq!(Tone::classify(&state(-0.9, 0.9)), Tone::Irritated);
    }

    #[test]
    fn test_display_and_serde_agree() {
        for tone in Tone::ALL {
            let json = serde_json::to_string(&tone).unwrap();
            assert_eq!(json, format!("\"{tone}\""));
        }
    }
}
