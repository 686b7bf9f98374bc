//! Static persona profile: identity, Big-Five traits, and behavior
//! tendencies.
//!
//! All three records are immutable for the process lifetime. They are
//! plain serde-friendly data; hosts may deserialize a custom profile and
//! hand it to engine construction.

use serde::{Deserialize, Serialize};

/// Big-Five personality vector, each axis in [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalityTraits {
    pub openness: f64,
    pub conscientiousness: f64,
    pub extraversion: f64,
    pub agreeableness: f64,
    pub neuroticism: f64,
}

impl Default for PersonalityTraits {
    fn default() -> Self {
        Self {
            openness: 0.9,
            conscientiousness: 0.6,
            extraversion: 0.7,
            agreeableness: 0.4,
            neuroticism: 0.3,
        }
    }
}

/// One behavioral tendency: how often it fires, what words prime it, and
/// how strongly it colors the reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BehaviorTendency {
    pub base_probability: f64,
    pub trigger_keywords: Vec<String>,
    pub intensity: f64,
}

impl BehaviorTendency {
    pub fn new(base_probability: f64, trigger_keywords: &[&str], intensity: f64) -> Self {
        Self {
            base_probability,
            trigger_keywords: trigger_keywords.iter().map(|kw| kw.to_string()).collect(),
            intensity,
        }
    }
}

/// The persona's configured tendencies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tendencies {
    pub sarcasm: BehaviorTendency,
    pub philosophy: BehaviorTendency,
    pub empathy: BehaviorTendency,
}

impl Default for Tendencies {
    fn default() -> Self {
        Self {
            sarcasm: BehaviorTendency::new(0.3, &["erro", "contradição", "ingenuidade"], 0.7),
            philosophy: BehaviorTendency::new(0.4, &["existencial", "moral", "lógica"], 0.8),
            empathy: BehaviorTendency::new(0.2, &["sofrimento", "perda", "vulnerabilidade"], 0.3),
        }
    }
}

/// Who the persona is, for presentation by hosts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonaIdentity {
    pub name: String,
    pub creator: String,
    pub description: String,
}

impl Default for PersonaIdentity {
    fn default() -> Self {
        Self {
            name: "Astéria".to_string(),
            creator: "Yuzuki".to_string(),
            description: "Uma jovem com mentalidade forte mas impaciente, extrovertida e \
                          refinada, que usa sarcasmo com quem confia. Fã de Reverend Insanity \
                          e entusiasta de lógica."
                .to_string(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_traits() {
        let traits = PersonalityTraits::default();
        assert_eq!(traits.openness, 0.9);
        assert_eq!(traits.neuroticism, 0.3);
    }

    #[test]
    fn test_default_tendencies() {
        let tendencies = Tendencies::default();
        assert_eq!(tendencies.sarcasm.base_probability, 0.3);
        assert_eq!(tendencies.sarcasm.trigger_keywords.len(), 3);
        assert_eq!(tendencies.philosophy.intensity, 0.8);
        assert_eq!(tendencies.empathy.base_probability, 0.2);
    }

    #[test]
    fn test_profile_json_roundtrip() {
        let tendencies = Tendencies::default();
        let json = serde_json::to_string(&tendencies).unwrap();
        let back: Tendencies = serde_json::from_str(&json).unwrap();
        assert_eq!(tendencies, back);

        let traits = PersonalityTraits::default();
        let json = serde_json::to_string(&traits).unwrap();
        let back: PersonalityTraits = serde_json::from_str(&json).unwrap();
        assert_eq!(traits, back);
    }

    #[test]
    fn test_identity_defaults() {
        let identity = PersonaIdentity::default();
        assert_eq!(identity.name, "Astéria");
        assert!(identity.description.contains("sarcasmo"));
    }
}
