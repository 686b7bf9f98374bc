//! The persona engine facade.
//!
//! [`PersonaEngine`] owns the whole pipeline: text analysis, familiarity
//! tracking, the affect state machine, directive derivation, and context
//! rendering. One `analyze` call is one state-machine transition.
//!
//! The engine itself is single-threaded by design: the affect state is
//! persona-wide, so concurrent interactions (even from different users)
//! must serialize. Concurrent hosts use [`SharedPersonaEngine`], which
//! holds one lock across the full read-modify-write sequence, keeping
//! familiarity mutation and affect update of an interaction linearized.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::affect::{AffectModel, AffectState, EmotionalHistory, FamiliarityTracker};
use crate::analysis::{analyze_text, detect_topics};
use crate::config::EngineConfig;
use crate::error::ConfigError;
use crate::persona::{
    self, generate_directives, PersonaIdentity, PersonalityTraits, Tendencies, Tone,
};

/// Persona-wide user-trust scalar. Static in this design; it gates the
/// sarcasm directive and scales the reported sarcasm probability.
const DEFAULT_USER_TRUST: f64 = 0.5;

/// Everything a prompt builder needs from one interaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectiveReport {
    /// Discrete behavioral tone.
    pub tone: Tone,
    /// Ordered behavioral directives.
    pub directives: Vec<String>,
    /// Post-transition affect dimensions.
    pub valence: f64,
    pub arousal: f64,
    pub dominance: f64,
    pub stability: f64,
    pub fatigue: f64,
    /// Familiarity with the interacting user (post-touch).
    pub familiarity: f64,
    /// `sarcasm.base_probability * user_trust`.
    pub sarcasm_probability: f64,
    /// `philosophy.base_probability * traits.openness`.
    pub philosophy_probability: f64,
}

/// The persona's emotional-state engine.
///
/// Construct once per persona; the affect state is never reset short of
/// dropping the engine. All timestamps are injected by the caller.
#[derive(Debug, Clone)]
pub struct PersonaEngine {
    identity: PersonaIdentity,
    traits: PersonalityTraits,
    tendencies: Tendencies,
    user_trust: f64,
    config: EngineConfig,
    model: AffectModel,
    familiarity: FamiliarityTracker,
}

impl PersonaEngine {
    /// Build an engine with the default persona profile.
    ///
    /// Fails fast on invalid configuration, before any interaction is
    /// processed.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        Self::with_profile(
            config,
            PersonaIdentity::default(),
            PersonalityTraits::default(),
            Tendencies::default(),
        )
    }

    /// Build an engine with a custom persona profile.
    pub fn with_profile(
        config: EngineConfig,
        identity: PersonaIdentity,
        traits: PersonalityTraits,
        tendencies: Tendencies,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            identity,
            traits,
            tendencies,
            user_trust: DEFAULT_USER_TRUST,
            familiarity: FamiliarityTracker::new(&config),
            model: AffectModel::new(config.clone()),
            config,
        })
    }

    /// Process one interaction: update the affect state and derive the
    /// directive report for the prompt builder.
    ///
    /// `now` must come from the caller; the engine never reads a clock.
    pub fn analyze(&mut self, text: &str, user_id: &str, now: DateTime<Utc>) -> DirectiveReport {
        let features = analyze_text(text);
        let topics = detect_topics(text);
        let familiarity = self.familiarity.touch(user_id);
        let state = self
            .model
            .update(&features, &topics, familiarity, &self.traits, text, now);
        let tone = Tone::classify(&state);
        let directives =
            generate_directives(tone, &topics, &self.tendencies, &self.traits, self.user_trust);

        log::debug!(
            "interaction from {user_id}: tone {tone}, {} directives, valence {:.2}, fatigue {:.2}",
            directives.len(),
            state.valence,
            state.fatigue,
        );

        DirectiveReport {
            tone,
            directives,
            valence: state.valence,
            arousal: state.arousal,
            dominance: state.dominance,
            stability: state.stability,
            fatigue: state.fatigue,
            familiarity,
            sarcasm_probability: self.tendencies.sarcasm.base_probability * self.user_trust,
            philosophy_probability: self.tendencies.philosophy.base_probability
                * self.traits.openness,
        }
    }

    /// Render the prompt context block for a report.
    pub fn render_context(&self, report: &DirectiveReport) -> String {
        persona::render(report, &self.traits, &self.tendencies)
    }

    pub fn affect(&self) -> &AffectState {
        self.model.state()
    }

    pub fn history(&self) -> &EmotionalHistory {
        self.model.history()
    }

    pub fn identity(&self) -> &PersonaIdentity {
        &self.identity
    }

    pub fn traits(&self) -> &PersonalityTraits {
        &self.traits
    }

    pub fn tendencies(&self) -> &Tendencies {
        &self.tendencies
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn user_trust(&self) -> f64 {
        self.user_trust
    }

    /// Adjust the persona-wide user trust, clamped to [0, 1].
    pub fn set_user_trust(&mut self, trust: f64) {
        self.user_trust = trust.clamp(0.0, 1.0);
    }

    /// Familiarity with a user, if they have interacted before.
    pub fn familiarity(&self, user_id: &str) -> Option<f64> {
        self.familiarity.get(user_id)
    }
}

/// Clone-able handle that serializes engine access for concurrent hosts.
///
/// The lock spans the whole `analyze` sequence, so interleaved callers
/// observe a strict arrival order with no torn read-modify-write.
#[derive(Clone)]
pub struct SharedPersonaEngine {
    inner: Arc<Mutex<PersonaEngine>>,
}

impl SharedPersonaEngine {
    pub fn new(engine: PersonaEngine) -> Self {
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    /// Serialized [`PersonaEngine::analyze`].
    pub fn analyze(&self, text: &str, user_id: &str, now: DateTime<Utc>) -> DirectiveReport {
        self.inner.lock().analyze(text, user_id, now)
    }

    /// Serialized [`PersonaEngine::render_context`].
    pub fn render_context(&self, report: &DirectiveReport) -> String {
        self.inner.lock().render_context(report)
    }

    /// Run a closure against the locked engine, for reads that need a
    /// consistent snapshot.
    pub fn with<R>(&self, f: impl FnOnce(&PersonaEngine) -> R) -> R {
        f(&self.inner.lock())
    }
}

// ============================================================================
// Tests
// ============================================================================
