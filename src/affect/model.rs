//! The affect state machine.
//!
//! One transition per inbound interaction, over the persona-wide
//! [`AffectState`]. The transition is a pure function of
//! `(state, features, topics, familiarity, traits, now)`: time is always
//! injected by the caller, never read from a clock, so identical inputs
//! always produce identical successor states.
//!
//! Transition order, per interaction:
//!
//! 1. recompute fatigue from idle time and history length
//! 2. accumulate valence/arousal impacts from topics and text features
//! 3. apply impacts damped by `(1 - fatigue)`, clamping each axis
//! 4. decay stability by the absolute valence impact, floored
//! 5. append the post-transition snapshot to the bounded history
//! 6. stamp the interaction time

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::analysis::{TextFeatures, Topic};
use crate::config::EngineConfig;
use crate::persona::PersonalityTraits;

use super::history::{EmotionalHistory, HistoryEntry};
use super::state::AffectState;

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Discrete-time, non-terminating state machine over the shared affect
/// vector. Lives for the lifetime of the owning persona.
#[derive(Debug, Clone)]
pub struct AffectModel {
    state: AffectState,
    history: EmotionalHistory,
    last_interaction: Option<DateTime<Utc>>,
    config: EngineConfig,
}

impl AffectModel {
    /// Start from the default waking state with an empty history.
    ///
    /// `config` is assumed validated; the engine checks it first.
    pub fn new(config: EngineConfig) -> Self {
        Self {
            state: AffectState::default(),
            history: EmotionalHistory::new(config.history_capacity),
            last_interaction: None,
            config,
        }
    }

    pub fn state(&self) -> &AffectState {
        &self.state
    }

    pub fn history(&self) -> &EmotionalHistory {
        &self.history
    }

    pub fn last_interaction(&self) -> Option<DateTime<Utc>> {
        self.last_interaction
    }

    /// Run one transition and return the resulting snapshot.
    ///
    /// `familiarity` is the post-touch value for the interacting user and
    /// `text` is the raw message, retained truncated in the history.
    /// Negative elapsed time (host clock skew) is treated as zero idle.
    pub fn update(
        &mut self,
        features: &TextFeatures,
        topics: &HashSet<Topic>,
        familiarity: f64,
        traits: &PersonalityTraits,
        text: &str,
        now: DateTime<Utc>,
    ) -> AffectState {
        let hours_idle = self
            .last_interaction
            .map(|last| ((now - last).num_milliseconds() as f64 / MILLIS_PER_HOUR).max(0.0))
            .unwrap_or(0.0);
        self.state.fatigue = (self.config.fatigue_time_coeff * hours_idle
            + self.config.fatigue_history_coeff * self.history.len() as f64)
            .clamp(0.0, 1.0);

        let mut valence_impact = 0.0;
        if topics.contains(&Topic::Personal) {
            valence_impact += self.config.topic_weight_personal * familiarity;
        }
        if topics.contains(&Topic::Relational) {
            valence_impact += self.config.topic_weight_relational * familiarity;
        }
        valence_impact += self.config.complexity_weight * (features.complexity - 0.5);

        let mut arousal_impact = 0.0;
        if topics.contains(&Topic::Philosophy) {
            arousal_impact += self.config.topic_weight_philosophy * traits.openness;
        }
        arousal_impact += self.config.intensity_weight * features.linguistic_intensity;

        let damping = 1.0 - self.state.fatigue;
        self.state.valence = (self.state.valence + valence_impact * damping).clamp(-1.0, 1.0);
        self.state.arousal = (self.state.arousal + arousal_impact * damping).clamp(0.0, 1.0);
        self.state.stability = (self.state.stability
            - self.config.stability_decay * valence_impact.abs())
        .max(self.config.stability_floor);

        self.history.push(HistoryEntry::new(now, self.state, text));
        self.last_interaction = Some(now);

        log::trace!(
            "affect transition: valence {:.3} arousal {:.3} stability {:.3} fatigue {:.3}",
            self.state.valence,
            self.state.arousal,
            self.state.stability,
            self.state.fatigue,
        );

        self.state
    }
}

// ============================================================================
// Tests
// ============================================================================
