//! # Asteria
//!
//! Deterministic emotional-state engine for LLM-backed personas.
//!
//! The engine converts incoming message text and a user identity into an
//! updated multidimensional affect state, a discrete behavioral tone, and
//! an ordered list of behavioral directives, then renders them into a
//! context block for injection into a language-model prompt.
//!
//! # Architecture
//!
//! ```text
//! analyze(text, user_id, now)
//!   ↓  analysis::features   (word count, complexity, punctuation intensity)
//!   ↓  analysis::topics     (closed topic vocabulary, keyword tables)
//!   ↓  affect::familiarity  (per-user familiarity scalar)
//!   ↓  affect::model        (valence/arousal/dominance/stability/fatigue
//!                            transition + bounded emotional history)
//!   ↓  persona::tone        (ordered threshold rules → discrete tone)
//!   ↓  persona::directives  (ordered additive directive rules)
//!   ↓  persona::context     (rendered prompt context block)
//! ```
//!
//! The engine performs no I/O and reads no ambient clock: timestamps are
//! always passed in by the caller, which keeps every transition pure and
//! reproducible. Hosts that process messages concurrently wrap the engine
//! in [`SharedPersonaEngine`], which serializes the whole
//! read-modify-write sequence behind one lock.

pub mod affect;
pub mod analysis;
pub mod config;
pub mod engine;
pub mod error;
pub mod persona;

// Re-exports for the common call path
pub use affect::{AffectState, EmotionalHistory, FamiliarityTracker, HistoryEntry};
pub use analysis::{analyze_text, detect_topics, TextFeatures, Topic};
pub use config::EngineConfig;
pub use engine::{DirectiveReport, PersonaEngine, SharedPersonaEngine};
pub use error::ConfigError;
pub use persona::{
    BehaviorTendency, PersonaIdentity, PersonalityTraits, Tendencies, Tone,
};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
