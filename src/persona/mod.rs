//! Persona layer: static profile, tone classification, behavioral
//! directives, and prompt-context rendering.
//!
//! Everything here is either immutable configuration (traits, tendencies,
//! identity) or a pure function over an affect snapshot. The mutable
//! state lives in [`crate::affect`].

pub mod context;
pub mod directives;
pub mod profile;
pub mod tone;

pub use context::render;
pub use directives::generate_directives;
pub use profile::{BehaviorTendency, PersonaIdentity, PersonalityTraits, Tendencies};
pub use tone::Tone;
