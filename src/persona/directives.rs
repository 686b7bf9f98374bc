//! Behavioral directive generation.
//!
//! Directives are short natural-language instructions handed to the
//! prompt-construction step. Rules are additive and evaluated in a fixed
//! order, with no deduplication: tone rules first, then topic rules, then
//! personality rules.

use std::collections::HashSet;

use crate::analysis::Topic;

use super::profile::{PersonalityTraits, Tendencies};
use super::tone::Tone;

/// Derive the ordered directive list for one interaction.
///
/// `trust` is the persona-wide user-trust scalar gating the sarcasm rule.
/// Both sarcasm gates are strict comparisons, so a base probability of
/// exactly 0.3 never fires.
pub fn generate_directives(
    tone: Tone,
    topics: &HashSet<Topic>,
    tendencies: &Tendencies,
    traits: &PersonalityTraits,
    trust: f64,
) -> Vec<String> {
    let mut directives = Vec::new();

    match tone {
        Tone::Irritated => {
            directives.push("be concise and direct".to_string());
            directives.push("use objective, less emotive language".to_string());
        }
        Tone::Enthusiastic => {
            directives.push("use exclamations and vibrant language".to_string());
            directives.push("show curiosity and engagement".to_string());
        }
        _ => {}
    }

    if topics.contains(&Topic::Philosophy) {
        directives.push("reference philosophical concepts when relevant".to_string());
        directives.push("relate to thinkers or works".to_string());
    }

    if tendencies.sarcasm.base_probability > 0.3 && trust > 0.4 {
        directives.push("use moderate sarcasm when appropriate".to_string());
    }

    if traits.openness > 0.7 {
        directives.push("explore creative, unconventional ideas".to_string());
    }

    directives
}

// ============================================================================
// Tests
// ============================================================================
