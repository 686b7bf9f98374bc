//! Prompt context rendering.
//!
//! Turns a [`DirectiveReport`] plus the static profile into the text
//! block injected ahead of the language-model prompt. Pure formatting:
//! no side effects, no I/O.
//!
//! # Example output
//!
//! ```text
//! # PERSONA CONTEXT
//! ## Emotional State
//! - Behavioral Tone: enthusiastic
//! - Valence: Positive
//! - Arousal: High
//! - Stability: 59%
//!
//! ## Behavioral Directives
//! 1. use exclamations and vibrant language
//! 2. show curiosity and engagement
//!
//! ## Personality Traits
//! - Openness: 90%
//! - Sarcasm: 70%
//! - Philosophy: 80%
//! ```

use std::fmt::Write as _;

use crate::engine::DirectiveReport;

use super::profile::{PersonalityTraits, Tendencies};

/// Render the persona context block.
pub fn render(
    report: &DirectiveReport,
    traits: &PersonalityTraits,
    tendencies: &Tendencies,
) -> String {
    let valence_label = if report.valence > 0.0 {
        "Positive"
    } else {
        "Negative"
    };
    let arousal_label = if report.arousal > 0.5 { "High" } else { "Low" };

    let mut block = String::new();
    let _ = writeln!(block, "# PERSONA CONTEXT");
    let _ = writeln!(block, "## Emotional State");
    let _ = writeln!(block, "- Behavioral Tone: {}", report.tone);
    let _ = writeln!(block, "- Valence: {valence_label}");
    let _ = writeln!(block, "- Arousal: {arousal_label}");
    let _ = writeln!(block, "- Stability: {}%", percent(report.stability));
    let _ = writeln!(block);
    let _ = writeln!(block, "## Behavioral Directives");
    for (i, directive) in report.directives.iter().enumerate() {
        let _ = writeln!(block, "{}. {}", i + 1, directive);
    }
    let _ = writeln!(block);
    let _ = writeln!(block, "## Personality Traits");
    let _ = writeln!(block, "- Openness: {}%", percent(traits.openness));
    let _ = writeln!(block, "- Sarcasm: {}%", percent(tendencies.sarcasm.intensity));
    let _ = writeln!(
        block,
        "- Philosophy: {}%",
        percent(tendencies.philosophy.intensity)
    );
    block
}

/// Truncated integer percentage (0.59.. renders as 59).
fn percent(value: f64) -> i64 {
    (value * 100.0) as i64
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persona::Tone;

    fn report(tone: Tone, valence: f64, arousal: f64, directives: &[&str]) -> DirectiveReport {
        DirectiveReport {
            tone,
            directives: directives.iter().map(|d| d.to_string()).collect(),
            valence,
            arousal,
            dominance: 0.7,
            stability: 0.6,
            fatigue: 0.0,
            familiarity: 0.1,
            sarcasm_probability: 0.15,
            philosophy_probability: 0.36,
        }
    }

    #[test]
    fn test_render_layout() {
        let block = render(
            &report(Tone::Enthusiastic, 0.7, 0.7, &["a", "b"]),
            &PersonalityTraits::default(),
            &Tendencies::default(),
        );
        assert!(block.starts_with("# PERSONA CONTEXT\n"));
        assert!(block.contains("- Behavioral Tone: enthusiastic\n"));
        assert!(block.contains("- Valence: Positive\n"));
        assert!(block.contains("- Arousal: High\n"));
        assert!(block.contains("- Stability: 60%\n"));
        assert!(block.contains("1. a\n2. b\n"));
        assert!(block.contains("- Openness: 90%\n"));
        assert!(block.contains("- Sarcasm: 70%\n"));
        assert!(block.ends_with("- Philosophy: 80%\n"));
    }

    #[test]
    fn test_negative_low_labels() {
        let block = render(
            &report(Tone::Discouraged, -0.2, 0.3, &[]),
            &PersonalityTraits::default(),
            &Tendencies::default(),
        );
        assert!(block.contains("- Valence: Negative\n"));
        assert!(block.contains("- Arousal: Low\n"));
    }

    #[test]
    fn test_zero_valence_labels_negative() {
        // The sign label is strictly positive-only, as is the arousal gate.
        let block = render(
            &report(Tone::Neutral, 0.0, 0.5, &[]),
            &PersonalityTraits::default(),
            &Tendencies::default(),
        );
        assert!(block.contains("- Valence: Negative\n"));
        assert!(block.contains("- Arousal: Low\n"));
    }

    #[test]
    fn test_empty_directive_list_renders_empty_section() {
        let block = render(
            &report(Tone::Neutral, 0.1, 0.3, &[]),
            &PersonalityTraits::default(),
            &Tendencies::default(),
        );
        assert!(block.contains("## Behavioral Directives\n\n## Personality Traits\n"));
    }

    #[test]
    fn test_stability_percentage_truncates() {
        let mut r = report(Tone::Neutral, 0.1, 0.3, &[]);
        r.stability = 0.599;
        let block = render(&r, &PersonalityTraits::default(), &Tendencies::default());
        assert!(block.contains("- Stability: 59%\n"));
    }
}
