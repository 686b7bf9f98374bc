//! Topic detection over a closed, compile-time-checked vocabulary.
//!
//! Each topic is backed by a static keyword table; a topic is present if
//! any of its keywords occurs as a case-insensitive substring of the
//! message. The persona converses in Portuguese, so the keyword tables
//! are Portuguese.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The five topics the persona reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Philosophy,
    Logic,
    Personal,
    Relational,
    Task,
}

impl Topic {
    /// All topics in canonical order.
    pub const ALL: [Topic; 5] = [
        Self::Philosophy,
        Self::Logic,
        Self::Personal,
        Self::Relational,
        Self::Task,
    ];

    /// Keyword table for this topic. Matching is by lowercase substring,
    /// so stems like "filosof" cover the whole word family.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Self::Philosophy => &[
                "filosof",
                "existência",
                "sentido",
                "moral",
                "ética",
                "cosmos",
            ],
            Self::Logic => &["lógica", "razão", "argumento", "paradoxo", "silogismo"],
            // "eu " keeps its trailing space: bare "eu" is a substring of
            // far too many Portuguese words.
            Self::Personal => &["eu ", "meu", "minha", "minhas coisas", "meus sentimentos"],
            Self::Relational => &["você", "nós", "nosso", "juntos", "relacionamento"],
            Self::Task => &["fazer", "tarefa", "problema", "solução", "ajuda"],
        }
    }

    /// Stable lowercase name, matching the serde representation.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Philosophy => "philosophy",
            Self::Logic => "logic",
            Self::Personal => "personal",
            Self::Relational => "relational",
            Self::Task => "task",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Detect every topic whose keyword table matches the text.
///
/// Zero, one, or many topics may match; the set carries no order.
pub fn detect_topics(text: &str) -> HashSet<Topic> {
    let lowered = text.to_lowercase();
    Topic::ALL
        .iter()
        .copied()
        .filter(|topic| topic.keywords().iter().any(|kw| lowered.contains(kw)))
        .collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_topics_in_plain_text() {
        assert!(detect_topics("bom dia").is_empty());
        assert!(detect_topics("").is_empty());
    }

    #[test]
    fn test_philosophy_and_relational_in_existential_question() {
        let topics =
            detect_topics("O que você acha da natureza paradoxal da existência humana?");
        assert!(topics.contains(&Topic::Philosophy));
        assert!(topics.contains(&Topic::Relational));
        assert_eq!(topics.len(), 2);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let topics = detect_topics("FILOSOFIA e LÓGICA");
        assert!(topics.contains(&Topic::Philosophy));
        assert!(topics.contains(&Topic::Logic));
    }

    #[test]
    fn test_stem_matches_word_family() {
        // "filosof" covers "filosofia", "filosófico", "filosofar".
        assert!(detect_topics("vamos filosofar").contains(&Topic::Philosophy));
    }

    #[test]
    fn test_personal_requires_word_boundary_for_eu() {
        // "europeu" must not trigger the personal topic.
        assert!(!detect_topics("um país europeu").contains(&Topic::Personal));
        assert!(detect_topics("eu gosto disso").contains(&Topic::Personal));
    }

    #[test]
    fn test_task_topic() {
        let topics = detect_topics("preciso de ajuda com um problema");
        assert_eq!(topics, HashSet::from([Topic::Task]));
    }

    #[test]
    fn test_serde_names_are_snake_case() {
        let json = serde_json::to_string(&Topic::Philosophy).unwrap();
        assert_eq!(json, "\"philosophy\"");
        for topic in Topic::ALL {
            let json = serde_json::to_string(&topic).unwrap();
            assert_eq!(json, format!("\"{}\"", topic.name()));
        }
    }
}
