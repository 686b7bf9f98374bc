//! Per-user familiarity tracking.
//!
//! Familiarity is a saturating scalar per user id: initialized lazily on
//! first contact, bumped on every repeat interaction, capped strictly
//! below 1.0. It never decreases.

use std::collections::HashMap;

use crate::config::EngineConfig;

/// Tracks how familiar the persona is with each user.
#[derive(Debug, Clone)]
pub struct FamiliarityTracker {
    scores: HashMap<String, f64>,
    init: f64,
    increment: f64,
    cap: f64,
}

impl FamiliarityTracker {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            scores: HashMap::new(),
            init: config.familiarity_init,
            increment: config.familiarity_increment,
            cap: config.familiarity_cap,
        }
    }

    /// Record an interaction with `user_id` and return the familiarity to
    /// use for it.
    ///
    /// First contact initializes the entry and returns the initial value
    /// with NO increment; repeat contacts increment first (capped), then
    /// return. Callers therefore always see the post-touch value.
    pub fn touch(&mut self, user_id: &str) -> f64 {
        match self.scores.get_mut(user_id) {
            Some(score) => {
                *score = (*score + self.increment).min(self.cap);
                *score
            }
            None => {
                self.scores.insert(user_id.to_string(), self.init);
                self.init
            }
        }
    }

    /// Current familiarity without recording an interaction.
    pub fn get(&self, user_id: &str) -> Option<f64> {
        self.scores.get(user_id).copied()
    }

    /// Number of users seen so far.
    pub fn known_users(&self) -> usize {
        self.scores.len()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker() -> FamiliarityTracker {
        FamiliarityTracker::new(&EngineConfig::default())
    }

    #[test]
    fn test_first_touch_initializes_without_increment() {
        let mut tracker = tracker();
        assert_eq!(tracker.touch("U1"), 0.1);
        assert_eq!(tracker.get("U1"), Some(0.1));
    }

    #[test]
    fn test_repeat_touch_increments() {
        let mut tracker = tracker();
        tracker.touch("U1");
        assert!((tracker.touch("U1") - 0.15).abs() < 1e-12);
        assert!((tracker.touch("U1") - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_familiarity_is_monotone_and_saturates_below_one() {
        let mut tracker = tracker();
        let mut previous = tracker.touch("U1");
        for _ in 0..50 {
            let current = tracker.touch("U1");
            assert!(current >= previous);
            assert!(current < 1.0);
            previous = current;
        }
        assert!((previous - 0.95).abs() < 1e-12);
    }

    #[test]
    fn test_users_are_tracked_independently() {
        let mut tracker = tracker();
        tracker.touch("U1");
        tracker.touch("U1");
        assert_eq!(tracker.touch("U2"), 0.1);
        assert_eq!(tracker.known_users(), 2);
        assert!(tracker.get("U3").is_none());
    }
}
