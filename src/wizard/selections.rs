//! Accumulating user input for the wizard
//!
//! Selections is a pure data container with update-merge semantics. It does
//! no validation - the views gate advancement on non-empty input before the
//! controller ever sees it.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Number of course learning outcome slots
///
/// The slot count is fixed for the whole session. Slots may be blank but
/// are never removed or reordered.
pub const OUTCOME_SLOTS: usize = 3;

/// User input collected across the wizard steps
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selections {
    /// Field of study (free text, step 1)
    pub field: String,

    /// Student level (one of the configured set, step 2)
    pub level: String,

    /// Course learning outcome slots (step 3)
    pub outcomes: [String; OUTCOME_SLOTS],
}

/// A partial update to Selections
///
/// Unset fields leave the current value unchanged. Outcome slots are
/// replaced wholesale when provided, never merged element-wise.
#[derive(Debug, Clone, Default)]
pub struct SelectionsUpdate {
    pub field: Option<String>,
    pub level: Option<String>,
    pub outcomes: Option<[String; OUTCOME_SLOTS]>,
}

impl SelectionsUpdate {
    /// Update just the field of study
    pub fn field(value: impl Into<String>) -> Self {
        Self {
            field: Some(value.into()),
            ..Self::default()
        }
    }

    /// Update just the student level
    pub fn level(value: impl Into<String>) -> Self {
        Self {
            level: Some(value.into()),
            ..Self::default()
        }
    }

    /// Replace the outcome slots wholesale
    pub fn outcomes(value: [String; OUTCOME_SLOTS]) -> Self {
        Self {
            outcomes: Some(value),
            ..Self::default()
        }
    }
}

impl Selections {
    /// Create empty selections (session start)
    pub fn new() -> Self {
        debug!("Selections::new: called");
        Self::default()
    }

    /// Merge a partial update into the current selections
    pub fn update(&mut self, partial: SelectionsUpdate) {
        debug!(?partial, "Selections::update: called");
        if let Some(field) = partial.field {
            self.field = field;
        }
        if let Some(level) = partial.level {
            self.level = level;
        }
        if let Some(outcomes) = partial.outcomes {
            self.outcomes = outcomes;
        }
    }

    /// Restore the empty initial state
    pub fn reset(&mut self) {
        debug!("Selections::reset: called");
        *self = Self::default();
    }

    /// The trimmed non-empty outcome slots, in slot order
    pub fn filled_outcomes(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .map(|o| o.trim())
            .filter(|o| !o.is_empty())
            .collect()
    }

    /// Filled outcomes joined with "; " for prompt embedding
    pub fn joined_outcomes(&self) -> String {
        self.filled_outcomes().join("; ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let s = Selections::new();
        assert_eq!(s.field, "");
        assert_eq!(s.level, "");
        assert_eq!(s.outcomes, ["", "", ""].map(String::from));
    }

    #[test]
    fn test_update_merges_unset_fields_unchanged() {
        let mut s = Selections::new();
        s.update(SelectionsUpdate::field("Mechanical Engineering"));
        s.update(SelectionsUpdate::level("Undergraduate"));

        assert_eq!(s.field, "Mechanical Engineering");
        assert_eq!(s.level, "Undergraduate");

        // Updating outcomes leaves field and level alone
        s.update(SelectionsUpdate::outcomes([
            "Analyze stress".to_string(),
            String::new(),
            "Design a system".to_string(),
        ]));
        assert_eq!(s.field, "Mechanical Engineering");
        assert_eq!(s.level, "Undergraduate");
    }

    #[test]
    fn test_update_is_idempotent() {
        let mut once = Selections::new();
        once.update(SelectionsUpdate::field("Physics"));

        let mut twice = Selections::new();
        twice.update(SelectionsUpdate::field("Physics"));
        twice.update(SelectionsUpdate::field("Physics"));

        assert_eq!(once, twice);
    }

    #[test]
    fn test_outcomes_replaced_wholesale() {
        let mut s = Selections::new();
        s.update(SelectionsUpdate::outcomes([
            "A".to_string(),
            "B".to_string(),
            "C".to_string(),
        ]));
        s.update(SelectionsUpdate::outcomes([
            "X".to_string(),
            String::new(),
            String::new(),
        ]));

        // No element-wise merge: slots 2 and 3 are blank now
        assert_eq!(s.outcomes, ["X", "", ""].map(String::from));
    }

    #[test]
    fn test_reset_returns_to_initial_state() {
        let mut s = Selections::new();
        s.update(SelectionsUpdate::field("Chemistry"));
        s.update(SelectionsUpdate::level("Doctorate"));
        s.update(SelectionsUpdate::outcomes([
            "A".to_string(),
            "B".to_string(),
            "C".to_string(),
        ]));

        s.reset();
        assert_eq!(s, Selections::new());
    }

    #[test]
    fn test_filled_outcomes_skips_blank_slots() {
        let mut s = Selections::new();
        s.update(SelectionsUpdate::outcomes([
            "Analyze stress".to_string(),
            "  ".to_string(),
            " Design a system ".to_string(),
        ]));

        assert_eq!(s.filled_outcomes(), vec!["Analyze stress", "Design a system"]);
        assert_eq!(s.joined_outcomes(), "Analyze stress; Design a system");
    }
}
