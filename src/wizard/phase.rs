//! Wizard phases
//!
//! The five steps form a closed linear sequence. Transitions move by
//! exactly one phase and clamp at both ends.

use tracing::debug;

/// Which step of the wizard is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum WizardPhase {
    /// Step 1: field of study input
    #[default]
    CollectingField,
    /// Step 2: student level selection
    CollectingLevel,
    /// Step 3: course learning outcome inputs
    CollectingOutcomes,
    /// Step 4: suggested assessment types
    PresentingOptions,
    /// Step 5: the detailed plan
    PresentingPlan,
}

impl WizardPhase {
    /// All phases in step order
    pub const ALL: [WizardPhase; 5] = [
        Self::CollectingField,
        Self::CollectingLevel,
        Self::CollectingOutcomes,
        Self::PresentingOptions,
        Self::PresentingPlan,
    ];

    /// The next phase, clamped at the terminal phase
    pub fn next(self) -> Self {
        debug!(?self, "WizardPhase::next: called");
        match self {
            Self::CollectingField => Self::CollectingLevel,
            Self::CollectingLevel => Self::CollectingOutcomes,
            Self::CollectingOutcomes => Self::PresentingOptions,
            Self::PresentingOptions => Self::PresentingPlan,
            Self::PresentingPlan => Self::PresentingPlan,
        }
    }

    /// The previous phase, clamped at the initial phase
    pub fn prev(self) -> Self {
        debug!(?self, "WizardPhase::prev: called");
        match self {
            Self::CollectingField => Self::CollectingField,
            Self::CollectingLevel => Self::CollectingField,
            Self::CollectingOutcomes => Self::CollectingLevel,
            Self::PresentingOptions => Self::CollectingOutcomes,
            Self::PresentingPlan => Self::PresentingOptions,
        }
    }

    /// 1-based step number for the header indicator
    pub fn step_number(self) -> usize {
        match self {
            Self::CollectingField => 1,
            Self::CollectingLevel => 2,
            Self::CollectingOutcomes => 3,
            Self::PresentingOptions => 4,
            Self::PresentingPlan => 5,
        }
    }

    /// Display name for the header
    pub fn display_name(self) -> &'static str {
        match self {
            Self::CollectingField => "Field",
            Self::CollectingLevel => "Level",
            Self::CollectingOutcomes => "Outcomes",
            Self::PresentingOptions => "Options",
            Self::PresentingPlan => "Plan",
        }
    }
}

impl std::fmt::Display for WizardPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_clamps_at_terminal() {
        assert_eq!(WizardPhase::CollectingField.next(), WizardPhase::CollectingLevel);
        assert_eq!(WizardPhase::PresentingOptions.next(), WizardPhase::PresentingPlan);
        assert_eq!(WizardPhase::PresentingPlan.next(), WizardPhase::PresentingPlan);
    }

    #[test]
    fn test_prev_clamps_at_initial() {
        assert_eq!(WizardPhase::PresentingPlan.prev(), WizardPhase::PresentingOptions);
        assert_eq!(WizardPhase::CollectingLevel.prev(), WizardPhase::CollectingField);
        assert_eq!(WizardPhase::CollectingField.prev(), WizardPhase::CollectingField);
    }

    #[test]
    fn test_phase_never_leaves_range() {
        // Arbitrary walk of next/prev stays inside the closed range and
        // moves by at most one step per call
        let mut phase = WizardPhase::default();
        let walk = [true, true, false, true, true, true, true, false, false, false, false, false];
        for forward in walk {
            let before = phase.step_number();
            phase = if forward { phase.next() } else { phase.prev() };
            let after = phase.step_number();
            assert!((1..=5).contains(&after));
            assert!(before.abs_diff(after) <= 1);
        }
    }

    #[test]
    fn test_step_numbers_are_ordered() {
        let numbers: Vec<usize> = WizardPhase::ALL.iter().map(|p| p.step_number()).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
    }
}
