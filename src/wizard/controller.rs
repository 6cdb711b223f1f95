//! Wizard state machine
//!
//! The controller owns the phase, the selections, and the artifacts each
//! generation produces. It never performs IO itself: requesting generation
//! returns a job description for the caller to run, and the caller hands
//! the result back through the complete_* methods.

use tracing::debug;

use crate::wizard::generator::GenerationError;
use crate::wizard::phase::WizardPhase;
use crate::wizard::plan::AssessmentPlan;
use crate::wizard::selections::{Selections, SelectionsUpdate};

/// Lifecycle of the most recent generation request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum GenerationOutcome {
    #[default]
    Idle,
    InFlight,
    Succeeded,
    Failed(String),
}

/// A generation the caller should run on the controller's behalf
///
/// Inputs are captured at request time so a later selection edit cannot
/// race with an in-flight generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationJob {
    Options {
        selections: Selections,
    },
    Plan {
        selections: Selections,
        assessment_type: String,
    },
}

/// Drives the five-phase assessment design flow
#[derive(Debug, Clone, Default)]
pub struct WizardController {
    phase: WizardPhase,
    selections: Selections,
    options: Vec<String>,
    chosen: Option<String>,
    plan: Option<AssessmentPlan>,
    outcome: GenerationOutcome,
}

impl WizardController {
    pub fn new() -> Self {
        debug!("WizardController::new: called");
        Self::default()
    }

    pub fn phase(&self) -> WizardPhase {
        self.phase
    }

    pub fn selections(&self) -> &Selections {
        &self.selections
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn chosen(&self) -> Option<&str> {
        self.chosen.as_deref()
    }

    pub fn plan(&self) -> Option<&AssessmentPlan> {
        self.plan.as_ref()
    }

    pub fn outcome(&self) -> &GenerationOutcome {
        &self.outcome
    }

    pub fn is_in_flight(&self) -> bool {
        self.outcome == GenerationOutcome::InFlight
    }

    /// Merge a partial update into the selections
    pub fn update_selections(&mut self, partial: SelectionsUpdate) {
        debug!("update_selections: called");
        self.selections.update(partial);
    }

    /// Move to the next phase, clamped at the last
    pub fn advance(&mut self) {
        let next = self.phase.next();
        debug!(from = %self.phase, to = %next, "advance: called");
        self.phase = next;
    }

    /// Move to the previous phase, clamped at the first
    ///
    /// Going back always dismisses a failed outcome so stale errors never
    /// follow the user to an earlier step.
    pub fn retreat(&mut self) {
        let prev = self.phase.prev();
        debug!(from = %self.phase, to = %prev, "retreat: called");
        self.phase = prev;
        if matches!(self.outcome, GenerationOutcome::Failed(_)) {
            self.outcome = GenerationOutcome::Idle;
        }
    }

    /// Request assessment-type suggestions
    ///
    /// Only valid in the outcomes phase and while no generation is in
    /// flight; otherwise the request is a no-op.
    pub fn request_assessment_options(&mut self) -> Option<GenerationJob> {
        debug!(phase = %self.phase, "request_assessment_options: called");
        if self.phase != WizardPhase::CollectingOutcomes || self.is_in_flight() {
            return None;
        }
        self.outcome = GenerationOutcome::InFlight;
        Some(GenerationJob::Options {
            selections: self.selections.clone(),
        })
    }

    /// Request the detailed plan for a chosen assessment type
    ///
    /// Records the choice so a retry after failure reuses it.
    pub fn request_detailed_plan(&mut self, assessment_type: &str) -> Option<GenerationJob> {
        debug!(%assessment_type, phase = %self.phase, "request_detailed_plan: called");
        if self.phase != WizardPhase::PresentingOptions || self.is_in_flight() {
            return None;
        }
        self.chosen = Some(assessment_type.to_string());
        self.outcome = GenerationOutcome::InFlight;
        Some(GenerationJob::Plan {
            selections: self.selections.clone(),
            assessment_type: assessment_type.to_string(),
        })
    }

    /// Re-run the generation that belongs to the current phase
    ///
    /// In the options phase this reuses the previously chosen assessment
    /// type; nothing is re-requested if no choice was ever made.
    pub fn retry_current(&mut self) -> Option<GenerationJob> {
        debug!(phase = %self.phase, "retry_current: called");
        if self.is_in_flight() {
            return None;
        }
        match self.phase {
            WizardPhase::CollectingOutcomes => self.request_assessment_options(),
            WizardPhase::PresentingOptions => {
                let chosen = self.chosen.clone()?;
                self.outcome = GenerationOutcome::InFlight;
                Some(GenerationJob::Plan {
                    selections: self.selections.clone(),
                    assessment_type: chosen,
                })
            }
            _ => None,
        }
    }

    /// Record the result of an options generation
    ///
    /// Success stores the options and advances; failure keeps the phase so
    /// the user can retry or go back.
    pub fn complete_options(&mut self, result: Result<Vec<String>, GenerationError>) {
        debug!(ok = result.is_ok(), "complete_options: called");
        match result {
            Ok(options) => {
                self.options = options;
                self.outcome = GenerationOutcome::Succeeded;
                self.advance();
            }
            Err(e) => {
                self.outcome = GenerationOutcome::Failed(e.to_string());
            }
        }
    }

    /// Record the result of a plan generation
    pub fn complete_plan(&mut self, result: Result<AssessmentPlan, GenerationError>) {
        debug!(ok = result.is_ok(), "complete_plan: called");
        match result {
            Ok(plan) => {
                self.plan = Some(plan);
                self.outcome = GenerationOutcome::Succeeded;
                self.advance();
            }
            Err(e) => {
                self.outcome = GenerationOutcome::Failed(e.to_string());
            }
        }
    }

    /// Return to the first phase with everything cleared
    pub fn reset_all(&mut self) {
        debug!("reset_all: called");
        *self = Self::default();
    }
}
