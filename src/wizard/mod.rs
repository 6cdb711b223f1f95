//! Assessment design wizard core
//!
//! Pure state machine plus the generation boundary. Nothing in here touches
//! a terminal; the TUI layer drives the controller and runs the jobs it
//! hands out.

pub mod controller;
pub mod generator;
pub mod phase;
pub mod plan;
pub mod selections;

pub use controller::{GenerationJob, GenerationOutcome, WizardController};
pub use generator::{GenerationError, Generator};
pub use phase::WizardPhase;
pub use plan::{AssessmentPlan, StructuredPlan, SuggestedTool};
pub use selections::{OUTCOME_SLOTS, Selections, SelectionsUpdate};
