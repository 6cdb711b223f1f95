//! TUI application state
//!
//! Everything the views need to draw a frame, plus the intent fields the
//! runner drains on tick. Input buffers live here rather than in the
//! controller so a keystroke never mutates wizard state until committed.

use tracing::debug;

use crate::config::WizardConfig;
use crate::wizard::{GenerationJob, OUTCOME_SLOTS, SelectionsUpdate, WizardController};

/// Spinner frames shown while a generation is in flight
pub const SPINNER_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];

/// Application state for the wizard TUI
#[derive(Debug)]
pub struct AppState {
    /// Wizard state machine
    pub controller: WizardController,
    /// Field-of-study input buffer
    pub field_input: String,
    /// Academic levels offered on step two
    pub levels: Vec<String>,
    /// Highlighted level index
    pub level_index: usize,
    /// Outcome input buffers, one per slot
    pub outcome_inputs: [String; OUTCOME_SLOTS],
    /// Which outcome slot has focus
    pub outcome_focus: usize,
    /// Highlighted assessment option index
    pub option_index: usize,
    /// Scroll offset in the plan view
    pub plan_scroll: u16,
    /// Current spinner frame
    pub spinner_frame: usize,
    /// Generation the runner should spawn on the next tick
    pub pending_job: Option<GenerationJob>,
    /// Set when the user wants to exit
    pub should_quit: bool,
}

impl AppState {
    /// Create state seeded with the configured level list
    pub fn new(config: &WizardConfig) -> Self {
        debug!(levels = config.levels.len(), "AppState::new: called");
        Self {
            controller: WizardController::new(),
            field_input: String::new(),
            levels: config.levels.clone(),
            level_index: 0,
            outcome_inputs: Default::default(),
            outcome_focus: 0,
            option_index: 0,
            plan_scroll: 0,
            spinner_frame: 0,
            pending_job: None,
            should_quit: false,
        }
    }

    /// Advance animation state; called on every tick
    pub fn tick(&mut self) {
        if self.controller.is_in_flight() {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
        }
    }

    pub fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_frame]
    }

    /// Commit the field buffer and move to the level step
    ///
    /// Returns false when the buffer is blank; the phase does not change.
    pub fn commit_field(&mut self) -> bool {
        let field = self.field_input.trim().to_string();
        debug!(%field, "AppState::commit_field: called");
        if field.is_empty() {
            return false;
        }
        self.controller.update_selections(SelectionsUpdate::field(field));
        self.controller.advance();
        true
    }

    /// Commit the highlighted level and move to the outcomes step
    pub fn commit_level(&mut self) {
        let level = self.levels[self.level_index].clone();
        debug!(%level, "AppState::commit_level: called");
        self.controller.update_selections(SelectionsUpdate::level(level));
        self.controller.advance();
    }

    /// Commit the outcome buffers and queue the options generation
    ///
    /// Returns false when every slot is blank.
    pub fn commit_outcomes(&mut self) -> bool {
        debug!("AppState::commit_outcomes: called");
        if self.outcome_inputs.iter().all(|o| o.trim().is_empty()) {
            return false;
        }
        self.controller
            .update_selections(SelectionsUpdate::outcomes(self.outcome_inputs.clone()));
        if let Some(job) = self.controller.request_assessment_options() {
            self.pending_job = Some(job);
        }
        true
    }

    /// Queue the plan generation for the highlighted option
    pub fn commit_option(&mut self) {
        let options = self.controller.options();
        if options.is_empty() {
            return;
        }
        let chosen = options[self.option_index.min(options.len() - 1)].clone();
        debug!(%chosen, "AppState::commit_option: called");
        if let Some(job) = self.controller.request_detailed_plan(&chosen) {
            self.pending_job = Some(job);
        }
    }

    /// Queue a retry of whatever generation the current phase owns
    pub fn retry(&mut self) {
        debug!("AppState::retry: called");
        if let Some(job) = self.controller.retry_current() {
            self.pending_job = Some(job);
        }
    }

    /// Step back one phase, re-seeding the input buffers from selections
    pub fn go_back(&mut self) {
        debug!(phase = %self.controller.phase(), "AppState::go_back: called");
        self.controller.retreat();
        self.sync_buffers();
    }

    /// Start the wizard over from a clean slate
    pub fn restart(&mut self) {
        debug!("AppState::restart: called");
        self.controller.reset_all();
        self.field_input.clear();
        self.level_index = 0;
        self.outcome_inputs = Default::default();
        self.outcome_focus = 0;
        self.option_index = 0;
        self.plan_scroll = 0;
    }

    /// Re-seed input buffers from committed selections after going back
    fn sync_buffers(&mut self) {
        let selections = self.controller.selections();
        self.field_input = selections.field.clone();
        if let Some(idx) = self.levels.iter().position(|l| *l == selections.level) {
            self.level_index = idx;
        }
        self.outcome_inputs = selections.outcomes.clone();
    }
}
