//! TUI application - keyboard handling
//!
//! The App struct owns the AppState and handles all keyboard events.
//! It does not do any rendering - that's delegated to the views module.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use super::state::AppState;
use crate::config::WizardConfig;
use crate::wizard::{GenerationOutcome, OUTCOME_SLOTS, WizardPhase};

/// TUI application
#[derive(Debug)]
pub struct App {
    /// Application state
    state: AppState,
}

impl App {
    /// Create a new application instance
    pub fn new(config: &WizardConfig) -> Self {
        Self {
            state: AppState::new(config),
        }
    }

    /// Get reference to state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Get mutable reference to state
    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    /// Handle a key event
    ///
    /// Returns true if the application should exit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C always quits, even mid-generation
        if let (KeyCode::Char('c'), KeyModifiers::CONTROL) = (key.code, key.modifiers) {
            debug!("App::handle_key: ctrl+c, quitting");
            return true;
        }

        // While a generation is in flight only quit keys are honored
        if self.state.controller.is_in_flight() {
            if key.code == KeyCode::Char('q') {
                debug!("App::handle_key: quit during generation");
                return true;
            }
            debug!(?key, "App::handle_key: ignored during generation");
            return false;
        }

        // A failed generation owns the keyboard until dismissed
        if matches!(self.state.controller.outcome(), GenerationOutcome::Failed(_)) {
            return self.handle_error_key(key);
        }

        match self.state.controller.phase() {
            WizardPhase::CollectingField => self.handle_field_key(key),
            WizardPhase::CollectingLevel => self.handle_level_key(key),
            WizardPhase::CollectingOutcomes => self.handle_outcomes_key(key),
            WizardPhase::PresentingOptions => self.handle_options_key(key),
            WizardPhase::PresentingPlan => self.handle_plan_key(key),
        }
    }

    /// Keys on the error panel: retry or go back
    fn handle_error_key(&mut self, key: KeyEvent) -> bool {
        debug!(?key, "App::handle_error_key: called");
        match key.code {
            KeyCode::Char('r') => self.state.retry(),
            KeyCode::Esc => self.state.go_back(),
            KeyCode::Char('q') => return true,
            _ => {}
        }
        false
    }

    /// Step 1: free-text field of study
    fn handle_field_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Enter => {
                self.state.commit_field();
            }
            KeyCode::Backspace => {
                self.state.field_input.pop();
            }
            KeyCode::Char(c) => {
                self.state.field_input.push(c);
            }
            KeyCode::Esc => return true,
            _ => {}
        }
        false
    }

    /// Step 2: pick a level from the configured list
    fn handle_level_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.state.level_index = self.state.level_index.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.state.level_index + 1 < self.state.levels.len() {
                    self.state.level_index += 1;
                }
            }
            KeyCode::Enter => {
                self.state.commit_level();
            }
            KeyCode::Esc => self.state.go_back(),
            KeyCode::Char('q') => return true,
            _ => {}
        }
        false
    }

    /// Step 3: free-text outcome slots, Tab cycles focus
    fn handle_outcomes_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.state.outcome_focus = (self.state.outcome_focus + 1) % OUTCOME_SLOTS;
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.state.outcome_focus = (self.state.outcome_focus + OUTCOME_SLOTS - 1) % OUTCOME_SLOTS;
            }
            KeyCode::Enter => {
                self.state.commit_outcomes();
            }
            KeyCode::Backspace => {
                self.state.outcome_inputs[self.state.outcome_focus].pop();
            }
            KeyCode::Char(c) => {
                self.state.outcome_inputs[self.state.outcome_focus].push(c);
            }
            KeyCode::Esc => self.state.go_back(),
            _ => {}
        }
        false
    }

    /// Step 4: pick one of the suggested assessment types
    fn handle_options_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.state.option_index = self.state.option_index.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.state.option_index + 1 < self.state.controller.options().len() {
                    self.state.option_index += 1;
                }
            }
            KeyCode::Enter => {
                self.state.commit_option();
            }
            KeyCode::Esc => self.state.go_back(),
            KeyCode::Char('q') => return true,
            _ => {}
        }
        false
    }

    /// Step 5: scroll the plan, restart, or quit
    fn handle_plan_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.state.plan_scroll = self.state.plan_scroll.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.state.plan_scroll = self.state.plan_scroll.saturating_add(1);
            }
            KeyCode::Char('r') => {
                self.state.restart();
            }
            KeyCode::Esc => self.state.go_back(),
            KeyCode::Char('q') => return true,
            _ => {}
        }
        false
    }
}
