//! TUI Runner - main loop that owns the terminal and the generation tasks
//!
//! The WizardRunner is responsible for:
//! - Dispatching events to App for handling
//! - Rendering at ~30 FPS
//! - Spawning queued generation jobs on a background task
//! - Feeding results back into the controller

use std::sync::Arc;

use eyre::Result;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::Tui;
use super::app::App;
use super::events::{Event, EventHandler};
use super::views;
use crate::wizard::{AssessmentPlan, GenerationError, GenerationJob, Generator};

/// Result from a background generation task
#[derive(Debug)]
enum WizardTaskResult {
    /// Options generation finished
    Options(Result<Vec<String>, GenerationError>),
    /// Plan generation finished
    Plan(Result<AssessmentPlan, GenerationError>),
}

/// TUI Runner that manages the terminal and event loop
pub struct WizardRunner {
    /// Application state
    app: App,
    /// Terminal handle
    terminal: Tui,
    /// Event handler
    event_handler: EventHandler,
    /// Generation boundary shared with spawned tasks
    generator: Arc<Generator>,
    /// Receiver for generation task results
    result_rx: Option<mpsc::Receiver<WizardTaskResult>>,
    /// Handle to the background generation task
    task: Option<JoinHandle<()>>,
}

impl WizardRunner {
    /// Create a new runner over an initialized terminal
    pub fn new(terminal: Tui, app: App, generator: Arc<Generator>) -> Self {
        debug!("WizardRunner::new: called");
        Self {
            app,
            terminal,
            event_handler: EventHandler::new(),
            generator,
            result_rx: None,
            task: None,
        }
    }

    /// Run the TUI main loop
    pub async fn run(&mut self) -> Result<()> {
        debug!("WizardRunner::run: entering main loop");
        loop {
            self.terminal.draw(|frame| views::render(self.app.state(), frame))?;

            match self.event_handler.next().await? {
                Event::Tick => {
                    self.handle_tick();
                }
                Event::Key(key_event) => {
                    if self.app.handle_key(key_event) {
                        debug!("WizardRunner::run: quit requested");
                        break;
                    }
                }
                Event::Resize(width, height) => {
                    debug!(width, height, "WizardRunner::run: resize");
                }
            }

            if self.app.state().should_quit {
                debug!("WizardRunner::run: should_quit is true, breaking");
                break;
            }
        }

        // Abort any still-running generation so the task does not outlive us
        if let Some(task) = self.task.take() {
            debug!("WizardRunner::run: aborting in-flight generation task");
            task.abort();
        }

        debug!("WizardRunner::run: exiting");
        Ok(())
    }

    /// Handle tick event - periodic updates
    fn handle_tick(&mut self) {
        self.app.state_mut().tick();

        // Spawn a queued generation, if any
        if let Some(job) = self.app.state_mut().pending_job.take() {
            debug!(?job, "WizardRunner::handle_tick: spawning generation");
            self.spawn_generation(job);
        }

        self.process_results();
    }

    /// Spawn the generation job on a background task
    fn spawn_generation(&mut self, job: GenerationJob) {
        let (tx, rx) = mpsc::channel(1);
        let generator = Arc::clone(&self.generator);

        let handle = tokio::spawn(async move {
            let result = match job {
                GenerationJob::Options { selections } => {
                    info!(field = %selections.field, "Generating assessment options");
                    WizardTaskResult::Options(generator.propose_assessment_types(&selections).await)
                }
                GenerationJob::Plan {
                    selections,
                    assessment_type,
                } => {
                    info!(%assessment_type, "Generating detailed plan");
                    WizardTaskResult::Plan(generator.produce_detailed_plan(&selections, &assessment_type).await)
                }
            };
            if tx.send(result).await.is_err() {
                debug!("spawn_generation: result channel closed");
            }
        });

        self.result_rx = Some(rx);
        self.task = Some(handle);
    }

    /// Drain generation results (non-blocking check)
    fn process_results(&mut self) {
        let results: Vec<WizardTaskResult> = if let Some(rx) = &mut self.result_rx {
            let mut collected = Vec::new();
            while let Ok(result) = rx.try_recv() {
                collected.push(result);
            }
            collected
        } else {
            return;
        };

        for result in results {
            match result {
                WizardTaskResult::Options(outcome) => {
                    if let Err(ref e) = outcome {
                        warn!("Options generation failed: {}", e);
                    }
                    self.app.state_mut().option_index = 0;
                    self.app.state_mut().controller.complete_options(outcome);
                }
                WizardTaskResult::Plan(outcome) => {
                    if let Err(ref e) = outcome {
                        warn!("Plan generation failed: {}", e);
                    }
                    self.app.state_mut().plan_scroll = 0;
                    self.app.state_mut().controller.complete_plan(outcome);
                }
            }
            self.result_rx = None;
            self.task = None;
        }
    }
}
