//! AssessCraft - curriculum assessment design wizard
//!
//! A five-step wizard that collects a field of study, a student level, and
//! course learning outcomes, then drives a generative-text backend to
//! suggest assessment types and produce a detailed plan for the chosen one.
//!
//! # Modules
//!
//! - [`wizard`] - The phase machine, selections, and generation boundary
//! - [`llm`] - LLM client trait and Gemini implementation
//! - [`prompts`] - Embedded prompt templates
//! - [`tui`] - The interactive terminal wizard
//! - [`config`] - Configuration types and loading
//! - [`cli`] - Command-line interface

pub mod cli;
pub mod config;
pub mod llm;
pub mod prompts;
pub mod tui;
pub mod wizard;

// Re-export commonly used types
pub use config::{Config, LlmConfig, PlanFormat, WizardConfig};
pub use llm::{CompletionRequest, CompletionResponse, GeminiClient, LlmClient, LlmError, create_client};
pub use wizard::{
    AssessmentPlan, GenerationError, GenerationJob, GenerationOutcome, Generator, Selections, SelectionsUpdate,
    StructuredPlan, SuggestedTool, WizardController, WizardPhase,
};
