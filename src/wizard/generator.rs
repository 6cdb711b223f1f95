//! Generation boundary for the wizard
//!
//! The Generator turns selections (plus, for plans, the chosen assessment
//! type) into a single prompt, calls the LLM boundary, and parses the
//! textual response. Both operations are pure with respect to controller
//! state - they take explicit arguments and return results.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info};

use crate::config::{LlmConfig, PlanFormat};
use crate::llm::{CompletionRequest, LlmClient, LlmError};
use crate::prompts::{self, PromptContext};
use crate::wizard::plan::{self, AssessmentPlan, PlanParseError};
use crate::wizard::selections::Selections;

/// Errors from the generation boundary
///
/// Raw transport errors never escape into the controller uncaught; every
/// failure mode is converted here.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Generation backend failed: {0}")]
    Boundary(#[from] LlmError),

    #[error("Generation backend returned an empty response")]
    EmptyResponse,

    #[error("{0}")]
    PlanParse(#[from] PlanParseError),

    #[error("Prompt template error: {0}")]
    Template(String),
}

/// Stateless client for the two generation operations
pub struct Generator {
    llm: Arc<dyn LlmClient>,
    max_tokens: u32,
    plan_format: PlanFormat,
}

impl Generator {
    /// Create a generator over an LLM client, taking limits from config
    pub fn new(llm: Arc<dyn LlmClient>, config: &LlmConfig) -> Self {
        debug!(
            max_tokens = config.max_tokens,
            plan_format = ?config.plan_format,
            "Generator::new: called"
        );
        Self {
            llm,
            max_tokens: config.max_tokens,
            plan_format: config.plan_format,
        }
    }

    /// Suggest assessment types for the given selections
    ///
    /// Splits the response on line breaks, trims each line, strips leading
    /// list markers, and drops blanks. Order and duplicates are preserved.
    pub async fn propose_assessment_types(&self, selections: &Selections) -> Result<Vec<String>, GenerationError> {
        debug!(field = %selections.field, level = %selections.level, "propose_assessment_types: called");
        let prompt = self.options_prompt(selections)?;

        let response = self.llm.complete(CompletionRequest::new(prompt, self.max_tokens)).await?;
        let text = response.content.ok_or(GenerationError::EmptyResponse)?;

        let options = split_option_lines(&text);
        if options.is_empty() {
            debug!("propose_assessment_types: no options parsed");
            return Err(GenerationError::EmptyResponse);
        }

        info!(count = options.len(), "propose_assessment_types: parsed options");
        Ok(options)
    }

    /// Produce the detailed plan for a chosen assessment type
    pub async fn produce_detailed_plan(
        &self,
        selections: &Selections,
        assessment_type: &str,
    ) -> Result<AssessmentPlan, GenerationError> {
        debug!(%assessment_type, "produce_detailed_plan: called");
        let prompt = self.plan_prompt(selections, assessment_type)?;

        let response = self.llm.complete(CompletionRequest::new(prompt, self.max_tokens)).await?;
        let text = response.content.ok_or(GenerationError::EmptyResponse)?;
        if text.trim().is_empty() {
            debug!("produce_detailed_plan: blank response");
            return Err(GenerationError::EmptyResponse);
        }

        let plan = match self.plan_format {
            PlanFormat::Text => {
                debug!("produce_detailed_plan: wrapping text plan");
                AssessmentPlan::Text {
                    assessment_type: assessment_type.to_string(),
                    details: text,
                }
            }
            PlanFormat::Structured => {
                debug!("produce_detailed_plan: parsing structured plan");
                AssessmentPlan::Structured(plan::parse_structured(&text)?)
            }
        };

        info!(title = %plan.title(), "produce_detailed_plan: plan ready");
        Ok(plan)
    }

    /// Render the options prompt for the given selections
    pub(crate) fn options_prompt(&self, selections: &Selections) -> Result<String, GenerationError> {
        debug!("options_prompt: called");
        let context = PromptContext {
            field: selections.field.clone(),
            level: selections.level.clone(),
            outcomes: selections.joined_outcomes(),
            assessment_type: None,
            structured: false,
        };
        prompts::render(prompts::OPTIONS, &context).map_err(|e| GenerationError::Template(e.to_string()))
    }

    /// Render the plan prompt for the given selections and chosen type
    pub(crate) fn plan_prompt(&self, selections: &Selections, assessment_type: &str) -> Result<String, GenerationError> {
        debug!(%assessment_type, "plan_prompt: called");
        let context = PromptContext {
            field: selections.field.clone(),
            level: selections.level.clone(),
            outcomes: selections.joined_outcomes(),
            assessment_type: Some(assessment_type.to_string()),
            structured: self.plan_format == PlanFormat::Structured,
        };
        prompts::render(prompts::PLAN, &context).map_err(|e| GenerationError::Template(e.to_string()))
    }
}

/// Split boundary output into option names
///
/// Trims lines, strips leading list markers ("-", "*", "1.") that models
/// add despite the prompt asking for bare names, and drops blanks.
fn split_option_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| strip_list_marker(line.trim()).trim())
        .filter(|line| !line.is_empty())
        .map(|line| line.to_string())
        .collect()
}

/// Strip a single leading list marker from a line
fn strip_list_marker(line: &str) -> &str {
    if let Some(rest) = line.strip_prefix("- ").or_else(|| line.strip_prefix("* ")) {
        return rest;
    }
    // Numbered markers: "1." / "2)" etc.
    let digits = line.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits > 0
        && let Some(rest) = line[digits..].strip_prefix('.').or_else(|| line[digits..].strip_prefix(')'))
    {
        return rest;
    }
    line
}
