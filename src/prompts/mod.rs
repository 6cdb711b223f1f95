//! Prompt Template System
//!
//! The two `.pmt` (prompt template) files are compiled into the binary and
//! rendered with Handlebars. The options template asks the model for bare
//! assessment-type names; the plan template asks for the full plan and,
//! when the structured format is configured, for a JSON object.

use handlebars::Handlebars;
use serde::Serialize;
use tracing::debug;

/// Assessment-type suggestion prompt
pub const OPTIONS: &str = include_str!("../../prompts/options.pmt");

/// Detailed-plan prompt
pub const PLAN: &str = include_str!("../../prompts/plan.pmt");

/// Context for rendering prompt templates
#[derive(Debug, Clone, Serialize)]
pub struct PromptContext {
    /// Field of study (step 1)
    pub field: String,
    /// Student level (step 2)
    pub level: String,
    /// Filled course learning outcomes, joined with "; "
    pub outcomes: String,
    /// Chosen assessment type (plan prompt only)
    pub assessment_type: Option<String>,
    /// Ask for a JSON plan instead of free text
    pub structured: bool,
}

/// Render a template with the given context
pub fn render(template: &str, context: &PromptContext) -> Result<String, handlebars::RenderError> {
    debug!(structured = context.structured, "render: called");
    let hbs = Handlebars::new();
    hbs.render_template(template, context)
}
