//! Assessment plan shapes and the structured-plan parser
//!
//! The generation boundary either returns free text (wrapped together with
//! the chosen assessment type) or, when the structured format is configured,
//! a JSON object that parses into StructuredPlan. Which shape is produced is
//! a parser configuration, not a controller concern.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// A generated assessment plan
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssessmentPlan {
    /// Opaque formatted text for the chosen assessment type
    Text { assessment_type: String, details: String },
    /// Richer structured record parsed from JSON output
    Structured(StructuredPlan),
}

impl AssessmentPlan {
    /// Title line for display
    pub fn title(&self) -> &str {
        match self {
            Self::Text { assessment_type, .. } => assessment_type,
            Self::Structured(plan) => &plan.title,
        }
    }
}

/// Structured plan shape requested from the boundary as JSON
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredPlan {
    pub title: String,
    pub description: String,
    pub design_steps: Vec<String>,
    pub tips: Vec<String>,
    #[serde(default)]
    pub suggested_ai_tools: Vec<SuggestedTool>,
}

/// AI tool recommendation inside a structured plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedTool {
    pub tool_name: String,
    pub description: String,
}

/// Failure to parse a structured plan from boundary output
#[derive(Debug, Error)]
#[error("could not parse structured plan: {0}")]
pub struct PlanParseError(pub String);

/// Parse a structured plan from raw boundary output
///
/// Models frequently wrap JSON in Markdown code fences, so those are
/// stripped before parsing.
pub fn parse_structured(raw: &str) -> Result<StructuredPlan, PlanParseError> {
    debug!(raw_len = raw.len(), "parse_structured: called");
    let json = strip_code_fences(raw);
    serde_json::from_str(json).map_err(|e| {
        debug!(error = %e, "parse_structured: JSON parse failed");
        PlanParseError(e.to_string())
    })
}

/// Strip a surrounding Markdown code fence, if present
fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the info string (e.g. "json") on the opening fence line
    let rest = match rest.find('\n') {
        Some(idx) => &rest[idx + 1..],
        None => rest,
    };
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAN_JSON: &str = r#"{
        "title": "Design Portfolio",
        "description": "A semester-long portfolio of design artefacts.",
        "designSteps": ["Define scope", "Collect artefacts"],
        "tips": ["Scaffold early"],
        "suggestedAiTools": [
            { "toolName": "CAD Assist", "description": "Generates parametric sketches" }
        ]
    }"#;

    #[test]
    fn test_parse_structured_plain_json() {
        let plan = parse_structured(PLAN_JSON).unwrap();
        assert_eq!(plan.title, "Design Portfolio");
        assert_eq!(plan.design_steps.len(), 2);
        assert_eq!(plan.suggested_ai_tools[0].tool_name, "CAD Assist");
    }

    #[test]
    fn test_parse_structured_fenced_json() {
        let fenced = format!("```json\n{}\n```", PLAN_JSON);
        let plan = parse_structured(&fenced).unwrap();
        assert_eq!(plan.title, "Design Portfolio");
    }

    #[test]
    fn test_parse_structured_missing_required_field() {
        let result = parse_structured(r#"{ "title": "Only a title" }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_structured_tools_default_empty() {
        let json = r#"{
            "title": "Peer Review",
            "description": "Structured peer feedback.",
            "designSteps": ["Pair students"],
            "tips": []
        }"#;
        let plan = parse_structured(json).unwrap();
        assert!(plan.suggested_ai_tools.is_empty());
    }

    #[test]
    fn test_strip_code_fences_no_fence() {
        assert_eq!(strip_code_fences("  {\"a\": 1}  "), "{\"a\": 1}");
    }

    #[test]
    fn test_plan_title() {
        let plan = AssessmentPlan::Text {
            assessment_type: "Portfolio".to_string(),
            details: "...".to_string(),
        };
        assert_eq!(plan.title(), "Portfolio");
    }
}
