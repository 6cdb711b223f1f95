//! LLM request/response types
//!
//! These types model the Gemini generateContent API but are provider-agnostic
//! enough to support other providers in the future. The wizard only ever sends
//! a single rendered prompt per call, so requests are deliberately flat.

use tracing::debug;

/// A completion request - everything needed for one LLM call
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// The fully rendered prompt (from a Handlebars template)
    pub prompt: String,

    /// Max tokens for the response (from config)
    pub max_tokens: u32,
}

impl CompletionRequest {
    /// Create a request from a rendered prompt
    pub fn new(prompt: impl Into<String>, max_tokens: u32) -> Self {
        debug!(max_tokens, "CompletionRequest::new: called");
        Self {
            prompt: prompt.into(),
            max_tokens,
        }
    }
}

/// Response from a completion request
#[derive(Debug, Clone)]
pub struct CompletionResponse {
    /// Text content (if any)
    pub content: Option<String>,

    /// Token usage for cost tracking
    pub usage: TokenUsage,
}

impl CompletionResponse {
    /// Build a text-only response with no recorded usage
    pub fn text(content: impl Into<String>) -> Self {
        debug!("CompletionResponse::text: called");
        Self {
            content: Some(content.into()),
            usage: TokenUsage::default(),
        }
    }
}

/// Token usage for cost tracking
#[derive(Debug, Clone, Default)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_request_new() {
        let req = CompletionRequest::new("Suggest assessments", 1024);
        assert_eq!(req.prompt, "Suggest assessments");
        assert_eq!(req.max_tokens, 1024);
    }

    #[test]
    fn test_completion_response_text() {
        let resp = CompletionResponse::text("Portfolio");
        assert_eq!(resp.content.as_deref(), Some("Portfolio"));
        assert_eq!(resp.usage.input_tokens, 0);
        assert_eq!(resp.usage.output_tokens, 0);
    }
}
