//! LLM client abstraction for the generation boundary
//!
//! Provides the LlmClient trait, the Gemini implementation, and a factory
//! that selects a provider from configuration.

mod client;
mod error;
mod gemini;
mod types;

pub use client::LlmClient;
pub use error::LlmError;
pub use gemini::GeminiClient;
pub use types::{CompletionRequest, CompletionResponse, TokenUsage};

#[cfg(test)]
pub use client::mock;

use std::sync::Arc;

use eyre::Result;
use tracing::debug;

use crate::config::LlmConfig;

/// Create an LLM client from configuration
///
/// Currently only the "gemini" provider is supported.
pub fn create_client(config: &LlmConfig) -> Result<Arc<dyn LlmClient>> {
    debug!(provider = %config.provider, model = %config.model, "create_client: called");
    match config.provider.as_str() {
        "gemini" => {
            debug!("create_client: creating GeminiClient");
            let client = GeminiClient::from_config(config)?;
            Ok(Arc::new(client))
        }
        other => {
            debug!(%other, "create_client: unknown provider");
            Err(eyre::eyre!("Unknown LLM provider: {}", other))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_client_unknown_provider() {
        let config = LlmConfig {
            provider: "oracle".to_string(),
            ..LlmConfig::default()
        };
        let result = create_client(&config);
        assert!(result.is_err());
    }
}
