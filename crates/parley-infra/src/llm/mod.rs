//! LLM provider implementations.
//!
//! Contains the concrete implementation of the [`LlmProvider`] trait
//! defined in `parley-core`, plus [`create_provider`] which builds it from
//! the startup [`ServiceConfig`].
//!
//! [`LlmProvider`]: parley_core::llm::provider::LlmProvider

pub mod gemini;

use parley_core::llm::box_provider::BoxLlmProvider;
use parley_core::llm::provider::LlmProvider;
use parley_types::llm::LlmError;

use crate::config::ServiceConfig;

use self::gemini::GeminiProvider;

/// Create a [`BoxLlmProvider`] from the service configuration.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be constructed.
pub fn create_provider(config: ServiceConfig) -> Result<BoxLlmProvider, LlmError> {
    let mut provider = GeminiProvider::new(config.api_key, config.model)?;
    if let Some(base_url) = config.base_url {
        provider = provider.with_base_url(base_url);
    }

    tracing::info!(
        model = %provider.model(),
        base_url = %provider.base_url(),
        "Gemini provider ready"
    );

    Ok(BoxLlmProvider::new(provider))
}
