//! LlmProvider trait definition.

use parley_types::llm::{GenerationRequest, GenerationResponse, LlmError};

/// Trait for text-generation backends.
///
/// Uses native async fn in traits (RPITIT, Rust 2024 edition). The
/// provider is treated as an opaque text-in/text-out call: one request,
/// one response, no streaming and no retries.
///
/// Implementations live in parley-infra (e.g., `GeminiProvider`).
pub trait LlmProvider: Send + Sync {
    /// Provider name used in logs and span attributes (e.g., "gcp.gemini").
    fn name(&self) -> &str;

    /// Model identifier requests are sent to.
    fn model(&self) -> &str;

    /// Send a generation request and wait for the full response.
    fn generate(
        &self,
        request: &GenerationRequest,
    ) -> impl std::future::Future<Output = Result<GenerationResponse, LlmError>> + Send;
}
