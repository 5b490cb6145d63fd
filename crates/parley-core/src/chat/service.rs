//! Chat service: the four operations behind the HTTP surface.
//!
//! ChatService owns the history store and the provider. `chat` appends the
//! user turn, renders the whole history as the prompt, calls the provider
//! once and appends the trimmed reply. `summarize` is stateless. Provider
//! failures propagate unchanged; nothing is retried or rolled back.

use parley_observe::genai_attrs::{self, OP_CHAT, OP_SUMMARIZE};
use parley_types::chat::{ChatReply, ChatTurn, HealthStatus};
use parley_types::llm::{GenerationRequest, GenerationResponse, LlmError};
use tracing::{Instrument, debug, field, info, info_span, warn};

use crate::chat::history::HistoryStore;
use crate::chat::prompt::{render_chat_prompt, render_summary_prompt, trim_text};
use crate::llm::box_provider::BoxLlmProvider;

/// Orchestrates history, prompt assembly and provider calls.
///
/// Generic over `HistoryStore` so the in-memory store can be swapped
/// without touching the handlers.
pub struct ChatService<H: HistoryStore> {
    history: H,
    provider: BoxLlmProvider,
}

impl<H: HistoryStore> ChatService<H> {
    pub fn new(history: H, provider: BoxLlmProvider) -> Self {
        Self { history, provider }
    }

    /// Access the history store.
    pub fn history(&self) -> &H {
        &self.history
    }

    /// Model identifier every request is sent to.
    pub fn model(&self) -> &str {
        self.provider.model()
    }

    /// Fixed readiness payload. Never touches history or the provider.
    pub fn health(&self) -> HealthStatus {
        HealthStatus::ok(self.model())
    }

    /// Run one chat exchange against the shared history.
    ///
    /// The user turn is appended before the provider is called and stays
    /// in the history if the call fails.
    pub async fn chat(&self, message: &str) -> Result<ChatReply, LlmError> {
        self.history.append(ChatTurn::user(message)).await;

        let turns = self.history.snapshot().await;
        let prompt = render_chat_prompt(&turns);
        debug!(history_len = turns.len(), prompt_chars = prompt.len(), "Rendered chat prompt");

        let response = match self.generate(OP_CHAT, prompt).await {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "Chat generation failed; user turn left unanswered");
                return Err(e);
            }
        };

        let text = trim_text(&response.text).to_string();
        if text.is_empty() {
            warn!("Provider returned empty text; appending empty bot turn");
        }
        self.history.append(ChatTurn::bot(text.clone())).await;

        let history = self.history.snapshot().await;
        info!(history_len = history.len(), "Chat turn completed");

        Ok(ChatReply {
            response: text,
            history,
        })
    }

    /// Summarize `text` with a fixed prompt template.
    ///
    /// Blank input short-circuits to an empty summary without calling the
    /// provider.
    pub async fn summarize(&self, text: &str) -> Result<String, LlmError> {
        let text = trim_text(text);
        if text.is_empty() {
            debug!("Blank summary input; skipping provider call");
            return Ok(String::new());
        }

        let response = self.generate(OP_SUMMARIZE, render_summary_prompt(text)).await?;
        Ok(trim_text(&response.text).to_string())
    }

    /// Clear the shared history.
    pub async fn reset(&self) {
        let dropped = self.history.len().await;
        self.history.clear().await;
        info!(dropped_turns = dropped, "Chat history reset");
    }

    /// Single provider call wrapped in a GenAI span.
    async fn generate(
        &self,
        operation: &'static str,
        prompt: String,
    ) -> Result<GenerationResponse, LlmError> {
        let model = self.provider.model();
        let span = info_span!(
            "gen_ai",
            otel.name = %genai_attrs::span_name(operation, model),
            gen_ai.operation.name = operation,
            gen_ai.provider.name = self.provider.name(),
            gen_ai.request.model = model,
            gen_ai.usage.input_tokens = field::Empty,
            gen_ai.usage.output_tokens = field::Empty,
        );

        let request = GenerationRequest::new(model, prompt);
        let response = self
            .provider
            .generate(&request)
            .instrument(span.clone())
            .await?;

        span.record("gen_ai.usage.input_tokens", response.usage.input_tokens);
        span.record("gen_ai.usage.output_tokens", response.usage.output_tokens);

        Ok(response)
    }
}
