//! OpenTelemetry GenAI Semantic Convention values.
//!
//! Span fields use the dotted convention names directly
//! (`gen_ai.operation.name`, `gen_ai.request.model`, ...); this module holds
//! the values recorded into them so every call site agrees on spelling.
//!
//! Span naming convention: `"{operation} {model}"` (e.g., `"chat gemini-2.0-flash-lite"`),
//! applied through the `otel.name` field.

// --- Operation name values ---

/// Multi-turn chat completion over the accumulated history.
pub const OP_CHAT: &str = "chat";

/// One-shot summarization of caller-supplied text.
pub const OP_SUMMARIZE: &str = "summarize";

// --- Provider name values ---

/// Google Gemini provider identifier.
pub const PROVIDER_GEMINI: &str = "gcp.gemini";

/// Span display name for a GenAI operation against `model`.
pub fn span_name(operation: &str, model: &str) -> String {
    format!("{operation} {model}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_name() {
        assert_eq!(
            span_name(OP_CHAT, "gemini-2.0-flash-lite"),
            "chat gemini-2.0-flash-lite"
        );
    }
}
