//! Application state wiring the chat service together.
//!
//! AppState holds the process-wide service shared by every request. The
//! service is generic over the history store; AppState pins it to the
//! in-memory implementation.

use std::sync::Arc;

use parley_core::chat::history::InMemoryHistory;
use parley_core::chat::service::ChatService;
use parley_core::llm::box_provider::BoxLlmProvider;
use parley_infra::config::ServiceConfig;
use parley_infra::llm::create_provider;

pub type ConcreteChatService = ChatService<InMemoryHistory>;

/// Shared application state, cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    pub chat_service: Arc<ConcreteChatService>,
}

impl AppState {
    /// Wire state around an already-built provider.
    pub fn new(provider: BoxLlmProvider) -> Self {
        let chat_service = ChatService::new(InMemoryHistory::new(), provider);
        Self {
            chat_service: Arc::new(chat_service),
        }
    }

    /// Initialize the application state from startup configuration.
    pub fn init(config: ServiceConfig) -> anyhow::Result<Self> {
        let provider = create_provider(config)?;
        Ok(Self::new(provider))
    }
}
