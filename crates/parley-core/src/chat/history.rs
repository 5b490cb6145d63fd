//! HistoryStore trait and the in-process implementation.
//!
//! The history is one ordered, append-only sequence of turns shared by
//! every caller. It is cleared only by an explicit reset and is never
//! capped or truncated.

use parley_types::chat::ChatTurn;
use tokio::sync::RwLock;

/// Store for the shared conversation history.
///
/// Each method is a single exclusive (or shared, for reads) access scope.
/// Callers compose them without holding anything across awaits, so two
/// concurrent chats may interleave their turns.
pub trait HistoryStore: Send + Sync {
    /// Push one turn to the end of the history.
    fn append(&self, turn: ChatTurn) -> impl std::future::Future<Output = ()> + Send;

    /// Copy of every turn, in insertion order.
    fn snapshot(&self) -> impl std::future::Future<Output = Vec<ChatTurn>> + Send;

    /// Drop every turn.
    fn clear(&self) -> impl std::future::Future<Output = ()> + Send;

    /// Number of stored turns.
    fn len(&self) -> impl std::future::Future<Output = usize> + Send;
}

/// Process-lifetime history held in memory. Lost on exit.
#[derive(Debug, Default)]
pub struct InMemoryHistory {
    turns: RwLock<Vec<ChatTurn>>,
}

impl InMemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HistoryStore for InMemoryHistory {
    async fn append(&self, turn: ChatTurn) {
        self.turns.write().await.push(turn);
    }

    async fn snapshot(&self) -> Vec<ChatTurn> {
        self.turns.read().await.clone()
    }

    async fn clear(&self) {
        self.turns.write().await.clear();
    }

    async fn len(&self) -> usize {
        self.turns.read().await.len()
    }
}
