//! In-memory message repository.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use crate::message::{
    domain::{Message, MessageId, NewMessage},
    ports::{MessageRepository, MessageRepositoryError, MessageRepositoryResult},
};

/// Thread-safe in-memory message repository.
///
/// Clones share the same underlying store. The collection is never bounded
/// or evicted; it lives as long as the process.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMessageRepository {
    state: Arc<InMemoryMessageState>,
}

#[derive(Debug, Default)]
struct InMemoryMessageState {
    messages: RwLock<Vec<Message>>,
    last_id: AtomicU64,
}

impl InMemoryMessageRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MessageRepository for InMemoryMessageRepository {
    async fn list_all(&self) -> MessageRepositoryResult<Vec<Message>> {
        let messages = self.state.messages.read().map_err(|err| {
            MessageRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(messages.clone())
    }

    async fn create(&self, message: NewMessage) -> MessageRepositoryResult<Message> {
        let mut messages = self.state.messages.write().map_err(|err| {
            MessageRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        // Drawn under the write lock so list order matches id order.
        let id = MessageId::new(self.state.last_id.fetch_add(1, Ordering::SeqCst) + 1);
        let stored = message.into_message(id);
        messages.push(stored.clone());
        Ok(stored)
    }
}
