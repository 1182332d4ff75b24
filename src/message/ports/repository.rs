//! Repository port for message storage.

use crate::message::domain::{Message, NewMessage};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for message repository operations.
pub type MessageRepositoryResult<T> = Result<T, MessageRepositoryError>;

/// Message storage contract.
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Returns a snapshot of every stored message in creation order.
    async fn list_all(&self) -> MessageRepositoryResult<Vec<Message>>;

    /// Assigns the next identifier to `message`, stores it, and returns the
    /// stored entity.
    ///
    /// # Errors
    ///
    /// Returns [`MessageRepositoryError::Persistence`] when the store fails.
    async fn create(&self, message: NewMessage) -> MessageRepositoryResult<Message>;
}

/// Errors returned by message repository implementations.
#[derive(Debug, Clone, Error)]
pub enum MessageRepositoryError {
    /// Storage-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl MessageRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
