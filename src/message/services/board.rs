//! Service layer for listing and posting messages.

use crate::message::{
    domain::{CreateMessageRequest, Message},
    ports::{MessageRepository, MessageRepositoryError},
};
use crate::validation::ValidationErrors;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for message operations.
#[derive(Debug, Error)]
pub enum MessageBoardError {
    /// The request failed field validation; nothing was stored.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] MessageRepositoryError),
}

/// Result type for message service operations.
pub type MessageBoardResult<T> = Result<T, MessageBoardError>;

/// Message orchestration service.
pub struct MessageBoardService<R, C>
where
    R: MessageRepository + ?Sized,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> Clone for MessageBoardService<R, C>
where
    R: MessageRepository + ?Sized,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, C> MessageBoardService<R, C>
where
    R: MessageRepository + ?Sized,
    C: Clock + Send + Sync,
{
    /// Creates a new message service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Returns every message in creation order.
    ///
    /// # Errors
    ///
    /// Returns [`MessageBoardError::Repository`] when the store fails.
    pub async fn list_all(&self) -> MessageBoardResult<Vec<Message>> {
        Ok(self.repository.list_all().await?)
    }

    /// Validates `request` and stores the resulting message.
    ///
    /// # Errors
    ///
    /// Returns [`MessageBoardError::Validation`] before touching the store
    /// when a required field is empty, or [`MessageBoardError::Repository`]
    /// when the store rejects the write.
    pub async fn create(&self, request: CreateMessageRequest) -> MessageBoardResult<Message> {
        let draft = request.validate(&*self.clock)?;
        let message = self.repository.create(draft).await?;
        tracing::info!(message_id = %message.id(), created_by = message.created_by(), "message created");
        Ok(message)
    }
}
