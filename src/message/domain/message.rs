//! Message entity, its validated draft, and the inbound create request.

use super::MessageId;
use crate::validation::{ValidationErrors, require_non_empty};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Inbound payload for `POST /api/messages`.
///
/// Fields are optional so that missing values surface as validation
/// violations instead of deserialisation failures. Any client-supplied
/// `id` or `createdAt` is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateMessageRequest {
    content: Option<String>,
    created_by: Option<String>,
}

impl CreateMessageRequest {
    /// Creates a request with both fields present.
    #[must_use]
    pub fn new(content: impl Into<String>, created_by: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            created_by: Some(created_by.into()),
        }
    }

    /// Checks the non-empty constraints and stamps the creation time.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationErrors`] listing every empty or missing field.
    pub fn validate(self, clock: &impl Clock) -> Result<NewMessage, ValidationErrors> {
        let mut violations = Vec::new();
        require_non_empty("content", self.content.as_deref(), &mut violations);
        require_non_empty("createdBy", self.created_by.as_deref(), &mut violations);
        ValidationErrors::check(violations)?;

        Ok(NewMessage {
            content: self.content.unwrap_or_default(),
            created_by: self.created_by.unwrap_or_default(),
            created_at: clock.utc(),
        })
    }
}

/// A validated message that has not been assigned an identifier yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMessage {
    content: String,
    created_by: String,
    created_at: DateTime<Utc>,
}

impl NewMessage {
    /// Validates the fields and builds a draft stamped with `clock`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationErrors`] when `content` or `created_by` is empty.
    pub fn new(
        content: impl Into<String>,
        created_by: impl Into<String>,
        clock: &impl Clock,
    ) -> Result<Self, ValidationErrors> {
        CreateMessageRequest::new(content, created_by).validate(clock)
    }

    /// Returns the message body.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the author.
    #[must_use]
    pub fn created_by(&self) -> &str {
        &self.created_by
    }

    /// Returns the server-side creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Completes the draft with a repository-assigned identifier.
    #[must_use]
    pub fn into_message(self, id: MessageId) -> Message {
        Message {
            id,
            content: self.content,
            created_by: self.created_by,
            created_at: self.created_at,
        }
    }
}

/// A stored message. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    id: MessageId,
    content: String,
    created_by: String,
    created_at: DateTime<Utc>,
}

impl Message {
    /// Returns the message identifier.
    #[must_use]
    pub const fn id(&self) -> MessageId {
        self.id
    }

    /// Returns the message body.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the author.
    #[must_use]
    pub fn created_by(&self) -> &str {
        &self.created_by
    }

    /// Returns the server-side creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
