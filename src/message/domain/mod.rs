//! Domain model for messages.
//!
//! A message is created from a validated request, stamped with a
//! server-side timestamp, and assigned an identifier by the repository.

mod ids;
mod message;

pub use ids::MessageId;
pub use message::{CreateMessageRequest, Message, NewMessage};
