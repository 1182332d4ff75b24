//! Application services for messages.

mod board;

pub use board::{MessageBoardError, MessageBoardResult, MessageBoardService};
