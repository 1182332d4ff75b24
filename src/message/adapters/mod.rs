//! Adapter implementations for message storage.

pub mod memory;

pub use memory::InMemoryMessageRepository;
