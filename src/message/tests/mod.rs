//! Unit tests for the message module.

mod memory_tests;
