//! Unit tests for the product module.
