//! Helpers for testing the Keywarden credential service.
pub mod configuration;
pub mod random;
