//! Setup for the main application process.
//!
//! The [`app::setup`] function builds the configuration and the domain layer
//! [`Keyring`](crate::core::Keyring), and initializes the static variables
//! and the logging.
pub mod app;
pub mod jobs;
pub mod logging;
