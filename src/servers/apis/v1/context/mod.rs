//! The API contexts.
//!
//! Each context is a group of related endpoints with its own routes,
//! handlers, resources and responses.
pub mod check;
pub mod credential;
pub mod health_check;
pub mod secret;
