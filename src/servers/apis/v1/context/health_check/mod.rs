//! API context for the liveness endpoint.
//!
//! - `GET /api/health_check`
//!
//! It always returns `200` with `{"status":"Ok"}` while the API is running.
pub mod handlers;
pub mod resources;
