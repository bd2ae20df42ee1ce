//! API routes for the [`check`](crate::servers::apis::v1::context::check)
//! API context.
//!
//! - `POST /check`
//!
//! Refer to the [API endpoint documentation](crate::servers::apis::v1::context::check).
use std::sync::Arc;

use axum::routing::post;
use axum::Router;

use super::handlers::check_key_handler;
use crate::core::Keyring;

/// It adds the routes to the router for the [`check`](crate::servers::apis::v1::context::check) API context.
pub fn add(prefix: &str, router: Router, keyring: Arc<Keyring>) -> Router {
    router.route(&format!("{prefix}/check"), post(check_key_handler).with_state(keyring))
}
