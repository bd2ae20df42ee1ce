//! API routes for the [`secret`](crate::servers::apis::v1::context::secret)
//! API context.
//!
//! - `GET /secret`
//!
//! Refer to the [API endpoint documentation](crate::servers::apis::v1::context::secret).
use std::sync::Arc;

use axum::middleware;
use axum::routing::get;
use axum::Router;

use super::handlers::show_secret_handler;
use crate::core::Keyring;
use crate::servers::apis::v1::middlewares::auth::auth;

/// It adds the route to the router for the [`secret`](crate::servers::apis::v1::context::secret)
/// API context, gated by the key authentication middleware.
pub fn add(router: Router, keyring: Arc<Keyring>) -> Router {
    router.route(
        "/secret",
        get(show_secret_handler).route_layer(middleware::from_fn_with_state(keyring, auth)),
    )
}
