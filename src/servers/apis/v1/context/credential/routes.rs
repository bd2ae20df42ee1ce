//! API routes for the [`credential`](crate::servers::apis::v1::context::credential)
//! API context.
//!
//! - `GET /keys`
//! - `POST /keys`
//! - `GET /keys/:id`
//! - `PUT /keys/:id`
//! - `DELETE /keys/:id`
//!
//! Refer to the [API endpoint documentation](crate::servers::apis::v1::context::credential).
use std::sync::Arc;

use axum::routing::get;
use axum::Router;

use super::handlers::{
    add_credential_handler, delete_credential_handler, get_credential_handler, list_credentials_handler,
    rotate_credential_handler,
};
use crate::core::Keyring;

/// It adds the routes to the router for the [`credential`](crate::servers::apis::v1::context::credential) API context.
pub fn add(prefix: &str, router: Router, keyring: Arc<Keyring>) -> Router {
    router
        .route(
            &format!("{prefix}/keys"),
            get(list_credentials_handler)
                .post(add_credential_handler)
                .with_state(keyring.clone()),
        )
        .route(
            &format!("{prefix}/keys/:id"),
            get(get_credential_handler)
                .put(rotate_credential_handler)
                .delete(delete_credential_handler)
                .with_state(keyring),
        )
}
