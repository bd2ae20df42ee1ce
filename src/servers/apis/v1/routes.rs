//! Route initialization for the v1 API.
use std::sync::Arc;

use axum::Router;

use super::context::{check, credential, secret};
use crate::core::Keyring;

/// Add the routes for the v1 API.
pub fn add(prefix: &str, router: Router, keyring: Arc<Keyring>) -> Router {
    let router = credential::routes::add(prefix, router, keyring.clone());
    let router = check::routes::add(prefix, router, keyring.clone());

    // The protected sample resource is gated by the key, not part of the
    // lifecycle API, so it lives outside the API prefix.
    secret::routes::add(router, keyring)
}
