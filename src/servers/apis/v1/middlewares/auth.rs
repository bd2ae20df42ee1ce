//! Authentication middleware for protected resources.
//!
//! It uses the `x-api-key` request header to authenticate the client:
//!
//! ```text
//! curl -H "x-api-key: API-<64 hex chars>" http://<host>:<port>/secret
//! ```
//!
//! The presented key must match the `key` of a registered credential in the
//! [`Keyring`]. The lookup is delegated to [`Keyring::validate`], the same
//! service the check endpoint uses; the middleware only decides what happens
//! afterwards (the request continues to the protected handler).
//!
//! Responses:
//!
//! - `401` when the request has no `x-api-key` header.
//! - `403` when the presented key does not match any registered credential.
use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::{header, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::core::error::Error;
use crate::core::Keyring;
use crate::servers::apis::v1::responses::unhandled_rejection_response;

/// The request header holding the key presented by the client.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Middleware for authentication using the `x-api-key` request header.
/// The key must match a registered credential in the [`Keyring`].
pub async fn auth(State(keyring): State<Arc<Keyring>>, request: Request, next: Next) -> Response {
    let presented_key = match request.headers().get(API_KEY_HEADER) {
        None => return AuthError::CredentialMissing.into_response(),
        Some(header_value) => match header_value.to_str() {
            // a non UTF-8 header value can never match a stored key
            Err(_) => return AuthError::CredentialNotValid.into_response(),
            Ok(presented_key) => presented_key.to_owned(),
        },
    };

    match keyring.validate(&presented_key).await {
        Ok(_credential) => next.run(request).await,
        Err(Error::CredentialMissing { .. }) => AuthError::CredentialMissing.into_response(),
        Err(Error::Database { source }) => unhandled_rejection_response(format!("cannot validate the presented key: {source}")),
        Err(_) => AuthError::CredentialNotValid.into_response(),
    }
}

enum AuthError {
    /// Missing key header for authentication.
    CredentialMissing,
    /// A key was provided but it does not match any credential.
    CredentialNotValid,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            AuthError::CredentialMissing => credential_missing_response(),
            AuthError::CredentialNotValid => credential_not_valid_response(),
        }
    }
}

#[derive(Serialize, Debug)]
struct ErrorBody<'a> {
    error: &'a str,
}

/// `401` error response returned when the key header is missing.
///
/// # Panics
///
/// Will panic if it can't convert the error body to json
#[must_use]
pub fn credential_missing_response() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        [(header::CONTENT_TYPE, "application/json; charset=utf-8")],
        serde_json::to_string(&ErrorBody {
            error: "No API key supplied.",
        })
        .unwrap(),
    )
        .into_response()
}

/// `403` error response when the provided key is not valid.
///
/// # Panics
///
/// Will panic if it can't convert the error body to json
#[must_use]
pub fn credential_not_valid_response() -> Response {
    (
        StatusCode::FORBIDDEN,
        [(header::CONTENT_TYPE, "application/json; charset=utf-8")],
        serde_json::to_string(&ErrorBody {
            error: "The API key is not valid.",
        })
        .unwrap(),
    )
        .into_response()
}
