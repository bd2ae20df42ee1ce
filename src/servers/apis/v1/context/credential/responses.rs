//! API responses for the [`credential`](crate::servers::apis::v1::context::credential)
//! API context.
use std::error::Error;

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::core::auth::CredentialId;
use crate::servers::apis::v1::context::credential::resources::{CredentialResource, RotatedCredentialResource};
use crate::servers::apis::v1::responses::{bad_request_response, message_response, not_found_response, unhandled_rejection_response};

/// `200` response that contains the `CredentialResource` as json.
///
/// # Panics
///
/// Will panic if it can't convert the `CredentialResource` to json
#[must_use]
pub fn credential_response(credential: &CredentialResource) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json; charset=utf-8")],
        serde_json::to_string(credential).unwrap(),
    )
        .into_response()
}

/// `200` response that contains an array of `CredentialResource` as json,
/// most recently created first.
///
/// # Panics
///
/// Will panic if it can't convert the resources to json
#[must_use]
pub fn credential_list_response(credentials: &[CredentialResource]) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json; charset=utf-8")],
        serde_json::to_string(credentials).unwrap(),
    )
        .into_response()
}

/// `200` response that confirms a rotation and contains the updated
/// `CredentialResource` as json.
///
/// # Panics
///
/// Will panic if it can't convert the resource to json
#[must_use]
pub fn credential_rotated_response(credential: CredentialResource) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json; charset=utf-8")],
        serde_json::to_string(&RotatedCredentialResource {
            message: "API key updated.".to_string(),
            credential,
        })
        .unwrap(),
    )
        .into_response()
}

/// `200` response that confirms a deletion.
#[must_use]
pub fn credential_removed_response() -> Response {
    message_response("API key deleted.")
}

// Error responses

/// `400` error response when the `name` field is missing or empty.
#[must_use]
pub fn empty_credential_name_response() -> Response {
    bad_request_response("The name is required.")
}

/// `404` error response when there is no credential with the given id.
#[must_use]
pub fn credential_not_found_response(id: CredentialId) -> Response {
    not_found_response(&format!("API key with id {id} not found."))
}

/// `500` error response when a new credential cannot be created.
#[must_use]
pub fn failed_to_create_credential_response<E: Error>(e: E) -> Response {
    unhandled_rejection_response(format!("failed to create key: {e}"))
}

/// `500` error response when the credentials cannot be listed.
#[must_use]
pub fn failed_to_list_credentials_response<E: Error>(e: E) -> Response {
    unhandled_rejection_response(format!("failed to list keys: {e}"))
}

/// `500` error response when a credential cannot be loaded.
#[must_use]
pub fn failed_to_get_credential_response<E: Error>(e: E) -> Response {
    unhandled_rejection_response(format!("failed to get key: {e}"))
}

/// `500` error response when a credential key cannot be rotated.
#[must_use]
pub fn failed_to_rotate_credential_response<E: Error>(e: E) -> Response {
    unhandled_rejection_response(format!("failed to rotate key: {e}"))
}

/// `500` error response when a credential cannot be deleted.
#[must_use]
pub fn failed_to_remove_credential_response<E: Error>(e: E) -> Response {
    unhandled_rejection_response(format!("failed to delete key: {e}"))
}
