//! API responses for the [`check`](crate::servers::apis::v1::context::check)
//! API context.
use std::error::Error;

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

use super::resources::{InvalidKeyReport, ValidKeyReport};
use crate::servers::apis::v1::context::credential::resources::CredentialResource;
use crate::servers::apis::v1::responses::unhandled_rejection_response;

/// `200` response with the positive judgment and the matched record as json.
///
/// # Panics
///
/// Will panic if it can't convert the report to json
#[must_use]
pub fn valid_key_response(credential: CredentialResource) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json; charset=utf-8")],
        serde_json::to_string(&ValidKeyReport {
            valid: true,
            message: "The API key is valid.".to_string(),
            data: credential,
        })
        .unwrap(),
    )
        .into_response()
}

/// `400` response when the request body does not carry the `apiKey` field.
///
/// # Panics
///
/// Will panic if it can't convert the report to json
#[must_use]
pub fn missing_api_key_response() -> Response {
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json; charset=utf-8")],
        serde_json::to_string(&InvalidKeyReport {
            valid: false,
            reason: "apiKey must be provided in the JSON body.".to_string(),
        })
        .unwrap(),
    )
        .into_response()
}

/// `403` response when the presented key does not match any credential.
///
/// # Panics
///
/// Will panic if it can't convert the report to json
#[must_use]
pub fn invalid_key_response() -> Response {
    (
        StatusCode::FORBIDDEN,
        [(header::CONTENT_TYPE, "application/json; charset=utf-8")],
        serde_json::to_string(&InvalidKeyReport {
            valid: false,
            reason: "The API key is not valid.".to_string(),
        })
        .unwrap(),
    )
        .into_response()
}

/// `500` error response when the key cannot be checked.
#[must_use]
pub fn failed_to_check_key_response<E: Error>(e: E) -> Response {
    unhandled_rejection_response(format!("failed to check key: {e}"))
}
