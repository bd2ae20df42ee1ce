//! Common responses for the API v1 shared by all the contexts.
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

/// Response status used when requests have only two possible results
/// `Ok` or `Error` and no data is returned.
#[derive(Serialize, Debug)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ActionStatus<'a> {
    Ok,
    Err { reason: std::borrow::Cow<'a, str> },
}

/// Response body for actions that return a confirmation message only.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct ActionMessage {
    pub message: String,
}

// OK responses

/// `200` response with a json confirmation message.
///
/// # Panics
///
/// Will panic if it can't convert the message to json
#[must_use]
pub fn message_response(message: &str) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json; charset=utf-8")],
        serde_json::to_string(&ActionMessage {
            message: message.to_string(),
        })
        .unwrap(),
    )
        .into_response()
}

// Error responses

/// `400` error response with a json reason.
///
/// # Panics
///
/// Will panic if it can't convert the `ActionStatus` to json
#[must_use]
pub fn bad_request_response(reason: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json; charset=utf-8")],
        serde_json::to_string(&ActionStatus::Err { reason: reason.into() }).unwrap(),
    )
        .into_response()
}

/// `404` error response with a json reason.
///
/// # Panics
///
/// Will panic if it can't convert the `ActionStatus` to json
#[must_use]
pub fn not_found_response(reason: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        [(header::CONTENT_TYPE, "application/json; charset=utf-8")],
        serde_json::to_string(&ActionStatus::Err { reason: reason.into() }).unwrap(),
    )
        .into_response()
}

/// `500` response for failures the API does not distinguish, like a failing
/// credential store. It should be a plain text or json.
#[must_use]
pub fn unhandled_rejection_response(reason: String) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        format!("Unhandled rejection: {:?}", ActionStatus::Err { reason: reason.into() }),
    )
        .into_response()
}
