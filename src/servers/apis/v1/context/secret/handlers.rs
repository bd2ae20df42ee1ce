//! API handlers for the [`secret`](crate::servers::apis::v1::context::secret)
//! API context.
use axum::response::Response;

use crate::servers::apis::v1::responses::message_response;

/// It handles the request to the protected sample resource. It is only
/// reached when the gate middleware has validated the presented key.
pub async fn show_secret_handler() -> Response {
    message_response("Access granted. The API key is valid.")
}
