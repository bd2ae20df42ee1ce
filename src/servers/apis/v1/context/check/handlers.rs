//! API handlers for the [`check`](crate::servers::apis::v1::context::check)
//! API context.
use std::sync::Arc;

use axum::extract::{self, State};
use axum::response::Response;

use super::forms::CheckKeyForm;
use super::responses::{failed_to_check_key_response, invalid_key_response, missing_api_key_response, valid_key_response};
use crate::core::error::Error;
use crate::core::Keyring;
use crate::servers::apis::v1::context::credential::resources::CredentialResource;

/// It handles the request to check the validity of a key.
///
/// It returns:
///
/// - `200` with the positive judgment and the matched record.
/// - `400` with a negative judgment if the `apiKey` field is missing or empty.
/// - `403` with a negative judgment if the key does not match any credential.
/// - `500` with serialized error in debug format if the store fails.
///
/// Refer to the [API endpoint documentation](crate::servers::apis::v1::context::check#check-an-api-key)
/// for more information about this endpoint.
pub async fn check_key_handler(State(keyring): State<Arc<Keyring>>, extract::Json(form): extract::Json<CheckKeyForm>) -> Response {
    let Some(api_key) = form.api_key else {
        return missing_api_key_response();
    };

    match keyring.validate(&api_key).await {
        Ok(credential) => valid_key_response(CredentialResource::from(credential)),
        Err(Error::CredentialMissing { .. }) => missing_api_key_response(),
        Err(Error::Database { source }) => failed_to_check_key_response(source),
        Err(_) => invalid_key_response(),
    }
}
