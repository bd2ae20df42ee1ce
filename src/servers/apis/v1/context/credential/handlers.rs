//! API handlers for the [`credential`](crate::servers::apis::v1::context::credential)
//! API context.
use std::sync::Arc;

use axum::extract::{self, Path, State};
use axum::response::Response;

use super::forms::AddCredentialForm;
use super::resources::CredentialResource;
use super::responses::{
    credential_list_response, credential_not_found_response, credential_removed_response, credential_response,
    credential_rotated_response, empty_credential_name_response, failed_to_create_credential_response,
    failed_to_get_credential_response, failed_to_list_credentials_response, failed_to_remove_credential_response,
    failed_to_rotate_credential_response,
};
use crate::core::auth::CredentialId;
use crate::core::error::Error;
use crate::core::Keyring;

/// It handles the request to list the credentials, most recently created
/// first.
///
/// It returns:
///
/// - `200` with a json array of
///   [`CredentialResource`](crate::servers::apis::v1::context::credential::resources::CredentialResource).
/// - `500` with serialized error in debug format if the store fails.
///
/// Refer to the [API endpoint documentation](crate::servers::apis::v1::context::credential#list-the-api-keys)
/// for more information about this endpoint.
pub async fn list_credentials_handler(State(keyring): State<Arc<Keyring>>) -> Response {
    match keyring.list_credentials().await {
        Ok(credentials) => {
            let resources: Vec<CredentialResource> = credentials.into_iter().map(CredentialResource::from).collect();
            credential_list_response(&resources)
        }
        Err(e) => failed_to_list_credentials_response(e),
    }
}

/// It handles the request to get a credential by its id.
///
/// It returns:
///
/// - `200` with the json
///   [`CredentialResource`](crate::servers::apis::v1::context::credential::resources::CredentialResource).
/// - `404` if there is no credential with the given id.
/// - `500` with serialized error in debug format if the store fails.
///
/// Refer to the [API endpoint documentation](crate::servers::apis::v1::context::credential#get-an-api-key)
/// for more information about this endpoint.
pub async fn get_credential_handler(State(keyring): State<Arc<Keyring>>, Path(id): Path<CredentialId>) -> Response {
    match keyring.get_credential(id).await {
        Ok(credential) => credential_response(&CredentialResource::from(credential)),
        Err(Error::CredentialNotFound { id, .. }) => credential_not_found_response(id),
        Err(e) => failed_to_get_credential_response(e),
    }
}

/// It handles the request to create a new credential with a generated key.
///
/// It returns:
///
/// - `200` with the created json
///   [`CredentialResource`](crate::servers::apis::v1::context::credential::resources::CredentialResource),
///   including the assigned id and the generated key.
/// - `400` if the `name` field is missing or empty.
/// - `500` with serialized error in debug format if the store fails.
///
/// Refer to the [API endpoint documentation](crate::servers::apis::v1::context::credential#create-an-api-key)
/// for more information about this endpoint.
pub async fn add_credential_handler(
    State(keyring): State<Arc<Keyring>>,
    extract::Json(form): extract::Json<AddCredentialForm>,
) -> Response {
    let Some(name) = form.name else {
        return empty_credential_name_response();
    };

    match keyring.add_credential(&name).await {
        Ok(credential) => credential_response(&CredentialResource::from(credential)),
        Err(Error::EmptyCredentialName { .. }) => empty_credential_name_response(),
        Err(e) => failed_to_create_credential_response(e),
    }
}

/// It handles the request to rotate the key of a credential.
///
/// It returns:
///
/// - `200` with a confirmation message and the updated json
///   [`CredentialResource`](crate::servers::apis::v1::context::credential::resources::CredentialResource).
/// - `404` if there is no credential with the given id.
/// - `500` with serialized error in debug format if the store fails.
///
/// Refer to the [API endpoint documentation](crate::servers::apis::v1::context::credential#rotate-an-api-key)
/// for more information about this endpoint.
pub async fn rotate_credential_handler(State(keyring): State<Arc<Keyring>>, Path(id): Path<CredentialId>) -> Response {
    match keyring.rotate_credential(id).await {
        Ok(credential) => credential_rotated_response(CredentialResource::from(credential)),
        Err(Error::CredentialNotFound { id, .. }) => credential_not_found_response(id),
        Err(e) => failed_to_rotate_credential_response(e),
    }
}

/// It handles the request to delete a credential.
///
/// It returns:
///
/// - `200` with a confirmation message. The removed record is not returned.
/// - `404` if there is no credential with the given id.
/// - `500` with serialized error in debug format if the store fails.
///
/// Refer to the [API endpoint documentation](crate::servers::apis::v1::context::credential#delete-an-api-key)
/// for more information about this endpoint.
pub async fn delete_credential_handler(State(keyring): State<Arc<Keyring>>, Path(id): Path<CredentialId>) -> Response {
    match keyring.remove_credential(id).await {
        Ok(()) => credential_removed_response(),
        Err(Error::CredentialNotFound { id, .. }) => credential_not_found_response(id),
        Err(e) => failed_to_remove_credential_response(e),
    }
}
