//! API resources for the [`credential`](crate::servers::apis::v1::context::credential)
//! API context.
use std::convert::From;

use serde::{Deserialize, Serialize};

use crate::core::auth::{Credential, CredentialId, Key};

/// A resource that represents a credential.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct CredentialResource {
    /// The identifier assigned by the store.
    pub id: CredentialId,
    /// The label identifying the key holder.
    pub name: String,
    /// The API key.
    pub key: String,
}

/// A resource that represents the outcome of a key rotation.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct RotatedCredentialResource {
    /// Human readable confirmation.
    pub message: String,
    /// The credential with the new key.
    pub credential: CredentialResource,
}

impl From<Credential> for CredentialResource {
    fn from(credential: Credential) -> Self {
        CredentialResource {
            id: credential.id,
            name: credential.name,
            key: credential.key.to_string(),
        }
    }
}

impl From<CredentialResource> for Credential {
    fn from(resource: CredentialResource) -> Self {
        Credential {
            id: resource.id,
            name: resource.name,
            key: resource.key.parse::<Key>().unwrap(),
        }
    }
}
