//! Error returned by the core [`Keyring`](crate::core::Keyring).
//!
//! Error | Context | Description
//! ---|---|---
//! `EmptyCredentialName` | Lifecycle | A credential cannot be created without a name.
//! `CredentialNotFound` | Lifecycle | There is no credential with the supplied id.
//! `CredentialMissing` | Gate | The request did not present a key.
//! `CredentialNotValid` | Gate | The presented key does not match any credential.
//! `Database` | Persistence | The store failed while executing the operation.
use std::panic::Location;
use std::sync::Arc;

use keywarden_located_error::{DynError, LocatedError};

use super::auth::CredentialId;
use super::databases;

/// Lifecycle or gate error returned by the core [`Keyring`](crate::core::Keyring).
#[derive(thiserror::Error, Debug, Clone)]
pub enum Error {
    // Lifecycle errors
    #[error("The credential name cannot be empty, {location}")]
    EmptyCredentialName { location: &'static Location<'static> },

    #[error("Credential with id {id} not found, {location}")]
    CredentialNotFound {
        id: CredentialId,
        location: &'static Location<'static>,
    },

    // Gate errors
    #[error("The request did not present a credential, {location}")]
    CredentialMissing { location: &'static Location<'static> },

    #[error("The presented credential does not match any registered key, {location}")]
    CredentialNotValid { location: &'static Location<'static> },

    // Persistence errors
    #[error("The credential store failed: {source}")]
    Database {
        source: LocatedError<'static, dyn std::error::Error + Send + Sync>,
    },
}

impl From<databases::error::Error> for Error {
    #[track_caller]
    fn from(e: databases::error::Error) -> Self {
        Error::Database {
            source: (Arc::new(e) as DynError).into(),
        }
    }
}
