//! The core `keywarden` module contains the generic credential logic which is
//! independent of the delivery layer.
//!
//! It contains the credential lifecycle services and their dependencies. It's
//! a domain layer which does not specify how the end user should connect to
//! the `Keyring`.
//!
//! Typically this module is intended to be used by higher modules like the
//! credential REST API.
//!
//! ```text
//! Delivery layer      Domain layer
//!
//! Credential REST API |> Core keyring
//! ```
//!
//! # Table of contents
//!
//! - [Keyring](#keyring)
//! - [Lifecycle](#lifecycle)
//! - [Validation](#validation)
//! - [Persistence](#persistence)
//!
//! # Keyring
//!
//! The `Keyring` is the main struct in this module. It has two groups of
//! responsibilities:
//!
//! - **Lifecycle**: it creates, lists, rotates and removes credentials.
//! - **Validation**: it decides whether a presented key matches a registered
//!   credential (the gate used by protected endpoints).
//!
//! # Lifecycle
//!
//! A credential is created with a non-empty `name` and a key produced by the
//! [`auth::generate`] service. The store assigns the `id`. Rotation replaces
//! the `key` wholesale and preserves `id` and `name`; the previous key stops
//! validating the instant the update commits. Removal deletes the record
//! permanently; there is no soft-delete.
//!
//! ```text
//! let credential = keyring.add_credential("Payments service").await?;
//! let rotated = keyring.rotate_credential(credential.id).await?;
//! assert_eq!(rotated.name, credential.name);
//! assert_ne!(rotated.key, credential.key);
//! ```
//!
//! # Validation
//!
//! The gate looks up exactly one credential whose `key` equals the presented
//! string: case-sensitive, no normalization, no trimming. The full record is
//! returned on a match; the key itself is the only secret being protected.
//!
//! Both consumers of the gate (the request middleware and the check endpoint)
//! share [`Keyring::validate`]; they only differ in what they do with the
//! verdict.
//!
//! # Persistence
//!
//! The `Keyring` is responsible for storing and loading credentials from the
//! database. Refer to [`databases`] for more information about persistence.
pub mod auth;
pub mod databases;
pub mod error;
pub mod services;

use std::panic::Location;
use std::sync::Arc;

use keywarden_configuration::Configuration;
use tracing::debug;

use self::auth::{Credential, CredentialId, Key};
use self::error::Error;
use crate::core::databases::Database;

/// The domain layer credential service.
///
/// Its main responsibility is to handle the credential lifecycle and to
/// validate presented keys. It's also a container for the persistence
/// dependency.
///
/// > **NOTICE**: the `Keyring` is not responsible for handling the network
/// layer. Typically, the `Keyring` is used by a higher application service
/// that handles the network layer.
pub struct Keyring {
    /// A database driver implementation: [`Sqlite3`](crate::core::databases::sqlite)
    /// or [`MySQL`](crate::core::databases::mysql)
    pub database: Arc<Box<dyn Database>>,
}

impl Keyring {
    /// `Keyring` constructor.
    ///
    /// # Errors
    ///
    /// Will return a `databases::error::Error` if unable to connect to the
    /// database. The `Keyring` is responsible for the persistence.
    pub fn new(config: &Configuration) -> Result<Keyring, databases::error::Error> {
        let database = Arc::new(databases::driver::build(&config.database.driver, &config.database.path)?);

        Ok(Keyring { database })
    }

    /// It registers a new credential with the given `name` and a freshly
    /// generated key, and returns the full record including the id assigned
    /// by the store.
    ///
    /// # Context: Lifecycle
    ///
    /// # Errors
    ///
    /// Will return an `Error::EmptyCredentialName` if the `name` is empty, or
    /// a `Error::Database` if unable to add the credential to the database.
    pub async fn add_credential(&self, name: &str) -> Result<Credential, Error> {
        if name.is_empty() {
            return Err(Error::EmptyCredentialName {
                location: Location::caller(),
            });
        }

        let key = auth::generate();

        let id = self.database.add_credential(name, &key).await?;

        debug!("Created credential {id} with name: {name}");

        Ok(Credential {
            id,
            name: name.to_string(),
            key,
        })
    }

    /// It returns all the credentials, ordered by id descending (most
    /// recently created first). There is no pagination.
    ///
    /// # Context: Lifecycle
    ///
    /// # Errors
    ///
    /// Will return a `Error::Database` if unable to load the credentials from
    /// the database.
    pub async fn list_credentials(&self) -> Result<Vec<Credential>, Error> {
        Ok(self.database.load_credentials().await?)
    }

    /// It returns the credential matching the given id.
    ///
    /// # Context: Lifecycle
    ///
    /// # Errors
    ///
    /// Will return an `Error::CredentialNotFound` if there is no credential
    /// with the given id.
    pub async fn get_credential(&self, id: CredentialId) -> Result<Credential, Error> {
        self.database
            .get_credential_from_id(id)
            .await?
            .ok_or(Error::CredentialNotFound {
                id,
                location: Location::caller(),
            })
    }

    /// It replaces the key of the credential with the given id with a freshly
    /// generated one, preserving the id and the name. The previous key is
    /// permanently invalid the instant the update commits; there is no grace
    /// window where both keys validate.
    ///
    /// # Context: Lifecycle
    ///
    /// # Errors
    ///
    /// Will return an `Error::CredentialNotFound` if there is no credential
    /// with the given id.
    pub async fn rotate_credential(&self, id: CredentialId) -> Result<Credential, Error> {
        let credential = self.get_credential(id).await?;

        let key = auth::generate();

        let updated = self.database.update_credential_key(id, &key).await?;

        // The record can vanish between the read and the update. Concurrent
        // rotations are not coordinated: last write wins.
        if updated == 0 {
            return Err(Error::CredentialNotFound {
                id,
                location: Location::caller(),
            });
        }

        debug!("Rotated key for credential {id}");

        Ok(Credential { key, ..credential })
    }

    /// It permanently removes the credential with the given id. The removed
    /// record is not returned.
    ///
    /// # Context: Lifecycle
    ///
    /// # Errors
    ///
    /// Will return an `Error::CredentialNotFound` if there is no credential
    /// with the given id.
    pub async fn remove_credential(&self, id: CredentialId) -> Result<(), Error> {
        let deleted = self.database.remove_credential(id).await?;

        if deleted == 0 {
            return Err(Error::CredentialNotFound {
                id,
                location: Location::caller(),
            });
        }

        debug!("Removed credential {id}");

        Ok(())
    }

    /// It validates a presented key against the registered credentials and
    /// returns the matching record.
    ///
    /// The lookup is an exact, case-sensitive string comparison on the `key`
    /// column. A string that cannot even be parsed as a [`Key`] can never
    /// match a stored value, so it is rejected without hitting the store.
    ///
    /// # Context: Validation
    ///
    /// # Errors
    ///
    /// Will return an `Error::CredentialMissing` if `presented_key` is empty,
    /// or an `Error::CredentialNotValid` if it does not match any registered
    /// credential.
    pub async fn validate(&self, presented_key: &str) -> Result<Credential, Error> {
        if presented_key.is_empty() {
            return Err(Error::CredentialMissing {
                location: Location::caller(),
            });
        }

        let Ok(key) = presented_key.parse::<Key>() else {
            return Err(Error::CredentialNotValid {
                location: Location::caller(),
            });
        };

        self.database
            .get_credential_from_key(&key)
            .await?
            .ok_or(Error::CredentialNotValid {
                location: Location::caller(),
            })
    }

    /// It drops the database tables.
    ///
    /// # Errors
    ///
    /// Will return a `databases::error::Error` if unable to drop the tables.
    pub fn drop_database_tables(&self) -> Result<(), databases::error::Error> {
        self.database.drop_database_tables()
    }
}
