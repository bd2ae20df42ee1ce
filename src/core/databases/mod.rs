//! The persistence module.
//!
//! Persistence is currently implemented with one [`Database`] trait.
//!
//! There are two implementations of the trait (two drivers):
//!
//! - [`Mysql`](crate::core::databases::mysql::Mysql)
//! - [`Sqlite`](crate::core::databases::sqlite::Sqlite)
//!
//! > **NOTICE**: There are no database migrations. If there are any changes,
//! we will implement them or provide a script to migrate to the new schema.
//!
//! The only persistent object is the credential record:
//!
//!  Field  | Sample data                                                          | Description
//! ---|---|---
//!  `id`   | 1                                                                    | Autoincrement id
//!  `name` | `Payments service`                                                   | Label identifying the key holder
//!  `key`  | `API-25e6b9b92e01bfa692c0bcbedcd16b0b2a6dba58f6f26a6af30e5bd2ad6fea7` | The secret presented by clients
//!
//! > **NOTICE**: The `key` column is looked up by exact equality when the
//! gate validates a presented key. Uniqueness is not enforced with a
//! constraint; collisions are cryptographically negligible.
pub mod driver;
pub mod error;
pub mod mysql;
pub mod sqlite;

use std::marker::PhantomData;

use async_trait::async_trait;

use self::error::Error;
use crate::core::auth::{Credential, CredentialId, Key};

struct Builder<T>
where
    T: Database,
{
    phantom: PhantomData<T>,
}

impl<T> Builder<T>
where
    T: Database + 'static,
{
    /// .
    ///
    /// # Errors
    ///
    /// Will return `r2d2::Error` if `db_path` is not able to create a database.
    pub(self) fn build(db_path: &str) -> Result<Box<dyn Database>, Error> {
        Ok(Box::new(T::new(db_path)?))
    }
}

/// The persistence trait. It contains all the methods to interact with the database.
#[async_trait]
pub trait Database: Sync + Send {
    /// It instantiates a new database driver.
    ///
    /// # Errors
    ///
    /// Will return `r2d2::Error` if `db_path` is not able to create a database.
    fn new(db_path: &str) -> Result<Self, Error>
    where
        Self: std::marker::Sized;

    // Schema

    /// It generates the database tables. SQL queries are hardcoded in the trait
    /// implementation.
    ///
    /// # Context: Schema
    ///
    /// # Errors
    ///
    /// Will return `Error` if unable to create own tables.
    fn create_database_tables(&self) -> Result<(), Error>;

    /// It drops the database tables.
    ///
    /// # Context: Schema
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to drop tables.
    fn drop_database_tables(&self) -> Result<(), Error>;

    // Credentials

    /// It adds a new credential record and returns the id assigned by the
    /// store.
    ///
    /// # Context: Credentials
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to save.
    async fn add_credential(&self, name: &str, key: &Key) -> Result<CredentialId, Error>;

    /// It gets a credential from the database by its id.
    ///
    /// It returns `Some(Credential)` if a record with the input
    /// [`CredentialId`] exists, `None` otherwise.
    ///
    /// # Context: Credentials
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to load.
    async fn get_credential_from_id(&self, id: CredentialId) -> Result<Option<Credential>, Error>;

    /// It gets a credential from the database by exact equality on the `key`
    /// column.
    ///
    /// It returns `Some(Credential)` if a record with the input [`Key`]
    /// exists, `None` otherwise.
    ///
    /// # Context: Credentials
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to load.
    async fn get_credential_from_key(&self, key: &Key) -> Result<Option<Credential>, Error>;

    /// It loads all the credentials from the database, ordered by id
    /// descending (most recently created first).
    ///
    /// # Context: Credentials
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to load.
    async fn load_credentials(&self) -> Result<Vec<Credential>, Error>;

    /// It overwrites the `key` column of the credential with the given id and
    /// returns the number of updated records (zero when the id is unknown).
    ///
    /// # Context: Credentials
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to save.
    async fn update_credential_key(&self, id: CredentialId, key: &Key) -> Result<usize, Error>;

    /// It removes the credential with the given id and returns the number of
    /// deleted records (zero when the id is unknown).
    ///
    /// # Context: Credentials
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to save.
    async fn remove_credential(&self, id: CredentialId) -> Result<usize, Error>;
}
