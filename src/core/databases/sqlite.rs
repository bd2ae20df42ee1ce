//! The `SQLite3` database driver.
use std::panic::Location;

use async_trait::async_trait;
use keywarden_configuration::Driver;
use r2d2::Pool;
use r2d2_sqlite::rusqlite::params;
use r2d2_sqlite::SqliteConnectionManager;

use super::{Database, Error};
use crate::core::auth::{Credential, CredentialId, Key};

const DRIVER: Driver = Driver::Sqlite3;

pub struct Sqlite {
    pool: Pool<SqliteConnectionManager>,
}

#[async_trait]
impl Database for Sqlite {
    /// It instantiates a new `SQLite3` database driver.
    ///
    /// Refer to [`databases::Database::new`](crate::core::databases::Database::new).
    ///
    /// # Errors
    ///
    /// Will return `r2d2::Error` if `db_path` is not able to create `SqLite` database.
    fn new(db_path: &str) -> Result<Sqlite, Error> {
        let cm = SqliteConnectionManager::file(db_path);
        Pool::new(cm).map_or_else(|err| Err((err, DRIVER).into()), |pool| Ok(Sqlite { pool }))
    }

    /// Refer to [`databases::Database::create_database_tables`](crate::core::databases::Database::create_database_tables).
    fn create_database_tables(&self) -> Result<(), Error> {
        let create_credentials_table = "
        CREATE TABLE IF NOT EXISTS credentials (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            key TEXT NOT NULL
        );"
        .to_string();

        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        conn.execute(&create_credentials_table, [])?;

        Ok(())
    }

    /// Refer to [`databases::Database::drop_database_tables`](crate::core::databases::Database::drop_database_tables).
    fn drop_database_tables(&self) -> Result<(), Error> {
        let drop_credentials_table = "
        DROP TABLE credentials;"
            .to_string();

        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        conn.execute(&drop_credentials_table, [])?;

        Ok(())
    }

    /// Refer to [`databases::Database::add_credential`](crate::core::databases::Database::add_credential).
    async fn add_credential(&self, name: &str, key: &Key) -> Result<CredentialId, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let insert = conn.execute(
            "INSERT INTO credentials (name, key) VALUES (?1, ?2)",
            [name.to_string(), key.to_string()],
        )?;

        if insert == 0 {
            Err(Error::InsertFailed {
                location: Location::caller(),
                driver: DRIVER,
            })
        } else {
            Ok(conn.last_insert_rowid())
        }
    }

    /// Refer to [`databases::Database::get_credential_from_id`](crate::core::databases::Database::get_credential_from_id).
    async fn get_credential_from_id(&self, id: CredentialId) -> Result<Option<Credential>, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let mut stmt = conn.prepare("SELECT id, name, key FROM credentials WHERE id = ?")?;

        let mut rows = stmt.query([id])?;

        let row = rows.next()?;

        Ok(row.map(|row| {
            let id: CredentialId = row.get(0).unwrap();
            let name: String = row.get(1).unwrap();
            let key: String = row.get(2).unwrap();
            Credential {
                id,
                name,
                key: key.parse::<Key>().unwrap(),
            }
        }))
    }

    /// Refer to [`databases::Database::get_credential_from_key`](crate::core::databases::Database::get_credential_from_key).
    async fn get_credential_from_key(&self, key: &Key) -> Result<Option<Credential>, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let mut stmt = conn.prepare("SELECT id, name, key FROM credentials WHERE key = ?")?;

        let mut rows = stmt.query([key.to_string()])?;

        let row = rows.next()?;

        Ok(row.map(|row| {
            let id: CredentialId = row.get(0).unwrap();
            let name: String = row.get(1).unwrap();
            let key: String = row.get(2).unwrap();
            Credential {
                id,
                name,
                key: key.parse::<Key>().unwrap(),
            }
        }))
    }

    /// Refer to [`databases::Database::load_credentials`](crate::core::databases::Database::load_credentials).
    async fn load_credentials(&self) -> Result<Vec<Credential>, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let mut stmt = conn.prepare("SELECT id, name, key FROM credentials ORDER BY id DESC")?;

        let credential_iter = stmt.query_map([], |row| {
            let id: CredentialId = row.get(0)?;
            let name: String = row.get(1)?;
            let key: String = row.get(2)?;

            Ok(Credential {
                id,
                name,
                key: key.parse::<Key>().unwrap(),
            })
        })?;

        let credentials: Vec<Credential> = credential_iter.filter_map(std::result::Result::ok).collect();

        Ok(credentials)
    }

    /// Refer to [`databases::Database::update_credential_key`](crate::core::databases::Database::update_credential_key).
    async fn update_credential_key(&self, id: CredentialId, key: &Key) -> Result<usize, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let updated = conn.execute("UPDATE credentials SET key = ?2 WHERE id = ?1", params![id, key.to_string()])?;

        Ok(updated)
    }

    /// Refer to [`databases::Database::remove_credential`](crate::core::databases::Database::remove_credential).
    async fn remove_credential(&self, id: CredentialId) -> Result<usize, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let deleted = conn.execute("DELETE FROM credentials WHERE id = ?", [id])?;

        Ok(deleted)
    }
}
