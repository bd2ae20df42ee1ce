//! The `MySQL` database driver.
use async_trait::async_trait;
use keywarden_configuration::Driver;
use r2d2::Pool;
use r2d2_mysql::mysql::prelude::Queryable;
use r2d2_mysql::mysql::{params, Opts, OptsBuilder};
use r2d2_mysql::MySqlConnectionManager;

use super::{Database, Error};
use crate::core::auth::{Credential, CredentialId, Key};

const DRIVER: Driver = Driver::MySQL;

pub struct Mysql {
    pool: Pool<MySqlConnectionManager>,
}

#[async_trait]
impl Database for Mysql {
    /// It instantiates a new `MySQL` database driver.
    ///
    /// Refer to [`databases::Database::new`](crate::core::databases::Database::new).
    ///
    /// # Errors
    ///
    /// Will return `r2d2::Error` if `db_path` is not able to create `MySQL` database.
    fn new(db_path: &str) -> Result<Self, Error> {
        let opts = Opts::from_url(db_path)?;
        let builder = OptsBuilder::from_opts(opts);
        let manager = MySqlConnectionManager::new(builder);
        let pool = r2d2::Pool::builder().build(manager).map_err(|e| (e, DRIVER))?;

        Ok(Self { pool })
    }

    /// Refer to [`databases::Database::create_database_tables`](crate::core::databases::Database::create_database_tables).
    fn create_database_tables(&self) -> Result<(), Error> {
        let create_credentials_table = "
        CREATE TABLE IF NOT EXISTS `credentials` (
          `id` BIGINT NOT NULL AUTO_INCREMENT,
          `name` VARCHAR(255) NOT NULL,
          `key` VARCHAR(68) NOT NULL,
          PRIMARY KEY (`id`)
        );"
        .to_string();

        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        conn.query_drop(&create_credentials_table)
            .expect("Could not create credentials table.");

        Ok(())
    }

    /// Refer to [`databases::Database::drop_database_tables`](crate::core::databases::Database::drop_database_tables).
    fn drop_database_tables(&self) -> Result<(), Error> {
        let drop_credentials_table = "
        DROP TABLE `credentials`;"
            .to_string();

        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        conn.query_drop(&drop_credentials_table)
            .expect("Could not drop `credentials` table.");

        Ok(())
    }

    /// Refer to [`databases::Database::add_credential`](crate::core::databases::Database::add_credential).
    async fn add_credential(&self, name: &str, key: &Key) -> Result<CredentialId, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        conn.exec_drop(
            "INSERT INTO `credentials` (`name`, `key`) VALUES (:name, :key)",
            params! { "name" => name, "key" => key.to_string() },
        )?;

        Ok(CredentialId::try_from(conn.last_insert_id()).expect("insert id should fit within a i64!"))
    }

    /// Refer to [`databases::Database::get_credential_from_id`](crate::core::databases::Database::get_credential_from_id).
    async fn get_credential_from_id(&self, id: CredentialId) -> Result<Option<Credential>, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let select = conn.exec_first::<(CredentialId, String, String), _, _>(
            "SELECT `id`, `name`, `key` FROM `credentials` WHERE `id` = :id",
            params! { "id" => id },
        )?;

        Ok(select.map(|(id, name, key)| Credential {
            id,
            name,
            key: key.parse::<Key>().unwrap(),
        }))
    }

    /// Refer to [`databases::Database::get_credential_from_key`](crate::core::databases::Database::get_credential_from_key).
    async fn get_credential_from_key(&self, key: &Key) -> Result<Option<Credential>, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let select = conn.exec_first::<(CredentialId, String, String), _, _>(
            "SELECT `id`, `name`, `key` FROM `credentials` WHERE `key` = :key",
            params! { "key" => key.to_string() },
        )?;

        Ok(select.map(|(id, name, key)| Credential {
            id,
            name,
            key: key.parse::<Key>().unwrap(),
        }))
    }

    /// Refer to [`databases::Database::load_credentials`](crate::core::databases::Database::load_credentials).
    async fn load_credentials(&self) -> Result<Vec<Credential>, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let credentials = conn.query_map(
            "SELECT `id`, `name`, `key` FROM `credentials` ORDER BY `id` DESC",
            |(id, name, key): (CredentialId, String, String)| Credential {
                id,
                name,
                key: key.parse::<Key>().unwrap(),
            },
        )?;

        Ok(credentials)
    }

    /// Refer to [`databases::Database::update_credential_key`](crate::core::databases::Database::update_credential_key).
    async fn update_credential_key(&self, id: CredentialId, key: &Key) -> Result<usize, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        conn.exec_drop(
            "UPDATE `credentials` SET `key` = :key WHERE `id` = :id",
            params! { "key" => key.to_string(), "id" => id },
        )?;

        Ok(usize::try_from(conn.affected_rows()).expect("affected rows should fit within a usize!"))
    }

    /// Refer to [`databases::Database::remove_credential`](crate::core::databases::Database::remove_credential).
    async fn remove_credential(&self, id: CredentialId) -> Result<usize, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        conn.exec_drop("DELETE FROM `credentials` WHERE `id` = :id", params! { "id" => id })?;

        Ok(usize::try_from(conn.affected_rows()).expect("affected rows should fit within a usize!"))
    }
}
