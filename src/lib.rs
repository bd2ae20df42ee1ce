//! Keywarden is a credential management service. It issues, validates,
//! rotates and revokes opaque API keys for gating access to protected
//! endpoints.
//!
//! A client authenticates by presenting a key in the `x-api-key` request
//! header or in a JSON body; the service checks the key against the
//! persisted credentials and allows or denies the request.
//!
//! # Table of contents
//!
//! - [Components](#components)
//! - [Endpoints](#endpoints)
//! - [Configuration](#configuration)
//!
//! # Components
//!
//! ```text
//! Delivery layer       Domain layer
//!
//! Credential REST API |> Core keyring
//! ```
//!
//! - The [`core`] module contains the [`Keyring`](crate::core::Keyring): the
//!   credential lifecycle, the key generator and the validation gate, on top
//!   of a [`Database`](crate::core::databases::Database) driver (`SQLite3` or
//!   `MySQL`).
//! - The [`servers`] module contains the REST API that exposes the keyring
//!   over HTTP.
//! - The [`bootstrap`] and [`app`] modules wire everything together from the
//!   configuration.
//!
//! # Endpoints
//!
//! - `GET /api/keys`: list the credentials, most recently created first.
//! - `GET /api/keys/:id`: get one credential.
//! - `POST /api/keys`: create a credential with a generated key.
//! - `PUT /api/keys/:id`: rotate the key of a credential.
//! - `DELETE /api/keys/:id`: remove a credential.
//! - `POST /api/check`: return the validity judgment for a key.
//! - `GET /secret`: a sample resource gated by the `x-api-key` header.
//! - `GET /api/health_check`: liveness endpoint.
//!
//! Refer to the [`apis`](crate::servers::apis) module for the full endpoint
//! documentation.
//!
//! # Configuration
//!
//! The service is configured with a TOML file (`./keywarden.toml` by
//! default) or through the `KEYWARDEN_CONFIG` environment variable:
//!
//! ```toml
//! log_level = "info"
//!
//! [database]
//! driver = "Sqlite3"
//! path = "./storage/keywarden/lib/database/sqlite3.db"
//!
//! [http_api]
//! enabled = true
//! bind_address = "127.0.0.1:3000"
//! ```
//!
//! Refer to [`keywarden-configuration`](keywarden_configuration) for all the
//! options.
pub mod app;
pub mod bootstrap;
pub mod core;
pub mod servers;

#[macro_use]
extern crate lazy_static;

pub mod static_time {
    use std::time::SystemTime;

    lazy_static! {
        pub static ref TIME_AT_APP_START: SystemTime = SystemTime::now();
    }
}
