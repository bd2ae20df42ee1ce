//! The credential REST API with all its versions.
//!
//! # Table of contents
//!
//! - [Configuration](#configuration)
//! - [Versioning](#versioning)
//! - [Endpoints](#endpoints)
//!
//! # Configuration
//!
//! The configuration file has a [`[http_api]`](keywarden_configuration::HttpApi)
//! section that can be used to enable and bind the API.
//!
//! ```toml
//! [http_api]
//! enabled = true
//! bind_address = "127.0.0.1:3000"
//! ```
//!
//! TLS is enabled by adding the certificate and key paths:
//!
//! ```toml
//! [http_api.tsl_config]
//! ssl_cert_path = "./storage/keywarden/lib/tls/localhost.crt"
//! ssl_key_path = "./storage/keywarden/lib/tls/localhost.key"
//! ```
//!
//! Refer to [`keywarden-configuration`](keywarden_configuration) for more
//! information about the API configuration.
//!
//! When you run the service with the API enabled, you will see the following
//! message:
//!
//! ```text
//! Loading configuration from config file ./keywarden.toml
//! 2024-06-10T12:19:24.963054069+01:00 [API][INFO] API server started on http://127.0.0.1:3000
//! ```
//!
//! # Versioning
//!
//! The API is versioned and each version has its own module. The mounted
//! routes (`/api/keys`, `/api/check`, the protected `/secret` resource) are
//! not prefixed with the version number; the version is an internal code
//! organization concern. Currently there is only one API version: [v1].
//!
//! # Endpoints
//!
//! Refer to the [v1] module for the list of available API endpoints.
pub mod routes;
pub mod server;
pub mod v1;

use serde::{Deserialize, Serialize};

/// The version of the HTTP Api.
#[derive(Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Debug)]
pub enum Version {
    /// The `v1` version of the HTTP Api.
    V1,
}
