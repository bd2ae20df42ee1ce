//! Keywarden application.
//!
//! The application has a global configuration for its jobs. It's basically a
//! container for the services on top of the core
//! [`Keyring`](crate::core::Keyring).
//!
//! The application is responsible for starting the jobs depending on the
//! configuration. Right now there is only one job:
//!
//! - Credential REST API: the API can be enabled/disabled.
use std::sync::Arc;

use keywarden_configuration::Configuration;
use tokio::task::JoinHandle;
use tracing::warn;

use crate::bootstrap::jobs::credential_api;
use crate::core::Keyring;
use crate::servers::apis::Version;

/// It starts the application jobs and returns their handles.
pub async fn start(config: &Configuration, keyring: Arc<Keyring>) -> Vec<JoinHandle<()>> {
    let mut jobs: Vec<JoinHandle<()>> = Vec::new();

    // Start the credential REST API
    if config.http_api.enabled {
        if let Some(job) = credential_api::start_job(&config.http_api, keyring, Version::V1).await {
            jobs.push(job);
        };
    } else {
        warn!("The credential API is disabled in the configuration: the service has no delivery layer.");
    }

    jobs
}
