//! Credential API job starter.
//!
//! The [`credential_api::start_job`](crate::bootstrap::jobs::credential_api::start_job)
//! function starts the credential REST API.
//!
//! The function spawns a new asynchronous task, that task is the "**launcher**".
//! The "**launcher**" starts the actual server and sends a message back to the
//! main application.
//!
//! The "**launcher**" is an intermediary thread that decouples the API server
//! from the process that handles it.
//!
//! Refer to the [configuration documentation](https://docs.rs/keywarden-configuration)
//! for the API configuration options.
use std::net::SocketAddr;
use std::sync::Arc;

use axum_server::tls_rustls::RustlsConfig;
use keywarden_configuration::HttpApi;
use tokio::task::JoinHandle;
use tracing::info;

use super::make_rust_tls;
use crate::core::Keyring;
use crate::servers::apis::server::{ApiServer, Launcher};
use crate::servers::apis::Version;

/// This function starts a new API server with the provided configuration.
///
/// The function starts a new concurrent task that will run the API server.
///
/// # Panics
///
/// It would panic if unable to start the API server.
pub async fn start_job(config: &HttpApi, keyring: Arc<Keyring>, version: Version) -> Option<JoinHandle<()>> {
    if config.enabled {
        let bind_to = config.bind_address;

        let tls = make_rust_tls(&config.tsl_config)
            .await
            .map(|tls| tls.expect("it should have a valid credential api tls configuration"));

        match version {
            Version::V1 => Some(start_v1(bind_to, tls, keyring.clone()).await),
        }
    } else {
        info!("Note: Not loading the credential API, Not Enabled in Configuration.");
        None
    }
}

async fn start_v1(socket: SocketAddr, tls: Option<RustlsConfig>, keyring: Arc<Keyring>) -> JoinHandle<()> {
    let server = ApiServer::new(Launcher::new(socket, tls))
        .start(keyring)
        .await
        .expect("it should be able to start the credential api");

    tokio::spawn(async move {
        assert!(!server.state.halt_task.is_closed(), "Halt channel should be open");
        server.state.task.await.expect("failed to close service");
    })
}
