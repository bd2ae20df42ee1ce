//! Logic to run the credential API server.
//!
//! It contains two main structs: [`ApiServer`] and [`Launcher`].
//!
//! The `ApiServer` struct is responsible for:
//!
//! - Starting and stopping the server.
//! - Keeping the state of the server: `running` or `stopped`.
//!
//! The `Launcher` struct is responsible for knowing how to start the actual
//! axum server with graceful shutdown.
//!
//! It's a state machine. Configurations cannot be changed. This struct
//! represents concrete configuration and state. It allows to start and stop
//! the server but always keeping the same configuration.
use std::net::SocketAddr;
use std::sync::Arc;

use axum_server::tls_rustls::RustlsConfig;
use axum_server::Handle;
use derive_more::Constructor;
use futures::future::BoxFuture;
use tokio::sync::oneshot::{Receiver, Sender};
use tracing::info;

use super::routes::router;
use crate::bootstrap::jobs::Started;
use crate::core::Keyring;
use crate::servers::signals::{graceful_shutdown, Halted};

/// Error that can occur when starting or stopping the API server.
///
/// Some errors triggered while starting the server are:
///
/// - The spawned server cannot send its bound address back to the main thread.
/// - The launcher cannot receive the bound address from the spawned server.
///
/// Some errors triggered while stopping the server are:
///
/// - The channel to send the shutdown signal to the server is closed.
/// - The task to shutdown the server on the spawned server failed to execute
///   to completion.
#[derive(Debug)]
pub enum Error {
    /// Any kind of error starting or stopping the server.
    Error(String),
}

/// A stopped API server.
pub type StoppedApiServer = ApiServer<Stopped>;

/// A running API server.
pub type RunningApiServer = ApiServer<Running>;

/// The API server controller.
pub struct ApiServer<S> {
    /// The state of the server: `running` or `stopped`.
    pub state: S,
}

/// A stopped API server state.
pub struct Stopped {
    launcher: Launcher,
}

/// A running API server state.
pub struct Running {
    /// The address where the server is bound.
    pub binding: SocketAddr,
    pub halt_task: Sender<Halted>,
    pub task: tokio::task::JoinHandle<Launcher>,
}

impl ApiServer<Stopped> {
    #[must_use]
    pub fn new(launcher: Launcher) -> Self {
        Self {
            state: Stopped { launcher },
        }
    }

    /// It starts the server and returns an `ApiServer` controller in
    /// `running` state.
    ///
    /// # Errors
    ///
    /// It would return an error if no bound address is returned after
    /// launching the server.
    ///
    /// # Panics
    ///
    /// It would panic spawned task panicked.
    pub async fn start(self, keyring: Arc<Keyring>) -> Result<ApiServer<Running>, Error> {
        let (tx_start, rx_start) = tokio::sync::oneshot::channel::<Started>();
        let (tx_halt, rx_halt) = tokio::sync::oneshot::channel::<Halted>();

        let launcher = self.state.launcher;

        let task = tokio::spawn(async move {
            let server = launcher.start(keyring, tx_start, rx_halt);

            server.await;

            launcher
        });

        let binding = rx_start
            .await
            .map_err(|_| Error::Error("Could not receive bound address.".to_string()))?
            .address;

        info!(target: "API", "API server started on http://{binding}");

        Ok(ApiServer {
            state: Running {
                binding,
                halt_task: tx_halt,
                task,
            },
        })
    }
}

impl ApiServer<Running> {
    /// It stops the server and returns an `ApiServer` controller in `stopped`
    /// state.
    ///
    /// # Errors
    ///
    /// It would return an error if the channel for the task killer signal was
    /// closed.
    pub async fn stop(self) -> Result<ApiServer<Stopped>, Error> {
        self.state
            .halt_task
            .send(Halted::Normal)
            .map_err(|_| Error::Error("Task killer channel was closed.".to_string()))?;

        let launcher = self.state.task.await.map_err(|e| Error::Error(e.to_string()))?;

        Ok(ApiServer {
            state: Stopped { launcher },
        })
    }
}

/// It knows how to bind the socket and run the axum server with graceful
/// shutdown.
#[derive(Constructor, Debug)]
pub struct Launcher {
    pub bind_to: SocketAddr,
    pub tls: Option<RustlsConfig>,
}

impl Launcher {
    /// It starts the server on the given socket address and sends the bound
    /// address back through `tx_start` as soon as the socket is bound.
    ///
    /// # Panics
    ///
    /// Will panic if unable to bind to the socket address or if the server
    /// crashes.
    fn start(&self, keyring: Arc<Keyring>, tx_start: Sender<Started>, rx_halt: Receiver<Halted>) -> BoxFuture<'static, ()> {
        let socket = std::net::TcpListener::bind(self.bind_to).expect("Could not bind tcp_listener to address.");
        let address = socket.local_addr().expect("Could not get local_addr from tcp_listener.");

        let handle = Handle::new();

        tokio::task::spawn(graceful_shutdown(
            handle.clone(),
            rx_halt,
            format!("Shutting down API server on socket address: {address}"),
        ));

        let tls = self.tls.clone();
        let app = router(keyring);

        let running = Box::pin(async move {
            match tls {
                Some(tls) => axum_server::from_tcp_rustls(socket, tls)
                    .handle(handle)
                    .serve(app.into_make_service_with_connect_info::<SocketAddr>())
                    .await
                    .expect("API server crashed."),
                None => axum_server::from_tcp(socket)
                    .handle(handle)
                    .serve(app.into_make_service_with_connect_info::<SocketAddr>())
                    .await
                    .expect("API server crashed."),
            }
        });

        tx_start
            .send(Started { address })
            .expect("the API server should not be dropped");

        running
    }
}
