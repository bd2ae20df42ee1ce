use std::net::SocketAddr;
use std::sync::Arc;

use futures::executor::block_on;
use keywarden::bootstrap::app::initialize_with_configuration;
use keywarden::bootstrap::jobs::make_rust_tls;
use keywarden::core::Keyring;
use keywarden::servers::apis::server::{ApiServer, Launcher, Running, Stopped};
use keywarden_configuration::{Configuration, HttpApi};

use super::connection_info::ConnectionInfo;

pub struct Environment<S> {
    pub config: Arc<HttpApi>,
    pub keyring: Arc<Keyring>,
    pub server: ApiServer<S>,
}

impl Environment<Stopped> {
    pub fn new(configuration: &Arc<Configuration>) -> Self {
        let keyring = initialize_with_configuration(configuration);

        let config = Arc::new(configuration.http_api.clone());

        let bind_to = config.bind_address;

        let tls = block_on(make_rust_tls(&config.tsl_config)).map(|tls| tls.expect("tls config failed"));

        let server = ApiServer::new(Launcher::new(bind_to, tls));

        Self { config, keyring, server }
    }

    pub async fn start(self) -> Environment<Running> {
        Environment {
            config: self.config,
            keyring: self.keyring.clone(),
            server: self.server.start(self.keyring).await.unwrap(),
        }
    }
}

impl Environment<Running> {
    pub async fn new(configuration: &Arc<Configuration>) -> Self {
        Environment::<Stopped>::new(configuration).start().await
    }

    pub async fn stop(self) -> Environment<Stopped> {
        Environment {
            config: self.config,
            keyring: self.keyring,
            server: self.server.stop().await.unwrap(),
        }
    }

    pub fn get_connection_info(&self) -> ConnectionInfo {
        ConnectionInfo::anonymous(&self.server.state.binding.to_string())
    }

    pub fn bind_address(&self) -> SocketAddr {
        self.server.state.binding
    }
}
