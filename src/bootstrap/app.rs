use std::env;
use std::sync::Arc;

use keywarden_configuration::{Configuration, ENV_VAR_CONFIG};

use crate::bootstrap;
use crate::core::services::keyring_factory;
use crate::core::Keyring;
use crate::static_time;

/// It loads the configuration and builds the domain layer with it.
#[must_use]
pub fn setup() -> (Arc<Configuration>, Arc<Keyring>) {
    let configuration = Arc::new(initialize_configuration());
    let keyring = initialize_with_configuration(&configuration);

    (configuration, keyring)
}

#[must_use]
pub fn initialize_with_configuration(configuration: &Arc<Configuration>) -> Arc<Keyring> {
    initialize_static();
    initialize_logging(configuration);
    Arc::new(initialize_keyring(configuration))
}

pub fn initialize_static() {
    // Set the time of the app starting
    lazy_static::initialize(&static_time::TIME_AT_APP_START);
}

/// # Panics
///
/// Will panic if it can't load the configuration from either
/// `./keywarden.toml` file or the env var `KEYWARDEN_CONFIG`.
#[must_use]
fn initialize_configuration() -> Configuration {
    const CONFIG_PATH: &str = "./keywarden.toml";

    if env::var(ENV_VAR_CONFIG).is_ok() {
        println!("Loading configuration from env var {ENV_VAR_CONFIG}");
        Configuration::load_from_env_var(ENV_VAR_CONFIG).unwrap()
    } else {
        println!("Loading configuration from config file {CONFIG_PATH}");
        Configuration::load_from_file(CONFIG_PATH).unwrap()
    }
}

#[must_use]
pub fn initialize_keyring(config: &Arc<Configuration>) -> Keyring {
    keyring_factory(config)
}

pub fn initialize_logging(config: &Arc<Configuration>) {
    bootstrap::logging::setup(config);
}
