//! Ephemeral configurations for testing.
use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use keywarden_configuration::{Configuration, LogLevel};

use crate::random;

/// This configuration is used for testing. It generates random config values
/// so they do not collide if you run more than one service at the same time.
///
/// # Panics
///
/// Will panic if it can't convert the temp file path to string.
#[must_use]
pub fn ephemeral() -> Configuration {
    let mut config = Configuration {
        log_level: Some(LogLevel::Off), // Change to `debug` for tests debugging
        ..Default::default()
    };

    // Ephemeral socket address for the API
    config.http_api.enabled = true;
    config.http_api.bind_address = SocketAddr::new(IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)), 0);

    // Ephemeral sqlite database
    let temp_directory = env::temp_dir();
    let random_db_id = random::string(16);
    let temp_file = temp_directory.join(format!("credentials_{random_db_id}.db"));
    config.database.path = temp_file.to_str().expect("valid temp file path").to_owned();

    config
}
