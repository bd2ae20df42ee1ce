//! Keyring domain services.
//!
//! Right now there is only the factory that builds the [`Keyring`] with its
//! dependencies from the configuration.
use keywarden_configuration::Configuration;

use crate::core::Keyring;

/// It returns a new keyring building its dependencies.
///
/// # Panics
///
/// Will panic if the keyring cannot be instantiated.
#[must_use]
pub fn keyring_factory(config: &Configuration) -> Keyring {
    match Keyring::new(config) {
        Ok(keyring) => keyring,
        Err(error) => {
            panic!("{}", error)
        }
    }
}
