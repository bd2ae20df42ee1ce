//! Credential keys and the key generator.
//!
//! This module contains the types for the secrets handed out to API clients
//! and the service to [`generate`] them.
//!
//! A key is an opaque token with the shape `API-<64 lowercase hex chars>`:
//!
//! ```text
//! API-37b9b92e01bfa692c0bcbedcd16b0b2a6dba58f6f26a6af30e5bd2ad6fe25a7a
//! ```
//!
//! The hex part encodes 32 bytes taken from the thread-local CSPRNG. A key is
//! generated fresh for every credential creation and every rotation; it is
//! never derived from a previous key.
//!
//! ```rust,no_run
//! use keywarden::core::auth;
//!
//! let key = auth::generate();
//!
//! assert!(key.to_string().starts_with("API-"));
//! ```
use std::str::FromStr;

use derive_more::Display;
use lazy_static::lazy_static;
use rand::{thread_rng, Rng};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Number of random bytes in a key (hex-encoded in the key string).
pub const KEY_RANDOM_BYTES: usize = 32;

/// Literal prefix prepended to the hex-encoded random bytes.
pub const KEY_PREFIX: &str = "API-";

lazy_static! {
    static ref KEY_PATTERN: Regex = Regex::new(r"^API-[0-9a-f]{64}$").expect("valid key pattern");
}

/// It generates a new random credential [`Key`].
///
/// The key is built from 32 bytes of the thread-local CSPRNG. Exhaustion of
/// the underlying random source is unrecoverable and aborts the process.
#[must_use]
pub fn generate() -> Key {
    let mut random_bytes = [0u8; KEY_RANDOM_BYTES];
    thread_rng().fill(&mut random_bytes[..]);

    let hex: String = random_bytes.iter().map(|byte| format!("{byte:02x}")).collect();

    Key(format!("{KEY_PREFIX}{hex}"))
}

/// A randomly generated token used to authenticate API clients.
///
/// It contains the literal prefix `API-` followed by 64 lowercase hex
/// characters.
#[derive(Serialize, Deserialize, Debug, Eq, PartialEq, Clone, Display, Hash)]
pub struct Key(String);

/// Error returned when a key cannot be parsed from a string.
///
/// ```rust
/// use keywarden::core::auth::Key;
/// use std::str::FromStr;
///
/// let key_string = "API-0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef";
/// let key = Key::from_str(key_string);
///
/// assert!(key.is_ok());
/// assert_eq!(key.unwrap().to_string(), key_string);
/// ```
///
/// If the string does not contain a valid key, the parser function will
/// return this error.
#[derive(Debug, PartialEq, Eq)]
pub struct ParseKeyError;

impl FromStr for Key {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !KEY_PATTERN.is_match(s) {
            return Err(ParseKeyError);
        }

        Ok(Self(s.to_string()))
    }
}

/// Unique identifier for a [`Credential`], assigned by the store on creation.
pub type CredentialId = i64;

/// A credential record: the association between a client-facing label and
/// the secret key presented by that client.
#[derive(Serialize, Deserialize, Debug, Eq, PartialEq, Clone)]
pub struct Credential {
    /// Store-assigned identifier. Immutable for the lifetime of the record.
    pub id: CredentialId,
    /// Human-readable label. Always non-empty.
    pub name: String,
    /// The secret. Replaced wholesale on rotation, never partially mutated.
    pub key: Key,
}

impl std::fmt::Display for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "id: `{}`, name: `{}`, key: `{}`", self.id, self.name, self.key)
    }
}
