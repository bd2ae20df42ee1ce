//! API resources for the [`check`](crate::servers::apis::v1::context::check)
//! API context.
use serde::{Deserialize, Serialize};

use crate::servers::apis::v1::context::credential::resources::CredentialResource;

/// The judgment for a key that matched a credential.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct ValidKeyReport {
    /// Always `true`.
    pub valid: bool,
    /// Human readable confirmation.
    pub message: String,
    /// The matched record, disclosed in full by design.
    pub data: CredentialResource,
}

/// The judgment for a key that was missing or did not match any credential.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct InvalidKeyReport {
    /// Always `false`.
    pub valid: bool,
    /// Why the key was rejected.
    pub reason: String,
}
