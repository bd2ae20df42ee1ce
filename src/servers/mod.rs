//! Servers. Services that handle the network layer on top of the core
//! [`Keyring`](crate::core::Keyring).
pub mod apis;
pub mod signals;
