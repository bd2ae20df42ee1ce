//! API context to check the validity of a key.
//!
//! This context contains a single endpoint:
//!
//! - [Check an API key](#check-an-api-key)
//!
//! The lookup is the same one the [`auth`](crate::servers::apis::v1::middlewares::auth)
//! middleware performs on protected resources. The two consumers only differ
//! in what happens after validation: the middleware lets the request continue
//! while this endpoint returns the judgment itself.
//!
//! # Check an API key
//!
//! `POST /api/check`
//!
//! The request body must be a json object with the `apiKey` field:
//!
//! **Example request**
//!
//! ```bash
//! curl -X POST -H "Content-Type: application/json" \
//!   -d '{"apiKey": "API-37b9b92e01bfa692c0bcbedcd16b0b2a6dba58f6f26a6af30e5bd2ad6fe25a7a"}' \
//!   "http://127.0.0.1:3000/api/check"
//! ```
//!
//! **Example response** `200`
//!
//! ```json
//! {
//!   "valid": true,
//!   "message": "The API key is valid.",
//!   "data": {
//!     "id": 1,
//!     "name": "Payments service",
//!     "key": "API-37b9b92e01bfa692c0bcbedcd16b0b2a6dba58f6f26a6af30e5bd2ad6fe25a7a"
//!   }
//! }
//! ```
//!
//! The matched record is disclosed in full to any holder of the key: the key
//! itself is the only secret being protected.
//!
//! **Example response** `400` (the `apiKey` field is missing)
//!
//! ```json
//! {
//!   "valid": false,
//!   "reason": "apiKey must be provided in the JSON body."
//! }
//! ```
//!
//! **Example response** `403` (the key does not match any credential)
//!
//! ```json
//! {
//!   "valid": false,
//!   "reason": "The API key is not valid."
//! }
//! ```
pub mod forms;
pub mod handlers;
pub mod resources;
pub mod responses;
pub mod routes;
