//! API context to manage the credential lifecycle.
//!
//! This context contains the API routes for the credential lifecycle:
//!
//! - [List the API keys](#list-the-api-keys)
//! - [Get an API key](#get-an-api-key)
//! - [Create an API key](#create-an-api-key)
//! - [Rotate an API key](#rotate-an-api-key)
//! - [Delete an API key](#delete-an-api-key)
//!
//! The secrets handed out by this context are opaque tokens with the shape
//! `API-<64 lowercase hex chars>`. They are generated by the
//! [`auth`](crate::core::auth) service; the API never accepts a caller
//! provided key.
//!
//! # List the API keys
//!
//! `GET /api/keys`
//!
//! Returns every credential, most recently created first. There is no
//! pagination.
//!
//! **Example request**
//!
//! ```bash
//! curl "http://127.0.0.1:3000/api/keys"
//! ```
//!
//! **Example response** `200`
//!
//! ```json
//! [
//!   {
//!     "id": 2,
//!     "name": "Billing service",
//!     "key": "API-5f6c7f1f2a3b4c5d6e7f8091a2b3c4d5e6f708192a3b4c5d6e7f8091a2b3c4d5"
//!   },
//!   {
//!     "id": 1,
//!     "name": "Payments service",
//!     "key": "API-37b9b92e01bfa692c0bcbedcd16b0b2a6dba58f6f26a6af30e5bd2ad6fe25a7a"
//!   }
//! ]
//! ```
//!
//! # Get an API key
//!
//! `GET /api/keys/:id`
//!
//! **Example request**
//!
//! ```bash
//! curl "http://127.0.0.1:3000/api/keys/1"
//! ```
//!
//! Returns `200` with the credential resource, or `404` when there is no
//! credential with the given id.
//!
//! # Create an API key
//!
//! `POST /api/keys`
//!
//! The request body must be a json object with the `name` field:
//!
//! **Example request**
//!
//! ```bash
//! curl -X POST -H "Content-Type: application/json" \
//!   -d '{"name": "Payments service"}' \
//!   "http://127.0.0.1:3000/api/keys"
//! ```
//!
//! Returns `200` with the created resource (including the assigned `id` and
//! the generated `key`), or `400` when the `name` is missing or empty.
//!
//! # Rotate an API key
//!
//! `PUT /api/keys/:id`
//!
//! Replaces the key of the credential with a freshly generated one. The `id`
//! and the `name` are preserved. The previous key stops validating the
//! instant the rotation commits.
//!
//! **Example request**
//!
//! ```bash
//! curl -X PUT "http://127.0.0.1:3000/api/keys/1"
//! ```
//!
//! **Example response** `200`
//!
//! ```json
//! {
//!   "message": "API key updated.",
//!   "credential": {
//!     "id": 1,
//!     "name": "Payments service",
//!     "key": "API-8d7e6f5a4b3c2d1e0f9a8b7c6d5e4f3a2b1c0d9e8f7a6b5c4d3e2f1a0b9c8d7e"
//!   }
//! }
//! ```
//!
//! Returns `404` when there is no credential with the given id.
//!
//! # Delete an API key
//!
//! `DELETE /api/keys/:id`
//!
//! Permanently removes the credential. The removed record is not returned.
//!
//! **Example request**
//!
//! ```bash
//! curl -X DELETE "http://127.0.0.1:3000/api/keys/1"
//! ```
//!
//! **Example response** `200`
//!
//! ```json
//! {
//!   "message": "API key deleted."
//! }
//! ```
//!
//! Returns `404` when there is no credential with the given id.
pub mod forms;
pub mod handlers;
pub mod resources;
pub mod responses;
pub mod routes;
