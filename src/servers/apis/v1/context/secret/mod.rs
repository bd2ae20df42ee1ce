//! API context for the protected sample resource.
//!
//! - `GET /secret`
//!
//! The route is gated by the [`auth`](crate::servers::apis::v1::middlewares::auth)
//! middleware: the handler is only reached when the `x-api-key` request
//! header carries a registered key.
//!
//! **Example request**
//!
//! ```bash
//! curl -H "x-api-key: API-37b9b92e01bfa692c0bcbedcd16b0b2a6dba58f6f26a6af30e5bd2ad6fe25a7a" \
//!   "http://127.0.0.1:3000/secret"
//! ```
//!
//! **Example response** `200`
//!
//! ```json
//! {
//!   "message": "Access granted. The API key is valid."
//! }
//! ```
//!
//! Requests without the header get a `401`; requests with a key that does not
//! match any credential get a `403`.
pub mod handlers;
pub mod routes;
