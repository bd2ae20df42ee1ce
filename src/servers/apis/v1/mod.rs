//! The first version of the credential REST API.
//!
//! The API has four contexts:
//!
//! - [Credential](context::credential): the lifecycle endpoints under
//!   `/api/keys`.
//! - [Check](context::check): the `POST /api/check` endpoint that returns the
//!   validity judgment for a key.
//! - [Secret](context::secret): the protected sample resource at `/secret`,
//!   gated by the [`auth`](middlewares::auth) middleware.
//! - [Health check](context::health_check): the `GET /api/health_check`
//!   liveness endpoint.
pub mod context;
pub mod middlewares;
pub mod responses;
pub mod routes;
