//! Clients for the hosted auth/data backend.
//!
//! The backend is consumed strictly through its request/response contracts:
//! a GoTrue-style auth REST surface and a PostgREST-style table surface.
//! No retries, no reconciliation - each operation is a single exchange.

pub mod auth;
pub mod error;
pub mod rest;

pub use auth::AuthClient;
pub use error::BackendError;
pub use rest::RestClient;
