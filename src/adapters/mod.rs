//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - REST endpoints (axum)
//! - `memory` - In-memory ports for tests and local development
//! - `postgres` - PostgreSQL ports (sqlx)

pub mod http;
pub mod memory;
pub mod postgres;
