//! # ids-storage-sql
//!
//! SQLx-based `PostgreSQL` backend for the idserver configuration store.
//!
//! Implements the `ids-storage` traits over a shared connection pool.
//! Batch operations (configuration inserts, claim attachment) each run in a
//! single transaction; natural-key uniqueness is enforced by the schema's
//! UNIQUE constraints.

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod config;
mod entities;
pub mod error;
pub mod pool;
pub mod user;

pub use config::PgConfigStore;
pub use pool::{create_pool, PoolConfig};
pub use user::PgUserStore;
