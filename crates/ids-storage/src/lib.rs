//! # ids-storage
//!
//! Storage abstraction traits for the idserver configuration store.
//!
//! This crate defines the store interfaces consumed by the startup
//! reconciler, to be implemented by concrete backends:
//!
//! - [`ConfigEntityStore`] - read-all / batch-insert for one configuration
//!   entity collection (clients, identity resources, API scopes)
//! - [`UserStore`] - username lookup, user creation, claim attachment
//!
//! In-memory implementations for development and testing live in [`memory`].

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod config;
pub mod error;
pub mod memory;
pub mod user;

pub use config::ConfigEntityStore;
pub use error::{StorageError, StorageResult};
pub use user::UserStore;
