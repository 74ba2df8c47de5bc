//! Startup configuration reconciliation for idserver.
//!
//! At process startup, before the server accepts requests, the desired set
//! of OAuth clients, identity resources, API scopes, and seed user accounts
//! is synchronized into the persisted store. Synchronization is strictly
//! additive: missing entities are inserted, existing ones are never updated
//! or deleted, and repeated runs against the same store are no-ops. Any
//! failure propagates to the caller and aborts startup.

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod config;
pub mod error;
pub mod password;
pub mod reconciler;
pub mod secret;
pub mod sync;

pub use config::{DesiredState, SeedUser};
pub use error::{SeedError, SeedResult};
pub use password::{PasswordHasherService, PasswordPolicy};
pub use reconciler::Reconciler;
pub use secret::hash_secret;
pub use sync::{sync_entities, SyncSummary};
