//! # ids-model
//!
//! Domain models for the idserver configuration store.
//!
//! This crate defines the entities the startup reconciler keeps in sync:
//!
//! - [`Client`] - OAuth/OIDC client registrations
//! - [`IdentityResource`] - identity scopes and the claims they expose
//! - [`ApiScope`] - API scopes clients may request
//! - [`User`] - seeded user accounts with attached [`Claim`]s
//!
//! Configuration entities are identified by a domain-meaningful natural key
//! (client id, resource name, scope name) exposed through the [`NaturalKey`]
//! trait, distinct from their storage-internal surrogate id.

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod client;
pub mod key;
pub mod resource;
pub mod scope;
pub mod user;

pub use client::{Client, GrantType};
pub use key::NaturalKey;
pub use resource::IdentityResource;
pub use scope::ApiScope;
pub use user::{Claim, User};
