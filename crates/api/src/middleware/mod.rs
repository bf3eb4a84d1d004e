//! Request filters for the API.
//!
//! # Gate order per route
//!
//! 1. `AuthClaims` - verify the bearer token, attach its claims
//! 2. `RequireAdmin` / `RequireSeller` - look the caller's role up in storage
//!
//! The role gates embed the auth gate, so listing one of them on a handler
//! applies both in order.

pub mod auth;

pub use auth::{AuthClaims, RequireAdmin, RequireSeller, RoleLookup};
