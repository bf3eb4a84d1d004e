//! Services for the API.
//!
//! # Services
//!
//! - `token` - Session token issuance and verification

pub mod token;

pub use token::{Claims, TokenError, TokenService};
