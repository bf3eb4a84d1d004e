//! MongoDB access for the camera shop collections.
//!
//! # Collections
//!
//! - `users` - Accounts and their roles (unique index on `email`)
//! - `product` - Camera listings
//! - `cart` - Per-customer cart rows
//! - `location` - Shipping locations (unique index on `email`)
//! - `manageorder` - Placed orders
//!
//! The driver pools connections internally; a single [`Database`] handle is
//! created at startup and injected through `AppState`.

pub mod carts;
pub mod locations;
pub mod orders;
pub mod products;
pub mod users;

pub use carts::CartRepository;
pub use locations::LocationRepository;
pub use orders::OrderRepository;
pub use products::ProductRepository;
pub use users::UserRepository;

use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use mongodb::options::IndexOptions;
use mongodb::{Client, Database, IndexModel};
use secrecy::ExposeSecret;

use crate::config::ApiConfig;

/// Collection names, preserved from the original deployment.
pub mod collections {
    pub const USERS: &str = "users";
    pub const PRODUCTS: &str = "product";
    pub const CARTS: &str = "cart";
    pub const LOCATIONS: &str = "location";
    pub const ORDERS: &str = "manageorder";
}

/// Errors from the repository layer.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// The driver reported a failure (connectivity, command error, ...).
    #[error("database error: {0}")]
    Database(#[source] mongodb::error::Error),

    /// A path parameter is not a valid `ObjectId`.
    #[error("malformed object id: {0}")]
    InvalidId(#[from] mongodb::bson::oid::Error),

    /// A write violated a unique index.
    #[error("unique index violated on {0}")]
    Duplicate(&'static str),
}

impl From<mongodb::error::Error> for RepositoryError {
    fn from(err: mongodb::error::Error) -> Self {
        if is_duplicate_key(&err) {
            Self::Duplicate("email")
        } else {
            Self::Database(err)
        }
    }
}

/// Whether the driver error is a unique-index violation (code 11000).
fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    use mongodb::error::{ErrorKind, WriteFailure};

    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => write_error.code == 11000,
        ErrorKind::Command(command_error) => command_error.code == 11000,
        _ => false,
    }
}

/// Parse an opaque id from a request path.
///
/// # Errors
///
/// Returns `RepositoryError::InvalidId` if the string is not a 24-character
/// hex `ObjectId`. Malformed ids are not given a dedicated response; they
/// surface through the generic error path like any other storage failure.
pub fn parse_object_id(raw: &str) -> Result<ObjectId, RepositoryError> {
    Ok(ObjectId::parse_str(raw)?)
}

/// Connect to MongoDB and select the configured database.
///
/// # Errors
///
/// Returns `mongodb::error::Error` if the URI is invalid. The driver connects
/// lazily, so an unreachable server surfaces on first use instead.
pub async fn connect(config: &ApiConfig) -> Result<Database, mongodb::error::Error> {
    let client = Client::with_uri_str(config.mongodb_uri.expose_secret()).await?;
    Ok(client.database(&config.database_name))
}

/// Create the unique indexes backing the email-keyed invariants.
///
/// `users.email` and `location.email` must be unique for the
/// insert-and-catch-duplicate and atomic-upsert paths to be race-free.
///
/// # Errors
///
/// Returns `mongodb::error::Error` if index creation fails.
pub async fn ensure_indexes(db: &Database) -> Result<(), mongodb::error::Error> {
    let unique_email = || {
        IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build()
    };

    db.collection::<crate::models::User>(collections::USERS)
        .create_index(unique_email())
        .await?;
    db.collection::<crate::models::Location>(collections::LOCATIONS)
        .create_index(unique_email())
        .await?;

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_object_id_valid() {
        let id = ObjectId::new();
        assert_eq!(parse_object_id(&id.to_hex()).unwrap(), id);
    }

    #[test]
    fn test_parse_object_id_malformed() {
        assert!(matches!(
            parse_object_id("not-a-hex-id"),
            Err(RepositoryError::InvalidId(_))
        ));
    }
}
