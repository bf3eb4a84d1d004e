//! Cart repository for database operations.

use futures::TryStreamExt;
use mongodb::Database;
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use mongodb::results::{DeleteResult, InsertOneResult};

use super::{RepositoryError, collections};
use crate::models::{CartItem, NewCartItem};

/// Repository for the `cart` collection.
pub struct CartRepository {
    collection: mongodb::Collection<CartItem>,
}

impl CartRepository {
    /// Create a new cart repository.
    #[must_use]
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(collections::CARTS),
        }
    }

    /// Insert a cart row. One row per item per customer; no merging.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn add(&self, item: &NewCartItem) -> Result<InsertOneResult, RepositoryError> {
        let result = self
            .collection
            .clone_with_type::<NewCartItem>()
            .insert_one(item)
            .await?;
        Ok(result)
    }

    /// Fetch the cart rows owned by an email.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_by_email(&self, email: &str) -> Result<Vec<CartItem>, RepositoryError> {
        let items = self
            .collection
            .find(doc! { "email": email })
            .await?
            .try_collect()
            .await?;
        Ok(items)
    }

    /// Remove a cart row by id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the delete fails.
    pub async fn remove(&self, id: ObjectId) -> Result<DeleteResult, RepositoryError> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(result)
    }
}
