//! Order repository for database operations.

use futures::TryStreamExt;
use mongodb::Database;
use mongodb::bson::{Document, doc};
use mongodb::results::InsertOneResult;

use super::{RepositoryError, collections};
use crate::models::Order;

/// Repository for the `manageorder` collection.
pub struct OrderRepository {
    collection: mongodb::Collection<Order>,
}

impl OrderRepository {
    /// Create a new order repository.
    #[must_use]
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(collections::ORDERS),
        }
    }

    /// Append an order payload verbatim.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, payload: Document) -> Result<InsertOneResult, RepositoryError> {
        let result = self
            .collection
            .clone_with_type::<Document>()
            .insert_one(payload)
            .await?;
        Ok(result)
    }

    /// Fetch every order document.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_all(&self) -> Result<Vec<Order>, RepositoryError> {
        let orders = self.collection.find(doc! {}).await?.try_collect().await?;
        Ok(orders)
    }
}
