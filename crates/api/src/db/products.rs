//! Product repository for database operations.

use futures::TryStreamExt;
use mongodb::Database;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{doc, to_document};
use mongodb::results::{DeleteResult, InsertOneResult, UpdateResult};

use super::{RepositoryError, collections};
use crate::models::{Product, ProductInput, UpdateProduct};

/// Repository for the `product` collection.
pub struct ProductRepository {
    collection: mongodb::Collection<Product>,
}

impl ProductRepository {
    /// Create a new product repository.
    #[must_use]
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(collections::PRODUCTS),
        }
    }

    /// Insert a new listing. The caller has already stamped `creator`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, product: &ProductInput) -> Result<InsertOneResult, RepositoryError> {
        let result = self
            .collection
            .clone_with_type::<ProductInput>()
            .insert_one(product)
            .await?;
        Ok(result)
    }

    /// Fetch every product document.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let products = self.collection.find(doc! {}).await?.try_collect().await?;
        Ok(products)
    }

    /// Fetch one product by id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: ObjectId) -> Result<Option<Product>, RepositoryError> {
        let product = self.collection.find_one(doc! { "_id": id }).await?;
        Ok(product)
    }

    /// Replace the listing fields of a product by id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the update fails.
    pub async fn update(
        &self,
        id: ObjectId,
        update: &UpdateProduct,
    ) -> Result<UpdateResult, RepositoryError> {
        let fields = to_document(update).map_err(mongodb::error::Error::from)?;
        let result = self
            .collection
            .update_one(doc! { "_id": id }, doc! { "$set": fields })
            .await?;
        Ok(result)
    }

    /// Delete a product by id. Deleting an absent id succeeds with a zero count.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the delete fails.
    pub async fn delete(&self, id: ObjectId) -> Result<DeleteResult, RepositoryError> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(result)
    }
}
