//! Location repository for database operations.

use camera_shop_core::Email;
use futures::TryStreamExt;
use mongodb::Database;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{doc, to_document};
use mongodb::results::{DeleteResult, UpdateResult};

use super::{RepositoryError, collections};
use crate::models::{Location, LocationFields};

/// Repository for the `location` collection.
pub struct LocationRepository {
    collection: mongodb::Collection<Location>,
}

impl LocationRepository {
    /// Create a new location repository.
    #[must_use]
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(collections::LOCATIONS),
        }
    }

    /// Write the location for an email in one atomic upsert.
    ///
    /// An existing document keeps its `_id` and has its fields replaced; an
    /// absent one is inserted. The unique index on `email` keeps concurrent
    /// submissions from producing duplicates.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Duplicate` if a concurrent upsert still
    /// races the index, or `RepositoryError::Database` otherwise.
    pub async fn upsert_by_email(
        &self,
        email: &Email,
        fields: &LocationFields,
    ) -> Result<UpdateResult, RepositoryError> {
        let fields = to_document(fields).map_err(mongodb::error::Error::from)?;
        let result = self
            .collection
            .update_one(doc! { "email": email.as_str() }, doc! { "$set": fields })
            .upsert(true)
            .await?;
        Ok(result)
    }

    /// Fetch the locations stored for an email.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_by_email(&self, email: &str) -> Result<Vec<Location>, RepositoryError> {
        let locations = self
            .collection
            .find(doc! { "email": email })
            .await?
            .try_collect()
            .await?;
        Ok(locations)
    }

    /// Fetch one location by id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: ObjectId) -> Result<Option<Location>, RepositoryError> {
        let location = self.collection.find_one(doc! { "_id": id }).await?;
        Ok(location)
    }

    /// Replace the shipping fields of a location by id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the update fails.
    pub async fn update(
        &self,
        id: ObjectId,
        fields: &LocationFields,
    ) -> Result<UpdateResult, RepositoryError> {
        let fields = to_document(fields).map_err(mongodb::error::Error::from)?;
        let result = self
            .collection
            .update_one(doc! { "_id": id }, doc! { "$set": fields })
            .await?;
        Ok(result)
    }

    /// Delete a location by id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the delete fails.
    pub async fn delete(&self, id: ObjectId) -> Result<DeleteResult, RepositoryError> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(result)
    }
}
