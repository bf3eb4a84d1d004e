//! User repository for database operations.

use camera_shop_core::{Email, Role};
use futures::TryStreamExt;
use mongodb::Database;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::doc;
use mongodb::results::{DeleteResult, InsertOneResult, UpdateResult};

use super::{RepositoryError, collections};
use crate::middleware::RoleLookup;
use crate::models::{NewUser, User};

/// Repository for the `users` collection.
pub struct UserRepository {
    collection: mongodb::Collection<User>,
}

impl UserRepository {
    /// Create a new user repository.
    #[must_use]
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(collections::USERS),
        }
    }

    /// Insert a signup document.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Duplicate` if the email already has an
    /// account (unique index), or `RepositoryError::Database` otherwise.
    pub async fn create(&self, user: &NewUser) -> Result<InsertOneResult, RepositoryError> {
        let result = self
            .collection
            .clone_with_type::<NewUser>()
            .insert_one(user)
            .await?;
        Ok(result)
    }

    /// Fetch every user document.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_all(&self) -> Result<Vec<User>, RepositoryError> {
        let users = self.collection.find(doc! {}).await?.try_collect().await?;
        Ok(users)
    }

    /// Look up the user for an email.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn find_by_email(&self, email: &Email) -> Result<Option<User>, RepositoryError> {
        let user = self
            .collection
            .find_one(doc! { "email": email.as_str() })
            .await?;
        Ok(user)
    }

    /// Set the role on a user by id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the update fails.
    pub async fn set_role(
        &self,
        id: ObjectId,
        role: Role,
    ) -> Result<UpdateResult, RepositoryError> {
        let result = self
            .collection
            .update_one(doc! { "_id": id }, doc! { "$set": { "role": role.to_string() } })
            .await?;
        Ok(result)
    }

    /// Delete a user by id. Cart rows, locations, and orders are left behind.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the delete fails.
    pub async fn delete(&self, id: ObjectId) -> Result<DeleteResult, RepositoryError> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(result)
    }
}

impl RoleLookup for UserRepository {
    /// One storage read; roles are never cached across requests.
    async fn resolve(&self, email: &Email) -> Result<Option<Role>, RepositoryError> {
        Ok(self.find_by_email(email).await?.and_then(|user| user.role))
    }
}
