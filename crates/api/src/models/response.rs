//! Storage-result response bodies.
//!
//! The frontend was written against the MongoDB driver's wire shapes
//! (`insertedId`, `modifiedCount`, ...), so these DTOs mirror them in
//! camelCase rather than inventing a new envelope.

use mongodb::bson::oid::ObjectId;
use mongodb::results::{DeleteResult, InsertOneResult, UpdateResult};
use serde::Serialize;

use super::serde_opt_oid;

/// Result of an insert, e.g. `{"acknowledged": true, "insertedId": "..."}`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertResponse {
    pub acknowledged: bool,
    #[serde(with = "serde_opt_oid")]
    pub inserted_id: Option<ObjectId>,
}

impl From<InsertOneResult> for InsertResponse {
    fn from(result: InsertOneResult) -> Self {
        Self {
            acknowledged: true,
            inserted_id: result.inserted_id.as_object_id(),
        }
    }
}

/// Result of an update or upsert.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResponse {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
    #[serde(with = "serde_opt_oid")]
    pub upserted_id: Option<ObjectId>,
}

impl From<UpdateResult> for UpdateResponse {
    fn from(result: UpdateResult) -> Self {
        Self {
            acknowledged: true,
            matched_count: result.matched_count,
            modified_count: result.modified_count,
            upserted_id: result.upserted_id.and_then(|id| id.as_object_id()),
        }
    }
}

/// Result of a delete.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResponse {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

impl From<DeleteResult> for DeleteResponse {
    fn from(result: DeleteResult) -> Self {
        Self {
            acknowledged: true,
            deleted_count: result.deleted_count,
        }
    }
}

/// Marker returned when a signup hits an email that already has an account.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExistingUserResponse {
    pub message: &'static str,
    #[serde(with = "serde_opt_oid")]
    pub inserted_id: Option<ObjectId>,
}

impl ExistingUserResponse {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            message: "User already exists",
            inserted_id: None,
        }
    }
}

impl Default for ExistingUserResponse {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_response_shape() {
        let id = ObjectId::new();
        let response = InsertResponse {
            acknowledged: true,
            inserted_id: Some(id),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["acknowledged"], true);
        assert_eq!(json["insertedId"], serde_json::json!(id.to_hex()));
    }

    #[test]
    fn test_existing_user_marker_shape() {
        let json = serde_json::to_value(ExistingUserResponse::new()).unwrap();
        assert_eq!(json["message"], "User already exists");
        assert_eq!(json["insertedId"], serde_json::Value::Null);
    }

    #[test]
    fn test_delete_response_shape() {
        let json = serde_json::to_value(DeleteResponse {
            acknowledged: true,
            deleted_count: 0,
        })
        .unwrap();
        assert_eq!(json["deletedCount"], 0);
    }
}
