//! User account documents.

use camera_shop_core::{Email, Role};
use mongodb::bson::Document;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::serde_helpers::serialize_object_id_as_hex_string;
use serde::{Deserialize, Serialize};

/// A user document from the `users` collection.
///
/// The role field is absent for ordinary customers; only promoted accounts
/// carry `"admin"` or `"seller"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", serialize_with = "serialize_object_id_as_hex_string")]
    pub id: ObjectId,
    pub email: Email,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    /// Profile fields submitted at signup, preserved verbatim.
    #[serde(flatten)]
    pub extra: Document,
}

/// Signup payload for inserting a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub email: Email,
    #[serde(flatten)]
    pub extra: Document,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    #[test]
    fn test_user_deserializes_from_bson_without_role() {
        let id = ObjectId::new();
        let doc = doc! { "_id": id, "email": "buyer@example.com", "name": "Buyer" };

        let user: User = mongodb::bson::from_document(doc).unwrap();
        assert_eq!(user.id, id);
        assert_eq!(user.role, None);
        assert_eq!(user.extra.get_str("name").unwrap(), "Buyer");
    }

    #[test]
    fn test_user_id_serializes_as_hex_string() {
        let id = ObjectId::new();
        let user = User {
            id,
            email: Email::parse("buyer@example.com").unwrap(),
            role: Some(Role::Admin),
            extra: Document::new(),
        };

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["_id"], serde_json::json!(id.to_hex()));
        assert_eq!(json["role"], "admin");
    }

    #[test]
    fn test_new_user_requires_valid_email() {
        let body = serde_json::json!({ "email": "not-an-email", "name": "X" });
        assert!(serde_json::from_value::<NewUser>(body).is_err());
    }
}
