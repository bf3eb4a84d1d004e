//! Shipping location documents.
//!
//! Locations are keyed by customer email: each email owns at most one
//! document, enforced by a unique index and written with an atomic upsert.

use camera_shop_core::Email;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::serde_helpers::serialize_object_id_as_hex_string;
use serde::{Deserialize, Serialize};

/// A shipping location from the `location` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    #[serde(rename = "_id", serialize_with = "serialize_object_id_as_hex_string")]
    pub id: ObjectId,
    pub email: Email,
    #[serde(flatten)]
    pub fields: LocationFields,
}

/// The replaceable shipping fields of a location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationFields {
    pub name: String,
    pub phone: String,
    pub city: String,
    pub area: String,
    pub address: String,
}

/// Body of `POST /location`.
///
/// `email` is optional at the type level so the handler can answer the
/// missing-field case with a 400 instead of a deserialization error.
#[derive(Debug, Clone, Deserialize)]
pub struct NewLocation {
    pub email: Option<Email>,
    #[serde(flatten)]
    pub fields: LocationFields,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_location_without_email() {
        let body = serde_json::json!({
            "name": "Buyer",
            "phone": "0123456789",
            "city": "Dhaka",
            "area": "Banani",
            "address": "House 7, Road 11"
        });

        let loc: NewLocation = serde_json::from_value(body).unwrap();
        assert!(loc.email.is_none());
        assert_eq!(loc.fields.city, "Dhaka");
    }

    #[test]
    fn test_location_round_trips_through_bson() {
        let id = ObjectId::new();
        let doc = mongodb::bson::doc! {
            "_id": id,
            "email": "buyer@example.com",
            "name": "Buyer",
            "phone": "0123456789",
            "city": "Dhaka",
            "area": "Banani",
            "address": "House 7, Road 11",
        };

        let loc: Location = mongodb::bson::from_document(doc).unwrap();
        assert_eq!(loc.id, id);
        assert_eq!(loc.fields.area, "Banani");

        let json = serde_json::to_value(&loc).unwrap();
        assert_eq!(json["_id"], serde_json::json!(id.to_hex()));
    }
}
