//! Order documents.
//!
//! Orders are append-only and carry whatever payload the checkout flow
//! submits (product, buyer, shipping info); nothing is typed beyond the id.

use mongodb::bson::Document;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::serde_helpers::serialize_object_id_as_hex_string;
use serde::{Deserialize, Serialize};

/// An order from the `manageorder` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "_id", serialize_with = "serialize_object_id_as_hex_string")]
    pub id: ObjectId,
    #[serde(flatten)]
    pub payload: Document,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_order_keeps_arbitrary_payload() {
        let id = ObjectId::new();
        let doc = mongodb::bson::doc! {
            "_id": id,
            "product": "EOS R6",
            "buyer": "buyer@example.com",
            "quantity": 1,
        };

        let order: Order = mongodb::bson::from_document(doc).unwrap();
        assert_eq!(order.payload.get_str("buyer").unwrap(), "buyer@example.com");

        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["_id"], serde_json::json!(id.to_hex()));
        assert_eq!(json["product"], "EOS R6");
    }
}
