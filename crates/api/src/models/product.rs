//! Product catalog documents.

use mongodb::bson::Document;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::serde_helpers::serialize_object_id_as_hex_string;
use serde::{Deserialize, Serialize};

/// A product document from the `product` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id", serialize_with = "serialize_object_id_as_hex_string")]
    pub id: ObjectId,
    pub name: String,
    pub brand: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub photos: Vec<String>,
    /// Email of the seller who submitted the listing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,
    #[serde(flatten)]
    pub extra: Document,
}

/// Listing payload for inserting a new product.
///
/// `creator` is accepted from the body but overwritten by the handler from
/// the query-string email before insertion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductInput {
    pub name: String,
    pub brand: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub photos: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,
    #[serde(flatten)]
    pub extra: Document,
}

/// Replacement fields for `PUT /product/:id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateProduct {
    pub name: String,
    pub brand: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub photos: Vec<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use mongodb::bson::Bson;

    #[test]
    fn test_product_input_keeps_unknown_fields() {
        let body = serde_json::json!({
            "name": "EOS R6",
            "brand": "Canon",
            "description": "Full-frame mirrorless",
            "price": 2499.0,
            "category": "mirrorless",
            "photos": ["a.jpg", "b.jpg"],
            "stock": 4
        });

        let input: ProductInput = serde_json::from_value(body).unwrap();
        assert_eq!(input.creator, None);
        let stock = input.extra.get("stock").unwrap();
        assert!(matches!(stock, Bson::Int32(4) | Bson::Int64(4)));
    }

    #[test]
    fn test_product_input_accepts_integer_price() {
        let body = serde_json::json!({
            "name": "X100V",
            "brand": "Fujifilm",
            "description": "Compact",
            "price": 1399,
            "category": "compact",
            "photos": []
        });

        let input: ProductInput = serde_json::from_value(body).unwrap();
        assert!((input.price - 1399.0).abs() < f64::EPSILON);
    }
}
