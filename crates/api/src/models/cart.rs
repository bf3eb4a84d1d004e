//! Shopping cart documents.

use camera_shop_core::Email;
use mongodb::bson::Document;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::serde_helpers::serialize_object_id_as_hex_string;
use serde::{Deserialize, Serialize};

/// One cart row: a product snapshot owned by a customer email.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(rename = "_id", serialize_with = "serialize_object_id_as_hex_string")]
    pub id: ObjectId,
    pub email: Email,
    /// Product reference and details, stored verbatim.
    #[serde(flatten)]
    pub product: Document,
}

/// Payload for adding an item to a cart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCartItem {
    pub email: Email,
    #[serde(flatten)]
    pub product: Document,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cart_item_preserves_product_snapshot() {
        let body = serde_json::json!({
            "email": "buyer@example.com",
            "productId": "66b1f2a09c3d2a0001e7a001",
            "name": "EOS R6",
            "price": 2499.0
        });

        let item: NewCartItem = serde_json::from_value(body).unwrap();
        assert_eq!(item.email.as_str(), "buyer@example.com");
        assert_eq!(
            item.product.get_str("productId").unwrap(),
            "66b1f2a09c3d2a0001e7a001"
        );
    }
}
