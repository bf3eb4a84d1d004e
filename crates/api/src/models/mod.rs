//! Domain models for the camera shop collections.
//!
//! Read models carry the storage-assigned `_id` and serialize it as a plain
//! hex string, which is the form the frontend sends back in paths. Insert
//! models have no id field; MongoDB assigns one.

pub mod cart;
pub mod location;
pub mod order;
pub mod product;
pub mod response;
pub mod user;

pub use cart::{CartItem, NewCartItem};
pub use location::{Location, LocationFields, NewLocation};
pub use order::Order;
pub use product::{Product, ProductInput, UpdateProduct};
pub use response::{DeleteResponse, ExistingUserResponse, InsertResponse, UpdateResponse};
pub use user::{NewUser, User};

/// Serialize an optional `ObjectId` as a hex string, or null.
pub(crate) mod serde_opt_oid {
    use mongodb::bson::oid::ObjectId;
    use serde::Serializer;

    pub fn serialize<S>(oid: &Option<ObjectId>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match oid {
            Some(oid) => serializer.serialize_str(&oid.to_hex()),
            None => serializer.serialize_none(),
        }
    }
}
