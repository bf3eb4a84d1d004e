//! Product catalog routes. All public; sellers are trusted by the frontend.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::db::{self, ProductRepository};
use crate::error::Result;
use crate::models::{DeleteResponse, InsertResponse, Product, ProductInput, UpdateProduct, UpdateResponse};
use crate::state::AppState;

/// Query string of `POST /product`, naming the submitting seller.
#[derive(Debug, Deserialize)]
pub struct CreatorQuery {
    pub email: Option<String>,
}

/// Create a listing.
///
/// POST /product?email=seller@example.com
///
/// The `creator` field always comes from the query string; any creator in
/// the body is discarded so a seller cannot list on someone else's behalf.
///
/// # Errors
///
/// Returns a 500 on storage failure.
pub async fn create(
    State(state): State<AppState>,
    Query(query): Query<CreatorQuery>,
    Json(mut product): Json<ProductInput>,
) -> Result<Json<InsertResponse>> {
    stamp_creator(&mut product, query);

    let result = ProductRepository::new(state.database())
        .create(&product)
        .await?;
    Ok(Json(result.into()))
}

/// Overwrite `creator` with the query-string email, whatever the body said.
fn stamp_creator(product: &mut ProductInput, query: CreatorQuery) {
    product.creator = query.email;
}

/// List every product.
///
/// GET /product
///
/// # Errors
///
/// Returns a 500 on storage failure.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    let products = ProductRepository::new(state.database()).list_all().await?;
    Ok(Json(products))
}

/// Fetch one product; an unknown id answers with a null body.
///
/// GET /product/:id
///
/// # Errors
///
/// Returns a 500 on storage failure or a malformed id.
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Option<Product>>> {
    let id = db::parse_object_id(&id)?;
    let product = ProductRepository::new(state.database()).get(id).await?;
    Ok(Json(product))
}

/// Replace the listing fields of a product.
///
/// PUT /product/:id
///
/// # Errors
///
/// Returns a 500 on storage failure or a malformed id.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(update): Json<UpdateProduct>,
) -> Result<Json<UpdateResponse>> {
    let id = db::parse_object_id(&id)?;
    let result = ProductRepository::new(state.database())
        .update(id, &update)
        .await?;
    Ok(Json(result.into()))
}

/// Delete a product. Deleting an absent id reports a zero count, not an error.
///
/// DELETE /product/:id
///
/// # Errors
///
/// Returns a 500 on storage failure or a malformed id.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>> {
    let id = db::parse_object_id(&id)?;
    let result = ProductRepository::new(state.database()).delete(id).await?;
    Ok(Json(result.into()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn listing_with_creator(creator: &str) -> ProductInput {
        serde_json::from_value(serde_json::json!({
            "name": "EOS R6",
            "brand": "Canon",
            "description": "Full-frame mirrorless",
            "price": 2499.0,
            "category": "mirrorless",
            "photos": [],
            "creator": creator
        }))
        .unwrap()
    }

    #[test]
    fn test_query_email_overrides_body_creator() {
        let mut product = listing_with_creator("impostor@example.com");

        stamp_creator(
            &mut product,
            CreatorQuery {
                email: Some("seller@example.com".to_string()),
            },
        );

        assert_eq!(product.creator.as_deref(), Some("seller@example.com"));
    }

    #[test]
    fn test_missing_query_email_clears_body_creator() {
        let mut product = listing_with_creator("impostor@example.com");

        stamp_creator(&mut product, CreatorQuery { email: None });

        assert_eq!(product.creator, None);
    }
}
