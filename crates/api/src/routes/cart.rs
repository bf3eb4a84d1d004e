//! Shopping cart routes.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::db::{self, CartRepository};
use crate::error::Result;
use crate::models::{CartItem, DeleteResponse, InsertResponse, NewCartItem};
use crate::state::AppState;

/// Query string selecting whose cart to list.
#[derive(Debug, Deserialize)]
pub struct OwnerQuery {
    pub email: String,
}

/// Add an item to a cart.
///
/// POST /cart
///
/// # Errors
///
/// Returns a 500 on storage failure.
pub async fn add(
    State(state): State<AppState>,
    Json(item): Json<NewCartItem>,
) -> Result<Json<InsertResponse>> {
    let result = CartRepository::new(state.database()).add(&item).await?;
    Ok(Json(result.into()))
}

/// List the cart rows for an email.
///
/// GET /cart?email=buyer@example.com
///
/// # Errors
///
/// Returns a 500 on storage failure.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<OwnerQuery>,
) -> Result<Json<Vec<CartItem>>> {
    let items = CartRepository::new(state.database())
        .list_by_email(&query.email)
        .await?;
    Ok(Json(items))
}

/// Remove a cart row by id.
///
/// DELETE /cart/:id
///
/// # Errors
///
/// Returns a 500 on storage failure or a malformed id.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>> {
    let id = db::parse_object_id(&id)?;
    let result = CartRepository::new(state.database()).remove(id).await?;
    Ok(Json(result.into()))
}
