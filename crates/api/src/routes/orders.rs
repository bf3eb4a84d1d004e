//! Order routes. Append-only; there is no status workflow.

use axum::{Json, extract::State};
use mongodb::bson::Document;

use crate::db::OrderRepository;
use crate::error::Result;
use crate::models::{InsertResponse, Order};
use crate::state::AppState;

/// Place an order.
///
/// POST /manageorder
///
/// The payload (product, buyer, shipping info) is stored verbatim.
///
/// # Errors
///
/// Returns a 500 on storage failure.
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<Document>,
) -> Result<Json<InsertResponse>> {
    let result = OrderRepository::new(state.database())
        .create(payload)
        .await?;
    Ok(Json(result.into()))
}

/// List every order.
///
/// GET /manageorder
///
/// # Errors
///
/// Returns a 500 on storage failure.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Order>>> {
    let orders = OrderRepository::new(state.database()).list_all().await?;
    Ok(Json(orders))
}
