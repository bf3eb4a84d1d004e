//! Shipping location routes.
//!
//! Locations are the one place the API validates a field: both the upsert
//! and the listing require an email, answered with a 400 naming the field
//! when it is missing.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::db::{self, LocationRepository};
use crate::error::{AppError, Result};
use crate::models::{DeleteResponse, Location, LocationFields, NewLocation, UpdateResponse};
use crate::state::AppState;

/// Query string selecting whose locations to list.
#[derive(Debug, Deserialize)]
pub struct OwnerQuery {
    pub email: Option<String>,
}

/// Create or replace the location stored for an email.
///
/// POST /location
///
/// One atomic upsert keyed on `email`: an existing document keeps its id and
/// gets its fields replaced, an absent one is inserted.
///
/// # Errors
///
/// Returns a 400 if the payload has no email, or a 500 on storage failure.
pub async fn upsert(
    State(state): State<AppState>,
    Json(location): Json<NewLocation>,
) -> Result<Json<UpdateResponse>> {
    let Some(email) = location.email else {
        return Err(AppError::BadRequest("Email".to_string()));
    };

    let result = LocationRepository::new(state.database())
        .upsert_by_email(&email, &location.fields)
        .await?;
    Ok(Json(result.into()))
}

/// List the locations stored for an email.
///
/// GET /location?email=buyer@example.com
///
/// # Errors
///
/// Returns a 400 if the email query parameter is missing, or a 500 on
/// storage failure.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<OwnerQuery>,
) -> Result<Json<Vec<Location>>> {
    let Some(email) = query.email else {
        return Err(AppError::BadRequest("Email".to_string()));
    };

    let locations = LocationRepository::new(state.database())
        .list_by_email(&email)
        .await?;
    Ok(Json(locations))
}

/// Fetch one location; an unknown id answers with a null body.
///
/// GET /location/:id
///
/// # Errors
///
/// Returns a 500 on storage failure or a malformed id.
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Option<Location>>> {
    let id = db::parse_object_id(&id)?;
    let location = LocationRepository::new(state.database()).get(id).await?;
    Ok(Json(location))
}

/// Replace the shipping fields of a location by id.
///
/// PUT /location/:id
///
/// # Errors
///
/// Returns a 500 on storage failure or a malformed id.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(fields): Json<LocationFields>,
) -> Result<Json<UpdateResponse>> {
    let id = db::parse_object_id(&id)?;
    let result = LocationRepository::new(state.database())
        .update(id, &fields)
        .await?;
    Ok(Json(result.into()))
}

/// Delete a location by id.
///
/// DELETE /location/:id
///
/// # Errors
///
/// Returns a 500 on storage failure or a malformed id.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>> {
    let id = db::parse_object_id(&id)?;
    let result = LocationRepository::new(state.database()).delete(id).await?;
    Ok(Json(result.into()))
}
