//! Session token issuance.

use axum::{Json, extract::State};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Response carrying a freshly signed token.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Issue a session token for the submitted claims.
///
/// POST /jwt
///
/// The body is signed as-is (the frontend sends the logged-in user's email
/// and profile); no validation happens here.
///
/// # Errors
///
/// Returns a 500 if the claims cannot be signed.
pub async fn issue(
    State(state): State<AppState>,
    Json(claims): Json<Map<String, Value>>,
) -> Result<Json<TokenResponse>> {
    let token = state
        .tokens()
        .issue(&claims)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(Json(TokenResponse { token }))
}
