//! User account routes.

use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use camera_shop_core::Role;
use mongodb::results::InsertOneResult;
use serde::Serialize;

use crate::db::{self, RepositoryError, UserRepository};
use crate::error::{AppError, Result};
use crate::middleware::{AuthClaims, RequireAdmin, RoleLookup};
use crate::models::{DeleteResponse, ExistingUserResponse, InsertResponse, NewUser, UpdateResponse, User};
use crate::state::AppState;

/// Boolean admin flag for the frontend's role check.
#[derive(Debug, Serialize)]
pub struct AdminFlag {
    pub admin: bool,
}

/// Boolean seller flag for the frontend's role check.
#[derive(Debug, Serialize)]
pub struct SellerFlag {
    pub seller: bool,
}

/// Create an account.
///
/// POST /users
///
/// An email that already has an account is a no-op answered with the
/// existing-user marker (null `insertedId`); the unique index on `email`
/// makes this race-free.
///
/// # Errors
///
/// Returns a 500 on storage failure.
pub async fn create(
    State(state): State<AppState>,
    Json(user): Json<NewUser>,
) -> Result<Response> {
    let users = UserRepository::new(state.database());
    signup_response(users.create(&user).await)
}

/// Map the insert outcome to the wire response.
///
/// A duplicate-key rejection from the unique email index becomes the
/// existing-user marker; every other storage error propagates.
fn signup_response(
    result: std::result::Result<InsertOneResult, RepositoryError>,
) -> Result<Response> {
    match result {
        Ok(result) => Ok(Json(InsertResponse::from(result)).into_response()),
        Err(RepositoryError::Duplicate(_)) => {
            Ok(Json(ExistingUserResponse::new()).into_response())
        }
        Err(err) => Err(err.into()),
    }
}

/// List every account.
///
/// GET /users (admin only)
///
/// # Errors
///
/// Returns 401/403 from the gates, or a 500 on storage failure.
pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_claims): RequireAdmin,
) -> Result<Json<Vec<User>>> {
    let users = UserRepository::new(state.database()).list_all().await?;
    Ok(Json(users))
}

/// Report whether an email belongs to an admin.
///
/// GET /users/admin/:email (authenticated; callers may only ask about
/// themselves)
///
/// # Errors
///
/// Returns 403 if the path email differs from the token's email, whatever
/// the caller's actual role.
pub async fn check_admin(
    State(state): State<AppState>,
    Path(email): Path<String>,
    AuthClaims(claims): AuthClaims,
) -> Result<Json<AdminFlag>> {
    if email != claims.email.as_str() {
        return Err(AppError::Forbidden);
    }

    let role = UserRepository::new(state.database())
        .resolve(&claims.email)
        .await?;

    Ok(Json(AdminFlag {
        admin: role == Some(Role::Admin),
    }))
}

/// Report whether an email belongs to a seller.
///
/// GET /users/seller/:email (authenticated, self-only)
///
/// # Errors
///
/// Returns 403 if the path email differs from the token's email.
pub async fn check_seller(
    State(state): State<AppState>,
    Path(email): Path<String>,
    AuthClaims(claims): AuthClaims,
) -> Result<Json<SellerFlag>> {
    if email != claims.email.as_str() {
        return Err(AppError::Forbidden);
    }

    let role = UserRepository::new(state.database())
        .resolve(&claims.email)
        .await?;

    Ok(Json(SellerFlag {
        seller: role == Some(Role::Seller),
    }))
}

/// Promote an account to admin.
///
/// PATCH /users/admin/:id (admin only)
///
/// # Errors
///
/// Returns 401/403 from the gates, or a 500 on storage failure.
pub async fn promote_admin(
    State(state): State<AppState>,
    RequireAdmin(_claims): RequireAdmin,
    Path(id): Path<String>,
) -> Result<Json<UpdateResponse>> {
    let id = db::parse_object_id(&id)?;
    let result = UserRepository::new(state.database())
        .set_role(id, Role::Admin)
        .await?;
    Ok(Json(result.into()))
}

/// Promote an account to seller.
///
/// PATCH /users/seller/:id (admin only)
///
/// # Errors
///
/// Returns 401/403 from the gates, or a 500 on storage failure.
pub async fn promote_seller(
    State(state): State<AppState>,
    RequireAdmin(_claims): RequireAdmin,
    Path(id): Path<String>,
) -> Result<Json<UpdateResponse>> {
    let id = db::parse_object_id(&id)?;
    let result = UserRepository::new(state.database())
        .set_role(id, Role::Seller)
        .await?;
    Ok(Json(result.into()))
}

/// Delete an account by id.
///
/// DELETE /users/:id
///
/// No gate here: the deployed frontend calls this unauthenticated. Known
/// authorization gap.
///
/// # Errors
///
/// Returns a 500 on storage failure or a malformed id.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>> {
    let id = db::parse_object_id(&id)?;
    let result = UserRepository::new(state.database()).delete(id).await?;
    Ok(Json(result.into()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    use std::net::{IpAddr, Ipv4Addr};

    use axum::body::to_bytes;
    use axum::http::StatusCode;
    use camera_shop_core::Email;
    use mongodb::bson::oid::ObjectId;
    use secrecy::SecretString;
    use serde_json::{Map, Value, json};

    use crate::config::ApiConfig;
    use crate::services::Claims;

    // The driver connects lazily, so handlers that reject before touching
    // storage can be called against this state without a running server.
    async fn state() -> AppState {
        let config = ApiConfig {
            mongodb_uri: SecretString::from("mongodb://localhost:27017"),
            database_name: "camera-shop-test".to_string(),
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 5000,
            access_token_secret: SecretString::from("kY8#mN2$pQ5&vX9!bR4@wT7*zL0^cF3j"),
            allowed_origins: Vec::new(),
            sentry_dsn: None,
        };
        let client = mongodb::Client::with_uri_str("mongodb://localhost:27017")
            .await
            .unwrap();
        let database = client.database(&config.database_name);
        AppState::new(config, database)
    }

    fn claims_for(email: &str) -> Claims {
        Claims {
            email: Email::parse(email).unwrap(),
            exp: 0,
            extra: Map::new(),
        }
    }

    #[tokio::test]
    async fn test_check_admin_rejects_mismatched_email() {
        let result = check_admin(
            State(state().await),
            Path("other@example.com".to_string()),
            AuthClaims(claims_for("caller@example.com")),
        )
        .await;

        assert!(matches!(result, Err(AppError::Forbidden)));
    }

    #[tokio::test]
    async fn test_check_seller_rejects_mismatched_email() {
        let result = check_seller(
            State(state().await),
            Path("other@example.com".to_string()),
            AuthClaims(claims_for("caller@example.com")),
        )
        .await;

        assert!(matches!(result, Err(AppError::Forbidden)));
    }

    #[tokio::test]
    async fn test_duplicate_email_answers_with_existing_user_marker() {
        let response = signup_response(Err(RepositoryError::Duplicate("email"))).unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            body,
            json!({ "message": "User already exists", "insertedId": null })
        );
    }

    #[test]
    fn test_other_storage_errors_still_propagate() {
        let err = RepositoryError::InvalidId(ObjectId::parse_str("not-a-hex-id").unwrap_err());
        assert!(signup_response(Err(err)).is_err());
    }
}
