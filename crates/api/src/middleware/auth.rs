//! Authentication and role extractors.
//!
//! Route handlers opt into access control by taking one of these extractors
//! as an argument. `AuthClaims` only verifies the bearer token;
//! `RequireAdmin`/`RequireSeller` additionally resolve the caller's stored
//! role with one database read.

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};

use camera_shop_core::{Email, Role};

use crate::db::{RepositoryError, UserRepository};
use crate::error::AppError;
use crate::services::Claims;
use crate::state::AppState;

/// Extractor that requires a valid bearer token.
///
/// Missing, malformed, expired, or tampered tokens reject with 401.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(AuthClaims(claims): AuthClaims) -> impl IntoResponse {
///     format!("Hello, {}!", claims.email)
/// }
/// ```
pub struct AuthClaims(pub Claims);

impl FromRequestParts<AppState> for AuthClaims {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(AppError::Unauthorized)?;

        let token = bearer_token(header).ok_or(AppError::Unauthorized)?;
        let claims = state.tokens().verify(token)?;

        Ok(Self(claims))
    }
}

/// Capability for resolving an email to its stored role.
///
/// Implemented by [`UserRepository`]; tests substitute a stub so the gate
/// logic can be exercised without storage.
pub trait RoleLookup {
    /// Resolve the role stored for this email, if any.
    fn resolve(
        &self,
        email: &Email,
    ) -> impl Future<Output = Result<Option<Role>, RepositoryError>> + Send;
}

/// Reject with 403 unless the looked-up role matches the required one.
///
/// # Errors
///
/// Returns `AppError::Forbidden` on a role mismatch (including no role at
/// all), or the lookup's storage error.
pub async fn authorize_role<L: RoleLookup>(
    lookup: &L,
    email: &Email,
    required: Role,
) -> Result<(), AppError> {
    match lookup.resolve(email).await? {
        Some(role) if role == required => Ok(()),
        _ => Err(AppError::Forbidden),
    }
}

/// Extractor that requires a valid token for an admin account.
///
/// Runs the token gate, then looks the caller up in the `users` collection;
/// anything but `role == "admin"` rejects with 403.
pub struct RequireAdmin(pub Claims);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let AuthClaims(claims) = AuthClaims::from_request_parts(parts, state).await?;

        let users = UserRepository::new(state.database());
        authorize_role(&users, &claims.email, Role::Admin).await?;

        Ok(Self(claims))
    }
}

/// Extractor that requires a valid token for a seller account.
pub struct RequireSeller(pub Claims);

impl FromRequestParts<AppState> for RequireSeller {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let AuthClaims(claims) = AuthClaims::from_request_parts(parts, state).await?;

        let users = UserRepository::new(state.database());
        authorize_role(&users, &claims.email, Role::Seller).await?;

        Ok(Self(claims))
    }
}

/// Pull the token out of an `Authorization: Bearer <token>` header value.
fn bearer_token(header: &str) -> Option<&str> {
    header.strip_prefix("Bearer ").filter(|t| !t.is_empty())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    struct StubLookup(Option<Role>);

    impl RoleLookup for StubLookup {
        async fn resolve(&self, _email: &Email) -> Result<Option<Role>, RepositoryError> {
            Ok(self.0)
        }
    }

    fn email() -> Email {
        Email::parse("caller@example.com").unwrap()
    }

    #[test]
    fn test_bearer_token_extraction() {
        assert_eq!(bearer_token("Bearer abc.def.ghi"), Some("abc.def.ghi"));
        assert_eq!(bearer_token("Bearer "), None);
        assert_eq!(bearer_token("Basic abc"), None);
        assert_eq!(bearer_token("abc.def.ghi"), None);
    }

    #[tokio::test]
    async fn test_authorize_role_matching() {
        let lookup = StubLookup(Some(Role::Admin));
        assert!(authorize_role(&lookup, &email(), Role::Admin).await.is_ok());
    }

    #[tokio::test]
    async fn test_authorize_role_mismatch_is_forbidden() {
        let lookup = StubLookup(Some(Role::Seller));
        let result = authorize_role(&lookup, &email(), Role::Admin).await;
        assert!(matches!(result, Err(AppError::Forbidden)));
    }

    #[tokio::test]
    async fn test_authorize_role_plain_user_is_forbidden() {
        let lookup = StubLookup(None);
        let result = authorize_role(&lookup, &email(), Role::Seller).await;
        assert!(matches!(result, Err(AppError::Forbidden)));
    }
}
