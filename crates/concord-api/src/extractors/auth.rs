//! Authentication extractors
//!
//! Verifies the session provider's bearer token and resolves it to a
//! Profile. Identity resolution runs before anything else a handler does;
//! requests without a resolvable identity fail 401 no matter what else is
//! wrong with them.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use concord_common::SessionClaims;
use concord_core::entities::Profile;
use concord_service::services::ProfileService;

use crate::response::ApiError;
use crate::state::AppState;

/// Verified session claims, without requiring a Profile row yet.
///
/// Used by the profile setup endpoint, which runs before the profile exists.
#[derive(Debug, Clone)]
pub struct VerifiedSession(pub SessionClaims);

#[async_trait]
impl<S> FromRequestParts<S> for VerifiedSession
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::MissingAuth)?;

        let app_state = AppState::from_ref(state);

        let claims = app_state
            .session_service()
            .verify(bearer.token())
            .map_err(|e| {
                tracing::warn!(error = %e, "Invalid session token");
                ApiError::InvalidSession
            })?;

        Ok(VerifiedSession(claims))
    }
}

/// The authenticated caller's Profile
///
/// The Rust rendition of the source's `currentProfile()`: token verified,
/// then the matching Profile row loaded. A valid token without a profile
/// row is still unauthenticated; the client must run profile setup first.
#[derive(Debug, Clone)]
pub struct CurrentProfile(pub Profile);

#[async_trait]
impl<S> FromRequestParts<S> for CurrentProfile
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let VerifiedSession(claims) = VerifiedSession::from_request_parts(parts, state).await?;

        let app_state = AppState::from_ref(state);
        let profile = ProfileService::new(app_state.service_context())
            .current(&claims)
            .await?
            .ok_or(ApiError::MissingAuth)?;

        Ok(CurrentProfile(profile))
    }
}
