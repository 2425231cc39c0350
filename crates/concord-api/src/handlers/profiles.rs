//! Profile handlers
//!
//! First-sign-in setup and current-profile lookup.

use axum::{extract::State, Json};
use concord_service::{ProfileResponse, ProfileService};

use crate::extractors::{CurrentProfile, VerifiedSession};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Get the caller's profile
///
/// GET /profiles/@me
pub async fn get_current_profile(profile: CurrentProfile) -> Json<ProfileResponse> {
    Json(ProfileResponse::from(&profile.0))
}

/// Idempotent first-sign-in setup
///
/// POST /profiles/@me
pub async fn setup_profile(
    State(state): State<AppState>,
    VerifiedSession(claims): VerifiedSession,
) -> ApiResult<Created<Json<ProfileResponse>>> {
    let service = ProfileService::new(state.service_context());
    let response = service.setup(&claims).await?;
    Ok(Created(Json(response)))
}
