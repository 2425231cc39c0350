//! Member handlers
//!
//! Role changes and removals, both owner-only. Responses carry the updated
//! server graph so clients can refresh their member list in one step.

use axum::{
    extract::{Path, State},
    Json,
};
use concord_service::{MemberService, ServerDetailResponse, UpdateMemberRoleRequest};

use crate::extractors::{CurrentProfile, ServerIdQuery, ValidatedJson};
use crate::handlers::parse_id;
use crate::response::ApiResult;
use crate::state::AppState;

/// Change a member's role
///
/// PATCH /members/{member_id}?server_id=
pub async fn update_member_role(
    State(state): State<AppState>,
    CurrentProfile(profile): CurrentProfile,
    ServerIdQuery(server_id): ServerIdQuery,
    Path(member_id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateMemberRoleRequest>,
) -> ApiResult<Json<ServerDetailResponse>> {
    let member_id = parse_id(&member_id, "member_id")?;

    let service = MemberService::new(state.service_context());
    let response = service
        .update_role(server_id, member_id, profile.id, request.role)
        .await?;
    Ok(Json(response))
}

/// Remove a member from the server
///
/// DELETE /members/{member_id}?server_id=
pub async fn remove_member(
    State(state): State<AppState>,
    CurrentProfile(profile): CurrentProfile,
    ServerIdQuery(server_id): ServerIdQuery,
    Path(member_id): Path<String>,
) -> ApiResult<Json<ServerDetailResponse>> {
    let member_id = parse_id(&member_id, "member_id")?;

    let service = MemberService::new(state.service_context());
    let response = service.remove_member(server_id, member_id, profile.id).await?;
    Ok(Json(response))
}
