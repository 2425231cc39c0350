//! Server handlers

use axum::{
    extract::{Path, State},
    Json,
};
use concord_service::{
    CreateServerRequest, ServerDetailResponse, ServerResponse, ServerService, UpdateServerRequest,
};

use crate::extractors::{CurrentProfile, ValidatedJson};
use crate::handlers::parse_id;
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Create server
///
/// POST /servers
pub async fn create_server(
    State(state): State<AppState>,
    CurrentProfile(profile): CurrentProfile,
    ValidatedJson(request): ValidatedJson<CreateServerRequest>,
) -> ApiResult<Created<Json<ServerDetailResponse>>> {
    let service = ServerService::new(state.service_context());
    let response = service.create_server(profile.id, request).await?;
    Ok(Created(Json(response)))
}

/// List the caller's servers
///
/// GET /servers
pub async fn list_servers(
    State(state): State<AppState>,
    CurrentProfile(profile): CurrentProfile,
) -> ApiResult<Json<Vec<ServerResponse>>> {
    let service = ServerService::new(state.service_context());
    let response = service.list_servers(profile.id).await?;
    Ok(Json(response))
}

/// Get one server with channels and members
///
/// GET /servers/{server_id}
pub async fn get_server(
    State(state): State<AppState>,
    CurrentProfile(profile): CurrentProfile,
    Path(server_id): Path<String>,
) -> ApiResult<Json<ServerDetailResponse>> {
    let server_id = parse_id(&server_id, "server_id")?;

    let service = ServerService::new(state.service_context());
    let response = service.get_server(server_id, profile.id).await?;
    Ok(Json(response))
}

/// Update server (owner only)
///
/// PATCH /servers/{server_id}
pub async fn update_server(
    State(state): State<AppState>,
    CurrentProfile(profile): CurrentProfile,
    Path(server_id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateServerRequest>,
) -> ApiResult<Json<ServerResponse>> {
    let server_id = parse_id(&server_id, "server_id")?;

    let service = ServerService::new(state.service_context());
    let response = service.update_server(server_id, profile.id, request).await?;
    Ok(Json(response))
}

/// Delete server (owner only)
///
/// DELETE /servers/{server_id}
pub async fn delete_server(
    State(state): State<AppState>,
    CurrentProfile(profile): CurrentProfile,
    Path(server_id): Path<String>,
) -> ApiResult<NoContent> {
    let server_id = parse_id(&server_id, "server_id")?;

    let service = ServerService::new(state.service_context());
    service.delete_server(server_id, profile.id).await?;
    Ok(NoContent)
}

/// Regenerate invite code (owner only)
///
/// PATCH /servers/{server_id}/invite-code
pub async fn regenerate_invite_code(
    State(state): State<AppState>,
    CurrentProfile(profile): CurrentProfile,
    Path(server_id): Path<String>,
) -> ApiResult<Json<ServerResponse>> {
    let server_id = parse_id(&server_id, "server_id")?;

    let service = ServerService::new(state.service_context());
    let response = service.regenerate_invite_code(server_id, profile.id).await?;
    Ok(Json(response))
}

/// Join a server by invite code
///
/// POST /servers/join/{invite_code}
pub async fn join_server(
    State(state): State<AppState>,
    CurrentProfile(profile): CurrentProfile,
    Path(invite_code): Path<String>,
) -> ApiResult<Created<Json<ServerDetailResponse>>> {
    let service = ServerService::new(state.service_context());
    let response = service.join_by_invite(&invite_code, profile.id).await?;
    Ok(Created(Json(response)))
}

/// Leave a server
///
/// DELETE /servers/{server_id}/leave
pub async fn leave_server(
    State(state): State<AppState>,
    CurrentProfile(profile): CurrentProfile,
    Path(server_id): Path<String>,
) -> ApiResult<NoContent> {
    let server_id = parse_id(&server_id, "server_id")?;

    let service = ServerService::new(state.service_context());
    service.leave_server(server_id, profile.id).await?;
    Ok(NoContent)
}
