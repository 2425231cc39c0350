//! Channel handlers
//!
//! The enclosing server arrives as `?server_id=`, mirroring the mutation
//! protocol's scoping contract.

use axum::{
    extract::{Path, State},
    Json,
};
use concord_service::{ChannelResponse, ChannelService, CreateChannelRequest, UpdateChannelRequest};

use crate::extractors::{CurrentProfile, ServerIdQuery, ValidatedJson};
use crate::handlers::parse_id;
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Create channel
///
/// POST /channels?server_id=
pub async fn create_channel(
    State(state): State<AppState>,
    CurrentProfile(profile): CurrentProfile,
    ServerIdQuery(server_id): ServerIdQuery,
    ValidatedJson(request): ValidatedJson<CreateChannelRequest>,
) -> ApiResult<Created<Json<ChannelResponse>>> {
    let service = ChannelService::new(state.service_context());
    let response = service.create_channel(server_id, profile.id, request).await?;
    Ok(Created(Json(response)))
}

/// Rename/retype channel
///
/// PATCH /channels/{channel_id}?server_id=
pub async fn update_channel(
    State(state): State<AppState>,
    CurrentProfile(profile): CurrentProfile,
    ServerIdQuery(server_id): ServerIdQuery,
    Path(channel_id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateChannelRequest>,
) -> ApiResult<Json<ChannelResponse>> {
    let channel_id = parse_id(&channel_id, "channel_id")?;

    let service = ChannelService::new(state.service_context());
    let response = service
        .update_channel(server_id, channel_id, profile.id, request)
        .await?;
    Ok(Json(response))
}

/// Delete channel
///
/// DELETE /channels/{channel_id}?server_id=
pub async fn delete_channel(
    State(state): State<AppState>,
    CurrentProfile(profile): CurrentProfile,
    ServerIdQuery(server_id): ServerIdQuery,
    Path(channel_id): Path<String>,
) -> ApiResult<NoContent> {
    let channel_id = parse_id(&channel_id, "channel_id")?;

    let service = ChannelService::new(state.service_context());
    service
        .delete_channel(server_id, channel_id, profile.id)
        .await?;
    Ok(NoContent)
}
