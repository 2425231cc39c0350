//! Message handlers
//!
//! The feed read plus the three gated mutations. Scope ids travel as query
//! parameters, the message id as a path parameter, content in the body.

use axum::{
    extract::{Path, State},
    Json,
};
use concord_service::{
    CreateMessageRequest, FeedResponse, MessageResponse, MessageService, UpdateMessageRequest,
};

use crate::extractors::{ChannelIdQuery, CurrentProfile, FeedCursor, ServerIdQuery, ValidatedJson};
use crate::handlers::parse_id;
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Read one feed page
///
/// GET /messages?server_id=&channel_id=&cursor=
pub async fn list_messages(
    State(state): State<AppState>,
    CurrentProfile(profile): CurrentProfile,
    ServerIdQuery(server_id): ServerIdQuery,
    ChannelIdQuery(channel_id): ChannelIdQuery,
    FeedCursor(cursor): FeedCursor,
) -> ApiResult<Json<FeedResponse<MessageResponse>>> {
    let service = MessageService::new(state.service_context());
    let response = service
        .list_messages(server_id, channel_id, profile.id, cursor)
        .await?;
    Ok(Json(response))
}

/// Create message
///
/// POST /messages?server_id=&channel_id=
pub async fn create_message(
    State(state): State<AppState>,
    CurrentProfile(profile): CurrentProfile,
    ServerIdQuery(server_id): ServerIdQuery,
    ChannelIdQuery(channel_id): ChannelIdQuery,
    ValidatedJson(request): ValidatedJson<CreateMessageRequest>,
) -> ApiResult<Created<Json<MessageResponse>>> {
    let service = MessageService::new(state.service_context());
    let response = service
        .create_message(server_id, channel_id, profile.id, request)
        .await?;
    Ok(Created(Json(response)))
}

/// Edit message (author only)
///
/// PATCH /messages/{message_id}?server_id=&channel_id=
pub async fn update_message(
    State(state): State<AppState>,
    CurrentProfile(profile): CurrentProfile,
    ServerIdQuery(server_id): ServerIdQuery,
    ChannelIdQuery(channel_id): ChannelIdQuery,
    Path(message_id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateMessageRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let message_id = parse_id(&message_id, "message_id")?;

    let service = MessageService::new(state.service_context());
    let response = service
        .update_message(server_id, channel_id, message_id, profile.id, request)
        .await?;
    Ok(Json(response))
}

/// Soft-delete message (author, admin, or moderator)
///
/// DELETE /messages/{message_id}?server_id=&channel_id=
pub async fn delete_message(
    State(state): State<AppState>,
    CurrentProfile(profile): CurrentProfile,
    ServerIdQuery(server_id): ServerIdQuery,
    ChannelIdQuery(channel_id): ChannelIdQuery,
    Path(message_id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let message_id = parse_id(&message_id, "message_id")?;

    let service = MessageService::new(state.service_context());
    let response = service
        .delete_message(server_id, channel_id, message_id, profile.id)
        .await?;
    Ok(Json(response))
}
