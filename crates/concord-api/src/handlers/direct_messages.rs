//! Direct message handlers
//!
//! Conversation-scoped mirror of the message handlers.

use axum::{
    extract::{Path, State},
    Json,
};
use concord_service::{
    CreateMessageRequest, DirectMessageResponse, DirectMessageService, FeedResponse,
    UpdateMessageRequest,
};

use crate::extractors::{ConversationIdQuery, CurrentProfile, FeedCursor, ValidatedJson};
use crate::handlers::parse_id;
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Read one feed page
///
/// GET /direct-messages?conversation_id=&cursor=
pub async fn list_direct_messages(
    State(state): State<AppState>,
    CurrentProfile(profile): CurrentProfile,
    ConversationIdQuery(conversation_id): ConversationIdQuery,
    FeedCursor(cursor): FeedCursor,
) -> ApiResult<Json<FeedResponse<DirectMessageResponse>>> {
    let service = DirectMessageService::new(state.service_context());
    let response = service
        .list_messages(conversation_id, profile.id, cursor)
        .await?;
    Ok(Json(response))
}

/// Create direct message
///
/// POST /direct-messages?conversation_id=
pub async fn create_direct_message(
    State(state): State<AppState>,
    CurrentProfile(profile): CurrentProfile,
    ConversationIdQuery(conversation_id): ConversationIdQuery,
    ValidatedJson(request): ValidatedJson<CreateMessageRequest>,
) -> ApiResult<Created<Json<DirectMessageResponse>>> {
    let service = DirectMessageService::new(state.service_context());
    let response = service
        .create_message(conversation_id, profile.id, request)
        .await?;
    Ok(Created(Json(response)))
}

/// Edit direct message (author only)
///
/// PATCH /direct-messages/{message_id}?conversation_id=
pub async fn update_direct_message(
    State(state): State<AppState>,
    CurrentProfile(profile): CurrentProfile,
    ConversationIdQuery(conversation_id): ConversationIdQuery,
    Path(message_id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateMessageRequest>,
) -> ApiResult<Json<DirectMessageResponse>> {
    let message_id = parse_id(&message_id, "direct_message_id")?;

    let service = DirectMessageService::new(state.service_context());
    let response = service
        .update_message(conversation_id, message_id, profile.id, request)
        .await?;
    Ok(Json(response))
}

/// Soft-delete direct message (author, admin, or moderator)
///
/// DELETE /direct-messages/{message_id}?conversation_id=
pub async fn delete_direct_message(
    State(state): State<AppState>,
    CurrentProfile(profile): CurrentProfile,
    ConversationIdQuery(conversation_id): ConversationIdQuery,
    Path(message_id): Path<String>,
) -> ApiResult<Json<DirectMessageResponse>> {
    let message_id = parse_id(&message_id, "direct_message_id")?;

    let service = DirectMessageService::new(state.service_context());
    let response = service
        .delete_message(conversation_id, message_id, profile.id)
        .await?;
    Ok(Json(response))
}
