//! Conversation handlers

use axum::{extract::State, Json};
use concord_service::{ConversationResponse, ConversationService, OpenConversationRequest};

use crate::extractors::{CurrentProfile, ServerIdQuery, ValidatedJson};
use crate::handlers::parse_id;
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Open (get or create) the conversation with another member
///
/// POST /conversations?server_id=
pub async fn open_conversation(
    State(state): State<AppState>,
    CurrentProfile(profile): CurrentProfile,
    ServerIdQuery(server_id): ServerIdQuery,
    ValidatedJson(request): ValidatedJson<OpenConversationRequest>,
) -> ApiResult<Created<Json<ConversationResponse>>> {
    let member_id = parse_id(&request.member_id, "member_id")?;

    let service = ConversationService::new(state.service_context());
    let response = service
        .open_conversation(server_id, profile.id, member_id)
        .await?;
    Ok(Created(Json(response)))
}
