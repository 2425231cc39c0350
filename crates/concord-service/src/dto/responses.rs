//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Snowflake IDs are serialized as strings for JavaScript compatibility.

use chrono::{DateTime, Utc};
use serde::Serialize;

use concord_core::entities::{Channel, Conversation, Profile, Server};
use concord_core::traits::{DirectMessageWithAuthor, MemberWithProfile, MessageWithAuthor};
use concord_core::Snowflake;

// ============================================================================
// Profile Responses
// ============================================================================

/// Profile response
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&Profile> for ProfileResponse {
    fn from(profile: &Profile) -> Self {
        Self {
            id: profile.id.to_string(),
            name: profile.name.clone(),
            avatar_url: profile.avatar_url.clone(),
            created_at: profile.created_at,
        }
    }
}

// ============================================================================
// Member Responses
// ============================================================================

/// Member response with its profile
#[derive(Debug, Clone, Serialize)]
pub struct MemberResponse {
    pub id: String,
    pub server_id: String,
    pub role: &'static str,
    pub joined_at: DateTime<Utc>,
    pub profile: ProfileResponse,
}

impl From<&MemberWithProfile> for MemberResponse {
    fn from(value: &MemberWithProfile) -> Self {
        Self {
            id: value.member.id.to_string(),
            server_id: value.member.server_id.to_string(),
            role: value.member.role.label(),
            joined_at: value.member.joined_at,
            profile: ProfileResponse::from(&value.profile),
        }
    }
}

// ============================================================================
// Server Responses
// ============================================================================

/// Server response (summary)
#[derive(Debug, Clone, Serialize)]
pub struct ServerResponse {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub owner_id: String,
    pub invite_code: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Server> for ServerResponse {
    fn from(server: &Server) -> Self {
        Self {
            id: server.id.to_string(),
            name: server.name.clone(),
            image_url: server.image_url.clone(),
            owner_id: server.owner_id.to_string(),
            invite_code: server.invite_code.clone(),
            created_at: server.created_at,
            updated_at: server.updated_at,
        }
    }
}

/// Server response with its channels and members (role-ordered)
#[derive(Debug, Clone, Serialize)]
pub struct ServerDetailResponse {
    #[serde(flatten)]
    pub server: ServerResponse,
    pub channels: Vec<ChannelResponse>,
    pub members: Vec<MemberResponse>,
}

impl ServerDetailResponse {
    pub fn new(server: &Server, channels: &[Channel], members: &[MemberWithProfile]) -> Self {
        Self {
            server: ServerResponse::from(server),
            channels: channels.iter().map(ChannelResponse::from).collect(),
            members: members.iter().map(MemberResponse::from).collect(),
        }
    }
}

// ============================================================================
// Channel Responses
// ============================================================================

/// Channel response
#[derive(Debug, Clone, Serialize)]
pub struct ChannelResponse {
    pub id: String,
    pub server_id: String,
    pub name: String,
    pub kind: &'static str,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Channel> for ChannelResponse {
    fn from(channel: &Channel) -> Self {
        Self {
            id: channel.id.to_string(),
            server_id: channel.server_id.to_string(),
            name: channel.name.clone(),
            kind: channel.kind.label(),
            created_at: channel.created_at,
            updated_at: channel.updated_at,
        }
    }
}

// ============================================================================
// Message Responses
// ============================================================================

/// Channel message with its full author graph
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub id: String,
    pub channel_id: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
    pub deleted: bool,
    pub member: MemberResponse,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&MessageWithAuthor> for MessageResponse {
    fn from(value: &MessageWithAuthor) -> Self {
        Self {
            id: value.message.id.to_string(),
            channel_id: value.message.channel_id.to_string(),
            content: value.message.content.clone(),
            file_url: value.message.file_url.clone(),
            deleted: value.message.deleted,
            member: MemberResponse::from(&value.author),
            created_at: value.message.created_at,
            updated_at: value.message.updated_at,
        }
    }
}

/// Direct message with its full author graph
#[derive(Debug, Clone, Serialize)]
pub struct DirectMessageResponse {
    pub id: String,
    pub conversation_id: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
    pub deleted: bool,
    pub member: MemberResponse,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&DirectMessageWithAuthor> for DirectMessageResponse {
    fn from(value: &DirectMessageWithAuthor) -> Self {
        Self {
            id: value.message.id.to_string(),
            conversation_id: value.message.conversation_id.to_string(),
            content: value.message.content.clone(),
            file_url: value.message.file_url.clone(),
            deleted: value.message.deleted,
            member: MemberResponse::from(&value.author),
            created_at: value.message.created_at,
            updated_at: value.message.updated_at,
        }
    }
}

// ============================================================================
// Conversation Responses
// ============================================================================

/// Conversation response with both participants
#[derive(Debug, Clone, Serialize)]
pub struct ConversationResponse {
    pub id: String,
    pub member_one: MemberResponse,
    pub member_two: MemberResponse,
    pub created_at: DateTime<Utc>,
}

impl ConversationResponse {
    pub fn new(
        conversation: &Conversation,
        member_one: &MemberWithProfile,
        member_two: &MemberWithProfile,
    ) -> Self {
        Self {
            id: conversation.id.to_string(),
            member_one: MemberResponse::from(member_one),
            member_two: MemberResponse::from(member_two),
            created_at: conversation.created_at,
        }
    }
}

// ============================================================================
// Feed Responses
// ============================================================================

/// One page of a reverse-chronological feed
#[derive(Debug, Clone, Serialize)]
pub struct FeedResponse<T> {
    pub items: Vec<T>,
    /// Id of the last item iff the page is full; absent means no more pages
    /// (a full final page costs one extra empty fetch, by design)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
}

impl<T> FeedResponse<T> {
    pub fn new(items: Vec<T>, next_cursor: Option<Snowflake>) -> Self {
        Self {
            items,
            next_cursor: next_cursor.map(|c| c.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_response_serializes_cursor_as_string() {
        let response = FeedResponse::new(vec![1, 2, 3], Some(Snowflake::new(42)));
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["next_cursor"], "42");
    }

    #[test]
    fn test_feed_response_omits_absent_cursor() {
        let response: FeedResponse<i32> = FeedResponse::new(vec![], None);
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("next_cursor").is_none());
    }
}
