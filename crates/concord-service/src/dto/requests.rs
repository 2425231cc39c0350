//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use concord_core::entities::{ChannelKind, Role};
use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Server Requests
// ============================================================================

/// Create server request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateServerRequest {
    #[validate(length(min = 1, max = 100, message = "Server name must be 1-100 characters"))]
    pub name: String,

    /// Image URL
    #[validate(url(message = "Invalid image URL"))]
    pub image_url: Option<String>,
}

/// Update server request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateServerRequest {
    #[validate(length(min = 1, max = 100, message = "Server name must be 1-100 characters"))]
    pub name: Option<String>,

    #[validate(url(message = "Invalid image URL"))]
    pub image_url: Option<String>,
}

// ============================================================================
// Channel Requests
// ============================================================================

/// Create channel request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateChannelRequest {
    #[validate(length(min = 1, max = 100, message = "Channel name must be 1-100 characters"))]
    pub name: String,

    #[serde(default)]
    pub kind: ChannelKind,
}

/// Update channel request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateChannelRequest {
    #[validate(length(min = 1, max = 100, message = "Channel name must be 1-100 characters"))]
    pub name: String,

    #[serde(default)]
    pub kind: ChannelKind,
}

// ============================================================================
// Member Requests
// ============================================================================

/// Change a member's role
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateMemberRoleRequest {
    pub role: Role,
}

// ============================================================================
// Message Requests
// ============================================================================

/// Create message / direct message request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMessageRequest {
    #[validate(length(min = 1, max = 2000, message = "Content must be 1-2000 characters"))]
    pub content: String,

    #[validate(url(message = "Invalid file URL"))]
    pub file_url: Option<String>,
}

/// Edit message / direct message request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateMessageRequest {
    #[validate(length(min = 1, max = 2000, message = "Content must be 1-2000 characters"))]
    pub content: String,
}

// ============================================================================
// Conversation Requests
// ============================================================================

/// Open (get or create) a conversation with another member
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct OpenConversationRequest {
    /// Target member id within the same server
    pub member_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_message_content_length_limits() {
        let ok = CreateMessageRequest {
            content: "hello".to_string(),
            file_url: None,
        };
        assert!(ok.validate().is_ok());

        let empty = CreateMessageRequest {
            content: String::new(),
            file_url: None,
        };
        assert!(empty.validate().is_err());

        let too_long = CreateMessageRequest {
            content: "x".repeat(2001),
            file_url: None,
        };
        assert!(too_long.validate().is_err());
    }

    #[test]
    fn test_channel_kind_defaults_to_text() {
        let request: CreateChannelRequest = serde_json::from_str(r#"{"name": "standup"}"#).unwrap();
        assert_eq!(request.kind, ChannelKind::Text);

        let request: CreateChannelRequest =
            serde_json::from_str(r#"{"name": "standup", "kind": "AUDIO"}"#).unwrap();
        assert_eq!(request.kind, ChannelKind::Audio);
    }

    #[test]
    fn test_role_deserializes_from_screaming_case() {
        let request: UpdateMemberRoleRequest =
            serde_json::from_str(r#"{"role": "MODERATOR"}"#).unwrap();
        assert_eq!(request.role, Role::Moderator);
    }
}
