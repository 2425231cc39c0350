//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::Snowflake;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Profile not found")]
    ProfileNotFound,

    #[error("Server not found: {0}")]
    ServerNotFound(Snowflake),

    #[error("Channel not found: {0}")]
    ChannelNotFound(Snowflake),

    #[error("Message not found: {0}")]
    MessageNotFound(Snowflake),

    #[error("Direct message not found: {0}")]
    DirectMessageNotFound(Snowflake),

    #[error("Conversation not found: {0}")]
    ConversationNotFound(Snowflake),

    #[error("Member not found in server")]
    MemberNotFound,

    #[error("Invite not found: {0}")]
    InviteNotFound(String),

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Not the author of this message")]
    NotAuthor,

    #[error("Missing capability: {0}")]
    MissingCapability(&'static str),

    #[error("Not the server owner")]
    NotServerOwner,

    #[error("The server owner cannot be modified or removed")]
    OwnerImmutable,

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Channel name '{0}' is reserved")]
    ReservedChannelName(String),

    #[error("The default channel cannot be modified or deleted")]
    DefaultChannelImmutable,

    #[error("Content too long: max {max} characters")]
    ContentTooLong { max: usize },

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Already a member of this server")]
    AlreadyMember,

    #[error("Cannot leave an owned server (delete it instead)")]
    CannotLeaveOwnedServer,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Broadcast error: {0}")]
    BroadcastError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::ProfileNotFound => "UNKNOWN_PROFILE",
            Self::ServerNotFound(_) => "UNKNOWN_SERVER",
            Self::ChannelNotFound(_) => "UNKNOWN_CHANNEL",
            Self::MessageNotFound(_) => "UNKNOWN_MESSAGE",
            Self::DirectMessageNotFound(_) => "UNKNOWN_DIRECT_MESSAGE",
            Self::ConversationNotFound(_) => "UNKNOWN_CONVERSATION",
            Self::MemberNotFound => "UNKNOWN_MEMBER",
            Self::InviteNotFound(_) => "UNKNOWN_INVITE",

            // Authorization
            Self::NotAuthor => "NOT_AUTHOR",
            Self::MissingCapability(_) => "MISSING_CAPABILITY",
            Self::NotServerOwner => "NOT_SERVER_OWNER",
            Self::OwnerImmutable => "OWNER_IMMUTABLE",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::ReservedChannelName(_) => "RESERVED_CHANNEL_NAME",
            Self::DefaultChannelImmutable => "DEFAULT_CHANNEL_IMMUTABLE",
            Self::ContentTooLong { .. } => "CONTENT_TOO_LONG",

            // Conflict
            Self::AlreadyMember => "ALREADY_MEMBER",
            Self::CannotLeaveOwnedServer => "CANNOT_LEAVE_OWNED_SERVER",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::BroadcastError(_) => "BROADCAST_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ProfileNotFound
                | Self::ServerNotFound(_)
                | Self::ChannelNotFound(_)
                | Self::MessageNotFound(_)
                | Self::DirectMessageNotFound(_)
                | Self::ConversationNotFound(_)
                | Self::MemberNotFound
                | Self::InviteNotFound(_)
        )
    }

    /// Check if this is an authorization (forbidden) error
    pub fn is_forbidden(&self) -> bool {
        matches!(
            self,
            Self::NotAuthor
                | Self::MissingCapability(_)
                | Self::NotServerOwner
                | Self::OwnerImmutable
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::ReservedChannelName(_)
                | Self::DefaultChannelImmutable
                | Self::ContentTooLong { .. }
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::AlreadyMember | Self::CannotLeaveOwnedServer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = DomainError::ServerNotFound(Snowflake::new(1));
        assert_eq!(err.code(), "UNKNOWN_SERVER");

        let err = DomainError::MissingCapability("MANAGE_CHANNELS");
        assert_eq!(err.code(), "MISSING_CAPABILITY");
    }

    #[test]
    fn test_is_not_found() {
        assert!(DomainError::MemberNotFound.is_not_found());
        assert!(DomainError::MessageNotFound(Snowflake::new(1)).is_not_found());
        assert!(!DomainError::AlreadyMember.is_not_found());
    }

    #[test]
    fn test_is_forbidden() {
        assert!(DomainError::NotAuthor.is_forbidden());
        assert!(DomainError::OwnerImmutable.is_forbidden());
        assert!(!DomainError::MemberNotFound.is_forbidden());
    }

    #[test]
    fn test_is_validation() {
        assert!(DomainError::ReservedChannelName("general".to_string()).is_validation());
        assert!(DomainError::ContentTooLong { max: 2000 }.is_validation());
        assert!(!DomainError::NotAuthor.is_validation());
    }

    #[test]
    fn test_error_display() {
        let err = DomainError::ChannelNotFound(Snowflake::new(123));
        assert_eq!(err.to_string(), "Channel not found: 123");

        let err = DomainError::ReservedChannelName("general".to_string());
        assert_eq!(err.to_string(), "Channel name 'general' is reserved");
    }
}
