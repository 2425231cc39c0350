//! # concord-core
//!
//! Domain layer containing entities, value objects, the capability predicate,
//! and the repository/publisher ports. This crate has zero dependencies on
//! infrastructure (database, web framework, etc.).

pub mod authz;
pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use authz::{Actor, Capability};
pub use entities::{
    Channel, ChannelKind, Conversation, DirectMessage, Member, Message, Profile, Role, Server,
    DELETED_MESSAGE_TOMBSTONE, RESERVED_CHANNEL_NAME,
};
pub use error::DomainError;
pub use traits::{
    ChannelRepository, ConversationRepository, DirectMessageRepository, DirectMessageWithAuthor,
    EventPublisher, MemberRepository, MemberWithProfile, MessageRepository, MessageWithAuthor,
    ProfileRepository, RepoResult, ServerPatch, ServerRepository,
};
pub use value_objects::{Snowflake, SnowflakeGenerator, SnowflakeParseError};
