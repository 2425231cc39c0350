//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs and the infrastructure layer
//! provides the implementation. Two conventions run through every port:
//!
//! - Lookups are scope-qualified: a target is only ever resolved *within*
//!   its server, channel, or conversation, never by bare id. A guessed id
//!   from another scope resolves to `None`.
//! - Mutations are conditional: the implementation must apply the change in
//!   a single store operation whose predicate re-checks the same scope (and,
//!   where relevant, authorship/ownership) used to resolve the target, and
//!   report `None` / `false` / `0` when the predicate no longer holds.

use async_trait::async_trait;

use crate::entities::{
    Channel, ChannelKind, Conversation, DirectMessage, Member, Message, Profile, Role, Server,
};
use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

/// A member together with its profile (read-side join)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberWithProfile {
    pub member: Member,
    pub profile: Profile,
}

/// A message enriched with its authoring member and that member's profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageWithAuthor {
    pub message: Message,
    pub author: MemberWithProfile,
}

/// A direct message enriched with its authoring member and profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectMessageWithAuthor {
    pub message: DirectMessage,
    pub author: MemberWithProfile,
}

/// Partial update for a server row
#[derive(Debug, Clone, Default)]
pub struct ServerPatch {
    pub name: Option<String>,
    pub image_url: Option<String>,
    pub invite_code: Option<String>,
}

// ============================================================================
// Profile Repository
// ============================================================================

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Find profile by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Profile>>;

    /// Find profile by the identity provider's subject
    async fn find_by_external_id(&self, external_id: &str) -> RepoResult<Option<Profile>>;

    /// Create a new profile
    async fn create(&self, profile: &Profile) -> RepoResult<()>;
}

// ============================================================================
// Server Repository
// ============================================================================

#[async_trait]
pub trait ServerRepository: Send + Sync {
    /// Resolve a server together with the caller's membership in it.
    ///
    /// Returns `None` when the server does not exist OR the profile holds no
    /// member row there; callers cannot distinguish the two, which keeps
    /// foreign servers unobservable.
    async fn find_with_membership(
        &self,
        server_id: Snowflake,
        profile_id: Snowflake,
    ) -> RepoResult<Option<(Server, Member)>>;

    /// Find a server by its invite code
    async fn find_by_invite_code(&self, invite_code: &str) -> RepoResult<Option<Server>>;

    /// List all servers a profile is a member of
    async fn find_by_profile(&self, profile_id: Snowflake) -> RepoResult<Vec<Server>>;

    /// Create a new server
    async fn create(&self, server: &Server) -> RepoResult<()>;

    /// Apply a patch iff `owner_id` owns the server; `None` when it does not
    async fn update_if_owner(
        &self,
        server_id: Snowflake,
        owner_id: Snowflake,
        patch: ServerPatch,
    ) -> RepoResult<Option<Server>>;

    /// Delete iff `owner_id` owns the server; `false` when it does not
    async fn delete_if_owner(&self, server_id: Snowflake, owner_id: Snowflake) -> RepoResult<bool>;
}

// ============================================================================
// Channel Repository
// ============================================================================

#[async_trait]
pub trait ChannelRepository: Send + Sync {
    /// Find a channel scoped to its server
    async fn find_in_server(
        &self,
        server_id: Snowflake,
        channel_id: Snowflake,
    ) -> RepoResult<Option<Channel>>;

    /// List all channels in a server
    async fn find_by_server(&self, server_id: Snowflake) -> RepoResult<Vec<Channel>>;

    /// Create a new channel
    async fn create(&self, channel: &Channel) -> RepoResult<()>;

    /// Rename/retype a channel; the predicate excludes the reserved default
    /// channel, so the update cannot race past the immutability rule
    async fn update_in_server(
        &self,
        server_id: Snowflake,
        channel_id: Snowflake,
        name: &str,
        kind: ChannelKind,
    ) -> RepoResult<Option<Channel>>;

    /// Delete a channel; same reserved-name exclusion as `update_in_server`
    async fn delete_in_server(&self, server_id: Snowflake, channel_id: Snowflake) -> RepoResult<bool>;
}

// ============================================================================
// Member Repository
// ============================================================================

#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// Find a member row scoped to its server
    async fn find_in_server(
        &self,
        server_id: Snowflake,
        member_id: Snowflake,
    ) -> RepoResult<Option<Member>>;

    /// Find the membership of a profile in a server
    async fn find_membership(
        &self,
        server_id: Snowflake,
        profile_id: Snowflake,
    ) -> RepoResult<Option<Member>>;

    /// List members of a server with profiles, admins first
    async fn find_by_server(&self, server_id: Snowflake) -> RepoResult<Vec<MemberWithProfile>>;

    /// Create a new membership
    async fn create(&self, member: &Member) -> RepoResult<()>;

    /// Change a member's role; the predicate excludes any row belonging to
    /// `protected_profile_id` (the server owner)
    async fn update_role_excluding(
        &self,
        server_id: Snowflake,
        member_id: Snowflake,
        role: Role,
        protected_profile_id: Snowflake,
    ) -> RepoResult<Option<Member>>;

    /// Remove a member; same owner exclusion as `update_role_excluding`
    async fn delete_excluding(
        &self,
        server_id: Snowflake,
        member_id: Snowflake,
        protected_profile_id: Snowflake,
    ) -> RepoResult<bool>;

    /// Remove a profile's own membership (leaving a server)
    async fn delete_membership(
        &self,
        server_id: Snowflake,
        profile_id: Snowflake,
    ) -> RepoResult<bool>;
}

// ============================================================================
// Message Repository
// ============================================================================

#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Find a non-deleted message scoped to its channel, with author graph.
    /// Soft-deleted rows are invisible here: deleted resources are immutable.
    async fn find_in_channel(
        &self,
        channel_id: Snowflake,
        message_id: Snowflake,
    ) -> RepoResult<Option<MessageWithAuthor>>;

    /// Create a new message
    async fn create(&self, message: &Message) -> RepoResult<()>;

    /// Replace the content iff the message is still in `channel_id`, not
    /// deleted, and authored by `author_id`
    async fn update_content_if_author(
        &self,
        channel_id: Snowflake,
        message_id: Snowflake,
        author_id: Snowflake,
        content: &str,
    ) -> RepoResult<Option<MessageWithAuthor>>;

    /// Apply the tombstone iff the message is still in `channel_id` and not
    /// already deleted
    async fn soft_delete(
        &self,
        channel_id: Snowflake,
        message_id: Snowflake,
        tombstone: &str,
    ) -> RepoResult<Option<MessageWithAuthor>>;

    /// Newest-first keyset page. With a cursor, returns rows strictly older
    /// than it (the cursor row excluded). Includes soft-deleted rows; the
    /// feed shows tombstones.
    async fn list_page(
        &self,
        channel_id: Snowflake,
        before: Option<Snowflake>,
        limit: i64,
    ) -> RepoResult<Vec<MessageWithAuthor>>;
}

// ============================================================================
// Conversation Repository
// ============================================================================

#[async_trait]
pub trait ConversationRepository: Send + Sync {
    /// Resolve a conversation together with the caller's member slot in it.
    /// `None` when the conversation does not exist or neither slot belongs
    /// to the profile.
    async fn find_with_membership(
        &self,
        conversation_id: Snowflake,
        profile_id: Snowflake,
    ) -> RepoResult<Option<(Conversation, Member)>>;

    /// Find a conversation between two members, either slot ordering
    async fn find_by_members(
        &self,
        member_one_id: Snowflake,
        member_two_id: Snowflake,
    ) -> RepoResult<Option<Conversation>>;

    /// Create a new conversation
    async fn create(&self, conversation: &Conversation) -> RepoResult<()>;
}

// ============================================================================
// Direct Message Repository
// ============================================================================

#[async_trait]
pub trait DirectMessageRepository: Send + Sync {
    /// Find a non-deleted direct message scoped to its conversation
    async fn find_in_conversation(
        &self,
        conversation_id: Snowflake,
        message_id: Snowflake,
    ) -> RepoResult<Option<DirectMessageWithAuthor>>;

    /// Create a new direct message
    async fn create(&self, message: &DirectMessage) -> RepoResult<()>;

    /// Replace the content iff still in `conversation_id`, not deleted, and
    /// authored by `author_id`
    async fn update_content_if_author(
        &self,
        conversation_id: Snowflake,
        message_id: Snowflake,
        author_id: Snowflake,
        content: &str,
    ) -> RepoResult<Option<DirectMessageWithAuthor>>;

    /// Apply the tombstone iff still in `conversation_id` and not deleted
    async fn soft_delete(
        &self,
        conversation_id: Snowflake,
        message_id: Snowflake,
        tombstone: &str,
    ) -> RepoResult<Option<DirectMessageWithAuthor>>;

    /// Newest-first keyset page; same cursor contract as messages
    async fn list_page(
        &self,
        conversation_id: Snowflake,
        before: Option<Snowflake>,
        limit: i64,
    ) -> RepoResult<Vec<DirectMessageWithAuthor>>;
}
