//! Service context - dependency container for services
//!
//! Holds the repository ports, the event publisher, the id generator, and
//! the feed configuration. Everything is a port, so the protocol can run
//! against PostgreSQL/Redis in production and in-memory fakes in tests;
//! connection pools stay in the API composition root.

use std::sync::Arc;

use concord_common::FeedConfig;
use concord_core::traits::{
    ChannelRepository, ConversationRepository, DirectMessageRepository, EventPublisher,
    MemberRepository, MessageRepository, ProfileRepository, ServerRepository,
};
use concord_core::SnowflakeGenerator;
use tracing::warn;

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    profile_repo: Arc<dyn ProfileRepository>,
    server_repo: Arc<dyn ServerRepository>,
    channel_repo: Arc<dyn ChannelRepository>,
    member_repo: Arc<dyn MemberRepository>,
    message_repo: Arc<dyn MessageRepository>,
    conversation_repo: Arc<dyn ConversationRepository>,
    direct_message_repo: Arc<dyn DirectMessageRepository>,

    publisher: Arc<dyn EventPublisher>,
    snowflake_generator: Arc<SnowflakeGenerator>,
    feed: FeedConfig,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        profile_repo: Arc<dyn ProfileRepository>,
        server_repo: Arc<dyn ServerRepository>,
        channel_repo: Arc<dyn ChannelRepository>,
        member_repo: Arc<dyn MemberRepository>,
        message_repo: Arc<dyn MessageRepository>,
        conversation_repo: Arc<dyn ConversationRepository>,
        direct_message_repo: Arc<dyn DirectMessageRepository>,
        publisher: Arc<dyn EventPublisher>,
        snowflake_generator: Arc<SnowflakeGenerator>,
        feed: FeedConfig,
    ) -> Self {
        Self {
            profile_repo,
            server_repo,
            channel_repo,
            member_repo,
            message_repo,
            conversation_repo,
            direct_message_repo,
            publisher,
            snowflake_generator,
            feed,
        }
    }

    // === Repositories ===

    /// Get the profile repository
    pub fn profile_repo(&self) -> &dyn ProfileRepository {
        self.profile_repo.as_ref()
    }

    /// Get the server repository
    pub fn server_repo(&self) -> &dyn ServerRepository {
        self.server_repo.as_ref()
    }

    /// Get the channel repository
    pub fn channel_repo(&self) -> &dyn ChannelRepository {
        self.channel_repo.as_ref()
    }

    /// Get the member repository
    pub fn member_repo(&self) -> &dyn MemberRepository {
        self.member_repo.as_ref()
    }

    /// Get the message repository
    pub fn message_repo(&self) -> &dyn MessageRepository {
        self.message_repo.as_ref()
    }

    /// Get the conversation repository
    pub fn conversation_repo(&self) -> &dyn ConversationRepository {
        self.conversation_repo.as_ref()
    }

    /// Get the direct message repository
    pub fn direct_message_repo(&self) -> &dyn DirectMessageRepository {
        self.direct_message_repo.as_ref()
    }

    // === Pub/Sub ===

    /// Get the event publisher
    pub fn publisher(&self) -> &dyn EventPublisher {
        self.publisher.as_ref()
    }

    /// Publish a mutation event, swallowing failures.
    ///
    /// Broadcast sits outside the atomicity boundary: the mutation already
    /// committed, so a failed publish is logged and otherwise ignored.
    pub async fn broadcast(&self, topic: &str, event: &str, payload: &impl serde::Serialize) {
        let value = match serde_json::to_value(payload) {
            Ok(value) => value,
            Err(e) => {
                warn!(error = %e, topic = %topic, event = %event, "Failed to serialize broadcast payload");
                return;
            }
        };

        if let Err(e) = self.publisher.publish(topic, event, value).await {
            warn!(error = %e, topic = %topic, event = %event, "Broadcast failed");
        }
    }

    // === Configuration / ids ===

    /// Get the feed configuration
    pub fn feed_config(&self) -> FeedConfig {
        self.feed
    }

    /// Generate a new Snowflake ID
    pub fn generate_id(&self) -> concord_core::Snowflake {
        self.snowflake_generator.generate()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("publisher", &"dyn EventPublisher")
            .field("feed", &self.feed)
            .finish()
    }
}

/// Builder for creating ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    profile_repo: Option<Arc<dyn ProfileRepository>>,
    server_repo: Option<Arc<dyn ServerRepository>>,
    channel_repo: Option<Arc<dyn ChannelRepository>>,
    member_repo: Option<Arc<dyn MemberRepository>>,
    message_repo: Option<Arc<dyn MessageRepository>>,
    conversation_repo: Option<Arc<dyn ConversationRepository>>,
    direct_message_repo: Option<Arc<dyn DirectMessageRepository>>,
    publisher: Option<Arc<dyn EventPublisher>>,
    snowflake_generator: Option<Arc<SnowflakeGenerator>>,
    feed: Option<FeedConfig>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn profile_repo(mut self, repo: Arc<dyn ProfileRepository>) -> Self {
        self.profile_repo = Some(repo);
        self
    }

    pub fn server_repo(mut self, repo: Arc<dyn ServerRepository>) -> Self {
        self.server_repo = Some(repo);
        self
    }

    pub fn channel_repo(mut self, repo: Arc<dyn ChannelRepository>) -> Self {
        self.channel_repo = Some(repo);
        self
    }

    pub fn member_repo(mut self, repo: Arc<dyn MemberRepository>) -> Self {
        self.member_repo = Some(repo);
        self
    }

    pub fn message_repo(mut self, repo: Arc<dyn MessageRepository>) -> Self {
        self.message_repo = Some(repo);
        self
    }

    pub fn conversation_repo(mut self, repo: Arc<dyn ConversationRepository>) -> Self {
        self.conversation_repo = Some(repo);
        self
    }

    pub fn direct_message_repo(mut self, repo: Arc<dyn DirectMessageRepository>) -> Self {
        self.direct_message_repo = Some(repo);
        self
    }

    pub fn publisher(mut self, publisher: Arc<dyn EventPublisher>) -> Self {
        self.publisher = Some(publisher);
        self
    }

    pub fn snowflake_generator(mut self, generator: Arc<SnowflakeGenerator>) -> Self {
        self.snowflake_generator = Some(generator);
        self
    }

    pub fn feed(mut self, feed: FeedConfig) -> Self {
        self.feed = Some(feed);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext::new(
            self.profile_repo
                .ok_or_else(|| ServiceError::validation("profile_repo is required"))?,
            self.server_repo
                .ok_or_else(|| ServiceError::validation("server_repo is required"))?,
            self.channel_repo
                .ok_or_else(|| ServiceError::validation("channel_repo is required"))?,
            self.member_repo
                .ok_or_else(|| ServiceError::validation("member_repo is required"))?,
            self.message_repo
                .ok_or_else(|| ServiceError::validation("message_repo is required"))?,
            self.conversation_repo
                .ok_or_else(|| ServiceError::validation("conversation_repo is required"))?,
            self.direct_message_repo
                .ok_or_else(|| ServiceError::validation("direct_message_repo is required"))?,
            self.publisher
                .ok_or_else(|| ServiceError::validation("publisher is required"))?,
            self.snowflake_generator
                .ok_or_else(|| ServiceError::validation("snowflake_generator is required"))?,
            self.feed.unwrap_or_default(),
        ))
    }
}
