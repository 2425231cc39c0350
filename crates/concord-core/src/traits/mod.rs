//! Ports - interfaces the domain requires from infrastructure

mod publisher;
mod repositories;

pub use publisher::EventPublisher;
pub use repositories::{
    ChannelRepository, ConversationRepository, DirectMessageRepository, DirectMessageWithAuthor,
    MemberRepository, MemberWithProfile, MessageRepository, MessageWithAuthor, ProfileRepository,
    RepoResult, ServerPatch, ServerRepository,
};
