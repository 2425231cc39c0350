//! Business logic services
//!
//! This module contains all service layer implementations. The shared steps
//! of the authorization-gated mutation protocol live in `guard`; the pure
//! pagination contract lives in `feed`; the per-resource services compose
//! the two with their capability predicates and conditional store writes.

pub mod channel;
pub mod context;
pub mod conversation;
pub mod direct_message;
pub mod error;
pub mod feed;
pub mod guard;
pub mod member;
pub mod message;
pub mod profile;
pub mod server;

// Re-export all services for convenience
pub use channel::ChannelService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use conversation::ConversationService;
pub use direct_message::DirectMessageService;
pub use error::{ServiceError, ServiceResult};
pub use feed::FeedPage;
pub use guard::{ConversationScope, ServerScope};
pub use member::MemberService;
pub use message::MessageService;
pub use profile::ProfileService;
pub use server::ServerService;
