//! Database models - SQLx-compatible structs for PostgreSQL tables

mod channel;
mod conversation;
mod member;
mod message;
mod profile;
mod server;

pub use channel::ChannelModel;
pub use conversation::{ConversationModel, ConversationWithMembershipModel, DirectMessageModel, DirectMessageWithAuthorModel};
pub use member::{MemberModel, MemberWithProfileModel};
pub use message::{MessageModel, MessageWithAuthorModel};
pub use profile::ProfileModel;
pub use server::{ServerModel, ServerWithMembershipModel};
