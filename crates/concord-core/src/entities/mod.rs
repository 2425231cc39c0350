//! Domain entities - core business objects

mod channel;
mod conversation;
mod member;
mod message;
mod profile;
mod server;

pub use channel::{Channel, ChannelKind, RESERVED_CHANNEL_NAME};
pub use conversation::{Conversation, DirectMessage};
pub use member::{Member, Role};
pub use message::{Message, DELETED_MESSAGE_TOMBSTONE};
pub use profile::Profile;
pub use server::Server;
