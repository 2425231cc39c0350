//! Repository implementations
//!
//! PostgreSQL implementations of the repository ports defined in
//! concord-core. Each repository handles database operations for a specific
//! domain entity; every mutation is a single conditional statement.

mod channel;
mod conversation;
mod direct_message;
mod error;
mod member;
mod message;
mod profile;
mod server;

pub use channel::PgChannelRepository;
pub use conversation::PgConversationRepository;
pub use direct_message::PgDirectMessageRepository;
pub use member::PgMemberRepository;
pub use message::PgMessageRepository;
pub use profile::PgProfileRepository;
pub use server::PgServerRepository;
