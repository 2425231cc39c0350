//! Request extractors
//!
//! - `CurrentProfile`: bearer session token resolved to a Profile row (401
//!   on any failure): the identity-resolution step of the protocol
//! - `VerifiedSession`: the raw verified claims, for first-sign-in setup
//! - scope id query extractors (400 `MissingParameter` when absent)
//! - `FeedCursor`: optional pagination cursor
//! - `ValidatedJson`: JSON body validated with the validator crate

mod auth;
mod pagination;
mod scope;
mod validated;

pub use auth::{CurrentProfile, VerifiedSession};
pub use pagination::FeedCursor;
pub use scope::{ChannelIdQuery, ConversationIdQuery, ServerIdQuery};
pub use validated::ValidatedJson;
