//! # concord-db
//!
//! Database layer implementing the repository ports with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for the repository traits
//! defined in `concord-core`. It handles:
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository implementations
//!
//! Two conventions hold everywhere: reads are scope-qualified (a resource is
//! only visible through its server/channel/conversation), and writes are
//! single conditional statements whose `WHERE` clause re-checks that same
//! scope, so a concurrent scope change makes the write report zero rows
//! instead of applying against stale assumptions.

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, DatabaseConfig, PgPool};
pub use repositories::{
    PgChannelRepository, PgConversationRepository, PgDirectMessageRepository, PgMemberRepository,
    PgMessageRepository, PgProfileRepository, PgServerRepository,
};
