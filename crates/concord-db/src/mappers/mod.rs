//! Entity to model mappers
//!
//! Conversions between database rows and domain entities:
//! `From<Model> for Entity` for reads; repositories bind entity fields
//! directly for writes.

mod channel;
mod conversation;
mod member;
mod message;
mod profile;
mod server;
