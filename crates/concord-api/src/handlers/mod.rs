//! Request handlers
//!
//! Thin translation layer: extract identity, scope ids, and validated
//! bodies, call the matching service, map the result to a response.

pub mod channels;
pub mod conversations;
pub mod direct_messages;
pub mod health;
pub mod members;
pub mod messages;
pub mod profiles;
pub mod servers;

use concord_core::Snowflake;

use crate::response::ApiError;

/// Parse a path segment as a Snowflake id
pub(crate) fn parse_id(raw: &str, name: &str) -> Result<Snowflake, ApiError> {
    raw.parse::<Snowflake>()
        .map_err(|_| ApiError::invalid_path(format!("Invalid '{name}' format")))
}
