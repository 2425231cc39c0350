//! Scope id extractors
//!
//! Mutations arrive with their enclosing scope as a query parameter
//! (`?server_id=` / `?conversation_id=`, messages additionally
//! `?channel_id=`). A missing scope id is a 400 `MissingParameter`; a
//! malformed one is a 400 invalid-query.

use std::collections::HashMap;

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use concord_core::Snowflake;

use crate::response::ApiError;

async fn query_id(
    parts: &mut Parts,
    name: &'static str,
) -> Result<Snowflake, ApiError> {
    let Query(params) = Query::<HashMap<String, String>>::from_request_parts(parts, &())
        .await
        .map_err(|e| ApiError::invalid_query(e.to_string()))?;

    let raw = params
        .get(name)
        .ok_or(ApiError::MissingParameter(name))?;

    raw.parse::<Snowflake>()
        .map_err(|_| ApiError::invalid_query(format!("Invalid '{name}' format")))
}

/// Required `?server_id=` query parameter
#[derive(Debug, Clone, Copy)]
pub struct ServerIdQuery(pub Snowflake);

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for ServerIdQuery {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(query_id(parts, "server_id").await?))
    }
}

/// Required `?channel_id=` query parameter
#[derive(Debug, Clone, Copy)]
pub struct ChannelIdQuery(pub Snowflake);

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for ChannelIdQuery {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(query_id(parts, "channel_id").await?))
    }
}

/// Required `?conversation_id=` query parameter
#[derive(Debug, Clone, Copy)]
pub struct ConversationIdQuery(pub Snowflake);

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for ConversationIdQuery {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(query_id(parts, "conversation_id").await?))
    }
}
