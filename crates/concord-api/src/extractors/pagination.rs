//! Feed cursor extractor
//!
//! The feed reader takes one optional opaque cursor: the id of the last
//! item of the previous page. Page size is server configuration, not a
//! client knob.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use concord_core::Snowflake;
use serde::Deserialize;

use crate::response::ApiError;

/// Raw cursor query parameter
#[derive(Debug, Deserialize)]
struct CursorParams {
    #[serde(default)]
    cursor: Option<String>,
}

/// Optional feed cursor
#[derive(Debug, Clone, Copy, Default)]
pub struct FeedCursor(pub Option<Snowflake>);

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for FeedCursor {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<CursorParams>::from_request_parts(parts, &())
            .await
            .map_err(|e| ApiError::invalid_query(e.to_string()))?;

        let cursor = params
            .cursor
            .map(|s| {
                s.parse::<Snowflake>()
                    .map_err(|_| ApiError::invalid_query("Invalid 'cursor' format"))
            })
            .transpose()?;

        Ok(FeedCursor(cursor))
    }
}
