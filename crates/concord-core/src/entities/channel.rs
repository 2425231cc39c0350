//! Channel entity - a named text/audio/video room inside a server

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::Snowflake;

/// Name of the default channel every server is created with.
///
/// The name is reserved: user-created channels may not take it, and the
/// default channel itself cannot be renamed or deleted.
pub const RESERVED_CHANNEL_NAME: &str = "general";

/// Channel kind enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(i16)]
pub enum ChannelKind {
    #[default]
    Text = 0,
    Audio = 1,
    Video = 2,
}

impl ChannelKind {
    /// Wire/database code
    #[inline]
    #[must_use]
    pub fn as_i16(self) -> i16 {
        self as i16
    }

    /// Display label
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Text => "TEXT",
            Self::Audio => "AUDIO",
            Self::Video => "VIDEO",
        }
    }
}

impl From<i16> for ChannelKind {
    fn from(value: i16) -> Self {
        match value {
            1 => Self::Audio,
            2 => Self::Video,
            _ => Self::Text,
        }
    }
}

impl From<ChannelKind> for i16 {
    fn from(kind: ChannelKind) -> Self {
        kind as i16
    }
}

/// Channel entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Channel {
    pub id: Snowflake,
    pub server_id: Snowflake,
    pub name: String,
    pub kind: ChannelKind,
    /// Profile that created the channel
    pub created_by: Snowflake,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Channel {
    /// Create a new channel
    pub fn new(
        id: Snowflake,
        server_id: Snowflake,
        name: String,
        kind: ChannelKind,
        created_by: Snowflake,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            server_id,
            name,
            kind,
            created_by,
            created_at: now,
            updated_at: now,
        }
    }

    /// Create the default text channel for a fresh server
    pub fn new_default(id: Snowflake, server_id: Snowflake, created_by: Snowflake) -> Self {
        Self::new(
            id,
            server_id,
            RESERVED_CHANNEL_NAME.to_string(),
            ChannelKind::Text,
            created_by,
        )
    }

    /// Whether this is the protected default channel
    #[inline]
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.name == RESERVED_CHANNEL_NAME
    }

    /// Rename and retype the channel
    pub fn update(&mut self, name: String, kind: ChannelKind) {
        self.name = name;
        self.kind = kind;
        self.updated_at = Utc::now();
    }
}
