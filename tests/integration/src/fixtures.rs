//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// A test identity: the external subject and display name a session token
/// is issued for
#[derive(Debug, Clone)]
pub struct TestIdentity {
    pub subject: String,
    pub name: String,
}

impl TestIdentity {
    pub fn unique(tag: &str) -> Self {
        let suffix = unique_suffix();
        Self {
            subject: format!("test|{tag}{suffix}"),
            name: format!("{tag}{suffix}"),
        }
    }
}

/// Create server request
#[derive(Debug, Serialize)]
pub struct CreateServerRequest {
    pub name: String,
    pub image_url: Option<String>,
}

impl CreateServerRequest {
    pub fn unique() -> Self {
        Self {
            name: format!("server-{}", unique_suffix()),
            image_url: None,
        }
    }
}

/// Create channel request
#[derive(Debug, Serialize)]
pub struct CreateChannelRequest {
    pub name: String,
    pub kind: &'static str,
}

/// Message body
#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub content: String,
}

impl MessageBody {
    pub fn new(content: &str) -> Self {
        Self {
            content: content.to_string(),
        }
    }
}

/// Role change body
#[derive(Debug, Serialize)]
pub struct RoleBody {
    pub role: &'static str,
}

// ============================================================================
// Response shapes (the fields the tests read)
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ProfileResponse {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct ServerDetailResponse {
    pub id: String,
    pub name: String,
    pub owner_id: String,
    pub invite_code: String,
    pub channels: Vec<ChannelResponse>,
    pub members: Vec<MemberResponse>,
}

#[derive(Debug, Deserialize)]
pub struct ChannelResponse {
    pub id: String,
    pub name: String,
    pub kind: String,
}

#[derive(Debug, Deserialize)]
pub struct MemberResponse {
    pub id: String,
    pub role: String,
    pub profile: ProfileResponse,
}

#[derive(Debug, Deserialize)]
pub struct MessageResponse {
    pub id: String,
    pub content: String,
    pub file_url: Option<String>,
    pub deleted: bool,
    pub member: MemberResponse,
}

#[derive(Debug, Deserialize)]
pub struct FeedResponse {
    pub items: Vec<MessageResponse>,
    #[serde(default)]
    pub next_cursor: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ConversationResponse {
    pub id: String,
    pub member_one: MemberResponse,
    pub member_two: MemberResponse,
}
