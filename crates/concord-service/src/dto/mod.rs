//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs (Snowflakes as strings)

pub mod requests;
pub mod responses;

pub use requests::{
    CreateChannelRequest, CreateMessageRequest, CreateServerRequest, OpenConversationRequest,
    UpdateChannelRequest, UpdateMemberRoleRequest, UpdateMessageRequest, UpdateServerRequest,
};
pub use responses::{
    ChannelResponse, ConversationResponse, DirectMessageResponse, FeedResponse, MemberResponse,
    MessageResponse, ProfileResponse, ServerDetailResponse, ServerResponse,
};
