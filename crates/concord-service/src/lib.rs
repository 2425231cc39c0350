//! # concord-service
//!
//! Application layer containing business logic, services, and DTOs.
//!
//! Every mutating operation runs the same gated protocol: resolve the
//! caller's identity to a profile (done by the API layer), resolve the
//! scope and the caller's membership in it, resolve the target resource
//! within that scope, evaluate the capability predicate, apply the change
//! as one conditional store write, then broadcast the updated resource
//! graph best-effort.

pub mod dto;
pub mod services;

pub use dto::{
    ChannelResponse, ConversationResponse, CreateChannelRequest, CreateMessageRequest,
    CreateServerRequest, DirectMessageResponse, FeedResponse, MemberResponse, MessageResponse,
    OpenConversationRequest, ProfileResponse, ServerDetailResponse, ServerResponse,
    UpdateChannelRequest, UpdateMemberRoleRequest, UpdateMessageRequest, UpdateServerRequest,
};
pub use services::{
    ChannelService, ConversationService, DirectMessageService, FeedPage, MemberService,
    MessageService, ProfileService, ServerService, ServiceContext, ServiceContextBuilder,
    ServiceError, ServiceResult,
};
