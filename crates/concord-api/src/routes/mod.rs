//! Route definitions
//!
//! All API routes organized by resource and mounted under /api/v1. Scope
//! ids arrive as query parameters and resource ids as path parameters,
//! mirroring the mutation protocol's scoping contract.

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use crate::handlers::{
    channels, conversations, direct_messages, health, members, messages, profiles, servers,
};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(profile_routes())
        .merge(server_routes())
        .merge(channel_routes())
        .merge(member_routes())
        .merge(message_routes())
        .merge(conversation_routes())
}

/// Profile routes
fn profile_routes() -> Router<AppState> {
    Router::new()
        .route("/profiles/@me", get(profiles::get_current_profile))
        .route("/profiles/@me", post(profiles::setup_profile))
}

/// Server routes
fn server_routes() -> Router<AppState> {
    Router::new()
        .route("/servers", post(servers::create_server))
        .route("/servers", get(servers::list_servers))
        .route("/servers/join/:invite_code", post(servers::join_server))
        .route("/servers/:server_id", get(servers::get_server))
        .route("/servers/:server_id", patch(servers::update_server))
        .route("/servers/:server_id", delete(servers::delete_server))
        .route(
            "/servers/:server_id/invite-code",
            patch(servers::regenerate_invite_code),
        )
        .route("/servers/:server_id/leave", delete(servers::leave_server))
}

/// Channel routes (server scope via ?server_id=)
fn channel_routes() -> Router<AppState> {
    Router::new()
        .route("/channels", post(channels::create_channel))
        .route("/channels/:channel_id", patch(channels::update_channel))
        .route("/channels/:channel_id", delete(channels::delete_channel))
}

/// Member routes (server scope via ?server_id=)
fn member_routes() -> Router<AppState> {
    Router::new()
        .route("/members/:member_id", patch(members::update_member_role))
        .route("/members/:member_id", delete(members::remove_member))
}

/// Message and direct message routes
fn message_routes() -> Router<AppState> {
    Router::new()
        .route("/messages", get(messages::list_messages))
        .route("/messages", post(messages::create_message))
        .route("/messages/:message_id", patch(messages::update_message))
        .route("/messages/:message_id", delete(messages::delete_message))
        .route("/direct-messages", get(direct_messages::list_direct_messages))
        .route("/direct-messages", post(direct_messages::create_direct_message))
        .route(
            "/direct-messages/:direct_message_id",
            patch(direct_messages::update_direct_message),
        )
        .route(
            "/direct-messages/:direct_message_id",
            delete(direct_messages::delete_direct_message),
        )
}

/// Conversation routes (server scope via ?server_id=)
fn conversation_routes() -> Router<AppState> {
    Router::new().route("/conversations", post(conversations::open_conversation))
}
