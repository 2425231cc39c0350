//! API integration tests
//!
//! These tests require:
//! - Running PostgreSQL and Redis instances
//! - Environment variables: DATABASE_URL, REDIS_URL, SESSION_SECRET, API_PORT
//!
//! Run with: cargo test -p integration-tests --test api_tests

use anyhow::Result;
use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, TestServer,
};
use reqwest::StatusCode;

/// A signed-in participant: token plus their profile
struct Participant {
    token: String,
    profile: ProfileResponse,
}

async fn sign_in(server: &TestServer, tag: &str) -> Result<Participant> {
    let identity = TestIdentity::unique(tag);
    let token = server.issue_token(&identity.subject, &identity.name)?;

    let response = server.post_auth_empty("/api/v1/profiles/@me", &token).await?;
    let profile: ProfileResponse = assert_json(response, StatusCode::CREATED).await?;

    Ok(Participant { token, profile })
}

/// Owner-created server with the guest joined, plus the default channel id
struct Community {
    owner: Participant,
    guest: Participant,
    server_id: String,
    channel_id: String,
}

async fn build_community(server: &TestServer) -> Result<Community> {
    let owner = sign_in(server, "owner").await?;
    let guest = sign_in(server, "guest").await?;

    let response = server
        .post_auth("/api/v1/servers", &owner.token, &CreateServerRequest::unique())
        .await?;
    let detail: ServerDetailResponse = assert_json(response, StatusCode::CREATED).await?;

    let response = server
        .post_auth_empty(
            &format!("/api/v1/servers/join/{}", detail.invite_code),
            &guest.token,
        )
        .await?;
    assert_status(response, StatusCode::CREATED).await?;

    let channel_id = detail.channels[0].id.clone();
    Ok(Community {
        owner,
        guest,
        server_id: detail.id,
        channel_id,
    })
}

fn message_path(community: &Community) -> String {
    format!(
        "/api/v1/messages?server_id={}&channel_id={}",
        community.server_id, community.channel_id
    )
}

fn message_id_path(community: &Community, message_id: &str) -> String {
    format!(
        "/api/v1/messages/{}?server_id={}&channel_id={}",
        message_id, community.server_id, community.channel_id
    )
}

// ============================================================================
// Health
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Identity
// ============================================================================

#[tokio::test]
async fn test_profile_setup_is_idempotent() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let identity = TestIdentity::unique("repeat");
    let token = server.issue_token(&identity.subject, &identity.name).unwrap();

    let first: ProfileResponse = assert_json(
        server.post_auth_empty("/api/v1/profiles/@me", &token).await.unwrap(),
        StatusCode::CREATED,
    )
    .await
    .unwrap();

    let second: ProfileResponse = assert_json(
        server.post_auth_empty("/api/v1/profiles/@me", &token).await.unwrap(),
        StatusCode::CREATED,
    )
    .await
    .unwrap();

    assert_eq!(first.id, second.id);
}

#[tokio::test]
async fn test_unauthenticated_wins_over_everything_else() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();

    // No token: 401 even though every other parameter is also wrong
    let response = server
        .post("/api/v1/messages", &MessageBody::new("hello"))
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    // Garbage token: still 401
    let response = server
        .post_auth("/api/v1/messages", "not-a-token", &MessageBody::new("hello"))
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    // Valid token without profile setup: still unauthenticated
    let identity = TestIdentity::unique("nosetup");
    let token = server.issue_token(&identity.subject, &identity.name).unwrap();
    let response = server
        .post_auth("/api/v1/messages", &token, &MessageBody::new("hello"))
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_missing_scope_id_is_400() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let community = build_community(&server).await.unwrap();

    // Authenticated, but no server_id/channel_id query parameters
    let response = server
        .post_auth("/api/v1/messages", &community.guest.token, &MessageBody::new("hi"))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Message protocol
// ============================================================================

#[tokio::test]
async fn test_message_edit_delete_permissions() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let community = build_community(&server).await.unwrap();

    // Guest posts
    let message: MessageResponse = assert_json(
        server
            .post_auth(&message_path(&community), &community.guest.token, &MessageBody::new("hello"))
            .await
            .unwrap(),
        StatusCode::CREATED,
    )
    .await
    .unwrap();

    // Guest edits own message
    let edited: MessageResponse = assert_json(
        server
            .patch_auth(
                &message_id_path(&community, &message.id),
                &community.guest.token,
                &MessageBody::new("hi"),
            )
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert_eq!(edited.content, "hi");

    // Owner (admin, not author) cannot edit
    let response = server
        .patch_auth(
            &message_id_path(&community, &message.id),
            &community.owner.token,
            &MessageBody::new("nope"),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    // Owner can delete; the row becomes a tombstone
    let deleted: MessageResponse = assert_json(
        server
            .delete_auth(&message_id_path(&community, &message.id), &community.owner.token)
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert!(deleted.deleted);
    assert_eq!(deleted.content, "This message has been deleted");
    assert!(deleted.file_url.is_none());

    // Deleted messages are not editable, even by the author
    let response = server
        .patch_auth(
            &message_id_path(&community, &message.id),
            &community.guest.token,
            &MessageBody::new("too late"),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_feed_pagination_25_messages() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let community = build_community(&server).await.unwrap();

    for i in 0..25 {
        let response = server
            .post_auth(
                &message_path(&community),
                &community.guest.token,
                &MessageBody::new(&format!("m{i}")),
            )
            .await
            .unwrap();
        assert_status(response, StatusCode::CREATED).await.unwrap();
    }

    // Page 1: newest 10
    let first: FeedResponse = assert_json(
        server.get_auth(&message_path(&community), &community.guest.token).await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert_eq!(first.items.len(), 10);
    assert_eq!(first.items[0].content, "m24");
    let cursor = first.next_cursor.expect("full page has a cursor");
    assert_eq!(cursor, first.items[9].id);

    // Page 2: next 10, cursor row excluded
    let second: FeedResponse = assert_json(
        server
            .get_auth(
                &format!("{}&cursor={}", message_path(&community), cursor),
                &community.guest.token,
            )
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert_eq!(second.items.len(), 10);
    assert_eq!(second.items[0].content, "m14");
    let cursor = second.next_cursor.expect("full page has a cursor");

    // Page 3: final 5, no cursor
    let third: FeedResponse = assert_json(
        server
            .get_auth(
                &format!("{}&cursor={}", message_path(&community), cursor),
                &community.guest.token,
            )
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert_eq!(third.items.len(), 5);
    assert_eq!(third.items[4].content, "m0");
    assert!(third.next_cursor.is_none());
}

// ============================================================================
// Channels
// ============================================================================

#[tokio::test]
async fn test_channel_rules() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let community = build_community(&server).await.unwrap();
    let create_path = format!("/api/v1/channels?server_id={}", community.server_id);

    // Guests cannot create channels
    let response = server
        .post_auth(
            &create_path,
            &community.guest.token,
            &CreateChannelRequest { name: "plans".to_string(), kind: "TEXT" },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    // The reserved name is rejected even for the admin owner
    let response = server
        .post_auth(
            &create_path,
            &community.owner.token,
            &CreateChannelRequest { name: "general".to_string(), kind: "TEXT" },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    // Admins can create channels
    let channel: ChannelResponse = assert_json(
        server
            .post_auth(
                &create_path,
                &community.owner.token,
                &CreateChannelRequest { name: "voice".to_string(), kind: "AUDIO" },
            )
            .await
            .unwrap(),
        StatusCode::CREATED,
    )
    .await
    .unwrap();
    assert_eq!(channel.kind, "AUDIO");

    // The default channel cannot be deleted
    let response = server
        .delete_auth(
            &format!(
                "/api/v1/channels/{}?server_id={}",
                community.channel_id, community.server_id
            ),
            &community.owner.token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Members
// ============================================================================

#[tokio::test]
async fn test_member_management_rules() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let community = build_community(&server).await.unwrap();

    let detail: ServerDetailResponse = assert_json(
        server
            .get_auth(
                &format!("/api/v1/servers/{}", community.server_id),
                &community.owner.token,
            )
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();

    let owner_member = detail
        .members
        .iter()
        .find(|m| m.profile.id == community.owner.profile.id)
        .unwrap();
    let guest_member = detail
        .members
        .iter()
        .find(|m| m.profile.id == community.guest.profile.id)
        .unwrap();
    assert_eq!(owner_member.role, "ADMIN");
    assert_eq!(guest_member.role, "GUEST");

    // A guest cannot manage members
    let response = server
        .patch_auth(
            &format!(
                "/api/v1/members/{}?server_id={}",
                owner_member.id, community.server_id
            ),
            &community.guest.token,
            &RoleBody { role: "GUEST" },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    // The owner cannot be targeted, even by themselves
    let response = server
        .delete_auth(
            &format!(
                "/api/v1/members/{}?server_id={}",
                owner_member.id, community.server_id
            ),
            &community.owner.token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    // Owner promotes then kicks the guest
    let promoted: ServerDetailResponse = assert_json(
        server
            .patch_auth(
                &format!(
                    "/api/v1/members/{}?server_id={}",
                    guest_member.id, community.server_id
                ),
                &community.owner.token,
                &RoleBody { role: "MODERATOR" },
            )
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    let promoted_member = promoted
        .members
        .iter()
        .find(|m| m.profile.id == community.guest.profile.id)
        .unwrap();
    assert_eq!(promoted_member.role, "MODERATOR");

    let after_kick: ServerDetailResponse = assert_json(
        server
            .delete_auth(
                &format!(
                    "/api/v1/members/{}?server_id={}",
                    guest_member.id, community.server_id
                ),
                &community.owner.token,
            )
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert!(after_kick
        .members
        .iter()
        .all(|m| m.profile.id != community.guest.profile.id));
}

// ============================================================================
// Conversations and direct messages
// ============================================================================

#[tokio::test]
async fn test_direct_message_flow() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let community = build_community(&server).await.unwrap();

    let detail: ServerDetailResponse = assert_json(
        server
            .get_auth(
                &format!("/api/v1/servers/{}", community.server_id),
                &community.owner.token,
            )
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    let guest_member = detail
        .members
        .iter()
        .find(|m| m.profile.id == community.guest.profile.id)
        .unwrap();

    // Owner opens a conversation with the guest
    let conversation: ConversationResponse = assert_json(
        server
            .post_auth(
                &format!("/api/v1/conversations?server_id={}", community.server_id),
                &community.owner.token,
                &serde_json::json!({ "member_id": guest_member.id }),
            )
            .await
            .unwrap(),
        StatusCode::CREATED,
    )
    .await
    .unwrap();

    let dm_path = format!(
        "/api/v1/direct-messages?conversation_id={}",
        conversation.id
    );

    // Guest sends, owner cannot edit it, owner can delete it
    let dm: MessageResponse = assert_json(
        server
            .post_auth(&dm_path, &community.guest.token, &MessageBody::new("psst"))
            .await
            .unwrap(),
        StatusCode::CREATED,
    )
    .await
    .unwrap();

    let dm_id_path = format!(
        "/api/v1/direct-messages/{}?conversation_id={}",
        dm.id, conversation.id
    );

    let response = server
        .patch_auth(&dm_id_path, &community.owner.token, &MessageBody::new("hijack"))
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let deleted: MessageResponse = assert_json(
        server.delete_auth(&dm_id_path, &community.owner.token).await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert!(deleted.deleted);
    assert_eq!(deleted.content, "This message has been deleted");
}
