//! Server setup and initialization
//!
//! Composition root: builds the pools, wires the PostgreSQL repositories
//! and the Redis publisher into the service context, and runs the HTTP
//! server.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use concord_cache::{RedisPool, RedisPoolConfig, RedisPublisher};
use concord_common::{AppConfig, AppError, SessionService};
use concord_core::SnowflakeGenerator;
use concord_db::{
    create_pool, PgChannelRepository, PgConversationRepository, PgDirectMessageRepository,
    PgMemberRepository, PgMessageRepository, PgProfileRepository, PgServerRepository,
};
use concord_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::{apply_middleware, apply_middleware_with_config};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let config = state.config().clone();

    let api = apply_middleware_with_config(
        create_router(),
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    );
    let health = apply_middleware(health_routes());

    api.merge(health).with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    // Create database pool
    info!("Connecting to PostgreSQL...");
    let db_config = concord_db::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        ..Default::default()
    };
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    // Create Redis pool
    info!("Connecting to Redis...");
    let redis_config = RedisPoolConfig::from(&config.redis);
    let redis_pool = RedisPool::new(redis_config).map_err(|e| AppError::Cache(e.to_string()))?;
    let shared_redis = Arc::new(redis_pool.clone());
    info!("Redis connection established");

    // Session verifier
    let session_service = SessionService::new(&config.session.secret);

    // Snowflake generator
    let snowflake_generator = Arc::new(SnowflakeGenerator::new(config.snowflake.worker_id));

    // Repositories
    let profile_repo = Arc::new(PgProfileRepository::new(pool.clone()));
    let server_repo = Arc::new(PgServerRepository::new(pool.clone()));
    let channel_repo = Arc::new(PgChannelRepository::new(pool.clone()));
    let member_repo = Arc::new(PgMemberRepository::new(pool.clone()));
    let message_repo = Arc::new(PgMessageRepository::new(pool.clone()));
    let conversation_repo = Arc::new(PgConversationRepository::new(pool.clone()));
    let direct_message_repo = Arc::new(PgDirectMessageRepository::new(pool.clone()));

    // Event publisher
    let publisher = Arc::new(RedisPublisher::new(redis_pool));

    // Build service context
    let service_context = ServiceContextBuilder::new()
        .profile_repo(profile_repo)
        .server_repo(server_repo)
        .channel_repo(channel_repo)
        .member_repo(member_repo)
        .message_repo(message_repo)
        .conversation_repo(conversation_repo)
        .direct_message_repo(direct_message_repo)
        .publisher(publisher)
        .snowflake_generator(snowflake_generator)
        .feed(config.feed)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(
        service_context,
        session_service,
        config,
        pool,
        shared_redis,
    ))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.api.port));

    // Create app state
    let state = create_app_state(config).await?;

    // Build application
    let app = create_app(state);

    // Run server
    run_server(app, addr).await
}
