//! Application state
//!
//! Holds the shared state for the Axum application: the service context,
//! the session verifier, the configuration, and the infrastructure pools
//! (kept here for health checks).

use std::sync::Arc;

use concord_cache::SharedRedisPool;
use concord_common::{AppConfig, SessionService};
use concord_db::PgPool;
use concord_service::ServiceContext;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    service_context: Arc<ServiceContext>,
    session_service: Arc<SessionService>,
    config: Arc<AppConfig>,
    db_pool: PgPool,
    redis_pool: SharedRedisPool,
}

impl AppState {
    /// Create a new AppState
    pub fn new(
        service_context: ServiceContext,
        session_service: SessionService,
        config: AppConfig,
        db_pool: PgPool,
        redis_pool: SharedRedisPool,
    ) -> Self {
        Self {
            service_context: Arc::new(service_context),
            session_service: Arc::new(session_service),
            config: Arc::new(config),
            db_pool,
            redis_pool,
        }
    }

    /// Get the service context
    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    /// Get the session verifier
    pub fn session_service(&self) -> &SessionService {
        &self.session_service
    }

    /// Get the application configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get the PostgreSQL pool (readiness checks)
    pub fn db_pool(&self) -> &PgPool {
        &self.db_pool
    }

    /// Get the Redis pool (readiness checks)
    pub fn redis_pool(&self) -> &SharedRedisPool {
        &self.redis_pool
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("service_context", &"ServiceContext")
            .field("config", &"AppConfig")
            .finish()
    }
}
