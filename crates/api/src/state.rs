use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the pool is reference-counted and hands out independent
/// connections to concurrent requests.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: camsvc_db::DbPool,
    /// Server configuration (read-only after startup).
    pub config: Arc<ServerConfig>,
}
