use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
/// The pool is the only shared resource; every request reconciles and
/// queries independently.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: learndsa_db::DbPool,
    /// Server configuration (identity-token settings, timeouts).
    pub config: Arc<ServerConfig>,
}
