use std::sync::Arc;

use sqlx::SqlitePool;

use crate::config::Config;

/// Shared application state
///
/// The two pools are the only shared resources in the process; everything
/// else is per-request.
#[derive(Clone)]
pub struct AppState {
    /// Movie catalog store (titles, users, ratings, recommendation snapshots)
    pub catalog: SqlitePool,
    /// Identity provider's store (roles)
    pub identity: SqlitePool,
    /// Immutable configuration loaded once at startup
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(catalog: SqlitePool, identity: SqlitePool, config: Config) -> Self {
        Self {
            catalog,
            identity,
            config: Arc::new(config),
        }
    }
}
