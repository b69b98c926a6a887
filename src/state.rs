use axum::extract::FromRef;
use sqlx::SqlitePool;

/// Shared handler state. Handlers extract the pool and open their own
/// connection or transaction per request.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(state: &AppState) -> Self {
        state.pool.clone()
    }
}
