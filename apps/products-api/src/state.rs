//! Application state management

/// Shared application state
///
/// Built once at startup; cloning only copies the pool handle.
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    /// PostgreSQL database connection pool
    pub db: database::postgres::DatabaseConnection,
}
