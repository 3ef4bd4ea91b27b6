//! Configuration for Products API

use core_config::{AppInfo, Environment, FromEnv, app_info, cors::CorsConfig, server::ServerConfig};
use database::common::RetryConfig;
use database::postgres::PostgresConfig;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub database: PostgresConfig,
    pub db_retry: RetryConfig,
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let database = PostgresConfig::from_env()?; // Required - will fail if not set
        let db_retry = RetryConfig::from_env()?;
        let server = ServerConfig::from_env()?; // Uses defaults: HOST=0.0.0.0, PORT=8080
        let cors = CorsConfig::from_env()?; // CORS_ALLOWED_ORIGIN or FRONTEND_URL

        Ok(Self {
            app: app_info!(),
            database,
            db_retry,
            server,
            cors,
            environment,
        })
    }
}
