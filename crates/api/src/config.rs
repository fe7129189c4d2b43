use std::time::Duration;

use learndsa_db::PoolSettings;

use crate::auth::identity_token::IdentityTokenConfig;

/// Server configuration loaded from environment variables.
///
/// All fields except the identity-token secret have defaults suitable for
/// local development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Upper bound on the `/health` database probe in seconds (default: `5`).
    pub health_check_timeout_secs: u64,
    /// Database pool tuning.
    pub pool: PoolSettings,
    /// Verification settings for upstream identity tokens.
    pub identity: IdentityTokenConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                     | Default                 |
    /// |-----------------------------|-------------------------|
    /// | `HOST`                      | `0.0.0.0`               |
    /// | `PORT`                      | `3000`                  |
    /// | `CORS_ORIGINS`              | `http://localhost:3000` |
    /// | `REQUEST_TIMEOUT_SECS`      | `30`                    |
    /// | `HEALTH_CHECK_TIMEOUT_SECS` | `5`                     |
    /// | `DB_MAX_CONNECTIONS`        | `20`                    |
    /// | `DB_ACQUIRE_TIMEOUT_SECS`   | `5`                     |
    ///
    /// See [`IdentityTokenConfig::from_env`] for the identity-token variables.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = env_or("PORT", "3000")
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = env_or("CORS_ORIGINS", "http://localhost:3000")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = env_or("REQUEST_TIMEOUT_SECS", "30")
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let health_check_timeout_secs: u64 = env_or("HEALTH_CHECK_TIMEOUT_SECS", "5")
            .parse()
            .expect("HEALTH_CHECK_TIMEOUT_SECS must be a valid u64");

        let max_connections: u32 = env_or("DB_MAX_CONNECTIONS", "20")
            .parse()
            .expect("DB_MAX_CONNECTIONS must be a valid u32");

        let acquire_timeout_secs: u64 = env_or("DB_ACQUIRE_TIMEOUT_SECS", "5")
            .parse()
            .expect("DB_ACQUIRE_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            health_check_timeout_secs,
            pool: PoolSettings {
                max_connections,
                acquire_timeout: Duration::from_secs(acquire_timeout_secs),
            },
            identity: IdentityTokenConfig::from_env(),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.into())
}
