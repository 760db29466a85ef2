use std::time::Duration;

use categories_db::PoolConfig;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
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
    /// Shared secret expected in the `X-API-Key` header.
    pub api_key: String,
    /// Connection pool bounds.
    pub pool: PoolConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                   | Default                 |
    /// |---------------------------|-------------------------|
    /// | `HOST`                    | `0.0.0.0`               |
    /// | `PORT`                    | `3000`                  |
    /// | `CORS_ORIGINS`            | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS`    | `30`                    |
    /// | `API_KEY`                 | `RAHASIA`               |
    /// | `DB_MAX_CONNECTIONS`      | `20`                    |
    /// | `DB_MIN_CONNECTIONS`      | `5`                     |
    /// | `DB_IDLE_TIMEOUT_SECS`    | `600`                   |
    /// | `DB_MAX_LIFETIME_SECS`    | `3600`                  |
    /// | `DB_ACQUIRE_TIMEOUT_SECS` | `5`                     |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = env_parse("PORT", 3000);

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = env_parse("REQUEST_TIMEOUT_SECS", 30);

        let api_key = std::env::var("API_KEY").unwrap_or_else(|_| "RAHASIA".into());

        let defaults = PoolConfig::default();
        let pool = PoolConfig {
            max_connections: env_parse("DB_MAX_CONNECTIONS", defaults.max_connections),
            min_connections: env_parse("DB_MIN_CONNECTIONS", defaults.min_connections),
            idle_timeout: Duration::from_secs(env_parse(
                "DB_IDLE_TIMEOUT_SECS",
                defaults.idle_timeout.as_secs(),
            )),
            max_lifetime: Duration::from_secs(env_parse(
                "DB_MAX_LIFETIME_SECS",
                defaults.max_lifetime.as_secs(),
            )),
            acquire_timeout: Duration::from_secs(env_parse(
                "DB_ACQUIRE_TIMEOUT_SECS",
                defaults.acquire_timeout.as_secs(),
            )),
        };

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            api_key,
            pool,
        }
    }
}

/// Read and parse an env var, falling back to `default` when unset.
///
/// Panics if the variable is set but malformed; misconfiguration should
/// stop the server at startup.
fn env_parse<T>(name: &str, default: T) -> T
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(name) {
        Ok(raw) => raw
            .parse()
            .unwrap_or_else(|e| panic!("{name} must be valid: {e}")),
        Err(_) => default,
    }
}
