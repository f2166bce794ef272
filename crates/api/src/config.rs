use std::time::Duration;

use tradepost_db::flow::{FlowConfig, FlowDelays};

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
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
    /// SQLite database URL.
    pub database_url: String,
    /// Simulated image upload latency in milliseconds (default: `500`).
    pub upload_delay_ms: u64,
    /// Simulated details save latency in milliseconds (default: `800`).
    pub details_delay_ms: u64,
    /// Simulated listing submit latency in milliseconds (default: `1500`).
    pub submit_delay_ms: u64,
    /// Re-check the draft's details before finalizing (default: `false`).
    pub revalidate_on_finalize: bool,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                  | Default                          |
    /// |--------------------------|----------------------------------|
    /// | `HOST`                   | `0.0.0.0`                        |
    /// | `PORT`                   | `3000`                           |
    /// | `CORS_ORIGINS`           | `http://localhost:5173`          |
    /// | `REQUEST_TIMEOUT_SECS`   | `30`                             |
    /// | `DATABASE_URL`           | `sqlite://tradepost.db?mode=rwc` |
    /// | `UPLOAD_DELAY_MS`        | `500`                            |
    /// | `DETAILS_DELAY_MS`       | `800`                            |
    /// | `SUBMIT_DELAY_MS`        | `1500`                           |
    /// | `REVALIDATE_ON_FINALIZE` | `false`                          |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs = env_u64("REQUEST_TIMEOUT_SECS", 30);

        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://tradepost.db?mode=rwc".into());

        let revalidate_on_finalize: bool = std::env::var("REVALIDATE_ON_FINALIZE")
            .unwrap_or_else(|_| "false".into())
            .parse()
            .expect("REVALIDATE_ON_FINALIZE must be true or false");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            database_url,
            upload_delay_ms: env_u64("UPLOAD_DELAY_MS", 500),
            details_delay_ms: env_u64("DETAILS_DELAY_MS", 800),
            submit_delay_ms: env_u64("SUBMIT_DELAY_MS", 1500),
            revalidate_on_finalize,
        }
    }

    /// The wizard settings carried by this configuration.
    pub fn flow_config(&self) -> FlowConfig {
        FlowConfig {
            delays: FlowDelays {
                upload: Duration::from_millis(self.upload_delay_ms),
                details: Duration::from_millis(self.details_delay_ms),
                submit: Duration::from_millis(self.submit_delay_ms),
            },
            revalidate_on_finalize: self.revalidate_on_finalize,
        }
    }
}

fn env_u64(name: &str, default: u64) -> u64 {
    match std::env::var(name) {
        Ok(raw) => raw
            .parse()
            .unwrap_or_else(|_| panic!("{name} must be a valid u64")),
        Err(_) => default,
    }
}
