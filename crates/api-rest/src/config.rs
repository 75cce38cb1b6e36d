//! API configuration.

use std::path::PathBuf;
use std::time::Duration;

/// API configuration, sourced from the process environment.
///
/// The database connection target lives in
/// `paramed_infrastructure::database::DatabaseConfig`; this struct covers the
/// HTTP surface only.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Server host to bind to
    pub host: String,

    /// Server port to bind to
    pub port: u16,

    /// CORS allowed origins, an explicit allow-list (never a wildcard)
    pub cors_allowed_origins: Vec<String>,

    /// Directory the static front-end assets are served from
    pub public_dir: PathBuf,

    /// Request timeout in seconds
    pub request_timeout_seconds: u64,

    /// Log level used when RUST_LOG is not set
    pub log_level: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            cors_allowed_origins: vec![
                "http://127.0.0.1:5500".to_string(),
                "http://localhost:5173".to_string(),
            ],
            public_dir: PathBuf::from("public"),
            request_timeout_seconds: 30,
            log_level: "info".to_string(),
        }
    }
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// Every value has a default; the only variable that can abort startup is
    /// `DATABASE_URL`, checked by the infrastructure layer.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: std::env::var("HOST").unwrap_or(defaults.host),
            port: std::env::var("PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.port),
            cors_allowed_origins: std::env::var("CORS_ALLOWED_ORIGINS")
                .ok()
                .map(|s| s.split(',').map(|o| o.trim().to_string()).collect())
                .unwrap_or(defaults.cors_allowed_origins),
            public_dir: std::env::var("PUBLIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.public_dir),
            request_timeout_seconds: std::env::var("REQUEST_TIMEOUT_SECONDS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.request_timeout_seconds),
            log_level: std::env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
        }
    }

    /// Get request timeout as Duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }

    /// Get server address
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
