//! Configuration module
//!
//! Explicit configuration for the proxy service, built once from the
//! environment and injected into the router state. Handlers never read
//! environment variables directly.

use std::env;

const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
const DEFAULT_SERVER_PORT: u16 = 3000;
/// Both the route-handling allowance and the outbound abort timer.
const DEFAULT_BACKEND_TIMEOUT_SECS: u64 = 300;
const DEFAULT_MAX_IMAGE_SIZE_BYTES: usize = 10 * 1024 * 1024;

/// Proxy service configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    /// Base URL of the enhancement backend (no trailing slash)
    pub backend_url: String,
    /// Cancellation window for the outbound backend call, in seconds
    pub backend_timeout_secs: u64,
    pub max_image_size_bytes: usize,
    /// Allowed CORS origins; empty means allow any origin
    pub cors_origins: Vec<String>,
    pub environment: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: DEFAULT_SERVER_PORT,
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            backend_timeout_secs: DEFAULT_BACKEND_TIMEOUT_SECS,
            max_image_size_bytes: DEFAULT_MAX_IMAGE_SIZE_BYTES,
            cors_origins: Vec::new(),
            environment: "development".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the environment. Call `dotenvy::dotenv()`
    /// before this when a `.env` file should be honored.
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = Config::default();

        let server_port = match env::var("SERVER_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| anyhow::anyhow!("SERVER_PORT must be a port number, got '{}'", raw))?,
            Err(_) => defaults.server_port,
        };

        let backend_url = env::var("BACKEND_URL")
            .unwrap_or(defaults.backend_url)
            .trim_end_matches('/')
            .to_string();

        let backend_timeout_secs = match env::var("BACKEND_TIMEOUT_SECS") {
            Ok(raw) => raw.parse::<u64>().map_err(|_| {
                anyhow::anyhow!("BACKEND_TIMEOUT_SECS must be an integer, got '{}'", raw)
            })?,
            Err(_) => defaults.backend_timeout_secs,
        };

        let max_image_size_bytes = match env::var("MAX_IMAGE_SIZE_BYTES") {
            Ok(raw) => raw.parse::<usize>().map_err(|_| {
                anyhow::anyhow!("MAX_IMAGE_SIZE_BYTES must be an integer, got '{}'", raw)
            })?,
            Err(_) => defaults.max_image_size_bytes,
        };

        let cors_origins = env::var("CORS_ORIGINS")
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty() && s != "*")
            .collect();

        let environment =
            env::var("ENVIRONMENT").unwrap_or_else(|_| defaults.environment.clone());

        Ok(Self {
            server_port,
            backend_url,
            backend_timeout_secs,
            max_image_size_bytes,
            cors_origins,
            environment,
        })
    }

    /// Full URL of the backend enhance endpoint.
    pub fn backend_enhance_url(&self) -> String {
        format!("{}/api/enhance", self.backend_url.trim_end_matches('/'))
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
