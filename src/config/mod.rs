use crate::core::{AppError, Result};
use std::env;

pub mod server;

pub use server::ServerConfig;

pub const DEFAULT_CHAPA_BASE_URL: &str = "https://api.chapa.co";

/// Main application configuration, loaded once at startup
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub server: ServerConfig,
    pub chapa: ChapaConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
    pub log_json: bool,
}

/// Chapa gateway credentials and endpoint
#[derive(Clone)]
pub struct ChapaConfig {
    /// `None` when CHAPA_SECRET_KEY is unset or blank. Checkout requests then
    /// fail with a configuration error; no placeholder key is ever substituted.
    pub secret_key: Option<String>,
    pub base_url: String,
}

impl ChapaConfig {
    pub fn is_configured(&self) -> bool {
        self.secret_key.is_some()
    }
}

impl std::fmt::Debug for ChapaConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChapaConfig")
            .field("secret_key", &self.secret_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        Self::from_source(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_source<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Config {
            app: AppConfig {
                env: lookup("APP_ENV").unwrap_or_else(|| "development".to_string()),
                log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
                log_json: lookup("LOG_JSON")
                    .map(|v| v == "true" || v == "1")
                    .unwrap_or(false),
            },
            server: ServerConfig::from_source(&lookup)?,
            chapa: ChapaConfig {
                secret_key: lookup("CHAPA_SECRET_KEY")
                    .map(|key| key.trim().to_string())
                    .filter(|key| !key.is_empty()),
                base_url: lookup("CHAPA_BASE_URL")
                    .map(|url| url.trim_end_matches('/').to_string())
                    .unwrap_or_else(|| DEFAULT_CHAPA_BASE_URL.to_string()),
            },
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(AppError::Configuration(
                "SERVER_PORT must be greater than 0".to_string(),
            ));
        }

        if self.server.workers == 0 {
            return Err(AppError::Configuration(
                "SERVER_WORKERS must be greater than 0".to_string(),
            ));
        }

        if !(self.chapa.base_url.starts_with("http://")
            || self.chapa.base_url.starts_with("https://"))
        {
            return Err(AppError::Configuration(format!(
                "CHAPA_BASE_URL must be an http(s) URL, got '{}'",
                self.chapa.base_url
            )));
        }

        Ok(())
    }
}
