use std::time::Duration;

use thiserror::Error;

/// Report windows, in days. Fixed by the product: week, month, quarter.
pub const REPORT_WINDOW_DAYS: [i64; 3] = [7, 30, 90];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),
    #[error("invalid value for {name}: {message}")]
    InvalidValue { name: String, message: String },
    #[error("failed to parse {name} as integer: {source}")]
    ParseInt {
        name: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    // Instagram app credentials
    pub app_id: String,
    pub app_secret: String,

    // OAuth surface
    /// Hosted Instagram login/authorize URL shown on the landing page.
    pub embed_url: String,
    /// Redirect URI registered with the Instagram app.
    pub redirect_uri: String,

    // Graph API
    pub api_version: String,
    /// Base URL for the OAuth token endpoint (api.instagram.com).
    pub oauth_base_url: String,
    /// Base URL for Graph API calls (graph.instagram.com).
    pub graph_base_url: String,
    pub request_timeout: Duration,
    pub media_page_size: u32,

    // Web Server
    pub web_host: String,
    pub web_port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if required environment variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            // Instagram app credentials
            app_id: required_env("INSTA_APP_ID")?,
            app_secret: required_env("INSTA_APP_SECRET")?,

            // OAuth surface
            embed_url: required_env("INSTA_EMBED_URL")?,
            redirect_uri: env_or_default(
                "INSTA_REDIRECT_URI",
                "https://facebookflowbasttl.streamlit.app/redirect",
            ),

            // Graph API
            api_version: env_or_default("INSTA_API_VERSION", "v24.0"),
            oauth_base_url: env_or_default("INSTA_OAUTH_BASE_URL", "https://api.instagram.com"),
            graph_base_url: env_or_default("INSTA_GRAPH_BASE_URL", "https://graph.instagram.com"),
            request_timeout: Duration::from_secs(parse_env_u64(
                "INSTA_REQUEST_TIMEOUT_SECS",
                10,
            )?),
            media_page_size: parse_env_u32("INSTA_MEDIA_PAGE_SIZE", 50)?,

            // Web Server
            web_host: env_or_default("WEB_HOST", "0.0.0.0"),
            web_port: parse_env_u16("WEB_PORT", 8080)?,
        })
    }

    /// Validate that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.app_id.is_empty() {
            return Err(ConfigError::InvalidValue {
                name: "INSTA_APP_ID".to_string(),
                message: "cannot be empty".to_string(),
            });
        }
        if self.app_secret.is_empty() {
            return Err(ConfigError::InvalidValue {
                name: "INSTA_APP_SECRET".to_string(),
                message: "cannot be empty".to_string(),
            });
        }
        if url::Url::parse(&self.embed_url).is_err() {
            return Err(ConfigError::InvalidValue {
                name: "INSTA_EMBED_URL".to_string(),
                message: "must be a valid URL".to_string(),
            });
        }
        if url::Url::parse(&self.redirect_uri).is_err() {
            return Err(ConfigError::InvalidValue {
                name: "INSTA_REDIRECT_URI".to_string(),
                message: "must be a valid URL".to_string(),
            });
        }
        if self.media_page_size == 0 {
            return Err(ConfigError::InvalidValue {
                name: "INSTA_MEDIA_PAGE_SIZE".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Baseline configuration for tests. Point the base URLs at a mock
    /// server with struct update syntax.
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            app_id: "test-app-id".to_string(),
            app_secret: "test-app-secret".to_string(),
            embed_url: "https://example.com/embed".to_string(),
            redirect_uri: "https://example.com/redirect".to_string(),
            api_version: "v24.0".to_string(),
            oauth_base_url: "https://api.instagram.com".to_string(),
            graph_base_url: "https://graph.instagram.com".to_string(),
            request_timeout: Duration::from_secs(10),
            media_page_size: 50,
            web_host: "127.0.0.1".to_string(),
            web_port: 0,
        }
    }
}

fn required_env(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn env_or_default(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parse_env_u64(name: &str, default: u64) -> Result<u64, ConfigError> {
    match std::env::var(name) {
        Ok(val) if !val.is_empty() => val.parse().map_err(|e| ConfigError::ParseInt {
            name: name.to_string(),
            source: e,
        }),
        _ => Ok(default),
    }
}

fn parse_env_u32(name: &str, default: u32) -> Result<u32, ConfigError> {
    match std::env::var(name) {
        Ok(val) if !val.is_empty() => val.parse().map_err(|e| ConfigError::ParseInt {
            name: name.to_string(),
            source: e,
        }),
        _ => Ok(default),
    }
}

fn parse_env_u16(name: &str, default: u16) -> Result<u16, ConfigError> {
    match std::env::var(name) {
        Ok(val) if !val.is_empty() => val.parse().map_err(|e| ConfigError::ParseInt {
            name: name.to_string(),
            source: e,
        }),
        _ => Ok(default),
    }
}
