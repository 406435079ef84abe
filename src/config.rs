//! Configuration loading and constants.
//!
//! `AppConfig` is built once at startup: defaults, then an optional TOML file,
//! then environment overrides. Both binaries receive the resulting value and
//! pass the relevant section into their server/client constructors; nothing
//! else in the crate reads the environment.

use const_format::formatcp;
use serde::Deserialize;
use std::path::Path;

// =============================================================================
// HTTP Response Cache Control
// =============================================================================

/// Greetings and uptime are produced per request and must never be reused
pub const CACHE_CONTROL_API: &str = "no-store";

/// Rendered pages reflect a single fetch outcome
pub const CACHE_CONTROL_PAGE: &str = "no-store";

// =============================================================================
// Defaults
// =============================================================================

/// Default backend listen port when neither file nor `PORT` sets one
pub const DEFAULT_BACKEND_PORT: u16 = 3000;

/// Default frontend listen port
pub const DEFAULT_FRONTEND_PORT: u16 = 3001;

/// Default bind address for both servers
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default backend URL the frontend calls
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Default timeout for the frontend's call to the backend
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Drain period for in-flight connections after a shutdown signal
pub const SHUTDOWN_GRACE_SECS: u64 = 30;

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "greeter=debug,tower_http=debug";

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

/// User-Agent sent on outbound requests
pub const USER_AGENT: &str = formatcp!("greeter/{}", env!("CARGO_PKG_VERSION"));

// =============================================================================
// Environment variables
// =============================================================================

pub const ENV_PORT: &str = "PORT";
pub const ENV_HOST: &str = "HOST";
pub const ENV_FRONTEND_ORIGIN: &str = "FRONTEND_ORIGIN";
pub const ENV_FRONTEND_PORT: &str = "FRONTEND_PORT";
pub const ENV_API_URL: &str = "API_URL";
/// Older deployments set the backend URL under the build-time name
pub const ENV_API_URL_LEGACY: &str = "REACT_APP_API_URL";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub frontend: FrontendConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Backend HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "BackendConfig::default_port")]
    pub port: u16,
    /// The single origin allowed to make cross-origin requests.
    /// When unset, any origin is allowed.
    pub frontend_origin: Option<String>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: Self::default_port(),
            frontend_origin: None,
        }
    }
}

impl BackendConfig {
    fn default_port() -> u16 {
        DEFAULT_BACKEND_PORT
    }
}

/// Frontend HTTP server and backend client configuration
#[derive(Debug, Clone, Deserialize)]
pub struct FrontendConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "FrontendConfig::default_port")]
    pub port: u16,
    /// URL fetched when the user asks for a message
    #[serde(default = "FrontendConfig::default_api_url")]
    pub api_url: String,
    #[serde(default = "FrontendConfig::default_request_timeout")]
    pub request_timeout_seconds: u64,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: Self::default_port(),
            api_url: Self::default_api_url(),
            request_timeout_seconds: Self::default_request_timeout(),
        }
    }
}

impl FrontendConfig {
    fn default_port() -> u16 {
        DEFAULT_FRONTEND_PORT
    }

    fn default_api_url() -> String {
        DEFAULT_API_URL.to_string()
    }

    fn default_request_timeout() -> u64 {
        DEFAULT_REQUEST_TIMEOUT_SECS
    }
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log format: "text" (human-readable, default) or "json" (structured)
    #[serde(default = "LoggingConfig::default_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_LOG_FORMAT.to_string(),
        }
    }
}

impl LoggingConfig {
    fn default_format() -> String {
        DEFAULT_LOG_FORMAT.to_string()
    }

    pub fn is_json(&self) -> bool {
        self.format == "json"
    }
}

impl AppConfig {
    /// Load configuration for a binary: `.env`, optional TOML file, then the
    /// process environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        check_dotenv(dotenvy::dotenv())?;

        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Apply environment overrides using `lookup` as the variable source.
    /// Empty values are treated as unset.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(port) = get(ENV_PORT) {
            self.backend.port = parse_port(ENV_PORT, &port)?;
        }
        if let Some(host) = get(ENV_HOST) {
            self.backend.host = host;
        }
        if let Some(origin) = get(ENV_FRONTEND_ORIGIN) {
            self.backend.frontend_origin = Some(origin);
        }
        if let Some(port) = get(ENV_FRONTEND_PORT) {
            self.frontend.port = parse_port(ENV_FRONTEND_PORT, &port)?;
        }
        if let Some(url) = get(ENV_API_URL).or_else(|| get(ENV_API_URL_LEGACY)) {
            self.frontend.api_url = url;
        }

        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.backend.host.trim().is_empty() || self.frontend.host.trim().is_empty() {
            return Err(ConfigError::Validation(
                "backend.host and frontend.host must not be empty".to_string(),
            ));
        }
        if self.backend.port == 0 {
            return Err(ConfigError::Validation(
                "backend.port must be between 1 and 65535".to_string(),
            ));
        }
        if self.frontend.port == 0 {
            return Err(ConfigError::Validation(
                "frontend.port must be between 1 and 65535".to_string(),
            ));
        }

        if let Some(origin) = &self.backend.frontend_origin {
            if http::HeaderValue::from_str(origin).is_err() {
                return Err(ConfigError::Validation(format!(
                    "frontend_origin is not a valid Origin value: {:?}",
                    origin
                )));
            }
        }

        let url = reqwest::Url::parse(&self.frontend.api_url).map_err(|e| {
            ConfigError::Validation(format!(
                "frontend.api_url {:?} is not a valid URL: {}",
                self.frontend.api_url, e
            ))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::Validation(format!(
                "frontend.api_url must use http or https, got {:?}",
                url.scheme()
            )));
        }

        if self.frontend.request_timeout_seconds == 0 {
            return Err(ConfigError::Validation(
                "frontend.request_timeout_seconds must be greater than zero".to_string(),
            ));
        }

        if !matches!(self.logging.format.as_str(), "text" | "json") {
            return Err(ConfigError::Validation(format!(
                "logging.format must be \"text\" or \"json\", got {:?}",
                self.logging.format
            )));
        }

        Ok(())
    }
}

/// A missing `.env` is normal outside development; a malformed one is not.
fn check_dotenv<T>(result: Result<T, dotenvy::Error>) -> Result<(), ConfigError> {
    match result {
        Ok(_) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(ConfigError::Dotenv(e)),
    }
}

fn parse_port(key: &str, value: &str) -> Result<u16, ConfigError> {
    match value.trim().parse::<u16>() {
        Ok(port) if port != 0 => Ok(port),
        _ => Err(ConfigError::Validation(format!(
            "{} must be a port number between 1 and 65535, got {:?}",
            key, value
        ))),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Failed to load .env file: {0}")]
    Dotenv(#[from] dotenvy::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
}
