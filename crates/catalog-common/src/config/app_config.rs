//! Application configuration structs
//!
//! Loaded from environment variables, with `.env` support for local runs.

use serde::Deserialize;
use std::env;
use std::str::FromStr;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub otp: OtpConfig,
    pub mail: MailConfig,
    pub rate_limit: RateLimitConfig,
    pub cors: CorsConfig,
    pub storage: StorageConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default)]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "production" => Ok(Self::Production),
            "staging" => Ok(Self::Staging),
            "development" => Ok(Self::Development),
            other => Err(ConfigError::InvalidValue("APP_ENV", other.to_string())),
        }
    }
}

/// HTTP listener configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

/// Session token configuration
#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    /// Session lifetime in seconds
    #[serde(default = "default_session_expiry")]
    pub session_expiry: i64,
}

/// One-time passcode limits
#[derive(Debug, Clone, Deserialize)]
pub struct OtpConfig {
    #[serde(default = "default_otp_max_per_hour")]
    pub max_per_hour: i32,
    #[serde(default = "default_otp_validity_secs")]
    pub validity_secs: i64,
}

/// Outbound mail provider
#[derive(Debug, Clone, Deserialize)]
pub struct MailConfig {
    #[serde(default = "default_mail_api_url")]
    pub api_url: String,
    /// Without a key, mail is logged instead of delivered
    pub api_key: Option<String>,
    #[serde(default = "default_mail_from")]
    pub from: String,
}

/// Rate limiting configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
    #[serde(default = "default_requests_per_second")]
    pub requests_per_second: u32,
    #[serde(default = "default_burst")]
    pub burst: u32,
}

/// CORS configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

/// Uploaded document storage
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_upload_dir")]
    pub upload_dir: String,
    /// Prefix for the public URL of stored objects
    #[serde(default = "default_public_base_url")]
    pub public_base_url: String,
    #[serde(default = "default_max_file_size")]
    pub max_file_size_mb: u32,
}

impl StorageConfig {
    #[must_use]
    pub fn max_file_size_bytes(&self) -> usize {
        self.max_file_size_mb as usize * 1024 * 1024
    }
}

// Default value functions
fn default_app_name() -> String {
    "catalog-api".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_max_connections() -> u32 {
    20
}

fn default_min_connections() -> u32 {
    5
}

fn default_session_expiry() -> i64 {
    2_592_000 // 30 days
}

fn default_otp_max_per_hour() -> i32 {
    5
}

fn default_otp_validity_secs() -> i64 {
    300
}

fn default_mail_api_url() -> String {
    "https://api.resend.com/emails".to_string()
}

fn default_mail_from() -> String {
    "no-reply@localhost".to_string()
}

fn default_requests_per_second() -> u32 {
    10
}

fn default_burst() -> u32 {
    50
}

fn default_upload_dir() -> String {
    "./uploads".to_string()
}

fn default_public_base_url() -> String {
    "http://127.0.0.1:8080/uploads".to_string()
}

fn default_max_file_size() -> u32 {
    10
}

/// Read an optional variable, falling back when unset or unparsable
fn var_or<T: FromStr>(key: &str, default: impl FnOnce() -> T) -> T {
    env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(default)
}

fn required(key: &'static str) -> Result<String, ConfigError> {
    env::var(key).map_err(|_| ConfigError::MissingVar(key))
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Ok(Self {
            app: AppSettings {
                name: env::var("APP_NAME").unwrap_or_else(|_| default_app_name()),
                env: env::var("APP_ENV")
                    .ok()
                    .map(|s| s.parse())
                    .transpose()?
                    .unwrap_or_default(),
            },
            api: ServerConfig {
                host: env::var("API_HOST").unwrap_or_else(|_| default_host()),
                port: required("API_PORT")?
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue("API_PORT", "not a port".into()))?,
            },
            database: DatabaseConfig {
                url: required("DATABASE_URL")?,
                max_connections: var_or("DATABASE_MAX_CONNECTIONS", default_max_connections),
                min_connections: var_or("DATABASE_MIN_CONNECTIONS", default_min_connections),
            },
            jwt: JwtConfig {
                secret: required("JWT_SECRET")?,
                session_expiry: var_or("JWT_SESSION_EXPIRY", default_session_expiry),
            },
            otp: OtpConfig {
                max_per_hour: var_or("OTP_MAX_PER_HOUR", default_otp_max_per_hour),
                validity_secs: var_or("OTP_VALIDITY_SECS", default_otp_validity_secs),
            },
            mail: MailConfig {
                api_url: env::var("MAIL_API_URL").unwrap_or_else(|_| default_mail_api_url()),
                api_key: env::var("MAIL_API_KEY").ok().filter(|k| !k.is_empty()),
                from: env::var("MAIL_FROM").unwrap_or_else(|_| default_mail_from()),
            },
            rate_limit: RateLimitConfig {
                requests_per_second: var_or(
                    "RATE_LIMIT_REQUESTS_PER_SECOND",
                    default_requests_per_second,
                ),
                burst: var_or("RATE_LIMIT_BURST", default_burst),
            },
            cors: CorsConfig {
                allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                    .ok()
                    .map(|s| s.split(',').map(str::trim).map(String::from).collect())
                    .unwrap_or_default(),
            },
            storage: StorageConfig {
                upload_dir: env::var("UPLOAD_DIR").unwrap_or_else(|_| default_upload_dir()),
                public_base_url: env::var("PUBLIC_BASE_URL")
                    .unwrap_or_else(|_| default_public_base_url()),
                max_file_size_mb: var_or("MAX_FILE_SIZE_MB", default_max_file_size),
            },
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
