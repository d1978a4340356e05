//! Configuration module for the CMS backend.
//!
//! All configuration is loaded from environment variables. The store connection
//! settings are required; everything else has a sensible default.

use std::env;
use std::net::SocketAddr;

use thiserror::Error;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8001";
const DEFAULT_SMTP_PORT: u16 = 587;

/// Startup configuration failure.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
    #[error("invalid value {value:?} for {key}")]
    Invalid { key: &'static str, value: String },
}

/// Allowed cross-origin callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigins {
    Any,
    List(Vec<String>),
}

/// Outgoing mail settings for contact notifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    /// Inbox that receives contact notifications
    pub notify_to: String,
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// MongoDB connection string
    pub mongo_url: String,
    /// MongoDB database name
    pub db_name: String,
    /// Allowed origins for cross-origin access
    pub cors_origins: CorsOrigins,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Contact notification mailer, disabled when unset
    pub smtp: Option<SmtpConfig>,
}

impl Config {
    /// Load configuration from environment variables (and `.env`, if present).
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let mongo_url = var("MONGO_URL").ok_or(ConfigError::Missing("MONGO_URL"))?;
        let db_name = var("DB_NAME").ok_or(ConfigError::Missing("DB_NAME"))?;

        let cors_origins =
            parse_origins(&var("CORS_ORIGINS").unwrap_or_else(|| "*".to_string()));

        let bind_raw = var("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw.parse().map_err(|_| ConfigError::Invalid {
            key: "BIND_ADDR",
            value: bind_raw.clone(),
        })?;

        let log_level = var("LOG_LEVEL").unwrap_or_else(|| "info".to_string());

        let smtp = match (var("SMTP_HOST"), var("SMTP_USERNAME"), var("SMTP_PASSWORD")) {
            (Some(host), Some(username), Some(password)) => {
                let port = match var("SMTP_PORT") {
                    Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                        key: "SMTP_PORT",
                        value: raw.clone(),
                    })?,
                    None => DEFAULT_SMTP_PORT,
                };
                let notify_to = var("CONTACT_NOTIFY_TO").unwrap_or_else(|| username.clone());
                Some(SmtpConfig {
                    host,
                    port,
                    username,
                    password,
                    notify_to,
                })
            }
            _ => None,
        };

        Ok(Self {
            mongo_url,
            db_name,
            cors_origins,
            bind_addr,
            log_level,
            smtp,
        })
    }
}

fn parse_origins(raw: &str) -> CorsOrigins {
    let origins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect();

    if origins.is_empty() || origins.iter().any(|origin| origin == "*") {
        CorsOrigins::Any
    } else {
        CorsOrigins::List(origins)
    }
}
