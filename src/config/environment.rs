// ABOUTME: Environment-based configuration for the Hercules server
// ABOUTME: Reads HTTP, ML service, and CORS settings with typed parsing and defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use hercules_core::constants::network::{
    DEFAULT_CORS_ORIGIN, DEFAULT_HOST, DEFAULT_HTTP_PORT, DEFAULT_ML_API_URL,
    DEFAULT_ML_CONNECT_TIMEOUT_SECS, DEFAULT_ML_TIMEOUT_SECS,
};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;
use tracing::info;

/// Deployment environment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Recommendation service connection settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MlApiConfig {
    /// Base URL, without trailing slash
    pub base_url: String,
    /// Whole-request timeout in seconds
    pub timeout_secs: u64,
    /// Connect timeout in seconds
    pub connect_timeout_secs: u64,
}

impl Default for MlApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_ML_API_URL.to_owned(),
            timeout_secs: DEFAULT_ML_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_ML_CONNECT_TIMEOUT_SECS,
        }
    }
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// HTTP listener port
    pub http_port: u16,
    /// Deployment environment
    pub environment: Environment,
    /// Recommendation service
    pub ml_api: MlApiConfig,
    /// Origins allowed by the CORS layer
    pub cors_allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_owned(),
            http_port: DEFAULT_HTTP_PORT,
            environment: Environment::default(),
            ml_api: MlApiConfig::default(),
            cors_allowed_origins: vec![DEFAULT_CORS_ORIGIN.to_owned()],
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns a `ConfigInvalid` error when a numeric variable does not parse
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");

        let config = Self {
            host: env_var_or("HOST", DEFAULT_HOST),
            http_port: parse_env("HTTP_PORT", DEFAULT_HTTP_PORT)?,
            environment: Environment::from_str_or_default(&env_var_or(
                "ENVIRONMENT",
                "development",
            )),
            ml_api: MlApiConfig {
                base_url: env_var_or("ML_API_URL", DEFAULT_ML_API_URL)
                    .trim_end_matches('/')
                    .to_owned(),
                timeout_secs: parse_env("ML_API_TIMEOUT_SECS", DEFAULT_ML_TIMEOUT_SECS)?,
                connect_timeout_secs: parse_env(
                    "ML_API_CONNECT_TIMEOUT_SECS",
                    DEFAULT_ML_CONNECT_TIMEOUT_SECS,
                )?,
            },
            cors_allowed_origins: parse_origins(&env_var_or(
                "CORS_ALLOWED_ORIGINS",
                DEFAULT_CORS_ORIGIN,
            )),
        };

        info!(
            host = %config.host,
            http_port = config.http_port,
            environment = %config.environment,
            ml_api = %config.ml_api.base_url,
            "Configuration loaded"
        );

        Ok(config)
    }

    /// Socket address string for the HTTP listener
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn parse_env<T>(key: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| AppError::config_invalid(format!("Invalid {key} value '{raw}': {e}"))),
        Err(_) => Ok(default),
    }
}

/// Parse comma-separated CORS origins
fn parse_origins(origins_str: &str) -> Vec<String> {
    if origins_str == "*" {
        vec!["*".to_owned()]
    } else {
        origins_str
            .split(',')
            .map(|s| s.trim().to_owned())
            .filter(|s| !s.is_empty())
            .collect()
    }
}
