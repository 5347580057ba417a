// ABOUTME: Integration tests for environment-driven server configuration
// ABOUTME: Mutates process environment under serial_test to check defaults, overrides, and parse errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use hercules_server::config::{Environment, ServerConfig};
use hercules_server::errors::ErrorCode;
use serial_test::serial;
use std::env;

const VARS: [&str; 7] = [
    "HOST",
    "HTTP_PORT",
    "ENVIRONMENT",
    "ML_API_URL",
    "ML_API_TIMEOUT_SECS",
    "ML_API_CONNECT_TIMEOUT_SECS",
    "CORS_ALLOWED_ORIGINS",
];

fn clear_env() {
    for key in VARS {
        env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_env();

    let config = ServerConfig::from_env().unwrap();

    assert_eq!(config, ServerConfig::default());
    assert_eq!(config.bind_address(), "127.0.0.1:8081");
    assert_eq!(config.ml_api.base_url, "http://localhost:5001/api");
    assert_eq!(config.cors_allowed_origins, vec!["http://localhost:5173"]);
}

#[test]
#[serial]
fn test_overrides_from_environment() {
    clear_env();
    env::set_var("HOST", "0.0.0.0");
    env::set_var("HTTP_PORT", "9000");
    env::set_var("ENVIRONMENT", "PROD");
    env::set_var("ML_API_URL", "http://ml.internal:5001/api/");
    env::set_var("ML_API_TIMEOUT_SECS", "12");
    env::set_var(
        "CORS_ALLOWED_ORIGINS",
        "https://app.example.com, https://staging.example.com",
    );

    let config = ServerConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.bind_address(), "0.0.0.0:9000");
    assert_eq!(config.environment, Environment::Production);
    assert!(config.environment.is_production());
    assert_eq!(config.ml_api.base_url, "http://ml.internal:5001/api");
    assert_eq!(config.ml_api.timeout_secs, 12);
    assert_eq!(config.ml_api.connect_timeout_secs, 10);
    assert_eq!(
        config.cors_allowed_origins,
        vec!["https://app.example.com", "https://staging.example.com"]
    );
}

#[test]
#[serial]
fn test_invalid_port_is_config_error() {
    clear_env();
    env::set_var("HTTP_PORT", "eighty");

    let error = ServerConfig::from_env().unwrap_err();
    clear_env();

    assert_eq!(error.code, ErrorCode::ConfigInvalid);
    assert!(error.message.contains("HTTP_PORT"));
    assert!(error.message.contains("eighty"));
}

#[test]
fn test_environment_parsing() {
    assert_eq!(
        Environment::from_str_or_default("testing"),
        Environment::Testing
    );
    assert_eq!(
        Environment::from_str_or_default("staging"),
        Environment::Development
    );
    assert_eq!(Environment::Production.to_string(), "production");
}
