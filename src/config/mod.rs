// ABOUTME: Configuration management module for server settings
// ABOUTME: Environment-only configuration for the HTTP listener, ML service, and CORS
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! All settings come from environment variables; there is no config file.

/// Environment and server configuration
pub mod environment;

pub use environment::{Environment, MlApiConfig, ServerConfig};
