// ABOUTME: Main library entry point for the Hercules fitness profile service
// ABOUTME: Wires profile normalization, ML readiness, recommendations, and fitness logs behind an HTTP API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Hercules Server
//!
//! HTTP service around the Hercules profile core. Users sign up, answer the
//! onboarding questionnaire, and the service stores a normalized profile.
//! Once the profile carries every field the recommendation model needs, the
//! service builds the ML request payload and proxies recommendation calls.
//! Workout, nutrition, and progress logs feed a dashboard summary.
//!
//! ## Architecture
//!
//! - **hercules-core**: errors, constants, and data models
//! - **hercules-intelligence**: unit parsing, profile mapping, completeness,
//!   validation, and log aggregation (pure functions)
//! - **services**: workflows over injected stores and the recommendation provider
//! - **routes**: axum handlers grouped by domain
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use hercules_server::config::ServerConfig;
//! use hercules_server::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("Hercules listening on {}", config.bind_address());
//!     Ok(())
//! }
//! ```

/// Environment-driven configuration
pub mod config;

/// Persistence traits and the in-memory backend
pub mod database_plugins;

/// Error types re-exported from the core crate
pub mod errors;

/// Clients for external services
pub mod external;

/// Structured logging setup
pub mod logging;

/// HTTP middleware layers
pub mod middleware;

/// Shared handler state
pub mod resources;

/// HTTP route groups
pub mod routes;

/// Business workflows
pub mod services;

/// Small shared helpers
pub mod utils;

pub use hercules_core::{constants, models};
pub use hercules_intelligence as intelligence;
