// ABOUTME: Core types and constants for the Hercules fitness profile service
// ABOUTME: Foundation crate with error handling, unit constants, and shared data models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Hercules Core
//!
//! Foundation crate providing shared types and constants for the Hercules
//! fitness profile service. This crate is designed to change infrequently,
//! enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Unit conversion factors, profile bounds, and payload defaults
//! - **models**: Onboarding answers, profile records, ML payloads, and fitness logs

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models
pub mod models;
