// ABOUTME: Error types for the server crate, re-exported from hercules-core
// ABOUTME: Handlers and services return AppResult so failures render as the JSON error envelope
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Error handling
//!
//! `AppError` lives in `hercules-core` so the pure crates can share it; this
//! module re-exports it under the path the rest of the server uses.

pub use hercules_core::errors::{
    AppError, AppResult, ErrorCode, ErrorResponse, ErrorResponseDetails,
};
