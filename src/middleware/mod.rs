// ABOUTME: HTTP middleware for request tracing and CORS
// ABOUTME: Layers applied to the full router when the server starts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// CORS configuration
pub mod cors;
/// Request spans with correlation ids
pub mod tracing;

pub use cors::setup_cors;
pub use self::tracing::{request_trace_layer, RequestSpan};
