// ABOUTME: Shared utilities for the server crate
// ABOUTME: Currently the configured HTTP client factory used by outbound collaborators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// HTTP client construction with timeouts
pub mod http_client;
