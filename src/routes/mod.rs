// ABOUTME: Route module organization for the Hercules HTTP API
// ABOUTME: Assembles domain route groups into one axum router with tracing and CORS layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! HTTP routes
//!
//! Each domain exposes a `*Routes` struct whose `routes` function returns a
//! router with its state already attached. Errors from handlers render as
//! `{"error": {"code", "message"}}` with the code's HTTP status.

/// Liveness and readiness
pub mod health;
/// Fitness logs and dashboard
pub mod logs;
/// Onboarding submission
pub mod onboarding;
/// Profile reads, signup rows, readiness, ML payload
pub mod profile;
/// Recommendation proxy
pub mod recommendations;
/// Unit parsing and answer normalization
pub mod units;

pub use health::HealthRoutes;
pub use logs::LogRoutes;
pub use onboarding::OnboardingRoutes;
pub use profile::ProfileRoutes;
pub use recommendations::RecommendationRoutes;
pub use units::UnitRoutes;

use crate::middleware::{request_trace_layer, setup_cors};
use crate::resources::ServerResources;
use axum::Router;
use std::sync::Arc;

/// Every API route, without middleware
pub fn api_routes(resources: &Arc<ServerResources>) -> Router {
    Router::new()
        .merge(HealthRoutes::routes())
        .merge(UnitRoutes::routes())
        .merge(ProfileRoutes::routes(resources.clone()))
        .merge(OnboardingRoutes::routes(resources.clone()))
        .merge(RecommendationRoutes::routes(resources.clone()))
        .merge(LogRoutes::routes(resources.clone()))
}

/// Full application router with tracing and CORS
pub fn build_router(resources: &Arc<ServerResources>) -> Router {
    api_routes(resources)
        .layer(request_trace_layer())
        .layer(setup_cors(&resources.config))
}
