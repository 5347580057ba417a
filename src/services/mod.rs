// ABOUTME: Service layer coordinating the pure profile core with injected collaborators
// ABOUTME: Route handlers stay thin and delegate every workflow here
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Services
//!
//! Each service owns `Arc`s to the collaborators it needs and is cheap to
//! construct per request.

/// Fitness log CRUD and dashboard aggregation
pub mod fitness_logs;
/// Onboarding submission workflow
pub mod onboarding;
/// Profile reads, signup rows, and ML readiness
pub mod profile;
/// Recommendation gating and proxying
pub mod recommendations;

pub use fitness_logs::{FitnessLogService, NewLogEntry};
pub use onboarding::OnboardingService;
pub use profile::ProfileService;
pub use recommendations::RecommendationService;
