// ABOUTME: Shared server resources handed to every route group
// ABOUTME: Holds the injected stores, the recommendation provider, and the loaded configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::ServerConfig;
use crate::database_plugins::{FitnessLogStore, MemoryDatabase, ProfileStore};
use crate::external::{MlClient, RecommendationProvider};
use crate::services::{FitnessLogService, OnboardingService, ProfileService, RecommendationService};
use std::sync::Arc;

/// Collaborators shared across handlers
///
/// Every field is behind an `Arc`, so cloning is cheap and handlers never
/// hold a lock while awaiting.
#[derive(Clone)]
pub struct ServerResources {
    /// Profile persistence
    pub profiles: Arc<dyn ProfileStore>,
    /// Fitness log persistence
    pub logs: Arc<dyn FitnessLogStore>,
    /// Recommendation service
    pub recommender: Arc<dyn RecommendationProvider>,
    /// Loaded configuration
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Assemble resources from explicit collaborators
    #[must_use]
    pub fn new(
        profiles: Arc<dyn ProfileStore>,
        logs: Arc<dyn FitnessLogStore>,
        recommender: Arc<dyn RecommendationProvider>,
        config: Arc<ServerConfig>,
    ) -> Self {
        Self {
            profiles,
            logs,
            recommender,
            config,
        }
    }

    /// In-memory stores plus an HTTP client for the configured ML service
    #[must_use]
    pub fn in_memory(config: ServerConfig) -> Self {
        let database = Arc::new(MemoryDatabase::new());
        let recommender = Arc::new(MlClient::new(&config.ml_api));

        Self::new(
            database.clone(),
            database,
            recommender,
            Arc::new(config),
        )
    }

    /// Onboarding workflow over the profile store
    #[must_use]
    pub fn onboarding_service(&self) -> OnboardingService {
        OnboardingService::new(self.profiles.clone())
    }

    /// Profile reads and readiness
    #[must_use]
    pub fn profile_service(&self) -> ProfileService {
        ProfileService::new(self.profiles.clone())
    }

    /// Recommendation gating and proxying
    #[must_use]
    pub fn recommendation_service(&self) -> RecommendationService {
        RecommendationService::new(self.profiles.clone(), self.recommender.clone())
    }

    /// Log CRUD and dashboard aggregation
    #[must_use]
    pub fn fitness_log_service(&self) -> FitnessLogService {
        FitnessLogService::new(self.logs.clone(), self.profiles.clone())
    }
}
