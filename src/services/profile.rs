// ABOUTME: Profile reads, signup rows, and recommendation readiness
// ABOUTME: Produces the ML request payload only for profiles that pass the completeness check
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::database_plugins::ProfileStore;
use crate::errors::{AppError, AppResult};
use hercules_core::models::{MlRequestProfile, ProfileRecord};
use hercules_intelligence::{get_missing_fields, transform_profile, ProfileReadiness};
use std::sync::Arc;
use tracing::debug;

/// Profile access
#[derive(Clone)]
pub struct ProfileService {
    profiles: Arc<dyn ProfileStore>,
}

impl ProfileService {
    /// Create the service over a profile store
    #[must_use]
    pub fn new(profiles: Arc<dyn ProfileStore>) -> Self {
        Self { profiles }
    }

    /// Create the empty row onboarding will later fill
    ///
    /// # Errors
    ///
    /// `ResourceAlreadyExists` when the user already has a row.
    pub async fn sign_up(&self, user_id: &str, username: Option<String>) -> AppResult<ProfileRecord> {
        if user_id.trim().is_empty() {
            return Err(AppError::invalid_input("User id must not be empty"));
        }

        let record = ProfileRecord {
            username,
            ..ProfileRecord::new(user_id)
        };
        self.profiles.create_profile(&record).await
    }

    /// Stored profile
    ///
    /// # Errors
    ///
    /// `ResourceNotFound` when the user has no row.
    pub async fn fetch(&self, user_id: &str) -> AppResult<ProfileRecord> {
        self.profiles
            .fetch_profile(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("Profile"))
    }

    /// Completeness report; a missing row is reported, not an error
    ///
    /// # Errors
    ///
    /// Store failures only.
    pub async fn readiness(&self, user_id: &str) -> AppResult<ProfileReadiness> {
        let profile = self.profiles.fetch_profile(user_id).await?;
        Ok(ProfileReadiness::evaluate(profile.as_ref()))
    }

    /// ML request payload for a complete profile
    ///
    /// # Errors
    ///
    /// `ResourceNotFound` without a row, `ProfileIncomplete` (with the
    /// missing labels as details) when required fields are absent.
    pub async fn ml_payload(&self, user_id: &str) -> AppResult<MlRequestProfile> {
        let profile = self.fetch(user_id).await?;

        let missing = get_missing_fields(Some(&profile));
        if !missing.is_empty() {
            debug!(user.id = %user_id, missing = ?missing, "Profile not ready for recommendations");
            return Err(AppError::profile_incomplete(&missing));
        }

        Ok(transform_profile(&profile))
    }
}
