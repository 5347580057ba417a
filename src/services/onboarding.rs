// ABOUTME: Onboarding submission: map answers, validate ranges, merge onto the signup row
// ABOUTME: Rejects submissions for users without a profile row
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::database_plugins::ProfileStore;
use crate::errors::{AppError, AppResult, ErrorCode};
use hercules_core::models::{OnboardingAnswers, ProfileRecord};
use hercules_intelligence::{transform_profile_data, validate_profile_for_persistence};
use std::sync::Arc;
use tracing::{info, warn};

/// Message returned when onboarding is attempted before signup
pub const SIGNUP_REQUIRED: &str = "Profile not found. Please complete signup first.";

/// Onboarding workflow
#[derive(Clone)]
pub struct OnboardingService {
    profiles: Arc<dyn ProfileStore>,
}

impl OnboardingService {
    /// Create the service over a profile store
    #[must_use]
    pub fn new(profiles: Arc<dyn ProfileStore>) -> Self {
        Self { profiles }
    }

    /// Persist a completed onboarding questionnaire
    ///
    /// # Errors
    ///
    /// `ResourceNotFound` when the user has no signup row, the first failed
    /// range check from validation, or a store failure.
    pub async fn complete(
        &self,
        user_id: &str,
        answers: &OnboardingAnswers,
    ) -> AppResult<ProfileRecord> {
        if self.profiles.fetch_profile(user_id).await?.is_none() {
            warn!(user.id = %user_id, "Onboarding submitted without a profile row");
            return Err(AppError::new(ErrorCode::ResourceNotFound, SIGNUP_REQUIRED));
        }

        let record = transform_profile_data(answers, user_id);
        validate_profile_for_persistence(&record)?;

        let stored = self.profiles.update_profile(&record).await?;
        info!(user.id = %user_id, "Onboarding completed");

        Ok(stored)
    }
}
