// ABOUTME: Persistence abstraction for profiles and fitness logs
// ABOUTME: Services receive these traits as injected collaborators; MemoryDatabase implements both
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppResult;
use async_trait::async_trait;
use hercules_core::models::{FitnessLog, LogKind, ProfileRecord};
use uuid::Uuid;

/// In-memory store backed by concurrent maps
pub mod memory;

pub use memory::MemoryDatabase;

/// Profile persistence
///
/// One row per user, keyed by `user_id`.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Fetch the profile row, `None` when the user has none
    async fn fetch_profile(&self, user_id: &str) -> AppResult<Option<ProfileRecord>>;

    /// Create the row written at signup
    ///
    /// Fails with `ResourceAlreadyExists` when a row is present.
    async fn create_profile(&self, profile: &ProfileRecord) -> AppResult<ProfileRecord>;

    /// Write the non-null fields of `profile` onto the existing row
    ///
    /// Fails with `ResourceNotFound` when there is no row to update. Returns
    /// the row as stored after the merge.
    async fn update_profile(&self, profile: &ProfileRecord) -> AppResult<ProfileRecord>;
}

/// Workout, nutrition, and progress log persistence
#[async_trait]
pub trait FitnessLogStore: Send + Sync {
    /// Entries of one kind for a user, newest first
    async fn list_logs(&self, user_id: &str, kind: LogKind) -> AppResult<Vec<FitnessLog>>;

    /// Store a fully-built entry and return it
    async fn insert_log(&self, log: FitnessLog) -> AppResult<FitnessLog>;

    /// Remove one entry owned by the user
    ///
    /// Fails with `ResourceNotFound` when the user has no such entry.
    async fn delete_log(&self, user_id: &str, kind: LogKind, log_id: Uuid) -> AppResult<()>;
}
