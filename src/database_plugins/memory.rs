// ABOUTME: DashMap-backed implementation of the profile and fitness log stores
// ABOUTME: Used by the server binary and tests; no entry guard is held across an await
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{FitnessLogStore, ProfileStore};
use crate::errors::{AppError, AppResult};
use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use hercules_core::models::{FitnessLog, LogKind, ProfileRecord};
use std::cmp::Reverse;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

type LogKey = (String, LogKind);

/// In-memory database
///
/// Cloning shares the underlying maps.
#[derive(Debug, Clone, Default)]
pub struct MemoryDatabase {
    profiles: Arc<DashMap<String, ProfileRecord>>,
    logs: Arc<DashMap<LogKey, Vec<FitnessLog>>>,
}

impl MemoryDatabase {
    /// Empty database
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored profiles
    #[must_use]
    pub fn profile_count(&self) -> usize {
        self.profiles.len()
    }
}

#[async_trait]
impl ProfileStore for MemoryDatabase {
    async fn fetch_profile(&self, user_id: &str) -> AppResult<Option<ProfileRecord>> {
        Ok(self.profiles.get(user_id).map(|row| row.value().clone()))
    }

    async fn create_profile(&self, profile: &ProfileRecord) -> AppResult<ProfileRecord> {
        match self.profiles.entry(profile.user_id.clone()) {
            Entry::Occupied(_) => Err(AppError::already_exists(format!(
                "Profile for user {}",
                profile.user_id
            ))),
            Entry::Vacant(slot) => {
                debug!(user.id = %profile.user_id, "Created profile row");
                Ok(slot.insert(profile.clone()).value().clone())
            }
        }
    }

    async fn update_profile(&self, profile: &ProfileRecord) -> AppResult<ProfileRecord> {
        let mut row = self
            .profiles
            .get_mut(&profile.user_id)
            .ok_or_else(|| AppError::not_found("Profile"))?;

        let merged = row.merged_with(profile);
        *row = merged.clone();
        drop(row);

        debug!(user.id = %profile.user_id, "Updated profile row");
        Ok(merged)
    }
}

#[async_trait]
impl FitnessLogStore for MemoryDatabase {
    async fn list_logs(&self, user_id: &str, kind: LogKind) -> AppResult<Vec<FitnessLog>> {
        let mut entries = self
            .logs
            .get(&(user_id.to_owned(), kind))
            .map(|entries| entries.value().clone())
            .unwrap_or_default();

        entries.sort_by_key(|entry| Reverse(entry.created_at()));
        Ok(entries)
    }

    async fn insert_log(&self, log: FitnessLog) -> AppResult<FitnessLog> {
        let key = (log.user_id().to_owned(), log.kind());
        debug!(user.id = %key.0, table = key.1.table_name(), log.id = %log.id(), "Inserted log");

        self.logs.entry(key).or_default().push(log.clone());
        Ok(log)
    }

    async fn delete_log(&self, user_id: &str, kind: LogKind, log_id: Uuid) -> AppResult<()> {
        let not_found = || AppError::not_found(format!("{kind} log {log_id}"));

        let mut entries = self
            .logs
            .get_mut(&(user_id.to_owned(), kind))
            .ok_or_else(not_found)?;

        let before = entries.len();
        entries.retain(|entry| entry.id() != log_id);

        if entries.len() == before {
            return Err(not_found());
        }

        Ok(())
    }
}
