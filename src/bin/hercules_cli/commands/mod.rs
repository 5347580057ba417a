// ABOUTME: Re-exports command modules for hercules-cli
// ABOUTME: Provides access to unit parsing and profile commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod profile;
pub mod units;
