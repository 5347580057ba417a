// ABOUTME: Helper modules for hercules-cli
// ABOUTME: File input and JSON output utilities shared by commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod input;
pub mod output;
