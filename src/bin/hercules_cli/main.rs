// ABOUTME: Hercules CLI - offline access to unit parsing, profile mapping, and readiness checks
// ABOUTME: Reads questionnaire or profile JSON from disk and prints normalized JSON to stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Parse a height typed as feet and inches
//! hercules-cli parse-height "5'10\""
//!
//! # Parse a weight typed in kilograms
//! hercules-cli parse-weight "80kg"
//!
//! # Normalize raw onboarding answers
//! hercules-cli normalize --file answers.json
//!
//! # Map onboarding answers to a validated profile row
//! hercules-cli onboard --file answers.json --user-id user-123
//!
//! # Check which fields a stored profile is missing
//! hercules-cli readiness --file profile.json
//!
//! # Build the recommendation request payload
//! hercules-cli ml-payload --file profile.json
//! ```

mod commands;
mod helpers;

use clap::{Parser, Subcommand};
use hercules_server::{errors::AppResult, logging::LoggingConfig};
use std::path::PathBuf;
use tracing::debug;

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "hercules-cli",
    about = "Hercules profile tools",
    long_about = "Offline tools for parsing measurements, mapping onboarding answers, and checking ML readiness."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Parse a free-text height into centimeters
    ParseHeight {
        /// Height as typed (e.g. 5'10", 178cm, 70in)
        value: String,
    },

    /// Parse a free-text weight into pounds
    ParseWeight {
        /// Weight as typed (e.g. 80kg, 176 lbs)
        value: String,
    },

    /// Normalize raw onboarding answers
    Normalize {
        /// Onboarding answers JSON file
        #[arg(long)]
        file: PathBuf,
    },

    /// Map onboarding answers to a validated profile row
    Onboard {
        /// Onboarding answers JSON file
        #[arg(long)]
        file: PathBuf,

        /// User the profile belongs to
        #[arg(long)]
        user_id: String,
    },

    /// Report missing fields for a stored profile
    Readiness {
        /// Profile JSON file
        #[arg(long)]
        file: PathBuf,
    },

    /// Build the recommendation request payload for a stored profile
    MlPayload {
        /// Profile JSON file
        #[arg(long)]
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::for_cli();
    if cli.verbose {
        logging.level = "debug".into();
    }
    if let Err(e) = logging.init() {
        eprintln!("Logging disabled: {e}");
    }

    match cli.command {
        Command::ParseHeight { value } => commands::units::parse_height(&value),
        Command::ParseWeight { value } => commands::units::parse_weight(&value),
        Command::Normalize { file } => commands::profile::normalize(&file)?,
        Command::Onboard { file, user_id } => commands::profile::onboard(&file, &user_id)?,
        Command::Readiness { file } => commands::profile::readiness(&file)?,
        Command::MlPayload { file } => commands::profile::ml_payload(&file)?,
    }

    debug!("Command finished");
    Ok(())
}
