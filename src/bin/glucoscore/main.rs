// ABOUTME: Glucoscore CLI - scores a day of diabetes self-management activity
// ABOUTME: Computes daily XP, level readouts, glucose statistics, and streaks from JSON input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Glucoscore Contributors
//!
//! Usage:
//! ```bash
//! # Score a snapshot read from a file
//! glucoscore score --input today.json
//!
//! # Score a snapshot piped on stdin, clamping bad values instead of rejecting
//! echo '{"glucoseReadingValues":[110,145],"sleepLogged":true}' | glucoscore score --lenient
//!
//! # Level readout for a lifetime XP total
//! glucoscore level --total-xp 450
//!
//! # List the level table
//! glucoscore levels
//!
//! # Glucose statistics for an array of readings
//! glucoscore stats --input readings.json
//!
//! # Current and longest streak from per-day record counts
//! glucoscore streak --input days.json --today 2025-03-10
//! ```

mod commands;
mod helpers;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use glucoscore::errors::{AppError, AppResult, ErrorResponse};
use glucoscore::logging::{LoggingConfig, ScoreLogger};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use helpers::display::OutputFormat;

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "glucoscore",
    version,
    about = "Daily XP scoring for diabetes self-management",
    long_about = "Computes gamified daily XP, streak bonuses, and level progress from a day's glucose, sleep, and stress logs."
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
    /// Score one day from a `DailyActivitySnapshot` JSON document
    Score {
        /// Input file (`-` or omitted reads stdin)
        #[arg(long, short = 'i')]
        input: Option<PathBuf>,

        /// Output format
        #[arg(long, short = 'f', value_enum, default_value = "json")]
        format: OutputFormat,

        /// Clamp negative counters and drop unusable readings instead of rejecting
        #[arg(long)]
        lenient: bool,
    },

    /// Show the level readout for a lifetime XP total
    Level {
        /// Lifetime XP
        #[arg(long)]
        total_xp: u64,

        /// Output format
        #[arg(long, short = 'f', value_enum, default_value = "json")]
        format: OutputFormat,
    },

    /// List all level tiers
    Levels {
        /// Output format
        #[arg(long, short = 'f', value_enum, default_value = "pretty")]
        format: OutputFormat,
    },

    /// Summarize a JSON array of glucose values (mg/dL)
    Stats {
        /// Input file (`-` or omitted reads stdin)
        #[arg(long, short = 'i')]
        input: Option<PathBuf>,

        /// Output format
        #[arg(long, short = 'f', value_enum, default_value = "json")]
        format: OutputFormat,
    },

    /// Current and longest streak from a JSON array of `{date, recordsCompleted}`
    Streak {
        /// Input file (`-` or omitted reads stdin)
        #[arg(long, short = 'i')]
        input: Option<PathBuf>,

        /// Day to count back from (defaults to today in UTC)
        #[arg(long)]
        today: Option<NaiveDate>,

        /// Output format
        #[arg(long, short = 'f', value_enum, default_value = "json")]
        format: OutputFormat,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose {
        logging.with_level("debug")
    } else {
        logging
    };
    if let Err(e) = logging.init() {
        eprintln!("Failed to initialize logging: {e}");
    }

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            report_error(error);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Score {
            input,
            format,
            lenient,
        } => commands::score::run(input.as_deref(), format, lenient),
        Command::Level { total_xp, format } => commands::level::show(total_xp, format),
        Command::Levels { format } => commands::level::list(format),
        Command::Stats { input, format } => commands::stats::run(input.as_deref(), format),
        Command::Streak {
            input,
            today,
            format,
        } => commands::streak::run(input.as_deref(), today, format),
    }
}

fn report_error(error: AppError) {
    if error.code.is_client_error() {
        ScoreLogger::log_rejected_input(&error);
    } else {
        debug!(error = %error, "Command failed");
    }

    let response = ErrorResponse::from(error);
    match serde_json::to_string(&response) {
        Ok(body) => eprintln!("{body}"),
        Err(e) => eprintln!("{}: {e}", response.error.message),
    }
}
