// ABOUTME: Calorie CLI - command-line front end for the calorie-burn prediction service
// ABOUTME: Validates and submits workouts, renders the statistics dashboard and lists advice
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Estimate calories for one workout
//! calorie-cli predict --gender female --age 30 --height 170 --weight 65 \
//!     --duration 20 --heart-rate 100 --body-temp 40
//!
//! # Check the form without calling the service
//! calorie-cli predict --age 18 --height 170 --weight 65 --duration 20 \
//!     --heart-rate 100 --body-temp 40 --dry-run
//!
//! # Render the statistics dashboard
//! calorie-cli stats
//!
//! # Dump the dashboard as JSON against another service
//! calorie-cli --api-url http://stats.internal:5000 --timeout 10 stats --json
//!
//! # List the wellness tips
//! calorie-cli advice
//! ```

mod commands;
mod helpers;

use std::env;
use std::process::ExitCode;
use std::time::Duration;

use calorie_insight::{
    config::ClientConfig,
    errors::{AppError, AppResult},
    logging::LoggingConfig,
    models::WorkoutField,
};
use clap::{Parser, Subcommand};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "calorie-cli",
    about = "Calorie burn estimator CLI",
    long_about = "Estimate calories burnt during a workout and explore the aggregated workout dataset."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Prediction service base URL (overrides `CALORIE_API_URL`)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Whole-request timeout in seconds
    #[arg(long, global = true, value_parser = clap::value_parser!(u64).range(1..))]
    timeout: Option<u64>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Validate a workout and request a calorie estimate
    Predict {
        /// Gender (male or female)
        #[arg(long, default_value = "male")]
        gender: String,

        /// Age in years (20-79)
        #[arg(long, default_value = "")]
        age: String,

        /// Height in cm (123-222)
        #[arg(long, default_value = "")]
        height: String,

        /// Weight in kg (36-132)
        #[arg(long, default_value = "")]
        weight: String,

        /// Workout duration in minutes (1-30)
        #[arg(long, default_value = "")]
        duration: String,

        /// Average heart rate in bpm (67-128)
        #[arg(long, default_value = "")]
        heart_rate: String,

        /// Body temperature in °C (37.1-41.5)
        #[arg(long, default_value = "")]
        body_temp: String,

        /// Validate only; print the request that would be sent
        #[arg(long)]
        dry_run: bool,

        /// Print the final state as JSON
        #[arg(long)]
        json: bool,
    },

    /// Load every statistics dataset once and render the dashboard
    Stats {
        /// Print the loaded datasets as JSON
        #[arg(long)]
        json: bool,
    },

    /// List general wellness tips
    Advice {
        /// Print the tips as JSON
        #[arg(long)]
        json: bool,
    },
}

fn init_logging(verbose: bool) -> AppResult<()> {
    let mut logging = LoggingConfig::from_env();
    if verbose {
        logging = logging.with_level("debug");
    } else if env::var("RUST_LOG").is_err() {
        logging = logging.with_level("warn");
    }
    logging
        .init()
        .map_err(|e| AppError::internal(format!("failed to initialize logging: {e}")))
}

fn client_config(api_url: Option<&str>, timeout_secs: Option<u64>) -> AppResult<ClientConfig> {
    let config = match api_url {
        Some(url) => ClientConfig::new(url)?,
        None => ClientConfig::from_env()?,
    };
    Ok(match timeout_secs {
        Some(secs) => config.with_timeout(Duration::from_secs(secs)),
        None => config,
    })
}

#[tokio::main]
async fn main() -> AppResult<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;
    debug!("Calorie CLI started");

    let succeeded = match cli.command {
        Command::Predict {
            gender,
            age,
            height,
            weight,
            duration,
            heart_rate,
            body_temp,
            dry_run,
            json,
        } => {
            let fields = [
                (WorkoutField::Gender, gender),
                (WorkoutField::Age, age),
                (WorkoutField::Height, height),
                (WorkoutField::Weight, weight),
                (WorkoutField::Duration, duration),
                (WorkoutField::HeartRate, heart_rate),
                (WorkoutField::BodyTemp, body_temp),
            ];
            let config = client_config(cli.api_url.as_deref(), cli.timeout)?;
            commands::predict::run(&config, fields, dry_run, json).await?
        }
        Command::Stats { json } => {
            let config = client_config(cli.api_url.as_deref(), cli.timeout)?;
            commands::stats::run(&config, json).await?
        }
        Command::Advice { json } => commands::advice::run(json)?,
    };

    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_flag_overrides_default() {
        let cli = Cli::try_parse_from([
            "calorie-cli",
            "--api-url",
            "http://127.0.0.1:5000",
            "--timeout",
            "5",
            "stats",
        ])
        .unwrap();
        let config = client_config(cli.api_url.as_deref(), cli.timeout).unwrap();
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_timeout_defaults_without_flag() {
        let cli = Cli::try_parse_from(["calorie-cli", "stats", "--api-url", "http://127.0.0.1:5000"])
            .unwrap();
        let config = client_config(cli.api_url.as_deref(), cli.timeout).unwrap();
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        assert!(Cli::try_parse_from(["calorie-cli", "--timeout", "0", "advice"]).is_err());
    }
}
