// ABOUTME: Main library entry point for the calorie-burn prediction client
// ABOUTME: Form validation, prediction submission and statistics dashboard pipelines
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Calorie Insight
//!
//! Client half of a calorie-burn estimation tool. A remote service owns the
//! regression model and the aggregated dataset; this crate owns the logic in
//! front of it.
//!
//! ## Architecture
//!
//! - **validation**: declarative bound table and the pure field validator
//! - **prediction**: the submission state machine driving `POST /predict`
//! - **stats**: concurrent fetch of the eight dashboard datasets, plus the
//!   pure shaping functions turning them into chart-ready series
//! - **client**: reqwest-backed implementation of the service traits
//! - **config** / **logging**: ambient setup shared by binaries and tests
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use calorie_insight::client::CalorieApiClient;
//! use calorie_insight::config::ClientConfig;
//! use calorie_insight::prediction::{PredictionController, SubmissionState};
//! use calorie_insight::errors::AppResult;
//! use calorie_insight::models::WorkoutField;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let client = CalorieApiClient::new(&ClientConfig::from_env()?)?;
//!     let mut form = PredictionController::new(client);
//!     form.set_field(WorkoutField::Age, "30")?;
//!     // ... remaining fields ...
//!     if let SubmissionState::Success(result) = form.submit().await {
//!         println!("{:.1} kcal", result.calories);
//!     }
//!     Ok(())
//! }
//! ```

/// Static wellness advice catalogue
pub mod advice;

/// HTTP client for the prediction service
pub mod client;

/// Client configuration resolved at startup
pub mod config;

/// Logging configuration and subscriber setup
pub mod logging;

/// Prediction request controller and its state machine
pub mod prediction;

/// Statistics fetch orchestration and shaping
pub mod stats;

/// Declarative field validation rules and the field validator
pub mod validation;

pub use calorie_core::{constants, errors, models};
