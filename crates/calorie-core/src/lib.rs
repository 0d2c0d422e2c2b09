// ABOUTME: Core types and constants for the calorie-burn prediction client
// ABOUTME: Foundation crate with the workout/statistics data model, errors and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Calorie Core
//!
//! Foundation crate shared by the prediction client and its command-line
//! front end. It carries no I/O: everything here is plain data that can be
//! serialized, compared and tested in isolation.
//!
//! ## Modules
//!
//! - **errors**: `AppError`/`ErrorCode` plus the per-field `ValidationError`
//!   and the network-facing `ClientError`
//! - **constants**: endpoint paths, user-facing messages and defaults
//! - **models**: `WorkoutInput`, `PredictionRequest`, `PredictionResult` and
//!   the statistics payload records

/// Unified error handling with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Workout and statistics data models
pub mod models;
