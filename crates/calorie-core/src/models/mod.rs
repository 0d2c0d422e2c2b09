// ABOUTME: Core data models for the calorie-burn prediction client
// ABOUTME: Re-exports workout form, prediction and statistics payload structures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! - `WorkoutInput`: raw form values as the user typed them
//! - `PredictionRequest`: the same input coerced to numbers for the wire
//! - `PredictionResult`: estimated kilocalories plus the input that produced them
//! - statistics records: the aggregate payloads behind the dashboard and the
//!   chart-ready shapes they are reduced to

mod stats;
mod workout;

pub use stats::{
    AgeGroupAverage, CorrelationPoint, DurationBinAverage, DurationFrequency, GenderAverage,
    HeartRateFrequency, LabeledValue, StatCard, StatsSummary,
};
pub use workout::{Gender, PredictionRequest, PredictionResult, WorkoutField, WorkoutInput};
