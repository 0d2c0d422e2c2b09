// ABOUTME: Prediction request controller module - state machine and service seam
// ABOUTME: Re-exports the controller, its states and the PredictionService trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Drives one workout form from edits to a calorie estimate.
//!
//! ```text
//! Idle -> Validating -> Invalid
//!                    -> Submitting -> Success | Failed
//! ```
//!
//! Any terminal state re-enters `Validating` on the next submit.

mod controller;
mod state;

pub use controller::PredictionController;
pub use state::SubmissionState;

use async_trait::async_trait;

use crate::errors::ClientError;
use crate::models::PredictionRequest;

/// Remote model that turns a coerced workout into kilocalories
#[async_trait]
pub trait PredictionService: Send + Sync {
    /// Issue exactly one prediction request
    async fn predict(&self, request: &PredictionRequest) -> Result<f64, ClientError>;
}
