// ABOUTME: Tagged submission state for the prediction request controller
// ABOUTME: Makes combinations such as loading-with-error unrepresentable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;

use crate::models::PredictionResult;
use crate::validation::ValidationState;

/// Where one form instance is in its submission lifecycle
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "state", content = "detail", rename_all = "snake_case")]
pub enum SubmissionState {
    /// Nothing submitted yet; form editable
    #[default]
    Idle,
    /// Every field is being checked
    Validating,
    /// At least one field failed; no request was sent
    Invalid(ValidationState),
    /// The single outbound request is in flight; submit is disabled
    Submitting,
    /// The service answered with an estimate
    Success(PredictionResult),
    /// Transport or service failure, with the message to show
    Failed(String),
}

impl SubmissionState {
    /// Short name used in logs
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Validating => "validating",
            Self::Invalid(_) => "invalid",
            Self::Submitting => "submitting",
            Self::Success(_) => "success",
            Self::Failed(_) => "failed",
        }
    }

    /// True while a request is in flight
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        matches!(self, Self::Validating | Self::Submitting)
    }

    /// Result of the last successful submission, if the form is in `Success`
    #[must_use]
    pub const fn result(&self) -> Option<&PredictionResult> {
        match self {
            Self::Success(result) => Some(result),
            _ => None,
        }
    }

    /// Message to show for `Failed`
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}
