// ABOUTME: Per-field validation errors raised by the workout form validator
// ABOUTME: Display renders exactly the inline message shown next to the field
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::constants::messages;

/// Reason a single form field failed validation.
///
/// These never leave the client: they are recovered locally, shown inline and
/// block submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The field was empty
    #[error("{}", messages::REQUIRED)]
    Required,
    /// The field held something that does not parse as a number
    #[error("{label} must be a number")]
    NotANumber {
        /// Human label of the field
        label: &'static str,
    },
    /// The parsed value lies outside the field's inclusive bound
    #[error("{message}")]
    OutOfRange {
        /// Bound-specific message from the rule table
        message: &'static str,
    },
}

impl Serialize for ValidationError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_render_verbatim() {
        assert_eq!(ValidationError::Required.to_string(), "Required");
        assert_eq!(
            ValidationError::OutOfRange {
                message: "Age must be 20-79"
            }
            .to_string(),
            "Age must be 20-79"
        );
        assert_eq!(
            ValidationError::NotANumber { label: "Weight" }.to_string(),
            "Weight must be a number"
        );
    }

    #[test]
    fn test_serializes_as_message() {
        let json = serde_json::to_string(&ValidationError::Required).unwrap_or_default();
        assert_eq!(json, "\"Required\"");
    }
}
