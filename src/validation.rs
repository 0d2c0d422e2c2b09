// ABOUTME: Declarative bound table and the pure validator for workout form fields
// ABOUTME: Maps (field, raw value) to an optional inline error and aggregates form-wide state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Field validation for the workout form.
//!
//! Bounds live in [`FIELD_RULES`] as data; [`validate`] is the only place
//! that interprets them. Validation is pure: identical input always yields an
//! identical [`ValidationState`].

use std::collections::BTreeMap;

use serde::Serialize;

use crate::errors::ValidationError;
use crate::models::{WorkoutField, WorkoutInput};

/// Inclusive numeric bound for one form field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldRule {
    /// Field the rule applies to
    pub field: WorkoutField,
    /// Smallest accepted value
    pub min: f64,
    /// Largest accepted value
    pub max: f64,
    /// Message shown when the value is out of bounds
    pub message: &'static str,
}

impl FieldRule {
    /// Whether `value` lies within `[min, max]`
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Form label of the field, e.g. `"Height (cm)"`
    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.field.label()
    }

    /// Input hint shown in an empty field, e.g. `"20-79"`
    #[must_use]
    pub fn hint(&self) -> String {
        format!("{}-{}", self.min, self.max)
    }
}

/// Bounds for every numeric field, in form order
pub const FIELD_RULES: [FieldRule; 6] = [
    FieldRule {
        field: WorkoutField::Age,
        min: 20.0,
        max: 79.0,
        message: "Age must be 20-79",
    },
    FieldRule {
        field: WorkoutField::Height,
        min: 123.0,
        max: 222.0,
        message: "Height must be 123-222 cm",
    },
    FieldRule {
        field: WorkoutField::Weight,
        min: 36.0,
        max: 132.0,
        message: "Weight must be 36-132 kg",
    },
    FieldRule {
        field: WorkoutField::Duration,
        min: 1.0,
        max: 30.0,
        message: "Duration must be 1-30 minutes",
    },
    FieldRule {
        field: WorkoutField::HeartRate,
        min: 67.0,
        max: 128.0,
        message: "Heart rate must be 67-128 bpm",
    },
    FieldRule {
        field: WorkoutField::BodyTemp,
        min: 37.1,
        max: 41.5,
        message: "Body temp must be 37.1-41.5°C",
    },
];

/// Look up the bound for `field`; gender has none
#[must_use]
pub fn rule_for(field: WorkoutField) -> Option<&'static FieldRule> {
    FIELD_RULES.iter().find(|rule| rule.field == field)
}

/// Validate one raw field value.
///
/// Gender is always accepted here; the set of options is enforced by the
/// input itself (see [`WorkoutInput::set_raw`]).
#[must_use]
pub fn validate(field: WorkoutField, raw: &str) -> Option<ValidationError> {
    if !field.is_numeric() {
        return None;
    }

    let raw = raw.trim();
    if raw.is_empty() {
        return Some(ValidationError::Required);
    }

    let Some(value) = raw.parse::<f64>().ok().filter(|v| !v.is_nan()) else {
        return Some(ValidationError::NotANumber {
            label: field.label(),
        });
    };

    rule_for(field)
        .filter(|rule| !rule.contains(value))
        .map(|rule| ValidationError::OutOfRange {
            message: rule.message,
        })
}

/// Per-field validation outcome for the whole form; absent means valid
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationState {
    errors: BTreeMap<WorkoutField, ValidationError>,
}

impl ValidationState {
    /// State with no errors
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome for one field, clearing any previous error
    pub fn set(&mut self, field: WorkoutField, outcome: Option<ValidationError>) {
        match outcome {
            Some(error) => {
                self.errors.insert(field, error);
            }
            None => {
                self.errors.remove(&field);
            }
        }
    }

    /// Error currently attached to `field`
    #[must_use]
    pub fn error_for(&self, field: WorkoutField) -> Option<ValidationError> {
        self.errors.get(&field).copied()
    }

    /// True iff at least one field carries an error
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Failing fields with their errors, in form order
    pub fn iter(&self) -> impl Iterator<Item = (WorkoutField, ValidationError)> + '_ {
        self.errors.iter().map(|(field, error)| (*field, *error))
    }

    /// Number of failing fields
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// True when no field fails
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Validate every field of the form, touched or not
#[must_use]
pub fn validate_all(input: &WorkoutInput) -> ValidationState {
    let mut state = ValidationState::new();
    for field in WorkoutField::ALL {
        state.set(field, validate(field, input.raw(field)));
    }
    state
}
