// ABOUTME: Workout form models - raw input, wire request and prediction result
// ABOUTME: Gender, WorkoutField, WorkoutInput, PredictionRequest and PredictionResult definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

/// Gender options offered by the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Default selection when the form is created
    #[default]
    Male,
    /// Female
    Female,
}

impl Gender {
    /// Wire representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            other => Err(AppError::invalid_input(format!(
                "gender must be 'male' or 'female', got '{other}'"
            ))),
        }
    }
}

/// The seven fields of the workout form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutField {
    /// Gender selection
    Gender,
    /// Age in years
    Age,
    /// Height in centimetres
    Height,
    /// Weight in kilograms
    Weight,
    /// Workout duration in minutes
    Duration,
    /// Heart rate in beats per minute
    HeartRate,
    /// Body temperature in degrees Celsius
    BodyTemp,
}

impl WorkoutField {
    /// Every field, in form order
    pub const ALL: [Self; 7] = [
        Self::Gender,
        Self::Age,
        Self::Height,
        Self::Weight,
        Self::Duration,
        Self::HeartRate,
        Self::BodyTemp,
    ];

    /// Wire name used in request bodies
    #[must_use]
    pub const fn wire_name(self) -> &'static str {
        match self {
            Self::Gender => "gender",
            Self::Age => "age",
            Self::Height => "height",
            Self::Weight => "weight",
            Self::Duration => "duration",
            Self::HeartRate => "heart_rate",
            Self::BodyTemp => "body_temp",
        }
    }

    /// Label shown next to the field
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Gender => "Gender",
            Self::Age => "Age",
            Self::Height => "Height (cm)",
            Self::Weight => "Weight (kg)",
            Self::Duration => "Duration (min)",
            Self::HeartRate => "Heart Rate (bpm)",
            Self::BodyTemp => "Body Temp (°C)",
        }
    }

    /// True for every field except gender
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        !matches!(self, Self::Gender)
    }
}

impl fmt::Display for WorkoutField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

impl FromStr for WorkoutField {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "gender" => Ok(Self::Gender),
            "age" => Ok(Self::Age),
            "height" => Ok(Self::Height),
            "weight" => Ok(Self::Weight),
            "duration" => Ok(Self::Duration),
            "heart_rate" | "heartRate" => Ok(Self::HeartRate),
            "body_temp" | "bodyTemp" => Ok(Self::BodyTemp),
            other => Err(AppError::invalid_input(format!(
                "unknown workout field '{other}'"
            ))),
        }
    }
}

/// Raw form values, exactly as entered.
///
/// Numeric fields stay strings until submission so that empty and
/// half-typed values can be validated and shown back to the user.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WorkoutInput {
    /// Selected gender
    pub gender: Gender,
    /// Age in years
    pub age: String,
    /// Height in centimetres
    pub height: String,
    /// Weight in kilograms
    pub weight: String,
    /// Workout duration in minutes
    pub duration: String,
    /// Heart rate in beats per minute
    pub heart_rate: String,
    /// Body temperature in degrees Celsius
    pub body_temp: String,
}

impl WorkoutInput {
    /// Create an empty form with the default gender
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw value currently held by `field`
    #[must_use]
    pub fn raw(&self, field: WorkoutField) -> &str {
        match field {
            WorkoutField::Gender => self.gender.as_str(),
            WorkoutField::Age => &self.age,
            WorkoutField::Height => &self.height,
            WorkoutField::Weight => &self.weight,
            WorkoutField::Duration => &self.duration,
            WorkoutField::HeartRate => &self.heart_rate,
            WorkoutField::BodyTemp => &self.body_temp,
        }
    }

    /// Replace the raw value of `field`
    ///
    /// # Errors
    ///
    /// Returns an error if `field` is gender and `value` is not one of the
    /// offered options; the previous selection is kept.
    pub fn set_raw(&mut self, field: WorkoutField, value: impl Into<String>) -> AppResult<()> {
        let value = value.into();
        match field {
            WorkoutField::Gender => self.gender = value.parse()?,
            WorkoutField::Age => self.age = value,
            WorkoutField::Height => self.height = value,
            WorkoutField::Weight => self.weight = value,
            WorkoutField::Duration => self.duration = value,
            WorkoutField::HeartRate => self.heart_rate = value,
            WorkoutField::BodyTemp => self.body_temp = value,
        }
        Ok(())
    }
}

/// Body of `POST /predict`: the form with every numeric field coerced
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    /// Gender, passed through as-is
    pub gender: Gender,
    /// Age in years
    pub age: f64,
    /// Height in centimetres
    pub height: f64,
    /// Weight in kilograms
    pub weight: f64,
    /// Workout duration in minutes
    pub duration: f64,
    /// Heart rate in beats per minute
    pub heart_rate: f64,
    /// Body temperature in degrees Celsius
    pub body_temp: f64,
}

fn parse_metric(input: &WorkoutInput, field: WorkoutField) -> AppResult<f64> {
    let raw = input.raw(field).trim();
    raw.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| {
            AppError::invalid_input(format!("{} is not a number: '{raw}'", field.label()))
        })
}

impl TryFrom<&WorkoutInput> for PredictionRequest {
    type Error = AppError;

    fn try_from(input: &WorkoutInput) -> Result<Self, Self::Error> {
        Ok(Self {
            gender: input.gender,
            age: parse_metric(input, WorkoutField::Age)?,
            height: parse_metric(input, WorkoutField::Height)?,
            weight: parse_metric(input, WorkoutField::Weight)?,
            duration: parse_metric(input, WorkoutField::Duration)?,
            heart_rate: parse_metric(input, WorkoutField::HeartRate)?,
            body_temp: parse_metric(input, WorkoutField::BodyTemp)?,
        })
    }
}

/// Outcome of one successful prediction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Estimated kilocalories burnt
    pub calories: f64,
    /// Snapshot of the form that produced the estimate
    pub input: WorkoutInput,
    /// When the service answered
    pub completed_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> WorkoutInput {
        WorkoutInput {
            gender: Gender::Female,
            age: "25".into(),
            height: "170".into(),
            weight: " 65.5 ".into(),
            duration: "20".into(),
            heart_rate: "100".into(),
            body_temp: "39.5".into(),
        }
    }

    #[test]
    fn test_new_form_defaults_to_male_and_empty_values() {
        let input = WorkoutInput::new();
        assert_eq!(input.gender, Gender::Male);
        assert!(WorkoutField::ALL
            .iter()
            .filter(|field| field.is_numeric())
            .all(|field| input.raw(*field).is_empty()));
    }

    #[test]
    fn test_request_coerces_numbers_and_uses_wire_names() {
        let request = PredictionRequest::try_from(&filled()).unwrap();
        assert!((request.weight - 65.5).abs() < f64::EPSILON);

        let json = serde_json::to_value(request).unwrap();
        assert_eq!(json["gender"], "female");
        assert_eq!(json["heart_rate"], 100.0);
        assert_eq!(json["body_temp"], 39.5);
    }

    #[test]
    fn test_request_rejects_non_numeric() {
        let mut input = filled();
        input.age = "thirty".into();
        assert!(PredictionRequest::try_from(&input).is_err());
    }

    #[test]
    fn test_set_raw_keeps_gender_on_unknown_value() {
        let mut input = filled();
        assert!(input.set_raw(WorkoutField::Gender, "other").is_err());
        assert_eq!(input.gender, Gender::Female);
        input.set_raw(WorkoutField::Gender, "Male").unwrap();
        assert_eq!(input.gender, Gender::Male);
    }

    #[test]
    fn test_field_names_round_trip() {
        for field in WorkoutField::ALL {
            assert_eq!(field.wire_name().parse::<WorkoutField>().unwrap(), field);
        }
        assert_eq!(
            "heartRate".parse::<WorkoutField>().unwrap(),
            WorkoutField::HeartRate
        );
    }
}
