// ABOUTME: Statistics payload records and chart-ready shapes for the dashboard
// ABOUTME: Summary counters, grouped averages, frequency tables, points and labeled values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Dataset-wide counters from `/stats/summary`.
///
/// The four required counters feed the stat cards; the service also sends a
/// handful of extra columns which are kept when present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsSummary {
    /// Number of workout records
    pub total_records: u64,
    /// Mean calories burnt
    pub avg_calories: f64,
    /// Mean workout duration (minutes)
    pub avg_duration: f64,
    /// Mean body weight (kg)
    pub avg_weight: f64,
    /// Mean age (years)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_age: Option<f64>,
    /// Mean heart rate (bpm)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_heart_rate: Option<f64>,
    /// Mean body temperature (°C)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_body_temp: Option<f64>,
    /// Smallest calorie value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_calories: Option<f64>,
    /// Largest calorie value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_calories: Option<f64>,
    /// Shortest workout (minutes)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_duration: Option<f64>,
    /// Longest workout (minutes)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_duration: Option<f64>,
}

/// Average calories for one gender
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenderAverage {
    /// Gender as reported by the dataset
    pub gender: String,
    /// Mean calories burnt
    pub avg_calories: f64,
}

/// Average calories for one age group (e.g. `"20-29"`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeGroupAverage {
    /// Age group label
    pub age_group: String,
    /// Mean calories burnt
    pub avg_calories: f64,
}

/// Average calories for one duration bin (e.g. `"5-9"`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DurationBinAverage {
    /// Duration bin label
    pub duration_bin: String,
    /// Mean calories burnt
    pub avg_calories: f64,
}

/// How often one workout duration occurs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DurationFrequency {
    /// Duration in minutes
    pub duration: f64,
    /// Number of records
    pub count: u64,
}

/// How often one heart rate occurs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeartRateFrequency {
    /// Heart rate in bpm
    pub heart_rate: f64,
    /// Number of records
    pub count: u64,
}

/// One scatter point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CorrelationPoint {
    /// Horizontal value
    pub x: f64,
    /// Vertical value
    pub y: f64,
}

/// Uniform `{label, value}` entry consumed by bar and pie charts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledValue {
    /// Category label
    pub label: String,
    /// Bar height / slice size
    pub value: f64,
}

impl LabeledValue {
    /// Create a labeled value
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// One headline counter above the charts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatCard {
    /// Card title
    pub label: String,
    /// Formatted value
    pub value: String,
}
