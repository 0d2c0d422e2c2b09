// ABOUTME: Pure shaping of raw statistics payloads into chart-ready series
// ABOUTME: Histogram labelling, record passthrough, point extraction and stat cards
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Total, deterministic transforms over raw `serde_json::Value` payloads.
//!
//! None of these functions fail: anything that is not the expected container
//! shape comes out as an empty series, so a single bad payload only blanks
//! its own chart.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::models::{
    AgeGroupAverage, CorrelationPoint, DurationBinAverage, DurationFrequency, GenderAverage,
    HeartRateFrequency, LabeledValue, StatCard, StatsSummary,
};

/// Half-up rounding as charting front ends do it (`-2.5` rounds to `-2`)
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

fn numbers(value: Option<&Value>) -> Option<Vec<f64>> {
    value?.as_array()?.iter().map(Value::as_f64).collect()
}

/// Turn `{bins, counts}` into `"<lo>-<hi>"` labelled bars.
///
/// `bins` holds `n + 1` edges for `n` counts. Fewer than two edges, no
/// counts, or any non-numeric entry yields an empty series. When the two
/// lengths disagree the shorter side wins.
#[must_use]
pub fn shape_histogram(payload: &Value) -> Vec<LabeledValue> {
    let (Some(bins), Some(counts)) = (numbers(payload.get("bins")), numbers(payload.get("counts")))
    else {
        return Vec::new();
    };
    if bins.len() < 2 {
        return Vec::new();
    }

    bins.windows(2)
        .zip(counts)
        .map(|(edges, count)| {
            LabeledValue::new(
                format!(
                    "{:.0}-{:.0}",
                    round_half_up(edges[0]),
                    round_half_up(edges[1])
                ),
                count,
            )
        })
        .collect()
}

/// Pass a sequence of records through, coercing anything else to empty.
///
/// Elements that do not deserialize as `T` are dropped individually.
#[must_use]
pub fn passthrough_records<T: DeserializeOwned>(payload: &Value) -> Vec<T> {
    payload.as_array().map_or_else(Vec::new, |items| {
        items
            .iter()
            .filter_map(|item| T::deserialize(item).ok())
            .collect()
    })
}

/// Points of a `{points: [{x, y}, ...]}` payload
#[must_use]
pub fn extract_points(payload: &Value) -> Vec<CorrelationPoint> {
    payload
        .get("points")
        .map_or_else(Vec::new, passthrough_records)
}

/// Summary counters, or `None` when the payload lacks the required ones
#[must_use]
pub fn normalize_summary(payload: &Value) -> Option<StatsSummary> {
    if !payload.is_object() {
        return None;
    }
    StatsSummary::deserialize(payload).ok()
}

/// Record that renders as one bar or slice
pub trait ChartDatum {
    /// Category and magnitude for the chart
    fn to_datum(&self) -> LabeledValue;
}

impl ChartDatum for GenderAverage {
    fn to_datum(&self) -> LabeledValue {
        LabeledValue::new(self.gender.clone(), self.avg_calories)
    }
}

impl ChartDatum for AgeGroupAverage {
    fn to_datum(&self) -> LabeledValue {
        LabeledValue::new(self.age_group.clone(), self.avg_calories)
    }
}

impl ChartDatum for DurationBinAverage {
    fn to_datum(&self) -> LabeledValue {
        LabeledValue::new(self.duration_bin.clone(), self.avg_calories)
    }
}

impl ChartDatum for DurationFrequency {
    fn to_datum(&self) -> LabeledValue {
        LabeledValue::new(format!("{} min", self.duration), self.count as f64)
    }
}

impl ChartDatum for HeartRateFrequency {
    fn to_datum(&self) -> LabeledValue {
        LabeledValue::new(format!("{} bpm", self.heart_rate), self.count as f64)
    }
}

impl ChartDatum for LabeledValue {
    fn to_datum(&self) -> LabeledValue {
        self.clone()
    }
}

/// Map records onto the uniform `{label, value}` series
#[must_use]
pub fn to_series<T: ChartDatum>(records: &[T]) -> Vec<LabeledValue> {
    records.iter().map(ChartDatum::to_datum).collect()
}

/// The four headline cards shown above the charts
#[must_use]
pub fn summary_cards(summary: &StatsSummary) -> Vec<StatCard> {
    let card = |label: &str, value: String| StatCard {
        label: label.to_owned(),
        value,
    };
    vec![
        card("Total Records", summary.total_records.to_string()),
        card("Avg Calories", format!("{:.1}", summary.avg_calories)),
        card("Avg Duration (min)", format!("{:.1}", summary.avg_duration)),
        card("Avg Weight (kg)", format!("{:.1}", summary.avg_weight)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_histogram_labels_round_half_up() {
        let shaped = shape_histogram(&json!({
            "bins": [1.0, 75.5, 150.49, 224.5],
            "counts": [3, 4, 5]
        }));
        let labels: Vec<&str> = shaped.iter().map(|d| d.label.as_str()).collect();
        assert_eq!(labels, vec!["1-76", "76-150", "150-225"]);
    }

    #[test]
    fn test_histogram_small_negative_edge() {
        let shaped = shape_histogram(&json!({"bins": [-0.2, 1.0], "counts": [1]}));
        assert_eq!(shaped, vec![LabeledValue::new("0-1", 1.0)]);
    }

    #[test]
    fn test_histogram_rejects_short_or_malformed() {
        assert!(shape_histogram(&json!({"bins": [0], "counts": [1]})).is_empty());
        assert!(shape_histogram(&json!({"bins": [0, 1], "counts": []})).is_empty());
        assert!(shape_histogram(&json!({"bins": [0, "x"], "counts": [1]})).is_empty());
        assert!(shape_histogram(&json!([1, 2, 3])).is_empty());
        assert!(shape_histogram(&Value::Null).is_empty());
    }

    #[test]
    fn test_histogram_length_mismatch_uses_shorter() {
        let shaped = shape_histogram(&json!({"bins": [0, 10, 20, 30], "counts": [5]}));
        assert_eq!(shaped, vec![LabeledValue::new("0-10", 5.0)]);
    }

    #[test]
    fn test_passthrough_drops_bad_elements() {
        let records: Vec<GenderAverage> = passthrough_records(&json!([
            {"gender": "male", "avg_calories": 90.5},
            {"gender": "female"},
            "noise"
        ]));
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].gender, "male");
    }

    #[test]
    fn test_passthrough_non_sequence_is_empty() {
        let records: Vec<DurationFrequency> =
            passthrough_records(&json!({"error": "Colonne invalide"}));
        assert!(records.is_empty());
    }

    #[test]
    fn test_extract_points() {
        let points = extract_points(&json!({"x": "Calories", "y": "Duration", "points": [{"x": 1, "y": 2.5}]}));
        assert_eq!(points, vec![CorrelationPoint { x: 1.0, y: 2.5 }]);
        assert!(extract_points(&json!({"points": "none"})).is_empty());
        assert!(extract_points(&json!([])).is_empty());
    }

    #[test]
    fn test_normalize_summary_requires_counters() {
        assert!(normalize_summary(&json!({"total_records": 10})).is_none());
        assert!(normalize_summary(&json!("summary")).is_none());

        let summary = normalize_summary(&json!({
            "total_records": 15000,
            "avg_calories": 89.539,
            "avg_duration": 15.53,
            "avg_weight": 74.966,
            "avg_age": 42.8,
            "min_age": 20
        }));
        assert_eq!(summary.as_ref().map(|s| s.total_records), Some(15000));
        assert_eq!(summary.and_then(|s| s.avg_age), Some(42.8));
    }

    #[test]
    fn test_summary_cards_format_one_decimal() {
        let summary = StatsSummary {
            total_records: 15000,
            avg_calories: 89.539,
            avg_duration: 15.53,
            avg_weight: 74.966,
            avg_age: None,
            avg_heart_rate: None,
            avg_body_temp: None,
            min_calories: None,
            max_calories: None,
            min_duration: None,
            max_duration: None,
        };
        let values: Vec<String> = summary_cards(&summary)
            .into_iter()
            .map(|c| format!("{}={}", c.label, c.value))
            .collect();
        assert_eq!(
            values,
            vec![
                "Total Records=15000",
                "Avg Calories=89.5",
                "Avg Duration (min)=15.5",
                "Avg Weight (kg)=75.0",
            ]
        );
    }

    #[test]
    fn test_frequency_series_labels() {
        let series = to_series(&[
            DurationFrequency {
                duration: 15.0,
                count: 42,
            },
            DurationFrequency {
                duration: 7.5,
                count: 3,
            },
        ]);
        assert_eq!(series[0], LabeledValue::new("15 min", 42.0));
        assert_eq!(series[1], LabeledValue::new("7.5 min", 3.0));
    }
}
