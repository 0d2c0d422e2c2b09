// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for calorie-cli
// ABOUTME: Result cards, field errors, stat cards and text bar charts

use calorie_insight::{
    errors::AppResult,
    models::{CorrelationPoint, LabeledValue, PredictionResult, StatCard},
    validation::{rule_for, ValidationState},
};
use serde::Serialize;

const BAR_WIDTH: usize = 40;

/// Print any serializable value as pretty JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Display a successful estimate with the inputs it was computed from
pub fn display_prediction(result: &PredictionResult) {
    println!("\nEstimated Calories Burned");
    println!("{}", "=".repeat(50));
    println!("   {:.1} kcal", result.calories);
    println!("\nWorkout:");
    println!("   Gender: {}", result.input.gender);
    println!("   Age: {}", result.input.age);
    println!("   Height (cm): {}", result.input.height);
    println!("   Weight (kg): {}", result.input.weight);
    println!("   Duration (min): {}", result.input.duration);
    println!("   Heart Rate (bpm): {}", result.input.heart_rate);
    println!("   Body Temp (°C): {}", result.input.body_temp);
    println!(
        "\nComputed at {}",
        result.completed_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
}

/// Display every failing field with its message and accepted range
pub fn display_field_errors(errors: &ValidationState) {
    eprintln!("Please fix form errors:");
    for (field, error) in errors.iter() {
        match rule_for(field) {
            Some(rule) => eprintln!("   {}: {error} (expected {})", field.label(), rule.hint()),
            None => eprintln!("   {}: {error}", field.label()),
        }
    }
}

/// Display the headline counters
pub fn display_stat_cards(cards: &[StatCard]) {
    for card in cards {
        println!("   {:<20} {}", card.label, card.value);
    }
}

/// Display one labelled series as horizontal bars scaled to the largest value
pub fn display_bar_chart(title: &str, series: &[LabeledValue]) {
    println!("\n{title}");
    println!("{}", "-".repeat(title.chars().count()));
    if series.is_empty() {
        println!("No data");
        return;
    }

    let max = series.iter().map(|d| d.value).fold(0.0_f64, f64::max);
    let label_width = series
        .iter()
        .map(|d| d.label.chars().count())
        .max()
        .unwrap_or(0);

    for datum in series {
        let len = if max > 0.0 {
            (datum.value / max * BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        println!(
            "{:<label_width$} | {} {:.1}",
            datum.label,
            "#".repeat(len),
            datum.value
        );
    }
}

/// Display a scatter series as its extent
pub fn display_points(title: &str, points: &[CorrelationPoint]) {
    println!("\n{title}");
    println!("{}", "-".repeat(title.chars().count()));
    if points.is_empty() {
        println!("No data");
        return;
    }

    let (min_x, max_x) = extent(points.iter().map(|p| p.x));
    let (min_y, max_y) = extent(points.iter().map(|p| p.y));
    println!("   {} points", points.len());
    println!("   x: {min_x:.1} .. {max_x:.1}");
    println!("   y: {min_y:.1} .. {max_y:.1}");
}

fn extent(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    })
}
