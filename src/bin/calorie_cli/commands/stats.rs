// ABOUTME: Stats command for calorie-cli
// ABOUTME: Runs one dashboard activation and renders stat cards and text charts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use calorie_insight::{
    client::CalorieApiClient,
    config::ClientConfig,
    errors::AppResult,
    stats::{
        shaper::{summary_cards, to_series},
        Dataset, StatsBundle, StatsDashboard, StatsView,
    },
};
use tracing::info;

use crate::helpers::display::{display_bar_chart, display_points, display_stat_cards, print_json};

/// Load the dashboard once and print it.
///
/// Returns `false` only when no dataset could be loaded.
pub async fn run(config: &ClientConfig, json: bool) -> AppResult<bool> {
    let client = CalorieApiClient::new(config)?;
    let mut dashboard = StatsDashboard::new(client);
    info!(base_url = %config.base_url, "Loading statistics");

    let view = dashboard.activate().await;
    if json {
        print_json(view)?;
        return Ok(matches!(view, StatsView::Loaded(_)));
    }

    match view {
        StatsView::Loaded(bundle) => {
            render(bundle);
            Ok(true)
        }
        StatsView::Failed(message) => {
            eprintln!("Error: {message}");
            Ok(false)
        }
    }
}

fn render(bundle: &StatsBundle) {
    println!("\nWorkout Statistics");
    println!("{}", "=".repeat(60));
    match &bundle.summary {
        Some(summary) => display_stat_cards(&summary_cards(summary)),
        None => println!("No data"),
    }

    display_bar_chart(
        Dataset::CalorieDistribution.title(),
        &bundle.calorie_distribution,
    );
    display_bar_chart(
        Dataset::AverageByGender.title(),
        &to_series(&bundle.average_by_gender),
    );
    display_bar_chart(
        Dataset::AverageByAgeGroup.title(),
        &to_series(&bundle.average_by_age_group),
    );
    display_bar_chart(
        Dataset::AverageByDurationBin.title(),
        &to_series(&bundle.average_by_duration_bin),
    );
    display_bar_chart(
        Dataset::TopDurations.title(),
        &to_series(&bundle.top_durations),
    );
    display_bar_chart(
        Dataset::TopHeartRates.title(),
        &to_series(&bundle.top_heart_rates),
    );
    display_points(
        Dataset::CaloriesVsDuration.title(),
        &bundle.calories_vs_duration,
    );

    for (dataset, error) in &bundle.failures {
        eprintln!("warning: {} unavailable ({error})", dataset.title());
    }
}
