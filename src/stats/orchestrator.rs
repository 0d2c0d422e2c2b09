// ABOUTME: Concurrent fetch of the eight dashboard datasets with per-dataset failure isolation
// ABOUTME: Produces a StatsBundle unless every request failed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeMap;

use async_trait::async_trait;
use futures_util::future::join_all;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use super::endpoints::{Dataset, StatsEndpoint};
use super::shaper::{extract_points, normalize_summary, passthrough_records, shape_histogram};
use crate::constants::messages;
use crate::errors::ClientError;
use crate::models::{
    AgeGroupAverage, CorrelationPoint, DurationBinAverage, DurationFrequency, GenderAverage,
    HeartRateFrequency, LabeledValue, StatsSummary,
};

/// Read-only source of raw statistics payloads
#[async_trait]
pub trait StatsSource: Send + Sync {
    /// Fetch one endpoint's JSON body
    async fn fetch(&self, endpoint: &StatsEndpoint) -> Result<Value, ClientError>;
}

/// Every dashboard dataset, each shaped and degraded on its own
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StatsBundle {
    /// Summary counters; `None` when unavailable or malformed
    pub summary: Option<StatsSummary>,
    /// Calorie histogram bars
    pub calorie_distribution: Vec<LabeledValue>,
    /// Average calories by gender
    pub average_by_gender: Vec<GenderAverage>,
    /// Average calories by age group
    pub average_by_age_group: Vec<AgeGroupAverage>,
    /// Average calories by duration bin
    pub average_by_duration_bin: Vec<DurationBinAverage>,
    /// Most frequent durations
    pub top_durations: Vec<DurationFrequency>,
    /// Most frequent heart rates
    pub top_heart_rates: Vec<HeartRateFrequency>,
    /// Calories against duration scatter
    pub calories_vs_duration: Vec<CorrelationPoint>,
    /// Datasets whose request failed, with the failure text
    pub failures: BTreeMap<Dataset, String>,
}

impl StatsBundle {
    /// Whether the request for `dataset` succeeded
    #[must_use]
    pub fn is_available(&self, dataset: Dataset) -> bool {
        !self.failures.contains_key(&dataset)
    }

    /// Whether `dataset` has anything to draw
    #[must_use]
    pub fn has_data(&self, dataset: Dataset) -> bool {
        match dataset {
            Dataset::Summary => self.summary.is_some(),
            Dataset::CalorieDistribution => !self.calorie_distribution.is_empty(),
            Dataset::AverageByGender => !self.average_by_gender.is_empty(),
            Dataset::AverageByAgeGroup => !self.average_by_age_group.is_empty(),
            Dataset::AverageByDurationBin => !self.average_by_duration_bin.is_empty(),
            Dataset::TopDurations => !self.top_durations.is_empty(),
            Dataset::TopHeartRates => !self.top_heart_rates.is_empty(),
            Dataset::CaloriesVsDuration => !self.calories_vs_duration.is_empty(),
        }
    }

    /// Shape one payload into its slot; slots are disjoint so arrival order is irrelevant
    fn absorb(&mut self, dataset: Dataset, payload: &Value) {
        match dataset {
            Dataset::Summary => self.summary = normalize_summary(payload),
            Dataset::CalorieDistribution => self.calorie_distribution = shape_histogram(payload),
            Dataset::AverageByGender => self.average_by_gender = passthrough_records(payload),
            Dataset::AverageByAgeGroup => self.average_by_age_group = passthrough_records(payload),
            Dataset::AverageByDurationBin => {
                self.average_by_duration_bin = passthrough_records(payload);
            }
            Dataset::TopDurations => self.top_durations = passthrough_records(payload),
            Dataset::TopHeartRates => self.top_heart_rates = passthrough_records(payload),
            Dataset::CaloriesVsDuration => self.calories_vs_duration = extract_points(payload),
        }
    }
}

/// Outcome of one dashboard activation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum StatsView {
    /// At least one dataset arrived
    Loaded(StatsBundle),
    /// Every request failed
    Failed(String),
}

/// Issues the eight dataset requests for one activation
pub struct StatsOrchestrator<S> {
    source: S,
}

impl<S: StatsSource> StatsOrchestrator<S> {
    /// Create an orchestrator over `source`
    #[must_use]
    pub const fn new(source: S) -> Self {
        Self { source }
    }

    /// Fetch every dataset concurrently, once, without retry.
    ///
    /// A failed or malformed dataset only empties its own slot. The view is
    /// `Failed` only when all eight requests fail.
    pub async fn load(&self) -> StatsView {
        let responses = join_all(Dataset::ALL.into_iter().map(|dataset| async move {
            let endpoint = dataset.endpoint();
            let outcome = self.source.fetch(&endpoint).await;
            (dataset, outcome)
        }))
        .await;

        let mut bundle = StatsBundle::default();
        for (dataset, outcome) in responses {
            match outcome {
                Ok(payload) => {
                    bundle.absorb(dataset, &payload);
                    debug!(
                        dataset = ?dataset,
                        has_data = bundle.has_data(dataset),
                        "Statistics dataset shaped"
                    );
                }
                Err(e) => {
                    warn!(dataset = ?dataset, error = %e, "Statistics request failed");
                    bundle.failures.insert(dataset, e.to_string());
                }
            }
        }

        if bundle.failures.len() == Dataset::ALL.len() {
            warn!("All statistics requests failed");
            return StatsView::Failed(messages::STATS_UNAVAILABLE.to_owned());
        }

        info!(
            failed = bundle.failures.len(),
            total = Dataset::ALL.len(),
            "Statistics loaded"
        );
        StatsView::Loaded(bundle)
    }
}
