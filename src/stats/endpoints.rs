// ABOUTME: Statistics endpoint paths and the eight datasets behind the dashboard
// ABOUTME: StatsEndpoint models the service routes, Dataset names each dashboard slot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use serde::Serialize;

use crate::constants::{columns, endpoints};

/// One `GET` route of the statistics service
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StatsEndpoint {
    /// Summary counters
    Summary,
    /// Histogram of one dataset column
    Distribution {
        /// Column name, e.g. `Calories`
        column: String,
    },
    /// Average calories by gender
    AverageByGender,
    /// Average calories by age group
    AverageByAgeGroup,
    /// Average calories by duration bin
    AverageByDurationBin,
    /// Most frequent durations
    TopDurations,
    /// Most frequent heart rates
    TopHeartRates,
    /// Scatter points between two columns
    Correlation {
        /// Horizontal column
        x: String,
        /// Vertical column
        y: String,
    },
}

impl StatsEndpoint {
    /// Path relative to the service base URL
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Summary => endpoints::STATS_SUMMARY.to_owned(),
            Self::Distribution { column } => format!("{}/{column}", endpoints::STATS_DISTRIBUTION),
            Self::AverageByGender => endpoints::STATS_AVERAGE_BY_GENDER.to_owned(),
            Self::AverageByAgeGroup => endpoints::STATS_AVERAGE_BY_AGE_GROUP.to_owned(),
            Self::AverageByDurationBin => endpoints::STATS_AVERAGE_BY_DURATION_BIN.to_owned(),
            Self::TopDurations => endpoints::STATS_TOP_DURATIONS.to_owned(),
            Self::TopHeartRates => endpoints::STATS_TOP_HEART_RATES.to_owned(),
            Self::Correlation { x, y } => format!("{}/{x}_vs_{y}", endpoints::STATS_CORRELATION),
        }
    }
}

impl fmt::Display for StatsEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// The eight dashboard datasets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Dataset {
    /// Summary counters
    Summary,
    /// Calorie histogram
    CalorieDistribution,
    /// Average calories by gender
    AverageByGender,
    /// Average calories by age group
    AverageByAgeGroup,
    /// Average calories by duration bin
    AverageByDurationBin,
    /// Top seven durations
    TopDurations,
    /// Top seven heart rates
    TopHeartRates,
    /// Calories against duration
    CaloriesVsDuration,
}

impl Dataset {
    /// Every dataset, in dashboard order
    pub const ALL: [Self; 8] = [
        Self::Summary,
        Self::CalorieDistribution,
        Self::AverageByGender,
        Self::AverageByAgeGroup,
        Self::AverageByDurationBin,
        Self::TopDurations,
        Self::TopHeartRates,
        Self::CaloriesVsDuration,
    ];

    /// Route that serves this dataset
    #[must_use]
    pub fn endpoint(self) -> StatsEndpoint {
        match self {
            Self::Summary => StatsEndpoint::Summary,
            Self::CalorieDistribution => StatsEndpoint::Distribution {
                column: columns::CALORIES.to_owned(),
            },
            Self::AverageByGender => StatsEndpoint::AverageByGender,
            Self::AverageByAgeGroup => StatsEndpoint::AverageByAgeGroup,
            Self::AverageByDurationBin => StatsEndpoint::AverageByDurationBin,
            Self::TopDurations => StatsEndpoint::TopDurations,
            Self::TopHeartRates => StatsEndpoint::TopHeartRates,
            Self::CaloriesVsDuration => StatsEndpoint::Correlation {
                x: columns::CALORIES.to_owned(),
                y: columns::DURATION.to_owned(),
            },
        }
    }

    /// Chart title
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Summary => "Summary",
            Self::CalorieDistribution => "Calories Distribution",
            Self::AverageByGender => "Avg Calories by Gender",
            Self::AverageByAgeGroup => "Avg Calories by Age Group",
            Self::AverageByDurationBin => "Avg Calories by Duration",
            Self::TopDurations => "Top Workout Durations",
            Self::TopHeartRates => "Top Heart Rates",
            Self::CaloriesVsDuration => "Calories vs Duration",
        }
    }
}
