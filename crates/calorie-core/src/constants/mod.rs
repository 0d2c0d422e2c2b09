// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Endpoint paths, user-facing messages and client defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants grouped by domain rather than kept in a single flat list.

/// Prediction service endpoints
pub mod endpoints {
    /// Calorie prediction endpoint (POST)
    pub const PREDICT: &str = "/predict";
    /// Summary counters
    pub const STATS_SUMMARY: &str = "/stats/summary";
    /// Histogram of one column, followed by `/<column>`
    pub const STATS_DISTRIBUTION: &str = "/stats/distribution";
    /// Average calories grouped by gender
    pub const STATS_AVERAGE_BY_GENDER: &str = "/stats/average_by_gender";
    /// Average calories grouped by age group
    pub const STATS_AVERAGE_BY_AGE_GROUP: &str = "/stats/average_by_age_group";
    /// Average calories grouped by duration bin
    pub const STATS_AVERAGE_BY_DURATION_BIN: &str = "/stats/average_by_duration_bin";
    /// Seven most frequent workout durations
    pub const STATS_TOP_DURATIONS: &str = "/stats/top_durations";
    /// Seven most frequent heart rates
    pub const STATS_TOP_HEART_RATES: &str = "/stats/top_heart_rates";
    /// Scatter points between two columns, followed by `/<x>_vs_<y>`
    pub const STATS_CORRELATION: &str = "/stats/correlation";
}

/// Dataset column names understood by the statistics endpoints
pub mod columns {
    /// Calories burnt
    pub const CALORIES: &str = "Calories";
    /// Workout duration in minutes
    pub const DURATION: &str = "Duration";
}

/// Status value the prediction service uses to signal success
pub const SUCCESS_STATUS: &str = "success";

/// User-facing messages
pub mod messages {
    /// Validation message for an empty field
    pub const REQUIRED: &str = "Required";
    /// Summary shown when a submission is blocked by field errors
    pub const FIX_FORM_ERRORS: &str = "Please fix form errors";
    /// Service reported failure without a message
    pub const PREDICTION_FAILED: &str = "Prediction failed";
    /// Transport failure without a usable message
    pub const GENERIC_FAILURE: &str = "Error occurred";
    /// Every statistics request failed
    pub const STATS_UNAVAILABLE: &str =
        "Failed to load statistics. Please ensure the backend is running and accessible.";
}

/// Environment variable names
pub mod env_config {
    /// Base URL of the prediction service
    pub const API_URL: &str = "CALORIE_API_URL";
}

/// Client defaults
pub mod defaults {
    /// Prediction service base URL when nothing is configured
    pub const API_URL: &str = "http://localhost:5000";
    /// Request timeout in seconds
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;
    /// Connection timeout in seconds
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;
}

/// Service names used in structured logs
pub mod service_names {
    /// This client
    pub const CALORIE_INSIGHT: &str = "calorie-insight";
}
