// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, scripted service doubles and a valid workout form
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `calorie_insight`

use std::collections::HashMap;
use std::sync::{Arc, Mutex, Once};

use async_trait::async_trait;
use calorie_insight::{
    errors::ClientError,
    models::{PredictionRequest, WorkoutField},
    prediction::{PredictionController, PredictionService},
    stats::{StatsEndpoint, StatsSource},
};
use serde_json::Value;
use tokio::sync::Notify;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// A form that passes every bound
pub const VALID_WORKOUT: [(WorkoutField, &str); 7] = [
    (WorkoutField::Gender, "female"),
    (WorkoutField::Age, "30"),
    (WorkoutField::Height, "170"),
    (WorkoutField::Weight, "65"),
    (WorkoutField::Duration, "20"),
    (WorkoutField::HeartRate, "100"),
    (WorkoutField::BodyTemp, "40"),
];

/// Fill `form` with [`VALID_WORKOUT`]
pub fn fill_valid<S: PredictionService>(form: &mut PredictionController<S>) {
    for (field, raw) in VALID_WORKOUT {
        form.set_field(field, raw).unwrap();
    }
}

/// Prediction service double answering with a scripted outcome
#[derive(Clone)]
pub struct ScriptedPredictionService {
    outcome: Result<f64, ClientError>,
    requests: Arc<Mutex<Vec<PredictionRequest>>>,
    gate: Option<Arc<Notify>>,
}

impl ScriptedPredictionService {
    /// Answer every request with `calories`
    pub fn succeeding(calories: f64) -> Self {
        Self {
            outcome: Ok(calories),
            requests: Arc::default(),
            gate: None,
        }
    }

    /// Answer every request with `error`
    pub fn failing(error: ClientError) -> Self {
        Self {
            outcome: Err(error),
            requests: Arc::default(),
            gate: None,
        }
    }

    /// Hold each request until the returned `Notify` fires
    pub fn gated(mut self) -> (Self, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        self.gate = Some(Arc::clone(&gate));
        (self, gate)
    }

    /// Requests received so far
    pub fn requests(&self) -> Vec<PredictionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl PredictionService for ScriptedPredictionService {
    async fn predict(&self, request: &PredictionRequest) -> Result<f64, ClientError> {
        self.requests.lock().unwrap().push(*request);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.outcome.clone()
    }
}

/// Statistics source double keyed by endpoint path; unknown paths fail
#[derive(Clone, Default)]
pub struct ScriptedStatsSource {
    responses: Arc<HashMap<String, Result<Value, ClientError>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl ScriptedStatsSource {
    /// Source answering `responses` by path
    pub fn new(responses: impl IntoIterator<Item = (String, Result<Value, ClientError>)>) -> Self {
        Self {
            responses: Arc::new(responses.into_iter().collect()),
            calls: Arc::default(),
        }
    }

    /// Paths requested so far, in call order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl StatsSource for ScriptedStatsSource {
    async fn fetch(&self, endpoint: &StatsEndpoint) -> Result<Value, ClientError> {
        let path = endpoint.path();
        self.calls.lock().unwrap().push(path.clone());
        self.responses
            .get(&path)
            .cloned()
            .unwrap_or_else(|| Err(ClientError::service(Some(404), "Request failed with status code 404")))
    }
}
