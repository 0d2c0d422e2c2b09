// ABOUTME: HTTP client for the calorie prediction service
// ABOUTME: Implements PredictionService and StatsSource over reqwest with JSON bodies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! reqwest-backed implementation of the two service seams.
//!
//! The prediction service answers `/predict` failures with a 400/500 status
//! and a JSON body carrying the message, so the body is read before the
//! status is judged.

mod http;

pub use http::build_client;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::{debug, instrument};

use crate::config::ClientConfig;
use crate::constants::{endpoints, messages, SUCCESS_STATUS};
use crate::errors::{AppResult, ClientError};
use crate::models::PredictionRequest;
use crate::prediction::PredictionService;
use crate::stats::{StatsEndpoint, StatsSource};
use http::status_message;

/// Client for one prediction service instance
#[derive(Debug, Clone)]
pub struct CalorieApiClient {
    config: ClientConfig,
    http_client: Client,
}

impl CalorieApiClient {
    /// Create a client with a pooled HTTP connection
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built
    pub fn new(config: &ClientConfig) -> AppResult<Self> {
        Ok(Self {
            config: config.clone(),
            http_client: build_client(config)?,
        })
    }

    /// Configuration this client was built from
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn url(&self, path: &str) -> Result<reqwest::Url, ClientError> {
        self.config
            .endpoint(path)
            .map_err(|e| ClientError::transport(e.message))
    }
}

#[async_trait]
impl PredictionService for CalorieApiClient {
    #[instrument(skip_all, fields(endpoint = endpoints::PREDICT))]
    async fn predict(&self, request: &PredictionRequest) -> Result<f64, ClientError> {
        let url = self.url(endpoints::PREDICT)?;
        let response = self
            .http_client
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let body = response.text().await.map_err(transport_error)?;
        debug!(status = status.as_u16(), "Prediction response received");
        interpret_prediction(status, &body)
    }
}

#[async_trait]
impl StatsSource for CalorieApiClient {
    #[instrument(skip_all, fields(endpoint = %endpoint))]
    async fn fetch(&self, endpoint: &StatsEndpoint) -> Result<Value, ClientError> {
        let path = endpoint.path();
        let url = self.url(&path)?;
        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::service(
                Some(status.as_u16()),
                status_message(status.as_u16()),
            ));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| ClientError::malformed(path, e.to_string()))
    }
}

/// The request produced no response
fn transport_error(error: reqwest::Error) -> ClientError {
    ClientError::transport(error.to_string())
}

/// Turn a `/predict` answer into kilocalories or the message to show.
///
/// A 2xx answer succeeds only with `status == "success"` and a numeric
/// `prediction`. Any failure prefers the body's `message`; without one a 2xx
/// falls back to "Prediction failed" and anything else to the status line.
fn interpret_prediction(status: StatusCode, body: &str) -> Result<f64, ClientError> {
    let payload = serde_json::from_str::<Value>(body).unwrap_or(Value::Null);
    let code = status.as_u16();

    if status.is_success() && payload.get("status").and_then(Value::as_str) == Some(SUCCESS_STATUS)
    {
        return payload
            .get("prediction")
            .and_then(Value::as_f64)
            .ok_or_else(|| {
                ClientError::malformed(endpoints::PREDICT, "success without a numeric prediction")
            });
    }

    let message = payload
        .get("message")
        .and_then(Value::as_str)
        .filter(|m| !m.trim().is_empty())
        .map(str::to_owned);

    let message = match message {
        Some(message) => message,
        None if status.is_success() => messages::PREDICTION_FAILED.to_owned(),
        None => status_message(code),
    };
    Err(ClientError::service(Some(code), message))
}
