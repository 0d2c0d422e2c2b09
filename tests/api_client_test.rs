// ABOUTME: Integration tests for the reqwest-backed prediction service client
// ABOUTME: Runs predict and stats requests against a wiremock server
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use anyhow::Result;
use calorie_insight::{
    client::CalorieApiClient,
    config::ClientConfig,
    errors::ClientError,
    models::{Gender, PredictionRequest},
    prediction::{PredictionController, PredictionService, SubmissionState},
    stats::{Dataset, StatsDashboard, StatsSource, StatsView},
};
use common::{fill_valid, init_test_logging};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> CalorieApiClient {
    CalorieApiClient::new(&ClientConfig::new(&server.uri()).unwrap()).unwrap()
}

fn sample_request() -> PredictionRequest {
    PredictionRequest {
        gender: Gender::Male,
        age: 30.0,
        height: 180.0,
        weight: 80.0,
        duration: 20.0,
        heart_rate: 100.0,
        body_temp: 40.0,
    }
}

#[tokio::test]
async fn test_predict_posts_snake_case_body() -> Result<()> {
    init_test_logging();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict"))
        .and(body_json(json!({
            "gender": "male",
            "age": 30.0,
            "height": 180.0,
            "weight": 80.0,
            "duration": 20.0,
            "heart_rate": 100.0,
            "body_temp": 40.0
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"status": "success", "prediction": 143.2})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let calories = client_for(&server).predict(&sample_request()).await?;

    assert!((calories - 143.2).abs() < f64::EPSILON);
    Ok(())
}

#[tokio::test]
async fn test_predict_error_status_uses_body_message() {
    init_test_logging();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(json!({"status": "error", "message": "Missing fields: age"})),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .predict(&sample_request())
        .await
        .unwrap_err();

    assert_eq!(err, ClientError::service(Some(400), "Missing fields: age"));
}

#[tokio::test]
async fn test_predict_unreachable_is_transport() {
    init_test_logging();
    // bind then release an ephemeral port so nothing is listening on it
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    let uri = format!("http://127.0.0.1:{port}");

    let client = CalorieApiClient::new(&ClientConfig::new(&uri).unwrap()).unwrap();
    let err = client.predict(&sample_request()).await.unwrap_err();

    assert!(err.is_transport(), "expected transport error, got {err:?}");
    assert!(!err.to_string().is_empty());
}

#[tokio::test]
async fn test_controller_end_to_end() {
    init_test_logging();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"status": "success", "prediction": 250.0})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut form = PredictionController::new(client_for(&server));
    fill_valid(&mut form);
    let state = form.submit().await;

    let SubmissionState::Success(result) = state else {
        panic!("expected Success, got {state:?}");
    };
    assert!((result.calories - 250.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_stats_non_success_status_is_service_error() {
    init_test_logging();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stats/summary"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .fetch(&Dataset::Summary.endpoint())
        .await
        .unwrap_err();

    assert_eq!(
        err,
        ClientError::service(Some(500), "Request failed with status code 500")
    );
}

#[tokio::test]
async fn test_dashboard_over_http_with_partial_outage() {
    init_test_logging();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stats/distribution/Calories"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"bins": [0, 10, 20, 30], "counts": [5, 8, 2]})),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/stats/top_durations"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([{"duration": 26.0, "count": 560}])),
        )
        .mount(&server)
        .await;

    let mut dashboard = StatsDashboard::new(client_for(&server));
    let StatsView::Loaded(bundle) = dashboard.activate().await else {
        panic!("two datasets should load");
    };

    assert_eq!(bundle.calorie_distribution.len(), 3);
    assert_eq!(bundle.top_durations.len(), 1);
    assert_eq!(bundle.failures.len(), 6);
    assert!(!bundle.is_available(Dataset::Summary));
}
