// ABOUTME: Predict command for calorie-cli
// ABOUTME: Fills one workout form, validates it and submits it to the prediction service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use calorie_insight::{
    client::CalorieApiClient,
    config::ClientConfig,
    errors::AppResult,
    models::{PredictionRequest, WorkoutField},
    prediction::{PredictionController, SubmissionState},
    validation::validate_all,
};
use tracing::info;

use crate::helpers::display::{display_field_errors, display_prediction, print_json};

/// Fill the form from `fields` and submit it once.
///
/// Returns `false` when the form was invalid or the service failed.
pub async fn run(
    config: &ClientConfig,
    fields: [(WorkoutField, String); 7],
    dry_run: bool,
    json: bool,
) -> AppResult<bool> {
    let client = CalorieApiClient::new(config)?;
    let mut form = PredictionController::new(client);
    for (field, raw) in fields {
        form.set_field(field, raw)?;
    }

    if dry_run {
        return check_only(&form, json);
    }

    info!(base_url = %config.base_url, "Submitting workout");
    let state = form.submit().await;
    if json {
        print_json(&state)?;
        return Ok(matches!(state, SubmissionState::Success(_)));
    }

    match &state {
        SubmissionState::Success(result) => {
            display_prediction(result);
            Ok(true)
        }
        SubmissionState::Invalid(errors) => {
            display_field_errors(errors);
            Ok(false)
        }
        SubmissionState::Failed(message) => {
            eprintln!("Error: {message}");
            Ok(false)
        }
        SubmissionState::Idle | SubmissionState::Validating | SubmissionState::Submitting => {
            Ok(false)
        }
    }
}

fn check_only(form: &PredictionController<CalorieApiClient>, json: bool) -> AppResult<bool> {
    let errors = validate_all(form.input());
    if errors.has_errors() {
        if json {
            print_json(&errors)?;
        } else {
            display_field_errors(&errors);
        }
        return Ok(false);
    }

    let request = PredictionRequest::try_from(form.input())?;
    if json {
        print_json(&request)?;
    } else {
        println!("Form is valid. Request body:");
        println!("{}", serde_json::to_string_pretty(&request)?);
    }
    Ok(true)
}
