// ABOUTME: Statistics dashboard pipeline - endpoints, concurrent fetch and pure shaping
// ABOUTME: Re-exports the orchestrator, dashboard, bundle and shaping helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Statistics dashboard.
//!
//! Eight datasets are fetched independently; each one is normalized and
//! shaped on its own, so one bad or missing dataset only empties its own
//! chart.

mod dashboard;
mod endpoints;
mod orchestrator;
pub mod shaper;

pub use dashboard::{DashboardState, StatsDashboard};
pub use endpoints::{Dataset, StatsEndpoint};
pub use orchestrator::{StatsBundle, StatsOrchestrator, StatsSource, StatsView};
