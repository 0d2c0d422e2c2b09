// ABOUTME: Statistics dashboard holding the loading state and the last activation's view
// ABOUTME: Each activate() runs exactly one fetch cycle with no caching across activations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;

use super::orchestrator::{StatsOrchestrator, StatsSource, StatsView};

/// What the dashboard currently shows
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "state", content = "view", rename_all = "snake_case")]
pub enum DashboardState {
    /// Never activated, or an activation is in progress
    #[default]
    Loading,
    /// Result of the most recent completed activation
    Ready(StatsView),
}

/// Owns one dashboard's state exclusively
pub struct StatsDashboard<S> {
    orchestrator: StatsOrchestrator<S>,
    view: Option<StatsView>,
}

impl<S: StatsSource> StatsDashboard<S> {
    /// Dashboard in `Loading`, ready for its first activation
    #[must_use]
    pub const fn new(source: S) -> Self {
        Self {
            orchestrator: StatsOrchestrator::new(source),
            view: None,
        }
    }

    /// Current state
    #[must_use]
    pub fn state(&self) -> DashboardState {
        self.view
            .clone()
            .map_or(DashboardState::Loading, DashboardState::Ready)
    }

    /// View of the last completed activation
    #[must_use]
    pub const fn view(&self) -> Option<&StatsView> {
        self.view.as_ref()
    }

    /// Run one fetch cycle and store its view.
    ///
    /// The previous view is discarded first and the new one is written only
    /// after every request has settled, so dropping the returned future
    /// leaves the dashboard in `Loading` with no partial data.
    pub async fn activate(&mut self) -> &StatsView {
        self.view = None;
        let view = self.orchestrator.load().await;
        self.view.insert(view)
    }
}
