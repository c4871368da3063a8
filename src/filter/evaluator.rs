//! Status filter evaluator
//!
//! Decides whether a pipeline's current status matches the statuses selected
//! on the dashboard.
//!
//! # Precedence
//!
//! With an empty selection every pipeline matches. Otherwise the first rule
//! that applies wins:
//!
//! 1. Paused pipeline and `paused` selected - match
//! 2. No stage has run - no match
//! 3. Latest stage building or failing (in progress) - match iff `building` selected
//! 4. Latest stage failed - match iff `failing` selected
//! 5. Latest stage cancelled - match iff `cancelled` selected
//! 6. Anything else (passed, unknown) - no match

use crate::filter::status::StatusFilter;
use crate::models::{PipelineView, StageView};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Selected status categories
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    #[serde(default)]
    pub state: BTreeSet<StatusFilter>,
}

impl FilterConfig {
    pub fn new(state: impl IntoIterator<Item = StatusFilter>) -> Self {
        Self {
            state: state.into_iter().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    pub fn includes(&self, status: StatusFilter) -> bool {
        self.state.contains(&status)
    }
}

/// Status filter for dashboard pipelines
#[derive(Debug, Clone, Default)]
pub struct DashboardFilter {
    config: FilterConfig,
}

impl DashboardFilter {
    pub fn new(config: FilterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Evaluate the filter against a pipeline
    pub fn accepts_status_of<P: PipelineView>(&self, pipeline: &P) -> bool {
        if self.config.is_empty() {
            return true;
        }

        if pipeline.is_paused() && self.config.includes(StatusFilter::Paused) {
            return true;
        }

        let Some(latest_stage) = pipeline.latest_stage() else {
            log::trace!("No stage has run, rejecting");
            return false;
        };

        // A failing stage is still running, so it is shown as building
        if latest_stage.is_building() || latest_stage.is_failing() {
            return self.config.includes(StatusFilter::Building);
        }
        if latest_stage.is_failed() {
            return self.config.includes(StatusFilter::Failing);
        }
        if latest_stage.is_cancelled() {
            return self.config.includes(StatusFilter::Cancelled);
        }

        false
    }

    /// Keep the pipelines whose status matches, in input order
    pub fn filter_pipelines<'a, P, I>(&self, pipelines: I) -> Vec<&'a P>
    where
        P: PipelineView + 'a,
        I: IntoIterator<Item = &'a P>,
    {
        let matched: Vec<&'a P> = pipelines
            .into_iter()
            .filter(|pipeline| self.accepts_status_of(*pipeline))
            .collect();
        log::debug!("Status filter {:?} matched {} pipelines", self.config.state, matched.len());
        matched
    }
}
