use serde::{Deserialize, Serialize};
use std::path::Path;
use anyhow::{Context, Result};
use crate::models::Stage;

/// Pipeline as shown on the dashboard
///
/// Stages are kept in run order, so the latest stage is the last one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pipeline {
    pub name: String,
    #[serde(default)]
    pub paused: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paused_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pause_reason: Option<String>,
    #[serde(default)]
    pub stages: Vec<Stage>,
}

impl Pipeline {
    /// Create an unpaused pipeline with no stage runs
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            paused: false,
            paused_by: None,
            pause_reason: None,
            stages: Vec::new(),
        }
    }

    pub fn with_stage(mut self, stage: Stage) -> Self {
        self.stages.push(stage);
        self
    }

    pub fn paused(mut self, by: impl Into<String>, reason: impl Into<String>) -> Self {
        self.paused = true;
        self.paused_by = Some(by.into());
        self.pause_reason = Some(reason.into());
        self
    }

    pub fn latest_stage(&self) -> Option<&Stage> {
        self.stages.last()
    }
}

/// Dashboard snapshot: every pipeline the server currently reports
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dashboard {
    #[serde(default)]
    pub pipelines: Vec<Pipeline>,
}

impl Dashboard {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse dashboard snapshot")
    }

    /// Load a snapshot from disk
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read dashboard snapshot: {}", path.display()))?;
        let dashboard: Dashboard = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse dashboard snapshot: {}", path.display()))?;
        log::debug!("Loaded {} pipelines from {}", dashboard.pipelines.len(), path.display());
        Ok(dashboard)
    }
}
