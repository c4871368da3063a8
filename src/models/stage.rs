use serde::{Deserialize, Serialize};

/// Stage lifecycle state as reported by the dashboard server
///
/// - Building: run in progress, nothing has failed yet
/// - Failing: run in progress, at least one job already failed
/// - Passed / Failed / Cancelled: terminal
/// - Unknown: never scheduled or state not reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StageState {
    Building,
    Failing,
    Passed,
    Failed,
    Cancelled,
    Unknown,
}

impl StageState {
    pub fn as_str(&self) -> &'static str {
        match self {
            StageState::Building => "Building",
            StageState::Failing => "Failing",
            StageState::Passed => "Passed",
            StageState::Failed => "Failed",
            StageState::Cancelled => "Cancelled",
            StageState::Unknown => "Unknown",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Passed | Self::Failed | Self::Cancelled)
    }
}

impl Default for StageState {
    fn default() -> Self {
        StageState::Unknown
    }
}

/// A single stage run within a pipeline instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stage {
    pub name: String,
    #[serde(default = "default_counter")]
    pub counter: u32,
    #[serde(default)]
    pub status: StageState,
}

fn default_counter() -> u32 {
    1
}

impl Stage {
    pub fn new(name: impl Into<String>, status: StageState) -> Self {
        Self {
            name: name.into(),
            counter: default_counter(),
            status,
        }
    }

    pub fn is_building(&self) -> bool {
        self.status == StageState::Building
    }

    pub fn is_failing(&self) -> bool {
        self.status == StageState::Failing
    }

    pub fn is_failed(&self) -> bool {
        self.status == StageState::Failed
    }

    pub fn is_cancelled(&self) -> bool {
        self.status == StageState::Cancelled
    }
}
