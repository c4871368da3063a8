use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Status categories a user can select on the dashboard
///
/// Note the naming: `Failing` selects stages that have *failed* (terminal),
/// while stages that are failing but still running fall under `Building`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    Paused,
    Building,
    Failing,
    Cancelled,
}

impl StatusFilter {
    pub const ALL: [StatusFilter; 4] = [
        StatusFilter::Paused,
        StatusFilter::Building,
        StatusFilter::Failing,
        StatusFilter::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::Paused => "paused",
            StatusFilter::Building => "building",
            StatusFilter::Failing => "failing",
            StatusFilter::Cancelled => "cancelled",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown status filter: '{0}'. Valid values: paused, building, failing, cancelled")]
pub struct UnknownStatusFilter(pub String);

impl FromStr for StatusFilter {
    type Err = UnknownStatusFilter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StatusFilter::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| UnknownStatusFilter(s.to_string()))
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
