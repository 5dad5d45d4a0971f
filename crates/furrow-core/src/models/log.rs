//! Activity log model.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Status of an activity log.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogStatus {
    /// Planned, not yet carried out
    #[default]
    Pending,

    /// Carried out
    Done,
}

impl FromStr for LogStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(LogStatus::Pending),
            "done" => Ok(LogStatus::Done),
            _ => Err(format!("Invalid log status: {s}")),
        }
    }
}

impl LogStatus {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            LogStatus::Pending => "pending",
            LogStatus::Done => "done",
        }
    }
}

impl fmt::Display for LogStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An activity log recorded against a plant asset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogEntry {
    /// Unique identifier for the log
    pub id: u64,

    /// ID of the plant the log references
    pub plant_id: u64,

    /// Log type (bundle), e.g. `seeding`, `transplanting`, `harvest`
    pub log_type: String,

    /// Log name shown as the task label
    pub name: String,

    /// When the activity happened or is planned (epoch seconds)
    pub timestamp: i64,

    /// Whether the activity has been carried out
    #[serde(default)]
    pub status: LogStatus,
}
