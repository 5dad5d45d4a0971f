//! Derived stage intervals.

use std::{collections::BTreeSet, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Kind of a derived stage interval.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum StageKind {
    /// From seeding until transplanting (or maturity without transplanting)
    Seeding,

    /// From transplanting until maturity
    Transplanting,

    /// The harvest window after maturity
    Harvest,

    /// A location occupancy period
    Location,
}

impl StageKind {
    /// Machine name used in task metadata and style classes.
    pub fn as_str(&self) -> &'static str {
        match self {
            StageKind::Seeding => "seeding",
            StageKind::Transplanting => "transplanting",
            StageKind::Harvest => "harvest",
            StageKind::Location => "location",
        }
    }

    /// Human readable label.
    pub fn label(&self) -> &'static str {
        match self {
            StageKind::Seeding => "Seeding",
            StageKind::Transplanting => "Transplanting",
            StageKind::Harvest => "Harvest",
            StageKind::Location => "Location",
        }
    }
}

impl fmt::Display for StageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StageKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "seeding" => Ok(StageKind::Seeding),
            "transplanting" => Ok(StageKind::Transplanting),
            "harvest" => Ok(StageKind::Harvest),
            "location" => Ok(StageKind::Location),
            _ => Err(format!("Invalid stage kind: {s}")),
        }
    }
}

/// A derived time interval: one lifecycle phase or one occupancy period.
///
/// `end == None` means the interval is open-ended (still ongoing). It never
/// means zero.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Stage {
    #[serde(rename = "type")]
    pub kind: StageKind,

    /// Interval start (epoch seconds)
    pub start: i64,

    /// Interval end (epoch seconds), `None` when open-ended
    pub end: Option<i64>,

    /// Occupied locations, only populated for [`StageKind::Location`]
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub locations: BTreeSet<u64>,
}

impl Stage {
    /// Creates a stage without locations.
    pub fn new(kind: StageKind, start: i64, end: Option<i64>) -> Self {
        Self {
            kind,
            start,
            end,
            locations: BTreeSet::new(),
        }
    }

    /// Creates an open-ended location stage.
    pub fn location(start: i64, locations: BTreeSet<u64>) -> Self {
        Self {
            kind: StageKind::Location,
            start,
            end: None,
            locations,
        }
    }

    /// Whether the interval has no known end.
    pub fn is_open(&self) -> bool {
        self.end.is_none()
    }
}
