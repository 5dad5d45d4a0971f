//! Grouping dimension for timeline rows.

use std::{fmt, str::FromStr};

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Axis used to build the top-level timeline rows.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum GroupBy {
    /// One group per plant type term
    #[default]
    PlantType,

    /// One group per location the plant has occupied
    Location,
}

impl GroupBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            GroupBy::PlantType => "plant_type",
            GroupBy::Location => "location",
        }
    }

    /// Heading used when rendering the grouping.
    pub fn heading(&self) -> &'static str {
        match self {
            GroupBy::PlantType => "By Plant Type",
            GroupBy::Location => "By Location",
        }
    }
}

impl FromStr for GroupBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plant_type" | "plant-type" | "type" => Ok(GroupBy::PlantType),
            "location" => Ok(GroupBy::Location),
            _ => Err(format!("Invalid grouping: {s}")),
        }
    }
}

impl fmt::Display for GroupBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
