//! Plant and location asset models.

use serde::{Deserialize, Serialize};

/// A plant type taxonomy term (e.g. "Lettuce").
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlantType {
    pub id: u64,
    pub name: String,
}

/// A tracked plant asset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Plant {
    /// Unique identifier for the plant asset
    pub id: u64,

    /// Display name of the plant asset
    pub name: String,

    /// Plant types this asset is tagged with. A plant with several types is
    /// listed under each of them in the by-type timeline.
    #[serde(default)]
    pub plant_types: Vec<PlantType>,
}

/// A location asset (field, bed, greenhouse, ...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Location {
    pub id: u64,
    pub name: String,
}
