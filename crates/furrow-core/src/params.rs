//! Parameter structures for planner operations.
//!
//! These are shared by every front end. They carry no framework derives
//! beyond serde; the CLI wraps them in clap `Args` structs and converts with
//! `From`, while the MCP server deserializes them directly and gets their
//! JSON schema from the optional `schema` feature.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    error::{FurrowError, Result},
    models::{LogStatus, PlantingRecord},
};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Id {
    pub id: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CreatePlan {
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct AddPlant {
    pub name: String,
    /// Plant type names; unknown names are created
    #[serde(default)]
    pub plant_types: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct AddLocation {
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct AddPlanting {
    pub plan_id: u64,
    pub plant_id: u64,
    /// Seeding date as epoch seconds
    pub seeding_date: Option<i64>,
    pub transplant_days: Option<u32>,
    pub maturity_days: Option<u32>,
    pub harvest_days: Option<u32>,
}

impl AddPlanting {
    /// The record to insert; its ID is assigned by the store.
    pub fn to_record(&self) -> PlantingRecord {
        PlantingRecord {
            id: 0,
            plan_id: self.plan_id,
            plant_id: self.plant_id,
            seeding_date: self.seeding_date,
            transplant_days: self.transplant_days,
            maturity_days: self.maturity_days,
            harvest_days: self.harvest_days,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct RecordLog {
    pub plant_id: u64,
    /// Log bundle, e.g. `seeding`, `transplanting`, `harvest`, `activity`
    pub log_type: String,
    pub name: String,
    /// Epoch seconds
    pub timestamp: i64,
    /// `pending` (default) or `done`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl RecordLog {
    /// Parses the requested status.
    pub fn validate(&self) -> Result<LogStatus> {
        match &self.status {
            None => Ok(LogStatus::default()),
            Some(status) => status.parse::<LogStatus>().map_err(|_| {
                FurrowError::invalid_input("status").with_reason(format!(
                    "Invalid status: {status}. Must be 'pending' or 'done'"
                ))
            }),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct RecordMovement {
    pub plant_id: u64,
    /// Epoch seconds
    pub timestamp: i64,
    pub locations: Vec<u64>,
}

/// A timeline request for one plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct PlanTimeline {
    pub plan_id: u64,
    /// Include location occupancy tasks; defaults to true only when grouping
    /// by location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_locations: Option<bool>,
    /// Window start as epoch seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<i64>,
    /// Window end as epoch seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<i64>,
    /// Return the flattened row and task lists instead of the nested tree
    #[serde(default)]
    pub flat: bool,
}
