//! Per-planting summary model.

use serde::{Deserialize, Serialize};

/// Tabular overview of one planting record within a plan.
///
/// Counts are computed from the same stage generators that feed the
/// timeline, so the table and the chart never disagree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlantingSummary {
    pub planting_id: u64,
    pub plant_id: u64,
    pub plant_name: String,
    pub seeding_date: Option<i64>,
    pub transplant_days: Option<u32>,
    pub maturity_days: Option<u32>,
    pub harvest_days: Option<u32>,

    /// Number of activity logs referencing the plant
    pub log_count: usize,

    /// Number of planned lifecycle stages
    pub stage_count: usize,

    /// Number of location occupancy stages
    pub location_stage_count: usize,

    /// Timestamp of the earliest `seeding` log, if any
    pub first_seeding: Option<i64>,

    /// Timestamp of the earliest `transplanting` log, if any
    pub first_transplanting: Option<i64>,
}
