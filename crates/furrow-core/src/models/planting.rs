//! Planting record model and boundary validation.

use log::warn;
use serde::{Deserialize, Serialize};

use super::timestamp::check_timestamp;
use crate::error::{FurrowError, Result};

/// Largest accepted day offset for transplant, maturity and harvest days.
pub const MAX_DAY_OFFSET: u32 = 365;

/// The scheduling offsets of one plant within a plan.
///
/// Records are validated when they cross the record-store boundary (see
/// [`PlantingRecord::validate`]); the stage generators assume every present
/// offset is already within `1..=MAX_DAY_OFFSET`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlantingRecord {
    /// Unique identifier for the planting record
    pub id: u64,

    /// ID of the plan owning this record
    pub plan_id: u64,

    /// ID of the tracked plant asset
    pub plant_id: u64,

    /// Planned seeding date (epoch seconds)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seeding_date: Option<i64>,

    /// Days from seeding until transplanting
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transplant_days: Option<u32>,

    /// Days from seeding until maturity (start of harvest)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maturity_days: Option<u32>,

    /// Length of the harvest window in days
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub harvest_days: Option<u32>,
}

impl PlantingRecord {
    /// Checks the record invariants: every present day offset lies in
    /// `1..=MAX_DAY_OFFSET` and the seeding date lies in
    /// `0..=MAX_TIMESTAMP`.
    ///
    /// # Errors
    ///
    /// Returns `FurrowError::InvalidInput` naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        if let Some(date) = self.seeding_date {
            check_timestamp("seeding_date", date)?;
        }

        for (field, value) in self.offsets() {
            if let Some(days) = value {
                if days == 0 || days > MAX_DAY_OFFSET {
                    return Err(FurrowError::invalid_input(field).with_reason(format!(
                        "must be between 1 and {MAX_DAY_OFFSET}, got {days}"
                    )));
                }
            }
        }

        Ok(())
    }

    fn offsets(&self) -> [(&'static str, Option<u32>); 3] {
        [
            ("transplant_days", self.transplant_days),
            ("maturity_days", self.maturity_days),
            ("harvest_days", self.harvest_days),
        ]
    }

    /// Converts a raw day offset read from storage into the typed form.
    ///
    /// A stored `0` is a legacy "unset" sentinel and becomes `None`.
    ///
    /// # Errors
    ///
    /// Returns `FurrowError::InvalidInput` for negative values or values above
    /// `MAX_DAY_OFFSET`.
    pub fn normalize_day_offset(field: &str, raw: Option<i64>) -> Result<Option<u32>> {
        match raw {
            None => Ok(None),
            Some(0) => {
                warn!("Normalizing zero {field} to unset");
                Ok(None)
            }
            Some(days) if (1..=i64::from(MAX_DAY_OFFSET)).contains(&days) => {
                Ok(u32::try_from(days).ok())
            }
            Some(days) => Err(FurrowError::invalid_input(field).with_reason(format!(
                "must be between 1 and {MAX_DAY_OFFSET}, got {days}"
            ))),
        }
    }

    /// Converts a raw seeding date read from storage into the typed form.
    ///
    /// A stored `0` is treated as unset rather than as the epoch.
    ///
    /// # Errors
    ///
    /// Returns `FurrowError::InvalidInput` for timestamps outside
    /// `0..=MAX_TIMESTAMP`.
    pub fn normalize_seeding_date(raw: Option<i64>) -> Result<Option<i64>> {
        match raw {
            Some(0) => {
                warn!("Normalizing zero seeding_date to unset");
                Ok(None)
            }
            Some(date) => check_timestamp("seeding_date", date).map(Some),
            None => Ok(None),
        }
    }
}
