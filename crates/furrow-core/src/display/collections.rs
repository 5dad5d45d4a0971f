//! Collection wrapper types for displaying groups of records.

use std::fmt;

use super::datetime::{DayDate, LocalDateTime};
use crate::models::{Plan, PlantingSummary};

/// Newtype wrapper for displaying a list of plans.
///
/// ```rust
/// use furrow_core::{display::Plans, models::Plan};
/// use jiff::Timestamp;
///
/// let plans = Plans(vec![Plan {
///     id: 1,
///     name: "Spring beds".to_string(),
///     created_at: Timestamp::now(),
/// }]);
/// assert!(plans.to_string().contains("1. Spring beds"));
/// ```
pub struct Plans(pub Vec<Plan>);

impl Plans {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for Plans {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No plans found.");
        }
        for plan in &self.0 {
            writeln!(
                f,
                "- {}. {} (created {})",
                plan.id,
                plan.name,
                LocalDateTime(&plan.created_at)
            )?;
        }
        Ok(())
    }
}

/// Markdown table of the plantings in a plan.
pub struct PlantingSummaries(pub Vec<PlantingSummary>);

impl PlantingSummaries {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

fn date_cell(value: Option<i64>) -> String {
    value.map_or_else(|| "-".to_string(), |date| DayDate(date).to_string())
}

fn days_cell(value: Option<u32>) -> String {
    value.map_or_else(|| "-".to_string(), |days| days.to_string())
}

impl fmt::Display for PlantingSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No plantings in this plan.");
        }

        writeln!(
            f,
            "| Plant | Seeding date | Days to transplant | Days to maturity | Harvest window | Logs | Stages | Location stages | First seeding | First transplanting |"
        )?;
        writeln!(f, "|---|---|---:|---:|---:|---:|---:|---:|---|---|")?;
        for summary in &self.0 {
            writeln!(
                f,
                "| {} | {} | {} | {} | {} | {} | {} | {} | {} | {} |",
                summary.plant_name,
                date_cell(summary.seeding_date),
                days_cell(summary.transplant_days),
                days_cell(summary.maturity_days),
                days_cell(summary.harvest_days),
                summary.log_count,
                summary.stage_count,
                summary.location_stage_count,
                date_cell(summary.first_seeding),
                date_cell(summary.first_transplanting),
            )?;
        }
        Ok(())
    }
}
