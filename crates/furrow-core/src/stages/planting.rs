//! Planned lifecycle stages from planting offsets.

use super::SECONDS_PER_DAY;
use crate::models::{PlantingRecord, Stage, StageKind};

fn days(count: u32) -> i64 {
    i64::from(count) * SECONDS_PER_DAY
}

/// Derives the planned lifecycle stages of a planting.
///
/// Stages are emitted in seeding, transplanting, harvest order and only when
/// their inputs are present and non-zero:
///
/// - seeding needs `seeding_date` and `maturity_days`; it ends at the
///   transplant date when one is planned, otherwise at maturity
/// - transplanting additionally needs `transplant_days`
/// - harvest additionally needs `harvest_days`
///
/// Missing inputs are not an error; the affected stages are left out.
/// Stage ends saturate at `i64::MAX`.
pub fn generate_stages(record: &PlantingRecord) -> Vec<Stage> {
    let mut stages = Vec::with_capacity(3);

    let seeding_date = record.seeding_date.filter(|date| *date != 0);
    let maturity_days = record.maturity_days.filter(|d| *d != 0);
    let (Some(seeding_date), Some(maturity_days)) = (seeding_date, maturity_days) else {
        return stages;
    };
    let transplant_days = record.transplant_days.filter(|d| *d != 0);
    let harvest_days = record.harvest_days.filter(|d| *d != 0);

    let maturity_date = seeding_date.saturating_add(days(maturity_days));

    stages.push(Stage::new(
        StageKind::Seeding,
        seeding_date,
        Some(seeding_date.saturating_add(days(transplant_days.unwrap_or(maturity_days)))),
    ));

    if let Some(transplant_days) = transplant_days {
        stages.push(Stage::new(
            StageKind::Transplanting,
            seeding_date.saturating_add(days(transplant_days)),
            Some(maturity_date),
        ));
    }

    if let Some(harvest_days) = harvest_days {
        stages.push(Stage::new(
            StageKind::Harvest,
            maturity_date,
            Some(maturity_date.saturating_add(days(harvest_days))),
        ));
    }

    stages
}
