//! Planting record queries.
//!
//! Writes are validated before they reach the table. Reads normalise the
//! legacy zero sentinels to "unset", so every [`PlantingRecord`] leaving
//! this module satisfies [`PlantingRecord::validate`].

use rusqlite::params;

use super::to_id;
use crate::{
    error::{DatabaseResultExt, FurrowError, Result},
    models::PlantingRecord,
};

const INSERT_PLANTING_SQL: &str = "INSERT INTO plantings (plan_id, plant_id, seeding_date, transplant_days, maturity_days, harvest_days) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const SELECT_PLANTINGS_BY_PLAN_SQL: &str = "SELECT id, plan_id, plant_id, seeding_date, transplant_days, maturity_days, harvest_days FROM plantings WHERE plan_id = ?1 ORDER BY id";

/// A planting row as stored, before sentinel normalisation.
struct RawPlanting {
    id: i64,
    plan_id: i64,
    plant_id: i64,
    seeding_date: Option<i64>,
    transplant_days: Option<i64>,
    maturity_days: Option<i64>,
    harvest_days: Option<i64>,
}

impl RawPlanting {
    fn from_row(row: &rusqlite::Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            plan_id: row.get(1)?,
            plant_id: row.get(2)?,
            seeding_date: row.get(3)?,
            transplant_days: row.get(4)?,
            maturity_days: row.get(5)?,
            harvest_days: row.get(6)?,
        })
    }

    fn normalize(self) -> Result<PlantingRecord> {
        Ok(PlantingRecord {
            id: to_id(self.id),
            plan_id: to_id(self.plan_id),
            plant_id: to_id(self.plant_id),
            seeding_date: PlantingRecord::normalize_seeding_date(self.seeding_date)?,
            transplant_days: PlantingRecord::normalize_day_offset(
                "transplant_days",
                self.transplant_days,
            )?,
            maturity_days: PlantingRecord::normalize_day_offset(
                "maturity_days",
                self.maturity_days,
            )?,
            harvest_days: PlantingRecord::normalize_day_offset("harvest_days", self.harvest_days)?,
        })
    }
}

impl super::Database {
    /// Adds a planting of an existing plant to an existing plan.
    ///
    /// The `id` of `planting` is ignored; the stored record is returned with
    /// its assigned ID.
    pub fn add_planting(&mut self, planting: &PlantingRecord) -> Result<PlantingRecord> {
        planting.validate()?;

        if !self.plan_exists(planting.plan_id)? {
            return Err(FurrowError::PlanNotFound {
                id: planting.plan_id,
            });
        }
        if !self.plant_exists(planting.plant_id)? {
            return Err(FurrowError::PlantNotFound {
                id: planting.plant_id,
            });
        }

        self.connection
            .execute(
                INSERT_PLANTING_SQL,
                params![
                    planting.plan_id as i64,
                    planting.plant_id as i64,
                    planting.seeding_date,
                    planting.transplant_days,
                    planting.maturity_days,
                    planting.harvest_days,
                ],
            )
            .db_context("Failed to insert planting")?;

        Ok(PlantingRecord {
            id: to_id(self.connection.last_insert_rowid()),
            ..planting.clone()
        })
    }

    /// Retrieves every planting of a plan, ordered by ID.
    ///
    /// # Errors
    ///
    /// Returns `FurrowError::InvalidInput` if a stored offset is outside
    /// `0..=365` or a stored seeding date is negative.
    pub fn get_plantings(&self, plan_id: u64) -> Result<Vec<PlantingRecord>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_PLANTINGS_BY_PLAN_SQL)
            .db_context("Failed to prepare query")?;

        let rows = stmt
            .query_map(params![plan_id as i64], RawPlanting::from_row)
            .db_context("Failed to query plantings")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch plantings")?;

        rows.into_iter()
            .map(RawPlanting::normalize)
            .collect()
    }
}
