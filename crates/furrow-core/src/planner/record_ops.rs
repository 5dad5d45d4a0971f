//! Record maintenance operations for the Planner.
//!
//! These write the plants, locations, plantings, logs and movements that
//! timelines are computed from.

use std::collections::BTreeSet;

use super::Planner;
use crate::{
    error::Result,
    models::{LogEntry, Location, MovementEvent, Plant, PlantingRecord},
    params::{AddLocation, AddPlant, AddPlanting, RecordLog, RecordMovement},
};

impl Planner {
    /// Adds a plant asset, creating any plant types it names.
    pub async fn add_plant(&self, params: &AddPlant) -> Result<Plant> {
        let name = params.name.clone();
        let plant_types = params.plant_types.clone();
        self.with_database(move |mut db| db.add_plant(&name, &plant_types))
            .await
    }

    /// Adds a location asset.
    pub async fn add_location(&self, params: &AddLocation) -> Result<Location> {
        let name = params.name.clone();
        self.with_database(move |mut db| db.add_location(&name))
            .await
    }

    /// Adds a planting to a plan.
    ///
    /// # Errors
    ///
    /// Returns `FurrowError::InvalidInput` for offsets outside `1..=365` or a
    /// negative seeding date, and `FurrowError::PlanNotFound` or
    /// `FurrowError::PlantNotFound` for dangling references.
    pub async fn add_planting(&self, params: &AddPlanting) -> Result<PlantingRecord> {
        let record = params.to_record();
        record.validate()?;
        self.with_database(move |mut db| db.add_planting(&record))
            .await
    }

    /// Records an activity log against a plant.
    pub async fn record_log(&self, params: &RecordLog) -> Result<LogEntry> {
        let status = params.validate()?;
        let RecordLog {
            plant_id,
            log_type,
            name,
            timestamp,
            ..
        } = params.clone();
        self.with_database(move |mut db| {
            db.add_log(plant_id, &log_type, &name, timestamp, status)
        })
        .await
    }

    /// Records a plant moving into one or more locations.
    pub async fn record_movement(&self, params: &RecordMovement) -> Result<MovementEvent> {
        let plant_id = params.plant_id;
        let timestamp = params.timestamp;
        let locations: BTreeSet<u64> = params.locations.iter().copied().collect();
        self.with_database(move |mut db| db.add_movement(plant_id, timestamp, &locations))
            .await
    }
}
