//! Record-store collaborator interface.
//!
//! The timeline assembler never talks to storage directly. It reads plans,
//! plantings, assets, movements and logs through [`RecordStore`], which
//! returns plain value types. [`crate::db::Database`] is the SQLite-backed
//! implementation; [`MemoryStore`] holds an in-memory snapshot and is handy
//! for tests and for callers that already loaded their records.

use std::collections::BTreeMap;

use crate::{
    error::Result,
    models::{LogEntry, Location, MovementEvent, Plan, Plant, PlantingRecord},
};

/// Read access to the records a timeline is computed from.
///
/// Access control is the caller's concern; implementations return whatever
/// they are asked for.
pub trait RecordStore {
    /// Loads a plan by ID.
    fn plan(&self, plan_id: u64) -> Result<Option<Plan>>;

    /// Loads every planting record of a plan.
    fn plantings_for_plan(&self, plan_id: u64) -> Result<Vec<PlantingRecord>>;

    /// Loads a plant asset by ID.
    fn plant(&self, plant_id: u64) -> Result<Option<Plant>>;

    /// Loads a location asset by ID.
    fn location(&self, location_id: u64) -> Result<Option<Location>>;

    /// Loads the movement events of a plant, in any order.
    fn movement_events(&self, plant_id: u64) -> Result<Vec<MovementEvent>>;

    /// Loads the activity logs referencing a plant, in any order.
    fn activity_logs(&self, plant_id: u64) -> Result<Vec<LogEntry>>;

    /// Loads the earliest log of the given type for a plant.
    ///
    /// The default implementation scans [`RecordStore::activity_logs`];
    /// stores with an index should override it.
    fn first_log_of_type(&self, plant_id: u64, log_type: &str) -> Result<Option<LogEntry>> {
        Ok(self
            .activity_logs(plant_id)?
            .into_iter()
            .filter(|log| log.log_type == log_type)
            .min_by_key(|log| (log.timestamp, log.id)))
    }
}

/// An in-memory snapshot of records implementing [`RecordStore`].
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    plans: BTreeMap<u64, Plan>,
    plants: BTreeMap<u64, Plant>,
    locations: BTreeMap<u64, Location>,
    plantings: Vec<PlantingRecord>,
    movements: Vec<MovementEvent>,
    logs: Vec<LogEntry>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_plan(mut self, plan: Plan) -> Self {
        self.plans.insert(plan.id, plan);
        self
    }

    pub fn with_plant(mut self, plant: Plant) -> Self {
        self.plants.insert(plant.id, plant);
        self
    }

    pub fn with_location(mut self, location: Location) -> Self {
        self.locations.insert(location.id, location);
        self
    }

    /// Adds a planting record after validating it.
    ///
    /// # Errors
    ///
    /// Returns `FurrowError::InvalidInput` if the record's offsets are out of
    /// range.
    pub fn with_planting(mut self, planting: PlantingRecord) -> Result<Self> {
        planting.validate()?;
        self.plantings.push(planting);
        Ok(self)
    }

    pub fn with_movement(mut self, movement: MovementEvent) -> Self {
        self.movements.push(movement);
        self
    }

    pub fn with_log(mut self, log: LogEntry) -> Self {
        self.logs.push(log);
        self
    }
}

impl RecordStore for MemoryStore {
    fn plan(&self, plan_id: u64) -> Result<Option<Plan>> {
        Ok(self.plans.get(&plan_id).cloned())
    }

    fn plantings_for_plan(&self, plan_id: u64) -> Result<Vec<PlantingRecord>> {
        Ok(self
            .plantings
            .iter()
            .filter(|planting| planting.plan_id == plan_id)
            .cloned()
            .collect())
    }

    fn plant(&self, plant_id: u64) -> Result<Option<Plant>> {
        Ok(self.plants.get(&plant_id).cloned())
    }

    fn location(&self, location_id: u64) -> Result<Option<Location>> {
        Ok(self.locations.get(&location_id).cloned())
    }

    fn movement_events(&self, plant_id: u64) -> Result<Vec<MovementEvent>> {
        Ok(self
            .movements
            .iter()
            .filter(|movement| movement.plant_id == plant_id)
            .cloned()
            .collect())
    }

    fn activity_logs(&self, plant_id: u64) -> Result<Vec<LogEntry>> {
        Ok(self
            .logs
            .iter()
            .filter(|log| log.plant_id == plant_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LogStatus;

    fn log(id: u64, log_type: &str, timestamp: i64) -> LogEntry {
        LogEntry {
            id,
            plant_id: 1,
            log_type: log_type.to_string(),
            name: format!("Log {id}"),
            timestamp,
            status: LogStatus::Done,
        }
    }

    #[test]
    fn test_first_log_of_type_picks_earliest() {
        let store = MemoryStore::new()
            .with_log(log(1, "seeding", 300))
            .with_log(log(2, "seeding", 100))
            .with_log(log(3, "harvest", 50));

        let first = store.first_log_of_type(1, "seeding").unwrap().unwrap();
        assert_eq!(first.id, 2);
        assert!(store.first_log_of_type(1, "transplanting").unwrap().is_none());
        assert!(store.first_log_of_type(2, "seeding").unwrap().is_none());
    }

    #[test]
    fn test_with_planting_validates() {
        let planting = PlantingRecord {
            id: 1,
            plan_id: 1,
            plant_id: 1,
            seeding_date: Some(1),
            transplant_days: None,
            maturity_days: Some(400),
            harvest_days: None,
        };
        assert!(MemoryStore::new().with_planting(planting).is_err());
    }
}
