//! [`RecordStore`] backed by the SQLite database.

use crate::{
    error::Result,
    models::{LogEntry, Location, MovementEvent, Plan, Plant, PlantingRecord},
    store::RecordStore,
};

impl RecordStore for super::Database {
    fn plan(&self, plan_id: u64) -> Result<Option<Plan>> {
        self.get_plan(plan_id)
    }

    fn plantings_for_plan(&self, plan_id: u64) -> Result<Vec<PlantingRecord>> {
        self.get_plantings(plan_id)
    }

    fn plant(&self, plant_id: u64) -> Result<Option<Plant>> {
        self.get_plant(plant_id)
    }

    fn location(&self, location_id: u64) -> Result<Option<Location>> {
        self.get_location(location_id)
    }

    fn movement_events(&self, plant_id: u64) -> Result<Vec<MovementEvent>> {
        self.get_movements(plant_id)
    }

    fn activity_logs(&self, plant_id: u64) -> Result<Vec<LogEntry>> {
        self.get_logs(plant_id)
    }

    fn first_log_of_type(&self, plant_id: u64, log_type: &str) -> Result<Option<LogEntry>> {
        self.get_first_log(plant_id, log_type)
    }
}
