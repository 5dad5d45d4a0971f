//! Activity log and movement queries.

use std::collections::{BTreeMap, BTreeSet};

use rusqlite::{params, types::Type, OptionalExtension};

use super::to_id;
use crate::{
    error::{DatabaseResultExt, FurrowError, Result},
    models::{check_timestamp, LogEntry, LogStatus, MovementEvent},
};

const INSERT_LOG_SQL: &str =
    "INSERT INTO logs (plant_id, log_type, name, timestamp, status) VALUES (?1, ?2, ?3, ?4, ?5)";
const SELECT_LOGS_BY_PLANT_SQL: &str = "SELECT id, plant_id, log_type, name, timestamp, status FROM logs WHERE plant_id = ?1 ORDER BY timestamp, id";
const SELECT_FIRST_LOG_SQL: &str = "SELECT id, plant_id, log_type, name, timestamp, status FROM logs WHERE plant_id = ?1 AND log_type = ?2 ORDER BY timestamp, id LIMIT 1";
const INSERT_MOVEMENT_SQL: &str = "INSERT INTO movements (plant_id, timestamp) VALUES (?1, ?2)";
const INSERT_MOVEMENT_LOCATION_SQL: &str =
    "INSERT INTO movement_locations (movement_id, location_id) VALUES (?1, ?2)";
const SELECT_MOVEMENTS_BY_PLANT_SQL: &str = "SELECT m.id, m.timestamp, ml.location_id FROM movements m JOIN movement_locations ml ON ml.movement_id = m.id WHERE m.plant_id = ?1 ORDER BY m.timestamp, m.id, ml.location_id";

impl super::Database {
    fn build_log_from_row(row: &rusqlite::Row) -> rusqlite::Result<LogEntry> {
        let status_str: String = row.get(5)?;
        let status = status_str.parse::<LogStatus>().map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                5,
                Type::Text,
                format!("Invalid log status: {status_str}").into(),
            )
        })?;

        Ok(LogEntry {
            id: to_id(row.get(0)?),
            plant_id: to_id(row.get(1)?),
            log_type: row.get(2)?,
            name: row.get(3)?,
            timestamp: row.get(4)?,
            status,
        })
    }

    /// Records an activity log against a plant.
    pub fn add_log(
        &mut self,
        plant_id: u64,
        log_type: &str,
        name: &str,
        timestamp: i64,
        status: LogStatus,
    ) -> Result<LogEntry> {
        let log_type = log_type.trim().to_lowercase();
        if log_type.is_empty() {
            return Err(FurrowError::invalid_input("log_type").with_reason("must not be empty"));
        }
        check_timestamp("timestamp", timestamp)?;
        if !self.plant_exists(plant_id)? {
            return Err(FurrowError::PlantNotFound { id: plant_id });
        }

        self.connection
            .execute(
                INSERT_LOG_SQL,
                params![plant_id as i64, log_type, name, timestamp, status.as_str()],
            )
            .db_context("Failed to insert log")?;

        Ok(LogEntry {
            id: to_id(self.connection.last_insert_rowid()),
            plant_id,
            log_type,
            name: name.to_string(),
            timestamp,
            status,
        })
    }

    /// Retrieves the logs of a plant in chronological order.
    pub fn get_logs(&self, plant_id: u64) -> Result<Vec<LogEntry>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_LOGS_BY_PLANT_SQL)
            .db_context("Failed to prepare query")?;

        let logs = stmt
            .query_map(params![plant_id as i64], Self::build_log_from_row)
            .db_context("Failed to query logs")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch logs")?;
        Ok(logs)
    }

    /// Retrieves the earliest log of a type for a plant.
    pub fn get_first_log(&self, plant_id: u64, log_type: &str) -> Result<Option<LogEntry>> {
        self.connection
            .query_row(
                SELECT_FIRST_LOG_SQL,
                params![plant_id as i64, log_type],
                Self::build_log_from_row,
            )
            .optional()
            .db_context("Failed to query first log")
    }

    /// Records a plant moving into one or more locations.
    pub fn add_movement(
        &mut self,
        plant_id: u64,
        timestamp: i64,
        locations: &BTreeSet<u64>,
    ) -> Result<MovementEvent> {
        if locations.is_empty() {
            return Err(FurrowError::invalid_input("locations")
                .with_reason("a movement needs at least one location"));
        }
        check_timestamp("timestamp", timestamp)?;
        if !self.plant_exists(plant_id)? {
            return Err(FurrowError::PlantNotFound { id: plant_id });
        }
        for &location_id in locations {
            if !self.location_exists(location_id)? {
                return Err(FurrowError::LocationNotFound { id: location_id });
            }
        }

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(INSERT_MOVEMENT_SQL, params![plant_id as i64, timestamp])
            .db_context("Failed to insert movement")?;
        let movement_id = tx.last_insert_rowid();

        for &location_id in locations {
            tx.execute(
                INSERT_MOVEMENT_LOCATION_SQL,
                params![movement_id, location_id as i64],
            )
            .db_context("Failed to insert movement location")?;
        }

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(MovementEvent {
            id: to_id(movement_id),
            plant_id,
            timestamp,
            locations: locations.clone(),
        })
    }

    /// Retrieves the movements of a plant in chronological order.
    pub fn get_movements(&self, plant_id: u64) -> Result<Vec<MovementEvent>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_MOVEMENTS_BY_PLANT_SQL)
            .db_context("Failed to prepare query")?;

        let rows = stmt
            .query_map(params![plant_id as i64], |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, i64>(1)?,
                    row.get::<_, i64>(2)?,
                ))
            })
            .db_context("Failed to query movements")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch movements")?;

        // One row per (movement, location); fold them back into events.
        let mut events: BTreeMap<(i64, i64), MovementEvent> = BTreeMap::new();
        for (id, timestamp, location_id) in rows {
            events
                .entry((timestamp, id))
                .or_insert_with(|| MovementEvent {
                    id: to_id(id),
                    plant_id,
                    timestamp,
                    locations: BTreeSet::new(),
                })
                .locations
                .insert(to_id(location_id));
        }

        Ok(events.into_values().collect())
    }
}
