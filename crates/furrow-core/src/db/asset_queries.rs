//! Plant and location asset queries.

use rusqlite::{params, OptionalExtension};

use super::to_id;
use crate::{
    error::{DatabaseResultExt, FurrowError, Result},
    models::{Location, Plant, PlantType},
};

const INSERT_PLANT_SQL: &str = "INSERT INTO plants (name) VALUES (?1)";
const INSERT_PLANT_TYPE_SQL: &str = "INSERT OR IGNORE INTO plant_types (name) VALUES (?1)";
const SELECT_PLANT_TYPE_ID_SQL: &str = "SELECT id FROM plant_types WHERE name = ?1";
const LINK_PLANT_TYPE_SQL: &str =
    "INSERT OR IGNORE INTO plant_plant_types (plant_id, plant_type_id) VALUES (?1, ?2)";
const SELECT_PLANT_SQL: &str = "SELECT id, name FROM plants WHERE id = ?1";
const SELECT_PLANT_TYPES_SQL: &str = "SELECT t.id, t.name FROM plant_types t JOIN plant_plant_types pt ON pt.plant_type_id = t.id WHERE pt.plant_id = ?1 ORDER BY t.id";
const CHECK_PLANT_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM plants WHERE id = ?1)";
const INSERT_LOCATION_SQL: &str = "INSERT INTO locations (name) VALUES (?1)";
const SELECT_LOCATION_SQL: &str = "SELECT id, name FROM locations WHERE id = ?1";
const CHECK_LOCATION_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM locations WHERE id = ?1)";

fn require_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(FurrowError::invalid_input("name").with_reason("must not be empty"));
    }
    Ok(())
}

impl super::Database {
    /// Adds a plant asset tagged with the given plant types.
    ///
    /// Plant types are matched by name and created on first use. Blank names
    /// and duplicates are ignored.
    pub fn add_plant(&mut self, name: &str, plant_types: &[String]) -> Result<Plant> {
        require_name(name)?;

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(INSERT_PLANT_SQL, params![name])
            .db_context("Failed to insert plant")?;
        let plant_id = tx.last_insert_rowid();

        for type_name in plant_types.iter().map(|t| t.trim()).filter(|t| !t.is_empty()) {
            tx.execute(INSERT_PLANT_TYPE_SQL, params![type_name])
                .db_context("Failed to insert plant type")?;
            let type_id: i64 = tx
                .query_row(SELECT_PLANT_TYPE_ID_SQL, params![type_name], |row| row.get(0))
                .db_context("Failed to look up plant type")?;
            tx.execute(LINK_PLANT_TYPE_SQL, params![plant_id, type_id])
                .db_context("Failed to tag plant with plant type")?;
        }

        tx.commit().db_context("Failed to commit transaction")?;

        self.get_plant(to_id(plant_id))?
            .ok_or(FurrowError::PlantNotFound {
                id: to_id(plant_id),
            })
    }

    /// Retrieves a plant with its plant types.
    pub fn get_plant(&self, id: u64) -> Result<Option<Plant>> {
        let plant = self
            .connection
            .query_row(SELECT_PLANT_SQL, params![id as i64], |row| {
                Ok(Plant {
                    id: to_id(row.get(0)?),
                    name: row.get(1)?,
                    plant_types: Vec::new(),
                })
            })
            .optional()
            .db_context("Failed to query plant")?;

        let Some(mut plant) = plant else {
            return Ok(None);
        };

        let mut stmt = self
            .connection
            .prepare(SELECT_PLANT_TYPES_SQL)
            .db_context("Failed to prepare query")?;
        plant.plant_types = stmt
            .query_map(params![id as i64], |row| {
                Ok(PlantType {
                    id: to_id(row.get(0)?),
                    name: row.get(1)?,
                })
            })
            .db_context("Failed to query plant types")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch plant types")?;

        Ok(Some(plant))
    }

    pub(crate) fn plant_exists(&self, id: u64) -> Result<bool> {
        self.connection
            .query_row(CHECK_PLANT_EXISTS_SQL, params![id as i64], |row| row.get(0))
            .db_context("Failed to check plant existence")
    }

    /// Adds a location asset.
    pub fn add_location(&mut self, name: &str) -> Result<Location> {
        require_name(name)?;

        self.connection
            .execute(INSERT_LOCATION_SQL, params![name])
            .db_context("Failed to insert location")?;

        Ok(Location {
            id: to_id(self.connection.last_insert_rowid()),
            name: name.to_string(),
        })
    }

    /// Retrieves a location by its ID.
    pub fn get_location(&self, id: u64) -> Result<Option<Location>> {
        self.connection
            .query_row(SELECT_LOCATION_SQL, params![id as i64], |row| {
                Ok(Location {
                    id: to_id(row.get(0)?),
                    name: row.get(1)?,
                })
            })
            .optional()
            .db_context("Failed to query location")
    }

    pub(crate) fn location_exists(&self, id: u64) -> Result<bool> {
        self.connection
            .query_row(CHECK_LOCATION_EXISTS_SQL, params![id as i64], |row| {
                row.get(0)
            })
            .db_context("Failed to check location existence")
    }
}
