//! Plan queries.

use jiff::Timestamp;
use rusqlite::{params, types::Type, OptionalExtension};

use super::to_id;
use crate::{
    error::{DatabaseResultExt, FurrowError, Result},
    models::Plan,
};

const INSERT_PLAN_SQL: &str = "INSERT INTO plans (name, created_at) VALUES (?1, ?2)";
const SELECT_PLAN_SQL: &str = "SELECT id, name, created_at FROM plans WHERE id = ?1";
const SELECT_PLANS_SQL: &str = "SELECT id, name, created_at FROM plans ORDER BY id";
const CHECK_PLAN_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM plans WHERE id = ?1)";

impl super::Database {
    fn build_plan_from_row(row: &rusqlite::Row) -> rusqlite::Result<Plan> {
        Ok(Plan {
            id: to_id(row.get(0)?),
            name: row.get(1)?,
            created_at: row.get::<_, String>(2)?.parse::<Timestamp>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(2, Type::Text, Box::new(e))
            })?,
        })
    }

    /// Creates a new, empty plan.
    pub fn create_plan(&mut self, name: &str) -> Result<Plan> {
        if name.trim().is_empty() {
            return Err(FurrowError::invalid_input("name").with_reason("must not be empty"));
        }

        let created_at = Timestamp::now();
        self.connection
            .execute(INSERT_PLAN_SQL, params![name, created_at.to_string()])
            .db_context("Failed to insert plan")?;

        Ok(Plan {
            id: to_id(self.connection.last_insert_rowid()),
            name: name.to_string(),
            created_at,
        })
    }

    /// Retrieves a plan by its ID.
    pub fn get_plan(&self, id: u64) -> Result<Option<Plan>> {
        self.connection
            .query_row(SELECT_PLAN_SQL, params![id as i64], Self::build_plan_from_row)
            .optional()
            .db_context("Failed to query plan")
    }

    /// Lists all plans in creation order.
    pub fn list_plans(&self) -> Result<Vec<Plan>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_PLANS_SQL)
            .db_context("Failed to prepare query")?;

        let plans = stmt
            .query_map([], Self::build_plan_from_row)
            .db_context("Failed to query plans")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch plans")?;
        Ok(plans)
    }

    pub(crate) fn plan_exists(&self, id: u64) -> Result<bool> {
        self.connection
            .query_row(CHECK_PLAN_EXISTS_SQL, params![id as i64], |row| row.get(0))
            .db_context("Failed to check plan existence")
    }
}
