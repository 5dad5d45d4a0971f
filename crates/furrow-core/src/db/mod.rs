//! SQLite storage for crop plans and the records timelines are built from.
//!
//! This module owns the connection, the embedded schema, and the row mappers
//! that turn query results into the plain value types in [`crate::models`].
//! Queries are grouped by record kind; [`Database`] also implements
//! [`crate::store::RecordStore`] so the assembler can read through it.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod asset_queries;
pub mod log_queries;
pub mod migrations;
pub mod plan_queries;
pub mod planting_queries;
mod record_store;


/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Opens (or creates) the database at `path` and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}

/// Converts a stored SQLite integer ID to a record ID.
///
/// Row IDs are always positive, so the cast is lossless.
pub(crate) fn to_id(value: i64) -> u64 {
    value as u64
}
