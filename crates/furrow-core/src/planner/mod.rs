//! Async facade over the record store and the timeline assembler.
//!
//! Every [`Planner`] operation opens a fresh SQLite connection inside
//! [`tokio::task::spawn_blocking`], runs the query (and, for timelines, the
//! whole assembly) there, and hands back owned values. Concurrent calls share
//! no mutable state.
//!
//! - [`builder`]: [`PlannerBuilder`] for the database path and link base URL
//! - [`plan_ops`]: creating, listing and showing plans
//! - [`record_ops`]: adding plants, locations, plantings, logs and movements
//! - [`timeline_ops`]: grouped and flattened timelines, planting summaries
//!
//! ```rust
//! use furrow_core::{
//!     models::GroupBy,
//!     params::{CreatePlan, PlanTimeline},
//!     PlannerBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = PlannerBuilder::new()
//!     .with_database_path(Some("furrow.db"))
//!     .with_base_url("https://farm.example.com")
//!     .build()
//!     .await?;
//!
//! let plan = planner
//!     .create_plan(&CreatePlan {
//!         name: "Spring beds".to_string(),
//!     })
//!     .await?;
//!
//! let timeline = planner
//!     .timeline(
//!         GroupBy::PlantType,
//!         &PlanTimeline {
//!             plan_id: plan.id,
//!             ..Default::default()
//!         },
//!     )
//!     .await?;
//! println!("{timeline}");
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use tokio::task;

use crate::{
    db::Database,
    error::{FurrowError, Result},
    links::Links,
};

pub mod builder;
pub mod plan_ops;
pub mod record_ops;
pub mod timeline_ops;


pub use builder::PlannerBuilder;

/// Main entry point for plan records and timelines.
pub struct Planner {
    pub(crate) db_path: PathBuf,
    pub(crate) links: Links,
}

impl Planner {
    pub(crate) fn new(db_path: PathBuf, links: Links) -> Self {
        Self { db_path, links }
    }

    /// Path of the SQLite database file.
    pub fn database_path(&self) -> &Path {
        &self.db_path
    }

    /// Runs `op` against a fresh connection on the blocking thread pool.
    async fn with_database<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(Database) -> Result<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();
        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            op(db)
        })
        .await
        .map_err(FurrowError::join)?
    }
}
