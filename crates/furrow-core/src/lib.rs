//! Core library for crop plan timelines.
//!
//! A crop plan lists plantings: a plant asset plus a seeding date and day
//! offsets to transplanting, maturity, and the end of harvest. From those
//! records, the plant's movement history and its activity logs, this crate
//! derives lifecycle stage intervals and assembles them into a row tree for
//! Gantt-style renderers, grouped by plant type or by location.
//!
//! The pipeline runs one way:
//!
//! ```text
//! RecordStore ─▶ stages (planned, location) ─▶ bound ─▶ TimelineAssembler ─▶ flatten
//! ```
//!
//! - [`stages`]: pure stage derivation and window clipping
//! - [`assembler`]: the grouped row tree
//! - [`flatten`]: flat row and task lists plus the initial viewing window
//! - [`store`]: the record-store interface and an in-memory implementation
//! - [`db`]: the SQLite record store
//! - [`planner`]: the async facade used by the CLI and MCP server
//! - [`display`]: markdown output
//!
//! # Quick Start
//!
//! ```rust
//! use furrow_core::{
//!     assembler::{AssembleOptions, TimelineAssembler},
//!     links::Links,
//!     models::{GroupBy, Plan, Plant, PlantType, PlantingRecord},
//!     store::MemoryStore,
//! };
//!
//! # fn main() -> Result<(), furrow_core::FurrowError> {
//! let store = MemoryStore::new()
//!     .with_plan(Plan { id: 1, name: "Spring".into(), created_at: jiff::Timestamp::UNIX_EPOCH })
//!     .with_plant(Plant {
//!         id: 7,
//!         name: "Tomato".into(),
//!         plant_types: vec![PlantType { id: 2, name: "Nightshade".into() }],
//!     })
//!     .with_planting(PlantingRecord {
//!         id: 1,
//!         plan_id: 1,
//!         plant_id: 7,
//!         seeding_date: Some(1_000_000),
//!         transplant_days: Some(30),
//!         maturity_days: Some(60),
//!         harvest_days: Some(7),
//!     })?;
//!
//! let timeline = TimelineAssembler::new(&store, Links::default())
//!     .assemble(1, &AssembleOptions::new(GroupBy::PlantType))?;
//!
//! assert_eq!(timeline.rows[0].id, "term--plant_type--2");
//! assert_eq!(timeline.rows[0].children[0].tasks.len(), 3);
//! # Ok(())
//! # }
//! ```

pub mod assembler;
pub mod db;
pub mod display;
pub mod error;
pub mod flatten;
pub mod links;
pub mod models;
pub mod params;
pub mod planner;
pub mod stages;
pub mod store;

// Re-export commonly used types
pub use assembler::{AssembleOptions, TimelineAssembler};
pub use db::Database;
pub use display::{DayDate, LocalDateTime, OperationStatus, PlantingSummaries, Plans};
pub use error::{FurrowError, Result};
pub use flatten::{flatten, TaskSpan, TimelineView, ViewWindow};
pub use links::Links;
pub use models::{
    FlatRow, FlatTimeline, GroupBy, LogEntry, LogStatus, MovementEvent, Plan, Plant,
    PlantingRecord, PlantingSummary, Stage, StageKind, Timeline, TimelineRow, TimelineTask,
};
pub use planner::{Planner, PlannerBuilder};
pub use store::{MemoryStore, RecordStore};
