//! Data models for crop plans, plantings, and timeline output.
//!
//! The input side ([`Plan`], [`Plant`], [`Location`], [`PlantingRecord`],
//! [`MovementEvent`], [`LogEntry`]) consists of plain value types produced by a
//! [`crate::store::RecordStore`]. They are mapped from storage rows at the
//! boundary and never mutated by the timeline code.
//!
//! The output side ([`Stage`], [`TimelineRow`], [`TimelineTask`],
//! [`FlatRow`]) is derived fresh on every request. Display implementations
//! live in [`crate::display`].
//!
//! # Examples
//!
//! ```rust
//! use furrow_core::models::{PlantingRecord, StageKind};
//! use furrow_core::stages::generate_stages;
//!
//! let planting = PlantingRecord {
//!     id: 1,
//!     plan_id: 1,
//!     plant_id: 7,
//!     seeding_date: Some(1_000_000),
//!     transplant_days: None,
//!     maturity_days: Some(60),
//!     harvest_days: None,
//! };
//!
//! let stages = generate_stages(&planting);
//! assert_eq!(stages.len(), 1);
//! assert_eq!(stages[0].kind, StageKind::Seeding);
//! ```

pub mod group;
pub mod log;
pub mod movement;
pub mod plan;
pub mod plant;
pub mod planting;
pub mod stage;
pub mod summary;
pub mod timeline;
pub mod timestamp;


pub use group::GroupBy;
pub use log::{LogEntry, LogStatus};
pub use movement::MovementEvent;
pub use plan::Plan;
pub use plant::{Location, Plant, PlantType};
pub use planting::{PlantingRecord, MAX_DAY_OFFSET};
pub use stage::{Stage, StageKind};
pub use summary::PlantingSummary;
pub use timeline::{FlatRow, FlatTimeline, TaskMeta, Timeline, TimelineRow, TimelineTask};
pub use timestamp::{check_timestamp, MAX_TIMESTAMP};
