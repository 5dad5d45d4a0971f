//! Stage derivation and interval bounding.
//!
//! Everything in this module is a pure function over already-validated
//! records:
//!
//! - [`generate_stages`] turns a planting's day offsets into the planned
//!   seeding, transplanting and harvest intervals.
//! - [`generate_location_stages`] turns movement events into contiguous
//!   occupancy intervals, the last of which stays open.
//! - [`bound`] clips a stage list to a viewing window.
//!
//! ```rust
//! use std::collections::BTreeSet;
//!
//! use furrow_core::models::MovementEvent;
//! use furrow_core::stages::{bound, generate_location_stages};
//!
//! let events = vec![
//!     MovementEvent { id: 2, plant_id: 1, timestamp: 500, locations: BTreeSet::from([9]) },
//!     MovementEvent { id: 1, plant_id: 1, timestamp: 100, locations: BTreeSet::from([8]) },
//! ];
//!
//! let stages = generate_location_stages(&events);
//! assert_eq!((stages[0].start, stages[0].end), (100, Some(500)));
//! assert_eq!((stages[1].start, stages[1].end), (500, None));
//!
//! let visible = bound(&stages, Some(200), Some(1000));
//! assert_eq!((visible[0].start, visible[0].end), (200, Some(500)));
//! assert_eq!(visible[1].end, None);
//! ```

pub mod bound;
pub mod location;
pub mod planting;

#[cfg(test)]
mod tests;

pub use bound::{bound, bound_interval};
pub use location::generate_location_stages;
pub use planting::generate_stages;

/// Number of seconds in one day offset.
pub const SECONDS_PER_DAY: i64 = 86_400;
