//! Movement event model.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A timestamped relocation of a plant asset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MovementEvent {
    /// Unique identifier of the movement record; breaks timestamp ties
    pub id: u64,

    /// ID of the plant that moved
    pub plant_id: u64,

    /// When the movement happened (epoch seconds)
    pub timestamp: i64,

    /// Locations the plant occupies from this moment on
    pub locations: BTreeSet<u64>,
}
