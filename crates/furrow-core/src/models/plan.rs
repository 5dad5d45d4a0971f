//! Crop plan model.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A crop plan that groups planting records.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Plan {
    /// Unique identifier for the plan
    pub id: u64,

    /// Human readable plan name
    pub name: String,

    /// Timestamp when the plan was created (UTC)
    pub created_at: Timestamp,
}
