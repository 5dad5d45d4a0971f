//! Location occupancy stages from movement events.

use crate::models::{MovementEvent, Stage};

/// Derives location occupancy intervals from movement events.
///
/// Events are ordered by timestamp, ties broken by event id, so the output
/// is stable regardless of input order. Each stage runs until the next
/// movement; the final stage is open-ended because the plant is still there.
pub fn generate_location_stages(events: &[MovementEvent]) -> Vec<Stage> {
    let mut ordered: Vec<&MovementEvent> = events.iter().collect();
    ordered.sort_by_key(|event| (event.timestamp, event.id));

    let mut stages: Vec<Stage> = ordered
        .iter()
        .map(|event| Stage::location(event.timestamp, event.locations.clone()))
        .collect();

    let next_starts: Vec<i64> = stages.iter().skip(1).map(|stage| stage.start).collect();
    for (stage, next_start) in stages.iter_mut().zip(next_starts) {
        stage.end = Some(next_start);
    }

    stages
}
