//! Tests for stage derivation and bounding.

use std::collections::BTreeSet;

use super::*;
use crate::models::{MovementEvent, PlantingRecord, Stage, StageKind};

const DAY: i64 = SECONDS_PER_DAY;

fn planting(
    seeding_date: Option<i64>,
    transplant_days: Option<u32>,
    maturity_days: Option<u32>,
    harvest_days: Option<u32>,
) -> PlantingRecord {
    PlantingRecord {
        id: 1,
        plan_id: 1,
        plant_id: 1,
        seeding_date,
        transplant_days,
        maturity_days,
        harvest_days,
    }
}

fn movement(id: u64, timestamp: i64, location: u64) -> MovementEvent {
    MovementEvent {
        id,
        plant_id: 1,
        timestamp,
        locations: BTreeSet::from([location]),
    }
}

fn spans(stages: &[Stage]) -> Vec<(i64, Option<i64>)> {
    stages.iter().map(|s| (s.start, s.end)).collect()
}

#[test]
fn test_full_offsets_scenario() {
    let stages = generate_stages(&planting(Some(1_000_000), Some(30), Some(60), Some(7)));

    assert_eq!(stages.len(), 3);
    assert_eq!(stages[0].kind, StageKind::Seeding);
    assert_eq!(stages[1].kind, StageKind::Transplanting);
    assert_eq!(stages[2].kind, StageKind::Harvest);
    assert_eq!(
        spans(&stages),
        vec![
            (1_000_000, Some(1_000_000 + 30 * DAY)),
            (1_000_000 + 30 * DAY, Some(1_000_000 + 60 * DAY)),
            (1_000_000 + 60 * DAY, Some(1_000_000 + 67 * DAY)),
        ]
    );
    assert!(stages.iter().all(|s| s.locations.is_empty()));
}

#[test]
fn test_full_offsets_are_contiguous() {
    for transplant in [1, 14, 45] {
        for maturity in [50, 90, 365] {
            for harvest in [1, 7, 30] {
                let stages = generate_stages(&planting(
                    Some(86_400 * 100),
                    Some(transplant),
                    Some(maturity),
                    Some(harvest),
                ));
                assert_eq!(stages.len(), 3);
                assert_eq!(stages[0].end, Some(stages[1].start));
                assert_eq!(stages[1].end, Some(stages[2].start));
            }
        }
    }
}

#[test]
fn test_seeding_only_runs_to_maturity() {
    for maturity in [1, 60, 365] {
        let stages = generate_stages(&planting(Some(5_000), None, Some(maturity), None));
        assert_eq!(stages.len(), 1);
        assert_eq!(stages[0].kind, StageKind::Seeding);
        assert_eq!(stages[0].start, 5_000);
        assert_eq!(stages[0].end, Some(5_000 + i64::from(maturity) * DAY));
    }
}

#[test]
fn test_harvest_without_transplant() {
    let stages = generate_stages(&planting(Some(DAY), None, Some(40), Some(10)));
    assert_eq!(stages.len(), 2);
    assert_eq!(stages[0].kind, StageKind::Seeding);
    assert_eq!(stages[1].kind, StageKind::Harvest);
    assert_eq!(stages[0].end, Some(stages[1].start));
}

#[test]
fn test_missing_inputs_omit_stages() {
    assert!(generate_stages(&planting(None, Some(30), Some(60), Some(7))).is_empty());
    assert!(generate_stages(&planting(Some(1_000), Some(30), None, Some(7))).is_empty());
    assert!(generate_stages(&planting(Some(0), Some(30), Some(60), Some(7))).is_empty());
    assert!(generate_stages(&planting(Some(1_000), Some(30), Some(0), Some(7))).is_empty());

    let zero_transplant = generate_stages(&planting(Some(1_000), Some(0), Some(60), None));
    assert_eq!(zero_transplant.len(), 1);
    assert_eq!(zero_transplant[0].end, Some(1_000 + 60 * DAY));
}

#[test]
fn test_stage_ends_saturate_near_max_timestamp() {
    let stages = generate_stages(&planting(Some(i64::MAX - 10), Some(30), Some(60), Some(7)));
    assert_eq!(stages.len(), 3);
    assert_eq!(stages[0].start, i64::MAX - 10);
    assert!(stages.iter().all(|stage| stage.end == Some(i64::MAX)));
}

#[test]
fn test_two_movements_scenario() {
    let stages = generate_location_stages(&[movement(1, 100, 4), movement(2, 500, 5)]);
    assert_eq!(spans(&stages), vec![(100, Some(500)), (500, None)]);
    assert!(stages.iter().all(|s| s.kind == StageKind::Location));
    assert_eq!(stages[0].locations, BTreeSet::from([4]));
    assert_eq!(stages[1].locations, BTreeSet::from([5]));
}

#[test]
fn test_location_stages_chain_for_any_order() {
    let events = vec![
        movement(3, 900, 1),
        movement(1, 100, 2),
        movement(4, 400, 3),
        movement(2, 250, 4),
    ];
    let stages = generate_location_stages(&events);

    assert_eq!(stages.len(), events.len());
    for pair in stages.windows(2) {
        assert_eq!(pair[0].end, Some(pair[1].start));
        assert!(pair[0].start <= pair[1].start);
    }
    assert_eq!(stages.last().and_then(|s| s.end), None);
}

#[test]
fn test_location_stage_ties_break_by_id() {
    let forward = generate_location_stages(&[movement(1, 100, 10), movement(2, 100, 20)]);
    let reversed = generate_location_stages(&[movement(2, 100, 20), movement(1, 100, 10)]);
    assert_eq!(forward, reversed);
    assert_eq!(forward[0].locations, BTreeSet::from([10]));
    assert_eq!(forward[0].end, Some(100));
}

#[test]
fn test_no_movements_yield_no_stages() {
    assert!(generate_location_stages(&[]).is_empty());
}

#[test]
fn test_bound_scenario() {
    let stages = generate_location_stages(&[movement(1, 100, 1), movement(2, 500, 1)]);
    let bounded = bound(&stages, Some(200), Some(1000));
    assert_eq!(spans(&bounded), vec![(200, Some(500)), (500, None)]);
    // The source is untouched.
    assert_eq!(stages[0].start, 100);
}

#[test]
fn test_bound_without_window_is_noop() {
    let stages = generate_stages(&planting(Some(1_000_000), Some(30), Some(60), Some(7)));
    assert_eq!(bound(&stages, None, None), stages);
}

#[test]
fn test_bound_boundary_exclusion() {
    let stages = vec![
        Stage::new(StageKind::Seeding, 0, Some(100)),
        Stage::new(StageKind::Harvest, 100, Some(200)),
    ];
    let bounded = bound(&stages, Some(100), None);
    assert_eq!(bounded.len(), 1);
    assert_eq!(bounded[0].kind, StageKind::Harvest);
    assert_eq!(bounded[0].start, 100);

    let after = bound(&stages, None, Some(100));
    assert_eq!(after.len(), 1);
    assert_eq!(after[0].kind, StageKind::Seeding);
}

#[test]
fn test_bound_clips_right_edge_but_not_open_end() {
    let stages = vec![
        Stage::new(StageKind::Seeding, 0, Some(1_000)),
        Stage::location(50, BTreeSet::from([1])),
    ];
    let bounded = bound(&stages, None, Some(300));
    assert_eq!(spans(&bounded), vec![(0, Some(300)), (50, None)]);
}

#[test]
fn test_bound_empty_window() {
    let stages = vec![Stage::new(StageKind::Seeding, 0, Some(1_000))];
    assert!(bound(&stages, Some(500), Some(500)).is_empty());
    assert!(bound(&stages, Some(600), Some(500)).is_empty());

    let open = vec![Stage::location(100, BTreeSet::from([1]))];
    assert!(bound(&open, Some(600), Some(500)).is_empty());
    assert_eq!(bound_interval(100, None, Some(600), Some(500)), None);
}

#[test]
fn test_bound_is_idempotent() {
    let stages = vec![
        Stage::new(StageKind::Seeding, 0, Some(100)),
        Stage::new(StageKind::Transplanting, 100, Some(400)),
        Stage::new(StageKind::Harvest, 400, Some(450)),
        Stage::location(20, BTreeSet::from([1])),
        Stage::location(700, BTreeSet::from([2])),
    ];
    let windows = [
        (None, None),
        (Some(0), None),
        (None, Some(420)),
        (Some(100), Some(400)),
        (Some(150), Some(160)),
        (Some(-50), Some(10_000)),
        (Some(450), Some(700)),
    ];
    for (start, end) in windows {
        let once = bound(&stages, start, end);
        let twice = bound(&once, start, end);
        assert_eq!(once, twice, "window {start:?}..{end:?}");
    }
}

#[test]
fn test_bound_interval_keeps_start_on_window_edge() {
    assert_eq!(bound_interval(100, Some(200), Some(100), None), Some((100, Some(200))));
    assert_eq!(bound_interval(50, Some(100), Some(100), None), None);
    assert_eq!(bound_interval(50, None, Some(100), Some(150)), Some((100, None)));
}
