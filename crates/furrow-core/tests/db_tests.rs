mod common;

use std::collections::BTreeSet;

use common::create_test_db;
use furrow_core::{models::MAX_TIMESTAMP, FurrowError, LogStatus, PlantingRecord, RecordStore};

fn planting(plan_id: u64, plant_id: u64) -> PlantingRecord {
    PlantingRecord {
        id: 0,
        plan_id,
        plant_id,
        seeding_date: Some(1_000_000),
        transplant_days: Some(30),
        maturity_days: Some(60),
        harvest_days: Some(7),
    }
}

#[test]
fn test_create_and_list_plans() {
    let (_temp_file, mut db) = create_test_db();

    let first = db.create_plan("Spring").expect("Failed to create plan");
    let second = db.create_plan("Autumn").expect("Failed to create plan");
    assert!(first.id > 0);

    let plans = db.list_plans().expect("Failed to list plans");
    assert_eq!(plans.len(), 2);
    assert_eq!(plans[0].id, first.id);
    assert_eq!(plans[1].name, "Autumn");

    let fetched = db.get_plan(second.id).unwrap().expect("Plan should exist");
    assert_eq!(fetched.created_at, second.created_at);
    assert!(db.get_plan(999).unwrap().is_none());
}

#[test]
fn test_blank_plan_name_is_rejected() {
    let (_temp_file, mut db) = create_test_db();
    let err = db.create_plan("  ").unwrap_err();
    assert!(matches!(err, FurrowError::InvalidInput { .. }));
}

#[test]
fn test_plant_types_are_shared_by_name() {
    let (_temp_file, mut db) = create_test_db();

    let tomato = db
        .add_plant(
            "Tomato",
            &["Nightshade".to_string(), "Fruit".to_string(), "Fruit".to_string()],
        )
        .unwrap();
    let pepper = db.add_plant("Pepper", &["Nightshade".to_string()]).unwrap();

    assert_eq!(tomato.plant_types.len(), 2);
    assert_eq!(pepper.plant_types.len(), 1);
    let nightshade = tomato
        .plant_types
        .iter()
        .find(|t| t.name == "Nightshade")
        .unwrap();
    assert_eq!(nightshade.id, pepper.plant_types[0].id);
}

#[test]
fn test_planting_requires_existing_records() {
    let (_temp_file, mut db) = create_test_db();
    let plan = db.create_plan("Spring").unwrap();
    let plant = db.add_plant("Kale", &[]).unwrap();

    let stored = db.add_planting(&planting(plan.id, plant.id)).unwrap();
    assert!(stored.id > 0);
    assert_eq!(db.get_plantings(plan.id).unwrap(), vec![stored]);

    let err = db.add_planting(&planting(plan.id, 404)).unwrap_err();
    assert!(matches!(err, FurrowError::PlantNotFound { id: 404 }));
    let err = db.add_planting(&planting(404, plant.id)).unwrap_err();
    assert!(matches!(err, FurrowError::PlanNotFound { id: 404 }));
}

#[test]
fn test_logs_and_first_log_of_type() {
    let (_temp_file, mut db) = create_test_db();
    let plant = db.add_plant("Kale", &[]).unwrap();

    db.add_log(plant.id, "seeding", "Resow", 500, LogStatus::Pending)
        .unwrap();
    let first = db
        .add_log(plant.id, "Seeding", "Sow", 100, LogStatus::Done)
        .unwrap();
    db.add_log(plant.id, "harvest", "Pick", 900, LogStatus::Done)
        .unwrap();

    assert_eq!(first.log_type, "seeding");
    let logs = db.activity_logs(plant.id).unwrap();
    let timestamps: Vec<i64> = logs.iter().map(|log| log.timestamp).collect();
    assert_eq!(timestamps, vec![100, 500, 900]);

    assert_eq!(db.first_log_of_type(plant.id, "seeding").unwrap(), Some(first));
    assert!(db
        .first_log_of_type(plant.id, "transplanting")
        .unwrap()
        .is_none());

    let err = db
        .add_log(404, "seeding", "Sow", 0, LogStatus::Done)
        .unwrap_err();
    assert!(matches!(err, FurrowError::PlantNotFound { id: 404 }));
}

#[test]
fn test_movements_group_locations() {
    let (_temp_file, mut db) = create_test_db();
    let plant = db.add_plant("Leek", &[]).unwrap();
    let bed_a = db.add_location("Bed A").unwrap();
    let bed_b = db.add_location("Bed B").unwrap();

    db.add_movement(plant.id, 900, &BTreeSet::from([bed_b.id]))
        .unwrap();
    db.add_movement(plant.id, 100, &BTreeSet::from([bed_a.id, bed_b.id]))
        .unwrap();

    let events = db.movement_events(plant.id).unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].timestamp, 100);
    assert_eq!(events[0].locations, BTreeSet::from([bed_a.id, bed_b.id]));
    assert_eq!(events[1].locations, BTreeSet::from([bed_b.id]));

    let err = db
        .add_movement(plant.id, 1_000, &BTreeSet::from([404]))
        .unwrap_err();
    assert!(matches!(err, FurrowError::LocationNotFound { id: 404 }));
    let err = db.add_movement(plant.id, 1_000, &BTreeSet::new()).unwrap_err();
    assert!(matches!(err, FurrowError::InvalidInput { .. }));
}

#[test]
fn test_out_of_range_timestamps_are_rejected() {
    let (_temp_file, mut db) = create_test_db();
    let plan = db.create_plan("Spring").unwrap();
    let plant = db.add_plant("Kale", &[]).unwrap();
    let bed = db.add_location("Bed A").unwrap();

    let mut far_future = planting(plan.id, plant.id);
    far_future.seeding_date = Some(i64::MAX - 10);
    let err = db.add_planting(&far_future).unwrap_err();
    assert!(matches!(err, FurrowError::InvalidInput { ref field, .. } if field == "seeding_date"));

    let err = db
        .add_log(plant.id, "seeding", "Sow", i64::MAX - 10, LogStatus::Done)
        .unwrap_err();
    assert!(matches!(err, FurrowError::InvalidInput { ref field, .. } if field == "timestamp"));
    let err = db
        .add_log(plant.id, "seeding", "Sow", -1, LogStatus::Done)
        .unwrap_err();
    assert!(matches!(err, FurrowError::InvalidInput { .. }));

    let err = db
        .add_movement(plant.id, MAX_TIMESTAMP + 1, &BTreeSet::from([bed.id]))
        .unwrap_err();
    assert!(matches!(err, FurrowError::InvalidInput { ref field, .. } if field == "timestamp"));

    assert!(db.activity_logs(plant.id).unwrap().is_empty());
    assert!(db.movement_events(plant.id).unwrap().is_empty());
    assert!(db.get_plantings(plan.id).unwrap().is_empty());
}
