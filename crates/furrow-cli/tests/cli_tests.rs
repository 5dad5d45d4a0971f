use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color flag for testing
fn furrow_cmd(db_path: &Path) -> Command {
    let mut cmd = Command::cargo_bin("furrow").expect("Failed to find furrow binary");
    cmd.arg("--no-color")
        .arg("--database-file")
        .arg(db_path.to_str().unwrap());
    cmd
}

/// Creates plan 1 with a tomato planting seeded on 2024-03-01, a seeding log
/// and a move into the greenhouse.
fn seed_garden(db_path: &Path) {
    let steps: &[&[&str]] = &[
        &["plan", "create", "Spring"],
        &["plant", "add", "Tomato", "--type", "Nightshade,Fruit"],
        &["location", "add", "Greenhouse"],
        &[
            "planting",
            "add",
            "1",
            "1",
            "--seeded",
            "2024-03-01",
            "--transplant-days",
            "30",
            "--maturity-days",
            "60",
            "--harvest-days",
            "7",
        ],
        &[
            "log",
            "add",
            "1",
            "seeding",
            "Seed tomatoes",
            "--date",
            "2024-03-01",
            "--done",
        ],
        &["move", "1", "--location", "1", "--date", "2024-03-01"],
    ];
    for args in steps {
        furrow_cmd(db_path).args(*args).assert().success();
    }
}

#[test]
fn test_cli_create_plan_success() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    furrow_cmd(&db_path)
        .args(["plan", "create", "Spring Beds"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Spring Beds"))
        .stdout(predicate::str::contains("# 1."));
}

#[test]
fn test_cli_list_empty_plans() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    furrow_cmd(&db_path)
        .args(["plan", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No plans found."));
}

#[test]
fn test_cli_records_are_confirmed() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    furrow_cmd(&db_path)
        .args(["plant", "add", "Tomato", "--type", "Nightshade", "--type", "Fruit"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added Tomato (plant 1) [Nightshade, Fruit]"));

    furrow_cmd(&db_path)
        .args(["location", "add", "Bed A"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added Bed A (location 1)"));

    furrow_cmd(&db_path)
        .args(["log", "add", "1", "Harvest", "First pick", "--date", "2024-06-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("harvest log 1"))
        .stdout(predicate::str::contains("2024-06-01 (pending)"));
}

#[test]
fn test_cli_show_plan_with_plantings() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    seed_garden(&db_path);

    furrow_cmd(&db_path)
        .args(["plan", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# 1. Spring"))
        .stdout(predicate::str::contains("## Plantings"))
        .stdout(predicate::str::contains("Tomato"))
        .stdout(predicate::str::contains("2024-03-01"));
}

#[test]
fn test_cli_timeline_markdown() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    seed_garden(&db_path);

    furrow_cmd(&db_path)
        .args(["timeline", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("By Plant Type"))
        .stdout(predicate::str::contains("Nightshade"))
        .stdout(predicate::str::contains("Seeding: 2024-03-01 to 2024-03-31"))
        .stdout(predicate::str::contains("Seed tomatoes (seeding, done): 2024-03-01"))
        .stdout(predicate::str::contains("Greenhouse").not());

    furrow_cmd(&db_path)
        .args(["timeline", "1", "--by", "location"])
        .assert()
        .success()
        .stdout(predicate::str::contains("By Location"))
        .stdout(predicate::str::contains("Greenhouse: 2024-03-01 onward"));
}

#[test]
fn test_cli_timeline_json() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    seed_garden(&db_path);

    let output = furrow_cmd(&db_path)
        .args(["timeline", "1", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let timeline: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(timeline["plan_id"], 1);
    let rows = timeline["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["id"], "term--plant_type--1");
    assert_eq!(rows[0]["children"][0]["id"], "term--plant_type--1--planting--1");
}

#[test]
fn test_cli_timeline_flat_json() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    seed_garden(&db_path);

    let output = furrow_cmd(&db_path)
        .args(["timeline", "1", "--by", "location", "--json", "--flat"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let view: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rows = view["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["id"], "asset--location--1");
    assert_eq!(rows[1]["parent_id"], "asset--location--1");
    assert!(view["tasks"]
        .as_array()
        .unwrap()
        .iter()
        .all(|task| task["resource_id"] == "asset--location--1--planting--1"));
    assert!(view["window"]["from"].is_i64());
}

#[test]
fn test_cli_flat_requires_json() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    furrow_cmd(&db_path)
        .args(["timeline", "1", "--flat"])
        .assert()
        .failure();
}

#[test]
fn test_cli_rejects_out_of_range_offset() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    furrow_cmd(&db_path)
        .args(["plan", "create", "Spring"])
        .assert()
        .success();
    furrow_cmd(&db_path)
        .args(["plant", "add", "Tomato"])
        .assert()
        .success();

    furrow_cmd(&db_path)
        .args(["planting", "add", "1", "1", "--maturity-days", "400"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("maturity_days"));
}

#[test]
fn test_cli_rejects_bad_date() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    furrow_cmd(&db_path)
        .args(["move", "1", "--location", "1", "--date", "March 1st"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid date"));
}

#[test]
fn test_cli_missing_plan() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    furrow_cmd(&db_path)
        .args(["plan", "show", "999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Plan with ID 999 not found"));

    furrow_cmd(&db_path)
        .args(["timeline", "999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Plan with ID 999 not found"));
}

#[test]
fn test_cli_rejects_out_of_range_timestamp() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    furrow_cmd(&db_path)
        .args(["plant", "add", "Tomato"])
        .assert()
        .success();

    furrow_cmd(&db_path)
        .args(["log", "add", "1", "seeding", "Sow", "--date", "9223372036854775000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("timestamp"));
}
