mod common;
use common::{fitlog, setup_data_dir, temp_out};
use serde_json::Value;
use std::fs;
use std::path::Path;

fn seed_workouts(dir: &Path) {
    fs::create_dir_all(dir).expect("mkdir");
    fs::write(
        dir.join("workout_log.csv"),
        "date,exercise,sets,reps,weight\n\
         2025-09-01 18:00,Squat,3,5,100\n\
         2025-09-15 18:00,\"Press, seated\",3,8,40.5\n\
         2025-10-01 18:00,Squat,3,5,102.5\n",
    )
    .expect("write");
}

#[test]
fn test_export_csv_range_includes_volume() {
    let dir = setup_data_dir("export_csv_range");
    seed_workouts(&dir);
    let out = temp_out("export_csv_range", "csv");

    fitlog()
        .args([
            "--data-dir",
            dir.to_str().expect("utf-8"),
            "export",
            "workout",
            "--format",
            "csv",
            "--file",
            out.to_str().expect("utf-8"),
            "--range",
            "2025-09",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "date,exercise,sets,reps,weight,volume");
    assert_eq!(lines[1], "2025-09-01 18:00,Squat,3,5,100,1500");
    assert_eq!(lines[2], "2025-09-15 18:00,\"Press, seated\",3,8,40.5,972");
    assert_eq!(lines.len(), 3);
}

#[test]
fn test_export_json_keeps_numbers_typed() {
    let dir = setup_data_dir("export_json");
    seed_workouts(&dir);
    let out = temp_out("export_json", "json");

    fitlog()
        .args([
            "--data-dir",
            dir.to_str().expect("utf-8"),
            "export",
            "workout",
            "--format",
            "json",
            "--file",
            out.to_str().expect("utf-8"),
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let json: Value = serde_json::from_str(&content).expect("valid json");
    let items = json.as_array().expect("array");
    assert_eq!(items.len(), 3);
    assert_eq!(items[0]["date"], "2025-09-01 18:00");
    assert_eq!(items[0]["exercise"], "Squat");
    assert_eq!(items[0]["volume"].as_f64(), Some(1500.0));
    assert_eq!(items[2]["weight"].as_f64(), Some(102.5));
}

#[test]
fn test_export_empty_log_writes_empty_array() {
    let dir = setup_data_dir("export_empty");
    let out = temp_out("export_empty", "json");

    fitlog()
        .args([
            "--data-dir",
            dir.to_str().expect("utf-8"),
            "export",
            "sleep",
            "--format",
            "json",
            "--file",
            out.to_str().expect("utf-8"),
        ])
        .assert()
        .success();

    let json: Value =
        serde_json::from_str(&fs::read_to_string(&out).expect("read")).expect("valid json");
    assert_eq!(json, Value::Array(vec![]));
}

#[test]
fn test_export_xlsx_creates_file() {
    let dir = setup_data_dir("export_xlsx");
    seed_workouts(&dir);
    let out = temp_out("export_xlsx", "xlsx");

    fitlog()
        .args([
            "--data-dir",
            dir.to_str().expect("utf-8"),
            "export",
            "workout",
            "--format",
            "xlsx",
            "--file",
            out.to_str().expect("utf-8"),
            "--force",
        ])
        .assert()
        .success();

    let bytes = fs::read(&out).expect("read xlsx");
    // xlsx is a zip container
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn test_export_rejects_bad_range() {
    let dir = setup_data_dir("export_bad_range");
    seed_workouts(&dir);
    let out = temp_out("export_bad_range", "csv");

    fitlog()
        .args([
            "--data-dir",
            dir.to_str().expect("utf-8"),
            "export",
            "workout",
            "--file",
            out.to_str().expect("utf-8"),
            "--range",
            "2025-09:2025",
        ])
        .assert()
        .failure();

    assert!(!out.exists());
}

#[test]
fn test_backup_plain_and_compressed() {
    let dir = setup_data_dir("backup_src");
    seed_workouts(&dir);

    let plain = temp_out("backup_plain", "d");
    fitlog()
        .args([
            "--data-dir",
            dir.to_str().expect("utf-8"),
            "backup",
            "--file",
            plain.to_str().expect("utf-8"),
        ])
        .assert()
        .success();
    assert_eq!(
        fs::read_to_string(plain.join("workout_log.csv")).expect("copied"),
        fs::read_to_string(dir.join("workout_log.csv")).expect("source")
    );

    let zipped = temp_out("backup_zip", "zip");
    fitlog()
        .args([
            "--data-dir",
            dir.to_str().expect("utf-8"),
            "backup",
            "--file",
            zipped.to_str().expect("utf-8"),
            "--compress",
        ])
        .assert()
        .success();
    let bytes = fs::read(&zipped).expect("read zip");
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn test_backup_without_data_fails() {
    let dir = setup_data_dir("backup_empty");
    let out = temp_out("backup_empty", "zip");

    fitlog()
        .args([
            "--data-dir",
            dir.to_str().expect("utf-8"),
            "backup",
            "--file",
            out.to_str().expect("utf-8"),
            "--compress",
        ])
        .assert()
        .failure();
}
