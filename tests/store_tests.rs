mod common;

use chrono::Timelike;
use common::{TestClock, setup_data_dir, ts};
use fitlog::core::input;
use fitlog::errors::AppError;
use fitlog::models::{Entry, FieldValue, RecordKind, Water, Workout};
use fitlog::store::LogStore;
use std::fs;

fn squat(sets: u32, reps: u32, weight: f64) -> Entry {
    Entry::Workout(Workout {
        exercise: "Squat".into(),
        sets,
        reps,
        weight,
    })
}

#[test]
fn test_missing_file_is_empty_log() {
    let dir = setup_data_dir("store_missing");
    let store = LogStore::open(dir.join("workout_log.csv"), RecordKind::Workout).expect("open");

    assert!(store.is_empty());
    let report = store.load_all().expect("load");
    assert!(report.records.is_empty());
    assert!(report.skipped.is_empty());
    assert!(!dir.exists(), "opening must not create anything");
}

#[test]
fn test_append_squat_derives_volume() {
    let dir = setup_data_dir("store_squat");
    let clock = TestClock::at(ts(2024, 1, 1, 18, 30));
    let mut store =
        LogStore::open_with_clock(dir.join("workout_log.csv"), RecordKind::Workout, &clock)
            .expect("open");

    let record = store.append(squat(3, 5, 100.0)).expect("append");
    assert_eq!(record.number("volume"), Some(1500.0));

    let report = store.load_all().expect("load");
    assert_eq!(report.records.len(), 1);
    assert_eq!(report.records[0].number("volume"), Some(1500.0));
    assert_eq!(report.records[0], record);

    // volume is derived, never written
    let content = fs::read_to_string(dir.join("workout_log.csv")).expect("read");
    assert_eq!(
        content,
        "date,exercise,sets,reps,weight\n2024-01-01 18:30,Squat,3,5,100\n"
    );
}

#[test]
fn test_append_is_durable_and_ordered() {
    let dir = setup_data_dir("store_order");
    let path = dir.join("water_log.csv");
    let clock = TestClock::at(ts(2024, 3, 10, 8, 0));
    let mut store = LogStore::open_with_clock(&path, RecordKind::Water, &clock).expect("open");

    for (i, ml) in [250.0, 500.0, 330.0].into_iter().enumerate() {
        clock.set(ts(2024, 3, 10, 8 + i as u32, 15));
        let before = store.len();
        let r = store
            .append(Entry::Water(Water { amount_ml: ml }))
            .expect("append");
        assert_eq!(store.len(), before + 1);

        // a fresh store sees it as the last record
        let reopened = LogStore::open(&path, RecordKind::Water).expect("reopen");
        assert_eq!(reopened.records().last(), Some(&r));
    }

    assert_eq!(store.records(), store.load_all().expect("load").records.as_slice());
}

#[test]
fn test_timestamp_is_truncated_to_the_minute() {
    let dir = setup_data_dir("store_truncate");
    let clock = TestClock::at(
        ts(2024, 5, 5, 7, 42)
            .with_second(37)
            .and_then(|t| t.with_nanosecond(123))
            .expect("valid"),
    );
    let mut store =
        LogStore::open_with_clock(dir.join("water_log.csv"), RecordKind::Water, &clock)
            .expect("open");

    let r = store
        .append(Entry::Water(Water { amount_ml: 200.0 }))
        .expect("append");
    assert_eq!(r.timestamp, ts(2024, 5, 5, 7, 42));
    assert_eq!(store.load_all().expect("load").records, vec![r]);
}

#[test]
fn test_malformed_row_is_skipped_not_fatal() {
    let dir = setup_data_dir("store_malformed");
    fs::create_dir_all(&dir).expect("mkdir");
    let path = dir.join("workout_log.csv");
    fs::write(
        &path,
        "date,exercise,sets,reps,weight\n\
         2024-01-01 10:00,Squat,3,5,100\n\
         2024-01-01 10:05,Bench,3,5,heavy\n",
    )
    .expect("write");

    let store = LogStore::open(&path, RecordKind::Workout).expect("open");
    assert_eq!(store.len(), 1);
    assert_eq!(
        store.records()[0].field("exercise"),
        Some(FieldValue::Text("Squat".into()))
    );
    assert_eq!(store.skipped().len(), 1);
    assert_eq!(store.skipped()[0].line, 3);
    assert!(store.skipped()[0].reason.contains("weight"));
}

#[test]
fn test_wrong_arity_and_bad_dates_are_skipped() {
    let dir = setup_data_dir("store_arity");
    fs::create_dir_all(&dir).expect("mkdir");
    let path = dir.join("food_log.csv");
    fs::write(
        &path,
        "2024-02-01 12:00,Salad,Lunch,400,20,30,10\n\
         2024-02-01 13:00,Soup,Lunch,300\n\
         yesterday,Toast,Breakfast,200,5,30,3\n\
         date,meal,category,calories,protein,carbs,fat\n\
         2024-02-01 20:00,\"Pasta, pesto\",Dinner,700,25,90,20\n",
    )
    .expect("write");

    let report = LogStore::open(&path, RecordKind::Meal)
        .expect("open")
        .load_all()
        .expect("load");

    // headerless legacy rows are read, a stray header mid-file is ignored
    assert_eq!(report.records.len(), 2);
    assert_eq!(
        report.records[1].field("meal"),
        Some(FieldValue::Text("Pasta, pesto".into()))
    );
    assert_eq!(report.skipped.len(), 2);
}

#[test]
fn test_append_after_truncated_line_starts_new_row() {
    let dir = setup_data_dir("store_truncated_line");
    fs::create_dir_all(&dir).expect("mkdir");
    let path = dir.join("water_log.csv");
    fs::write(&path, "date,amount_ml\n2024-01-01 09:00,250").expect("write");

    let clock = TestClock::at(ts(2024, 1, 1, 10, 0));
    let mut store = LogStore::open_with_clock(&path, RecordKind::Water, &clock).expect("open");
    assert_eq!(store.len(), 1);

    store
        .append(Entry::Water(Water { amount_ml: 500.0 }))
        .expect("append");

    let report = store.load_all().expect("load");
    assert_eq!(report.records.len(), 2);
    assert!(report.skipped.is_empty());
}

#[test]
fn test_append_rejects_other_kind() {
    let dir = setup_data_dir("store_kind");
    let mut store = LogStore::open(dir.join("water_log.csv"), RecordKind::Water).expect("open");

    let err = store.append(squat(1, 1, 1.0)).expect_err("kind mismatch");
    assert!(matches!(err, AppError::Validation(_)));
    assert!(store.is_empty());
    assert!(!dir.join("water_log.csv").exists());
}

#[test]
fn test_append_to_unwritable_location_is_io_error() {
    let dir = setup_data_dir("store_unwritable");
    let sub = dir.join("sub");
    let mut store =
        LogStore::open(sub.join("workout_log.csv"), RecordKind::Workout).expect("open");

    // a regular file where the data directory should be
    fs::create_dir_all(&dir).expect("mkdir");
    fs::write(&sub, "x").expect("write");

    let err = store.append(squat(3, 5, 100.0)).expect_err("must fail");
    assert!(matches!(err, AppError::Io(_)));
    assert!(store.is_empty());
}

#[test]
fn test_numbers_survive_the_text_encoding() {
    let dir = setup_data_dir("store_precision");
    let path = dir.join("food_log.csv");
    let clock = TestClock::at(ts(2024, 6, 1, 12, 0));
    let mut store = LogStore::open_with_clock(&path, RecordKind::Meal, &clock).expect("open");

    let cats = vec!["Lunch".to_string()];
    let values = ["0.1", "0.2", "123.456789012345", "1e-7", "33.3333333333333"];
    let mut expected = 0.0;
    for v in values {
        let entry = input::meal("x", "lunch", v, v, None, None, &cats).expect("valid");
        expected += entry.field("calories").and_then(|f| f.as_number()).expect("number");
        store.append(entry).expect("append");
    }

    let loaded = LogStore::open(&path, RecordKind::Meal).expect("reopen");
    let total: f64 = loaded
        .records()
        .iter()
        .filter_map(|r| r.number("calories"))
        .sum();
    assert_eq!(total, expected);
    assert_eq!(loaded.records(), store.records());
}

#[test]
fn test_init_file_writes_header_once() {
    let dir = setup_data_dir("store_init_file");
    let path = dir.join("sleep_log.csv");
    let store = LogStore::open(&path, RecordKind::Sleep).expect("open");

    assert!(store.init_file().expect("init"));
    assert!(!store.init_file().expect("init again"));
    assert_eq!(fs::read_to_string(&path).expect("read"), "date,hours,note\n");
}
