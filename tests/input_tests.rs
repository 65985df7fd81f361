use fitlog::core::input;
use fitlog::errors::AppError;
use fitlog::models::{Entry, FieldValue};
use fitlog::utils::date::parse_range;
use chrono::NaiveDate;

fn cats() -> Vec<String> {
    ["Breakfast", "Lunch", "Dinner", "Snack", "Other"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn is_validation<T: std::fmt::Debug>(r: Result<T, AppError>) -> bool {
    matches!(r, Err(AppError::Validation(_)))
}

#[test]
fn test_workout_input_is_parsed_not_coerced() {
    let e = input::workout(" Squat ", "3", "5", "100").expect("valid");
    assert_eq!(e.field("exercise"), Some(FieldValue::Text("Squat".into())));
    assert_eq!(e.field("volume"), Some(FieldValue::Number(1500.0)));

    assert!(is_validation(input::workout("Squat", "3", "5", "heavy")));
    assert!(is_validation(input::workout("Squat", "three", "5", "100")));
    assert!(is_validation(input::workout("Squat", "0", "5", "100")));
    assert!(is_validation(input::workout("Squat", "2.5", "5", "100")));
    assert!(is_validation(input::workout("Squat", "3", "5", "-10")));
    assert!(is_validation(input::workout("Squat", "3", "5", "NaN")));
    assert!(is_validation(input::workout("   ", "3", "5", "100")));

    // bodyweight work is fine
    assert!(input::workout("Pull-up", "3", "8", "0").is_ok());
}

#[test]
fn test_meal_input_and_categories() {
    let e = input::meal("Oats", "breakfast", "350", "12.5", Some("60"), None, &cats())
        .expect("valid");
    match e {
        Entry::Meal(m) => {
            assert_eq!(m.category, "Breakfast");
            assert_eq!(m.protein, 12.5);
            assert_eq!(m.carbs, 60.0);
            assert_eq!(m.fat, 0.0);
        }
        other => panic!("unexpected entry {:?}", other),
    }

    assert!(is_validation(input::meal("Oats", "Brunch", "350", "12", None, None, &cats())));
    assert!(is_validation(input::meal("Oats", "Lunch", "", "12", None, None, &cats())));
    assert!(is_validation(input::meal("Oats", "Lunch", "350", "12", Some("x"), None, &cats())));
    assert!(is_validation(input::meal("", "Lunch", "350", "12", None, None, &cats())));
}

#[test]
fn test_water_and_sleep_input() {
    assert!(input::water("500").is_ok());
    assert!(is_validation(input::water("0")));
    assert!(is_validation(input::water("a glass")));

    let e = input::sleep("7.5", Some("  restless ")).expect("valid");
    assert_eq!(e.field("note"), Some(FieldValue::Text("restless".into())));
    assert!(is_validation(input::sleep("25", None)));
    assert!(is_validation(input::sleep("-1", None)));
}

#[test]
fn test_parse_range_forms() {
    let d = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).expect("valid date");

    assert_eq!(parse_range(None).expect("none"), None);
    assert_eq!(parse_range(Some("all")).expect("all"), None);
    assert_eq!(
        parse_range(Some("2024")).expect("year"),
        Some((d(2024, 1, 1), d(2024, 12, 31)))
    );
    assert_eq!(
        parse_range(Some("2024-02")).expect("month"),
        Some((d(2024, 2, 1), d(2024, 2, 29)))
    );
    assert_eq!(
        parse_range(Some("2023-12:2024-01")).expect("months"),
        Some((d(2023, 12, 1), d(2024, 1, 31)))
    );
    assert_eq!(
        parse_range(Some("2024-03-05")).expect("day"),
        Some((d(2024, 3, 5), d(2024, 3, 5)))
    );

    assert!(parse_range(Some("2024:2024-01")).is_err());
    assert!(parse_range(Some("2024-05:2024-01")).is_err());
    assert!(parse_range(Some("2024-13")).is_err());
    assert!(parse_range(Some("last week")).is_err());
}
