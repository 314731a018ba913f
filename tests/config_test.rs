//! Loading picker configs from disk and driving the picker they describe

use chrono::NaiveDate;
use daypicker::{render_calendar, DayPicker, Error, PickerConfig, SelectionValue};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

const BOOKING: &str = r#"
mode: range
max: 7
exclude_disabled: true
month: 2024-06-01
today: 2024-06-12
start_month: 2024-06-01
end_month: 2024-08-01
disabled:
  - before: 2024-06-12
  - dates: [2024-06-20, 2024-06-21]
modifiers:
  booked:
    - range:
        from: 2024-06-20
        to: 2024-06-21
"#;

#[test]
fn test_load_config_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("booking.yaml");
    fs::write(&path, BOOKING).unwrap();

    let config = PickerConfig::load_from_file(&path).unwrap();
    let props = config.to_props();
    let mut picker = DayPicker::with_selected(props, config.initial_selection().unwrap().unwrap());

    // Before today is disabled
    assert_eq!(picker.click(d(2024, 6, 10)).unwrap(), None);

    picker.click(d(2024, 6, 13)).unwrap();
    picker.click(d(2024, 6, 16)).unwrap();
    assert_eq!(
        picker.selected(),
        Some(&SelectionValue::Range(Some(daypicker::DateRange::between(
            d(2024, 6, 13),
            d(2024, 6, 16)
        ))))
    );

    let booked = picker
        .days()
        .into_iter()
        .find(|day| day.date == d(2024, 6, 20))
        .unwrap();
    assert!(picker.modifiers(&booked).custom("booked"));
    assert!(picker.modifiers(&booked).disabled);

    let text = render_calendar(&picker);
    assert!(text.trim_start().starts_with("June 2024"));
    assert!(text.contains("[13]"));
}

#[test]
fn test_navigation_bounds_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("booking.yaml");
    fs::write(&path, BOOKING).unwrap();

    let config = PickerConfig::load_from_file(&path).unwrap();
    let mut picker = DayPicker::new(config.to_props());
    assert!(!picker.previous_month());
    assert!(picker.next_month());
    assert!(picker.next_month());
    assert_eq!(picker.first_month(), d(2024, 8, 1));
    assert!(!picker.next_month());
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    let result = PickerConfig::load_from_file(&dir.path().join("missing.yaml"));
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_invalid_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.yaml");
    fs::write(&path, "mode: sideways\n").unwrap();
    let result = PickerConfig::load_from_file(&path);
    assert!(matches!(result, Err(Error::Config(_))));
}
