//! Single-date selection

use chrono::NaiveDate;

/// Next value for a click on `trigger`
///
/// Clicking the selected date clears it, unless `required` keeps it.
pub fn select_single(
    selected: Option<NaiveDate>,
    trigger: NaiveDate,
    required: bool,
) -> Option<NaiveDate> {
    if !required && selected == Some(trigger) {
        None
    } else {
        Some(trigger)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_select_new_date() {
        assert_eq!(select_single(None, d(2024, 6, 1), false), Some(d(2024, 6, 1)));
        assert_eq!(
            select_single(Some(d(2024, 6, 1)), d(2024, 6, 2), false),
            Some(d(2024, 6, 2))
        );
    }

    #[test]
    fn test_click_selected_date() {
        assert_eq!(select_single(Some(d(2024, 6, 1)), d(2024, 6, 1), false), None);
        assert_eq!(
            select_single(Some(d(2024, 6, 1)), d(2024, 6, 1), true),
            Some(d(2024, 6, 1))
        );
    }
}
