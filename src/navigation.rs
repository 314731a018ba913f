//! Month navigation
//!
//! Decides which month is shown first and where the previous/next month
//! buttons lead, within the `start_month` / `end_month` bounds.

use crate::date::{add_months, difference_in_calendar_months, end_of_month, start_of_month};
use crate::props::DayPickerProps;
use chrono::NaiveDate;
use tracing::trace;

/// Navigable window: first day of the start month, last day of the end month
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavBounds {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl NavBounds {
    pub fn from_props(props: &DayPickerProps) -> Self {
        Self {
            start: props.start_month.map(start_of_month),
            end: props.end_month.map(end_of_month),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.is_none_or(|s| date >= s) && self.end.is_none_or(|e| date <= e)
    }
}

/// First month to display
///
/// `month`, then `default_month`, then today; moved back so the last
/// displayed month does not pass `end_month`, and never before
/// `start_month`.
pub fn initial_month(props: &DayPickerProps) -> NaiveDate {
    let mut initial = props
        .month
        .or(props.default_month)
        .unwrap_or_else(|| props.today());

    if let Some(end) = props.end_month {
        if difference_in_calendar_months(end, initial) < 0 {
            let back = i32::try_from(props.number_of_months.max(1) - 1).unwrap_or(0);
            initial = add_months(end, -back);
        }
    }
    if let Some(start) = props.start_month {
        if difference_in_calendar_months(initial, start) < 0 {
            initial = start;
        }
    }
    start_of_month(initial)
}

fn navigation_offset(props: &DayPickerProps) -> i32 {
    if props.paged_navigation {
        i32::try_from(props.number_of_months.max(1)).unwrap_or(1)
    } else {
        1
    }
}

/// Month the "next" button leads to, or `None` when navigation is blocked
pub fn next_month(first_displayed: NaiveDate, props: &DayPickerProps) -> Option<NaiveDate> {
    if props.disable_navigation {
        return None;
    }
    let month = start_of_month(first_displayed);
    let offset = navigation_offset(props);
    if let Some(end) = props.end_month {
        let months_diff = difference_in_calendar_months(end, first_displayed);
        if months_diff < i64::from(props.number_of_months.max(1)) {
            trace!(%first_displayed, %end, "next month past end_month");
            return None;
        }
    }
    Some(add_months(month, offset))
}

/// Month the "previous" button leads to, or `None` when navigation is blocked
pub fn previous_month(first_displayed: NaiveDate, props: &DayPickerProps) -> Option<NaiveDate> {
    if props.disable_navigation {
        return None;
    }
    let month = start_of_month(first_displayed);
    let offset = navigation_offset(props);
    if let Some(start) = props.start_month {
        if difference_in_calendar_months(month, start) <= 0 {
            trace!(%first_displayed, %start, "previous month before start_month");
            return None;
        }
    }
    Some(add_months(month, -offset))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_initial_month_priority() {
        let props = DayPickerProps {
            month: Some(d(2024, 3, 15)),
            default_month: Some(d(2024, 5, 1)),
            today: Some(d(2024, 7, 4)),
            ..Default::default()
        };
        assert_eq!(initial_month(&props), d(2024, 3, 1));

        let props = DayPickerProps {
            default_month: Some(d(2024, 5, 9)),
            today: Some(d(2024, 7, 4)),
            ..Default::default()
        };
        assert_eq!(initial_month(&props), d(2024, 5, 1));

        let props = DayPickerProps {
            today: Some(d(2024, 7, 4)),
            ..Default::default()
        };
        assert_eq!(initial_month(&props), d(2024, 7, 1));
    }

    #[test]
    fn test_initial_month_clamped() {
        let props = DayPickerProps {
            today: Some(d(2024, 7, 4)),
            end_month: Some(d(2024, 4, 1)),
            number_of_months: 2,
            ..Default::default()
        };
        assert_eq!(initial_month(&props), d(2024, 3, 1));

        let props = DayPickerProps {
            today: Some(d(2024, 7, 4)),
            start_month: Some(d(2024, 9, 1)),
            ..Default::default()
        };
        assert_eq!(initial_month(&props), d(2024, 9, 1));
    }

    #[test]
    fn test_next_month() {
        let props = DayPickerProps::default();
        assert_eq!(next_month(d(2024, 1, 1), &props), Some(d(2024, 2, 1)));

        let bounded = DayPickerProps {
            end_month: Some(d(2024, 2, 1)),
            ..Default::default()
        };
        assert_eq!(next_month(d(2024, 1, 1), &bounded), Some(d(2024, 2, 1)));
        assert_eq!(next_month(d(2024, 2, 1), &bounded), None);

        let paged = DayPickerProps {
            number_of_months: 3,
            paged_navigation: true,
            ..Default::default()
        };
        assert_eq!(next_month(d(2024, 1, 1), &paged), Some(d(2024, 4, 1)));
    }

    #[test]
    fn test_previous_month() {
        let bounded = DayPickerProps {
            start_month: Some(d(2024, 1, 1)),
            ..Default::default()
        };
        assert_eq!(previous_month(d(2024, 2, 1), &bounded), Some(d(2024, 1, 1)));
        assert_eq!(previous_month(d(2024, 1, 1), &bounded), None);

        let disabled = DayPickerProps {
            disable_navigation: true,
            ..Default::default()
        };
        assert_eq!(previous_month(d(2024, 2, 1), &disabled), None);
        assert_eq!(next_month(d(2024, 2, 1), &disabled), None);
    }

    #[test]
    fn test_nav_bounds() {
        let props = DayPickerProps {
            start_month: Some(d(2024, 1, 20)),
            end_month: Some(d(2024, 2, 3)),
            ..Default::default()
        };
        let nav = NavBounds::from_props(&props);
        assert_eq!(nav.start, Some(d(2024, 1, 1)));
        assert_eq!(nav.end, Some(d(2024, 2, 29)));
        assert!(nav.contains(d(2024, 2, 29)));
        assert!(!nav.contains(d(2023, 12, 31)));
    }
}
