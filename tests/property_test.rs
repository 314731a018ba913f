//! Property-based tests for ranges, grids, selection and focus
//!
//! Uses proptest to generate random dates and verify invariants

use chrono::{Datelike, NaiveDate, Weekday};
use daypicker::date::add_days;
use daypicker::{
    broadcast_weeks_in_month, build_months, display_months, get_dates, get_next_focus,
    range_includes_date, select_multiple, select_single, CalendarDay, CalendarOptions, DateRange,
    DayPickerProps, Matcher, Mode, MoveBy, MoveDir, NavBounds, WeekOptions,
};
use proptest::prelude::*;

fn any_date() -> impl Strategy<Value = NaiveDate> {
    (1900i32..2100, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

fn any_weekday() -> impl Strategy<Value = Weekday> {
    (0u8..7).prop_map(|n| Weekday::try_from(n).unwrap())
}

fn any_week_options() -> impl Strategy<Value = WeekOptions> {
    prop_oneof![
        any_weekday().prop_map(|week_starts_on| WeekOptions {
            week_starts_on,
            ..WeekOptions::default()
        }),
        Just(WeekOptions::iso()),
    ]
}

fn any_move() -> impl Strategy<Value = (MoveBy, MoveDir)> {
    let by = prop_oneof![
        Just(MoveBy::Day),
        Just(MoveBy::Week),
        Just(MoveBy::StartOfWeek),
        Just(MoveBy::EndOfWeek),
        Just(MoveBy::Month),
        Just(MoveBy::Year),
    ];
    let dir = prop_oneof![Just(MoveDir::Before), Just(MoveDir::After)];
    (by, dir)
}

proptest! {
    #[test]
    fn test_range_includes_date_iff_between(a in any_date(), b in any_date(), x in any_date()) {
        let range = DateRange::between(a, b);
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert_eq!(range_includes_date(&range, x, false), lo <= x && x <= hi);
        prop_assert_eq!(range_includes_date(&range, x, true), lo < x && x < hi);
    }

    #[test]
    fn test_fixed_weeks_always_six(month in any_date(), week in any_week_options()) {
        let options = CalendarOptions { week, fixed_weeks: true, reverse_months: false };
        let shown = display_months(month, None, 1);
        let dates = get_dates(&shown, None, &options);
        let months = build_months(&shown, &dates, &options);
        prop_assert_eq!(months[0].weeks.len(), 6);
        prop_assert!(months[0].weeks.iter().all(|w| w.days.len() == 7));
    }

    #[test]
    fn test_grid_weeks_are_full(month in any_date(), week in any_week_options(), n in 1u32..4) {
        let options = CalendarOptions { week, ..CalendarOptions::default() };
        let shown = display_months(month, None, n);
        let dates = get_dates(&shown, None, &options);
        let months = build_months(&shown, &dates, &options);
        prop_assert_eq!(months.len(), n as usize);
        for m in &months {
            prop_assert!((4..=6).contains(&m.weeks.len()));
            prop_assert!(m.weeks.iter().all(|w| w.days.len() == 7));
            // Every day of the month shows up exactly once as a non-outside day
            let inside = m.days().filter(|d| !d.outside).count();
            prop_assert_eq!(inside as u32, daypicker::date::days_in_month(m.date));
        }
    }

    #[test]
    fn test_broadcast_grid_matches_week_count(month in any_date()) {
        let options = CalendarOptions { week: WeekOptions::broadcast(), ..CalendarOptions::default() };
        let shown = display_months(month, None, 1);
        let dates = get_dates(&shown, None, &options);
        let months = build_months(&shown, &dates, &options);
        let expected = broadcast_weeks_in_month(month);
        prop_assert!(expected == 4 || expected == 5);
        prop_assert_eq!(months[0].weeks.len() as i64, expected);
        prop_assert_eq!(months[0].weeks[0].days[0].date.weekday(), Weekday::Mon);
    }

    #[test]
    fn test_single_selection(selected in any_date(), trigger in any_date()) {
        prop_assert_eq!(select_single(Some(selected), trigger, true), Some(trigger));
        let expected = if selected == trigger { None } else { Some(trigger) };
        prop_assert_eq!(select_single(Some(selected), trigger, false), expected);
    }

    #[test]
    fn test_multiple_at_max_restarts(start in any_date(), max in 1usize..6, offset in 10i64..40) {
        let selected: Vec<NaiveDate> = (0..max as i64).map(|i| add_days(start, i)).collect();
        let trigger = add_days(start, offset);
        let next = select_multiple(Some(selected.as_slice()), trigger, 0, max, false);
        prop_assert_eq!(next, Some(vec![trigger]));
    }

    #[test]
    fn test_next_focus_is_focusable_and_bounded(
        from in any_date(),
        (move_by, move_dir) in any_move(),
        disabled_days in prop::collection::vec(0u32..7, 0..6),
    ) {
        let props = DayPickerProps {
            disabled: vec![Matcher::DayOfWeek(disabled_days)],
            start_month: Some(add_days(from, -90)),
            end_month: Some(add_days(from, 90)),
            ..DayPickerProps::with_mode(Mode::Single)
        };
        let nav = NavBounds::from_props(&props);
        let day = CalendarDay::new(from, from);
        if let Some(next) = get_next_focus(move_by, move_dir, &day, &nav, &props) {
            prop_assert!(!props.is_disabled(next.date));
            prop_assert!(nav.contains(next.date));
        }
    }
}
