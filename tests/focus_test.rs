//! Keyboard focus through the picker and the bounded focus resolver

use chrono::NaiveDate;
use daypicker::{
    get_next_focus, CalendarDay, DayPicker, DayPickerProps, Key, KeyPress, Matcher, Mode, MoveBy,
    MoveDir, NavBounds, SelectionValue,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn june(mode: Mode) -> DayPickerProps {
    DayPickerProps {
        month: Some(d(2024, 6, 1)),
        today: Some(d(2024, 6, 12)),
        ..DayPickerProps::with_mode(mode)
    }
}

fn press(picker: &mut DayPicker, key: Key) -> Option<NaiveDate> {
    picker.key(KeyPress::new(key)).unwrap().map(|day| day.date)
}

#[test]
fn test_focus_target_prefers_selected_over_today() {
    let picker = DayPicker::with_selected(
        june(Mode::Single),
        SelectionValue::Single(Some(d(2024, 6, 4))),
    );
    assert_eq!(picker.focus_target().map(|day| day.date), Some(d(2024, 6, 4)));

    let picker = DayPicker::new(june(Mode::Single));
    assert_eq!(picker.focus_target().map(|day| day.date), Some(d(2024, 6, 12)));
}

#[test]
fn test_focus_target_skips_disabled_today() {
    let props = DayPickerProps {
        disabled: vec![Matcher::Date(d(2024, 6, 12))],
        ..june(Mode::Single)
    };
    let picker = DayPicker::new(props);
    // Falls back to the first focusable day of the month
    assert_eq!(picker.focus_target().map(|day| day.date), Some(d(2024, 6, 1)));
}

#[test]
fn test_keyboard_walk() {
    let mut picker = DayPicker::new(june(Mode::Single));

    // First key press enters the grid at today
    assert_eq!(press(&mut picker, Key::ArrowRight), Some(d(2024, 6, 12)));
    assert_eq!(press(&mut picker, Key::ArrowDown), Some(d(2024, 6, 19)));
    assert_eq!(press(&mut picker, Key::End), Some(d(2024, 6, 22)));
    assert_eq!(press(&mut picker, Key::Home), Some(d(2024, 6, 16)));

    assert_eq!(press(&mut picker, Key::Enter), Some(d(2024, 6, 16)));
    assert!(picker.is_selected(d(2024, 6, 16)));
}

#[test]
fn test_keyboard_leaves_displayed_month() {
    let mut picker = DayPicker::new(june(Mode::Single));
    press(&mut picker, Key::Home);

    assert_eq!(press(&mut picker, Key::PageDown), Some(d(2024, 7, 12)));
    assert_eq!(picker.first_month(), d(2024, 7, 1));

    let day = picker.key(KeyPress::shifted(Key::PageUp)).unwrap();
    assert_eq!(day.map(|day| day.date), Some(d(2023, 7, 12)));
    assert_eq!(picker.first_month(), d(2023, 7, 1));
}

#[test]
fn test_keyboard_shift_arrows() {
    let mut picker = DayPicker::new(june(Mode::Single));
    press(&mut picker, Key::Home);
    press(&mut picker, Key::End);
    assert_eq!(picker.focused().map(|day| day.date), Some(d(2024, 6, 15)));

    let day = picker.key(KeyPress::shifted(Key::ArrowRight)).unwrap();
    assert_eq!(day.map(|day| day.date), Some(d(2024, 7, 15)));
    assert_eq!(picker.first_month(), d(2024, 7, 1));

    let day = picker.key(KeyPress::shifted(Key::ArrowDown)).unwrap();
    assert_eq!(day.map(|day| day.date), Some(d(2025, 7, 15)));
}

#[test]
fn test_keyboard_steps_over_weekend() {
    let props = DayPickerProps {
        disabled: vec![Matcher::day_of_week([0, 6])],
        today: Some(d(2024, 6, 14)),
        ..june(Mode::Single)
    };
    let mut picker = DayPicker::new(props);
    assert_eq!(press(&mut picker, Key::ArrowRight), Some(d(2024, 6, 14)));
    // Friday to Monday
    assert_eq!(press(&mut picker, Key::ArrowRight), Some(d(2024, 6, 17)));
    assert_eq!(press(&mut picker, Key::ArrowLeft), Some(d(2024, 6, 14)));
}

#[test]
fn test_keyboard_stays_when_blocked() {
    let props = DayPickerProps {
        end_month: Some(d(2024, 6, 1)),
        disabled: vec![Matcher::Date(d(2024, 6, 30))],
        today: Some(d(2024, 6, 29)),
        ..june(Mode::Single)
    };
    let mut picker = DayPicker::new(props);
    assert_eq!(press(&mut picker, Key::ArrowRight), Some(d(2024, 6, 29)));
    // The only later day is the disabled end bound
    assert_eq!(press(&mut picker, Key::ArrowRight), Some(d(2024, 6, 29)));
}

#[rstest]
#[case::day(MoveBy::Day, MoveDir::After)]
#[case::week(MoveBy::Week, MoveDir::Before)]
#[case::month(MoveBy::Month, MoveDir::After)]
#[case::year(MoveBy::Year, MoveDir::Before)]
fn test_next_focus_gives_up_when_everything_is_disabled(
    #[case] move_by: MoveBy,
    #[case] move_dir: MoveDir,
) {
    let props = DayPickerProps {
        disabled: vec![Matcher::Bool(true)],
        ..june(Mode::Single)
    };
    let from = CalendarDay::new(d(2024, 6, 12), d(2024, 6, 1));
    let next = get_next_focus(move_by, move_dir, &from, &NavBounds::default(), &props);
    assert_eq!(next, None);
}

#[test]
fn test_next_focus_clamped_to_bounds() {
    let props = DayPickerProps {
        start_month: Some(d(2024, 6, 1)),
        end_month: Some(d(2024, 6, 1)),
        ..june(Mode::Single)
    };
    let nav = NavBounds::from_props(&props);
    let from = CalendarDay::new(d(2024, 6, 28), d(2024, 6, 1));
    let next = get_next_focus(MoveBy::Week, MoveDir::After, &from, &nav, &props);
    assert_eq!(next.map(|day| day.date), Some(d(2024, 6, 30)));

    let from = CalendarDay::new(d(2024, 6, 3), d(2024, 6, 1));
    let next = get_next_focus(MoveBy::Month, MoveDir::Before, &from, &nav, &props);
    assert_eq!(next.map(|day| day.date), Some(d(2024, 6, 1)));
}
