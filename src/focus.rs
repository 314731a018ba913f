//! Keyboard focus
//!
//! Picks the day that receives focus when the grid is entered and resolves
//! where focus goes on a keyboard move, skipping disabled and hidden days.

use crate::calendar::CalendarDay;
use crate::date::{
    add_days, add_months, add_weeks, add_years, end_of_broadcast_week, start_of_broadcast_week,
    WeekOptions,
};
use crate::matcher::matches;
use crate::modifiers::Modifiers;
use crate::navigation::NavBounds;
use crate::props::DayPickerProps;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Candidates tried before giving up on a move
pub const MAX_FOCUS_ATTEMPTS: usize = 365;

/// Unit of a focus move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveBy {
    Day,
    Week,
    StartOfWeek,
    EndOfWeek,
    Month,
    Year,
}

/// Direction of a focus move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveDir {
    Before,
    After,
}

impl MoveDir {
    fn sign(self) -> i32 {
        match self {
            MoveDir::Before => -1,
            MoveDir::After => 1,
        }
    }
}

/// Focus priority, lowest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum FocusPriority {
    Today,
    Selected,
    LastFocused,
    FocusedModifier,
}

/// Day that receives focus when the grid is entered
///
/// Only days that are not disabled, hidden or outside qualify. Among them
/// the first day flagged `focused` wins, then the last focused day, then the
/// first selected day, then today. With none of those, the first qualifying
/// day is used.
pub fn calculate_focus_target<M, S>(
    days: &[CalendarDay],
    get_modifiers: M,
    is_selected: S,
    last_focused: Option<&CalendarDay>,
) -> Option<CalendarDay>
where
    M: Fn(&CalendarDay) -> Modifiers,
    S: Fn(NaiveDate) -> bool,
{
    let mut target: Option<(FocusPriority, CalendarDay)> = None;
    let mut first_focusable: Option<CalendarDay> = None;

    for day in days {
        let modifiers = get_modifiers(day);
        if !modifiers.is_focusable() {
            continue;
        }
        first_focusable.get_or_insert(*day);

        let priority = if modifiers.focused {
            Some(FocusPriority::FocusedModifier)
        } else if last_focused.is_some_and(|last| last.is_equal_to(day)) {
            Some(FocusPriority::LastFocused)
        } else if is_selected(day.date) {
            Some(FocusPriority::Selected)
        } else if modifiers.today {
            Some(FocusPriority::Today)
        } else {
            None
        };

        if let Some(priority) = priority {
            if target.is_none_or(|(found, _)| found < priority) {
                target = Some((priority, *day));
            }
        }
    }

    target.map(|(_, day)| day).or(first_focusable)
}

/// Raw target of a move, clamped to the navigation bounds
pub fn get_focusable_date(
    move_by: MoveBy,
    move_dir: MoveDir,
    ref_date: NaiveDate,
    nav: &NavBounds,
    options: &WeekOptions,
) -> NaiveDate {
    let sign = move_dir.sign();
    let moved = match move_by {
        MoveBy::Day => add_days(ref_date, i64::from(sign)),
        MoveBy::Week => add_weeks(ref_date, i64::from(sign)),
        MoveBy::Month => add_months(ref_date, sign),
        MoveBy::Year => add_years(ref_date, sign),
        MoveBy::StartOfWeek if options.broadcast_calendar => start_of_broadcast_week(ref_date),
        MoveBy::StartOfWeek => options.start_of_week(ref_date),
        MoveBy::EndOfWeek if options.broadcast_calendar => end_of_broadcast_week(ref_date),
        MoveBy::EndOfWeek => options.end_of_week(ref_date),
    };

    match move_dir {
        MoveDir::Before => nav.start.map_or(moved, |start| moved.max(start)),
        MoveDir::After => nav.end.map_or(moved, |end| moved.min(end)),
    }
}

/// Next focusable day for a move from `ref_day`
///
/// Disabled or hidden candidates are stepped over by repeating the move from
/// them. Gives up with `None` after [`MAX_FOCUS_ATTEMPTS`] candidates, e.g.
/// when every reachable day is disabled or the bound itself is disabled.
pub fn get_next_focus(
    move_by: MoveBy,
    move_dir: MoveDir,
    ref_day: &CalendarDay,
    nav: &NavBounds,
    props: &DayPickerProps,
) -> Option<CalendarDay> {
    let mut reference = ref_day.date;
    for attempt in 0..MAX_FOCUS_ATTEMPTS {
        let candidate = get_focusable_date(move_by, move_dir, reference, nav, &props.calendar.week);
        let blocked = matches(candidate, &props.disabled) || matches(candidate, &props.hidden);
        if !blocked {
            trace!(%candidate, attempt, "focus target found");
            return Some(CalendarDay::new(candidate, candidate));
        }
        reference = candidate;
    }
    debug!(
        from = %ref_day.date,
        ?move_by,
        ?move_dir,
        "no focusable day within {} attempts",
        MAX_FOCUS_ATTEMPTS
    );
    None
}

/// Focused day plus the day focused before the last blur
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FocusState {
    focused: Option<CalendarDay>,
    last_focused: Option<CalendarDay>,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focused(&self) -> Option<&CalendarDay> {
        self.focused.as_ref()
    }

    pub fn last_focused(&self) -> Option<&CalendarDay> {
        self.last_focused.as_ref()
    }

    pub fn is_focused(&self, day: &CalendarDay) -> bool {
        self.focused.is_some_and(|f| f.is_equal_to(day))
    }

    pub fn focus(&mut self, day: CalendarDay) {
        self.focused = Some(day);
    }

    /// Drop focus, remembering the day for re-entry
    pub fn blur(&mut self) {
        if let Some(day) = self.focused.take() {
            self.last_focused = Some(day);
        }
    }

    /// Move focus from the focused day; keeps focus unchanged when no day
    /// can be reached
    pub fn move_focus(
        &mut self,
        move_by: MoveBy,
        move_dir: MoveDir,
        nav: &NavBounds,
        props: &DayPickerProps,
    ) -> Option<CalendarDay> {
        let current = self.focused?;
        let next = get_next_focus(move_by, move_dir, &current, nav, props)?;
        self.focused = Some(next);
        Some(next)
    }
}
