//! Day picker state machine
//!
//! [`DayPicker`] ties the pieces together: it builds the grid for the
//! displayed months, answers modifier queries, routes clicks to the
//! selection and key presses to the focus state.

use crate::calendar::{
    build_months, display_months, get_dates, get_days, get_weeks, CalendarDay, CalendarMonth,
    CalendarWeek,
};
use crate::date::{add_months, difference_in_calendar_months, start_of_month};
use crate::error::Result;
use crate::focus::{calculate_focus_target, FocusState};
use crate::keyboard::{key_action, KeyAction, KeyPress};
use crate::modifiers::{ModifierContext, Modifiers};
use crate::navigation::{self, initial_month, NavBounds};
use crate::props::DayPickerProps;
use crate::selection::{LocalState, Selection, SelectionSink, SelectionValue};
use chrono::NaiveDate;
use tracing::{debug, trace};

/// A day picker: props, grid, selection and focus
pub struct DayPicker<S = LocalState> {
    props: DayPickerProps,
    nav: NavBounds,
    first_month: NaiveDate,
    months: Vec<CalendarMonth>,
    selection: Option<Selection<S>>,
    focus: FocusState,
}

impl DayPicker<LocalState> {
    /// Uncontrolled picker with an empty selection for `props.mode`
    pub fn new(props: DayPickerProps) -> Self {
        let sink = props.mode.map(LocalState::empty);
        Self::build(props, sink)
    }

    /// Uncontrolled picker starting from `selected`
    pub fn with_selected(props: DayPickerProps, selected: SelectionValue) -> Self {
        Self::build(props, Some(LocalState::new(selected)))
    }
}

impl<S: SelectionSink> DayPicker<S> {
    /// Picker whose selection is written to `sink`
    pub fn with_sink(props: DayPickerProps, sink: S) -> Self {
        Self::build(props, Some(sink))
    }

    fn build(props: DayPickerProps, sink: Option<S>) -> Self {
        let nav = NavBounds::from_props(&props);
        let first_month = initial_month(&props);
        let mut picker = Self {
            props,
            nav,
            first_month,
            months: Vec::new(),
            selection: sink.map(Selection::new),
            focus: FocusState::new(),
        };
        picker.rebuild();
        picker
    }

    fn rebuild(&mut self) {
        let shown = display_months(
            self.first_month,
            self.props.end_month,
            self.props.number_of_months,
        );
        let dates = get_dates(&shown, self.nav.end, &self.props.calendar);
        self.months = build_months(&shown, &dates, &self.props.calendar);
        trace!(first_month = %self.first_month, months = self.months.len(), "grid rebuilt");
    }

    pub fn props(&self) -> &DayPickerProps {
        &self.props
    }

    pub fn nav_bounds(&self) -> &NavBounds {
        &self.nav
    }

    /// First displayed month
    pub fn first_month(&self) -> NaiveDate {
        self.first_month
    }

    pub fn months(&self) -> &[CalendarMonth] {
        &self.months
    }

    /// All grid weeks, month by month
    pub fn weeks(&self) -> Vec<CalendarWeek> {
        get_weeks(&self.months)
    }

    /// All grid days in display order
    pub fn days(&self) -> Vec<CalendarDay> {
        get_days(&self.months)
    }

    pub fn selected(&self) -> Option<&SelectionValue> {
        self.selection.as_ref().map(|s| s.selected())
    }

    pub fn selection(&self) -> Option<&Selection<S>> {
        self.selection.as_ref()
    }

    pub fn selection_mut(&mut self) -> Option<&mut Selection<S>> {
        self.selection.as_mut()
    }

    pub fn is_selected(&self, date: NaiveDate) -> bool {
        self.selection.as_ref().is_some_and(|s| s.is_selected(date))
    }

    pub fn focused(&self) -> Option<&CalendarDay> {
        self.focus.focused()
    }

    /// Every flag of `day`
    pub fn modifiers(&self, day: &CalendarDay) -> Modifiers {
        let mut modifiers = ModifierContext::new(&self.props).day_modifiers(day);
        if let Some(selection) = &self.selection {
            selection.selected().apply_modifiers(day.date, &mut modifiers);
        }
        modifiers.focused = self.focus.is_focused(day);
        modifiers
    }

    /// Whether the day is shown, as a non-outside day, in the grid
    pub fn is_day_in_calendar(&self, day: &CalendarDay) -> bool {
        self.months
            .iter()
            .any(|m| m.days().any(|d| d.is_equal_to(day)))
    }

    /// Day that receives focus when the grid is entered
    pub fn focus_target(&self) -> Option<CalendarDay> {
        let days = self.days();
        calculate_focus_target(
            &days,
            |day| self.modifiers(day),
            |date| self.is_selected(date),
            self.focus.last_focused(),
        )
    }

    pub fn focus(&mut self, day: CalendarDay) {
        self.focus.focus(day);
    }

    pub fn blur(&mut self) {
        self.focus.blur();
    }

    /// Show `month` first, within the navigation bounds
    pub fn go_to_month(&mut self, month: NaiveDate) {
        if self.props.disable_navigation {
            return;
        }
        let mut month = start_of_month(month);
        if let Some(start) = self.props.start_month {
            if month < start_of_month(start) {
                month = start_of_month(start);
            }
        }
        if let Some(end) = self.props.end_month {
            if month > start_of_month(end) {
                month = start_of_month(end);
            }
        }
        self.first_month = month;
        self.rebuild();
    }

    /// Go to the next month; false when navigation is blocked
    pub fn next_month(&mut self) -> bool {
        match navigation::next_month(self.first_month, &self.props) {
            Some(month) => {
                self.go_to_month(month);
                true
            }
            None => false,
        }
    }

    /// Go to the previous month; false when navigation is blocked
    pub fn previous_month(&mut self) -> bool {
        match navigation::previous_month(self.first_month, &self.props) {
            Some(month) => {
                self.go_to_month(month);
                true
            }
            None => false,
        }
    }

    fn grid_day(&self, date: NaiveDate) -> CalendarDay {
        self.months
            .iter()
            .flat_map(|m| m.days())
            .find(|d| d.date == date && !d.outside)
            .copied()
            .unwrap_or_else(|| CalendarDay::new(date, date))
    }

    /// Click on `date`
    ///
    /// Disabled and hidden days, and pickers without a mode, ignore clicks
    /// and return `Ok(None)`.
    pub fn click(&mut self, date: NaiveDate) -> Result<Option<SelectionValue>> {
        let day = self.grid_day(date);
        let modifiers = self.modifiers(&day);
        if !modifiers.is_interactive() {
            debug!(%date, "click on disabled or hidden day ignored");
            return Ok(None);
        }
        self.focus.focus(day);
        let Some(selection) = self.selection.as_mut() else {
            return Ok(None);
        };
        selection.select(date, &modifiers, &self.props)
    }

    /// Handle a key press
    ///
    /// Without a focused day the focus target is focused first. Moves that
    /// leave the displayed months navigate to the new month. Returns the
    /// focused day afterwards.
    pub fn key(&mut self, press: KeyPress) -> Result<Option<CalendarDay>> {
        let Some(current) = self.focus.focused().copied() else {
            let target = self.focus_target();
            if let Some(day) = target {
                self.focus.focus(day);
            }
            return Ok(target);
        };

        match key_action(press, self.props.dir) {
            KeyAction::Select => {
                self.click(current.date)?;
            }
            KeyAction::Move(move_by, move_dir) => {
                let nav = self.nav;
                if let Some(next) = self.focus.move_focus(move_by, move_dir, &nav, &self.props) {
                    if !self.is_day_in_calendar(&next) {
                        self.go_to_day(next.date);
                    }
                }
            }
        }
        Ok(self.focus.focused().copied())
    }

    fn go_to_day(&mut self, date: NaiveDate) {
        let months_shown = i64::from(self.props.number_of_months.max(1));
        let offset = difference_in_calendar_months(date, self.first_month);
        // Moving forward keeps the day in the last displayed month
        let target = if offset >= months_shown {
            add_months(
                start_of_month(date),
                -i32::try_from(months_shown - 1).unwrap_or(0),
            )
        } else {
            date
        };
        self.go_to_month(target);
    }
}
