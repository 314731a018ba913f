//! Day modifiers
//!
//! Flags computed for every day of the grid. They are recomputed from the
//! props and the current selection/focus whenever asked; nothing is stored.

use crate::calendar::CalendarDay;
use crate::matcher::matches;
use crate::navigation::NavBounds;
use crate::props::DayPickerProps;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Flags of a single day
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    pub disabled: bool,
    pub hidden: bool,
    pub outside: bool,
    pub today: bool,
    pub selected: bool,
    pub focused: bool,
    pub range_start: bool,
    pub range_middle: bool,
    pub range_end: bool,
    /// Custom named modifiers
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub custom: BTreeMap<String, bool>,
}

impl Modifiers {
    /// Whether keyboard focus may land on the day
    pub fn is_focusable(&self) -> bool {
        !self.disabled && !self.hidden && !self.outside
    }

    /// Whether the day reacts to clicks
    pub fn is_interactive(&self) -> bool {
        !self.disabled && !self.hidden
    }

    pub fn custom(&self, name: &str) -> bool {
        self.custom.get(name).copied().unwrap_or(false)
    }
}

/// Computes the props-driven flags of grid days
#[derive(Debug, Clone, Copy)]
pub struct ModifierContext<'a> {
    props: &'a DayPickerProps,
    nav: NavBounds,
    today: NaiveDate,
}

impl<'a> ModifierContext<'a> {
    pub fn new(props: &'a DayPickerProps) -> Self {
        Self {
            props,
            nav: NavBounds::from_props(props),
            today: props.today(),
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Flags that depend only on the props: disabled, hidden, outside,
    /// today and custom modifiers
    ///
    /// Days before the start month or after the end month are hidden, as are
    /// outside days unless outside days are shown.
    pub fn day_modifiers(&self, day: &CalendarDay) -> Modifiers {
        let date = day.date;
        let outside = day.outside;
        let hidden = matches(date, &self.props.hidden)
            || !self.nav.contains(date)
            || (outside && !self.props.shows_outside_days());

        let custom = self
            .props
            .modifiers
            .iter()
            .map(|(name, matchers)| (name.clone(), matches(date, matchers)))
            .collect();

        Modifiers {
            disabled: matches(date, &self.props.disabled),
            hidden,
            outside,
            today: date == self.today,
            custom,
            ..Modifiers::default()
        }
    }
}
