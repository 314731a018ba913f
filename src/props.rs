//! Day picker properties
//!
//! The declarative input of the engine: selection mode and constraints,
//! matchers, the visible month window and week layout.

use crate::calendar::CalendarOptions;
use crate::matcher::{matches, Matcher};
use chrono::{Local, NaiveDate};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Selection mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Single,
    Multiple,
    Range,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Single => write!(f, "single"),
            Mode::Multiple => write!(f, "multiple"),
            Mode::Range => write!(f, "range"),
        }
    }
}

/// Text direction, flips horizontal arrow keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

/// Everything the engine needs to know about a picker
#[derive(Debug, Clone)]
pub struct DayPickerProps {
    /// Selection mode; `None` disables selection
    pub mode: Option<Mode>,
    /// The selection cannot be emptied by clicking
    pub required: bool,
    /// Minimum selected days (multiple) or range length in days (range); 0 = none
    pub min: usize,
    /// Maximum selected days (multiple) or range length in days (range); 0 = none
    pub max: usize,
    /// Range mode: reset ranges that would contain disabled days
    pub exclude_disabled: bool,

    pub disabled: Vec<Matcher>,
    pub hidden: Vec<Matcher>,
    /// Custom named modifiers
    pub modifiers: BTreeMap<String, Vec<Matcher>>,

    /// Controlled displayed month
    pub month: Option<NaiveDate>,
    /// Month shown initially when `month` is not set
    pub default_month: Option<NaiveDate>,
    pub number_of_months: u32,
    /// Earliest navigable month
    pub start_month: Option<NaiveDate>,
    /// Latest navigable month
    pub end_month: Option<NaiveDate>,
    /// Navigate by `number_of_months` instead of one month
    pub paged_navigation: bool,
    pub disable_navigation: bool,

    /// Show days of adjacent months. Defaults to `true` for the broadcast
    /// calendar and `false` otherwise.
    pub show_outside_days: Option<bool>,
    pub calendar: CalendarOptions,

    /// Overrides the current date
    pub today: Option<NaiveDate>,
    pub dir: Direction,
}

impl Default for DayPickerProps {
    fn default() -> Self {
        Self {
            mode: None,
            required: false,
            min: 0,
            max: 0,
            exclude_disabled: false,
            disabled: Vec::new(),
            hidden: Vec::new(),
            modifiers: BTreeMap::new(),
            month: None,
            default_month: None,
            number_of_months: 1,
            start_month: None,
            end_month: None,
            paged_navigation: false,
            disable_navigation: false,
            show_outside_days: None,
            calendar: CalendarOptions::default(),
            today: None,
            dir: Direction::Ltr,
        }
    }
}

impl DayPickerProps {
    pub fn with_mode(mode: Mode) -> Self {
        Self {
            mode: Some(mode),
            ..Self::default()
        }
    }

    /// The configured or local current date
    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    pub fn is_disabled(&self, date: NaiveDate) -> bool {
        matches(date, &self.disabled)
    }

    pub fn is_hidden(&self, date: NaiveDate) -> bool {
        matches(date, &self.hidden)
    }

    pub fn shows_outside_days(&self) -> bool {
        self.show_outside_days
            .unwrap_or(self.calendar.week.broadcast_calendar)
    }
}
