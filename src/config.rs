//! Picker configuration
//!
//! Loads a day picker description from YAML and turns it into
//! [`DayPickerProps`] plus an optional initial selection.
//!
//! ```yaml
//! version: 1
//! mode: range
//! min: 2
//! exclude_disabled: true
//! month: 2024-06-01
//! number_of_months: 2
//! week_starts_on: Mon
//! disabled:
//!   - day_of_week: [0, 6]
//!   - before: 2024-06-03
//! selected:
//!   from: 2024-06-10
//!   to: 2024-06-14
//! ```

use crate::calendar::CalendarOptions;
use crate::error::{Error, Result};
use crate::matcher::{DateRange, Matcher};
use crate::props::{DayPickerProps, Direction, Mode};
use crate::selection::SelectionValue;
use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Supported configuration schema version
pub const CONFIG_VERSION: u32 = 1;

/// A matcher as written in configuration; predicates cannot be expressed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MatcherConfig {
    Bool(bool),
    Date(NaiveDate),
    Dates(Vec<NaiveDate>),
    Range(DateRange),
    /// Weekday indices, Sunday = 0
    DayOfWeek(Vec<u32>),
    Before(NaiveDate),
    After(NaiveDate),
    Interval {
        before: NaiveDate,
        after: NaiveDate,
    },
}

impl From<&MatcherConfig> for Matcher {
    fn from(config: &MatcherConfig) -> Self {
        match config {
            MatcherConfig::Bool(b) => Matcher::Bool(*b),
            MatcherConfig::Date(d) => Matcher::Date(*d),
            MatcherConfig::Dates(ds) => Matcher::Dates(ds.clone()),
            MatcherConfig::Range(r) => Matcher::Range(*r),
            MatcherConfig::DayOfWeek(days) => Matcher::DayOfWeek(days.clone()),
            MatcherConfig::Before(d) => Matcher::Before(*d),
            MatcherConfig::After(d) => Matcher::After(*d),
            MatcherConfig::Interval { before, after } => Matcher::Interval {
                before: *before,
                after: *after,
            },
        }
    }
}

/// Initial selection as written in configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum SelectedConfig {
    Date(NaiveDate),
    Dates(Vec<NaiveDate>),
    Range(DateRange),
}

/// Day picker configuration file
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PickerConfig {
    /// Schema version for migrations
    #[serde(default = "default_version")]
    pub version: u32,

    /// Selection mode; omit for a read-only calendar
    #[serde(default)]
    pub mode: Option<Mode>,

    #[serde(default)]
    pub required: bool,

    /// Minimum dates (multiple) or range length in days (range)
    #[serde(default)]
    pub min: usize,

    /// Maximum dates (multiple) or range length in days (range)
    #[serde(default)]
    pub max: usize,

    #[serde(default)]
    pub exclude_disabled: bool,

    #[serde(default)]
    pub disabled: Vec<MatcherConfig>,

    #[serde(default)]
    pub hidden: Vec<MatcherConfig>,

    /// Custom named modifiers
    #[serde(default)]
    pub modifiers: BTreeMap<String, Vec<MatcherConfig>>,

    #[serde(default)]
    pub month: Option<NaiveDate>,

    #[serde(default)]
    pub default_month: Option<NaiveDate>,

    #[serde(default = "default_number_of_months")]
    pub number_of_months: u32,

    #[serde(default)]
    pub start_month: Option<NaiveDate>,

    #[serde(default)]
    pub end_month: Option<NaiveDate>,

    #[serde(default)]
    pub paged_navigation: bool,

    #[serde(default)]
    pub disable_navigation: bool,

    #[serde(default)]
    pub show_outside_days: Option<bool>,

    /// Week layout and grid options
    #[serde(flatten)]
    pub calendar: CalendarOptions,

    /// Fixed current date (defaults to the local date)
    #[serde(default)]
    pub today: Option<NaiveDate>,

    #[serde(default)]
    pub dir: Direction,

    /// Initial selection
    #[serde(default)]
    pub selected: Option<SelectedConfig>,
}

fn default_version() -> u32 {
    CONFIG_VERSION
}

fn default_number_of_months() -> u32 {
    1
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
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
            number_of_months: default_number_of_months(),
            start_month: None,
            end_month: None,
            paged_navigation: false,
            disable_navigation: false,
            show_outside_days: None,
            calendar: CalendarOptions::default(),
            today: None,
            dir: Direction::Ltr,
            selected: None,
        }
    }
}

impl PickerConfig {
    /// Parse and validate a YAML configuration
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: PickerConfig = serde_norway::from_str(yaml)
            .map_err(|e| Error::Config(format!("Failed to parse picker config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(Error::Io)?;
        Self::from_yaml(&content)
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_norway::to_string(self)?)
    }

    /// Reject settings the engine cannot honor
    pub fn validate(&self) -> Result<()> {
        if self.version != CONFIG_VERSION {
            return Err(Error::Config(format!(
                "Unsupported config version: {}",
                self.version
            )));
        }
        if !(1..=7).contains(&self.calendar.week.first_week_contains_date) {
            return Err(Error::Config(format!(
                "first_week_contains_date must be 1..=7, got {}",
                self.calendar.week.first_week_contains_date
            )));
        }
        if self.number_of_months == 0 {
            return Err(Error::Config("number_of_months must be at least 1".into()));
        }
        if self.min > 0 && self.max > 0 && self.min > self.max {
            return Err(Error::Config(format!(
                "min ({}) is greater than max ({})",
                self.min, self.max
            )));
        }
        if let (Some(start), Some(end)) = (self.start_month, self.end_month) {
            if start > end {
                return Err(Error::Config(format!(
                    "start_month {} is after end_month {}",
                    start, end
                )));
            }
        }
        let day_of_week_ok = |matchers: &[MatcherConfig]| {
            matchers.iter().all(|m| match m {
                MatcherConfig::DayOfWeek(days) => days.iter().all(|d| *d <= 6),
                _ => true,
            })
        };
        let all_ok = day_of_week_ok(&self.disabled)
            && day_of_week_ok(&self.hidden)
            && self.modifiers.values().all(|m| day_of_week_ok(m));
        if !all_ok {
            return Err(Error::Config(
                "day_of_week values must be 0 (Sunday) to 6 (Saturday)".into(),
            ));
        }
        if self.selected.is_some() && self.mode.is_none() {
            return Err(Error::Config("selected requires a mode".into()));
        }
        Ok(())
    }

    /// Engine props described by this configuration
    pub fn to_props(&self) -> DayPickerProps {
        let convert = |ms: &[MatcherConfig]| ms.iter().map(Matcher::from).collect::<Vec<_>>();
        DayPickerProps {
            mode: self.mode,
            required: self.required,
            min: self.min,
            max: self.max,
            exclude_disabled: self.exclude_disabled,
            disabled: convert(&self.disabled),
            hidden: convert(&self.hidden),
            modifiers: self
                .modifiers
                .iter()
                .map(|(name, ms)| (name.clone(), convert(ms)))
                .collect(),
            month: self.month,
            default_month: self.default_month,
            number_of_months: self.number_of_months,
            start_month: self.start_month,
            end_month: self.end_month,
            paged_navigation: self.paged_navigation,
            disable_navigation: self.disable_navigation,
            show_outside_days: self.show_outside_days,
            calendar: self.calendar,
            today: self.today,
            dir: self.dir,
        }
    }

    /// Initial selection, shaped for the configured mode
    pub fn initial_selection(&self) -> Result<Option<SelectionValue>> {
        let Some(mode) = self.mode else {
            return Ok(None);
        };
        let value = match (mode, &self.selected) {
            (mode, None) => SelectionValue::empty(mode),
            (Mode::Single, Some(SelectedConfig::Date(d))) => SelectionValue::Single(Some(*d)),
            (Mode::Multiple, Some(SelectedConfig::Date(d))) => {
                SelectionValue::Multiple(Some(vec![*d]))
            }
            (Mode::Multiple, Some(SelectedConfig::Dates(ds))) => {
                SelectionValue::Multiple(Some(ds.clone()))
            }
            (Mode::Range, Some(SelectedConfig::Range(r))) => SelectionValue::Range(Some(*r)),
            (mode, Some(other)) => {
                return Err(Error::Config(format!(
                    "selected value {:?} does not fit mode {}",
                    other, mode
                )))
            }
        };
        Ok(Some(value))
    }
}
