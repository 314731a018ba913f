//! Date matchers
//!
//! A [`Matcher`] is a declarative rule that classifies dates, used for the
//! `disabled`, `hidden` and custom modifiers. A list of matchers matches a
//! date when **any** of them does.
//!
//! ```rust
//! use chrono::NaiveDate;
//! use daypicker::matcher::{matches, Matcher};
//!
//! let weekends = Matcher::day_of_week([0, 6]);
//! let saturday = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
//! assert!(matches(saturday, &[weekends]));
//! ```

use crate::date::{add_days, day_of_week, difference_in_calendar_days, is_same_day};
use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Caller-supplied predicate matcher
pub type DatePredicate = Arc<dyn Fn(NaiveDate) -> bool + Send + Sync>;

/// A range of dates; either end may be missing while a range is being built
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DateRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self { from, to }
    }

    /// Complete range from `from` to `to`
    pub fn between(from: NaiveDate, to: NaiveDate) -> Self {
        Self {
            from: Some(from),
            to: Some(to),
        }
    }

    /// Range holding only its start
    pub fn starting(from: NaiveDate) -> Self {
        Self {
            from: Some(from),
            to: None,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.from.is_some() && self.to.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    /// Both ends in chronological order, when the range is complete
    pub fn bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        self.from
            .zip(self.to)
            .map(|(from, to)| if to < from { (to, from) } else { (from, to) })
    }
}

/// Declarative date rule
#[derive(Clone)]
pub enum Matcher {
    /// Matches every date (`true`) or none (`false`)
    Bool(bool),
    /// Matches the same calendar day
    Date(NaiveDate),
    /// Matches any of the listed days
    Dates(Vec<NaiveDate>),
    /// Matches days inside the range, ends included
    Range(DateRange),
    /// Matches weekdays in the set (Sunday = 0 .. Saturday = 6)
    DayOfWeek(Vec<u32>),
    /// Matches days strictly before the date
    Before(NaiveDate),
    /// Matches days strictly after the date
    After(NaiveDate),
    /// When `before` is later than `after`, matches the days strictly
    /// between them. Otherwise matches days strictly before `before` or
    /// strictly after `after`.
    Interval { before: NaiveDate, after: NaiveDate },
    /// Delegates to a caller-supplied function
    Predicate(DatePredicate),
}

impl fmt::Debug for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Matcher::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Matcher::Date(d) => f.debug_tuple("Date").field(d).finish(),
            Matcher::Dates(ds) => f.debug_tuple("Dates").field(ds).finish(),
            Matcher::Range(r) => f.debug_tuple("Range").field(r).finish(),
            Matcher::DayOfWeek(days) => f.debug_tuple("DayOfWeek").field(days).finish(),
            Matcher::Before(d) => f.debug_tuple("Before").field(d).finish(),
            Matcher::After(d) => f.debug_tuple("After").field(d).finish(),
            Matcher::Interval { before, after } => f
                .debug_struct("Interval")
                .field("before", before)
                .field("after", after)
                .finish(),
            Matcher::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

impl Matcher {
    /// Weekday matcher from Sunday-based indices
    pub fn day_of_week(days: impl IntoIterator<Item = u32>) -> Self {
        Matcher::DayOfWeek(days.into_iter().collect())
    }

    /// Predicate matcher
    pub fn predicate<F>(f: F) -> Self
    where
        F: Fn(NaiveDate) -> bool + Send + Sync + 'static,
    {
        Matcher::Predicate(Arc::new(f))
    }

    pub fn is_predicate(&self) -> bool {
        matches!(self, Matcher::Predicate(_))
    }

    /// Whether this matcher matches `date`
    pub fn matches(&self, date: NaiveDate) -> bool {
        match self {
            Matcher::Bool(b) => *b,
            Matcher::Date(d) => is_same_day(*d, date),
            Matcher::Dates(ds) => ds.iter().any(|d| is_same_day(*d, date)),
            Matcher::Range(range) => range_includes_date(range, date, false),
            Matcher::DayOfWeek(days) => days.contains(&day_of_week(date)),
            Matcher::Before(before) => difference_in_calendar_days(*before, date) > 0,
            Matcher::After(after) => difference_in_calendar_days(date, *after) > 0,
            Matcher::Interval { before, after } => {
                let is_day_before = difference_in_calendar_days(*before, date) > 0;
                let is_day_after = difference_in_calendar_days(*after, date) < 0;
                let is_closed_interval = before > after;
                if is_closed_interval {
                    is_day_after && is_day_before
                } else {
                    is_day_before || is_day_after
                }
            }
            Matcher::Predicate(f) => f(date),
        }
    }
}

impl From<bool> for Matcher {
    fn from(b: bool) -> Self {
        Matcher::Bool(b)
    }
}

impl From<NaiveDate> for Matcher {
    fn from(d: NaiveDate) -> Self {
        Matcher::Date(d)
    }
}

impl From<Vec<NaiveDate>> for Matcher {
    fn from(ds: Vec<NaiveDate>) -> Self {
        Matcher::Dates(ds)
    }
}

impl From<DateRange> for Matcher {
    fn from(r: DateRange) -> Self {
        Matcher::Range(r)
    }
}

/// Whether any of `matchers` matches `date`
pub fn matches(date: NaiveDate, matchers: &[Matcher]) -> bool {
    matchers.iter().any(|m| m.matches(date))
}

/// Whether `date` falls inside `range`
///
/// Inverted ranges are swapped first. With `exclude_ends` the boundary days
/// do not count. A range with a single end matches only that day (and
/// nothing when `exclude_ends` is set).
pub fn range_includes_date(range: &DateRange, date: NaiveDate, exclude_ends: bool) -> bool {
    let min_diff = if exclude_ends { 1 } else { 0 };
    match (range.from, range.to) {
        (Some(from), Some(to)) => {
            let (from, to) = if difference_in_calendar_days(to, from) < 0 {
                (to, from)
            } else {
                (from, to)
            };
            difference_in_calendar_days(date, from) >= min_diff
                && difference_in_calendar_days(to, date) >= min_diff
        }
        (None, Some(to)) if !exclude_ends => to == date,
        (Some(from), None) if !exclude_ends => from == date,
        _ => false,
    }
}

/// Whether two complete ranges share at least one day
pub fn range_overlaps(left: &DateRange, right: &DateRange) -> bool {
    let ends = |r: &DateRange| [r.from, r.to];
    ends(right)
        .into_iter()
        .flatten()
        .any(|d| range_includes_date(left, d, false))
        || ends(left)
            .into_iter()
            .flatten()
            .any(|d| range_includes_date(right, d, false))
}

/// Whether the range contains one of the weekdays (Sunday = 0)
pub fn range_contains_day_of_week(range: &DateRange, days: &[u32]) -> bool {
    let Some((from, to)) = range.bounds() else {
        return false;
    };
    let total_days = difference_in_calendar_days(to, from).clamp(0, 6);
    (0..=total_days).any(|i| days.contains(&day_of_week(add_days(from, i))))
}

/// Whether any day of a complete range matches any of `matchers`
///
/// Non-predicate matchers are checked structurally first; predicates are
/// only evaluated day by day when nothing else matched.
pub fn range_contains_modifiers(range: &DateRange, matchers: &[Matcher]) -> bool {
    let Some((from, to)) = range.bounds() else {
        return false;
    };

    let structural = matchers
        .iter()
        .filter(|m| !m.is_predicate())
        .any(|matcher| match matcher {
            Matcher::Bool(b) => *b,
            Matcher::Date(d) => range_includes_date(range, *d, false),
            Matcher::Dates(ds) => ds.iter().any(|d| range_includes_date(range, *d, false)),
            Matcher::Range(other) => other.is_complete() && range_overlaps(range, other),
            Matcher::DayOfWeek(days) => range_contains_day_of_week(range, days),
            Matcher::Interval { before, after } if before > after => {
                // Nothing lies strictly between adjacent days
                difference_in_calendar_days(*before, *after) > 1
                    && range_overlaps(
                        range,
                        &DateRange::between(add_days(*after, 1), add_days(*before, -1)),
                    )
            }
            Matcher::Interval { .. } | Matcher::Before(_) | Matcher::After(_) => {
                matcher.matches(from) || matcher.matches(to)
            }
            Matcher::Predicate(_) => false,
        });
    if structural {
        return true;
    }

    let predicates: Vec<&Matcher> = matchers.iter().filter(|m| m.is_predicate()).collect();
    if predicates.is_empty() {
        return false;
    }
    let total_days = difference_in_calendar_days(to, from);
    (0..=total_days).any(|i| {
        let date = add_days(from, i);
        predicates.iter().any(|m| m.matches(date))
    })
}
