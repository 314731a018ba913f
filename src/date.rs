//! Calendar-day arithmetic
//!
//! Every function here works on [`NaiveDate`] values, so comparisons are
//! day-based and never affected by time zones. Arithmetic saturates at the
//! chrono date limits instead of panicking.

use chrono::{Datelike, Days, Months, NaiveDate, TimeDelta, Weekday};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Number of weeks in a broadcast month with five weeks
const FIVE_WEEKS: i64 = 5;
/// Number of weeks in a broadcast month with four weeks
const FOUR_WEEKS: i64 = 4;

/// Add (or subtract, when negative) whole days
pub fn add_days(date: NaiveDate, amount: i64) -> NaiveDate {
    TimeDelta::try_days(amount)
        .and_then(|delta| date.checked_add_signed(delta))
        .unwrap_or(if amount < 0 {
            NaiveDate::MIN
        } else {
            NaiveDate::MAX
        })
}

/// Add whole weeks
pub fn add_weeks(date: NaiveDate, amount: i64) -> NaiveDate {
    add_days(date, amount.saturating_mul(7))
}

/// Add whole months, clamping the day to the length of the target month
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use daypicker::date::add_months;
/// let jan31 = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
/// assert_eq!(add_months(jan31, 1), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
/// ```
pub fn add_months(date: NaiveDate, amount: i32) -> NaiveDate {
    let months = Months::new(amount.unsigned_abs());
    let moved = if amount < 0 {
        date.checked_sub_months(months)
    } else {
        date.checked_add_months(months)
    };
    moved.unwrap_or(if amount < 0 {
        NaiveDate::MIN
    } else {
        NaiveDate::MAX
    })
}

/// Add whole years
pub fn add_years(date: NaiveDate, amount: i32) -> NaiveDate {
    add_months(date, amount.saturating_mul(12))
}

/// First day of the month containing `date`
pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.day0()))
}

/// Last day of the month containing `date`
pub fn end_of_month(date: NaiveDate) -> NaiveDate {
    let next = add_months(start_of_month(date), 1);
    if next == NaiveDate::MAX {
        return next;
    }
    add_days(next, -1)
}

/// Number of days in the month containing `date`
pub fn days_in_month(date: NaiveDate) -> u32 {
    end_of_month(date).day()
}

/// Same calendar day, used by the date matchers
pub fn is_same_day(a: NaiveDate, b: NaiveDate) -> bool {
    a == b
}

pub fn is_same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// Calendar days from `right` to `left` (`left - right`)
pub fn difference_in_calendar_days(left: NaiveDate, right: NaiveDate) -> i64 {
    left.signed_duration_since(right).num_days()
}

/// Calendar months from `right` to `left`, ignoring the day of month
pub fn difference_in_calendar_months(left: NaiveDate, right: NaiveDate) -> i64 {
    let years = i64::from(left.year()) - i64::from(right.year());
    years * 12 + i64::from(left.month()) - i64::from(right.month())
}

/// Weekday index with Sunday = 0, as used by day-of-week matchers
pub fn day_of_week(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_sunday()
}

/// Start of the locale week containing `date`
pub fn start_of_week(date: NaiveDate, week_starts_on: Weekday) -> NaiveDate {
    let current = date.weekday().num_days_from_sunday();
    let start = week_starts_on.num_days_from_sunday();
    let diff = (current + 7 - start) % 7;
    add_days(date, -i64::from(diff))
}

/// End of the locale week containing `date`
pub fn end_of_week(date: NaiveDate, week_starts_on: Weekday) -> NaiveDate {
    add_days(start_of_week(date, week_starts_on), 6)
}

/// Monday of the ISO week containing `date`
pub fn start_of_iso_week(date: NaiveDate) -> NaiveDate {
    start_of_week(date, Weekday::Mon)
}

/// Sunday of the ISO week containing `date`
pub fn end_of_iso_week(date: NaiveDate) -> NaiveDate {
    end_of_week(date, Weekday::Mon)
}

/// ISO-8601 week number (week 1 holds the year's first Thursday)
pub fn iso_week_number(date: NaiveDate) -> u32 {
    date.iso_week().week()
}

/// Number of weeks in the broadcast month containing `month`
///
/// A broadcast month starts on the Monday on or before the 1st. It has
/// five weeks when the 35-day window from that Monday still ends inside
/// the month, otherwise four.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use daypicker::date::broadcast_weeks_in_month;
/// assert_eq!(broadcast_weeks_in_month(NaiveDate::from_ymd_opt(2023, 1, 1).unwrap()), 5);
/// assert_eq!(broadcast_weeks_in_month(NaiveDate::from_ymd_opt(2023, 2, 1).unwrap()), 4);
/// ```
pub fn broadcast_weeks_in_month(month: NaiveDate) -> i64 {
    let first = start_of_month(month);
    let first_day = match day_of_week(first) {
        0 => 7,
        d => i64::from(d),
    };
    let broadcast_start = add_days(first, -first_day + 1);
    let last_of_five_weeks = add_days(broadcast_start, FIVE_WEEKS * 7 - 1);
    if last_of_five_weeks.month() == first.month() {
        FIVE_WEEKS
    } else {
        FOUR_WEEKS
    }
}

/// Monday that starts the broadcast month containing `date`
pub fn start_of_broadcast_week(date: NaiveDate) -> NaiveDate {
    let first = start_of_month(date);
    match day_of_week(first) {
        1 => first,
        0 => add_days(first, -6),
        d => add_days(first, -(i64::from(d) - 1)),
    }
}

/// Sunday that ends the broadcast month containing `date`
pub fn end_of_broadcast_week(date: NaiveDate) -> NaiveDate {
    let start = start_of_broadcast_week(date);
    add_days(start, broadcast_weeks_in_month(date) * 7 - 1)
}

/// Week layout and numbering options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct WeekOptions {
    /// First day of the locale week
    #[serde(default = "default_week_starts_on")]
    #[schemars(with = "String")]
    pub week_starts_on: Weekday,

    /// Day of January that must fall in week 1 (1..=7)
    #[serde(default = "default_first_week_contains_date")]
    pub first_week_contains_date: u32,

    /// Use ISO weeks (Monday start, ISO numbering)
    #[serde(default)]
    pub iso_week: bool,

    /// Use the broadcast calendar (Monday start, 4 or 5 week months)
    #[serde(default)]
    pub broadcast_calendar: bool,
}

fn default_week_starts_on() -> Weekday {
    Weekday::Sun
}

fn default_first_week_contains_date() -> u32 {
    1
}

impl Default for WeekOptions {
    fn default() -> Self {
        Self {
            week_starts_on: default_week_starts_on(),
            first_week_contains_date: default_first_week_contains_date(),
            iso_week: false,
            broadcast_calendar: false,
        }
    }
}

impl WeekOptions {
    /// ISO week options
    pub fn iso() -> Self {
        Self {
            iso_week: true,
            ..Self::default()
        }
    }

    /// Broadcast calendar options
    pub fn broadcast() -> Self {
        Self {
            broadcast_calendar: true,
            ..Self::default()
        }
    }

    /// Effective first day of the week
    pub fn first_weekday(&self) -> Weekday {
        if self.iso_week || self.broadcast_calendar {
            Weekday::Mon
        } else {
            self.week_starts_on
        }
    }

    /// Start of the (ISO or locale) week containing `date`
    pub fn start_of_week(&self, date: NaiveDate) -> NaiveDate {
        start_of_week(date, self.first_weekday())
    }

    /// End of the (ISO or locale) week containing `date`
    pub fn end_of_week(&self, date: NaiveDate) -> NaiveDate {
        end_of_week(date, self.first_weekday())
    }

    /// Week number of `date`
    ///
    /// ISO numbering for ISO weeks and the broadcast calendar, locale
    /// numbering otherwise.
    pub fn week_number(&self, date: NaiveDate) -> u32 {
        if self.iso_week || self.broadcast_calendar {
            iso_week_number(date)
        } else {
            self.locale_week_number(date)
        }
    }

    fn week_year_start(&self, year: i32) -> Option<NaiveDate> {
        let anchor_day = self.first_week_contains_date.clamp(1, 7);
        NaiveDate::from_ymd_opt(year, 1, anchor_day).map(|d| start_of_week(d, self.week_starts_on))
    }

    /// Locale week number: week 1 is the week holding January
    /// `first_week_contains_date`
    fn locale_week_number(&self, date: NaiveDate) -> u32 {
        let year = date.year();
        let this_year = self.week_year_start(year);
        let next_year = self.week_year_start(year + 1);

        let year_start = match (this_year, next_year) {
            (_, Some(next)) if date >= next => next,
            (Some(this), _) if date >= this => this,
            _ => match self.week_year_start(year - 1) {
                Some(prev) => prev,
                None => return 1,
            },
        };

        let week_start = start_of_week(date, self.week_starts_on);
        let weeks = difference_in_calendar_days(week_start, year_start) / 7;
        u32::try_from(weeks + 1).unwrap_or(1)
    }
}

/// Parse an ISO `YYYY-MM-DD` date
pub fn parse_date(s: &str) -> crate::Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|e| crate::Error::InvalidDate(format!("{}: {}", s, e)))
}
