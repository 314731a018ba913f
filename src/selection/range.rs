//! Range selection

use crate::date::difference_in_calendar_days;
use crate::error::{Error, Result};
use crate::matcher::{range_contains_modifiers, DateRange, Matcher};
use chrono::NaiveDate;
use tracing::debug;

/// Add `date` to `range`
///
/// `min` and `max` bound the range length in calendar days (0 means no
/// bound). A complete range that violates them collapses to
/// `{from: date, to: None}`. Returns `Ok(None)` when the click clears the
/// range.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use daypicker::matcher::DateRange;
/// use daypicker::selection::add_to_range;
///
/// let a = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
/// let b = NaiveDate::from_ymd_opt(2024, 6, 9).unwrap();
/// let first = add_to_range(a, None, 0, 0, false).unwrap();
/// assert_eq!(first, Some(DateRange::between(a, a)));
/// let second = add_to_range(b, first.as_ref(), 0, 0, false).unwrap();
/// assert_eq!(second, Some(DateRange::between(a, b)));
/// ```
pub fn add_to_range(
    date: NaiveDate,
    range: Option<&DateRange>,
    min: usize,
    max: usize,
    required: bool,
) -> Result<Option<DateRange>> {
    let (from, to) = range.map(|r| (r.from, r.to)).unwrap_or((None, None));
    // A second click is needed when the range has a minimum length
    let open_end = |d: NaiveDate| if min > 0 { None } else { Some(d) };

    let next = match (from, to) {
        (Some(from), None) => {
            if from == date {
                if required {
                    Some(DateRange::starting(from))
                } else {
                    None
                }
            } else if date < from {
                Some(DateRange::between(date, from))
            } else {
                Some(DateRange::between(from, date))
            }
        }
        (Some(from), Some(to)) => {
            if from == date && to == date {
                if required {
                    Some(DateRange::between(from, to))
                } else {
                    None
                }
            } else if from == date || to == date {
                Some(DateRange::new(Some(date), open_end(date)))
            } else if date < from {
                Some(DateRange::between(date, to))
            } else if date > from {
                Some(DateRange::between(from, date))
            } else {
                return Err(Error::InvalidRange {
                    date,
                    from: Some(from),
                    to: Some(to),
                });
            }
        }
        // An empty range, or one holding only `to`, starts over
        (None, _) => Some(DateRange::new(Some(date), open_end(date))),
    };

    Ok(next.map(|range| enforce_length(range, date, min, max)))
}

fn enforce_length(range: DateRange, date: NaiveDate, min: usize, max: usize) -> DateRange {
    let Some((from, to)) = range.bounds() else {
        return range;
    };
    let diff = difference_in_calendar_days(to, from);
    let too_long = max > 0 && diff > i64::try_from(max).unwrap_or(i64::MAX);
    let too_short = min > 1 && diff < i64::try_from(min).unwrap_or(i64::MAX);
    if too_long || too_short {
        debug!(%from, %to, diff, min, max, "range length out of bounds, restarting");
        DateRange::starting(date)
    } else {
        range
    }
}

/// Next range for a click on `trigger`
///
/// Same as [`add_to_range`]; with `exclude_disabled`, a complete range that
/// would contain a disabled day restarts at `trigger`.
pub fn select_range(
    selected: Option<&DateRange>,
    trigger: NaiveDate,
    min: usize,
    max: usize,
    required: bool,
    exclude_disabled: Option<&[Matcher]>,
) -> Result<Option<DateRange>> {
    let next = add_to_range(trigger, selected, min, max, required)?;
    match (next, exclude_disabled) {
        (Some(range), Some(disabled))
            if range.is_complete() && range_contains_modifiers(&range, disabled) =>
        {
            debug!(?range, "range contains disabled days, restarting");
            Ok(Some(DateRange::starting(trigger)))
        }
        (next, _) => Ok(next),
    }
}
