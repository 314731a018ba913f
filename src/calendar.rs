//! Month / week / day grid
//!
//! Builds the display grid from a list of display months and the flat list
//! of dates they cover. Dates are bucketed into weeks by week number
//! (ISO or locale) and into months by each month's first and last
//! displayed week.

use crate::date::{
    add_days, add_months, difference_in_calendar_months, end_of_broadcast_week, end_of_month,
    is_same_month, start_of_broadcast_week, start_of_month, WeekOptions,
};
use chrono::{NaiveDate, Weekday};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Days in a fixed-weeks month grid (6 weeks)
pub const FIXED_WEEKS_DAYS: usize = 42;
/// Days in a fixed-weeks broadcast month grid (5 weeks)
pub const FIXED_WEEKS_BROADCAST_DAYS: usize = 35;

/// Grid layout options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CalendarOptions {
    /// Week layout and numbering
    #[serde(flatten)]
    pub week: WeekOptions,

    /// Always render six weeks per month (five for the broadcast calendar)
    #[serde(default)]
    pub fixed_weeks: bool,

    /// Render months last-to-first
    #[serde(default)]
    pub reverse_months: bool,
}

impl CalendarOptions {
    fn fixed_weeks_days(&self) -> usize {
        if self.week.broadcast_calendar {
            FIXED_WEEKS_BROADCAST_DAYS
        } else {
            FIXED_WEEKS_DAYS
        }
    }

    /// First date of the first week displayed for `month`
    pub fn first_date_of_first_week(&self, month: NaiveDate) -> NaiveDate {
        if self.week.broadcast_calendar {
            start_of_broadcast_week(month)
        } else {
            self.week.start_of_week(start_of_month(month))
        }
    }

    /// Last date of the last week displayed for `month`
    pub fn last_date_of_last_week(&self, month: NaiveDate) -> NaiveDate {
        if self.week.broadcast_calendar {
            end_of_broadcast_week(month)
        } else {
            self.week.end_of_week(end_of_month(month))
        }
    }
}

/// A day shown in the grid, tied to the month it is displayed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub display_month: NaiveDate,
    /// The day belongs to another month and only pads the grid
    pub outside: bool,
}

impl CalendarDay {
    pub fn new(date: NaiveDate, display_month: NaiveDate) -> Self {
        Self {
            date,
            display_month,
            outside: !is_same_month(date, display_month),
        }
    }

    /// Same date shown under the same month
    pub fn is_equal_to(&self, other: &CalendarDay) -> bool {
        self.date == other.date && is_same_month(self.display_month, other.display_month)
    }
}

/// A row of the grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarWeek {
    pub week_number: u32,
    pub days: Vec<CalendarDay>,
}

/// A displayed month with its weeks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarMonth {
    /// First day of the month
    pub date: NaiveDate,
    pub weeks: Vec<CalendarWeek>,
}

impl CalendarMonth {
    pub fn days(&self) -> impl Iterator<Item = &CalendarDay> {
        self.weeks.iter().flat_map(|w| w.days.iter())
    }
}

/// Consecutive display months starting at `first`, stopping after `end_month`
pub fn display_months(
    first: NaiveDate,
    end_month: Option<NaiveDate>,
    number_of_months: u32,
) -> Vec<NaiveDate> {
    let first = start_of_month(first);
    let mut months = Vec::new();
    for i in 0..number_of_months.max(1) {
        let month = add_months(first, i32::try_from(i).unwrap_or(i32::MAX));
        if let Some(end) = end_month {
            if difference_in_calendar_months(month, end) > 0 {
                break;
            }
        }
        months.push(month);
    }
    months
}

/// Every date shown by the display months, in order
///
/// Runs from the first displayed week of the first month to the last
/// displayed week of the last month, stopping after `max_date`. With
/// `fixed_weeks` the list is padded with following days up to 42 days per
/// month (35 for the broadcast calendar).
pub fn get_dates(
    display_months: &[NaiveDate],
    max_date: Option<NaiveDate>,
    options: &CalendarOptions,
) -> Vec<NaiveDate> {
    let (Some(first_month), Some(last_month)) = (display_months.first(), display_months.last())
    else {
        return Vec::new();
    };

    let start = options.first_date_of_first_week(*first_month);
    let end = options.last_date_of_last_week(*last_month);
    let n_of_months = difference_in_calendar_months(*last_month, *first_month) + 1;

    let mut dates = Vec::new();
    let mut next = Some(start);
    while let Some(date) = next.filter(|d| *d <= end) {
        if max_date.is_some_and(|max| date > max) {
            break;
        }
        dates.push(date);
        next = date.succ_opt();
    }

    let target = options.fixed_weeks_days() * usize::try_from(n_of_months.max(1)).unwrap_or(1);
    if options.fixed_weeks {
        // Padding stops at the last representable date
        while let Some(following) = dates.last().and_then(|last| last.succ_opt()) {
            if dates.len() >= target {
                break;
            }
            dates.push(following);
        }
    }

    dates
}

/// Bucket `dates` into the months and weeks of the grid
///
/// For each display month the dates between its first and last displayed
/// week are taken; with `fixed_weeks` the month is topped up with the dates
/// that follow its last week until it holds the fixed day count. Days are
/// grouped into weeks by week number in first-seen order. With
/// `reverse_months` the month order is reversed, the weeks inside a month
/// are not.
pub fn build_months(
    display_months: &[NaiveDate],
    dates: &[NaiveDate],
    options: &CalendarOptions,
) -> Vec<CalendarMonth> {
    let fixed_days = options.fixed_weeks_days();

    let mut months: Vec<CalendarMonth> = display_months
        .iter()
        .map(|&month| {
            let first = options.first_date_of_first_week(month);
            let last = options.last_date_of_last_week(month);

            let mut month_dates: Vec<NaiveDate> = dates
                .iter()
                .copied()
                .filter(|d| *d >= first && *d <= last)
                .collect();

            if options.fixed_weeks && month_dates.len() < fixed_days {
                let days_to_add = (fixed_days - month_dates.len()) as i64;
                let pad_end = add_days(last, days_to_add);
                month_dates.extend(dates.iter().copied().filter(|d| *d > last && *d <= pad_end));
            }

            let mut weeks: Vec<CalendarWeek> = Vec::new();
            for date in month_dates {
                let week_number = options.week.week_number(date);
                let day = CalendarDay::new(date, month);
                match weeks.iter_mut().find(|w| w.week_number == week_number) {
                    Some(week) => week.days.push(day),
                    None => weeks.push(CalendarWeek {
                        week_number,
                        days: vec![day],
                    }),
                }
            }

            CalendarMonth { date: month, weeks }
        })
        .collect();

    if options.reverse_months {
        months.reverse();
    }
    months
}

/// All weeks of the grid, month by month
pub fn get_weeks(months: &[CalendarMonth]) -> Vec<CalendarWeek> {
    months.iter().flat_map(|m| m.weeks.iter().cloned()).collect()
}

/// All days of the grid in display order
pub fn get_days(months: &[CalendarMonth]) -> Vec<CalendarDay> {
    months.iter().flat_map(|m| m.days().copied()).collect()
}

/// Weekday header order
pub fn weekdays(options: &WeekOptions) -> Vec<Weekday> {
    let mut day = options.first_weekday();
    let mut days = Vec::with_capacity(7);
    for _ in 0..7 {
        days.push(day);
        day = day.succ();
    }
    days
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn grid(month: NaiveDate, options: &CalendarOptions) -> Vec<CalendarMonth> {
        let months = display_months(month, None, 1);
        let dates = get_dates(&months, None, options);
        build_months(&months, &dates, options)
    }

    #[test]
    fn test_display_months_stop_at_end_month() {
        let months = display_months(d(2024, 11, 15), Some(d(2024, 12, 1)), 3);
        assert_eq!(months, vec![d(2024, 11, 1), d(2024, 12, 1)]);
    }

    #[test]
    fn test_get_dates_covers_whole_weeks() {
        let opts = CalendarOptions::default();
        let dates = get_dates(&[d(2024, 6, 1)], None, &opts);
        // June 2024: Sat 1st .. Sun 30th, Sunday-start weeks
        assert_eq!(dates.first(), Some(&d(2024, 5, 26)));
        assert_eq!(dates.last(), Some(&d(2024, 7, 6)));
        assert_eq!(dates.len(), 42);
    }

    #[test]
    fn test_get_dates_last_representable_month() {
        let last_month = start_of_month(NaiveDate::MAX);
        for fixed_weeks in [false, true] {
            let opts = CalendarOptions {
                fixed_weeks,
                ..Default::default()
            };
            let dates = get_dates(&[last_month], None, &opts);
            assert_eq!(dates.last(), Some(&NaiveDate::MAX));
            assert!(dates.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn test_get_dates_max_date() {
        let opts = CalendarOptions::default();
        let dates = get_dates(&[d(2024, 6, 1)], Some(d(2024, 6, 10)), &opts);
        assert_eq!(dates.last(), Some(&d(2024, 6, 10)));
    }

    #[test]
    fn test_get_dates_fixed_weeks() {
        let opts = CalendarOptions {
            fixed_weeks: true,
            ..Default::default()
        };
        // February 2015 fits exactly four weeks
        let dates = get_dates(&[d(2015, 2, 1)], None, &opts);
        assert_eq!(dates.len(), 42);
        assert_eq!(dates.last(), Some(&d(2015, 3, 14)));
    }

    #[test]
    fn test_build_months_weeks() {
        let months = grid(d(2015, 2, 1), &CalendarOptions::default());
        assert_eq!(months.len(), 1);
        assert_eq!(months[0].weeks.len(), 4);
        assert!(months[0].weeks.iter().all(|w| w.days.len() == 7));
    }

    #[test]
    fn test_build_months_fixed_weeks() {
        let opts = CalendarOptions {
            fixed_weeks: true,
            ..Default::default()
        };
        let months = grid(d(2015, 2, 1), &opts);
        assert_eq!(months[0].weeks.len(), 6);
        let last_week = months[0].weeks.last().unwrap();
        assert!(last_week.days.iter().all(|day| day.outside));
    }

    #[test]
    fn test_outside_days() {
        let months = grid(d(2024, 6, 1), &CalendarOptions::default());
        let first = months[0].weeks[0].days[0];
        assert_eq!(first.date, d(2024, 5, 26));
        assert!(first.outside);
        assert!(!months[0].weeks[0].days[6].outside);
    }

    #[test]
    fn test_iso_weeks_start_monday() {
        let opts = CalendarOptions {
            week: WeekOptions::iso(),
            ..Default::default()
        };
        let months = grid(d(2024, 6, 1), &opts);
        assert_eq!(months[0].weeks[0].days[0].date, d(2024, 5, 27));
        assert_eq!(months[0].weeks[0].week_number, 22);
    }

    #[test]
    fn test_broadcast_month() {
        let opts = CalendarOptions {
            week: WeekOptions::broadcast(),
            ..Default::default()
        };
        let months = grid(d(2023, 2, 1), &opts);
        assert_eq!(months[0].weeks.len(), 4);
        assert_eq!(months[0].weeks[0].days[0].date, d(2023, 1, 30));
    }

    #[test]
    fn test_reverse_months() {
        let opts = CalendarOptions {
            reverse_months: true,
            ..Default::default()
        };
        let shown = display_months(d(2024, 1, 1), None, 2);
        let dates = get_dates(&shown, None, &opts);
        let months = build_months(&shown, &dates, &opts);
        assert_eq!(months[0].date, d(2024, 2, 1));
        assert_eq!(months[1].date, d(2024, 1, 1));
        // weeks keep their order
        assert!(months[0].weeks[0].days[0].date < months[0].weeks[1].days[0].date);
    }

    #[test]
    fn test_shared_week_appears_in_both_months() {
        let shown = display_months(d(2024, 5, 1), None, 2);
        let opts = CalendarOptions::default();
        let dates = get_dates(&shown, None, &opts);
        let months = build_months(&shown, &dates, &opts);
        let may_last = months[0].weeks.last().unwrap().days[0];
        let june_first = months[1].weeks[0].days[0];
        assert_eq!(may_last.date, june_first.date);
        assert!(!may_last.is_equal_to(&june_first));
    }

    #[test]
    fn test_weeks_and_days_flatten_months() {
        let shown = display_months(d(2024, 5, 1), None, 2);
        let opts = CalendarOptions::default();
        let dates = get_dates(&shown, None, &opts);
        let months = build_months(&shown, &dates, &opts);

        let weeks = get_weeks(&months);
        assert_eq!(weeks.len(), 5 + 6);
        assert_eq!(weeks[5].days[0].display_month, d(2024, 6, 1));
        assert_eq!(get_days(&months).len(), weeks.len() * 7);
    }

    #[test]
    fn test_weekdays() {
        assert_eq!(weekdays(&WeekOptions::default())[0], Weekday::Sun);
        assert_eq!(weekdays(&WeekOptions::iso())[0], Weekday::Mon);
        assert_eq!(weekdays(&WeekOptions::iso())[6], Weekday::Sun);
    }
}
