//! Multiple-date selection

use chrono::NaiveDate;
use tracing::trace;

/// Next value for a click on `trigger`, or `None` when the click changes
/// nothing
///
/// A selected date is removed unless the selection holds exactly `min`
/// dates, or it is `required` and only one date is left. An unselected date
/// is appended; when the selection already holds `max` dates it restarts
/// with just `trigger`. A `min` or `max` of 0 means no bound.
pub fn select_multiple(
    selected: Option<&[NaiveDate]>,
    trigger: NaiveDate,
    min: usize,
    max: usize,
    required: bool,
) -> Option<Vec<NaiveDate>> {
    let current = selected.unwrap_or_default();
    let count = current.len();

    if current.contains(&trigger) {
        if selected.is_some() && count == min {
            trace!(%trigger, min, "keeping minimum selection");
            return None;
        }
        if required && count == 1 {
            trace!(%trigger, "keeping required selection");
            return None;
        }
        return Some(current.iter().copied().filter(|d| *d != trigger).collect());
    }

    if selected.is_some() && count == max {
        return Some(vec![trigger]);
    }
    let mut next = current.to_vec();
    next.push(trigger);
    Some(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_add_and_remove() {
        let next = select_multiple(None, d(2024, 6, 1), 0, 0, false).unwrap();
        assert_eq!(next, vec![d(2024, 6, 1)]);
        let next = select_multiple(Some(&next), d(2024, 6, 3), 0, 0, false).unwrap();
        assert_eq!(next, vec![d(2024, 6, 1), d(2024, 6, 3)]);
        let next = select_multiple(Some(&next), d(2024, 6, 1), 0, 0, false).unwrap();
        assert_eq!(next, vec![d(2024, 6, 3)]);
        let next = select_multiple(Some(&next), d(2024, 6, 3), 0, 0, false).unwrap();
        assert!(next.is_empty());
    }

    #[test]
    fn test_min_blocks_removal() {
        let current = vec![d(2024, 6, 1), d(2024, 6, 2)];
        assert_eq!(select_multiple(Some(&current), d(2024, 6, 1), 2, 0, false), None);
    }

    #[test]
    fn test_required_keeps_last() {
        let current = vec![d(2024, 6, 1)];
        assert_eq!(select_multiple(Some(&current), d(2024, 6, 1), 0, 0, true), None);
        assert_eq!(
            select_multiple(Some(&current), d(2024, 6, 1), 0, 0, false),
            Some(vec![])
        );
    }

    #[test]
    fn test_max_restarts() {
        let current = vec![d(2024, 6, 1), d(2024, 6, 2)];
        assert_eq!(
            select_multiple(Some(&current), d(2024, 6, 5), 0, 2, false),
            Some(vec![d(2024, 6, 5)])
        );
    }
}
