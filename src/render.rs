//! Plain-text calendar rendering
//!
//! Each day is a four-character cell. Markers, strongest first:
//!
//! | Cell   | Meaning  |
//! |--------|----------|
//! | blank  | hidden   |
//! | `<12>` | focused  |
//! | `[12]` | selected |
//! | `-12-` | disabled |
//! | `(12)` | today    |
//! | `.12.` | outside  |
//! | ` 12 ` | plain    |

use crate::calendar::{weekdays, CalendarMonth};
use crate::modifiers::Modifiers;
use crate::picker::DayPicker;
use crate::selection::SelectionSink;
use chrono::Datelike;

const CELL_WIDTH: usize = 4;

/// Render one grid cell
pub fn render_cell(day_of_month: u32, modifiers: &Modifiers) -> String {
    if modifiers.hidden {
        return " ".repeat(CELL_WIDTH);
    }
    let (open, close) = if modifiers.focused {
        ('<', '>')
    } else if modifiers.selected {
        ('[', ']')
    } else if modifiers.disabled {
        ('-', '-')
    } else if modifiers.today {
        ('(', ')')
    } else if modifiers.outside {
        ('.', '.')
    } else {
        (' ', ' ')
    };
    format!("{}{:>2}{}", open, day_of_month, close)
}

/// Render one month with its title and weekday header
pub fn render_month<S: SelectionSink>(picker: &DayPicker<S>, month: &CalendarMonth) -> String {
    let width = CELL_WIDTH * 7;
    let mut out = String::new();

    let title = month.date.format("%B %Y").to_string();
    out.push_str(format!("{:^width$}", title, width = width).trim_end());
    out.push('\n');

    let header: String = weekdays(&picker.props().calendar.week)
        .iter()
        .map(|wd| format!(" {:<2} ", &wd.to_string()[..2]))
        .collect();
    out.push_str(header.trim_end());
    out.push('\n');

    for week in &month.weeks {
        let row: String = week
            .days
            .iter()
            .map(|day| render_cell(day.date.day(), &picker.modifiers(day)))
            .collect();
        out.push_str(row.trim_end());
        out.push('\n');
    }
    out
}

/// Render every displayed month, separated by blank lines
pub fn render_calendar<S: SelectionSink>(picker: &DayPicker<S>) -> String {
    picker
        .months()
        .iter()
        .map(|month| render_month(picker, month))
        .collect::<Vec<_>>()
        .join("\n")
}
