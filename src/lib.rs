// Production-quality lints
#![warn(
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
// Deny truly dangerous patterns
#![deny(clippy::mem_forget)]
// Allow common patterns in library code
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! # daypicker
//!
//! Calendar engine for date pickers: date matchers, month grids, selection
//! modes and keyboard focus, with no UI toolkit attached.
//!
//! ## Core Concept
//!
//! A picker is described by declarative [`DayPickerProps`]. From them the
//! engine:
//!
//! - **Builds** the grid of displayed months, weeks and days
//! - **Classifies** every day with [`Modifiers`] (disabled, hidden, outside,
//!   today, selected, focused, range start/middle/end, custom)
//! - **Selects** dates in single, multiple or range mode
//! - **Moves focus** with the keyboard, stepping over disabled days
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use daypicker::{DayPicker, DayPickerProps, Matcher, Mode, SelectionValue};
//!
//! let june = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
//! let props = DayPickerProps {
//!     month: Some(june),
//!     disabled: vec![Matcher::day_of_week([0, 6])],
//!     ..DayPickerProps::with_mode(Mode::Range)
//! };
//! let mut picker = DayPicker::new(props);
//!
//! let mon = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
//! let fri = NaiveDate::from_ymd_opt(2024, 6, 7).unwrap();
//! picker.click(mon)?;
//! picker.click(fri)?;
//! assert!(picker.is_selected(NaiveDate::from_ymd_opt(2024, 6, 5).unwrap()));
//! # Ok::<(), daypicker::Error>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                                                             │
//! │  PROPS (or YAML config)                                     │
//! │       │                                                     │
//! │       ├──► display_months ──► get_dates ──► build_months    │
//! │       │                                                     │
//! │       ├──► ModifierContext ──► Modifiers per day            │
//! │       │                                                     │
//! │       ├──► next_selection ──► SelectionSink                 │
//! │       │         (LocalState | OnSelect)                     │
//! │       │                                                     │
//! │       └──► calculate_focus_target / get_next_focus          │
//! │                                                             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Controlled vs Uncontrolled
//!
//! Selection changes are computed by a pure function. A [`SelectionSink`]
//! decides where they go: [`LocalState`] keeps them, [`OnSelect`] only
//! forwards them to a callback and leaves ownership with the caller.

// Core modules
pub mod date;
pub mod error;
pub mod matcher;
pub mod props;

// Grid and state
pub mod calendar;
pub mod focus;
pub mod keyboard;
pub mod modifiers;
pub mod navigation;
pub mod picker;
pub mod selection;

// Configuration and output
pub mod config;
pub mod render;

// Re-exports
pub use calendar::{
    build_months, display_months, get_dates, get_days, get_weeks, weekdays, CalendarDay,
    CalendarMonth, CalendarOptions, CalendarWeek,
};
pub use config::{MatcherConfig, PickerConfig, SelectedConfig};
pub use date::{broadcast_weeks_in_month, WeekOptions};
pub use error::{Error, Result};
pub use focus::{
    calculate_focus_target, get_focusable_date, get_next_focus, FocusState, MoveBy, MoveDir,
    MAX_FOCUS_ATTEMPTS,
};
pub use keyboard::{key_action, Key, KeyAction, KeyPress};
pub use matcher::{
    matches, range_contains_day_of_week, range_contains_modifiers, range_includes_date,
    range_overlaps, DateRange, Matcher,
};
pub use modifiers::{ModifierContext, Modifiers};
pub use navigation::{initial_month, next_month, previous_month, NavBounds};
pub use picker::DayPicker;
pub use props::{DayPickerProps, Direction, Mode};
pub use render::{render_calendar, render_month};
pub use selection::{
    add_to_range, next_selection, select_multiple, select_range, select_single, LocalState,
    OnSelect, SelectEvent, Selection, SelectionSink, SelectionValue,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
