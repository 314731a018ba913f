//! Selection modes
//!
//! The next selection is computed by a pure function of the current value,
//! the clicked date and the props ([`next_selection`]). Where the result
//! goes is decided by a [`SelectionSink`]:
//!
//! - [`LocalState`] keeps the value itself (uncontrolled picker)
//! - [`OnSelect`] hands it to a callback and never changes its own value;
//!   the owner feeds the new value back with [`OnSelect::set_selected`]
//!   (controlled picker)

mod multiple;
mod range;
mod single;

pub use multiple::select_multiple;
pub use range::{add_to_range, select_range};
pub use single::select_single;

use crate::error::Result;
use crate::matcher::{range_includes_date, DateRange};
use crate::modifiers::Modifiers;
use crate::props::{DayPickerProps, Mode};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Selected value, shaped by the selection mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "selected", rename_all = "lowercase")]
pub enum SelectionValue {
    Single(Option<NaiveDate>),
    Multiple(Option<Vec<NaiveDate>>),
    Range(Option<DateRange>),
}

impl SelectionValue {
    /// Nothing selected yet
    pub fn empty(mode: Mode) -> Self {
        match mode {
            Mode::Single => SelectionValue::Single(None),
            Mode::Multiple => SelectionValue::Multiple(None),
            Mode::Range => SelectionValue::Range(None),
        }
    }

    pub fn mode(&self) -> Mode {
        match self {
            SelectionValue::Single(_) => Mode::Single,
            SelectionValue::Multiple(_) => Mode::Multiple,
            SelectionValue::Range(_) => Mode::Range,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            SelectionValue::Single(d) => d.is_none(),
            SelectionValue::Multiple(ds) => ds.as_ref().is_none_or(|ds| ds.is_empty()),
            SelectionValue::Range(r) => r.as_ref().is_none_or(|r| r.is_empty()),
        }
    }

    pub fn is_selected(&self, date: NaiveDate) -> bool {
        match self {
            SelectionValue::Single(d) => *d == Some(date),
            SelectionValue::Multiple(ds) => ds.as_ref().is_some_and(|ds| ds.contains(&date)),
            SelectionValue::Range(r) => r
                .as_ref()
                .is_some_and(|r| range_includes_date(r, date, false)),
        }
    }

    /// Set the selection flags of `date` on `modifiers`
    pub fn apply_modifiers(&self, date: NaiveDate, modifiers: &mut Modifiers) {
        modifiers.selected = self.is_selected(date);
        if let SelectionValue::Range(Some(range)) = self {
            modifiers.range_start = range.from == Some(date);
            modifiers.range_end = range.to == Some(date);
            modifiers.range_middle = range_includes_date(range, date, true);
        }
    }
}

/// Compute the selection that follows a click on `trigger`
///
/// Returns `Ok(None)` when the click leaves the selection as it is and no
/// one should be notified (multiple mode at its `min` or `required` bound).
pub fn next_selection(
    current: &SelectionValue,
    trigger: NaiveDate,
    props: &DayPickerProps,
) -> Result<Option<SelectionValue>> {
    let next = match current {
        SelectionValue::Single(selected) => Some(SelectionValue::Single(select_single(
            *selected,
            trigger,
            props.required,
        ))),
        SelectionValue::Multiple(selected) => select_multiple(
            selected.as_deref(),
            trigger,
            props.min,
            props.max,
            props.required,
        )
        .map(|dates| SelectionValue::Multiple(Some(dates))),
        SelectionValue::Range(selected) => {
            let disabled =
                (props.exclude_disabled && !props.disabled.is_empty()).then_some(&props.disabled[..]);
            Some(SelectionValue::Range(select_range(
                selected.as_ref(),
                trigger,
                props.min,
                props.max,
                props.required,
                disabled,
            )?))
        }
    };
    trace!(%trigger, ?next, "computed selection");
    Ok(next)
}

/// A committed selection change
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectEvent {
    pub selected: SelectionValue,
    pub trigger: NaiveDate,
    pub modifiers: Modifiers,
}

/// Where a computed selection is written
pub trait SelectionSink {
    /// Value the next selection is computed from
    fn selected(&self) -> &SelectionValue;

    /// Receive a newly computed selection
    fn commit(&mut self, event: SelectEvent);
}

/// Uncontrolled selection: the picker owns the value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalState {
    value: SelectionValue,
}

impl LocalState {
    pub fn new(value: SelectionValue) -> Self {
        Self { value }
    }

    pub fn empty(mode: Mode) -> Self {
        Self::new(SelectionValue::empty(mode))
    }
}

impl SelectionSink for LocalState {
    fn selected(&self) -> &SelectionValue {
        &self.value
    }

    fn commit(&mut self, event: SelectEvent) {
        self.value = event.selected;
    }
}

/// Controlled selection: the value belongs to the caller, changes go to the
/// callback only
pub struct OnSelect<F> {
    value: SelectionValue,
    callback: F,
}

impl<F> OnSelect<F>
where
    F: FnMut(&SelectEvent),
{
    pub fn new(value: SelectionValue, callback: F) -> Self {
        Self { value, callback }
    }

    /// Replace the controlled value
    pub fn set_selected(&mut self, value: SelectionValue) {
        self.value = value;
    }
}

impl<F> SelectionSink for OnSelect<F>
where
    F: FnMut(&SelectEvent),
{
    fn selected(&self) -> &SelectionValue {
        &self.value
    }

    fn commit(&mut self, event: SelectEvent) {
        (self.callback)(&event);
    }
}

/// A selection mode bound to its sink
pub struct Selection<S> {
    sink: S,
}

impl<S: SelectionSink> Selection<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    pub fn selected(&self) -> &SelectionValue {
        self.sink.selected()
    }

    pub fn is_selected(&self, date: NaiveDate) -> bool {
        self.sink.selected().is_selected(date)
    }

    /// Handle a click on `trigger`, returning the computed value
    ///
    /// The value is committed to the sink unless the click changes nothing.
    pub fn select(
        &mut self,
        trigger: NaiveDate,
        modifiers: &Modifiers,
        props: &DayPickerProps,
    ) -> Result<Option<SelectionValue>> {
        let next = next_selection(self.sink.selected(), trigger, props)?;
        if let Some(selected) = &next {
            self.sink.commit(SelectEvent {
                selected: selected.clone(),
                trigger,
                modifiers: modifiers.clone(),
            });
        }
        Ok(next)
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }
}
