//! Year picker state driven by explicit events.
//!
//! Operations never mutate the picker. They return a [`PickerEvent`] when
//! allowed and `None` when the year or decade is disabled; the owner applies
//! accepted events with [`YearPicker::apply`].

use chrono::{Datelike, NaiveDate};
use tracing::{debug, trace};

use crate::decade::{DecadeCalculator, representative_date};
use crate::types::{PickerEvent, PickerInput, YEARS_PER_DECADE, YearCell};

#[derive(Debug, Clone)]
pub struct YearPicker {
    input: PickerInput,
}

impl YearPicker {
    pub fn new(input: PickerInput) -> Self {
        YearPicker { input }
    }

    pub fn input(&self) -> &PickerInput {
        &self.input
    }

    pub fn page_date(&self) -> NaiveDate {
        self.input.page_date
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.input.selected_date
    }

    pub fn calculator(&self) -> DecadeCalculator<'_> {
        DecadeCalculator::new(&self.input)
    }

    /// Cells of the currently displayed decade.
    pub fn years(&self) -> Vec<YearCell> {
        self.calculator().years()
    }

    pub fn select_year(&self, cell: &YearCell) -> Option<PickerEvent> {
        if cell.is_disabled {
            debug!(year = cell.year, "rejected selection of disabled year");
            return None;
        }
        Some(PickerEvent::SelectYear(cell.clone()))
    }

    pub fn previous_decade(&self) -> Option<PickerEvent> {
        if self.calculator().is_previous_decade_disabled() {
            debug!(page = %self.input.page_date, "previous decade is disabled");
            return None;
        }
        self.change_year(-YEARS_PER_DECADE)
    }

    pub fn next_decade(&self) -> Option<PickerEvent> {
        if self.calculator().is_next_decade_disabled() {
            debug!(page = %self.input.page_date, "next decade is disabled");
            return None;
        }
        self.change_year(YEARS_PER_DECADE)
    }

    fn change_year(&self, increment_by: i32) -> Option<PickerEvent> {
        let page = self.input.page_date;
        let target = representative_date(page, page.year() + increment_by);
        if target.is_none() {
            debug!(%page, increment_by, "decade change leaves supported date range");
        }
        target.map(PickerEvent::ChangedDecade)
    }

    /// Apply an event previously returned by this picker.
    ///
    /// The decade mode is fixed at construction, so rolling windows stay
    /// aligned across selections and page changes.
    pub fn apply(&mut self, event: &PickerEvent) {
        trace!(?event, "applying picker event");
        match event {
            PickerEvent::SelectYear(cell) => {
                self.input.selected_date = Some(cell.date);
                self.input.page_date = cell.date;
            }
            PickerEvent::ChangedDecade(page_date) => {
                self.input.page_date = *page_date;
            }
        }
    }
}
