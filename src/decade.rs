//! Decade boundary arithmetic and disabled-year evaluation.

use chrono::{Datelike, NaiveDate};

use crate::types::{DecadeMode, PickerInput, YEARS_PER_DECADE, YearCell};

/// Pure calculations over a borrowed [`PickerInput`].
#[derive(Debug, Clone, Copy)]
pub struct DecadeCalculator<'a> {
    input: &'a PickerInput,
}

impl<'a> DecadeCalculator<'a> {
    pub fn new(input: &'a PickerInput) -> Self {
        DecadeCalculator { input }
    }

    pub fn input(&self) -> &'a PickerInput {
        self.input
    }

    /// First year of the decade window containing `date`.
    pub fn begin_of_decade(&self, date: NaiveDate) -> i32 {
        begin_of_decade_year(self.input.decade_mode, date.year())
    }

    /// Last year of the decade window containing `date`.
    pub fn end_of_decade(&self, date: NaiveDate) -> i32 {
        self.begin_of_decade(date) + YEARS_PER_DECADE - 1
    }

    /// Whether the year of `date` cannot be selected.
    ///
    /// A custom predicate, when present, is authoritative. Otherwise a year is
    /// disabled only when it lies wholly before the year of `to` or wholly
    /// after the year of `from`.
    pub fn is_disabled_year(&self, date: NaiveDate) -> bool {
        let disabled = &self.input.disabled_dates;
        if let Some(predicate) = &disabled.custom_predicate {
            return predicate(date);
        }

        let year = date.year();
        disabled.to.is_some_and(|to| year < to.year())
            || disabled.from.is_some_and(|from| year > from.year())
    }

    /// True when every year of the decade before the page is covered by `to`.
    pub fn is_previous_decade_disabled(&self) -> bool {
        let Some(to) = self.input.disabled_dates.to else {
            return false;
        };
        let last_year_in_previous_page = self.begin_of_decade(self.input.page_date) - 1;
        to.year() > last_year_in_previous_page
    }

    /// True when every year of the decade after the page is covered by `from`.
    ///
    /// `from` on the first day of the next decade leaves navigation open; a
    /// `from` anywhere in the current decade closes it.
    pub fn is_next_decade_disabled(&self) -> bool {
        let Some(from) = self.input.disabled_dates.from else {
            return false;
        };
        let last_year_in_page = self.end_of_decade(self.input.page_date);
        from.year() <= last_year_in_page
    }

    pub fn is_selected_year(&self, date: NaiveDate) -> bool {
        self.input
            .selected_date
            .is_some_and(|selected| selected.year() == date.year())
    }

    /// Cell for `year`, dated on the page's month and day.
    ///
    /// `None` unless `year` lies in the page's decade.
    pub fn year_cell(&self, year: i32) -> Option<YearCell> {
        let page = self.input.page_date;
        if !(self.begin_of_decade(page)..=self.end_of_decade(page)).contains(&year) {
            return None;
        }
        let date = representative_date(self.input.page_date, year)?;
        Some(YearCell {
            year,
            date,
            is_selected: self.is_selected_year(date),
            is_disabled: self.is_disabled_year(date),
        })
    }

    /// The ten cells of the page's decade.
    ///
    /// Years outside chrono's supported range are skipped.
    pub fn years(&self) -> Vec<YearCell> {
        let begin = self.begin_of_decade(self.input.page_date);
        (begin..begin + YEARS_PER_DECADE)
            .filter_map(|year| self.year_cell(year))
            .collect()
    }

    /// Header label such as `2010 - 2019`.
    pub fn page_decade_label(&self) -> String {
        let begin = self.begin_of_decade(self.input.page_date);
        format!("{} - {}", begin, begin + YEARS_PER_DECADE - 1)
    }
}

/// First year of the window containing `year` under `mode`.
pub fn begin_of_decade_year(mode: DecadeMode, year: i32) -> i32 {
    match mode {
        DecadeMode::Fixed => year.div_euclid(YEARS_PER_DECADE) * YEARS_PER_DECADE,
        DecadeMode::Rolling { anchor_year } => {
            anchor_year + (year - anchor_year).div_euclid(YEARS_PER_DECADE) * YEARS_PER_DECADE
        }
    }
}

/// Move `date` into `year`, clamping Feb 29 to Feb 28 in common years.
pub fn representative_date(date: NaiveDate, year: i32) -> Option<NaiveDate> {
    date.with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, date.month(), 28))
}
