//! Type definitions and constants for the year picker.

use std::fmt;
use std::sync::Arc;

use chrono::{Datelike, NaiveDate};

/// User-supplied rule deciding whether a date is disabled.
pub type DatePredicate = Arc<dyn Fn(NaiveDate) -> bool + Send + Sync>;

/// How decade windows are aligned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecadeMode {
    /// Windows start on years ending in 0 (1990-1999).
    Fixed,
    /// Windows start on years congruent to `anchor_year` modulo 10.
    Rolling { anchor_year: i32 },
}

impl DecadeMode {
    /// Rolling mode with a window centred on `page_date`.
    pub fn rolling_around(page_date: NaiveDate) -> Self {
        DecadeMode::Rolling {
            anchor_year: page_date.year() - ROLLING_LEAD_YEARS,
        }
    }

    pub fn is_rolling(self) -> bool {
        matches!(self, DecadeMode::Rolling { .. })
    }
}

/// Dates that cannot be selected.
///
/// When `custom_predicate` is set it decides year disablement on its own and
/// the `to`/`from` bounds only gate decade navigation.
#[derive(Clone, Default)]
pub struct DisabledDates {
    /// Years before this date's year are disabled.
    pub to: Option<NaiveDate>,
    /// Years after this date's year are disabled.
    pub from: Option<NaiveDate>,
    pub custom_predicate: Option<DatePredicate>,
}

impl DisabledDates {
    pub fn with_to(mut self, to: NaiveDate) -> Self {
        self.to = Some(to);
        self
    }

    pub fn with_from(mut self, from: NaiveDate) -> Self {
        self.from = Some(from);
        self
    }

    pub fn with_predicate<F>(mut self, predicate: F) -> Self
    where
        F: Fn(NaiveDate) -> bool + Send + Sync + 'static,
    {
        self.custom_predicate = Some(Arc::new(predicate));
        self
    }
}

impl fmt::Debug for DisabledDates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DisabledDates")
            .field("to", &self.to)
            .field("from", &self.from)
            .field("custom_predicate", &self.custom_predicate.is_some())
            .finish()
    }
}

/// Immutable input to the decade calculator.
#[derive(Debug, Clone)]
pub struct PickerInput {
    /// Date of the currently displayed page; selects the decade shown.
    pub page_date: NaiveDate,
    pub selected_date: Option<NaiveDate>,
    pub decade_mode: DecadeMode,
    pub disabled_dates: DisabledDates,
}

impl PickerInput {
    /// Build an input, anchoring rolling decades on `page_date`.
    pub fn new(
        page_date: NaiveDate,
        selected_date: Option<NaiveDate>,
        rolling_decades: bool,
        disabled_dates: DisabledDates,
    ) -> Self {
        let decade_mode = if rolling_decades {
            DecadeMode::rolling_around(page_date)
        } else {
            DecadeMode::Fixed
        };
        PickerInput {
            page_date,
            selected_date,
            decade_mode,
            disabled_dates,
        }
    }
}

/// A single year in the displayed decade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearCell {
    pub year: i32,
    /// Page date's month and day moved into `year`.
    pub date: NaiveDate,
    pub is_selected: bool,
    pub is_disabled: bool,
}

/// Events emitted by the picker for its owner to apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerEvent {
    /// A year was chosen.
    SelectYear(YearCell),
    /// The page moved to another decade; carries the new page date.
    ChangedDecade(NaiveDate),
}

/// Column display mode for the year grid.
#[derive(Debug, Clone, Copy)]
pub enum ColumnsMode {
    /// Fixed number of cells per row.
    Fixed(u32),
    /// Auto-detect from terminal width.
    Auto,
}

/// Display options for the command-line front end.
#[derive(Clone, Debug)]
pub struct DisplayContext {
    /// Whether to use ANSI color codes in output.
    pub color: bool,
    pub columns: ColumnsMode,
    /// Today's date for highlighting the current year.
    pub today: NaiveDate,
}

// Constants for decade paging
pub const YEARS_PER_DECADE: i32 = 10;
/// Years shown before the page year in a freshly anchored rolling window.
pub const ROLLING_LEAD_YEARS: i32 = 5;

// Constants for grid formatting
pub const CELL_WIDTH: usize = 6; // "[2018]"
pub const MAX_AUTO_COLUMNS: u32 = 5;
pub const DEFAULT_COLUMNS: u32 = 3;
pub const MIN_YEAR: i32 = 1;
pub const MAX_YEAR: i32 = 9999;

// Color is on by default when stdout is a terminal
pub const COLOR_ENABLED_BY_DEFAULT: bool = true;

// ANSI color codes
pub const COLOR_RESET: &str = "\x1b[0m";
pub const COLOR_REVERSE: &str = "\x1b[7m";
pub const COLOR_DIM: &str = "\x1b[2m";
pub const COLOR_TEAL: &str = "\x1b[96m";
pub const COLOR_SAND_YELLOW: &str = "\x1b[93m";
