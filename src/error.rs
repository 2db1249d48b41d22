//! Command-line error types.

/// Errors reported by the `yearpick` front end.
///
/// The decade calculator itself never fails; these cover argument parsing
/// and operations the picker refused.
#[derive(Debug, thiserror::Error)]
pub enum PickerError {
    /// A date argument did not parse as `YYYY-MM-DD`.
    #[error("Invalid date value: {value} (expected YYYY-MM-DD)")]
    InvalidDate { value: String },

    /// A year fell outside the supported range.
    #[error("Invalid year value: {year} (must be 1-9999)")]
    InvalidYear { year: i32 },

    #[error("Invalid columns value: {value}")]
    InvalidColumns { value: String },

    /// The requested year is not a cell of the displayed decade.
    #[error("year {year} is not on the page {begin} - {end}")]
    YearNotOnPage { year: i32, begin: i32, end: i32 },

    /// The requested year is disabled.
    #[error("year {year} is disabled")]
    YearDisabled { year: i32 },

    /// Navigation to the previous decade is blocked.
    #[error("previous decade before {begin} is disabled")]
    PreviousDecadeDisabled { begin: i32 },

    /// Navigation to the next decade is blocked.
    #[error("next decade after {end} is disabled")]
    NextDecadeDisabled { end: i32 },

    #[error("plugin '{name}' could not be loaded")]
    PluginUnavailable { name: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_date_display() {
        let err = PickerError::InvalidDate {
            value: "2018-13-01".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("2018-13-01"));
        assert!(msg.contains("YYYY-MM-DD"));
    }

    #[test]
    fn test_navigation_display() {
        let prev = PickerError::PreviousDecadeDisabled { begin: 2010 };
        let next = PickerError::NextDecadeDisabled { end: 2019 };
        assert_eq!(prev.to_string(), "previous decade before 2010 is disabled");
        assert_eq!(next.to_string(), "next decade after 2019 is disabled");
    }

    #[test]
    fn test_year_not_on_page_display() {
        let err = PickerError::YearNotOnPage {
            year: 1850,
            begin: 2010,
            end: 2019,
        };
        assert_eq!(err.to_string(), "year 1850 is not on the page 2010 - 2019");
    }

    #[test]
    fn test_year_disabled_display() {
        let err = PickerError::YearDisabled { year: 2019 };
        assert_eq!(err.to_string(), "year 2019 is disabled");
    }
}
