//! Blackout Years Plugin for yearpick.
//!
//! Disables years listed in the `BLACKOUT_YEARS` environment variable,
//! e.g. `2019,2022,2030-2035`.

use libc::{c_char, c_int};
use std::ffi::CString;
use std::ops::RangeInclusive;
use std::sync::LazyLock;

pub const PLUGIN_NAME: &str = env!("CARGO_PKG_NAME");
pub const PLUGIN_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable holding the blackout list.
pub const BLACKOUT_ENV: &str = "BLACKOUT_YEARS";

/// List parsed once per process for the C entry points.
static BLACKOUT: LazyLock<Vec<RangeInclusive<i32>>> = LazyLock::new(blackout_from_env);

/// Get plugin name (do not free returned pointer).
#[unsafe(no_mangle)]
pub extern "C" fn plugin_get_name() -> *const c_char {
    static NAME: LazyLock<CString> = LazyLock::new(|| CString::new(PLUGIN_NAME).unwrap());
    NAME.as_ptr()
}

/// Get plugin version (do not free returned pointer).
#[unsafe(no_mangle)]
pub extern "C" fn plugin_get_version() -> *const c_char {
    static VERSION: LazyLock<CString> = LazyLock::new(|| CString::new(PLUGIN_VERSION).unwrap());
    VERSION.as_ptr()
}

/// Check whether a date is disabled.
///
/// Returns: 1=disabled, 0=enabled, -1=invalid date
#[unsafe(no_mangle)]
pub extern "C" fn plugin_is_disabled(year: c_int, month: c_int, day: c_int) -> c_int {
    disabled_code(year, month, day, &BLACKOUT)
}

/// Status code of a date against `list`: 1=disabled, 0=enabled, -1=invalid date
pub fn disabled_code(
    year: c_int,
    month: c_int,
    day: c_int,
    list: &[RangeInclusive<i32>],
) -> c_int {
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return -1;
    }
    is_blackout_year(year, list) as c_int
}

/// Read and parse the blackout list from the environment.
pub fn blackout_from_env() -> Vec<RangeInclusive<i32>> {
    std::env::var(BLACKOUT_ENV)
        .map(|s| parse_blackout_list(&s))
        .unwrap_or_default()
}

/// Parse a comma-separated list of years and inclusive `start-end` ranges.
///
/// Years may be negative (`-10--5`). Malformed entries are skipped;
/// reversed ranges are normalized.
pub fn parse_blackout_list(s: &str) -> Vec<RangeInclusive<i32>> {
    s.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .filter_map(parse_entry)
        .collect()
}

fn parse_entry(entry: &str) -> Option<RangeInclusive<i32>> {
    // A leading '-' is the sign of the first year, not the range separator
    let separator = entry.get(1..)?.find('-').map(|i| i + 1);
    match separator.map(|i| (&entry[..i], &entry[i + 1..])) {
        Some((start, end)) => {
            let start: i32 = start.trim().parse().ok()?;
            let end: i32 = end.trim().parse().ok()?;
            Some(start.min(end)..=start.max(end))
        }
        None => {
            let year: i32 = entry.parse().ok()?;
            Some(year..=year)
        }
    }
}

pub fn is_blackout_year(year: i32, list: &[RangeInclusive<i32>]) -> bool {
    list.iter().any(|range| range.contains(&year))
}
