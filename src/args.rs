//! Command-line argument parsing using clap.
//!
//! Arguments: `[page-date]`, with dates written as `YYYY-MM-DD`.

use chrono::{Datelike, NaiveDate};
use clap::{ArgAction, Parser, ValueHint};
use std::io::IsTerminal;
use tracing::info;

use crate::error::PickerError;
use crate::types::{
    COLOR_ENABLED_BY_DEFAULT, ColumnsMode, DisabledDates, DisplayContext, MAX_YEAR, MIN_YEAR,
    PickerInput,
};

/// Date format accepted on the command line.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Parser, Debug)]
#[command(name = "yearpick")]
#[command(about = "Displays a decade of years with disabled-date rules", long_about = None)]
#[command(version)]
#[command(after_help = HELP_MESSAGE)]
pub struct Args {
    /// Date of the displayed page (default is today).
    #[arg(index = 1, value_name = "page-date", value_hint = ValueHint::Other)]
    pub page_date: Option<String>,

    /// Currently selected date.
    #[arg(short = 's', long, help_heading = "Picker options", value_name = "date")]
    pub selected: Option<String>,

    /// Use rolling decades centred on the page date.
    #[arg(short = 'r', long, help_heading = "Picker options")]
    pub rolling: bool,

    /// Disable years before the year of this date.
    #[arg(long, help_heading = "Disabled dates", value_name = "date")]
    pub to: Option<String>,

    /// Disable years after the year of this date.
    #[arg(long, help_heading = "Disabled dates", value_name = "date")]
    pub from: Option<String>,

    /// Disable every year divisible by N (overrides --to/--from for years).
    #[arg(
        long = "multiple-of",
        help_heading = "Disabled dates",
        value_name = "N",
        value_parser = clap::value_parser!(i32).range(1..)
    )]
    pub multiple_of: Option<i32>,

    /// Disable years listed in BLACKOUT_YEARS (requires plugin).
    ///
    /// **Note:** Build the workspace to include the plugin:
    /// ```bash
    /// cargo build --release --workspace
    /// ```
    /// The plugin file (`libblackout_years.so`) must be in one of:
    /// - `./target/release/` (after building)
    /// - `~/.local/lib/yearpick/plugins/`
    /// - `/usr/lib/yearpick/plugins/`
    #[arg(
        short = 'B',
        long,
        help_heading = "Disabled dates",
        conflicts_with = "multiple_of"
    )]
    pub blackout: bool,

    /// Load the blackout plugin from this file instead of the search paths.
    #[arg(
        long = "plugin-path",
        help_heading = "Disabled dates",
        value_name = "file",
        requires = "blackout",
        value_hint = ValueHint::FilePath
    )]
    pub plugin_path: Option<String>,

    /// Move to the previous decade (repeatable).
    #[arg(short = 'p', long, action = ArgAction::Count, help_heading = "Navigation", conflicts_with = "next")]
    pub previous: u8,

    /// Move to the next decade (repeatable).
    #[arg(short = 'n', long, action = ArgAction::Count, help_heading = "Navigation")]
    pub next: u8,

    /// Select a year after navigating.
    #[arg(long, help_heading = "Navigation", value_name = "year")]
    pub select: Option<i32>,

    /// Disable colorized output.
    #[arg(long, help_heading = "Output options")]
    pub color: bool,

    /// Number of years per row (or "auto" for terminal width).
    #[arg(
        short = 'c',
        long = "columns",
        help_heading = "Output options",
        value_name = "width"
    )]
    pub columns: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short = 'v', long, action = ArgAction::Count, help_heading = "Output options")]
    pub verbose: u8,
}

/// Help message displayed with --help.
const HELP_MESSAGE: &str = "Display one decade of years, marking selected and disabled years.

Without any arguments, display the decade containing today.

Examples:
  yearpick                          Current decade
  yearpick 1998-10-15               Decade 1990 - 1999
  yearpick -r 2019-04-09            Rolling decade 2014 - 2023
  yearpick --to 2010-12-19 -n       Next decade, years before 2010 disabled
  yearpick --multiple-of 3          Disable years divisible by three
  yearpick --select 2018 -s 2016-01-01
  yearpick -B                       Disable BLACKOUT_YEARS (requires plugin, see --help)";

impl Args {
    pub fn parse() -> Self {
        Parser::parse()
    }
}

impl DisplayContext {
    pub fn new(args: &Args) -> Result<Self, PickerError> {
        let today = get_today_date();

        let color = !args.color && COLOR_ENABLED_BY_DEFAULT && std::io::stdout().is_terminal();

        let columns = match args.columns.as_deref() {
            Some("auto") | None => ColumnsMode::Auto,
            Some(s) => {
                let n = s.parse::<u32>().map_err(|_| PickerError::InvalidColumns {
                    value: s.to_string(),
                })?;
                if n == 0 {
                    return Err(PickerError::InvalidColumns {
                        value: s.to_string(),
                    });
                }
                ColumnsMode::Fixed(n)
            }
        };

        Ok(DisplayContext {
            color,
            columns,
            today,
        })
    }
}

/// Get today's date, respecting YEARPICK_TEST_TIME environment variable for testing.
pub fn get_today_date() -> NaiveDate {
    if let Ok(test_time) = std::env::var("YEARPICK_TEST_TIME")
        && let Ok(date) = NaiveDate::parse_from_str(&test_time, DATE_FORMAT)
    {
        return date;
    }
    chrono::Local::now().date_naive()
}

/// Parse a `YYYY-MM-DD` date restricted to years 1-9999.
pub fn parse_date(value: &str) -> Result<NaiveDate, PickerError> {
    let date =
        NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| PickerError::InvalidDate {
            value: value.to_string(),
        })?;
    check_year(date.year())?;
    Ok(date)
}

pub fn check_year(year: i32) -> Result<i32, PickerError> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(PickerError::InvalidYear { year });
    }
    Ok(year)
}

/// Build the picker input from parsed arguments.
pub fn build_input(args: &Args) -> Result<PickerInput, PickerError> {
    let page_date = match &args.page_date {
        Some(s) => parse_date(s)?,
        None => get_today_date(),
    };
    let selected_date = args.selected.as_deref().map(parse_date).transpose()?;

    let mut disabled = DisabledDates::default();
    if let Some(to) = &args.to {
        disabled = disabled.with_to(parse_date(to)?);
    }
    if let Some(from) = &args.from {
        disabled = disabled.with_from(parse_date(from)?);
    }
    if let Some(divisor) = args.multiple_of {
        disabled = disabled.with_predicate(move |date| date.year() % divisor == 0);
    }
    if args.blackout {
        disabled.custom_predicate = Some(blackout_predicate(args.plugin_path.as_deref())?);
    }

    info!(%page_date, ?selected_date, rolling = args.rolling, ?disabled, "picker input");
    Ok(PickerInput::new(
        page_date,
        selected_date,
        args.rolling,
        disabled,
    ))
}

#[cfg(feature = "plugins")]
fn blackout_predicate(path: Option<&str>) -> Result<crate::types::DatePredicate, PickerError> {
    let plugin = match path {
        Some(path) => crate::plugin_api::load_plugin_from(path),
        None => crate::plugin_api::try_load_plugin(),
    };
    plugin
        .map(|plugin| plugin.into_predicate())
        .ok_or_else(|| PickerError::PluginUnavailable {
            name: crate::plugin_api::PLUGIN_NAME.to_string(),
        })
}

#[cfg(not(feature = "plugins"))]
fn blackout_predicate(_path: Option<&str>) -> Result<crate::types::DatePredicate, PickerError> {
    Err(PickerError::PluginUnavailable {
        name: "blackout_years".to_string(),
    })
}
