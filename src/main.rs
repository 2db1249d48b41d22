//! Year picker CLI application.
//!
//! # Usage
//! ```ignore
//! yearpick                         // Current decade
//! yearpick 1998-10-15              // Decade 1990 - 1999
//! yearpick -r 2019-04-09           // Rolling decade 2014 - 2023
//! yearpick --from 2021-12-19 -n    // Next decade, if not disabled
//! ```

use tracing::info;

use yearpick::args::{Args, build_input, check_year};
use yearpick::error::PickerError;
use yearpick::formatter::print_decade;
use yearpick::logging;
use yearpick::picker::YearPicker;
use yearpick::types::DisplayContext;

fn main() {
    let args = Args::parse();
    logging::init(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("yearpick: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), PickerError> {
    let ctx = DisplayContext::new(args)?;
    let mut picker = YearPicker::new(build_input(args)?);

    // Navigation first, then selection within the resulting page
    for _ in 0..args.previous {
        let begin = picker.calculator().begin_of_decade(picker.page_date());
        let event = picker
            .previous_decade()
            .ok_or(PickerError::PreviousDecadeDisabled { begin })?;
        picker.apply(&event);
    }
    for _ in 0..args.next {
        let end = picker.calculator().end_of_decade(picker.page_date());
        let event = picker
            .next_decade()
            .ok_or(PickerError::NextDecadeDisabled { end })?;
        picker.apply(&event);
    }

    if let Some(year) = args.select {
        let year = check_year(year)?;
        let calc = picker.calculator();
        let page = picker.page_date();
        let cell = calc.year_cell(year).ok_or(PickerError::YearNotOnPage {
            year,
            begin: calc.begin_of_decade(page),
            end: calc.end_of_decade(page),
        })?;
        let event = picker
            .select_year(&cell)
            .ok_or(PickerError::YearDisabled { year })?;
        picker.apply(&event);
        info!(year, "selected year");
    }

    print_decade(&ctx, &picker);
    Ok(())
}
