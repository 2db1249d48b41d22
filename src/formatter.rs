//! Decade page formatting with color support.

use chrono::Datelike;
use unicode_width::UnicodeWidthStr;

use crate::picker::YearPicker;
use crate::types::{
    CELL_WIDTH, COLOR_DIM, COLOR_RESET, COLOR_REVERSE, COLOR_SAND_YELLOW, COLOR_TEAL,
    ColumnsMode, DEFAULT_COLUMNS, DisplayContext, MAX_AUTO_COLUMNS, YearCell,
};

/// Gutter between year cells in a row.
const CELL_GUTTER: usize = 1;

/// Number of year cells per grid row.
pub fn columns_per_row(ctx: &DisplayContext) -> u32 {
    match ctx.columns {
        ColumnsMode::Fixed(n) => n,
        ColumnsMode::Auto => {
            if let Some(term_width) = get_terminal_width() {
                (term_width / (CELL_WIDTH + CELL_GUTTER) as u32).clamp(1, MAX_AUTO_COLUMNS)
            } else {
                DEFAULT_COLUMNS
            }
        }
    }
}

/// Width in columns of a grid row with `columns` cells.
pub fn grid_width(columns: u32) -> usize {
    let columns = columns.max(1) as usize;
    columns * CELL_WIDTH + (columns - 1) * CELL_GUTTER
}

/// Center text within a specified width, accounting for Unicode character widths.
fn center_text(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width >= width {
        return text.to_string();
    }
    let total_padding = width - text_width;
    let left_padding = total_padding.div_ceil(2);
    let right_padding = total_padding - left_padding;
    format!(
        "{}{}{}",
        " ".repeat(left_padding),
        text,
        " ".repeat(right_padding)
    )
}

/// Format the page header: decade label between navigation arrows.
///
/// An arrow is blanked when navigation in that direction is disabled.
pub fn format_decade_header(picker: &YearPicker, width: usize, color: bool) -> String {
    let calc = picker.calculator();
    let prev = if calc.is_previous_decade_disabled() { ' ' } else { '<' };
    let next = if calc.is_next_decade_disabled() { ' ' } else { '>' };
    let header = format!("{} {} {}", prev, calc.page_decade_label(), next);
    let centered = center_text(&header, width);
    if color {
        format!("{}{}{}", COLOR_TEAL, centered, COLOR_RESET)
    } else {
        centered
    }
}

/// Format one year cell.
///
/// Markers: `[2018]` selected, `(2018)` disabled. With color, selected is
/// reversed, disabled is dimmed and the current year is highlighted.
pub fn format_year_cell(ctx: &DisplayContext, cell: &YearCell) -> String {
    let text = if cell.is_selected {
        format!("[{:>4}]", cell.year)
    } else if cell.is_disabled {
        format!("({:>4})", cell.year)
    } else {
        format!(" {:>4} ", cell.year)
    };

    if !ctx.color {
        return text;
    }

    if cell.is_selected {
        format!("{}{}{}", COLOR_REVERSE, text, COLOR_RESET)
    } else if cell.is_disabled {
        format!("{}{}{}", COLOR_DIM, text, COLOR_RESET)
    } else if cell.year == ctx.today.year() {
        format!("{}{}{}", COLOR_SAND_YELLOW, text, COLOR_RESET)
    } else {
        text
    }
}

/// Format the displayed decade as lines: header followed by year rows.
pub fn format_decade_grid(ctx: &DisplayContext, picker: &YearPicker) -> Vec<String> {
    let columns = columns_per_row(ctx).max(1) as usize;
    let mut lines = vec![format_decade_header(
        picker,
        grid_width(columns as u32),
        ctx.color,
    )];

    let cells = picker.years();
    for row in cells.chunks(columns) {
        let line = row
            .iter()
            .map(|cell| format_year_cell(ctx, cell))
            .collect::<Vec<_>>()
            .join(&" ".repeat(CELL_GUTTER));
        lines.push(line);
    }

    lines
}

/// Print the displayed decade.
pub fn print_decade(ctx: &DisplayContext, picker: &YearPicker) {
    for line in format_decade_grid(ctx, picker) {
        println!("{}", line);
    }
}

/// Get terminal width using terminal_size crate.
fn get_terminal_width() -> Option<u32> {
    terminal_size::terminal_size().map(|(w, _)| w.0 as u32)
}
