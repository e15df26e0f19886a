//! Results grid: one row per photo with swatch, title, byline, and URL.

use crate::app::state::{BYLINE_COLUMN_WIDTH, SWATCH_COLUMN_WIDTH, TITLE_COLUMN_WIDTH};
use crate::ui::helpers::{display_width, highlighted_text, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayItem;

/// Renders the column headers, returning the next row.
pub fn render_grid_headers(row: usize, theme: &Theme) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!(
        "{:w1$}{:<w2$}{:<w3$}URL",
        "",
        "TITLE",
        "BY",
        w1 = SWATCH_COLUMN_WIDTH,
        w2 = TITLE_COLUMN_WIDTH,
        w3 = BYLINE_COLUMN_WIDTH
    );
    print!("{}", Theme::reset());
    row + 1
}

/// Renders every item on consecutive rows, returning the next row.
pub fn render_grid_rows(row: usize, items: &[DisplayItem], theme: &Theme, cols: usize) -> usize {
    items
        .iter()
        .fold(row, |current_row, item| render_grid_row(current_row, item, theme, cols))
}

fn render_grid_row(row: usize, item: &DisplayItem, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    match &item.swatch {
        Some(hex) => print!("{}■{} ", Theme::fg(hex), Theme::reset()),
        None => print!("  "),
    }

    let (base_fg, dim_fg) = if item.is_selected {
        print!("{}", Theme::bg(&theme.colors.selection_bg));
        (&theme.colors.selection_fg, &theme.colors.selection_fg)
    } else {
        (&theme.colors.text_normal, &theme.colors.text_dim)
    };

    print!("{}", Theme::fg(base_fg));
    print!("{}", highlighted_text(&item.title, &item.highlight_ranges, theme, item.is_selected));
    print!("{}", " ".repeat(TITLE_COLUMN_WIDTH.saturating_sub(display_width(&item.title))));

    print!("{}", Theme::fg(dim_fg));
    print!("{}", item.byline);
    print!("{}", " ".repeat(BYLINE_COLUMN_WIDTH.saturating_sub(display_width(&item.byline))));

    print!("{}", item.url);
    let line_len = SWATCH_COLUMN_WIDTH + TITLE_COLUMN_WIDTH + BYLINE_COLUMN_WIDTH + display_width(&item.url);
    print!("{}", " ".repeat(cols.saturating_sub(line_len)));

    print!("{}", Theme::reset());
    row + 1
}
