//! Composable UI component renderers.
//!
//! Each component renders one part of the screen at a given row and returns
//! the next free row.
//!
//! # Components
//!
//! - [`header`]: Title bar with the active filter summary
//! - [`search`]: Query input box
//! - [`toolbar`]: Sort toggle and color palette
//! - [`grid`]: Results with swatch, title, byline, and URL columns
//! - [`status`]: Prompt, loading, and no-results messages
//! - [`pagination`]: Prev / Next controls
//! - [`footer`]: Keybinding hints and the notice line

mod footer;
mod grid;
mod header;
mod pagination;
mod search;
mod status;
mod toolbar;

pub use pagination::page_label;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use footer::render_footer;
use grid::{render_grid_headers, render_grid_rows};
use header::render_header;
use pagination::render_pagination;
use search::render_search_bar;
use status::render_status;
use toolbar::render_toolbar;

/// Renders a horizontal border line and returns the next row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the full layout.
///
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Search Bar - 3 lines]
/// [Toolbar]
/// [Border]
/// [Grid Headers]
/// [Grid Rows | Status Message]
/// [Pagination]
/// [Border]
/// [Footer]
/// [Notice]
/// ```
pub fn render_layout(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_search_bar(current_row, &vm.search_bar, theme, cols);
    current_row = render_toolbar(current_row, &vm.toolbar, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);

    if let Some(status) = &vm.status {
        render_status(current_row + 1, status, theme, cols);
    } else if !vm.display_items.is_empty() {
        current_row = render_grid_headers(current_row, theme);
        render_grid_rows(current_row, &vm.display_items, theme, cols);
    }

    let footer_row = rows.saturating_sub(1);
    let border_row = footer_row.saturating_sub(1);
    let pagination_row = border_row.saturating_sub(1);

    if let Some(pagination) = &vm.pagination {
        render_pagination(pagination_row, pagination, theme, cols);
    }
    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_row, &vm.footer, theme, cols);
}
