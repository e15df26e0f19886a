//! Query input box.
//!
//! The border uses the focus color while keystrokes go to the query, and a
//! block cursor follows the text.

use crate::ui::helpers::{display_width, position_cursor, truncate_left};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

const SEARCH_BOX_MARGIN: usize = 2;
const LABEL: &str = " Search: ";

/// Renders the three-line query box, returning the next row.
pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let border_color = if search.is_focused {
        &theme.colors.search_bar_focus
    } else {
        &theme.colors.search_bar_border
    };
    let margin = " ".repeat(SEARCH_BOX_MARGIN);

    position_cursor(row, 1);
    print!("{margin}{}┌{}┐{}", Theme::fg(border_color), "─".repeat(inner_width), Theme::reset());

    let cursor = if search.is_focused { "█" } else { "" };
    let room = inner_width.saturating_sub(LABEL.len() + display_width(cursor));
    let query = truncate_left(&search.query, room);
    let padding = room.saturating_sub(display_width(&query));

    position_cursor(row + 1, 1);
    print!("{margin}{}│", Theme::fg(border_color));
    print!("{}{LABEL}", Theme::fg(&theme.colors.text_dim));
    print!("{}{query}{cursor}", Theme::fg(&theme.colors.text_normal));
    print!("{}", " ".repeat(padding));
    print!("{}│{}", Theme::fg(border_color), Theme::reset());

    position_cursor(row + 2, 1);
    print!("{margin}{}└{}┘{}", Theme::fg(border_color), "─".repeat(inner_width), Theme::reset());

    row + 3
}
