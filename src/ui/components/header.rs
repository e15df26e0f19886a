//! Title bar: plugin name on the left, active filters on the right.

use crate::ui::helpers::{display_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the title bar, returning the next row.
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title_len = display_width(&header.title);
    let summary_len = display_width(&header.summary);

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }

    print!("{}{}{}", Theme::bold(), header.title, Theme::reset());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }

    if title_len + summary_len <= cols {
        print!("{}", " ".repeat(cols - title_len - summary_len));
        print!("{}", header.summary);
    } else {
        print!("{}", " ".repeat(cols.saturating_sub(title_len)));
    }

    print!("{}", Theme::reset());
    row + 1
}
