//! Centered message shown in place of the grid.

use crate::ui::helpers::{centered, display_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::StatusMessage;

pub fn render_status(row: usize, status: &StatusMessage, theme: &Theme, cols: usize) -> usize {
    let (left, right) = centered(display_width(&status.message), cols);
    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.status_fg));
    print!("{}{}{}", " ".repeat(left), status.message, " ".repeat(right));
    print!("{}", Theme::reset());

    let (left, right) = centered(display_width(&status.subtitle), cols);
    position_cursor(row + 1, 1);
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}{}{}", " ".repeat(left), status.subtitle, " ".repeat(right));
    print!("{}", Theme::reset());

    row + 2
}
