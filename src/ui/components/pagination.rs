//! Prev / Next controls with the "current / total" label.

use crate::ui::helpers::{centered, display_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::PaginationInfo;

const PREV: &str = "‹ Prev (h)";
const NEXT: &str = "(l) Next ›";

/// Label between the controls, e.g. "2 / 5".
#[must_use]
pub fn page_label(pagination: &PaginationInfo) -> String {
    format!("{} / {}", pagination.current, pagination.total)
}

pub fn render_pagination(row: usize, pagination: &PaginationInfo, theme: &Theme, cols: usize) -> usize {
    let label = page_label(pagination);
    let width = display_width(PREV) + display_width(&label) + display_width(NEXT) + 6;
    let (left, right) = centered(width, cols);

    let control_color = |enabled: bool| {
        if enabled {
            Theme::fg(&theme.colors.accent_fg)
        } else {
            format!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim))
        }
    };

    position_cursor(row, 1);
    print!("{}", " ".repeat(left));
    print!("{}{PREV}{}", control_color(pagination.prev_enabled), Theme::reset());
    print!("   {}{label}{}   ", Theme::fg(&theme.colors.text_normal), Theme::reset());
    print!("{}{NEXT}{}", control_color(pagination.next_enabled), Theme::reset());
    print!("{}", " ".repeat(right));

    row + 1
}
