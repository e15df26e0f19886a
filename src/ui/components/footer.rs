//! Keybinding hints and the notice line.

use crate::ui::helpers::{centered, display_width, position_cursor, truncate_chars};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the hint line at `row` and the notice line below it.
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    let help_text = truncate_chars(&footer.keybindings, cols);
    let (left, right) = centered(display_width(&help_text), cols);

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}{help_text}{}", " ".repeat(left), " ".repeat(right));
    print!("{}", Theme::reset());

    position_cursor(row + 1, 1);
    if let Some(notice) = &footer.notice {
        let notice = truncate_chars(notice, cols);
        let (left, right) = centered(display_width(&notice), cols);
        print!("{}", Theme::fg(&theme.colors.error_fg));
        print!("{}{notice}{}", " ".repeat(left), " ".repeat(right));
        print!("{}", Theme::reset());
    } else {
        print!("{}", " ".repeat(cols));
    }

    row + 2
}
