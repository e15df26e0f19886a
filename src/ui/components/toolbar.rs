//! Sort toggle and color palette row.

use crate::app::state::TOOLBAR_PREFIX_WIDTH;
use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{SwatchItem, ToolbarInfo};

/// Renders the toolbar, returning the next row.
pub fn render_toolbar(row: usize, toolbar: &ToolbarInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    let check = if toolbar.sort_latest { "x" } else { " " };
    let sort_color = if toolbar.sort_latest {
        &theme.colors.accent_fg
    } else {
        &theme.colors.text_normal
    };
    print!(" {}[{check}] Latest{}", Theme::fg(sort_color), Theme::reset());

    print!("{}", Theme::fg(&theme.colors.border));
    print!("  │");
    print!("{}", Theme::reset());
    print!("{}", if toolbar.overflow_left { "‹" } else { " " });

    let mut used = TOOLBAR_PREFIX_WIDTH;
    for swatch in &toolbar.swatches {
        render_swatch(swatch, theme);
        used += swatch.width();
    }
    print!("{}", " ".repeat(cols.saturating_sub(used)));

    if toolbar.overflow_right && cols > 0 {
        position_cursor(row, cols);
        print!("{}›{}", Theme::fg(&theme.colors.text_dim), Theme::reset());
    }

    row + 1
}

fn render_swatch(swatch: &SwatchItem, theme: &Theme) {
    print!("{}■{} ", Theme::fg(swatch.color.swatch_hex()), Theme::reset());

    if swatch.is_cursor {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else if swatch.is_active {
        print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.accent_fg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    if swatch.is_active {
        print!("{}", Theme::underline());
    }

    print!("{}{}  ", swatch.color, Theme::reset());
}
