//! Shared rendering utilities.
//!
//! Text helpers here operate on character counts, never byte lengths, so
//! titles and photographer names with non-ASCII characters neither panic
//! on slicing nor misalign columns.
//!
//! # Example
//!
//! ```rust
//! use zunsplash::ui::helpers::{highlighted_text, truncate_chars};
//! use zunsplash::ui::Theme;
//!
//! let title = truncate_chars("A very long description of a foggy valley", 12);
//! assert_eq!(title, "A very lo...");
//!
//! let styled = highlighted_text("foggy", &[(0, 3)], &Theme::default(), false);
//! assert!(styled.contains("fog"));
//! ```

use crate::ui::theme::Theme;

const ELLIPSIS: &str = "...";

/// Moves the cursor to a 1-indexed row and column.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Number of terminal columns `text` occupies (one per character).
#[must_use]
pub fn display_width(text: &str) -> usize {
    text.chars().count()
}

/// Truncates `text` to at most `max` characters, marking the cut with "...".
#[must_use]
pub fn truncate_chars(text: &str, max: usize) -> String {
    if display_width(text) <= max {
        return text.to_string();
    }
    if max <= ELLIPSIS.len() {
        return text.chars().take(max).collect();
    }
    let kept: String = text.chars().take(max - ELLIPSIS.len()).collect();
    format!("{kept}{ELLIPSIS}")
}

/// Truncates `text` from the left, keeping its tail.
///
/// Used for URLs, where the distinguishing part is at the end.
#[must_use]
pub fn truncate_left(text: &str, max: usize) -> String {
    let width = display_width(text);
    if width <= max {
        return text.to_string();
    }
    if max <= ELLIPSIS.len() {
        return text.chars().skip(width - max).collect();
    }
    let kept: String = text.chars().skip(width - (max - ELLIPSIS.len())).collect();
    format!("{ELLIPSIS}{kept}")
}

/// Left and right padding that centers `width` columns within `cols`.
#[must_use]
pub const fn centered(width: usize, cols: usize) -> (usize, usize) {
    let left = cols.saturating_sub(width) / 2;
    (left, cols.saturating_sub(left + width))
}

/// Builds `text` with highlighted character ranges.
///
/// Ranges are `(start, end)` character indices, end exclusive, and are
/// clamped to the text. When `is_selected` is true the text is returned
/// unstyled so that it does not fight the selection colors.
#[must_use]
pub fn highlighted_text(text: &str, ranges: &[(usize, usize)], theme: &Theme, is_selected: bool) -> String {
    if ranges.is_empty() || is_selected {
        return text.to_string();
    }

    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len() + ranges.len() * 48);
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.clamp(current_pos, chars.len());
        let end = end.clamp(start, chars.len());

        out.extend(&chars[current_pos..start]);
        out.push_str(&Theme::fg(&theme.colors.match_highlight_fg));
        out.push_str(&Theme::bg(&theme.colors.match_highlight_bg));
        out.extend(&chars[start..end]);
        out.push_str(Theme::reset());
        out.push_str(&Theme::fg(&theme.colors.text_normal));

        current_pos = end;
    }

    out.extend(&chars[current_pos..]);
    out
}
