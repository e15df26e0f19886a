//! View model types representing renderable UI state.
//!
//! View models are computed from `AppState` by `AppState::compute_viewmodel`
//! and consumed by the renderer. They contain no business logic, only
//! display-ready data: truncated titles, highlight ranges, enabled flags.

use crate::domain::Color;

/// Complete UI view model for rendering.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Title bar.
    pub header: HeaderInfo,

    /// Query input box.
    pub search_bar: SearchBarInfo,

    /// Sort toggle and color palette.
    pub toolbar: ToolbarInfo,

    /// Visible slice of the results grid.
    pub display_items: Vec<DisplayItem>,

    /// Index of the selected item within `display_items`.
    pub selected_index: usize,

    /// Message shown in the results area (prompt, loading, no results).
    pub status: Option<StatusMessage>,

    /// Page controls, present only when there is more than one page.
    pub pagination: Option<PaginationInfo>,

    /// Key hints and the notice line.
    pub footer: FooterInfo,
}

/// Title bar information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text, left-aligned.
    pub title: String,

    /// Summary of active filters, right-aligned.
    pub summary: String,
}

/// Query input box information.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    /// Current query text.
    pub query: String,

    /// Whether keystrokes go to the query.
    pub is_focused: bool,
}

/// Sort toggle and palette information.
#[derive(Debug, Clone)]
pub struct ToolbarInfo {
    /// Whether latest-first ordering is on.
    pub sort_latest: bool,

    /// Palette entries that fit the terminal width, cursor kept visible.
    pub swatches: Vec<SwatchItem>,

    /// Whether more palette entries exist to the left / right of the window.
    pub overflow_left: bool,
    pub overflow_right: bool,

    /// Whether keystrokes go to the palette.
    pub is_focused: bool,
}

/// One color toggle in the palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwatchItem {
    pub color: Color,

    /// Whether this color is the active filter.
    pub is_active: bool,

    /// Whether the palette cursor is on this entry.
    pub is_cursor: bool,
}

impl SwatchItem {
    /// Rendered width: swatch block, space, label, two spaces of separation.
    #[must_use]
    pub fn width(&self) -> usize {
        self.color.as_str().len() + 4
    }
}

/// Display information for a single photo row.
#[derive(Debug, Clone)]
pub struct DisplayItem {
    /// Title (description or fallback), truncated to the title column.
    pub title: String,

    /// Photographer and age, e.g. "Ada Lovelace · 3d ago".
    pub byline: String,

    /// Image URL, truncated from the left to fit.
    pub url: String,

    /// Dominant color of the photo, used for the swatch.
    pub swatch: Option<String>,

    /// Whether this item is currently selected.
    pub is_selected: bool,

    /// Character ranges of `title` matching the query.
    ///
    /// Each tuple is `(start_index, end_index)` in character indices.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Message shown in the results area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    /// Primary message (e.g., "No results found").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

/// Pagination controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationInfo {
    pub current: u32,
    pub total: u32,
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

/// Footer information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text for the focused area.
    pub keybindings: String,

    /// Last error, if the most recent search failed.
    pub notice: Option<String>,
}
