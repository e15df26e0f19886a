//! Application state management and view model computation.
//!
//! This module defines [`SearchState`], the record of the current query,
//! filters, results, and pagination position, and [`AppState`], which wraps it
//! with UI-only state (focus, selection, palette cursor, theme) and the request
//! sequence counter.
//!
//! # Transitions
//!
//! `SearchState` is mutated only through its transition methods:
//!
//! - [`SearchState::begin`]: a fetch was issued
//! - [`SearchState::complete`]: the fetch returned a page
//! - [`SearchState::fail`]: the fetch settled with an error
//!
//! [`AppState::run_search`] and [`AppState::resolve_search`] wrap the first and
//! the last two with sequence-number fencing: only the response to the most
//! recently issued request is applied.
//!
//! # Example
//!
//! ```rust
//! use zunsplash::app::{Action, AppState};
//! use zunsplash::api::SearchPage;
//! use zunsplash::ui::Theme;
//!
//! let mut state = AppState::new(Theme::default());
//! state.search.query_text = "mountains".to_string();
//! let Action::Fetch(request) = state.run_search(1) else { unreachable!() };
//! assert!(state.search.is_loading);
//!
//! let page = SearchPage { photos: vec![], total_pages: 1, total: Some(0) };
//! assert!(state.resolve_search(request.seq, &Ok(page)));
//! assert_eq!(state.search.results, Some(vec![]));
//! ```

use super::modes::{Focus, ResultStatus, SearchPhase};
use crate::api::{SearchPage, SearchRequest};
use crate::app::Action;
use crate::domain::{Color, Photo, SearchError, SortMode};
use crate::ui::helpers::{truncate_chars, truncate_left};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    DisplayItem, FooterInfo, HeaderInfo, PaginationInfo, SearchBarInfo, StatusMessage,
    SwatchItem, ToolbarInfo, UIViewModel,
};
use fuzzy_matcher::skim::SkimMatcherV2;

/// Rows used by everything except the results grid.
const CHROME_ROWS: usize = 13;

/// Width of the sort toggle at the start of the toolbar, including separator.
pub const TOOLBAR_PREFIX_WIDTH: usize = 15;

/// Width of the title column in the results grid.
pub const TITLE_COLUMN_WIDTH: usize = 40;

/// Width of the byline column in the results grid.
pub const BYLINE_COLUMN_WIDTH: usize = 30;

/// Width of the swatch column in the results grid.
pub const SWATCH_COLUMN_WIDTH: usize = 2;

/// The current query, filters, results, and pagination position.
///
/// # Invariants
///
/// - `page >= 1` and `total_pages >= 1`
/// - `page <= total_pages` once a search has completed
/// - `results == None`: no search performed yet (or one is in flight)
/// - `results == Some(vec![])`: a search completed with zero matches
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    pub query_text: String,
    pub color_filter: Option<Color>,
    pub sort_mode: SortMode,
    pub page: u32,
    pub total_pages: u32,
    pub results: Option<Vec<Photo>>,
    /// Total matches across all pages, when the endpoint reports it.
    pub total_matches: Option<u64>,
    pub is_loading: bool,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            query_text: String::new(),
            color_filter: None,
            sort_mode: SortMode::Relevance,
            page: 1,
            total_pages: 1,
            results: None,
            total_matches: None,
            is_loading: false,
        }
    }
}

impl SearchState {
    /// Records that a fetch for `page` was issued.
    ///
    /// Clears results and resets the page count so that nothing from the
    /// previous search is rendered while the new one is in flight.
    pub fn begin(&mut self, page: u32) {
        self.is_loading = true;
        self.results = None;
        self.total_matches = None;
        self.total_pages = 1;
        self.page = page.max(1);
    }

    /// Applies a successfully decoded page.
    pub fn complete(&mut self, page: SearchPage) {
        self.total_pages = page.total_pages.max(1);
        self.page = self.page.clamp(1, self.total_pages);
        self.results = Some(page.photos);
        self.total_matches = page.total;
        self.is_loading = false;
    }

    /// Applies a failed search: an empty result set on a single page.
    ///
    /// The loading flag is cleared for every error kind, transport failures
    /// included, so a failed request never leaves the UI stuck on "Loading".
    pub fn fail(&mut self) {
        self.results = Some(Vec::new());
        self.total_matches = None;
        self.total_pages = 1;
        self.page = 1;
        self.is_loading = false;
    }

    /// Whether the query has any non-whitespace text. Every fetch rule and
    /// the derived phase use this one test.
    #[must_use]
    pub fn has_query(&self) -> bool {
        is_searchable(&self.query_text)
    }

    /// Whether any result page (possibly empty) is present.
    #[must_use]
    pub const fn has_results(&self) -> bool {
        self.results.is_some()
    }

    /// Whether pagination controls are shown at all.
    #[must_use]
    pub const fn shows_pagination(&self) -> bool {
        self.total_pages > 1
    }

    /// Prev is disabled on the first page.
    #[must_use]
    pub const fn prev_enabled(&self) -> bool {
        self.page > 1
    }

    /// Next is disabled on the last page.
    #[must_use]
    pub const fn next_enabled(&self) -> bool {
        self.page < self.total_pages
    }

    #[must_use]
    pub fn phase(&self) -> SearchPhase {
        if self.is_loading {
            SearchPhase::Searching
        } else if self.has_query() {
            SearchPhase::Ready
        } else {
            SearchPhase::Idle
        }
    }

    /// What the results area should show.
    #[must_use]
    pub fn status(&self) -> ResultStatus {
        if self.is_loading {
            return ResultStatus::Loading;
        }
        match &self.results {
            Some(photos) if !photos.is_empty() => ResultStatus::Results,
            Some(_) if self.has_query() => ResultStatus::NoResults,
            None if !self.has_query() => ResultStatus::Prompt,
            _ => ResultStatus::Blank,
        }
    }
}

fn is_searchable(query: &str) -> bool {
    !query.trim().is_empty()
}

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Query, filters, results, and pagination.
    pub search: SearchState,

    /// Which area receives keystrokes.
    pub focus: Focus,

    /// Zero-based index of the selected photo within the current results.
    pub selected_index: usize,

    /// Index into [`Color::ALL`] of the palette cursor.
    pub palette_cursor: usize,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    /// Message describing the most recent failure, shown on the notice line.
    pub last_error: Option<String>,

    /// Host answer to the web access request; `None` until it arrives.
    pub web_access: Option<bool>,

    /// Query of the most recently submitted search. Page changes reuse it,
    /// so edits in the query box do not leak into pagination.
    active_query: String,

    /// Sequence number of the most recently issued request.
    latest_seq: u64,
}

impl AppState {
    /// Creates the initial state: empty query, no filter, relevance order,
    /// page 1 of 1, no results, not loading.
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self {
            search: SearchState::default(),
            focus: Focus::Query,
            selected_index: 0,
            palette_cursor: 0,
            theme,
            last_error: None,
            web_access: None,
            active_query: String::new(),
            latest_seq: 0,
        }
    }

    /// Sequence number of the most recently issued request (0 before any).
    #[must_use]
    pub const fn latest_seq(&self) -> u64 {
        self.latest_seq
    }

    /// Query the current results belong to.
    #[must_use]
    pub fn active_query(&self) -> &str {
        &self.active_query
    }

    /// Fails unless the host granted web access. Requests sent without it
    /// are dropped by the host and never answered.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Transport`] while access is denied or pending.
    pub fn ensure_web_access(&self) -> Result<(), SearchError> {
        match self.web_access {
            Some(true) => Ok(()),
            Some(false) => Err(SearchError::Transport("web access not granted".to_string())),
            None => Err(SearchError::Transport("web access not granted yet".to_string())),
        }
    }

    /// Starts a search for `page` with the current query, color, and sort.
    ///
    /// Updates state to the in-flight shape and returns the single
    /// [`Action::Fetch`] that must be executed. Any earlier in-flight request
    /// is superseded: its response will be discarded by
    /// [`resolve_search`](Self::resolve_search).
    pub fn run_search(&mut self, page: u32) -> Action {
        self.active_query = self.search.query_text.clone();
        self.issue(page)
    }

    /// Moves to `page` of the active search with the current color and sort.
    ///
    /// Returns `None` when no search has been submitted.
    pub fn turn_page(&mut self, page: u32) -> Option<Action> {
        if !is_searchable(&self.active_query) {
            return None;
        }
        Some(self.issue(page))
    }

    fn issue(&mut self, page: u32) -> Action {
        self.latest_seq += 1;
        self.search.begin(page);
        self.selected_index = 0;
        self.last_error = None;

        let request = SearchRequest::new(
            self.latest_seq,
            self.active_query.clone(),
            self.search.page,
            self.search.color_filter,
            self.search.sort_mode,
        );

        tracing::debug!(
            seq = request.seq,
            page = request.page,
            color = ?request.color,
            sort = ?request.sort,
            query_len = request.query.len(),
            "search issued"
        );

        Action::Fetch(request)
    }

    /// Applies the outcome of request `seq`.
    ///
    /// Returns `false` (and leaves state untouched) if `seq` is not the most
    /// recently issued request.
    pub fn resolve_search(&mut self, seq: u64, outcome: &Result<SearchPage, SearchError>) -> bool {
        if seq != self.latest_seq {
            tracing::debug!(seq, latest_seq = self.latest_seq, "discarding stale search response");
            return false;
        }

        match outcome {
            Ok(page) => {
                tracing::debug!(
                    seq,
                    result_count = page.photos.len(),
                    total_pages = page.total_pages,
                    "search completed"
                );
                self.search.complete(page.clone());
                self.last_error = None;
            }
            Err(e) => {
                tracing::warn!(seq, kind = e.kind(), error = %e, "search failed");
                self.search.fail();
                self.last_error = Some(e.to_string());
            }
        }

        self.clamp_selection();
        true
    }

    /// Photos of the current page, empty if none.
    #[must_use]
    pub fn photos(&self) -> &[Photo] {
        self.search.results.as_deref().unwrap_or_default()
    }

    /// Returns the currently selected photo, if any.
    #[must_use]
    pub fn selected_photo(&self) -> Option<&Photo> {
        self.photos().get(self.selected_index)
    }

    /// Moves selection down by one position, wrapping to the top.
    pub fn move_selection_down(&mut self) {
        let len = self.photos().len();
        if len == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % len;
    }

    /// Moves selection up by one position, wrapping to the bottom.
    pub fn move_selection_up(&mut self) {
        let len = self.photos().len();
        if len == 0 {
            return;
        }
        self.selected_index = if self.selected_index == 0 { len - 1 } else { self.selected_index - 1 };
    }

    fn clamp_selection(&mut self) {
        let len = self.photos().len();
        self.selected_index = if len == 0 { 0 } else { self.selected_index.min(len - 1) };
    }

    /// Color under the palette cursor.
    #[must_use]
    pub fn palette_color(&self) -> Color {
        Color::ALL[self.palette_cursor % Color::ALL.len()]
    }

    /// Moves the palette cursor right, wrapping.
    pub fn palette_next(&mut self) {
        self.palette_cursor = (self.palette_cursor + 1) % Color::ALL.len();
    }

    /// Moves the palette cursor left, wrapping.
    pub fn palette_prev(&mut self) {
        self.palette_cursor = if self.palette_cursor == 0 {
            Color::ALL.len() - 1
        } else {
            self.palette_cursor - 1
        };
    }

    /// Computes a renderable UI view model for a `rows` x `cols` pane.
    ///
    /// # Windowing
    ///
    /// Grid rows are windowed around the selection the same way for every
    /// page: the selected photo sits mid-window when possible, and the window
    /// is pulled back near the end so it stays full.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let photos = self.photos();
        let available_rows = rows.saturating_sub(CHROME_ROWS).max(1);

        let mut visible_start = self.selected_index.saturating_sub(available_rows / 2).min(photos.len());
        let visible_end = (visible_start + available_rows).min(photos.len());
        if visible_end - visible_start < available_rows && photos.len() >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let matcher = if self.search.has_query() && !photos.is_empty() {
            Some(SkimMatcherV2::default())
        } else {
            None
        };

        let display_items = photos[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, photo)| {
                self.compute_display_item(photo, visible_start + relative_idx, cols, matcher.as_ref())
            })
            .collect();

        UIViewModel {
            header: self.compute_header(),
            search_bar: SearchBarInfo {
                query: self.search.query_text.clone(),
                is_focused: self.focus == Focus::Query,
            },
            toolbar: self.compute_toolbar(cols),
            display_items,
            selected_index: self.selected_index.saturating_sub(visible_start),
            status: self.compute_status(),
            pagination: self.compute_pagination(),
            footer: self.compute_footer(),
        }
    }

    fn compute_display_item(
        &self,
        photo: &Photo,
        absolute_idx: usize,
        cols: usize,
        matcher: Option<&SkimMatcherV2>,
    ) -> DisplayItem {
        let title = truncate_chars(photo.title(), TITLE_COLUMN_WIDTH - 2);

        let byline = match (photo.photographer.as_deref(), photo.time_ago()) {
            (Some(name), Some(age)) => format!("{name} · {age}"),
            (Some(name), None) => name.to_string(),
            (None, Some(age)) => age,
            (None, None) => String::new(),
        };
        let byline = truncate_chars(&byline, BYLINE_COLUMN_WIDTH - 2);

        let url_width = cols.saturating_sub(SWATCH_COLUMN_WIDTH + TITLE_COLUMN_WIDTH + BYLINE_COLUMN_WIDTH);
        let url = truncate_left(&photo.image_url, url_width);

        let highlight_ranges = matcher.map_or_else(Vec::new, |m| self.compute_highlight_ranges(&title, m));

        DisplayItem {
            title,
            byline,
            url,
            swatch: photo.dominant_color.clone(),
            is_selected: self.focus == Focus::Results && absolute_idx == self.selected_index,
            highlight_ranges,
        }
    }

    /// Coalesces fuzzy-match indices of the query in `text` into ranges.
    fn compute_highlight_ranges(&self, text: &str, matcher: &SkimMatcherV2) -> Vec<(usize, usize)> {
        use fuzzy_matcher::FuzzyMatcher;

        let Some((_score, indices)) = matcher.fuzzy_indices(text, &self.search.query_text) else {
            return vec![];
        };

        let mut ranges: Vec<(usize, usize)> = Vec::new();
        for idx in indices {
            match ranges.last_mut() {
                Some((_, end)) if *end == idx => *end = idx + 1,
                _ => ranges.push((idx, idx + 1)),
            }
        }
        ranges
    }

    fn compute_header(&self) -> HeaderInfo {
        let mut parts = Vec::new();
        if self.search.phase() == SearchPhase::Searching {
            parts.push("searching".to_string());
        }
        parts.push(if self.search.sort_mode.is_latest() { "latest" } else { "relevance" }.to_string());
        parts.push(self.search.color_filter.map_or_else(|| "any color".to_string(), |c| c.to_string()));
        if let Some(photos) = &self.search.results {
            let count = self.search.total_matches.unwrap_or(photos.len() as u64);
            parts.push(format!("{count} photos"));
        }

        HeaderInfo {
            title: " Unsplash Search ".to_string(),
            summary: format!(" {} ", parts.join(" · ")),
        }
    }

    /// Picks the palette window so the cursor is always visible.
    fn compute_toolbar(&self, cols: usize) -> ToolbarInfo {
        let all: Vec<SwatchItem> = Color::ALL
            .iter()
            .enumerate()
            .map(|(idx, &color)| SwatchItem {
                color,
                is_active: self.search.color_filter == Some(color),
                is_cursor: self.focus == Focus::Palette && idx == self.palette_cursor,
            })
            .collect();

        let budget = cols.saturating_sub(TOOLBAR_PREFIX_WIDTH);
        let window_end = |start: usize| {
            let mut used = 0;
            let mut end = start;
            while end < all.len() && used + all[end].width() <= budget {
                used += all[end].width();
                end += 1;
            }
            end.max(start + 1).min(all.len())
        };

        let mut start = 0;
        while self.palette_cursor >= window_end(start) && start < self.palette_cursor {
            start += 1;
        }
        let end = window_end(start);

        ToolbarInfo {
            sort_latest: self.search.sort_mode.is_latest(),
            overflow_left: start > 0,
            overflow_right: end < all.len(),
            swatches: all[start..end].to_vec(),
            is_focused: self.focus == Focus::Palette,
        }
    }

    fn compute_status(&self) -> Option<StatusMessage> {
        let (message, subtitle) = match self.search.status() {
            ResultStatus::Prompt => (
                "Enter search term to find images".to_string(),
                "Type a query and press Enter".to_string(),
            ),
            ResultStatus::Loading => (
                "Loading...".to_string(),
                format!("Searching for \"{}\"", self.search.query_text),
            ),
            ResultStatus::NoResults => (
                "No results found".to_string(),
                "Try another query or clear the color filter".to_string(),
            ),
            ResultStatus::Results | ResultStatus::Blank => return None,
        };
        Some(StatusMessage { message, subtitle })
    }

    fn compute_pagination(&self) -> Option<PaginationInfo> {
        self.search.shows_pagination().then(|| PaginationInfo {
            current: self.search.page,
            total: self.search.total_pages,
            prev_enabled: self.search.prev_enabled(),
            next_enabled: self.search.next_enabled(),
        })
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.focus {
            Focus::Query => "Enter: search  Tab: colors  Esc: results  Ctrl+u: clear",
            Focus::Results => "j/k: select  h/l: page  s: latest  c: colors  /: edit query  q: quit",
            Focus::Palette => "h/l: move  Enter: toggle color  s: latest  Esc: results  /: edit query",
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
            notice: self.last_error.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photos(n: usize) -> Vec<Photo> {
        (0..n)
            .map(|i| Photo::new(format!("id-{i}"), format!("https://images.example/{i}")))
            .collect()
    }

    fn page(n: usize, total_pages: u32) -> SearchPage {
        SearchPage { photos: photos(n), total_pages, total: None }
    }

    fn searching(query: &str) -> (AppState, u64) {
        let mut state = AppState::new(Theme::default());
        state.search.query_text = query.to_string();
        let Action::Fetch(request) = state.run_search(1) else { unreachable!() };
        (state, request.seq)
    }

    #[test]
    fn initial_state_matches_defaults() {
        let state = AppState::new(Theme::default());
        assert_eq!(state.search, SearchState::default());
        assert_eq!(state.search.page, 1);
        assert_eq!(state.search.total_pages, 1);
        assert!(state.search.results.is_none());
        assert!(!state.search.is_loading);
        assert_eq!(state.search.phase(), SearchPhase::Idle);
        assert_eq!(state.search.status(), ResultStatus::Prompt);
        assert_eq!(state.latest_seq(), 0);
    }

    #[test]
    fn run_search_resets_to_in_flight_shape() {
        let mut state = AppState::new(Theme::default());
        state.search.query_text = "mountains".to_string();
        state.search.results = Some(photos(3));
        state.search.total_pages = 4;
        state.search.page = 2;

        let Action::Fetch(request) = state.run_search(3) else { unreachable!() };

        assert!(state.search.is_loading);
        assert!(state.search.results.is_none());
        assert_eq!(state.search.total_pages, 1);
        assert_eq!(state.search.page, 3);
        assert_eq!(state.search.phase(), SearchPhase::Searching);
        assert_eq!(request.page, 3);
        assert_eq!(request.per_page, 9);
        assert_eq!(request.query, "mountains");
    }

    #[test]
    fn success_sets_results_and_page_count() {
        let (mut state, seq) = searching("mountains");
        assert!(state.resolve_search(seq, &Ok(page(9, 5))));

        assert_eq!(state.photos().len(), 9);
        assert_eq!(state.search.total_pages, 5);
        assert_eq!(state.search.page, 1);
        assert!(!state.search.is_loading);
        assert_eq!(state.search.status(), ResultStatus::Results);
    }

    #[test]
    fn endpoint_error_yields_empty_single_page() {
        let (mut state, seq) = searching("mountains");
        let err = SearchError::Endpoint(vec!["Rate Limit Exceeded".to_string()]);
        assert!(state.resolve_search(seq, &Err(err)));

        assert_eq!(state.search.results, Some(vec![]));
        assert_eq!(state.search.total_pages, 1);
        assert!(!state.search.is_loading);
        assert_eq!(state.last_error.as_deref(), Some("search rejected: Rate Limit Exceeded"));
    }

    #[test]
    fn transport_error_clears_loading_flag() {
        let (mut state, seq) = searching("mountains");
        let err = SearchError::Transport("connection refused".to_string());
        assert!(state.resolve_search(seq, &Err(err)));

        assert_eq!(state.search.results, Some(vec![]));
        assert_eq!(state.search.total_pages, 1);
        assert!(!state.search.is_loading);
        assert_eq!(state.search.status(), ResultStatus::NoResults);
    }

    #[test]
    fn stale_responses_are_discarded() {
        let (mut state, first) = searching("mountains");
        let Action::Fetch(second) = state.run_search(2) else { unreachable!() };

        assert!(!state.resolve_search(first, &Ok(page(9, 5))));
        assert!(state.search.is_loading);
        assert!(state.search.results.is_none());

        assert!(state.resolve_search(second.seq, &Ok(page(2, 2))));
        assert_eq!(state.photos().len(), 2);
        assert_eq!(state.search.page, 2);

        assert!(!state.resolve_search(first, &Ok(page(9, 5))));
        assert_eq!(state.photos().len(), 2);
    }

    #[test]
    fn page_is_clamped_when_fewer_pages_are_reported() {
        let mut state = AppState::new(Theme::default());
        state.search.query_text = "x".to_string();
        let Action::Fetch(request) = state.run_search(4) else { unreachable!() };
        state.resolve_search(request.seq, &Ok(page(1, 2)));
        assert_eq!(state.search.page, 2);
        assert_eq!(state.search.total_pages, 2);
    }

    #[test]
    fn pagination_enablement_follows_position() {
        let mut search = SearchState { total_pages: 3, ..SearchState::default() };
        assert!(search.shows_pagination());
        assert!(!search.prev_enabled());
        assert!(search.next_enabled());

        search.page = 2;
        assert!(search.prev_enabled());
        assert!(search.next_enabled());

        search.page = 3;
        assert!(search.prev_enabled());
        assert!(!search.next_enabled());

        search.total_pages = 1;
        search.page = 1;
        assert!(!search.shows_pagination());
    }

    #[test]
    fn status_is_blank_for_unsubmitted_query() {
        let mut search = SearchState::default();
        search.query_text = "owl".to_string();
        assert_eq!(search.phase(), SearchPhase::Ready);
        assert_eq!(search.status(), ResultStatus::Blank);

        search.query_text.clear();
        search.results = Some(vec![]);
        assert_eq!(search.status(), ResultStatus::Blank);
    }

    #[test]
    fn selection_wraps_and_is_clamped_after_new_results() {
        let (mut state, seq) = searching("mountains");
        state.resolve_search(seq, &Ok(page(3, 1)));

        state.move_selection_up();
        assert_eq!(state.selected_index, 2);
        state.move_selection_down();
        assert_eq!(state.selected_index, 0);

        state.selected_index = 2;
        let Action::Fetch(next) = state.run_search(1) else { unreachable!() };
        assert_eq!(state.selected_index, 0);
        state.resolve_search(next.seq, &Ok(page(1, 1)));
        assert_eq!(state.selected_photo().map(|p| p.id.as_str()), Some("id-0"));
    }

    #[test]
    fn palette_cursor_wraps() {
        let mut state = AppState::new(Theme::default());
        state.palette_prev();
        assert_eq!(state.palette_color(), Color::Blue);
        state.palette_next();
        assert_eq!(state.palette_color(), Color::BlackAndWhite);
    }

    #[test]
    fn viewmodel_shows_prompt_on_fresh_state() {
        let state = AppState::new(Theme::default());
        let vm = state.compute_viewmodel(30, 120);
        let status = vm.status.expect("prompt");
        assert_eq!(status.message, "Enter search term to find images");
        assert!(vm.pagination.is_none());
        assert!(vm.display_items.is_empty());
        assert!(vm.search_bar.is_focused);
    }

    #[test]
    fn viewmodel_exposes_pagination_and_grid() {
        let (mut state, seq) = searching("mountains");
        state.resolve_search(seq, &Ok(page(9, 5)));
        state.focus = Focus::Results;

        let vm = state.compute_viewmodel(40, 140);
        assert_eq!(vm.display_items.len(), 9);
        assert!(vm.display_items[0].is_selected);
        assert!(vm.status.is_none());
        assert_eq!(
            vm.pagination,
            Some(PaginationInfo { current: 1, total: 5, prev_enabled: false, next_enabled: true })
        );
        assert_eq!(vm.header.summary, " relevance · any color · 9 photos ");
    }

    #[test]
    fn header_counts_all_reported_matches() {
        let (mut state, seq) = searching("mountains");
        let page = SearchPage { photos: photos(9), total_pages: 15, total: Some(133) };
        state.resolve_search(seq, &Ok(page));
        assert_eq!(state.compute_viewmodel(40, 140).header.summary, " relevance · any color · 133 photos ");

        let Action::Fetch(next) = state.run_search(2) else { unreachable!() };
        assert_eq!(state.search.total_matches, None);
        state.resolve_search(next.seq, &Err(SearchError::Transport("reset".to_string())));
        assert_eq!(state.compute_viewmodel(40, 140).header.summary, " relevance · any color · 0 photos ");
        assert_eq!(state.search.page, 1);
    }

    #[test]
    fn viewmodel_windows_grid_to_available_rows() {
        let (mut state, seq) = searching("mountains");
        state.resolve_search(seq, &Ok(page(9, 1)));
        state.selected_index = 8;

        let vm = state.compute_viewmodel(CHROME_ROWS + 4, 140);
        assert_eq!(vm.display_items.len(), 4);
        assert_eq!(vm.selected_index, 3);
    }

    #[test]
    fn toolbar_window_keeps_cursor_visible() {
        let mut state = AppState::new(Theme::default());
        state.focus = Focus::Palette;
        state.palette_cursor = 10;

        let vm = state.compute_viewmodel(30, 60);
        let toolbar = vm.toolbar;
        assert!(toolbar.overflow_left);
        assert!(!toolbar.overflow_right);
        assert_eq!(toolbar.swatches.last().map(|s| s.color), Some(Color::Blue));
        assert!(toolbar.swatches.last().is_some_and(|s| s.is_cursor));

        state.palette_cursor = 0;
        let toolbar = state.compute_viewmodel(30, 60).toolbar;
        assert!(!toolbar.overflow_left);
        assert!(toolbar.overflow_right);
        assert_eq!(toolbar.swatches[0].color, Color::BlackAndWhite);
    }

    #[test]
    fn highlight_ranges_cover_query_in_title() {
        let (mut state, seq) = searching("fog");
        let mut photo = Photo::new("a", "u");
        photo.description = Some("foggy hills".to_string());
        state.resolve_search(seq, &Ok(SearchPage { photos: vec![photo], total_pages: 1, total: None }));

        let vm = state.compute_viewmodel(30, 120);
        assert_eq!(vm.display_items[0].highlight_ranges, vec![(0, 3)]);
    }
}
