//! Event handling and state transition logic.
//!
//! [`handle_event`] is the single entry point that turns user intents and
//! host callbacks into state changes and [`Action`]s.
//!
//! # Event Types
//!
//! - **Query input**: `Char`, `Backspace`, `ClearQuery`, `Submit`
//! - **Filters**: `ToggleLatest`, `ToggleColor`, `ToggleSelectedColor`, `PaletteNext`, `PalettePrev`
//! - **Pagination**: `PrevPage`, `NextPage`
//! - **Navigation**: `SelectNext`, `SelectPrev`, `FocusQuery`, `FocusResults`, `FocusPalette`, `CloseFocus`
//! - **Host**: `SearchCompleted`, `PermissionsResult`
//!
//! # Fetch rules
//!
//! Editing the query never fetches. A submit fetches page 1 if the query has
//! any non-whitespace text. A filter or sort toggle always updates the filter,
//! and fetches page 1 only under the same condition. Prev/Next fetch the
//! adjacent page of the last submitted query, only when results exist and the
//! direction is enabled.
//!
//! # Example
//!
//! ```rust
//! use zunsplash::app::{handle_event, Action, AppState, Event};
//! use zunsplash::ui::Theme;
//!
//! let mut state = AppState::new(Theme::default());
//! for c in "owl".chars() {
//!     handle_event(&mut state, &Event::Char(c))?;
//! }
//! let (render, actions) = handle_event(&mut state, &Event::Submit)?;
//! assert!(render);
//! assert!(matches!(actions.as_slice(), [Action::Fetch(_)]));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use super::modes::Focus;
use crate::api::SearchPage;
use crate::app::{Action, AppState};
use crate::domain::{Color, Result, SearchError};

/// Events triggered by user input or host callbacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Appends a character to the query (query focus only).
    Char(char),
    /// Removes the last character from the query (query focus only).
    Backspace,
    /// Empties the query.
    ClearQuery,
    /// Runs a search for page 1 with the current query.
    Submit,

    /// Flips between relevance and latest-first ordering.
    ToggleLatest,
    /// Activates `color`, or deactivates it if it is already active.
    ToggleColor(Color),
    /// Toggles the color under the palette cursor.
    ToggleSelectedColor,
    /// Moves the palette cursor right.
    PaletteNext,
    /// Moves the palette cursor left.
    PalettePrev,

    /// Fetches the previous page.
    PrevPage,
    /// Fetches the next page.
    NextPage,

    /// Moves the result selection down (wraps to top).
    SelectNext,
    /// Moves the result selection up (wraps to bottom).
    SelectPrev,

    /// Sends keystrokes to the query input.
    FocusQuery,
    /// Sends keystrokes to the results grid.
    FocusResults,
    /// Sends keystrokes to the color palette.
    FocusPalette,
    /// Hides the plugin pane.
    CloseFocus,

    /// Outcome of the request with sequence number `seq`.
    SearchCompleted {
        seq: u64,
        outcome: std::result::Result<SearchPage, SearchError>,
    },

    /// Reports whether web access was granted.
    PermissionsResult {
        granted: bool,
    },
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// The returned flag tells the caller whether the UI should be re-rendered.
/// At most one [`Action::Fetch`] is emitted per event.
///
/// # Errors
///
/// Currently infallible; the `Result` keeps the signature stable for
/// transitions that may fail.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Char(c) => {
            if state.focus != Focus::Query {
                return Ok((false, vec![]));
            }
            state.search.query_text.push(*c);
            tracing::trace!(query_len = state.search.query_text.len(), "query updated");
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if state.focus != Focus::Query {
                return Ok((false, vec![]));
            }
            let changed = state.search.query_text.pop().is_some();
            Ok((changed, vec![]))
        }
        Event::ClearQuery => {
            if state.search.query_text.is_empty() {
                return Ok((false, vec![]));
            }
            state.search.query_text.clear();
            Ok((true, vec![]))
        }
        Event::Submit => {
            if !state.search.has_query() {
                tracing::debug!("submit with empty query ignored");
                return Ok((false, vec![]));
            }
            state.focus = Focus::Results;
            Ok((true, vec![state.run_search(1)]))
        }

        Event::ToggleLatest => {
            state.search.sort_mode = state.search.sort_mode.toggled();
            tracing::debug!(sort = ?state.search.sort_mode, "sort toggled");
            Ok((true, refetch_first_page(state)))
        }
        Event::ToggleColor(color) => {
            toggle_color(state, *color);
            Ok((true, refetch_first_page(state)))
        }
        Event::ToggleSelectedColor => {
            let color = state.palette_color();
            toggle_color(state, color);
            Ok((true, refetch_first_page(state)))
        }
        Event::PaletteNext => {
            state.palette_next();
            Ok((true, vec![]))
        }
        Event::PalettePrev => {
            state.palette_prev();
            Ok((true, vec![]))
        }

        Event::PrevPage => {
            if !can_paginate(state) || !state.search.prev_enabled() {
                return Ok((false, vec![]));
            }
            let page = state.search.page - 1;
            Ok(turn_page(state, page))
        }
        Event::NextPage => {
            if !can_paginate(state) || !state.search.next_enabled() {
                return Ok((false, vec![]));
            }
            let page = state.search.page + 1;
            Ok(turn_page(state, page))
        }

        Event::SelectNext => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::SelectPrev => {
            state.move_selection_up();
            Ok((true, vec![]))
        }

        Event::FocusQuery => Ok((set_focus(state, Focus::Query), vec![])),
        Event::FocusResults => Ok((set_focus(state, Focus::Results), vec![])),
        Event::FocusPalette => Ok((set_focus(state, Focus::Palette), vec![])),
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),

        Event::SearchCompleted { seq, outcome } => Ok((state.resolve_search(*seq, outcome), vec![])),

        Event::PermissionsResult { granted } => {
            state.web_access = Some(*granted);
            if *granted {
                tracing::info!("web access granted");
                if state.last_error.as_deref() == Some(PERMISSION_DENIED) {
                    state.last_error = None;
                }
            } else {
                tracing::warn!("web access denied");
                state.last_error = Some(PERMISSION_DENIED.to_string());
            }
            Ok((true, vec![]))
        }
    }
}

const PERMISSION_DENIED: &str = "web access permission denied; searches will fail";

fn toggle_color(state: &mut AppState, color: Color) {
    state.search.color_filter = if state.search.color_filter == Some(color) {
        None
    } else {
        Some(color)
    };
    state.palette_cursor = color.index();
    tracing::debug!(color = ?state.search.color_filter, "color filter toggled");
}

/// A filter change refetches page 1, but only for a non-empty query.
fn refetch_first_page(state: &mut AppState) -> Vec<Action> {
    if state.search.has_query() {
        vec![state.run_search(1)]
    } else {
        vec![]
    }
}

fn turn_page(state: &mut AppState, page: u32) -> (bool, Vec<Action>) {
    state.turn_page(page).map_or((false, vec![]), |action| (true, vec![action]))
}

fn can_paginate(state: &AppState) -> bool {
    state.search.has_results() && state.search.shows_pagination() && !state.search.is_loading
}

fn set_focus(state: &mut AppState, focus: Focus) -> bool {
    if state.focus == focus {
        return false;
    }
    state.focus = focus;
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Photo, SortMode};
    use crate::ui::Theme;

    fn typed(query: &str) -> AppState {
        let mut state = AppState::new(Theme::default());
        for c in query.chars() {
            handle_event(&mut state, &Event::Char(c)).expect("char");
        }
        state
    }

    fn fetch_of(actions: &[Action]) -> &crate::api::SearchRequest {
        match actions {
            [Action::Fetch(request)] => request,
            other => panic!("expected a single fetch, got {other:?}"),
        }
    }

    fn complete(state: &mut AppState, seq: u64, count: usize, total_pages: u32) {
        let photos = (0..count).map(|i| Photo::new(format!("p{i}"), format!("https://img/{i}"))).collect();
        let event = Event::SearchCompleted { seq, outcome: Ok(SearchPage { photos, total_pages, total: None }) };
        handle_event(state, &event).expect("completion");
    }

    #[test]
    fn typing_updates_query_without_fetching() {
        let mut state = AppState::new(Theme::default());
        let (render, actions) = handle_event(&mut state, &Event::Char('o')).expect("char");
        assert!(render);
        assert!(actions.is_empty());
        assert_eq!(state.search.query_text, "o");
        assert_eq!(state.latest_seq(), 0);

        handle_event(&mut state, &Event::Backspace).expect("backspace");
        assert!(state.search.query_text.is_empty());
    }

    #[test]
    fn typing_is_ignored_outside_query_focus() {
        let mut state = AppState::new(Theme::default());
        state.focus = Focus::Results;
        let (render, _) = handle_event(&mut state, &Event::Char('x')).expect("char");
        assert!(!render);
        assert!(state.search.query_text.is_empty());
    }

    #[test]
    fn submit_with_empty_query_does_nothing() {
        let mut state = AppState::new(Theme::default());
        let (_, actions) = handle_event(&mut state, &Event::Submit).expect("submit");
        assert!(actions.is_empty());
        assert!(!state.search.is_loading);
    }

    #[test]
    fn submit_fetches_first_page_and_focuses_results() {
        let mut state = typed("mountains");
        state.search.page = 3;
        let (_, actions) = handle_event(&mut state, &Event::Submit).expect("submit");
        let request = fetch_of(&actions);
        assert_eq!(request.page, 1);
        assert_eq!(request.query, "mountains");
        assert_eq!(state.focus, Focus::Results);
        assert!(state.search.is_loading);
    }

    #[test]
    fn color_toggle_with_empty_query_only_updates_filter() {
        let mut state = AppState::new(Theme::default());
        let (_, actions) = handle_event(&mut state, &Event::ToggleColor(Color::Red)).expect("toggle");
        assert!(actions.is_empty());
        assert_eq!(state.search.color_filter, Some(Color::Red));
    }

    #[test]
    fn color_toggle_with_query_refetches_and_deselects_on_repeat() {
        let mut state = typed("mountains");
        let (_, actions) = handle_event(&mut state, &Event::ToggleColor(Color::Red)).expect("toggle");
        assert_eq!(fetch_of(&actions).color, Some(Color::Red));

        let (_, actions) = handle_event(&mut state, &Event::ToggleColor(Color::Red)).expect("toggle");
        assert_eq!(fetch_of(&actions).color, None);
        assert_eq!(state.search.color_filter, None);

        handle_event(&mut state, &Event::ToggleColor(Color::Red)).expect("toggle");
        let (_, actions) = handle_event(&mut state, &Event::ToggleColor(Color::Teal)).expect("toggle");
        assert_eq!(fetch_of(&actions).color, Some(Color::Teal));
    }

    #[test]
    fn palette_cursor_toggles_its_color() {
        let mut state = typed("sea");
        handle_event(&mut state, &Event::FocusPalette).expect("focus");
        handle_event(&mut state, &Event::PalettePrev).expect("prev");
        let (_, actions) = handle_event(&mut state, &Event::ToggleSelectedColor).expect("toggle");
        assert_eq!(fetch_of(&actions).color, Some(Color::Blue));
    }

    #[test]
    fn sort_toggle_refetches_only_with_query() {
        let mut state = AppState::new(Theme::default());
        let (_, actions) = handle_event(&mut state, &Event::ToggleLatest).expect("toggle");
        assert!(actions.is_empty());
        assert_eq!(state.search.sort_mode, SortMode::Latest);

        for c in "fog".chars() {
            handle_event(&mut state, &Event::Char(c)).expect("char");
        }
        let (_, actions) = handle_event(&mut state, &Event::ToggleLatest).expect("toggle");
        assert_eq!(fetch_of(&actions).sort, SortMode::Relevance);
    }

    #[test]
    fn next_and_prev_move_exactly_one_page() {
        let mut state = typed("mountains");
        let (_, actions) = handle_event(&mut state, &Event::Submit).expect("submit");
        let seq = fetch_of(&actions).seq;
        complete(&mut state, seq, 9, 5);

        let (_, actions) = handle_event(&mut state, &Event::PrevPage).expect("prev");
        assert!(actions.is_empty());

        let (_, actions) = handle_event(&mut state, &Event::NextPage).expect("next");
        let request = fetch_of(&actions).clone();
        assert_eq!(request.page, 2);
        assert_eq!(state.search.page, 2);
        complete(&mut state, request.seq, 9, 5);

        let (_, actions) = handle_event(&mut state, &Event::PrevPage).expect("prev");
        assert_eq!(fetch_of(&actions).page, 1);
    }

    #[test]
    fn paging_keeps_the_submitted_query_after_edits() {
        let mut state = typed("mountains");
        let (_, actions) = handle_event(&mut state, &Event::Submit).expect("submit");
        let seq = fetch_of(&actions).seq;
        complete(&mut state, seq, 9, 5);

        handle_event(&mut state, &Event::ClearQuery).expect("clear");
        let (_, actions) = handle_event(&mut state, &Event::NextPage).expect("next");
        let request = fetch_of(&actions).clone();
        assert_eq!(request.query, "mountains");
        assert_eq!(request.page, 2);
        complete(&mut state, request.seq, 9, 5);

        handle_event(&mut state, &Event::FocusQuery).expect("focus");
        for c in "rivers".chars() {
            handle_event(&mut state, &Event::Char(c)).expect("char");
        }
        let (_, actions) = handle_event(&mut state, &Event::PrevPage).expect("prev");
        assert_eq!(fetch_of(&actions).query, "mountains");
        assert_eq!(state.active_query(), "mountains");
    }

    #[test]
    fn toggles_return_to_the_first_page() {
        let mut state = typed("mountains");
        let (_, actions) = handle_event(&mut state, &Event::Submit).expect("submit");
        let seq = fetch_of(&actions).seq;
        complete(&mut state, seq, 9, 5);

        let (_, actions) = handle_event(&mut state, &Event::NextPage).expect("next");
        let seq = fetch_of(&actions).seq;
        complete(&mut state, seq, 9, 5);
        assert_eq!(state.search.page, 2);

        let (_, actions) = handle_event(&mut state, &Event::ToggleColor(Color::Green)).expect("toggle");
        let request = fetch_of(&actions).clone();
        assert_eq!(request.page, 1);
        assert_eq!(state.search.page, 1);
        complete(&mut state, request.seq, 9, 5);

        let (_, actions) = handle_event(&mut state, &Event::NextPage).expect("next");
        let seq = fetch_of(&actions).seq;
        complete(&mut state, seq, 9, 5);
        assert_eq!(state.search.page, 2);

        let (_, actions) = handle_event(&mut state, &Event::ToggleLatest).expect("toggle");
        assert_eq!(fetch_of(&actions).page, 1);
        assert_eq!(state.search.page, 1);
    }

    #[test]
    fn whitespace_query_counts_as_empty() {
        let mut state = typed("  ");
        assert_eq!(state.search.phase(), crate::app::SearchPhase::Idle);

        let (_, actions) = handle_event(&mut state, &Event::Submit).expect("submit");
        assert!(actions.is_empty());
        let (_, actions) = handle_event(&mut state, &Event::ToggleColor(Color::Red)).expect("toggle");
        assert!(actions.is_empty());
        let (_, actions) = handle_event(&mut state, &Event::ToggleLatest).expect("toggle");
        assert!(actions.is_empty());
        assert_eq!(state.latest_seq(), 0);
    }

    #[test]
    fn next_is_disabled_on_last_page() {
        let mut state = typed("mountains");
        let (_, actions) = handle_event(&mut state, &Event::Submit).expect("submit");
        let seq = fetch_of(&actions).seq;
        complete(&mut state, seq, 3, 1);

        let (render, actions) = handle_event(&mut state, &Event::NextPage).expect("next");
        assert!(!render);
        assert!(actions.is_empty());
    }

    #[test]
    fn pagination_requires_results() {
        let mut state = typed("mountains");
        state.search.total_pages = 4;
        let (_, actions) = handle_event(&mut state, &Event::NextPage).expect("next");
        assert!(actions.is_empty());
    }

    #[test]
    fn stale_completion_does_not_render() {
        let mut state = typed("mountains");
        let (_, first) = handle_event(&mut state, &Event::Submit).expect("submit");
        let first_seq = fetch_of(&first).seq;
        handle_event(&mut state, &Event::ToggleLatest).expect("toggle");

        let event = Event::SearchCompleted {
            seq: first_seq,
            outcome: Err(SearchError::Transport("timeout".to_string())),
        };
        let (render, _) = handle_event(&mut state, &event).expect("completion");
        assert!(!render);
        assert!(state.search.is_loading);
        assert!(state.last_error.is_none());
    }

    #[test]
    fn denied_permission_is_reported_then_cleared() {
        let mut state = AppState::new(Theme::default());
        handle_event(&mut state, &Event::PermissionsResult { granted: false }).expect("denied");
        assert!(state.last_error.is_some());
        handle_event(&mut state, &Event::PermissionsResult { granted: true }).expect("granted");
        assert!(state.last_error.is_none());
    }

    #[test]
    fn searches_settle_when_web_access_is_missing() {
        let mut state = typed("mountains");
        assert!(state.ensure_web_access().is_err());

        handle_event(&mut state, &Event::PermissionsResult { granted: false }).expect("denied");
        assert_eq!(state.web_access, Some(false));

        let (_, actions) = handle_event(&mut state, &Event::Submit).expect("submit");
        let seq = fetch_of(&actions).seq;
        let error = state.ensure_web_access().expect_err("access denied");
        assert!(matches!(error, SearchError::Transport(_)));

        let event = Event::SearchCompleted { seq, outcome: Err(error) };
        let (render, _) = handle_event(&mut state, &event).expect("completion");
        assert!(render);
        assert!(!state.search.is_loading);
        assert_eq!(state.search.results, Some(vec![]));
        assert!(state.last_error.as_deref().is_some_and(|e| e.contains("web access not granted")));

        handle_event(&mut state, &Event::PermissionsResult { granted: true }).expect("granted");
        assert!(state.ensure_web_access().is_ok());
    }

    #[test]
    fn focus_changes_render_once() {
        let mut state = AppState::new(Theme::default());
        assert!(!handle_event(&mut state, &Event::FocusQuery).expect("focus").0);
        assert!(handle_event(&mut state, &Event::FocusPalette).expect("focus").0);
        assert_eq!(state.focus, Focus::Palette);
        assert_eq!(
            handle_event(&mut state, &Event::CloseFocus).expect("close"),
            (false, vec![Action::CloseFocus])
        );
    }
}
