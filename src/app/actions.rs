//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler returns a `Vec<Action>` after processing each event. The
//! plugin shim executes them in order. Keeping effects as data is what makes
//! the search state machine testable without a Zellij host.
//!
//! # Example
//!
//! ```rust
//! use zunsplash::app::{Action, AppState};
//! use zunsplash::ui::Theme;
//!
//! let mut state = AppState::new(Theme::default());
//! state.search.query_text = "mountains".to_string();
//! let Action::Fetch(request) = state.run_search(1) else { unreachable!() };
//! assert_eq!(request.page, 1);
//! ```

use crate::api::SearchRequest;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Issues one request to the photo-search endpoint.
    ///
    /// The result must be fed back as `Event::SearchCompleted` carrying the
    /// request's sequence number.
    Fetch(SearchRequest),
}
