//! Focus and search-phase types for the application.
//!
//! [`Focus`] decides which keybindings are active. [`SearchPhase`] and
//! [`ResultStatus`] are derived from the search state and never stored.
//!
//! # State Machine
//!
//! ```text
//!   Idle ──(query typed)──▶ Ready ──(submit / toggle / page)──▶ Searching
//!    ▲                        ▲                                    │
//!    └──(query cleared)───────┴────────────(response settles)──────┘
//! ```

/// Which part of the UI receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Typing into the query input. Enter submits.
    #[default]
    Query,

    /// Navigating the results grid and pagination.
    Results,

    /// Moving the cursor across the color palette.
    Palette,
}

/// Phase of the search intent state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    /// Query empty and nothing in flight.
    Idle,
    /// Query non-empty and nothing in flight.
    Ready,
    /// A fetch is in flight.
    Searching,
}

/// What the results area shows besides (or instead of) the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultStatus {
    /// Nothing searched yet and the query is empty.
    Prompt,
    /// A fetch is in flight.
    Loading,
    /// A search completed with zero matches.
    NoResults,
    /// The grid has photos to show.
    Results,
    /// Nothing to show (e.g. a query was typed but not yet submitted).
    Blank,
}
