//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the plugin runtime (main.rs) and the domain and
//! api layers.
//!
//! # Architecture
//!
//! ```text
//! Key / Host Event → Event → handle_event → State Mutations → Actions → web_request
//!                      ↑                                                   ↓
//!                      └─────────────── SearchCompleted { seq } ───────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and fetch rules
//! - [`modes`]: Focus and search phase types
//! - [`state`]: Search state, application state, and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{Focus, ResultStatus, SearchPhase};
pub use state::{AppState, SearchState};
