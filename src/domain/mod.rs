//! Domain layer for the zunsplash plugin.
//!
//! Core types independent of Zellij APIs and of the HTTP wire format.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`photo`]: Photo search result model
//! - [`color`]: Color palette and sort order used as search filters

pub mod color;
pub mod error;
pub mod photo;

pub use color::{Color, SortMode};
pub use error::{Result, SearchError, ZunsplashError};
pub use photo::Photo;
