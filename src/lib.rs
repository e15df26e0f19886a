//! Zunsplash: a Zellij plugin for searching Unsplash photos from the terminal.
//!
//! Zunsplash provides:
//! - Free-text photo search with relevance or latest-first ordering
//! - An 11-color filter palette (one color at a time, toggled on and off)
//! - Page-by-page navigation of results, nine photos per page
//! - Out-of-order response protection: only the latest request is applied

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! │  - Key mapping, web_request, WebRequestResult       │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling and fetch rules                   │
//! │  - Sequence fencing of responses                    │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │
//! ┌───────────────┐   ┌───────────────────┐
//! │ UI Layer      │   │ API Layer         │
//! │ (ui/)         │   │ (api/)            │
//! │ - Rendering   │   │ - Request URL     │
//! │ - Theming     │   │ - Response decode │
//! │ - Components  │   │ - Trace context   │
//! └───────────────┘   └───────────────────┘
//!         │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Photo, Color, SortMode, errors (domain/)         │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/zunsplash.wasm" {
//!         access_key "your-unsplash-access-key"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! When `access_key` is omitted the `UNSPLASH_ACCESS_KEY` environment
//! variable is used instead.
//!
//! # Example
//!
//! ```rust
//! use zunsplash::{handle_event, initialize, Action, Config, Event};
//!
//! let config = Config { access_key: Some("key".to_string()), ..Default::default() };
//! let mut state = initialize(&config);
//!
//! for c in "mountains".chars() {
//!     handle_event(&mut state, &Event::Char(c))?;
//! }
//! let (_, actions) = handle_event(&mut state, &Event::Submit)?;
//! let Some(Action::Fetch(request)) = actions.first() else { panic!("no fetch") };
//! assert!(request.url(&config.api_url)?.contains("query=mountains"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod api;
pub mod app;
pub mod domain;
pub mod infrastructure;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, Focus, SearchState};
pub use domain::{Color, Photo, Result, SearchError, SortMode, ZunsplashError};
pub use ui::Theme;

use std::collections::BTreeMap;
use std::fmt;

/// Environment variable consulted when no `access_key` is configured.
pub const ACCESS_KEY_ENV: &str = "UNSPLASH_ACCESS_KEY";

/// Plugin configuration parsed from Zellij's configuration system.
///
/// # Example
///
/// ```kdl
/// plugin location="file:/path/to/zunsplash.wasm" {
///     access_key "abc123"
///     api_url "https://api.unsplash.com"
///     theme "catppuccin-mocha"
///     theme_file "/path/to/theme.toml"
///     trace_level "debug"
/// }
/// ```
#[derive(Clone)]
pub struct Config {
    /// Unsplash access key sent as `Authorization: Client-ID <key>`.
    pub access_key: Option<String>,

    /// Base URL of the search endpoint. Default: `https://api.unsplash.com`
    pub api_url: String,

    /// Built-in theme name to use.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`, `catppuccin-frappe`,
    /// `catppuccin-macchiato`. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. Takes precedence over `theme_name`.
    pub theme_file: Option<String>,

    /// Tracing level for OpenTelemetry spans.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. `RUST_LOG` takes
    /// precedence. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            access_key: None,
            api_url: api::DEFAULT_API_URL.to_string(),
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("access_key", &self.access_key.as_ref().map(|_| "<redacted>"))
            .field("api_url", &self.api_url)
            .field("theme_name", &self.theme_name)
            .field("theme_file", &self.theme_file)
            .field("trace_level", &self.trace_level)
            .finish()
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Blank values are treated as absent. The access key falls back to the
    /// `UNSPLASH_ACCESS_KEY` environment variable.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use zunsplash::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("access_key".to_string(), "abc".to_string());
    /// map.insert("theme".to_string(), "catppuccin-latte".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.access_key.as_deref(), Some("abc"));
    /// assert_eq!(config.api_url, "https://api.unsplash.com");
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let value = |key: &str| {
            config
                .get(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        Self {
            access_key: resolve_access_key(value("access_key"), std::env::var(ACCESS_KEY_ENV).ok()),
            api_url: value("api_url").unwrap_or_else(|| api::DEFAULT_API_URL.to_string()),
            theme_name: value("theme"),
            theme_file: value("theme_file"),
            trace_level: value("trace_level"),
        }
    }
}

/// Picks the configured key, falling back to the environment value.
#[must_use]
pub fn resolve_access_key(configured: Option<String>, env: Option<String>) -> Option<String> {
    configured
        .or(env)
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty())
}

/// Initializes the plugin state from configuration.
///
/// Loads the theme (file, then name, then default). If no access key is
/// available the notice line explains why searches will fail.
///
/// # Example
///
/// ```rust
/// use zunsplash::{initialize, Config};
///
/// let state = initialize(&Config::default());
/// assert!(state.last_error.is_some());
/// ```
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(?config, "initializing zunsplash plugin");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            let path = infrastructure::expand_tilde(theme_file);
            Theme::from_file(&path).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    let mut state = AppState::new(theme);
    if config.access_key.is_none() {
        tracing::warn!("no access key configured");
        state.last_error = Some(SearchError::Unconfigured.to_string());
    }
    state
}
