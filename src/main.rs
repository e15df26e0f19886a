//! Zellij plugin entry point.
//!
//! Thin shim between the Zellij host and the library: it maps keys and host
//! events to [`zunsplash::Event`]s, runs them through
//! [`zunsplash::handle_event`], and executes the returned actions with host
//! calls (`web_request`, `hide_self`).

#![allow(clippy::multiple_crate_versions)]

use std::collections::{BTreeMap, VecDeque};
use zellij_tile::prelude::*;

use zunsplash::api::{parse_search_response, seq_from_context, SearchRequest, TraceContext};
use zunsplash::{handle_event, Action, Config, Event, Focus, SearchError};

register_plugin!(State);

struct State {
    app: zunsplash::AppState,

    /// Sent with every request; `None` means searches fail as unconfigured.
    access_key: Option<String>,

    api_url: String,
}

impl Default for State {
    fn default() -> Self {
        let config = Config::default();
        Self {
            app: zunsplash::initialize(&config),
            access_key: None,
            api_url: config.api_url,
        }
    }
}

impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        zunsplash::observability::init_tracing(&config);

        let _guard = tracing::debug_span!("plugin_load").entered();
        tracing::debug!(?config, "parsed configuration");

        self.app = zunsplash::initialize(&config);
        self.access_key = config.access_key;
        self.api_url = config.api_url;

        request_permission(&[PermissionType::WebAccess]);
        subscribe(&[EventType::Key, EventType::WebRequestResult, EventType::PermissionRequestResult]);

        tracing::debug!("plugin load complete");
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let _guard = tracing::debug_span!("plugin_update", event_type = %event_name).entered();

        match event {
            zellij_tile::prelude::Event::Key(ref key) => {
                self.map_key_event(key).map_or(false, |event| self.dispatch(event))
            }
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                Self::handle_web_result(status, &body, &context).map_or(false, |event| self.dispatch(event))
            }
            zellij_tile::prelude::Event::PermissionRequestResult(status) => {
                let granted = matches!(status, PermissionStatus::Granted);
                self.dispatch(Event::PermissionsResult { granted })
            }
            _ => false,
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        zunsplash::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Runs `event` and any follow-up events produced while executing its
    /// actions, returning whether anything asked for a render.
    fn dispatch(&mut self, event: Event) -> bool {
        let mut pending = VecDeque::from([event]);
        let mut should_render = false;

        while let Some(event) = pending.pop_front() {
            match handle_event(&mut self.app, &event) {
                Ok((render, actions)) => {
                    tracing::debug!(action_count = actions.len(), should_render = render, "event handled");
                    should_render |= render;
                    for action in actions {
                        pending.extend(self.execute_action(action));
                    }
                }
                Err(e) => tracing::warn!(error = %e, "error handling event"),
            }
        }

        should_render
    }

    /// Executes one action. A fetch that cannot be issued is turned into a
    /// failed completion so the search still settles.
    fn execute_action(&self, action: Action) -> Option<Event> {
        match action {
            Action::CloseFocus => {
                hide_self();
                None
            }
            Action::Fetch(request) => self.issue_request(&request).err().map(|error| Event::SearchCompleted {
                seq: request.seq,
                outcome: Err(error),
            }),
        }
    }

    fn issue_request(&self, request: &SearchRequest) -> Result<(), SearchError> {
        let Some(access_key) = self.access_key.as_deref() else {
            return Err(SearchError::Unconfigured);
        };
        self.app.ensure_web_access()?;
        let url = request
            .url(&self.api_url)
            .map_err(|e| SearchError::Transport(e.to_string()))?;

        tracing::debug!(seq = request.seq, page = request.page, "issuing web request");
        web_request(url, HttpVerb::Get, SearchRequest::headers(access_key), vec![], request.context());
        Ok(())
    }

    /// Decodes a host response. Responses to requests this plugin did not
    /// tag as searches are ignored.
    fn handle_web_result(status: u16, body: &[u8], context: &BTreeMap<String, String>) -> Option<Event> {
        let Some(seq) = seq_from_context(context) else {
            tracing::debug!(status, "ignoring untagged web response");
            return None;
        };

        let _otel_guard = TraceContext::from_context(context).and_then(|tc| tc.attach());
        let _span = tracing::debug_span!("search_response", seq, status, body_len = body.len()).entered();

        Some(Event::SearchCompleted { seq, outcome: parse_search_response(status, body) })
    }

    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => format!("WebRequestResult({status})"),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => "PermissionRequestResult".to_string(),
            _ => "Other".to_string(),
        }
    }

    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::trace!(bare_key = ?key.bare_key, "key event");

        if key.has_modifiers(&[KeyModifier::Ctrl]) {
            return match key.bare_key {
                BareKey::Char('n') => Some(Event::SelectNext),
                BareKey::Char('p') => Some(Event::SelectPrev),
                BareKey::Char('u') if self.app.focus == Focus::Query => Some(Event::ClearQuery),
                _ => None,
            };
        }

        match self.app.focus {
            Focus::Query => Self::map_query_key(key),
            Focus::Results => Self::map_results_key(key),
            Focus::Palette => Self::map_palette_key(key),
        }
    }

    fn map_query_key(key: &KeyWithModifier) -> Option<Event> {
        Some(match key.bare_key {
            BareKey::Enter => Event::Submit,
            BareKey::Tab => Event::FocusPalette,
            BareKey::Esc | BareKey::Down => Event::FocusResults,
            BareKey::Backspace => Event::Backspace,
            BareKey::Char(c) => Event::Char(c),
            _ => return None,
        })
    }

    fn map_results_key(key: &KeyWithModifier) -> Option<Event> {
        Some(match key.bare_key {
            BareKey::Down | BareKey::Char('j') => Event::SelectNext,
            BareKey::Up | BareKey::Char('k') => Event::SelectPrev,
            BareKey::Left | BareKey::Char('h') => Event::PrevPage,
            BareKey::Right | BareKey::Char('l') => Event::NextPage,
            BareKey::Char('s') => Event::ToggleLatest,
            BareKey::Tab | BareKey::Char('c') => Event::FocusPalette,
            BareKey::Char('/' | 'i') => Event::FocusQuery,
            BareKey::Esc | BareKey::Char('q') => Event::CloseFocus,
            _ => return None,
        })
    }

    fn map_palette_key(key: &KeyWithModifier) -> Option<Event> {
        Some(match key.bare_key {
            BareKey::Left | BareKey::Char('h') => Event::PalettePrev,
            BareKey::Right | BareKey::Char('l') => Event::PaletteNext,
            BareKey::Enter | BareKey::Char(' ') => Event::ToggleSelectedColor,
            BareKey::Char('s') => Event::ToggleLatest,
            BareKey::Esc | BareKey::Tab => Event::FocusResults,
            BareKey::Char('/') => Event::FocusQuery,
            BareKey::Char('q') => Event::CloseFocus,
            _ => return None,
        })
    }
}
