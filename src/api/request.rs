//! Outbound search requests and cross-event trace propagation.
//!
//! A [`SearchRequest`] is produced by the state machine and executed by the
//! plugin shim through Zellij's `web_request` host call. The host answers with
//! a separate `WebRequestResult` event, so everything needed to match that
//! event back to its request (sequence number, trace context) travels in the
//! request's context map.

use crate::domain::error::Result;
use crate::domain::{Color, SortMode};
use std::collections::BTreeMap;

/// Number of results requested per page.
pub const PAGE_SIZE: u32 = 9;

/// Default base URL of the photo-search API.
pub const DEFAULT_API_URL: &str = "https://api.unsplash.com";

/// Path of the search endpoint, relative to the API base URL.
const SEARCH_PATH: &str = "/search/photos";

/// Context map key identifying results that belong to this plugin's searches.
pub const CONTEXT_KIND_KEY: &str = "kind";

/// Value stored under [`CONTEXT_KIND_KEY`] for search requests.
pub const CONTEXT_KIND_SEARCH: &str = "search";

/// Context map key holding the request sequence number.
pub const CONTEXT_SEQ_KEY: &str = "seq";

const CONTEXT_TRACE_ID_KEY: &str = "trace_id";
const CONTEXT_PARENT_SPAN_KEY: &str = "parent_span_id";

/// Distributed tracing context carried from request to response.
///
/// Captures the OpenTelemetry trace and span IDs of the span that issued the
/// request so that response handling can be linked to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceContext {
    /// OpenTelemetry trace ID as a hex string.
    pub trace_id: String,

    /// Parent span ID for linking spans across events.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Creates a trace context from the current tracing span.
    ///
    /// Returns `None` if the current span context is invalid or not sampled
    /// (for instance when tracing was never initialized).
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let span = tracing::Span::current();

        let otel_context = span.context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if !span_context.is_valid() {
            return None;
        }

        Some(Self {
            trace_id: format!("{:032x}", span_context.trace_id()),
            parent_span_id: format!("{:016x}", span_context.span_id()),
        })
    }

    /// Reads a trace context back out of a `web_request` context map.
    #[must_use]
    pub fn from_context(context: &BTreeMap<String, String>) -> Option<Self> {
        Some(Self {
            trace_id: context.get(CONTEXT_TRACE_ID_KEY)?.clone(),
            parent_span_id: context.get(CONTEXT_PARENT_SPAN_KEY)?.clone(),
        })
    }

    /// Makes this context the remote parent of spans created while the
    /// returned guard is held.
    ///
    /// Returns `None` if either ID is not valid hex.
    #[must_use]
    pub fn attach(&self) -> Option<opentelemetry::ContextGuard> {
        use opentelemetry::trace::{SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState};

        let trace_id = TraceId::from_hex(&self.trace_id).ok()?;
        let span_id = SpanId::from_hex(&self.parent_span_id).ok()?;

        let span_context = SpanContext::new(
            trace_id,
            span_id,
            TraceFlags::SAMPLED,
            true,
            TraceState::default(),
        );

        let otel_context = opentelemetry::Context::current().with_remote_span_context(span_context);

        Some(otel_context.attach())
    }
}

/// One outstanding call to the photo-search endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// Monotonically increasing number; only the latest one is applied.
    pub seq: u64,

    /// Free-text query.
    pub query: String,

    /// Requested page, 1-based.
    pub page: u32,

    /// Results per page.
    pub per_page: u32,

    /// Optional color filter.
    pub color: Option<Color>,

    /// Requested ordering.
    pub sort: SortMode,

    /// Trace context of the span that issued the request.
    pub trace_context: Option<TraceContext>,
}

impl SearchRequest {
    /// Creates a request with the fixed page size and the current trace context.
    #[must_use]
    pub fn new(seq: u64, query: String, page: u32, color: Option<Color>, sort: SortMode) -> Self {
        Self {
            seq,
            query,
            page,
            per_page: PAGE_SIZE,
            color,
            sort,
            trace_context: TraceContext::from_current(),
        }
    }

    /// Builds the full request URL against `api_url`.
    ///
    /// Parameters are form-encoded in the order `page`, `per_page`, `query`,
    /// then `color` and `order_by` when set.
    ///
    /// # Errors
    ///
    /// Returns an error if `api_url` is not an absolute URL.
    ///
    /// # Example
    ///
    /// ```
    /// use zunsplash::api::SearchRequest;
    /// use zunsplash::domain::SortMode;
    ///
    /// let request = SearchRequest::new(1, "red car".into(), 2, None, SortMode::Latest);
    /// let url = request.url("https://api.unsplash.com").unwrap();
    /// assert_eq!(
    ///     url,
    ///     "https://api.unsplash.com/search/photos?page=2&per_page=9&query=red+car&order_by=latest"
    /// );
    /// ```
    pub fn url(&self, api_url: &str) -> Result<String> {
        let base = format!("{}{SEARCH_PATH}", api_url.trim_end_matches('/'));
        let mut url = url::Url::parse(&base)?;

        {
            let mut pairs = url.query_pairs_mut();
            pairs
                .append_pair("page", &self.page.to_string())
                .append_pair("per_page", &self.per_page.to_string())
                .append_pair("query", &self.query);
            if let Some(color) = self.color {
                pairs.append_pair("color", color.as_str());
            }
            if let Some(order_by) = self.sort.order_by() {
                pairs.append_pair("order_by", order_by);
            }
        }

        Ok(url.into())
    }

    /// Request headers carrying the client credential.
    #[must_use]
    pub fn headers(access_key: &str) -> BTreeMap<String, String> {
        let mut headers = BTreeMap::new();
        headers.insert("Authorization".to_string(), format!("Client-ID {access_key}"));
        headers.insert("Accept-Version".to_string(), "v1".to_string());
        headers
    }

    /// Context map handed to `web_request` and echoed back with the result.
    #[must_use]
    pub fn context(&self) -> BTreeMap<String, String> {
        let mut context = BTreeMap::new();
        context.insert(CONTEXT_KIND_KEY.to_string(), CONTEXT_KIND_SEARCH.to_string());
        context.insert(CONTEXT_SEQ_KEY.to_string(), self.seq.to_string());
        if let Some(trace) = &self.trace_context {
            context.insert(CONTEXT_TRACE_ID_KEY.to_string(), trace.trace_id.clone());
            context.insert(CONTEXT_PARENT_SPAN_KEY.to_string(), trace.parent_span_id.clone());
        }
        context
    }
}

/// Extracts the sequence number of a search result from its context map.
///
/// Returns `None` for results that were not issued as searches by this plugin.
#[must_use]
pub fn seq_from_context(context: &BTreeMap<String, String>) -> Option<u64> {
    if context.get(CONTEXT_KIND_KEY).map(String::as_str) != Some(CONTEXT_KIND_SEARCH) {
        return None;
    }
    context.get(CONTEXT_SEQ_KEY)?.parse().ok()
}
