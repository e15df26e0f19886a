//! Photo-search endpoint protocol.
//!
//! The HTTP call itself is performed by the Zellij host (`web_request`); this
//! module owns both halves around it.
//!
//! # Architecture
//!
//! - `request`: Request URL, headers, and context map (sequence number, trace)
//! - `response`: Status/body classification into a page of photos or an error

pub mod request;
pub mod response;

pub use request::{seq_from_context, SearchRequest, TraceContext, DEFAULT_API_URL, PAGE_SIZE};
pub use response::{parse_search_response, SearchPage};
