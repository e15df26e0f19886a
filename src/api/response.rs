//! Decoding of photo-search responses.
//!
//! [`parse_search_response`] turns the raw status and body delivered by the
//! host into either a [`SearchPage`] or a classified [`SearchError`]. The
//! payload-level `errors` marker is checked before anything else, so an error
//! payload is reported as an endpoint error regardless of HTTP status.

use crate::domain::{Photo, SearchError};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value as JsonValue;

/// One decoded page of search results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPage {
    /// Photos in endpoint order.
    pub photos: Vec<Photo>,

    /// Number of pages the endpoint reports for this query, at least 1.
    pub total_pages: u32,

    /// Total number of matches, when reported.
    pub total: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct RawSearchResponse {
    results: Vec<RawPhoto>,
    total_pages: u32,
    #[serde(default)]
    total: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct RawPhoto {
    id: String,
    urls: RawUrls,
    #[serde(default)]
    color: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    alt_description: Option<String>,
    #[serde(default)]
    created_at: Option<String>,
    #[serde(default)]
    user: Option<RawUser>,
}

#[derive(Debug, Deserialize)]
struct RawUrls {
    regular: String,
}

#[derive(Debug, Deserialize)]
struct RawUser {
    #[serde(default)]
    name: Option<String>,
}

impl From<RawPhoto> for Photo {
    fn from(raw: RawPhoto) -> Self {
        let created_at = raw
            .created_at
            .as_deref()
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|dt| dt.with_timezone(&Utc));

        Self {
            id: raw.id,
            image_url: raw.urls.regular,
            dominant_color: raw.color,
            description: raw.description.or(raw.alt_description),
            photographer: raw.user.and_then(|u| u.name),
            created_at,
        }
    }
}

/// Classifies and decodes a search response.
///
/// # Errors
///
/// - [`SearchError::Endpoint`] when the payload carries a non-null `errors` field
/// - [`SearchError::Transport`] when the body is not JSON, the status is not
///   2xx, or the payload does not have the expected shape
///
/// # Example
///
/// ```
/// use zunsplash::api::parse_search_response;
///
/// let body = br#"{"total": 0, "total_pages": 0, "results": []}"#;
/// let page = parse_search_response(200, body).unwrap();
/// assert!(page.photos.is_empty());
/// assert_eq!(page.total_pages, 1);
/// ```
pub fn parse_search_response(status: u16, body: &[u8]) -> Result<SearchPage, SearchError> {
    let value: JsonValue = serde_json::from_slice(body).map_err(|e| {
        SearchError::Transport(format!("status {status}: response body is not JSON ({e})"))
    })?;

    if let Some(errors) = value.get("errors").filter(|e| !e.is_null()) {
        return Err(SearchError::Endpoint(error_messages(errors)));
    }

    if !(200..300).contains(&status) {
        return Err(SearchError::Transport(format!("unexpected status {status}")));
    }

    let raw: RawSearchResponse = serde_json::from_value(value)
        .map_err(|e| SearchError::Transport(format!("unexpected response shape: {e}")))?;

    Ok(SearchPage {
        photos: raw.results.into_iter().map(Photo::from).collect(),
        total_pages: raw.total_pages.max(1),
        total: raw.total,
    })
}

/// Flattens the `errors` marker into readable messages.
fn error_messages(errors: &JsonValue) -> Vec<String> {
    match errors {
        JsonValue::Array(items) => items
            .iter()
            .map(|item| item.as_str().map_or_else(|| item.to_string(), str::to_string))
            .collect(),
        JsonValue::String(s) => vec![s.clone()],
        other => vec![other.to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn photo_json(id: &str) -> JsonValue {
        json!({
            "id": id,
            "created_at": "2016-05-03T11:00:28-04:00",
            "color": "#60544D",
            "description": null,
            "alt_description": "snowy peak at dusk",
            "urls": { "raw": "https://images.example/raw", "regular": format!("https://images.example/{id}") },
            "user": { "name": "Ada Lovelace" }
        })
    }

    #[test]
    fn decodes_results_in_endpoint_order() {
        let body = json!({
            "total": 133,
            "total_pages": 15,
            "results": [photo_json("b"), photo_json("a"), photo_json("c")]
        });
        let page = parse_search_response(200, body.to_string().as_bytes()).unwrap();

        let ids: Vec<&str> = page.photos.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["b", "a", "c"]);
        assert_eq!(page.total_pages, 15);
        assert_eq!(page.total, Some(133));

        let first = &page.photos[0];
        assert_eq!(first.image_url, "https://images.example/b");
        assert_eq!(first.dominant_color.as_deref(), Some("#60544D"));
        assert_eq!(first.description.as_deref(), Some("snowy peak at dusk"));
        assert_eq!(first.photographer.as_deref(), Some("Ada Lovelace"));
        assert_eq!(
            first.created_at.map(|t| t.to_rfc3339()),
            Some("2016-05-03T15:00:28+00:00".to_string())
        );
    }

    #[test]
    fn zero_total_pages_is_clamped_to_one() {
        let page = parse_search_response(200, br#"{"total":0,"total_pages":0,"results":[]}"#).unwrap();
        assert_eq!(page.total_pages, 1);
        assert!(page.photos.is_empty());
    }

    #[test]
    fn errors_marker_is_an_endpoint_error_even_with_success_status() {
        let err = parse_search_response(200, br#"{"errors":["Rate Limit Exceeded"]}"#).unwrap_err();
        assert_eq!(err, SearchError::Endpoint(vec!["Rate Limit Exceeded".to_string()]));

        let err = parse_search_response(401, br#"{"errors":["OAuth error: The access token is invalid"]}"#)
            .unwrap_err();
        assert_eq!(err.kind(), "endpoint");
    }

    #[test]
    fn null_errors_field_is_ignored() {
        let page = parse_search_response(200, br#"{"errors":null,"total_pages":2,"results":[]}"#).unwrap();
        assert_eq!(page.total_pages, 2);
    }

    #[test]
    fn non_json_body_is_a_transport_error() {
        let err = parse_search_response(400, b"error sending request for url").unwrap_err();
        assert_eq!(err.kind(), "transport");
    }

    #[test]
    fn non_success_status_without_marker_is_a_transport_error() {
        let err = parse_search_response(503, br#"{"message":"unavailable"}"#).unwrap_err();
        assert_eq!(err, SearchError::Transport("unexpected status 503".to_string()));
    }

    #[test]
    fn missing_fields_are_a_transport_error() {
        let err = parse_search_response(200, br#"{"results":[{"id":"x"}],"total_pages":1}"#).unwrap_err();
        assert_eq!(err.kind(), "transport");
    }

    #[test]
    fn non_string_error_entries_are_stringified() {
        let err = parse_search_response(200, br#"{"errors":{"query":"missing"}}"#).unwrap_err();
        assert_eq!(err, SearchError::Endpoint(vec![r#"{"query":"missing"}"#.to_string()]));
    }
}
