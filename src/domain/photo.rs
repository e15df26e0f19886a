//! Photo domain model.
//!
//! A `Photo` is one record of a search result page. Records are kept in the
//! order the endpoint returned them; the only derived data is presentation
//! (display title, age).

use chrono::{DateTime, Utc};

/// Number of seconds in one minute.
const SECONDS_PER_MINUTE: i64 = 60;

/// Number of seconds in one hour.
const SECONDS_PER_HOUR: i64 = 3600;

/// Number of seconds in one day.
const SECONDS_PER_DAY: i64 = 86400;

/// Title shown for photos with neither a description nor alt text.
const UNTITLED: &str = "untitled";

/// A single search result record.
///
/// # Fields
///
/// - `id`: Opaque identifier, unique within a result set
/// - `image_url`: URL of the regular-size rendition
/// - `dominant_color`: Hex color reported by the endpoint (e.g. `#60544D`)
/// - `description`: Author description, falling back to generated alt text
/// - `photographer`: Display name of the uploader
/// - `created_at`: Upload time, when the endpoint reports a parseable one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    pub id: String,
    pub image_url: String,
    pub dominant_color: Option<String>,
    pub description: Option<String>,
    pub photographer: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl Photo {
    /// Creates a photo with only the required fields set.
    #[must_use]
    pub fn new(id: impl Into<String>, image_url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            image_url: image_url.into(),
            dominant_color: None,
            description: None,
            photographer: None,
            created_at: None,
        }
    }

    /// Text used as the photo's title in the results grid.
    #[must_use]
    pub fn title(&self) -> &str {
        self.description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .unwrap_or(UNTITLED)
    }

    /// Human-readable age of the photo relative to now.
    #[must_use]
    pub fn time_ago(&self) -> Option<String> {
        self.time_ago_from(Utc::now())
    }

    /// Human-readable age of the photo relative to `now`.
    ///
    /// - Less than 1 minute: "just now"
    /// - Less than 1 hour: "Xm ago"
    /// - Less than 1 day: "Xh ago"
    /// - Otherwise: "Xd ago"
    #[must_use]
    pub fn time_ago_from(&self, now: DateTime<Utc>) -> Option<String> {
        let created = self.created_at?;
        let diff = (now - created).num_seconds().max(0);

        Some(if diff < SECONDS_PER_MINUTE {
            "just now".to_string()
        } else if diff < SECONDS_PER_HOUR {
            format!("{}m ago", diff / SECONDS_PER_MINUTE)
        } else if diff < SECONDS_PER_DAY {
            format!("{}h ago", diff / SECONDS_PER_HOUR)
        } else {
            format!("{}d ago", diff / SECONDS_PER_DAY)
        })
    }
}
