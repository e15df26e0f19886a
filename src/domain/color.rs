//! Search filter vocabulary: the color palette and sort order.
//!
//! The palette mirrors the values accepted by the Unsplash `color` query
//! parameter. Order matters: it is the order the toolbar renders swatches in
//! and the order the palette cursor walks through.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A color filter accepted by the photo-search endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    BlackAndWhite,
    Black,
    White,
    Yellow,
    Orange,
    Red,
    Purple,
    Magenta,
    Green,
    Teal,
    Blue,
}

impl Color {
    /// Every palette entry, in toolbar order.
    pub const ALL: [Self; 11] = [
        Self::BlackAndWhite,
        Self::Black,
        Self::White,
        Self::Yellow,
        Self::Orange,
        Self::Red,
        Self::Purple,
        Self::Magenta,
        Self::Green,
        Self::Teal,
        Self::Blue,
    ];

    /// Returns the wire value sent as the `color` query parameter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BlackAndWhite => "black_and_white",
            Self::Black => "black",
            Self::White => "white",
            Self::Yellow => "yellow",
            Self::Orange => "orange",
            Self::Red => "red",
            Self::Purple => "purple",
            Self::Magenta => "magenta",
            Self::Green => "green",
            Self::Teal => "teal",
            Self::Blue => "blue",
        }
    }

    /// Hex color used to paint the swatch next to the palette label.
    ///
    /// `BlackAndWhite` has no single hue; it is drawn as mid gray.
    #[must_use]
    pub const fn swatch_hex(self) -> &'static str {
        match self {
            Self::BlackAndWhite => "#808080",
            Self::Black => "#000000",
            Self::White => "#ffffff",
            Self::Yellow => "#f5d000",
            Self::Orange => "#f28c28",
            Self::Red => "#d62828",
            Self::Purple => "#7b2cbf",
            Self::Magenta => "#d000a0",
            Self::Green => "#2b9348",
            Self::Teal => "#008080",
            Self::Blue => "#1d4ed8",
        }
    }

    /// Position of this color in [`Color::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|c| *c == self).unwrap_or(0)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result ordering requested from the endpoint.
///
/// Ranking happens upstream; results are never re-sorted locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    /// Endpoint default (relevance ranked). No `order_by` parameter is sent.
    #[default]
    Relevance,
    /// Most recent first (`order_by=latest`).
    Latest,
}

impl SortMode {
    /// Flips between relevance and latest-first.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Relevance => Self::Latest,
            Self::Latest => Self::Relevance,
        }
    }

    /// Value for the `order_by` parameter, if one should be sent.
    #[must_use]
    pub const fn order_by(self) -> Option<&'static str> {
        match self {
            Self::Relevance => None,
            Self::Latest => Some("latest"),
        }
    }

    #[must_use]
    pub const fn is_latest(self) -> bool {
        matches!(self, Self::Latest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_eleven_distinct_entries_in_toolbar_order() {
        assert_eq!(Color::ALL.len(), 11);
        assert_eq!(Color::ALL[0], Color::BlackAndWhite);
        assert_eq!(Color::ALL[10], Color::Blue);
        for (i, color) in Color::ALL.iter().enumerate() {
            assert_eq!(color.index(), i);
        }
    }

    #[test]
    fn wire_names_match_serde_representation() {
        for color in Color::ALL {
            let json = serde_json::to_string(&color).unwrap();
            assert_eq!(json, format!("\"{}\"", color.as_str()));
        }
    }

    #[test]
    fn sort_mode_toggles_and_maps_to_order_by() {
        assert_eq!(SortMode::default(), SortMode::Relevance);
        assert_eq!(SortMode::Relevance.toggled(), SortMode::Latest);
        assert_eq!(SortMode::Latest.toggled(), SortMode::Relevance);
        assert_eq!(SortMode::Relevance.order_by(), None);
        assert_eq!(SortMode::Latest.order_by(), Some("latest"));
    }
}
