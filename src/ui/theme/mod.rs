//! Semantic color palette.
//!
//! Every color is stored as a hex string and resolved through
//! [`HexColor::parse`], so config overrides follow the same rules as the
//! built-ins: malformed values turn black rather than failing.

use crate::color::HexColor;
use std::collections::BTreeMap;
use tracing::debug;

/// Semantic color token used by terminal rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ThemeToken {
    Header,
    Muted,
    Accent,
    Link,
    TodayClicks,
    Location,
    Source,
    Chart,
    Warning,
}

impl ThemeToken {
    /// Stable config key for this token (used by `[display.colors]`).
    pub fn key(self) -> &'static str {
        match self {
            Self::Header => "header",
            Self::Muted => "muted",
            Self::Accent => "accent",
            Self::Link => "link",
            Self::TodayClicks => "today_clicks",
            Self::Location => "location",
            Self::Source => "source",
            Self::Chart => "chart",
            Self::Warning => "warning",
        }
    }

    fn default_hex(self) -> &'static str {
        match self {
            Self::Header => "006AF9",
            Self::Muted => "8E8E93",
            Self::Accent => "007AFF",
            Self::Link => "007AFF",
            // Purple at half opacity.
            Self::TodayClicks => "80AF52DE",
            Self::Location => "34C759",
            Self::Source => "AF52DE",
            Self::Chart => "007AFF",
            Self::Warning => "FF9500",
        }
    }

    pub fn all() -> &'static [ThemeToken] {
        &[
            Self::Header,
            Self::Muted,
            Self::Accent,
            Self::Link,
            Self::TodayClicks,
            Self::Location,
            Self::Source,
            Self::Chart,
            Self::Warning,
        ]
    }

    fn from_key(key: &str) -> Option<Self> {
        let normalized = key.trim().to_ascii_lowercase().replace('-', "_");
        Self::all().iter().copied().find(|token| token.key() == normalized)
    }
}

/// Resolved colors for every token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: BTreeMap<ThemeToken, HexColor>,
}

impl Default for Palette {
    fn default() -> Self {
        let colors = ThemeToken::all()
            .iter()
            .map(|token| (*token, HexColor::parse(token.default_hex())))
            .collect();
        Self { colors }
    }
}

impl Palette {
    /// Built-in palette with `[display.colors]` overrides applied.
    pub fn from_overrides(overrides: &BTreeMap<String, String>) -> Self {
        let mut palette = Self::default();
        for (key, value) in overrides {
            match ThemeToken::from_key(key) {
                Some(token) => {
                    palette.colors.insert(token, HexColor::parse(value));
                }
                None => debug!(key = %key, "ignoring unknown palette key"),
            }
        }
        palette
    }

    pub fn color(&self, token: ThemeToken) -> HexColor {
        self.colors
            .get(&token)
            .copied()
            .unwrap_or_else(|| HexColor::parse(token.default_hex()))
    }
}
