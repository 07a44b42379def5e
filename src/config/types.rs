//! Configuration data model.
//!
//! Runtime structs (`Config` and friends) are what the rest of the crate reads.
//! `File*` structs mirror the TOML layout with every field optional so partial
//! files merge over defaults.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

use super::defaults::{DEFAULT_BEARER_TOKEN, DEFAULT_DASHBOARD_URL};
use crate::dashboard::StalePolicy;
use crate::ui::LinkTab;

/// Top-level runtime configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub api: ApiConfig,
    pub fetch: FetchConfig,
    pub display: DisplayConfig,
}

/// Resolved endpoint settings used by the HTTP client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub url: String,
    pub token: String,
    /// Request timeout; `None` keeps the HTTP client's default.
    pub timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DASHBOARD_URL.to_string(),
            token: DEFAULT_BEARER_TOKEN.to_string(),
            timeout_secs: None,
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// Fetch sequencing behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchConfig {
    pub discard_stale_responses: bool,
}

impl FetchConfig {
    pub fn stale_policy(&self) -> StalePolicy {
        if self.discard_stale_responses {
            StalePolicy::DiscardStale
        } else {
            StalePolicy::LastWriteWins
        }
    }
}

/// Terminal presentation settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayConfig {
    pub color: bool,
    pub default_tab: LinkTab,
    /// Palette overrides keyed by token name (`header`, `accent`, ...).
    pub colors: BTreeMap<String, String>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: true,
            default_tab: LinkTab::default(),
            colors: BTreeMap::new(),
        }
    }
}

/// Outcome of `linkboard init`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlobalConfigInitResult {
    Created { path: PathBuf },
    AlreadyInitialized { path: PathBuf },
    Overwritten { path: PathBuf, backup_path: PathBuf },
}

// ---------------------------------------------------------------------------
// File layout
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(super) struct FileConfig {
    pub api: FileApiConfig,
    pub fetch: FileFetchConfig,
    pub display: FileDisplayConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(super) struct FileApiConfig {
    pub url: Option<String>,
    pub token: Option<String>,
    pub token_env: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(super) struct FileFetchConfig {
    pub discard_stale_responses: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(super) struct FileDisplayConfig {
    pub color: Option<bool>,
    pub default_tab: Option<LinkTab>,
    pub colors: BTreeMap<String, String>,
}
