//! Site configuration.
//!
//! DESIGN
//! ======
//! One typed `SiteConfig` with serde defaults for every field. The browser
//! front end reads it from an optional JSON block embedded in the page;
//! native callers build it from `FOLIO_*` environment variables.

use serde::{Deserialize, Serialize};

use crate::error::ContentError;
use crate::layout::ContentLayout;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PROBE_CONCURRENCY: usize = 6;
pub const DEFAULT_THEME_STORAGE_KEY: &str = "theme";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// How the project list is obtained from the content host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscoveryMode {
    /// Guess candidate folder names and probe each one.
    #[default]
    Probe,
    /// Read folder names from the listing manifest.
    Manifest,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Absolute origin used by native transports to resolve relative paths.
    pub base_url: Option<String>,
    pub layout: ContentLayout,
    pub discovery: DiscoveryMode,
    /// Maximum project loads in flight. `1` probes strictly one at a time.
    pub probe_concurrency: usize,
    pub theme_storage_key: String,
    pub request_timeout_secs: u64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            layout: ContentLayout::default(),
            discovery: DiscoveryMode::default(),
            probe_concurrency: DEFAULT_PROBE_CONCURRENCY,
            theme_storage_key: DEFAULT_THEME_STORAGE_KEY.to_owned(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl SiteConfig {
    /// Parse a JSON config document; absent fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::Config`] if the document is not valid JSON or
    /// a field has the wrong shape.
    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        serde_json::from_str(raw).map_err(|e| ContentError::Config(e.to_string()))
    }

    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `FOLIO_BASE_URL`: origin for native transports
    /// - `FOLIO_CONTENT_ROOT`: default `./content/projects`
    /// - `FOLIO_DISCOVERY`: `probe` (default) or `manifest`
    /// - `FOLIO_PROBE_CONCURRENCY`: default 6
    /// - `FOLIO_THEME_STORAGE_KEY`: default `theme`
    /// - `FOLIO_REQUEST_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::Config`] for an unknown discovery mode.
    pub fn from_env() -> Result<Self, ContentError> {
        let defaults = Self::default();
        let discovery = parse_discovery(std::env::var("FOLIO_DISCOVERY").ok().as_deref())?;
        let base_url = std::env::var("FOLIO_BASE_URL")
            .ok()
            .map(|url| url.trim_end_matches('/').to_owned());
        let layout = ContentLayout {
            root: std::env::var("FOLIO_CONTENT_ROOT").unwrap_or(defaults.layout.root),
            ..defaults.layout
        };

        Ok(Self {
            base_url,
            layout,
            discovery,
            probe_concurrency: env_parse("FOLIO_PROBE_CONCURRENCY", DEFAULT_PROBE_CONCURRENCY),
            theme_storage_key: std::env::var("FOLIO_THEME_STORAGE_KEY").unwrap_or(defaults.theme_storage_key),
            request_timeout_secs: env_parse("FOLIO_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS),
        })
    }

    /// Concurrency actually used for fan-out; never zero.
    #[must_use]
    pub fn effective_concurrency(&self) -> usize {
        self.probe_concurrency.max(1)
    }
}

fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

fn parse_discovery(raw: Option<&str>) -> Result<DiscoveryMode, ContentError> {
    match raw.unwrap_or("probe") {
        "probe" => Ok(DiscoveryMode::Probe),
        "manifest" => Ok(DiscoveryMode::Manifest),
        other => Err(ContentError::Config(format!("unknown FOLIO_DISCOVERY: {other}"))),
    }
}
