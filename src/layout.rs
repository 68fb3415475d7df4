//! Path conventions of the static content host.
//!
//! Every project lives in its own folder under the content root:
//!
//! ```text
//! <root>/<folder>/info.json
//! <root>/<folder>/media/<name>
//! <root>/index.json            (optional listing manifest)
//! ```

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

pub const DEFAULT_CONTENT_ROOT: &str = "./content/projects";
pub const DEFAULT_INFO_FILE: &str = "info.json";
pub const DEFAULT_MEDIA_DIR: &str = "media";
pub const DEFAULT_SCREENSHOT_FILE: &str = "screenshot.jpg";
pub const DEFAULT_MANIFEST_FILE: &str = "index.json";

/// Where project metadata and media sit relative to the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentLayout {
    pub root: String,
    pub info_file: String,
    pub media_dir: String,
    /// Screenshot probed when a metadata document declares no media list.
    pub screenshot_file: String,
    pub manifest_file: String,
}

impl Default for ContentLayout {
    fn default() -> Self {
        Self {
            root: DEFAULT_CONTENT_ROOT.to_owned(),
            info_file: DEFAULT_INFO_FILE.to_owned(),
            media_dir: DEFAULT_MEDIA_DIR.to_owned(),
            screenshot_file: DEFAULT_SCREENSHOT_FILE.to_owned(),
            manifest_file: DEFAULT_MANIFEST_FILE.to_owned(),
        }
    }
}

impl ContentLayout {
    #[must_use]
    pub fn info_path(&self, folder: &str) -> String {
        format!("{}/{folder}/{}", self.root(), self.info_file)
    }

    #[must_use]
    pub fn media_path(&self, folder: &str, name: &str) -> String {
        format!("{}/{folder}/{}/{name}", self.root(), self.media_dir)
    }

    #[must_use]
    pub fn screenshot_path(&self, folder: &str) -> String {
        self.media_path(folder, &self.screenshot_file)
    }

    #[must_use]
    pub fn manifest_path(&self) -> String {
        format!("{}/{}", self.root(), self.manifest_file)
    }

    fn root(&self) -> &str {
        self.root.trim_end_matches('/')
    }
}
