//! Project metadata documents and the records built from them.

use serde::de::Deserializer;
use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "project_test.rs"]
mod project_test;

/// Per-project `info.json` document as published on the content host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectInfo {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default, rename = "liveDemo")]
    pub live_demo: Option<String>,
    /// Media file names under the project's media folder. A value that is
    /// not an array is treated as absent.
    #[serde(default, deserialize_with = "deserialize_media_list")]
    pub media: Option<Vec<String>>,
}

/// A discovered project, ready to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub github: Option<String>,
    pub live_demo: Option<String>,
    /// Resolved image URLs in display order.
    pub screenshots: Vec<String>,
    pub folder: String,
}

impl ProjectRecord {
    /// Merge a metadata document with its derived screenshot list.
    #[must_use]
    pub fn from_info(info: ProjectInfo, folder: &str, screenshots: Vec<String>) -> Self {
        Self {
            title: info.title,
            description: info.description,
            technologies: info.technologies,
            github: non_empty(info.github),
            live_demo: non_empty(info.live_demo),
            screenshots,
            folder: folder.to_owned(),
        }
    }

    /// The card shown when no project could be discovered.
    #[must_use]
    pub fn placeholder() -> Self {
        Self {
            title: "Sample Project".to_owned(),
            description: "This is a sample project. Add your own projects by creating folders in the content/projects directory."
                .to_owned(),
            technologies: vec!["HTML".to_owned(), "CSS".to_owned(), "JavaScript".to_owned()],
            github: Some("#".to_owned()),
            live_demo: Some("#".to_owned()),
            screenshots: Vec::new(),
            folder: String::new(),
        }
    }
}

/// Outcome of discovery after the fallback policy has been applied.
///
/// Either every project that resolved, or the single placeholder. The two
/// never mix and the list is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectList {
    Discovered(Vec<ProjectRecord>),
    Placeholder(ProjectRecord),
}

impl ProjectList {
    /// Apply the fallback policy to a raw repository result.
    #[must_use]
    pub fn from_records(records: Vec<ProjectRecord>) -> Self {
        if records.is_empty() {
            Self::Placeholder(ProjectRecord::placeholder())
        } else {
            Self::Discovered(records)
        }
    }

    #[must_use]
    pub fn records(&self) -> &[ProjectRecord] {
        match self {
            Self::Discovered(records) => records,
            Self::Placeholder(record) => std::slice::from_ref(record),
        }
    }

    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder(_))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records().len()
    }

    /// Always false; present for clippy's `len_without_is_empty`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records().is_empty()
    }
}

fn non_empty(link: Option<String>) -> Option<String> {
    link.filter(|value| !value.trim().is_empty())
}

fn deserialize_media_list<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let serde_json::Value::Array(entries) = value else {
        return Ok(None);
    };
    let names = entries
        .into_iter()
        .map(|entry| match entry {
            serde_json::Value::String(name) => name,
            other => other.to_string(),
        })
        .collect();
    Ok(Some(names))
}
