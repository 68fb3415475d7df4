//! Content repositories: where the project list comes from.
//!
//! DESIGN
//! ======
//! `ContentRepository` is the only thing the renderer depends on. The static
//! host has no listing API, so the default adapter guesses folder names and
//! probes each one; `ManifestRepository` is the drop-in alternative for
//! hosts that publish a folder list.
//!
//! Project loads fan out through `futures::stream::buffered`, which keeps at
//! most `probe_concurrency` loads in flight and yields results in candidate
//! order regardless of which probe answers first. A concurrency of one is
//! the strictly serial walk.
//!
//! ERROR HANDLING
//! ==============
//! Missing folders are expected (most candidates do not exist) and logged at
//! debug. Malformed metadata is logged at warn. Both skip the project.

use async_trait::async_trait;
use futures::StreamExt as _;
use tracing::{debug, info, warn};

use crate::candidates::candidate_names;
use crate::config::{DiscoveryMode, SiteConfig};
use crate::error::ContentError;
use crate::layout::ContentLayout;
use crate::probe::Probe;
use crate::project::{ProjectInfo, ProjectList, ProjectRecord};

#[cfg(test)]
#[path = "repository_test.rs"]
mod repository_test;

/// Source of the project list shown on the page.
#[async_trait(?Send)]
pub trait ContentRepository {
    /// Every project the repository can resolve, in source order. Failures
    /// are absorbed; an empty list means nothing resolved.
    async fn list_projects(&self) -> Vec<ProjectRecord>;
}

/// Run discovery and apply the placeholder fallback.
pub async fn discover<R>(repository: &R) -> ProjectList
where
    R: ContentRepository + ?Sized,
{
    let records = repository.list_projects().await;
    if records.is_empty() {
        info!("no projects found, showing placeholder project");
    } else {
        info!(count = records.len(), "projects discovered");
    }
    ProjectList::from_records(records)
}

/// Build the repository selected by `config.discovery`.
pub fn from_config<P>(probe: P, config: &SiteConfig) -> Box<dyn ContentRepository>
where
    P: Probe + 'static,
{
    match config.discovery {
        DiscoveryMode::Probe => Box::new(ProbeRepository::new(probe, config)),
        DiscoveryMode::Manifest => Box::new(ManifestRepository::new(probe, config)),
    }
}

// =============================================================================
// PROBE-AND-LOAD
// =============================================================================

/// Load one project folder: its metadata document plus screenshot list.
///
/// A declared `media` list maps one-to-one onto media URLs in declared
/// order. Without one, the conventional screenshot is included only if the
/// host reports it exists.
///
/// # Errors
///
/// Propagates the probe error for the metadata request, or
/// [`ContentError::Parse`] if the document is malformed.
pub async fn load_project<P>(probe: &P, layout: &ContentLayout, folder: &str) -> Result<ProjectRecord, ContentError>
where
    P: Probe + ?Sized,
{
    let info_path = layout.info_path(folder);
    let body = probe.fetch_text(&info_path).await?;
    let info: ProjectInfo = serde_json::from_str(&body)
        .map_err(|e| ContentError::Parse { path: info_path.clone(), message: e.to_string() })?;

    let screenshots = match &info.media {
        Some(names) => names
            .iter()
            .map(|name| layout.media_path(folder, name))
            .collect(),
        None => {
            let path = layout.screenshot_path(folder);
            if probe.exists(&path).await { vec![path] } else { Vec::new() }
        }
    };

    Ok(ProjectRecord::from_info(info, folder, screenshots))
}

async fn load_or_skip<P>(probe: &P, layout: &ContentLayout, folder: &str) -> Option<ProjectRecord>
where
    P: Probe + ?Sized,
{
    match load_project(probe, layout, folder).await {
        Ok(record) => {
            debug!(folder, screenshots = record.screenshots.len(), "project loaded");
            Some(record)
        }
        Err(e) if e.is_missing() => {
            debug!(folder, code = e.error_code(), "no project at candidate");
            None
        }
        Err(e) => {
            warn!(folder, code = e.error_code(), error = %e, "skipping project with malformed metadata");
            None
        }
    }
}

async fn load_all<P>(probe: &P, layout: &ContentLayout, folders: &[String], concurrency: usize) -> Vec<ProjectRecord>
where
    P: Probe + ?Sized,
{
    futures::stream::iter(folders)
        .map(|folder| load_or_skip(probe, layout, folder))
        .buffered(concurrency.max(1))
        .filter_map(futures::future::ready)
        .collect()
        .await
}

// =============================================================================
// GUESS-AND-PROBE
// =============================================================================

/// Repository for hosts without a listing API: probes a fixed list of
/// guessed folder names.
pub struct ProbeRepository<P> {
    probe: P,
    layout: ContentLayout,
    candidates: Vec<String>,
    concurrency: usize,
}

impl<P: Probe> ProbeRepository<P> {
    /// Probe the standard 92 candidates with the configured layout.
    pub fn new(probe: P, config: &SiteConfig) -> Self {
        Self {
            probe,
            layout: config.layout.clone(),
            candidates: candidate_names(),
            concurrency: config.effective_concurrency(),
        }
    }

    /// Replace the candidate list.
    #[must_use]
    pub fn with_candidates(mut self, candidates: Vec<String>) -> Self {
        self.candidates = candidates;
        self
    }

    #[must_use]
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }
}

#[async_trait(?Send)]
impl<P: Probe> ContentRepository for ProbeRepository<P> {
    async fn list_projects(&self) -> Vec<ProjectRecord> {
        debug!(candidates = self.candidates.len(), concurrency = self.concurrency, "probing for projects");
        load_all(&self.probe, &self.layout, &self.candidates, self.concurrency).await
    }
}

// =============================================================================
// LISTING MANIFEST
// =============================================================================

/// Repository for hosts that publish `<root>/index.json`, a JSON array of
/// project folder names.
pub struct ManifestRepository<P> {
    probe: P,
    layout: ContentLayout,
    concurrency: usize,
}

impl<P: Probe> ManifestRepository<P> {
    pub fn new(probe: P, config: &SiteConfig) -> Self {
        Self { probe, layout: config.layout.clone(), concurrency: config.effective_concurrency() }
    }

    /// Fetch and parse the folder list.
    ///
    /// # Errors
    ///
    /// Propagates the probe error, or [`ContentError::Parse`] if the manifest
    /// is not an array of strings.
    pub async fn folders(&self) -> Result<Vec<String>, ContentError> {
        let path = self.layout.manifest_path();
        let body = self.probe.fetch_text(&path).await?;
        serde_json::from_str(&body).map_err(|e| ContentError::Parse { path, message: e.to_string() })
    }
}

#[async_trait(?Send)]
impl<P: Probe> ContentRepository for ManifestRepository<P> {
    async fn list_projects(&self) -> Vec<ProjectRecord> {
        let folders = match self.folders().await {
            Ok(folders) => folders,
            Err(e) => {
                warn!(code = e.error_code(), error = %e, "project manifest unavailable");
                return Vec::new();
            }
        };
        load_all(&self.probe, &self.layout, &folders, self.concurrency).await
    }
}
