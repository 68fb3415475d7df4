//! Transport seam used by the content repositories.
//!
//! DESIGN
//! ======
//! Repositories only need two questions answered: "what is the body at this
//! path" and "does this path exist". Browser fetch, `reqwest`, and the
//! in-memory map all answer them behind one trait. Futures are `?Send`
//! because browser fetch futures are not.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;

use crate::error::ContentError;

#[cfg(test)]
#[path = "probe_test.rs"]
mod probe_test;

#[async_trait(?Send)]
pub trait Probe {
    /// GET `path` and return its body.
    ///
    /// # Errors
    ///
    /// [`ContentError::Status`] for a non-success response,
    /// [`ContentError::Transport`] when no response arrives.
    async fn fetch_text(&self, path: &str) -> Result<String, ContentError>;

    /// HEAD `path`; any failure counts as absent.
    async fn exists(&self, path: &str) -> bool;
}

/// Probe over an in-memory path map. Useful for previews and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryProbe {
    documents: HashMap<String, String>,
    assets: HashSet<String>,
}

impl MemoryProbe {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` for `path`; the path also counts as existing.
    #[must_use]
    pub fn with_document(mut self, path: impl Into<String>, body: impl Into<String>) -> Self {
        self.documents.insert(path.into(), body.into());
        self
    }

    /// Mark a binary asset (an image) as present without a body.
    #[must_use]
    pub fn with_asset(mut self, path: impl Into<String>) -> Self {
        self.assets.insert(path.into());
        self
    }
}

#[async_trait(?Send)]
impl Probe for MemoryProbe {
    async fn fetch_text(&self, path: &str) -> Result<String, ContentError> {
        self.documents
            .get(path)
            .cloned()
            .ok_or_else(|| ContentError::Status { path: path.to_owned(), status: 404 })
    }

    async fn exists(&self, path: &str) -> bool {
        self.documents.contains_key(path) || self.assets.contains(path)
    }
}
