//! Native HTTP transport backed by `reqwest`.
//!
//! Resolves the page-relative content paths against an absolute base URL so
//! discovery can run outside the browser against a served copy of the site.

use std::time::Duration;

use async_trait::async_trait;

use crate::config::SiteConfig;
use crate::error::ContentError;
use crate::probe::Probe;

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

pub struct HttpProbe {
    client: reqwest::Client,
    base_url: String,
}

impl HttpProbe {
    /// Build a probe for `config.base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::Config`] when no base URL is configured or the
    /// HTTP client cannot be constructed.
    pub fn from_config(config: &SiteConfig) -> Result<Self, ContentError> {
        let base_url = config
            .base_url
            .clone()
            .ok_or_else(|| ContentError::Config("base_url is required for the HTTP probe".into()))?;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| ContentError::Config(format!("HTTP client build failed: {e}")))?;
        Ok(Self { client, base_url: base_url.trim_end_matches('/').to_owned() })
    }

    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        resolve(&self.base_url, path)
    }
}

#[async_trait(?Send)]
impl Probe for HttpProbe {
    async fn fetch_text(&self, path: &str) -> Result<String, ContentError> {
        let url = self.url_for(path);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ContentError::Transport { path: path.to_owned(), message: e.to_string() })?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ContentError::Status { path: path.to_owned(), status: status.as_u16() });
        }
        resp.text()
            .await
            .map_err(|e| ContentError::Transport { path: path.to_owned(), message: e.to_string() })
    }

    async fn exists(&self, path: &str) -> bool {
        match self.client.head(self.url_for(path)).send().await {
            Ok(resp) => resp.status().is_success(),
            Err(e) => {
                tracing::debug!(path, error = %e, "existence check failed");
                false
            }
        }
    }
}

fn resolve(base_url: &str, path: &str) -> String {
    let relative = path.trim_start_matches("./").trim_start_matches('/');
    format!("{base_url}/{relative}")
}
