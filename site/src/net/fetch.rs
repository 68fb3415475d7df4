//! Browser fetch transport via `gloo-net`.
//!
//! Paths are page-relative (`./content/projects/...`) and resolved by the
//! browser against the page URL.
//!
//! ERROR HANDLING
//! ==============
//! Non-success statuses and network failures become `ContentError`s which
//! the repositories treat as "no project here". Outside the browser every
//! request fails with a transport error.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "fetch_test.rs"]
mod fetch_test;

use async_trait::async_trait;
use folio::{ContentError, Probe};

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserProbe;

#[async_trait(?Send)]
impl Probe for BrowserProbe {
    async fn fetch_text(&self, path: &str) -> Result<String, ContentError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::get(path)
                .send()
                .await
                .map_err(|e| transport_error(path, &e.to_string()))?;
            if !resp.ok() {
                return Err(ContentError::Status { path: path.to_owned(), status: resp.status() });
            }
            resp.text()
                .await
                .map_err(|e| transport_error(path, &e.to_string()))
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(transport_error(path, UNAVAILABLE))
        }
    }

    async fn exists(&self, path: &str) -> bool {
        #[cfg(feature = "csr")]
        {
            gloo_net::http::RequestBuilder::new(path)
                .method(gloo_net::http::Method::HEAD)
                .send()
                .await
                .is_ok_and(|resp| resp.ok())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = path;
            false
        }
    }
}

#[cfg(not(feature = "csr"))]
const UNAVAILABLE: &str = "browser fetch is not available outside the page";

fn transport_error(path: &str, message: &str) -> ContentError {
    ContentError::Transport { path: path.to_owned(), message: message.to_owned() }
}
