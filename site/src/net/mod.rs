//! Networking for content discovery.
//!
//! SYSTEM CONTEXT
//! ==============
//! `fetch` adapts the browser fetch API to the `folio::Probe` seam so the
//! core repositories run unchanged in the page.

pub mod fetch;
