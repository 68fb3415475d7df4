//! # folio
//!
//! Presentation core for a static portfolio site. Discovers project content
//! on a static host that has no listing API, turns each project's metadata
//! into a card node tree, and drives the light/dark theme switch.
//!
//! SYSTEM CONTEXT
//! ==============
//! This crate is target-agnostic. The `site` crate wires it to the browser
//! (fetch transport, `localStorage`, DOM); the `http` feature provides a
//! native `reqwest` transport for running discovery against a served site.

pub mod candidates;
pub mod config;
pub mod error;
#[cfg(feature = "http")]
pub mod http;
pub mod layout;
pub mod probe;
pub mod project;
pub mod render;
pub mod repository;
pub mod theme;

pub use config::{DiscoveryMode, SiteConfig};
pub use error::ContentError;
pub use probe::Probe;
pub use project::{ProjectInfo, ProjectList, ProjectRecord};
pub use repository::{ContentRepository, ManifestRepository, ProbeRepository, discover};
