//! Browser helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Isolates `web-sys` glue from components so the theme logic in `folio`
//! only sees its storage and surface traits.

pub mod theme_dom;
