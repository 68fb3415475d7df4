//! Shared client-side state.

pub mod page;
