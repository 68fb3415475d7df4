//! Page components.

pub mod projects_grid;
pub mod theme_toggle;
