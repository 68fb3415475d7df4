//! Candidate folder names probed by the guess-and-probe repository.
//!
//! The static host cannot list directories, so discovery walks a fixed,
//! deterministic list of likely folder names: a baseline of descriptive
//! names followed by numbered variants.

#[cfg(test)]
#[path = "candidates_test.rs"]
mod candidates_test;

/// Descriptive folder names tried before any numbered pattern.
pub const BASE_NAMES: [&str; 12] = [
    "my-project",
    "portfolio-project",
    "web-app",
    "mobile-app",
    "game-project",
    "design-project",
    "api-project",
    "fullstack-project",
    "frontend-project",
    "backend-project",
    "ui-project",
    "ux-project",
];

/// Highest number substituted into the numbered patterns (inclusive).
pub const MAX_NUMBER: u32 = 20;

/// Total number of candidates produced by [`candidate_names`].
pub const CANDIDATE_COUNT: usize = BASE_NAMES.len() + 4 * MAX_NUMBER as usize;

/// Build the ordered candidate list.
///
/// Baseline names come first. Then, for each `n` in `1..=MAX_NUMBER`, the
/// patterns `project-n`, `projectn`, `app-n`, `appn` in that order.
#[must_use]
pub fn candidate_names() -> Vec<String> {
    let mut names = Vec::with_capacity(CANDIDATE_COUNT);
    names.extend(BASE_NAMES.iter().map(|name| (*name).to_owned()));
    for n in 1..=MAX_NUMBER {
        names.push(format!("project-{n}"));
        names.push(format!("project{n}"));
        names.push(format!("app-{n}"));
        names.push(format!("app{n}"));
    }
    names
}
