//! Root application component.

use leptos::prelude::*;

use crate::components::{projects_grid::ProjectsGrid, theme_toggle::ThemeToggle};
use crate::state::page::PageContext;

/// Root component.
///
/// Builds the page context once and provides it to both the theme toggle
/// and the projects grid; neither reaches for globals.
#[component]
pub fn App() -> impl IntoView {
    provide_context(PageContext::from_document());

    view! {
        <header class="site-header">
            <h1 class="site-title">"Portfolio"</h1>
            <ThemeToggle/>
        </header>
        <main>
            <section id="projects" class="projects">
                <h2 class="section-title">"Projects"</h2>
                <ProjectsGrid/>
            </section>
        </main>
    }
}
