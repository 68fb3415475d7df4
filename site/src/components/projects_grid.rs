//! The `.projects-grid` container and its cards.
//!
//! SYSTEM CONTEXT
//! ==============
//! Discovery runs once per page load. The container starts empty; when
//! discovery finishes, the card markup built by `folio::render` replaces its
//! contents in a single write. There is no retry or partial re-render.

use leptos::prelude::*;

use folio::render::GRID_CLASS;

use crate::state::page::PageContext;

#[component]
pub fn ProjectsGrid() -> impl IntoView {
    let page = expect_context::<PageContext>();
    let cards = RwSignal::new(String::new());

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        cards.set(load_cards(&page).await);
    });
    #[cfg(not(feature = "csr"))]
    let _ = page;

    view! { <div class=GRID_CLASS inner_html=move || cards.get()></div> }
}

/// Discover projects and render them to card markup.
pub async fn load_cards(page: &PageContext) -> String {
    let repository = page.repository();
    let list = folio::discover(repository.as_ref()).await;
    folio::render::render_grid_html(list.records(), &mut folio::render::RandomIds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_cards_outside_browser_renders_sample_project() {
        let html = futures::executor::block_on(load_cards(&PageContext::default()));
        assert_eq!(html.matches(r#"class="project-card""#).count(), 1);
        assert!(html.contains("Sample Project"));
        assert!(html.contains(r#"<span class="tech-tag">JavaScript</span>"#));
    }
}
