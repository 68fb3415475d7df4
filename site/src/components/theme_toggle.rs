//! Light/dark theme toggle button.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders the `#themeToggle` button with the moon and sun icons in their
//! dark-default state, restores the stored preference once mounted, and
//! toggles on click. All state lives in the DOM and `localStorage`; the
//! component keeps none of its own.

use leptos::prelude::*;

use crate::state::page::PageContext;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let page = expect_context::<PageContext>();
    let elements = page.elements.clone();

    // Icons must exist before restore swaps them, so wait for mount.
    let restore_page = page.clone();
    Effect::new(move || {
        let theme = restore_page.theme_switch().restore();
        log::debug!("theme restored: {}", theme.as_str());
    });

    let on_click = move |_: leptos::ev::MouseEvent| {
        page.theme_switch().toggle();
    };

    view! {
        <button
            id=elements.theme_toggle
            class="theme-toggle"
            on:click=on_click
            title="Toggle theme"
            aria-label="Toggle theme"
        >
            <i id=elements.moon_icon class="fas fa-moon"></i>
            <i id=elements.sun_icon class="fas fa-sun hidden"></i>
        </button>
    }
}
