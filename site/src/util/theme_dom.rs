//! DOM and `localStorage` adapters for the theme switch.
//!
//! `DomThemeSurface` toggles the marker attribute on `<body>` and the
//! `hidden` class on the two icons; `LocalStorage` persists the preference.
//! Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort: storage quota or privacy-mode failures are
//! ignored. Outside the browser the surface reports the dark default and
//! every write is a no-op.

#[cfg(test)]
#[path = "theme_dom_test.rs"]
mod theme_dom_test;

use folio::theme::{ThemeIcon, ThemeStorage, ThemeSurface};
#[cfg(feature = "csr")]
use folio::theme::DARK_MARKER;

use crate::state::page::PageElements;

pub struct LocalStorage {
    key: String,
}

impl LocalStorage {
    #[must_use]
    pub fn new(key: String) -> Self {
        Self { key }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl ThemeStorage for LocalStorage {
    fn load(&self) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(&self.key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    fn save(&self, value: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
                let _ = storage.set_item(&self.key, value);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = value;
        }
    }
}

pub struct DomThemeSurface {
    attribute: &'static str,
    moon_icon: &'static str,
    sun_icon: &'static str,
    hidden_class: &'static str,
}

impl DomThemeSurface {
    #[must_use]
    pub fn new(elements: &PageElements) -> Self {
        Self {
            attribute: elements.theme_attribute,
            moon_icon: elements.moon_icon,
            sun_icon: elements.sun_icon,
            hidden_class: elements.hidden_class,
        }
    }

    #[must_use]
    pub fn icon_id(&self, icon: ThemeIcon) -> &'static str {
        match icon {
            ThemeIcon::Moon => self.moon_icon,
            ThemeIcon::Sun => self.sun_icon,
        }
    }
}

#[cfg(feature = "csr")]
fn document() -> Option<web_sys::Document> {
    web_sys::window()?.document()
}

impl ThemeSurface for DomThemeSurface {
    fn is_marked(&self) -> bool {
        #[cfg(feature = "csr")]
        {
            document()
                .and_then(|doc| doc.body())
                .is_some_and(|body| body.has_attribute(self.attribute))
        }
        #[cfg(not(feature = "csr"))]
        {
            true
        }
    }

    fn set_marked(&self, marked: bool) {
        #[cfg(feature = "csr")]
        {
            if let Some(body) = document().and_then(|doc| doc.body()) {
                if marked {
                    let _ = body.set_attribute(self.attribute, DARK_MARKER);
                } else {
                    let _ = body.remove_attribute(self.attribute);
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (marked, self.attribute);
        }
    }

    fn set_icon_hidden(&self, icon: ThemeIcon, hidden: bool) {
        #[cfg(feature = "csr")]
        {
            let Some(el) = document().and_then(|doc| doc.get_element_by_id(self.icon_id(icon))) else {
                return;
            };
            let classes = el.class_list();
            let _ = if hidden { classes.add_1(self.hidden_class) } else { classes.remove_1(self.hidden_class) };
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (icon, hidden, self.hidden_class);
        }
    }
}
