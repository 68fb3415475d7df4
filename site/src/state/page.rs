//! Page-wide context shared by the theme toggle and the projects grid.
//!
//! DESIGN
//! ======
//! Built once at mount from the embedded `#folio-config` JSON block (if the
//! page carries one) and provided through Leptos context. It owns the config
//! and the fixed element identifiers the page markup relies on, and hands
//! out the browser-backed repository and theme switch.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use folio::SiteConfig;
use folio::repository::{self, ContentRepository};
use folio::theme::ThemeSwitch;

use crate::net::fetch::BrowserProbe;
use crate::util::theme_dom::{DomThemeSurface, LocalStorage};

/// Fixed identifiers shared between the page markup and the adapters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageElements {
    pub theme_toggle: &'static str,
    pub moon_icon: &'static str,
    pub sun_icon: &'static str,
    /// Attribute on `<body>` whose presence marks dark mode.
    pub theme_attribute: &'static str,
    /// Class that hides an icon.
    pub hidden_class: &'static str,
    /// Id of the optional embedded JSON config block.
    pub config_script: &'static str,
}

impl Default for PageElements {
    fn default() -> Self {
        Self {
            theme_toggle: "themeToggle",
            moon_icon: "moonIcon",
            sun_icon: "sunIcon",
            theme_attribute: "data-theme",
            hidden_class: "hidden",
            config_script: "folio-config",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageContext {
    pub config: SiteConfig,
    pub elements: PageElements,
}

impl PageContext {
    #[must_use]
    pub fn new(config: SiteConfig) -> Self {
        Self { config, elements: PageElements::default() }
    }

    /// Read config from the page's embedded JSON block, falling back to
    /// defaults when it is missing or malformed.
    #[must_use]
    pub fn from_document() -> Self {
        let elements = PageElements::default();
        let raw = embedded_config(elements.config_script);
        Self { config: config_from_embedded(raw.as_deref()), elements }
    }

    /// Repository selected by the configured discovery mode.
    #[must_use]
    pub fn repository(&self) -> Box<dyn ContentRepository> {
        repository::from_config(BrowserProbe, &self.config)
    }

    #[must_use]
    pub fn theme_switch(&self) -> ThemeSwitch<LocalStorage, DomThemeSurface> {
        ThemeSwitch::new(
            LocalStorage::new(self.config.theme_storage_key.clone()),
            DomThemeSurface::new(&self.elements),
        )
    }
}

fn config_from_embedded(raw: Option<&str>) -> SiteConfig {
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return SiteConfig::default();
    };
    match SiteConfig::from_json(raw) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("ignoring embedded config: {e}");
            SiteConfig::default()
        }
    }
}

fn embedded_config(script_id: &str) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        web_sys::window()?
            .document()?
            .get_element_by_id(script_id)?
            .text_content()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = script_id;
        None
    }
}
