#![cfg(not(feature = "csr"))]

use folio::theme::{Theme, ThemeSwitch};

use super::*;

#[test]
fn surface_resolves_icon_ids_from_page_elements() {
    let surface = DomThemeSurface::new(&PageElements::default());
    assert_eq!(surface.icon_id(ThemeIcon::Moon), "moonIcon");
    assert_eq!(surface.icon_id(ThemeIcon::Sun), "sunIcon");
}

#[test]
fn surface_outside_browser_reports_dark_default() {
    let surface = DomThemeSurface::new(&PageElements::default());
    assert!(surface.is_marked());
    surface.set_marked(false);
    surface.set_icon_hidden(ThemeIcon::Moon, true);
    assert!(surface.is_marked());
}

#[test]
fn storage_outside_browser_is_empty_and_ignores_writes() {
    let storage = LocalStorage::new("theme".into());
    storage.save("light");
    assert_eq!(storage.load(), None);
    assert_eq!(storage.key(), "theme");
}

#[test]
fn restore_outside_browser_keeps_dark() {
    let switch = ThemeSwitch::new(LocalStorage::new("theme".into()), DomThemeSurface::new(&PageElements::default()));
    assert_eq!(switch.restore(), Theme::Dark);
}
