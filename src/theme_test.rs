use super::*;

fn switch_with(stored: Option<&str>) -> ThemeSwitch<MemoryStorage, MemorySurface> {
    let storage = stored.map_or_else(MemoryStorage::default, MemoryStorage::with_value);
    ThemeSwitch::new(storage, MemorySurface::default())
}

fn snapshot(switch: &ThemeSwitch<MemoryStorage, MemorySurface>) -> (bool, bool, bool, Option<String>) {
    let surface = switch.surface();
    (
        surface.is_marked(),
        surface.icon_hidden(ThemeIcon::Moon),
        surface.icon_hidden(ThemeIcon::Sun),
        switch.storage().load(),
    )
}

// =============================================================
// Theme
// =============================================================

#[test]
fn theme_parses_only_known_values() {
    assert_eq!(Theme::parse("light"), Some(Theme::Light));
    assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
    assert_eq!(Theme::parse("Light"), None);
    assert_eq!(Theme::parse(""), None);
}

#[test]
fn default_theme_is_dark() {
    assert_eq!(Theme::default(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
}

// =============================================================
// Toggle
// =============================================================

#[test]
fn toggle_from_dark_goes_light() {
    let switch = switch_with(None);
    assert_eq!(switch.toggle(), Theme::Light);
    assert_eq!(snapshot(&switch), (false, true, false, Some("light".to_owned())));
}

#[test]
fn toggle_from_light_goes_dark() {
    let switch = switch_with(None);
    switch.toggle();
    assert_eq!(switch.toggle(), Theme::Dark);
    assert_eq!(snapshot(&switch), (true, false, true, Some("dark".to_owned())));
}

#[test]
fn double_toggle_restores_marker_icons_and_storage() {
    let switch = switch_with(Some("dark"));
    let before = snapshot(&switch);
    switch.toggle();
    switch.toggle();
    assert_eq!(snapshot(&switch), before);

    switch.toggle();
    let light = snapshot(&switch);
    switch.toggle();
    switch.toggle();
    assert_eq!(snapshot(&switch), light);
}

// =============================================================
// Restore
// =============================================================

#[test]
fn stored_light_restores_light_with_sun_visible() {
    let switch = switch_with(Some("light"));
    assert_eq!(switch.restore(), Theme::Light);
    let surface = switch.surface();
    assert!(!surface.is_marked());
    assert!(!surface.icon_hidden(ThemeIcon::Sun));
    assert!(surface.icon_hidden(ThemeIcon::Moon));
}

#[test]
fn absent_preference_keeps_dark_default() {
    let switch = switch_with(None);
    assert_eq!(switch.restore(), Theme::Dark);
    let surface = switch.surface();
    assert!(surface.is_marked());
    assert!(!surface.icon_hidden(ThemeIcon::Moon));
    assert_eq!(switch.storage().load(), None);
}

#[test]
fn unknown_preference_is_ignored() {
    let switch = switch_with(Some("sepia"));
    assert_eq!(switch.restore(), Theme::Dark);
    assert_eq!(switch.storage().load().as_deref(), Some("sepia"));
}

#[test]
fn restore_toggles_even_when_surface_already_light() {
    let switch = switch_with(Some("light"));
    switch.surface().set_marked(false);
    assert_eq!(switch.restore(), Theme::Dark);
}
