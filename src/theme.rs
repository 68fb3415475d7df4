//! Light/dark theme switch.
//!
//! The page is dark by default: the root carries the `data-theme="dark"`
//! marker, the moon icon shows and the sun icon is hidden. Light mode is the
//! absence of the marker with the icons swapped. The switch itself is
//! stateless; it reads the current theme back from the surface on every
//! toggle, so the surface is the single source of truth.
//!
//! TRADE-OFFS
//! ==========
//! Restore only ever toggles away from the markup default when the stored
//! preference is `light`. There is no direct "set dark" path, so if the
//! default markup were ever light-first, a stored `light` would flip the
//! page to dark.

use std::cell::{Cell, RefCell};

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Value written to the marker attribute in dark mode.
pub const DARK_MARKER: &str = "dark";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeIcon {
    Moon,
    Sun,
}

/// Persistent key/value storage for the preference.
pub trait ThemeStorage {
    fn load(&self) -> Option<String>;
    fn save(&self, value: &str);
}

/// The visible parts of the page the theme touches.
pub trait ThemeSurface {
    /// Whether the root currently carries the dark marker.
    fn is_marked(&self) -> bool;
    fn set_marked(&self, marked: bool);
    fn set_icon_hidden(&self, icon: ThemeIcon, hidden: bool);
}

pub struct ThemeSwitch<S, V> {
    storage: S,
    surface: V,
}

impl<S: ThemeStorage, V: ThemeSurface> ThemeSwitch<S, V> {
    pub fn new(storage: S, surface: V) -> Self {
        Self { storage, surface }
    }

    /// Theme currently shown by the surface.
    pub fn current(&self) -> Theme {
        if self.surface.is_marked() { Theme::Dark } else { Theme::Light }
    }

    /// Flip the theme, update the icons, persist the choice.
    pub fn toggle(&self) -> Theme {
        let next = self.current().toggled();
        self.apply(next);
        self.storage.save(next.as_str());
        tracing::debug!(theme = next.as_str(), "theme toggled");
        next
    }

    /// Startup restore: a stored `light` toggles once away from the dark
    /// default. Anything else leaves the page untouched.
    pub fn restore(&self) -> Theme {
        match self.storage.load().as_deref().and_then(Theme::parse) {
            Some(Theme::Light) => self.toggle(),
            _ => self.current(),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn surface(&self) -> &V {
        &self.surface
    }

    fn apply(&self, theme: Theme) {
        let dark = theme == Theme::Dark;
        self.surface.set_marked(dark);
        self.surface.set_icon_hidden(ThemeIcon::Moon, !dark);
        self.surface.set_icon_hidden(ThemeIcon::Sun, dark);
    }
}

/// In-memory storage, e.g. when the browser denies `localStorage`.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    value: RefCell<Option<String>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn with_value(value: &str) -> Self {
        Self { value: RefCell::new(Some(value.to_owned())) }
    }
}

impl ThemeStorage for MemoryStorage {
    fn load(&self) -> Option<String> {
        self.value.borrow().clone()
    }

    fn save(&self, value: &str) {
        *self.value.borrow_mut() = Some(value.to_owned());
    }
}

/// Surface state held in memory; starts as the dark default markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemorySurface {
    marked: Cell<bool>,
    moon_hidden: Cell<bool>,
    sun_hidden: Cell<bool>,
}

impl Default for MemorySurface {
    fn default() -> Self {
        Self { marked: Cell::new(true), moon_hidden: Cell::new(false), sun_hidden: Cell::new(true) }
    }
}

impl MemorySurface {
    #[must_use]
    pub fn icon_hidden(&self, icon: ThemeIcon) -> bool {
        match icon {
            ThemeIcon::Moon => self.moon_hidden.get(),
            ThemeIcon::Sun => self.sun_hidden.get(),
        }
    }
}

impl ThemeSurface for MemorySurface {
    fn is_marked(&self) -> bool {
        self.marked.get()
    }

    fn set_marked(&self, marked: bool) {
        self.marked.set(marked);
    }

    fn set_icon_hidden(&self, icon: ThemeIcon, hidden: bool) {
        match icon {
            ThemeIcon::Moon => self.moon_hidden.set(hidden),
            ThemeIcon::Sun => self.sun_hidden.set(hidden),
        }
    }
}
