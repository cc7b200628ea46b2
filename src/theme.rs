//! Light/dark theme resolution and toggling.
//!
//! The controller owns the applied [`Theme`]; the DOM layer only renders it
//! as the `data-theme` attribute. Resolution order:
//!
//! 1. an explicit preference in storage,
//! 2. the system dark-mode signal,
//! 3. light.
//!
//! Once a preference is stored, system changes no longer affect the page.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;

use crate::store::{KeyValueStore, PreferenceStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Attribute / storage value for this theme.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value; anything other than `light` or `dark` is `None`.
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

    #[must_use]
    pub fn from_system(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An element that can carry the theme attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeHost {
    /// `<body>`.
    Body,
    /// `<html>`, used only until `<body>` is parsed.
    Root,
}

/// Where a render writes the theme and which host must lose a stale copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePlacement {
    pub write: ThemeHost,
    pub clear: Option<ThemeHost>,
}

/// Pick the host for the theme attribute. Once `<body>` exists it is the only
/// carrier; the copy written on `<html>` during start-up is removed so no
/// selector can match a value the page has since left.
#[must_use]
pub fn theme_placement(body_present: bool) -> ThemePlacement {
    if body_present {
        ThemePlacement { write: ThemeHost::Body, clear: Some(ThemeHost::Root) }
    } else {
        ThemePlacement { write: ThemeHost::Root, clear: None }
    }
}

/// Pick the theme for a page load.
#[must_use]
pub fn resolve(stored: Option<Theme>, system_dark: bool) -> Theme {
    stored.unwrap_or(Theme::from_system(system_dark))
}

pub struct ThemeController<S> {
    store: PreferenceStore<S>,
    key: String,
    current: Theme,
}

impl<S: KeyValueStore> ThemeController<S> {
    pub fn new(store: PreferenceStore<S>, key: impl Into<String>) -> Self {
        Self { store, key: key.into(), current: Theme::default() }
    }

    /// The explicit choice in storage, if any. Unreadable storage and
    /// unrecognized values both count as no choice.
    pub fn stored_preference(&self) -> Option<Theme> {
        let raw = self.store.get(&self.key)?;
        let theme = Theme::parse(&raw);
        if theme.is_none() {
            log::warn!("ignoring stored theme {raw:?}");
        }
        theme
    }

    /// Resolve the startup theme and make it current.
    pub fn resolve_and_apply(&mut self, system_dark: bool) -> Theme {
        self.current = resolve(self.stored_preference(), system_dark);
        log::debug!("theme resolved to {}", self.current);
        self.current
    }

    /// Flip the current theme and persist it. A failed write still flips the
    /// page; only the next load forgets the choice.
    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.toggled();
        if !self.store.set(&self.key, self.current.as_str()) {
            log::debug!("theme {} applied without persisting", self.current);
        }
        self.current
    }

    /// React to the system signal changing. Returns the theme to render when
    /// the page follows the system, `None` when a stored choice pins it.
    pub fn on_system_change(&mut self, system_dark: bool) -> Option<Theme> {
        if self.stored_preference().is_some() {
            return None;
        }
        self.current = Theme::from_system(system_dark);
        Some(self.current)
    }

    #[must_use]
    pub fn current(&self) -> Theme {
        self.current
    }

    #[cfg(test)]
    pub fn store(&self) -> &PreferenceStore<S> {
        &self.store
    }
}
