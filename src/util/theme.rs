//! Theme preference and the `light`/`dark` classes on `<html>`.
//!
//! Reads the stored preference from `localStorage` (with the older boolean
//! `darkMode` key as a fallback), resolves `System` through
//! `prefers-color-scheme`, and writes the result as a class on the document
//! element. Requires a browser environment; native builds only run the pure
//! parts.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::config::{LEGACY_DARK_MODE_KEY, THEME_STORAGE_KEY};
use crate::util::storage::{KeyValueStore, LocalStorage};

const DARK_CLASS: &str = "dark";
const LIGHT_CLASS: &str = "light";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
    /// Follow the operating system preference.
    #[default]
    System,
}

impl Theme {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            "system" => Some(Self::System),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    /// Whether this theme renders dark given the system preference.
    pub fn is_dark(self, system_dark: bool) -> bool {
        match self {
            Self::Light => false,
            Self::Dark => true,
            Self::System => system_dark,
        }
    }

    /// Header switch: dark unless already dark.
    pub fn switched(self) -> Self {
        if self == Self::Dark { Self::Light } else { Self::Dark }
    }

    /// Login toggle: the opposite of what is currently on screen.
    pub fn flipped(self, system_dark: bool) -> Self {
        if self.is_dark(system_dark) { Self::Light } else { Self::Dark }
    }
}

/// Pick a theme from the stored `theme` value and the legacy flag.
pub fn preference_from(stored: Option<&str>, legacy_dark: Option<&str>) -> Theme {
    if let Some(theme) = stored.and_then(Theme::parse) {
        return theme;
    }
    match legacy_dark {
        Some("true") => Theme::Dark,
        Some("false") => Theme::Light,
        _ => Theme::default(),
    }
}

/// Read the stored preference; unreadable storage means `System`.
pub fn read_preference() -> Theme {
    read_preference_from(&LocalStorage)
}

pub fn read_preference_from(store: &impl KeyValueStore) -> Theme {
    let stored = store.get(THEME_STORAGE_KEY).ok().flatten();
    let legacy = if stored.is_none() { store.get(LEGACY_DARK_MODE_KEY).ok().flatten() } else { None };
    preference_from(stored.as_deref(), legacy.as_deref())
}

pub fn persist(theme: Theme) {
    persist_to(&LocalStorage, theme);
}

pub fn persist_to(store: &impl KeyValueStore, theme: Theme) {
    if let Err(e) = store.set(THEME_STORAGE_KEY, theme.as_str()) {
        log::warn!("theme preference not saved: {e}");
    }
}

/// Whether the browser reports `prefers-color-scheme: dark`.
pub fn system_prefers_dark() -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}

/// Class to put on `<html>` for `theme`, if any.
pub fn document_class(theme: Theme, system_dark: bool) -> Option<&'static str> {
    match theme {
        Theme::Light => Some(LIGHT_CLASS),
        Theme::Dark => Some(DARK_CLASS),
        Theme::System => system_dark.then_some(DARK_CLASS),
    }
}

/// Replace the theme class on the `<html>` element.
pub fn apply(theme: Theme) {
    let class = document_class(theme, system_prefers_dark());
    log::debug!("applying theme {} ({})", theme.as_str(), class.unwrap_or("none"));
    #[cfg(feature = "csr")]
    {
        if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            let class_list = el.class_list();
            let _ = class_list.remove_2(LIGHT_CLASS, DARK_CLASS);
            if let Some(class) = class {
                let _ = class_list.add_1(class);
            }
        }
    }
}
