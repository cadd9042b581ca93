//! Light/dark theme preference.
//!
//! The chosen theme is stored under `leadflow_theme` in `localStorage` and
//! mirrored to `data-theme` on `<html>`, which the stylesheet keys off. With
//! nothing stored, the system `prefers-color-scheme` decides. SSR renders the
//! light theme; the browser corrects it after hydration.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "leadflow_theme";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn from_dark(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }

    /// Stored choice if recognizable, otherwise the system preference.
    #[must_use]
    pub fn resolve(stored: Option<&str>, system_dark: bool) -> Self {
        match stored.map(str::trim) {
            Some("dark") => Self::Dark,
            Some("light") => Self::Light,
            _ => Self::from_dark(system_dark),
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// `data-theme` and storage value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Whether the dark theme should be active on load.
pub fn read_preference() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        let stored = window.local_storage().ok().flatten().and_then(|s| s.get_item(STORAGE_KEY).ok().flatten());
        let system_dark = window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .is_some_and(|mq| mq.matches());
        Theme::resolve(stored.as_deref(), system_dark).is_dark()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Theme::Light.is_dark()
    }
}

/// Set `data-theme` on the document element.
pub fn apply(dark: bool) {
    let theme = Theme::from_dark(dark);
    #[cfg(feature = "hydrate")]
    {
        if let Some(root) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            let _ = root.set_attribute("data-theme", theme.as_str());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Flip the theme, apply it, and remember the choice. Returns the new state.
pub fn toggle(dark: bool) -> bool {
    let next = Theme::from_dark(!dark);
    apply(next.is_dark());
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(STORAGE_KEY, next.as_str());
        }
    }
    next.is_dark()
}
