//! Light/dark theme toggle.
//!
//! The active theme lives in one place: the dark class on `<body>`. The stored
//! preference is only read at startup and overwritten after every toggle with
//! the state derived from that class.
//!
//! TRADE-OFFS
//! ==========
//! Storage writes are best-effort. A page without `localStorage` still
//! toggles; it just forgets the choice on reload.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::config::ThemeConfig;
use crate::page::Page;

/// Narrow get/set view of the browser's persistent key-value store.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
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

    /// Theme for a stored preference. Anything but `"dark"` is light.
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    #[must_use]
    pub fn from_dark_class(present: bool) -> Self {
        if present { Self::Dark } else { Self::Light }
    }
}

/// Apply the stored preference to `<body>` and return it.
pub fn apply_initial<P: Page>(page: &P, store: &dyn PreferenceStore, config: &ThemeConfig) -> Theme {
    let theme = Theme::from_stored(store.get(&config.storage_key).as_deref());
    if theme == Theme::Dark {
        page.body_add_class(&config.dark_class);
    }
    log::debug!("initial theme: {}", theme.as_str());
    theme
}

/// Flip the theme, persist it, and spin the toggle control.
pub fn toggle<P: Page>(page: &P, store: &dyn PreferenceStore, config: &ThemeConfig, control: &P::Node) -> Theme {
    page.body_toggle_class(&config.dark_class);
    let theme = Theme::from_dark_class(page.body_has_class(&config.dark_class));
    store.set(&config.storage_key, theme.as_str());

    page.set_style(control, "transform", "rotate(360deg)");
    let (page_for_reset, control) = (page.clone(), control.clone());
    page.defer(
        config.spin_reset_ms,
        Box::new(move || page_for_reset.set_style(&control, "transform", "rotate(0deg)")),
    );

    log::debug!("theme toggled to {}", theme.as_str());
    theme
}
