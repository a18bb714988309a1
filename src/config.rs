//! Page configuration: selectors, ids, style values, and timings.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every handler reads its selectors and constants from [`PageConfig`] instead
//! of hard-coding them, so the same controller can be pointed at a page with a
//! slightly different markup. [`PageConfig::default`] matches the portfolio
//! markup this crate ships with.
//!
//! Overrides are partial JSON documents: any field left out keeps its default,
//! unknown fields are rejected.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::reveal;

/// Top-level configuration for the page behavior controller.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    /// Name shown in the startup console banner.
    pub owner_name: String,
    /// Minimum level for the console logger (`error`, `warn`, `info`, `debug`, `trace`, `off`).
    pub log_level: String,
    /// Id of the element receiving the time-of-day greeting.
    pub greeting_id: String,
    /// Quiet period for the debounced scroll registration.
    pub scroll_debounce_ms: u32,
    pub theme: ThemeConfig,
    pub nav: NavConfig,
    pub contact: ContactConfig,
    pub reveal: RevealConfig,
    pub hover: HoverConfig,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            owner_name: "Nada Alshahrani".to_owned(),
            log_level: "info".to_owned(),
            greeting_id: "greeting".to_owned(),
            scroll_debounce_ms: 10,
            theme: ThemeConfig::default(),
            nav: NavConfig::default(),
            contact: ContactConfig::default(),
            reveal: RevealConfig::default(),
            hover: HoverConfig::default(),
        }
    }
}

impl PageConfig {
    /// Parse a partial JSON override on top of the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown fields and
    /// [`ConfigError::Invalid`] when a value is out of range.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.log_level.parse::<log::LevelFilter>().is_err() {
            return Err(ConfigError::Invalid { field: "log_level", reason: "unknown level" });
        }
        if !(0.0..=1.0).contains(&self.reveal.threshold) {
            return Err(ConfigError::Invalid { field: "reveal.threshold", reason: "must be within 0..=1" });
        }
        if !reveal::is_valid_root_margin(&self.reveal.root_margin) {
            return Err(ConfigError::Invalid { field: "reveal.root_margin", reason: "expected one to four px or % offsets" });
        }
        if self.nav.shadow_threshold < 0.0 {
            return Err(ConfigError::Invalid { field: "nav.shadow_threshold", reason: "must not be negative" });
        }
        Ok(())
    }

    /// Logger level derived from [`PageConfig::log_level`], `Info` when unparsable.
    #[must_use]
    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

/// Theme toggle settings.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Key used to persist the preference in `localStorage`.
    pub storage_key: String,
    pub toggle_id: String,
    /// Class placed on `<body>` while the dark theme is active.
    pub dark_class: String,
    /// Delay before the toggle's rotation resets.
    pub spin_reset_ms: u32,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: "theme".to_owned(),
            toggle_id: "themeToggle".to_owned(),
            dark_class: "dark-theme".to_owned(),
            spin_reset_ms: 300,
        }
    }
}

/// Navigation, navbar shadow, and active-link settings.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct NavConfig {
    pub navbar_selector: String,
    /// In-page anchors that get smooth scrolling.
    pub anchor_selector: String,
    pub link_selector: String,
    pub section_selector: String,
    /// Scroll offset above which the navbar uses the scrolled shadow.
    pub shadow_threshold: f64,
    /// How far ahead of a section's top it counts as entered.
    pub section_lookahead: f64,
    pub default_shadow: String,
    pub scrolled_shadow: String,
    pub highlight_color: String,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            navbar_selector: ".navbar".to_owned(),
            anchor_selector: "a[href^=\"#\"]".to_owned(),
            link_selector: ".nav-link".to_owned(),
            section_selector: "section[id]".to_owned(),
            shadow_threshold: 50.0,
            section_lookahead: 200.0,
            default_shadow: "0 2px 8px rgba(115, 165, 198, 0.1)".to_owned(),
            scrolled_shadow: "0 4px 16px rgba(115, 165, 198, 0.15)".to_owned(),
            highlight_color: "var(--color-primary)".to_owned(),
        }
    }
}

/// Contact form settings.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ContactConfig {
    pub form_id: String,
    pub message_id: String,
    pub name_id: String,
    pub email_id: String,
    pub body_id: String,
    pub submit_selector: String,
    pub required_selector: String,
    /// Inputs whose focus lifts their `.form-group` wrapper.
    pub input_selector: String,
    pub error_border: String,
    pub default_border: String,
    pub border_revert_ms: u32,
    pub success_hide_ms: u32,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            form_id: "contactForm".to_owned(),
            message_id: "formMessage".to_owned(),
            name_id: "name".to_owned(),
            email_id: "email".to_owned(),
            body_id: "message".to_owned(),
            submit_selector: ".contact-form button[type=\"submit\"]".to_owned(),
            required_selector: ".contact-form input[required], .contact-form textarea[required]".to_owned(),
            input_selector: ".form-group input, .form-group textarea".to_owned(),
            error_border: "#dc3545".to_owned(),
            default_border: "var(--color-border)".to_owned(),
            border_revert_ms: 2000,
            success_hide_ms: 5000,
        }
    }
}

/// Scroll-reveal settings.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RevealConfig {
    pub selector: String,
    /// Fraction of the element that must be visible.
    pub threshold: f64,
    pub root_margin: String,
    /// Initial downward offset in pixels.
    pub offset_px: u32,
    pub transition: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            selector: ".project-card, .skill-card, .timeline-item, .about-text, .contact-info".to_owned(),
            threshold: 0.1,
            root_margin: "0px 0px -100px 0px".to_owned(),
            offset_px: 30,
            transition: "opacity 0.6s ease, transform 0.6s ease".to_owned(),
        }
    }
}

/// Hover and focus cosmetics.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct HoverConfig {
    pub project_card_selector: String,
    pub skill_card_selector: String,
    pub card_transition: String,
    pub skill_accent: String,
    pub focus_scale: String,
    pub focus_transition: String,
}

impl Default for HoverConfig {
    fn default() -> Self {
        Self {
            project_card_selector: ".project-card".to_owned(),
            skill_card_selector: ".skill-card".to_owned(),
            card_transition: "all 0.3s ease".to_owned(),
            skill_accent: "4px solid var(--color-primary)".to_owned(),
            focus_scale: "scale(1.02)".to_owned(),
            focus_transition: "transform 0.2s ease".to_owned(),
        }
    }
}
