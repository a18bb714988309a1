//! Scroll reactions: navbar shadow and active navigation link.
//!
//! DESIGN
//! ======
//! Both reactions recompute everything from the current scroll offset on each
//! event; the only retained value is the last processed offset in
//! [`ScrollState`]. Sections are read in document order and assumed not to
//! overlap.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use std::cell::Cell;

use crate::config::NavConfig;
use crate::error::PageError;
use crate::page::Page;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavbarShadow {
    Default,
    Scrolled,
}

impl NavbarShadow {
    /// Scrolled once the offset is strictly past `threshold`.
    #[must_use]
    pub fn for_offset(offset: f64, threshold: f64) -> Self {
        if offset > threshold { Self::Scrolled } else { Self::Default }
    }

    #[must_use]
    pub fn css(self, config: &NavConfig) -> &str {
        match self {
            Self::Default => &config.default_shadow,
            Self::Scrolled => &config.scrolled_shadow,
        }
    }
}

/// A page section as seen by the active-link scan.
#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    pub id: String,
    pub top: f64,
}

/// Id of the last section whose `top - lookahead` is at or above `offset`.
#[must_use]
pub fn active_section(sections: &[Section], offset: f64, lookahead: f64) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|s| offset >= s.top - lookahead)
        .map(|s| s.id.as_str())
}

/// Most recent scroll offset seen by the navbar reaction.
#[derive(Debug, Default)]
pub struct ScrollState {
    last_offset: Cell<f64>,
}

impl ScrollState {
    #[must_use]
    pub fn last_offset(&self) -> f64 {
        self.last_offset.get()
    }
}

/// Apply the navbar shadow for the current offset.
///
/// # Errors
///
/// Returns [`PageError::MissingElement`] if the navbar is absent.
pub fn update_navbar<P: Page>(page: &P, config: &NavConfig, state: &ScrollState) -> Result<NavbarShadow, PageError> {
    let navbar = page.query(&config.navbar_selector).ok_or_else(|| PageError::missing(&config.navbar_selector))?;
    let offset = page.scroll_y();
    let shadow = NavbarShadow::for_offset(offset, config.shadow_threshold);
    page.set_style(&navbar, "box-shadow", shadow.css(config));
    state.last_offset.set(offset);
    Ok(shadow)
}

/// Recompute the active section and recolor the navigation links.
pub fn highlight_active_link<P: Page>(page: &P, config: &NavConfig) -> Option<String> {
    let sections = page
        .query_all(&config.section_selector)
        .iter()
        .filter_map(|node| {
            let id = page.attribute(node, "id")?;
            Some(Section { id, top: page.offset_top(node) })
        })
        .collect::<Vec<_>>();
    let active = active_section(&sections, page.scroll_y(), config.section_lookahead).map(str::to_owned);

    let wanted = active.as_ref().map(|id| format!("#{id}"));
    for link in page.query_all(&config.link_selector) {
        page.set_style(&link, "color", "");
        if wanted.is_some() && page.attribute(&link, "href") == wanted {
            page.set_style(&link, "color", &config.highlight_color);
        }
    }
    active
}
