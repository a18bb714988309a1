//! Fade-in on scroll for content cards and sections.
//!
//! [`arm`] builds the intersection observer from [`ObserverOptions`] and only
//! then hides every matching element, so a rejected observer leaves the page
//! visible. The browser layer registers the returned elements with that
//! observer and calls [`show`] for each intersecting entry. The
//! observer is never disconnected, so `show` may run more than once per
//! element; it always writes the same final style.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use crate::config::RevealConfig;
use crate::error::PageError;
use crate::page::Page;

/// Intersection observer settings.
#[derive(Clone, Debug, PartialEq)]
pub struct ObserverOptions {
    pub threshold: f64,
    pub root_margin: String,
}

impl From<&RevealConfig> for ObserverOptions {
    fn from(config: &RevealConfig) -> Self {
        Self { threshold: config.threshold, root_margin: config.root_margin.clone() }
    }
}

/// Whether `margin` is a valid observer root margin: one to four offsets,
/// each `0`, pixels, or a percentage.
#[must_use]
pub fn is_valid_root_margin(margin: &str) -> bool {
    let parts = margin.split_whitespace().collect::<Vec<_>>();
    (1..=4).contains(&parts.len()) && parts.into_iter().all(is_margin_offset)
}

fn is_margin_offset(part: &str) -> bool {
    if part == "0" {
        return true;
    }
    let Some(number) = part.strip_suffix("px").or_else(|| part.strip_suffix('%')) else {
        return false;
    };
    !number.is_empty()
        && number.chars().all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+'))
        && number.parse::<f64>().is_ok_and(f64::is_finite)
}

/// Build the observer with `observe`, then hide the targets it will watch.
///
/// # Errors
///
/// Returns the error from `observe`; nothing has been hidden in that case.
pub fn arm<P: Page, O>(
    page: &P,
    config: &RevealConfig,
    observe: impl FnOnce(&ObserverOptions) -> Result<O, PageError>,
) -> Result<(O, Vec<P::Node>), PageError> {
    let observer = observe(&ObserverOptions::from(config))?;
    Ok((observer, prepare(page, config)))
}

/// Hide every element to be revealed and return them for observation.
pub fn prepare<P: Page>(page: &P, config: &RevealConfig) -> Vec<P::Node> {
    let targets = page.query_all(&config.selector);
    let offset = format!("translateY({}px)", config.offset_px);
    for node in &targets {
        page.set_style(node, "opacity", "0");
        page.set_style(node, "transform", &offset);
        page.set_style(node, "transition", &config.transition);
    }
    log::debug!("scroll reveal armed for {} elements", targets.len());
    targets
}

pub fn show<P: Page>(page: &P, node: &P::Node) {
    page.set_style(node, "opacity", "1");
    page.set_style(node, "transform", "translateY(0)");
}
