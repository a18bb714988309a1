//! Smooth scrolling for in-page anchors.
//!
//! The default jump is always cancelled by the browser layer; this module
//! decides whether and where to scroll instead.

#[cfg(test)]
#[path = "navigate_test.rs"]
mod navigate_test;

use crate::config::NavConfig;
use crate::page::Page;

/// Fragment id referenced by an anchor's `href`, if it names one.
///
/// Returns `None` for the bare `#` and for anything not starting with `#`.
#[must_use]
pub fn fragment_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Scroll position that puts a section's top just below the fixed navbar.
#[must_use]
pub fn scroll_position(target_top: f64, navbar_height: f64) -> f64 {
    target_top - navbar_height
}

/// Handle a click on an in-page anchor. Returns the position scrolled to.
pub fn follow_anchor<P: Page>(page: &P, config: &NavConfig, anchor: &P::Node) -> Option<f64> {
    let href = page.attribute(anchor, "href")?;
    let id = fragment_target(&href)?;
    let Some(target) = page.by_id(id) else {
        log::debug!("anchor target #{id} not found");
        return None;
    };
    let navbar_height = page.query(&config.navbar_selector).map_or(0.0, |nav| page.offset_height(&nav));
    let top = scroll_position(page.offset_top(&target), navbar_height);
    page.smooth_scroll_to(top);
    Some(top)
}
