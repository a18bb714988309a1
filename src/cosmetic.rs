//! Hover and focus cosmetics for cards and form inputs. Inline styles only.

#[cfg(test)]
#[path = "cosmetic_test.rs"]
mod cosmetic_test;

use crate::config::HoverConfig;
use crate::page::Page;

pub fn project_card_hover<P: Page>(page: &P, config: &HoverConfig, card: &P::Node) {
    page.set_style(card, "transition", &config.card_transition);
}

pub fn skill_card_enter<P: Page>(page: &P, config: &HoverConfig, card: &P::Node) {
    page.set_style(card, "border-left", &config.skill_accent);
}

pub fn skill_card_leave<P: Page>(page: &P, card: &P::Node) {
    page.set_style(card, "border-left", "none");
}

/// Lift the input's wrapper while it has focus.
pub fn input_focus<P: Page>(page: &P, config: &HoverConfig, input: &P::Node) {
    if let Some(group) = page.parent(input) {
        page.set_style(&group, "transform", &config.focus_scale);
        page.set_style(&group, "transition", &config.focus_transition);
    }
}

pub fn input_blur<P: Page>(page: &P, input: &P::Node) {
    if let Some(group) = page.parent(input) {
        page.set_style(&group, "transform", "scale(1)");
    }
}
