use super::*;
use crate::testing::{El, FakePage};

#[test]
fn skill_card_accent_on_enter_and_cleared_on_leave() {
    let page = FakePage::new();
    let card = page.add(El::new());
    let config = HoverConfig::default();

    skill_card_enter(&page, &config, &card);
    assert_eq!(page.style(card, "border-left").as_deref(), Some("4px solid var(--color-primary)"));
    skill_card_leave(&page, &card);
    assert_eq!(page.style(card, "border-left").as_deref(), Some("none"));
}

#[test]
fn project_card_gets_transition() {
    let page = FakePage::new();
    let card = page.add(El::new());
    project_card_hover(&page, &HoverConfig::default(), &card);
    assert_eq!(page.style(card, "transition").as_deref(), Some("all 0.3s ease"));
}

#[test]
fn focus_scales_parent_group_and_blur_restores() {
    let page = FakePage::new();
    let group = page.add(El::new());
    let input = page.add(El::new().parent(group));
    let config = HoverConfig::default();

    input_focus(&page, &config, &input);
    assert_eq!(page.style(group, "transform").as_deref(), Some("scale(1.02)"));
    assert_eq!(page.style(group, "transition").as_deref(), Some("transform 0.2s ease"));
    assert_eq!(page.style(input, "transform"), None);

    input_blur(&page, &input);
    assert_eq!(page.style(group, "transform").as_deref(), Some("scale(1)"));
}

#[test]
fn focus_without_parent_is_noop() {
    let page = FakePage::new();
    let input = page.add(El::new());
    input_focus(&page, &HoverConfig::default(), &input);
    input_blur(&page, &input);
    assert_eq!(page.style(input, "transform"), None);
}
