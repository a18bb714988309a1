//! Registration table: which element gets which listener.
//!
//! DESIGN
//! ======
//! The page's wiring is data. [`bindings`] lists every `{target, event,
//! action}` triple once; the browser layer walks the list and attaches one
//! listener per resolved element, and each listener forwards to
//! [`crate::controller::Controller::dispatch`]. Tests can read the table and
//! call `dispatch` directly without any event machinery.

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;

use crate::config::PageConfig;
use crate::error::PageError;
use crate::page::Page;

/// Where a listener is attached.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Target {
    /// The window itself.
    Window,
    /// A single element by id. Must exist.
    Id(String),
    /// The first element matching a selector. Must exist.
    First(String),
    /// Every element matching a selector, possibly none.
    All(String),
}

impl Target {
    /// Resolve an element target on `page`. `Window` resolves to no elements.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::MissingElement`] when a required target is absent.
    pub fn resolve<P: Page>(&self, page: &P) -> Result<Vec<P::Node>, PageError> {
        match self {
            Self::Window => Ok(Vec::new()),
            Self::Id(id) => page.by_id(id).map(|n| vec![n]).ok_or_else(|| PageError::missing(&format!("#{id}"))),
            Self::First(selector) => page.query(selector).map(|n| vec![n]).ok_or_else(|| PageError::missing(selector)),
            Self::All(selector) => Ok(page.query_all(selector)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    Submit,
    Scroll,
    MouseEnter,
    MouseLeave,
    Focus,
    Blur,
}

impl EventKind {
    /// DOM event type name.
    #[must_use]
    pub fn dom_name(self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::Submit => "submit",
            Self::Scroll => "scroll",
            Self::MouseEnter => "mouseenter",
            Self::MouseLeave => "mouseleave",
            Self::Focus => "focus",
            Self::Blur => "blur",
        }
    }
}

/// Handler run for a binding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    FollowAnchor,
    ToggleTheme,
    NavbarShadow,
    SubmitContact,
    ProjectCardHover,
    ActiveLink,
    InputFocus,
    InputBlur,
    FlagRequired,
    SkillCardEnter,
    SkillCardLeave,
    /// Debounced scroll registration. Settles without side effects.
    DebouncedScroll,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Binding {
    pub target: Target,
    pub event: EventKind,
    pub action: Action,
    /// Cancel the browser's default handling before dispatching.
    pub prevent_default: bool,
}

impl Binding {
    fn new(target: Target, event: EventKind, action: Action) -> Self {
        Self { target, event, action, prevent_default: false }
    }

    fn preventing_default(mut self) -> Self {
        self.prevent_default = true;
        self
    }
}

/// Every listener the page installs, in registration order.
#[must_use]
pub fn bindings(config: &PageConfig) -> Vec<Binding> {
    let nav = &config.nav;
    let contact = &config.contact;
    let hover = &config.hover;
    vec![
        Binding::new(Target::All(nav.anchor_selector.clone()), EventKind::Click, Action::FollowAnchor).preventing_default(),
        Binding::new(Target::Id(config.theme.toggle_id.clone()), EventKind::Click, Action::ToggleTheme),
        Binding::new(Target::Window, EventKind::Scroll, Action::NavbarShadow),
        Binding::new(Target::Id(contact.form_id.clone()), EventKind::Submit, Action::SubmitContact).preventing_default(),
        Binding::new(Target::All(hover.project_card_selector.clone()), EventKind::MouseEnter, Action::ProjectCardHover),
        Binding::new(Target::All(hover.project_card_selector.clone()), EventKind::MouseLeave, Action::ProjectCardHover),
        Binding::new(Target::Window, EventKind::Scroll, Action::ActiveLink),
        Binding::new(Target::All(contact.input_selector.clone()), EventKind::Focus, Action::InputFocus),
        Binding::new(Target::All(contact.input_selector.clone()), EventKind::Blur, Action::InputBlur),
        Binding::new(Target::First(contact.submit_selector.clone()), EventKind::Click, Action::FlagRequired),
        Binding::new(Target::All(hover.skill_card_selector.clone()), EventKind::MouseEnter, Action::SkillCardEnter),
        Binding::new(Target::All(hover.skill_card_selector.clone()), EventKind::MouseLeave, Action::SkillCardLeave),
        Binding::new(Target::Window, EventKind::Scroll, Action::DebouncedScroll),
    ]
}
