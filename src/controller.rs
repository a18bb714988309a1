//! The page behavior controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! One [`Controller`] exists per page. It owns the [`PageContext`] (config,
//! preference store, scroll state) and the debounced scroll registration, runs
//! the one-shot startup work, and routes every dispatched [`Action`] to the
//! module that implements it. Handlers share nothing beyond this context.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::config::PageConfig;
use crate::debounce::Debouncer;
use crate::error::PageError;
use crate::greeting::{self, Greeting};
use crate::page::Page;
use crate::registry::{self, Action, Binding};
use crate::scroll::ScrollState;
use crate::theme::{self, PreferenceStore, Theme};
use crate::{contact, cosmetic, diagnostics, navigate, reveal};

/// State shared by the handlers, built once at startup.
pub struct PageContext {
    pub config: PageConfig,
    pub store: Box<dyn PreferenceStore>,
    pub scroll: ScrollState,
}

pub struct Controller<P: Page> {
    page: P,
    context: PageContext,
    scroll_debounce: Debouncer<P, ()>,
}

/// What startup did, for logging and tests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StartReport {
    pub theme: Theme,
    pub greeting: Greeting,
    pub bindings: Vec<Binding>,
}

impl<P: Page> Controller<P> {
    pub fn new(page: P, config: PageConfig, store: impl PreferenceStore + 'static) -> Self {
        let scroll_debounce = Debouncer::new(page.clone(), config.scroll_debounce_ms, |()| {
            log::trace!("scroll settled");
        });
        Self {
            page,
            context: PageContext { config, store: Box::new(store), scroll: ScrollState::default() },
            scroll_debounce,
        }
    }

    #[must_use]
    pub fn page(&self) -> &P {
        &self.page
    }

    #[must_use]
    pub fn context(&self) -> &PageContext {
        &self.context
    }

    /// Run the startup work and return the bindings to install.
    ///
    /// Applies the stored theme, writes the greeting, checks that every element
    /// of the DOM contract exists, and prints the console banner.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::MissingElement`] for the first contract element
    /// that is absent.
    pub fn start(&self) -> Result<StartReport, PageError> {
        let config = &self.context.config;
        let bindings = registry::bindings(config);
        for binding in &bindings {
            binding.target.resolve(&self.page)?;
        }
        for id in [&config.contact.message_id, &config.contact.name_id, &config.contact.email_id, &config.contact.body_id] {
            registry::Target::Id(id.clone()).resolve(&self.page)?;
        }
        registry::Target::First(config.nav.navbar_selector.clone()).resolve(&self.page)?;

        let theme = theme::apply_initial(&self.page, self.context.store.as_ref(), &config.theme);
        let greeting = greeting::render(&self.page, &config.greeting_id)?;
        diagnostics::print_banner(&self.page, &config.owner_name);
        log::info!("page behavior ready: {} bindings", bindings.len());

        Ok(StartReport { theme, greeting, bindings })
    }

    /// Build the reveal observer, then hide the targets it should watch.
    ///
    /// # Errors
    ///
    /// Returns the observer construction error, with every target still visible.
    pub fn arm_reveal<O>(
        &self,
        observe: impl FnOnce(&reveal::ObserverOptions) -> Result<O, PageError>,
    ) -> Result<(O, Vec<P::Node>), PageError> {
        reveal::arm(&self.page, &self.context.config.reveal, observe)
    }

    /// Intersection callback for a reveal target.
    pub fn reveal(&self, node: &P::Node) {
        reveal::show(&self.page, node);
    }

    /// Run `action` for an event on `node` (`None` for window events).
    ///
    /// # Errors
    ///
    /// Returns [`PageError::NoTarget`] when an element action arrives without
    /// an element, or the handler's own contract error.
    pub fn dispatch(&self, action: Action, node: Option<&P::Node>) -> Result<(), PageError> {
        let config = &self.context.config;
        let element = || node.ok_or(PageError::NoTarget(action));
        match action {
            Action::FollowAnchor => {
                navigate::follow_anchor(&self.page, &config.nav, element()?);
            }
            Action::ToggleTheme => {
                theme::toggle(&self.page, self.context.store.as_ref(), &config.theme, element()?);
            }
            Action::NavbarShadow => {
                crate::scroll::update_navbar(&self.page, &config.nav, &self.context.scroll)?;
            }
            Action::ActiveLink => {
                crate::scroll::highlight_active_link(&self.page, &config.nav);
            }
            Action::DebouncedScroll => self.scroll_debounce.schedule(()),
            Action::SubmitContact => {
                if let contact::SubmitOutcome::Rejected(reason) = contact::submit(&self.page, &config.contact)? {
                    log::debug!("contact form rejected: {reason}");
                }
            }
            Action::FlagRequired => {
                contact::flag_empty_required(&self.page, &config.contact);
            }
            Action::ProjectCardHover => cosmetic::project_card_hover(&self.page, &config.hover, element()?),
            Action::SkillCardEnter => cosmetic::skill_card_enter(&self.page, &config.hover, element()?),
            Action::SkillCardLeave => cosmetic::skill_card_leave(&self.page, element()?),
            Action::InputFocus => cosmetic::input_focus(&self.page, &config.hover, element()?),
            Action::InputBlur => cosmetic::input_blur(&self.page, element()?),
        }
        Ok(())
    }
}
