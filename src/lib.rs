//! # portfolio-behavior
//!
//! WASM behavior layer for a static portfolio page. Once started it attaches a
//! fixed set of independent listeners to the existing markup: smooth in-page
//! scrolling, a persisted light/dark toggle, a time-of-day greeting, navbar
//! and active-link reactions to scrolling, client-side contact form
//! validation, fade-in on scroll, and small hover/focus cosmetics.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | Startup work and action dispatch |
//! | [`registry`] | The `{target, event, action}` binding table |
//! | [`page`] | DOM and timer capabilities the handlers run against |
//! | [`navigate`] | Smooth scrolling for `#fragment` anchors |
//! | [`theme`] | Light/dark toggle and the preference store seam |
//! | [`greeting`] | Hour-based greeting |
//! | [`scroll`] | Navbar shadow and active navigation link |
//! | [`contact`] | Contact form validation and required-field flash |
//! | [`reveal`] | Fade-in on intersection |
//! | [`cosmetic`] | Card hover and input focus styles |
//! | [`debounce`] | Trailing-edge debounce utility |
//! | [`diagnostics`] | Console banner and submission echo |
//! | [`config`] | Selectors, style values, and timings |
//!
//! The `browser` module (feature `hydrate`) implements [`page::Page`] over
//! `web_sys` and exports the JS entry points.

pub mod config;
pub mod contact;
pub mod controller;
pub mod cosmetic;
pub mod debounce;
pub mod diagnostics;
pub mod error;
pub mod greeting;
pub mod navigate;
pub mod page;
pub mod registry;
pub mod reveal;
pub mod scroll;
pub mod theme;

#[cfg(feature = "hydrate")]
pub mod browser;

#[cfg(test)]
mod testing;
