//! Time-of-day greeting, written once at startup.

#[cfg(test)]
#[path = "greeting_test.rs"]
mod greeting_test;

use crate::error::PageError;
use crate::page::Page;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Greeting {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl Greeting {
    /// Greeting for a local hour: `[5,12)` morning, `[12,17)` afternoon,
    /// `[17,21)` evening, anything else night.
    #[must_use]
    pub fn for_hour(hour: u32) -> Self {
        match hour {
            5..=11 => Self::Morning,
            12..=16 => Self::Afternoon,
            17..=20 => Self::Evening,
            _ => Self::Night,
        }
    }

    #[must_use]
    pub fn text(self) -> &'static str {
        match self {
            Self::Morning => "Good Morning! ☀️",
            Self::Afternoon => "Good Afternoon! 🌤️",
            Self::Evening => "Good Evening! 🌆",
            Self::Night => "Good Night! 🌙",
        }
    }
}

/// Write the greeting for the page's current hour into `#<greeting_id>`.
///
/// # Errors
///
/// Returns [`PageError::MissingElement`] if the greeting element is absent.
pub fn render<P: Page>(page: &P, greeting_id: &str) -> Result<Greeting, PageError> {
    let target = page.by_id(greeting_id).ok_or_else(|| PageError::missing(&format!("#{greeting_id}")))?;
    let greeting = Greeting::for_hour(page.local_hour());
    page.set_text(&target, greeting.text());
    Ok(greeting)
}
