//! Client-side contact form validation.
//!
//! Nothing is sent anywhere. An accepted submission is echoed to the console
//! and the form is cleared; a rejected one leaves the fields as typed and shows
//! an inline error.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::config::ContactConfig;
use crate::error::PageError;
use crate::page::Page;

// `\x{FEFF}` is whitespace to the browser but not to `\s`.
static EMAIL_PATTERN: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$"));

pub const SUCCESS_MESSAGE: &str = "Thank you for your message! I'll get back to you soon.";

/// Trimmed field values of an accepted submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Why a submission was rejected. `Display` is the text shown to the visitor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please fill in all fields.")]
    MissingField,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.as_ref().is_ok_and(|pattern| pattern.is_match(email))
}

/// Trim the way the browser's `String.prototype.trim` does.
fn trim_field(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// Trim and validate raw field values.
///
/// # Errors
///
/// [`ValidationError::MissingField`] when any trimmed value is empty, otherwise
/// [`ValidationError::InvalidEmail`] when the email does not match the pattern.
pub fn validate(name: &str, email: &str, message: &str) -> Result<ContactSubmission, ValidationError> {
    let (name, email, message) = (trim_field(name), trim_field(email), trim_field(message));
    if name.is_empty() || email.is_empty() || message.is_empty() {
        return Err(ValidationError::MissingField);
    }
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(ContactSubmission { name: name.to_owned(), email: email.to_owned(), message: message.to_owned() })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    #[must_use]
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Success => "form-message success",
            Self::Error => "form-message error",
        }
    }
}

/// Result of one submit attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted(ContactSubmission),
    Rejected(ValidationError),
}

fn element<P: Page>(page: &P, id: &str) -> Result<P::Node, PageError> {
    page.by_id(id).ok_or_else(|| PageError::missing(&format!("#{id}")))
}

/// Show a status message under the form. Success messages hide themselves.
pub fn show_message<P: Page>(page: &P, config: &ContactConfig, target: &P::Node, text: &str, kind: MessageKind) {
    page.set_text(target, text);
    page.set_class_name(target, kind.class_name());
    page.set_style(target, "display", "");
    if kind == MessageKind::Success {
        let (page_for_hide, target) = (page.clone(), target.clone());
        page.defer(
            config.success_hide_ms,
            Box::new(move || page_for_hide.set_style(&target, "display", "none")),
        );
    }
}

/// Handle a submit of the contact form.
///
/// # Errors
///
/// Returns [`PageError::MissingElement`] if a form element named in `config`
/// is absent.
pub fn submit<P: Page>(page: &P, config: &ContactConfig) -> Result<SubmitOutcome, PageError> {
    let form = element(page, &config.form_id)?;
    let status = element(page, &config.message_id)?;
    let name = page.value(&element(page, &config.name_id)?);
    let email = page.value(&element(page, &config.email_id)?);
    let message = page.value(&element(page, &config.body_id)?);

    match validate(&name, &email, &message) {
        Ok(submission) => {
            show_message(page, config, &status, SUCCESS_MESSAGE, MessageKind::Success);
            page.reset_form(&form);
            page.log_submission(&submission);
            Ok(SubmitOutcome::Accepted(submission))
        }
        Err(err) => {
            show_message(page, config, &status, &err.to_string(), MessageKind::Error);
            Ok(SubmitOutcome::Rejected(err))
        }
    }
}

/// Flash the border of every empty required field. Returns how many were flagged.
pub fn flag_empty_required<P: Page>(page: &P, config: &ContactConfig) -> usize {
    let mut flagged = 0;
    for field in page.query_all(&config.required_selector) {
        if !trim_field(&page.value(&field)).is_empty() {
            continue;
        }
        flagged += 1;
        page.set_style(&field, "border-color", &config.error_border);
        let (page_for_revert, default_border) = (page.clone(), config.default_border.clone());
        page.defer(
            config.border_revert_ms,
            Box::new(move || page_for_revert.set_style(&field, "border-color", &default_border)),
        );
    }
    flagged
}
