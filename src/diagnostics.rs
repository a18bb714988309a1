//! Console diagnostics: the startup banner and the submission echo line.

#[cfg(test)]
#[path = "diagnostics_test.rs"]
mod diagnostics_test;

use crate::contact::ContactSubmission;
use crate::page::Page;

/// One styled console line. `style` is CSS applied through `%c`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BannerLine {
    pub text: String,
    pub style: &'static str,
}

/// The three welcome lines printed once at startup.
#[must_use]
pub fn banner(owner_name: &str) -> [BannerLine; 3] {
    [
        BannerLine {
            text: "👋 Welcome to my Portfolio!".to_owned(),
            style: "color: #73A5C6; font-size: 20px; font-weight: bold;",
        },
        BannerLine {
            text: format!("Built with ❤️ by {owner_name}"),
            style: "color: #5B8FA3; font-size: 14px;",
        },
        BannerLine {
            text: "Interested in the code? Check out the GitHub repository!".to_owned(),
            style: "color: #73A5C6; font-size: 12px;",
        },
    ]
}

pub fn print_banner<P: Page>(page: &P, owner_name: &str) {
    for line in &banner(owner_name) {
        page.log_banner(line);
    }
}

/// Console line echoing an accepted contact submission.
#[must_use]
pub fn submission_line(submission: &ContactSubmission) -> String {
    match serde_json::to_string(submission) {
        Ok(json) => format!("Form submitted: {json}"),
        Err(_) => format!("Form submitted: {submission:?}"),
    }
}
