//! Capabilities the handlers need from the host page.
//!
//! DESIGN
//! ======
//! Handlers never touch `web_sys` directly. They run against a [`Page`], which
//! the browser layer implements over the real document and the tests implement
//! over an in-memory element tree. Timers go through [`Scheduler`] so delayed
//! effects and the debounce utility can be driven by a virtual clock.
//!
//! Element handles are cheap clones (`web_sys::Element` in the browser).

use crate::contact::ContactSubmission;
use crate::diagnostics::BannerLine;

/// Single-shot timers.
pub trait Scheduler {
    /// Handle for a pending timer. Dropping it must not fire the task.
    type Handle;

    /// Run `task` once after `delay_ms`.
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;

    /// Cancel a pending timer. Cancelling a timer that already fired is a no-op.
    fn cancel(&self, handle: Self::Handle);

    /// Let a timer run to completion without holding its handle.
    fn detach(&self, handle: Self::Handle);

    /// Fire-and-forget delay.
    fn defer(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        let handle = self.schedule(delay_ms, task);
        self.detach(handle);
    }
}

/// DOM and console operations used by the page handlers.
pub trait Page: Scheduler + Clone + 'static {
    type Node: Clone + 'static;

    fn query(&self, selector: &str) -> Option<Self::Node>;
    fn query_all(&self, selector: &str) -> Vec<Self::Node>;
    fn by_id(&self, id: &str) -> Option<Self::Node>;
    fn parent(&self, node: &Self::Node) -> Option<Self::Node>;

    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;
    /// Distance from the top of the document, in CSS pixels.
    fn offset_top(&self, node: &Self::Node) -> f64;
    /// Rendered height, in CSS pixels.
    fn offset_height(&self, node: &Self::Node) -> f64;

    /// Set an inline style property; an empty value removes it.
    fn set_style(&self, node: &Self::Node, property: &str, value: &str);
    fn set_text(&self, node: &Self::Node, text: &str);
    fn set_class_name(&self, node: &Self::Node, class: &str);

    /// Current value of an input or textarea.
    fn value(&self, node: &Self::Node) -> String;
    /// Restore every control of a form to its default (empty) value.
    fn reset_form(&self, form: &Self::Node);

    fn body_has_class(&self, class: &str) -> bool;
    fn body_add_class(&self, class: &str);
    /// Toggle a class on `<body>` and return whether it is now present.
    fn body_toggle_class(&self, class: &str) -> bool;

    fn scroll_y(&self) -> f64;
    fn smooth_scroll_to(&self, top: f64);

    /// Local wall-clock hour, `0..24`.
    fn local_hour(&self) -> u32;

    fn log_banner(&self, line: &BannerLine);
    fn log_submission(&self, submission: &ContactSubmission);
}
