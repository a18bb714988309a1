//! Browser bindings: the real [`Page`], `localStorage`, and listener wiring.
//!
//! Everything in this module requires a browser environment and is compiled
//! only with the `hydrate` feature. It contains no page behavior of its own;
//! listeners forward to [`Controller::dispatch`].

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, Event, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement,
    IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, ScrollBehavior, ScrollToOptions, Storage,
    Window,
};

use crate::config::PageConfig;
use crate::contact::ContactSubmission;
use crate::controller::Controller;
use crate::diagnostics::{self, BannerLine};
use crate::error::PageError;
use crate::page::{Page, Scheduler};
use crate::registry::{Binding, Target};
use crate::theme::PreferenceStore;

fn js_error(err: JsValue) -> PageError {
    PageError::Js(format!("{err:?}"))
}

// =============================================================
// Preference store
// =============================================================

/// `localStorage`, when the browser allows it.
pub struct LocalStorage {
    storage: Option<Storage>,
}

impl LocalStorage {
    #[must_use]
    pub fn open(window: &Window) -> Self {
        Self { storage: window.local_storage().ok().flatten() }
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = &self.storage {
            let _ = storage.set_item(key, value);
        }
    }
}

// =============================================================
// Page
// =============================================================

#[derive(Clone)]
pub struct BrowserPage {
    window: Window,
    document: Document,
}

impl BrowserPage {
    /// # Errors
    ///
    /// Returns [`PageError::Js`] outside a window with a document.
    pub fn new() -> Result<Self, PageError> {
        let window = web_sys::window().ok_or_else(|| PageError::Js("no window".to_owned()))?;
        let document = window.document().ok_or_else(|| PageError::Js("no document".to_owned()))?;
        Ok(Self { window, document })
    }

    #[must_use]
    pub fn window(&self) -> &Window {
        &self.window
    }

    fn body(&self) -> Option<HtmlElement> {
        self.document.body()
    }
}

impl Scheduler for BrowserPage {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, task)
    }

    fn cancel(&self, handle: Timeout) {
        drop(handle);
    }

    fn detach(&self, handle: Timeout) {
        let _ = handle.forget();
    }
}

impl Page for BrowserPage {
    type Node = Element;

    fn query(&self, selector: &str) -> Option<Element> {
        self.document.query_selector(selector).ok().flatten()
    }

    fn query_all(&self, selector: &str) -> Vec<Element> {
        let Ok(list) = self.document.query_selector_all(selector) else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn parent(&self, node: &Element) -> Option<Element> {
        node.parent_element()
    }

    fn attribute(&self, node: &Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn offset_top(&self, node: &Element) -> f64 {
        node.dyn_ref::<HtmlElement>().map_or(0.0, |el| f64::from(el.offset_top()))
    }

    fn offset_height(&self, node: &Element) -> f64 {
        node.dyn_ref::<HtmlElement>().map_or(0.0, |el| f64::from(el.offset_height()))
    }

    fn set_style(&self, node: &Element, property: &str, value: &str) {
        let Some(el) = node.dyn_ref::<HtmlElement>() else {
            return;
        };
        let style = el.style();
        if value.is_empty() {
            let _ = style.remove_property(property);
        } else {
            let _ = style.set_property(property, value);
        }
    }

    fn set_text(&self, node: &Element, text: &str) {
        node.set_text_content(Some(text));
    }

    fn set_class_name(&self, node: &Element, class: &str) {
        node.set_class_name(class);
    }

    fn value(&self, node: &Element) -> String {
        if let Some(input) = node.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(area) = node.dyn_ref::<HtmlTextAreaElement>() {
            area.value()
        } else {
            String::new()
        }
    }

    fn reset_form(&self, form: &Element) {
        if let Some(form) = form.dyn_ref::<HtmlFormElement>() {
            form.reset();
        }
    }

    fn body_has_class(&self, class: &str) -> bool {
        self.body().is_some_and(|body| body.class_list().contains(class))
    }

    fn body_add_class(&self, class: &str) {
        if let Some(body) = self.body() {
            let _ = body.class_list().add_1(class);
        }
    }

    fn body_toggle_class(&self, class: &str) -> bool {
        self.body().and_then(|body| body.class_list().toggle(class).ok()).unwrap_or(false)
    }

    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn smooth_scroll_to(&self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn local_hour(&self) -> u32 {
        js_sys::Date::new_0().get_hours()
    }

    fn log_banner(&self, line: &BannerLine) {
        web_sys::console::log_2(&format!("%c{}", line.text).into(), &line.style.into());
    }

    fn log_submission(&self, submission: &ContactSubmission) {
        log::info!("{}", diagnostics::submission_line(submission));
    }
}

// =============================================================
// Wiring
// =============================================================

fn listener(controller: &Rc<Controller<BrowserPage>>, binding: &Binding, node: Option<Element>) -> Closure<dyn FnMut(Event)> {
    let controller = Rc::clone(controller);
    let (action, prevent_default) = (binding.action, binding.prevent_default);
    Closure::wrap(Box::new(move |event: Event| {
        if prevent_default {
            event.prevent_default();
        }
        if let Err(err) = controller.dispatch(action, node.as_ref()) {
            log::error!("{action:?} handler failed: {err}");
        }
    }) as Box<dyn FnMut(Event)>)
}

fn install(controller: &Rc<Controller<BrowserPage>>, bindings: &[Binding]) -> Result<(), PageError> {
    let page = controller.page();
    for binding in bindings {
        let event = binding.event.dom_name();
        if binding.target == Target::Window {
            let callback = listener(controller, binding, None);
            page.window()
                .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
                .map_err(js_error)?;
            callback.forget();
            continue;
        }
        for node in binding.target.resolve(page)? {
            let callback = listener(controller, binding, Some(node.clone()));
            node.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
                .map_err(js_error)?;
            callback.forget();
        }
    }
    Ok(())
}

fn observe_reveal(controller: &Rc<Controller<BrowserPage>>) -> Result<(), PageError> {
    let for_entries = Rc::clone(controller);
    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, _observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            if entry.is_intersecting() {
                for_entries.reveal(&entry.target());
            }
        }
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let (observer, targets) = controller.arm_reveal(|options| {
        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(&options.root_margin);
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init).map_err(js_error)
    })?;
    for target in &targets {
        observer.observe(target);
    }
    callback.forget();
    Ok(())
}

/// Reveal setup waits for `DOMContentLoaded` while the document is still loading.
fn when_ready(controller: &Rc<Controller<BrowserPage>>) -> Result<(), PageError> {
    let page = controller.page();
    if page.document.ready_state() != "loading" {
        return observe_reveal(controller);
    }
    let controller = Rc::clone(controller);
    let callback = Closure::once(move || {
        if let Err(err) = observe_reveal(&controller) {
            log::error!("scroll reveal setup failed: {err}");
        }
    });
    page.document
        .add_event_listener_with_callback("DOMContentLoaded", callback.as_ref().unchecked_ref())
        .map_err(js_error)?;
    callback.forget();
    Ok(())
}

fn boot(config: PageConfig) -> Result<(), PageError> {
    if let Some(level) = config.level_filter().to_level() {
        let _ = console_log::init_with_level(level);
    }

    let page = BrowserPage::new()?;
    let store = LocalStorage::open(page.window());
    let controller = Rc::new(Controller::new(page, config, store));

    let report = controller.start()?;
    install(&controller, &report.bindings)?;
    when_ready(&controller)?;
    log::debug!("theme {} / greeting {:?}", report.theme.as_str(), report.greeting);
    Ok(())
}

// =============================================================
// JS entry points
// =============================================================

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Wire the page with the default configuration.
///
/// # Errors
///
/// Throws when an element of the page's DOM contract is missing.
#[wasm_bindgen]
pub fn run() -> Result<(), JsValue> {
    boot(PageConfig::default()).map_err(JsValue::from)
}

/// Wire the page with a partial JSON configuration override.
///
/// # Errors
///
/// Throws on an invalid override or a missing DOM contract element.
#[wasm_bindgen(js_name = runWithConfig)]
pub fn run_with_config(json: &str) -> Result<(), JsValue> {
    let config = PageConfig::from_json(json)?;
    boot(config).map_err(JsValue::from)
}
