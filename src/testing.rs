//! In-memory [`Page`] used by the unit tests.
//!
//! Elements are tagged with the exact selector strings they should answer to,
//! so no CSS parsing is involved. Timers run on a virtual clock advanced with
//! [`FakePage::advance`].

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::rc::Rc;

use crate::contact::ContactSubmission;
use crate::diagnostics::BannerLine;
use crate::page::{Page, Scheduler};
use crate::theme::PreferenceStore;

// =============================================================
// Scheduler
// =============================================================

struct Timer {
    id: u64,
    due: u64,
    task: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct Clock {
    now: u64,
    next_id: u64,
    timers: Vec<Timer>,
}

/// Virtual-time scheduler. Tasks run only inside [`ManualScheduler::advance`].
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<RefCell<Clock>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> u64 {
        self.clock.borrow().now
    }

    pub fn pending(&self) -> usize {
        self.clock.borrow().timers.len()
    }

    /// Move the clock forward, running due tasks in deadline order.
    pub fn advance(&self, ms: u64) {
        let target = self.clock.borrow().now + ms;
        loop {
            let next = {
                let mut clock = self.clock.borrow_mut();
                let due = clock
                    .timers
                    .iter()
                    .enumerate()
                    .filter(|(_, t)| t.due <= target)
                    .min_by_key(|(_, t)| (t.due, t.id))
                    .map(|(i, _)| i);
                due.map(|i| {
                    let timer = clock.timers.remove(i);
                    clock.now = timer.due;
                    timer.task
                })
            };
            match next {
                Some(task) => task(),
                None => break,
            }
        }
        self.clock.borrow_mut().now = target;
    }
}

impl Scheduler for ManualScheduler {
    type Handle = u64;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> u64 {
        let mut clock = self.clock.borrow_mut();
        let id = clock.next_id;
        clock.next_id += 1;
        let due = clock.now + u64::from(delay_ms);
        clock.timers.push(Timer { id, due, task });
        id
    }

    fn cancel(&self, handle: u64) {
        self.clock.borrow_mut().timers.retain(|t| t.id != handle);
    }

    fn detach(&self, _handle: u64) {}
}

// =============================================================
// Preference store
// =============================================================

#[derive(Clone, Default)]
pub struct MemoryStore {
    values: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn with(key: &str, value: &str) -> Self {
        let store = Self::default();
        store.values.borrow_mut().insert(key.to_owned(), value.to_owned());
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values.borrow_mut().insert(key.to_owned(), value.to_owned());
    }
}

// =============================================================
// Page
// =============================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Default)]
struct Element {
    id: Option<String>,
    selectors: Vec<String>,
    parent: Option<NodeId>,
    attributes: HashMap<String, String>,
    style: BTreeMap<String, String>,
    text: String,
    class_name: String,
    value: String,
    offset_top: f64,
    offset_height: f64,
}

#[derive(Default)]
struct Document {
    elements: Vec<Element>,
    body_classes: HashSet<String>,
    scrolled_to: Vec<f64>,
    banner: Vec<String>,
    submissions: Vec<ContactSubmission>,
}

#[derive(Clone)]
pub struct FakePage {
    doc: Rc<RefCell<Document>>,
    scroll: Rc<Cell<f64>>,
    hour: Rc<Cell<u32>>,
    scheduler: ManualScheduler,
}

impl Default for FakePage {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for a fake element.
#[derive(Default)]
pub struct El {
    inner: Element,
}

impl El {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: &str) -> Self {
        self.inner.id = Some(id.to_owned());
        self
    }

    /// Selector string this element answers to in `query`/`query_all`.
    pub fn matches(mut self, selector: &str) -> Self {
        self.inner.selectors.push(selector.to_owned());
        self
    }

    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.inner.attributes.insert(name.to_owned(), value.to_owned());
        self
    }

    pub fn parent(mut self, parent: NodeId) -> Self {
        self.inner.parent = Some(parent);
        self
    }

    pub fn top(mut self, offset_top: f64) -> Self {
        self.inner.offset_top = offset_top;
        self
    }

    pub fn height(mut self, offset_height: f64) -> Self {
        self.inner.offset_height = offset_height;
        self
    }
}

impl FakePage {
    pub fn new() -> Self {
        Self {
            doc: Rc::new(RefCell::new(Document::default())),
            scroll: Rc::new(Cell::new(0.0)),
            hour: Rc::new(Cell::new(9)),
            scheduler: ManualScheduler::new(),
        }
    }

    pub fn add(&self, el: El) -> NodeId {
        let mut doc = self.doc.borrow_mut();
        doc.elements.push(el.inner);
        NodeId(doc.elements.len() - 1)
    }

    pub fn advance(&self, ms: u64) {
        self.scheduler.advance(ms);
    }

    pub fn pending_timers(&self) -> usize {
        self.scheduler.pending()
    }

    pub fn set_scroll(&self, y: f64) {
        self.scroll.set(y);
    }

    pub fn set_hour(&self, hour: u32) {
        self.hour.set(hour);
    }

    pub fn set_value(&self, node: NodeId, value: &str) {
        self.doc.borrow_mut().elements[node.0].value = value.to_owned();
    }

    pub fn style(&self, node: NodeId, property: &str) -> Option<String> {
        self.doc.borrow().elements[node.0].style.get(property).cloned()
    }

    pub fn text(&self, node: NodeId) -> String {
        self.doc.borrow().elements[node.0].text.clone()
    }

    pub fn class_name(&self, node: NodeId) -> String {
        self.doc.borrow().elements[node.0].class_name.clone()
    }

    pub fn scrolled_to(&self) -> Vec<f64> {
        self.doc.borrow().scrolled_to.clone()
    }

    pub fn banner(&self) -> Vec<String> {
        self.doc.borrow().banner.clone()
    }

    pub fn submissions(&self) -> Vec<ContactSubmission> {
        self.doc.borrow().submissions.clone()
    }

    fn is_descendant(doc: &Document, node: NodeId, ancestor: NodeId) -> bool {
        let mut current = doc.elements[node.0].parent;
        while let Some(p) = current {
            if p == ancestor {
                return true;
            }
            current = doc.elements[p.0].parent;
        }
        false
    }
}

impl Scheduler for FakePage {
    type Handle = u64;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> u64 {
        self.scheduler.schedule(delay_ms, task)
    }

    fn cancel(&self, handle: u64) {
        self.scheduler.cancel(handle);
    }

    fn detach(&self, handle: u64) {
        self.scheduler.detach(handle);
    }
}

impl Page for FakePage {
    type Node = NodeId;

    fn query(&self, selector: &str) -> Option<NodeId> {
        self.query_all(selector).into_iter().next()
    }

    fn query_all(&self, selector: &str) -> Vec<NodeId> {
        self.doc
            .borrow()
            .elements
            .iter()
            .enumerate()
            .filter(|(_, el)| el.selectors.iter().any(|s| s == selector))
            .map(|(i, _)| NodeId(i))
            .collect()
    }

    fn by_id(&self, id: &str) -> Option<NodeId> {
        self.doc
            .borrow()
            .elements
            .iter()
            .position(|el| el.id.as_deref() == Some(id))
            .map(NodeId)
    }

    fn parent(&self, node: &NodeId) -> Option<NodeId> {
        self.doc.borrow().elements[node.0].parent
    }

    fn attribute(&self, node: &NodeId, name: &str) -> Option<String> {
        let doc = self.doc.borrow();
        let el = &doc.elements[node.0];
        if name == "id" {
            return el.id.clone();
        }
        el.attributes.get(name).cloned()
    }

    fn offset_top(&self, node: &NodeId) -> f64 {
        self.doc.borrow().elements[node.0].offset_top
    }

    fn offset_height(&self, node: &NodeId) -> f64 {
        self.doc.borrow().elements[node.0].offset_height
    }

    fn set_style(&self, node: &NodeId, property: &str, value: &str) {
        let mut doc = self.doc.borrow_mut();
        let style = &mut doc.elements[node.0].style;
        if value.is_empty() {
            style.remove(property);
        } else {
            style.insert(property.to_owned(), value.to_owned());
        }
    }

    fn set_text(&self, node: &NodeId, text: &str) {
        self.doc.borrow_mut().elements[node.0].text = text.to_owned();
    }

    fn set_class_name(&self, node: &NodeId, class: &str) {
        self.doc.borrow_mut().elements[node.0].class_name = class.to_owned();
    }

    fn value(&self, node: &NodeId) -> String {
        self.doc.borrow().elements[node.0].value.clone()
    }

    fn reset_form(&self, form: &NodeId) {
        let mut doc = self.doc.borrow_mut();
        let controls = (0..doc.elements.len())
            .map(NodeId)
            .filter(|n| Self::is_descendant(&doc, *n, *form))
            .collect::<Vec<_>>();
        for node in controls {
            doc.elements[node.0].value.clear();
        }
    }

    fn body_has_class(&self, class: &str) -> bool {
        self.doc.borrow().body_classes.contains(class)
    }

    fn body_add_class(&self, class: &str) {
        self.doc.borrow_mut().body_classes.insert(class.to_owned());
    }

    fn body_toggle_class(&self, class: &str) -> bool {
        let mut doc = self.doc.borrow_mut();
        if doc.body_classes.remove(class) {
            false
        } else {
            doc.body_classes.insert(class.to_owned());
            true
        }
    }

    fn scroll_y(&self) -> f64 {
        self.scroll.get()
    }

    fn smooth_scroll_to(&self, top: f64) {
        self.doc.borrow_mut().scrolled_to.push(top);
    }

    fn local_hour(&self) -> u32 {
        self.hour.get()
    }

    fn log_banner(&self, line: &BannerLine) {
        self.doc.borrow_mut().banner.push(line.text.clone());
    }

    fn log_submission(&self, submission: &ContactSubmission) {
        self.doc.borrow_mut().submissions.push(submission.clone());
    }
}
