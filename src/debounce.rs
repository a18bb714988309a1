//! Trailing-edge debounce.
//!
//! [`Debouncer::schedule`] (re)starts a quiet-period timer; the wrapped
//! function runs once the timer elapses with the arguments of the most recent
//! call. The pending timer is owned by the debouncer and stays armed until it
//! fires or [`Debouncer::cancel`] is called; dropping the debouncer cancels it.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::page::Scheduler;

pub struct Debouncer<S: Scheduler, A> {
    scheduler: S,
    wait_ms: u32,
    func: Rc<dyn Fn(A)>,
    pending: RefCell<Option<S::Handle>>,
}

impl<S: Scheduler, A: 'static> Debouncer<S, A> {
    pub fn new(scheduler: S, wait_ms: u32, func: impl Fn(A) + 'static) -> Self {
        Self { scheduler, wait_ms, func: Rc::new(func), pending: RefCell::new(None) }
    }

    /// Cancel any pending run and start a new quiet period for `args`.
    pub fn schedule(&self, args: A) {
        self.cancel();
        let func = Rc::clone(&self.func);
        let handle = self.scheduler.schedule(self.wait_ms, Box::new(move || func(args)));
        *self.pending.borrow_mut() = Some(handle);
    }

    /// Drop the pending run, if any.
    pub fn cancel(&self) {
        let previous = self.pending.borrow_mut().take();
        if let Some(handle) = previous {
            self.scheduler.cancel(handle);
        }
    }
}

impl<S: Scheduler, A> Drop for Debouncer<S, A> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.get_mut().take() {
            self.scheduler.cancel(handle);
        }
    }
}
