use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;

/// Runs a task after a delay. Dropping the returned handle cancels the task.
pub trait Scheduler {
    type Handle;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Browser timers via `setTimeout`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, task)
    }
}

/// Trailing debounce: every `trigger` cancels the pending run and schedules
/// a fresh one, so `action` fires once per quiet period of `delay_ms`.
pub struct Debouncer<S: Scheduler> {
    scheduler: S,
    delay_ms: u32,
    action: Rc<dyn Fn()>,
    pending: RefCell<Option<S::Handle>>,
}

impl<S: Scheduler> Debouncer<S> {
    pub fn new(scheduler: S, delay_ms: u32, action: impl Fn() + 'static) -> Self {
        Self {
            scheduler,
            delay_ms,
            action: Rc::new(action),
            pending: RefCell::new(None),
        }
    }

    pub fn trigger(&self) {
        self.cancel();
        let action = self.action.clone();
        let handle = self
            .scheduler
            .schedule(self.delay_ms, Box::new(move || action()));
        *self.pending.borrow_mut() = Some(handle);
    }

    pub fn cancel(&self) {
        // Drop outside the borrow in case the handle's Drop re-enters.
        let previous = self.pending.borrow_mut().take();
        drop(previous);
    }
}
