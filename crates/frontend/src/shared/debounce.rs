//! Cancel-and-reschedule debouncing
//!
//! A [`Debouncer`] owns at most one pending timer. Every [`Debouncer::trigger`]
//! drops the previous timer (which cancels it) and arms a new one carrying the
//! latest arguments, so a burst of triggers ends in exactly one call of the
//! wrapped action, `wait_ms` after the last trigger.

use std::rc::Rc;

/// Source of one-shot timers
///
/// Dropping the returned handle must cancel the timer if it has not fired.
pub trait TimerSource {
    type Handle;

    fn start(&self, wait_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Browser timers backed by `setTimeout`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTimers;

impl TimerSource for BrowserTimers {
    type Handle = gloo_timers::callback::Timeout;

    fn start(&self, wait_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Handle {
        gloo_timers::callback::Timeout::new(wait_ms, callback)
    }
}

pub struct Debouncer<S: TimerSource, A> {
    timers: S,
    wait_ms: u32,
    action: Rc<dyn Fn(A)>,
    pending: Option<S::Handle>,
}

impl<S: TimerSource, A: 'static> Debouncer<S, A> {
    pub fn new(timers: S, wait_ms: u32, action: impl Fn(A) + 'static) -> Self {
        Self {
            timers,
            wait_ms,
            action: Rc::new(action),
            pending: None,
        }
    }

    /// Schedules the action with `args`, replacing any pending call
    pub fn trigger(&mut self, args: A) {
        self.cancel();
        let action = Rc::clone(&self.action);
        let handle = self
            .timers
            .start(self.wait_ms, Box::new(move || action(args)));
        self.pending = Some(handle);
    }

    /// Drops the pending call, if any
    pub fn cancel(&mut self) {
        self.pending.take();
    }
}
