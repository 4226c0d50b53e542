//! `Scheduler` on top of `window.setTimeout`

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};
use std::time::Duration;

use gloo_timers::callback::Timeout;
use regform::{Scheduler, TimerId};

/// `setTimeout` takes a signed 32-bit delay; anything larger fires at once
const MAX_TIMEOUT_MS: u32 = i32::MAX as u32;

fn timeout_millis(delay: Duration) -> u32 {
    u32::try_from(delay.as_millis()).map_or(MAX_TIMEOUT_MS, |ms| ms.min(MAX_TIMEOUT_MS))
}

#[derive(Default)]
struct TimerState {
    next_id: u64,
    timers: HashMap<TimerId, Timeout>,
    // Fired timers are dropped on the next schedule/cancel, never from
    // inside their own callback.
    fired: Vec<TimerId>,
}

impl TimerState {
    fn purge_fired(&mut self) {
        for id in std::mem::take(&mut self.fired) {
            self.timers.remove(&id);
        }
    }
}

/// Browser timers. Each pending callback is owned here until it fires or
/// is cancelled.
#[derive(Clone, Default)]
pub struct BrowserScheduler {
    state: Rc<RefCell<TimerState>>,
}

impl BrowserScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> usize {
        let state = self.state.borrow();
        state.timers.len().saturating_sub(state.fired.len())
    }
}

impl Scheduler for BrowserScheduler {
    fn schedule(&mut self, delay: Duration, task: Box<dyn FnOnce()>) -> TimerId {
        let mut state = self.state.borrow_mut();
        state.purge_fired();

        state.next_id += 1;
        let id = TimerId(state.next_id);
        let millis = timeout_millis(delay);

        let weak: Weak<RefCell<TimerState>> = Rc::downgrade(&self.state);
        let timeout = Timeout::new(millis, move || {
            task();
            if let Some(state) = weak.upgrade() {
                state.borrow_mut().fired.push(id);
            }
        });

        state.timers.insert(id, timeout);
        id
    }

    fn cancel(&mut self, id: TimerId) -> bool {
        let mut state = self.state.borrow_mut();
        let already_fired = state.fired.contains(&id);
        state.purge_fired();

        match state.timers.remove(&id) {
            // Dropping a Timeout clears it
            Some(_timeout) => !already_fired,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_millis_passes_small_delays() {
        assert_eq!(timeout_millis(Duration::from_millis(5000)), 5000);
        assert_eq!(timeout_millis(Duration::ZERO), 0);
    }

    #[test]
    fn test_timeout_millis_clamps_to_signed_range() {
        assert_eq!(timeout_millis(Duration::from_millis(1 << 31)), 2_147_483_647);
        assert_eq!(timeout_millis(Duration::from_millis(u64::MAX)), 2_147_483_647);
    }
}
