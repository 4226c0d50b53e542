// File: src/scheduler.rs
// Purpose: One-shot deferred tasks (the success banner timeout)

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

/// Handle for a scheduled task, used to cancel it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u64);

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

/// Host timer facility.
///
/// Tasks run on the host's single event loop, never concurrently with
/// the validator.
pub trait Scheduler {
    /// Run `task` once after `delay`
    fn schedule(&mut self, delay: Duration, task: Box<dyn FnOnce()>) -> TimerId;

    /// Cancel a pending task. Returns false if it already ran or was cancelled.
    fn cancel(&mut self, id: TimerId) -> bool;
}

struct PendingTask {
    id: TimerId,
    due: Duration,
    task: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct ManualState {
    now: Duration,
    next_id: u64,
    pending: Vec<PendingTask>,
}

/// Scheduler driven by a virtual clock.
///
/// Nothing runs until [`ManualScheduler::advance`] moves time forward.
/// Clones share the same clock and queue.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    state: Rc<RefCell<ManualState>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tasks still waiting to run
    pub fn pending(&self) -> usize {
        self.state.borrow().pending.len()
    }

    /// Move the clock forward and run every task that came due, in deadline
    /// order. Returns how many tasks ran.
    pub fn advance(&self, by: Duration) -> usize {
        let due = {
            let mut state = self.state.borrow_mut();
            state.now += by;
            let now = state.now;

            let (mut due, waiting): (Vec<_>, Vec<_>) =
                state.pending.drain(..).partition(|task| task.due <= now);
            state.pending = waiting;
            due.sort_by_key(|task| (task.due, task.id));
            due
        };

        // The queue is released before running so tasks may schedule more work
        let ran = due.len();
        for pending in due {
            (pending.task)();
        }
        ran
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, delay: Duration, task: Box<dyn FnOnce()>) -> TimerId {
        let mut state = self.state.borrow_mut();
        state.next_id += 1;
        let id = TimerId(state.next_id);
        let due = state.now + delay;
        state.pending.push(PendingTask { id, due, task });
        id
    }

    fn cancel(&mut self, id: TimerId) -> bool {
        let mut state = self.state.borrow_mut();
        let before = state.pending.len();
        state.pending.retain(|task| task.id != id);
        state.pending.len() != before
    }
}

impl fmt::Debug for ManualScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("ManualScheduler")
            .field("now", &state.now)
            .field("pending", &state.pending.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_task_runs_only_when_due() {
        let mut scheduler = ManualScheduler::new();
        let fired = Rc::new(Cell::new(false));
        let flag = fired.clone();

        scheduler.schedule(Duration::from_secs(5), Box::new(move || flag.set(true)));

        assert_eq!(scheduler.advance(Duration::from_millis(4999)), 0);
        assert!(!fired.get());

        assert_eq!(scheduler.advance(Duration::from_millis(1)), 1);
        assert!(fired.get());
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_cancel() {
        let mut scheduler = ManualScheduler::new();
        let fired = Rc::new(Cell::new(false));
        let flag = fired.clone();

        let id = scheduler.schedule(Duration::from_secs(1), Box::new(move || flag.set(true)));

        assert!(scheduler.cancel(id));
        assert!(!scheduler.cancel(id));

        scheduler.advance(Duration::from_secs(10));
        assert!(!fired.get());
    }

    #[test]
    fn test_tasks_run_in_deadline_order() {
        let mut scheduler = ManualScheduler::new();
        let order = Rc::new(RefCell::new(Vec::new()));

        for (label, secs) in [("late", 3), ("early", 1), ("middle", 2)] {
            let order = order.clone();
            scheduler.schedule(
                Duration::from_secs(secs),
                Box::new(move || order.borrow_mut().push(label)),
            );
        }

        scheduler.advance(Duration::from_secs(3));
        assert_eq!(*order.borrow(), vec!["early", "middle", "late"]);
    }

    #[test]
    fn test_ids_are_unique() {
        let mut scheduler = ManualScheduler::new();
        let a = scheduler.schedule(Duration::ZERO, Box::new(|| {}));
        let b = scheduler.schedule(Duration::ZERO, Box::new(|| {}));
        assert_ne!(a, b);
        assert_eq!(a.to_string(), "timer#1");
    }
}
