//! Timer Module - Deferred tasks on the UI thread
//!
//! A single-threaded timer queue driven by the host event loop. Components
//! schedule one-shot tasks (e.g. the copy-feedback revert) and keep a
//! [`TimerHandle`] to cancel them. Nothing runs until the loop calls
//! [`run_due`], so tasks always execute on the thread that owns the signals
//! they touch.
//!
//! # Clock
//!
//! The queue keeps its own monotonic clock. It starts at the first call to
//! [`now`] and only moves when [`run_due`] or [`advance`] is called. Deadlines
//! are computed against this clock, which makes tests deterministic.
//!
//! # Example
//!
//! ```ignore
//! use spark_fields::state::timers;
//! use std::time::{Duration, Instant};
//!
//! let handle = timers::schedule(Duration::from_secs(3), || println!("later"));
//!
//! // Event loop tick
//! timers::run_due(Instant::now());
//!
//! // Changed our mind
//! handle.cancel();
//! ```

use std::cell::RefCell;
use std::time::{Duration, Instant};

// =============================================================================
// TIMER QUEUE
// =============================================================================

struct TimerEntry {
    id: u64,
    deadline: Instant,
    task: Box<dyn FnOnce()>,
}

struct TimerQueue {
    clock: Option<Instant>,
    next_id: u64,
    entries: Vec<TimerEntry>,
}

impl TimerQueue {
    fn new() -> Self {
        Self {
            clock: None,
            next_id: 0,
            entries: Vec::new(),
        }
    }

    fn now(&mut self) -> Instant {
        *self.clock.get_or_insert_with(Instant::now)
    }

    /// Move the clock forward (never backward) and return it.
    fn advance_to(&mut self, now: Instant) -> Instant {
        let current = self.now();
        let next = current.max(now);
        self.clock = Some(next);
        next
    }

    /// Remove the earliest task whose deadline has passed.
    fn take_due(&mut self, clock: Instant) -> Option<Box<dyn FnOnce()>> {
        let position = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.deadline <= clock)
            .min_by_key(|(_, entry)| (entry.deadline, entry.id))
            .map(|(position, _)| position)?;
        Some(self.entries.remove(position).task)
    }
}

thread_local! {
    static TIMERS: RefCell<TimerQueue> = RefCell::new(TimerQueue::new());
}

// =============================================================================
// HANDLE
// =============================================================================

/// Handle to a scheduled task.
///
/// Dropping the handle does not cancel the task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle {
    id: u64,
}

impl TimerHandle {
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Cancel the task. Returns false if it already ran or was cancelled.
    pub fn cancel(&self) -> bool {
        cancel(*self)
    }

    /// Check if the task is still waiting to run.
    pub fn is_pending(&self) -> bool {
        TIMERS.with(|timers| {
            timers
                .borrow()
                .entries
                .iter()
                .any(|entry| entry.id == self.id)
        })
    }
}

// =============================================================================
// PUBLIC API
// =============================================================================

/// Current time of the timer clock.
pub fn now() -> Instant {
    TIMERS.with(|timers| timers.borrow_mut().now())
}

/// Schedule `task` to run once, `delay` after the current clock time.
pub fn schedule<F>(delay: Duration, task: F) -> TimerHandle
where
    F: FnOnce() + 'static,
{
    TIMERS.with(|timers| {
        let mut queue = timers.borrow_mut();
        let id = queue.next_id;
        queue.next_id += 1;
        let deadline = queue.now() + delay;
        queue.entries.push(TimerEntry {
            id,
            deadline,
            task: Box::new(task),
        });
        tracing::trace!(timer = id, ?delay, "timer scheduled");
        TimerHandle { id }
    })
}

/// Cancel a scheduled task. Returns false if it already ran or was cancelled.
pub fn cancel(handle: TimerHandle) -> bool {
    TIMERS.with(|timers| {
        let mut queue = timers.borrow_mut();
        let before = queue.entries.len();
        queue.entries.retain(|entry| entry.id != handle.id);
        let removed = queue.entries.len() != before;
        if removed {
            tracing::trace!(timer = handle.id, "timer cancelled");
        }
        removed
    })
}

/// Run every task whose deadline is at or before `now`, in deadline order.
///
/// Tasks may schedule or cancel other timers while running.
/// Returns the number of tasks that ran.
pub fn run_due(now: Instant) -> usize {
    let mut fired = 0;

    loop {
        // Release the borrow before running the task
        let task = TIMERS.with(|timers| {
            let mut queue = timers.borrow_mut();
            let clock = queue.advance_to(now);
            queue.take_due(clock)
        });

        match task {
            Some(task) => {
                task();
                fired += 1;
            }
            None => break,
        }
    }

    fired
}

/// Advance the clock by `by` and run everything that became due.
pub fn advance(by: Duration) -> usize {
    let target = now() + by;
    run_due(target)
}

/// Earliest pending deadline, if any.
///
/// Event loops use this to bound their poll timeout.
pub fn next_deadline() -> Option<Instant> {
    TIMERS.with(|timers| {
        timers
            .borrow()
            .entries
            .iter()
            .map(|entry| entry.deadline)
            .min()
    })
}

/// Number of tasks waiting to run.
pub fn pending_count() -> usize {
    TIMERS.with(|timers| timers.borrow().entries.len())
}

/// Drop all pending tasks and restart the clock (for testing).
pub fn reset_timers() {
    TIMERS.with(|timers| {
        *timers.borrow_mut() = TimerQueue::new();
    });
}

// =============================================================================
// TESTS
// =============================================================================
