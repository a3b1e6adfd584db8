//! Deterministic virtual-time scheduler.
//!
//! Time only moves when the host calls [`Scheduler::pop_due`] or
//! [`Scheduler::advance_to`]. Tasks are identified by a `TaskId` handle
//! that can be cancelled at any time; handles are never reused, so a
//! cancelled handle cannot alias a later task.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Handle for a scheduled task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TaskId(pub u64);

impl TaskId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Task({})", self.0)
    }
}

#[derive(Clone, Debug)]
struct Scheduled<T> {
    id: TaskId,
    due: Duration,
    /// `Some` for repeating tasks.
    period: Option<Duration>,
    payload: T,
}

/// Virtual-time task scheduler.
///
/// ## Example
///
/// ```
/// use std::time::Duration;
/// use rust_pairs::timers::Scheduler;
///
/// let mut scheduler = Scheduler::new();
/// let tick = scheduler.schedule_every(Duration::from_secs(1), "tick");
/// scheduler.schedule_once(Duration::from_millis(1500), "once");
///
/// let until = Duration::from_secs(2);
/// let fired: Vec<_> = std::iter::from_fn(|| scheduler.pop_due(until))
///     .map(|(_, payload)| payload)
///     .collect();
/// assert_eq!(fired, vec!["tick", "once", "tick"]);
///
/// assert!(scheduler.cancel(tick));
/// assert!(scheduler.is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct Scheduler<T> {
    now: Duration,
    tasks: Vec<Scheduled<T>>,
    next_id: u64,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self {
            now: Duration::ZERO,
            tasks: Vec::new(),
            next_id: 0,
        }
    }
}

impl<T: Clone> Scheduler<T> {
    /// Create an empty scheduler at time zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Run `payload` once, `delay` from now.
    pub fn schedule_once(&mut self, delay: Duration, payload: T) -> TaskId {
        self.push(delay, None, payload)
    }

    /// Run `payload` every `period`, first firing one period from now.
    ///
    /// Panics on a zero period, which would fire forever at one instant.
    pub fn schedule_every(&mut self, period: Duration, payload: T) -> TaskId {
        assert!(!period.is_zero(), "Repeating task period must be non-zero");
        self.push(period, Some(period), payload)
    }

    fn push(&mut self, delay: Duration, period: Option<Duration>, payload: T) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.tasks.push(Scheduled {
            id,
            due: self.now.saturating_add(delay),
            period,
            payload,
        });
        id
    }

    /// Cancel a task. Returns false if it already ran or was cancelled.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() != before
    }

    /// Cancel every outstanding task.
    pub fn cancel_all(&mut self) {
        self.tasks.clear();
    }

    /// Is this task still scheduled?
    #[must_use]
    pub fn is_pending(&self, id: TaskId) -> bool {
        self.tasks.iter().any(|t| t.id == id)
    }

    /// Number of outstanding tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// No outstanding tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Earliest due time among outstanding tasks.
    #[must_use]
    pub fn next_due(&self) -> Option<Duration> {
        self.tasks.iter().map(|t| t.due).min()
    }

    /// Pop the earliest task due at or before `until`.
    ///
    /// Ties resolve in scheduling order. The clock moves to the task's due
    /// time; repeating tasks are re-armed one period later, or dropped once
    /// that would pass `Duration::MAX`. Returns `None` when nothing is due,
    /// leaving the clock untouched.
    pub fn pop_due(&mut self, until: Duration) -> Option<(TaskId, T)> {
        let pos = self
            .tasks
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due <= until)
            .min_by_key(|(_, t)| (t.due, t.id))
            .map(|(pos, _)| pos)?;

        let (id, due, period) = {
            let task = &self.tasks[pos];
            (task.id, task.due, task.period)
        };
        self.now = self.now.max(due);

        match period.and_then(|period| due.checked_add(period)) {
            Some(next) => {
                let task = &mut self.tasks[pos];
                task.due = next;
                Some((id, task.payload.clone()))
            }
            None => {
                let task = self.tasks.swap_remove(pos);
                Some((id, task.payload))
            }
        }
    }

    /// Move the clock forward to `time` without running anything.
    ///
    /// Call after draining `pop_due(time)`. The clock never moves backwards.
    pub fn advance_to(&mut self, time: Duration) {
        self.now = self.now.max(time);
    }
}
