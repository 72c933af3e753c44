// SPDX-License-Identifier: MPL-2.0
//! Single owner of every pending piece of timed carousel work.
//!
//! The autoplay timer, the transition lock release, the keyboard grace
//! resumes and the progress sampler are all tasks in one [`Scheduler`], so
//! tearing the controller down is a single [`Scheduler::cancel_all`] call.
//!
//! The scheduler never sleeps or spawns anything. A driver (the iced
//! subscription in the demo, or a test moving a manual clock) asks for the
//! tasks that are due with [`Scheduler::pop_due`].

use std::time::{Duration, Instant};

/// Identifies a scheduled task so it can be cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskHandle(u64);

/// What a scheduled task does when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    /// Repeating: advance to the next slide unless autoplay is paused.
    AutoplayTick,
    /// One-shot: clear the transition lock.
    ReleaseLock,
    /// One-shot: end the grace period granted after keyboard navigation.
    ResumeAutoplay,
    /// Repeating: refresh the autoplay progress value.
    SampleProgress,
}

#[derive(Debug, Clone)]
struct ScheduledTask {
    handle: TaskHandle,
    kind: TaskKind,
    due: Instant,
    period: Option<Duration>,
    seq: u64,
}

/// A task that has come due, with the instant it was due at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DueTask {
    pub handle: TaskHandle,
    pub kind: TaskKind,
    pub at: Instant,
}

/// Deadline queue for carousel tasks.
#[derive(Debug, Default)]
pub struct Scheduler {
    tasks: Vec<ScheduledTask>,
    next_id: u64,
    next_seq: u64,
}

impl Scheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `kind` to fire once at `due`.
    pub fn schedule_once(&mut self, kind: TaskKind, due: Instant) -> TaskHandle {
        self.insert(kind, due, None)
    }

    /// Schedules `kind` to fire at `first_due` and then every `period`.
    ///
    /// A zero period is bumped to one millisecond.
    pub fn schedule_repeating(
        &mut self,
        kind: TaskKind,
        first_due: Instant,
        period: Duration,
    ) -> TaskHandle {
        let period = period.max(Duration::from_millis(1));
        self.insert(kind, first_due, Some(period))
    }

    fn insert(&mut self, kind: TaskKind, due: Instant, period: Option<Duration>) -> TaskHandle {
        let handle = TaskHandle(self.next_id);
        self.next_id += 1;
        let seq = self.bump_seq();
        self.tasks.push(ScheduledTask {
            handle,
            kind,
            due,
            period,
            seq,
        });
        handle
    }

    fn bump_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }

    /// Cancels a task. Returns `false` if it had already fired or been cancelled.
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.handle != handle);
        self.tasks.len() != before
    }

    /// Cancels every pending task and returns how many there were.
    pub fn cancel_all(&mut self) -> usize {
        let count = self.tasks.len();
        self.tasks.clear();
        count
    }

    #[must_use]
    pub fn is_scheduled(&self, handle: TaskHandle) -> bool {
        self.tasks.iter().any(|task| task.handle == handle)
    }

    /// Number of pending tasks of the given kind.
    #[must_use]
    pub fn pending(&self, kind: TaskKind) -> usize {
        self.tasks.iter().filter(|task| task.kind == kind).count()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Removes and returns the earliest task due at or before `now`.
    ///
    /// Ties are broken by scheduling order. A repeating task is put back at
    /// its next cadence point; occurrences that `now` has already passed are
    /// coalesced into this single firing.
    pub fn pop_due(&mut self, now: Instant) -> Option<DueTask> {
        let position = self
            .tasks
            .iter()
            .enumerate()
            .filter(|(_, task)| task.due <= now)
            .min_by_key(|(_, task)| (task.due, task.seq))
            .map(|(position, _)| position)?;

        let fired = DueTask {
            handle: self.tasks[position].handle,
            kind: self.tasks[position].kind,
            at: self.tasks[position].due,
        };

        match self.tasks[position].period {
            Some(period) => {
                let next_due = next_cadence_point(fired.at, period, now);
                let skipped =
                    u64::try_from(missed_occurrences(fired.at, period, now)).unwrap_or(u64::MAX);
                if skipped > 0 {
                    tracing::debug!(kind = ?fired.kind, skipped, "coalesced missed occurrences");
                }
                let seq = self.bump_seq();
                let task = &mut self.tasks[position];
                task.due = next_due;
                task.seq = seq;
            }
            None => {
                self.tasks.swap_remove(position);
            }
        }

        Some(fired)
    }
}

/// Occurrences strictly after `due` that are also at or before `now`.
fn missed_occurrences(due: Instant, period: Duration, now: Instant) -> u128 {
    let behind = now.saturating_duration_since(due);
    behind.as_nanos() / period.as_nanos()
}

/// First point of the cadence `due + k * period` (k >= 1) strictly after `now`.
fn next_cadence_point(due: Instant, period: Duration, now: Instant) -> Instant {
    let steps = missed_occurrences(due, period, now) + 1;
    let steps = u32::try_from(steps).unwrap_or(u32::MAX);
    period
        .checked_mul(steps)
        .and_then(|offset| due.checked_add(offset))
        .unwrap_or_else(|| now + period)
}
