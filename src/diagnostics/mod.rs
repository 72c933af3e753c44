// SPDX-License-Identifier: MPL-2.0
//! Diagnostics for the carousel controller.
//!
//! Every state change the controller makes is recorded as a
//! [`CarouselEvent`] in a memory-bounded [`EventJournal`] and mirrored to
//! `tracing` at debug level. The journal is read-only for consumers: the
//! public navigation operations still return nothing, so a swallowed
//! request stays silent to its caller.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`CarouselEvent`]: What happened
//! - [`EventJournal`]: Timestamped events, oldest first

mod buffer;
mod events;

pub use buffer::CircularBuffer;
pub use events::{CarouselEvent, IgnoredReason, JournalEntry, NavigationOrigin};

use crate::domain::carousel::JournalCapacity;
use std::time::Instant;

/// Bounded, timestamped record of carousel events.
#[derive(Debug, Clone)]
pub struct EventJournal {
    entries: CircularBuffer<JournalEntry>,
}

impl EventJournal {
    #[must_use]
    pub fn new(capacity: JournalCapacity) -> Self {
        Self {
            entries: CircularBuffer::new(capacity),
        }
    }

    /// Appends `event`, evicting the oldest entry when full.
    pub fn record(&mut self, at: Instant, event: CarouselEvent) {
        tracing::debug!(?event, "carousel");
        self.entries.push(JournalEntry { at, event });
    }

    /// Events oldest first, without timestamps.
    pub fn events(&self) -> impl DoubleEndedIterator<Item = &CarouselEvent> {
        self.entries.iter().map(|entry| &entry.event)
    }

    #[must_use]
    pub fn last(&self) -> Option<&JournalEntry> {
        self.entries.last()
    }

    /// Number of recorded events matching `predicate`.
    pub fn count(&self, predicate: impl Fn(&CarouselEvent) -> bool) -> usize {
        self.events().filter(|event| predicate(event)).count()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for EventJournal {
    fn default() -> Self {
        Self::new(JournalCapacity::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn record_keeps_timestamp_and_order() {
        let t0 = Instant::now();
        let mut journal = EventJournal::default();
        journal.record(t0, CarouselEvent::Mounted);
        journal.record(t0 + Duration::from_millis(5), CarouselEvent::AutoplayPaused);

        let last = journal.last().expect("journal should not be empty");
        assert_eq!(last.event, CarouselEvent::AutoplayPaused);
        assert_eq!(last.at, t0 + Duration::from_millis(5));
        assert_eq!(
            journal.events().cloned().collect::<Vec<_>>(),
            vec![CarouselEvent::Mounted, CarouselEvent::AutoplayPaused]
        );
    }

    #[test]
    fn journal_is_bounded() {
        let t0 = Instant::now();
        let mut journal = EventJournal::new(JournalCapacity::new(2));
        journal.record(t0, CarouselEvent::Mounted);
        journal.record(t0, CarouselEvent::TickDropped);
        journal.record(t0, CarouselEvent::LockReleased);

        assert_eq!(journal.len(), 2);
        assert_eq!(journal.count(|e| *e == CarouselEvent::Mounted), 0);
    }

    #[test]
    fn count_filters_events() {
        let t0 = Instant::now();
        let mut journal = EventJournal::default();
        for _ in 0..3 {
            journal.record(t0, CarouselEvent::TickDropped);
        }
        journal.record(t0, CarouselEvent::AutoplayResumed);

        assert_eq!(journal.count(|e| matches!(e, CarouselEvent::TickDropped)), 3);
    }
}
