// SPDX-License-Identifier: MPL-2.0
//! Fixed-capacity ring buffer backing the event journal.

use crate::domain::carousel::JournalCapacity;
use std::collections::VecDeque;

/// Ring buffer that evicts its oldest entry once full.
///
/// Entries are kept oldest first.
///
/// # Example
///
/// ```
/// use hero_carousel::diagnostics::CircularBuffer;
///
/// let mut buffer = CircularBuffer::with_raw_capacity(2);
/// buffer.push('a');
/// buffer.push('b');
/// buffer.push('c');
///
/// let kept: Vec<_> = buffer.iter().copied().collect();
/// assert_eq!(kept, vec!['b', 'c']);
/// ```
#[derive(Debug, Clone)]
pub struct CircularBuffer<T> {
    data: VecDeque<T>,
    capacity: usize,
}

impl<T> CircularBuffer<T> {
    #[must_use]
    pub fn new(capacity: JournalCapacity) -> Self {
        Self::with_raw_capacity(capacity.value())
    }

    /// Creates a buffer with an unchecked capacity (at least 1).
    ///
    /// Prefer [`CircularBuffer::new`] outside tests.
    #[must_use]
    pub fn with_raw_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            data: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, item: T) {
        if self.data.len() >= self.capacity {
            self.data.pop_front();
        }
        self.data.push_back(item);
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> {
        self.data.iter()
    }

    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.data.back()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }
}
