// SPDX-License-Identifier: MPL-2.0
//! Cyclic display order of the slides.

use std::cell::RefCell;

/// A slide in display order, keeping its position in the source list so the
/// rendering layer can use it as a stable key.
#[derive(Debug, PartialEq, Eq)]
pub struct OrderedSlide<'a, T> {
    pub slide: &'a T,
    pub original_index: usize,
}

impl<T> Clone for OrderedSlide<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for OrderedSlide<'_, T> {}

/// Rotates `slides` so that `current_index` comes first.
///
/// Element `i` of the result is the slide at `(current_index + i) mod n`.
/// Returns an empty vector for an empty slice.
///
/// # Example
///
/// ```
/// use hero_carousel::carousel::reorder;
///
/// let order: Vec<_> = reorder(&["a", "b", "c"], 1)
///     .into_iter()
///     .map(|s| (*s.slide, s.original_index))
///     .collect();
/// assert_eq!(order, vec![("b", 1), ("c", 2), ("a", 0)]);
/// ```
#[must_use]
pub fn reorder<T>(slides: &[T], current_index: usize) -> Vec<OrderedSlide<'_, T>> {
    rotation(slides.len(), current_index)
        .map(|original_index| OrderedSlide {
            slide: &slides[original_index],
            original_index,
        })
        .collect()
}

fn rotation(len: usize, current_index: usize) -> impl Iterator<Item = usize> {
    (0..len).map(move |i| (current_index + i) % len)
}

/// Memoized rotation indices keyed on the slide-list revision and the
/// current index.
///
/// Only the index order is cached; the borrowed view is rebuilt from it on
/// every read so it always points into the live slide list.
#[derive(Debug, Default)]
pub(crate) struct OrderCache {
    entry: RefCell<Option<CacheEntry>>,
}

#[derive(Debug)]
struct CacheEntry {
    revision: u64,
    current_index: usize,
    order: Vec<usize>,
}

impl OrderCache {
    pub(crate) fn ordered<'a, T>(
        &self,
        slides: &'a [T],
        revision: u64,
        current_index: usize,
    ) -> Vec<OrderedSlide<'a, T>> {
        let mut entry = self.entry.borrow_mut();
        let stale = entry.as_ref().map_or(true, |cached| {
            cached.revision != revision || cached.current_index != current_index
        });
        if stale {
            *entry = Some(CacheEntry {
                revision,
                current_index,
                order: rotation(slides.len(), current_index).collect(),
            });
        }

        entry
            .as_ref()
            .map(|cached| {
                cached
                    .order
                    .iter()
                    .map(|&original_index| OrderedSlide {
                        slide: &slides[original_index],
                        original_index,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    pub(crate) fn invalidate(&self) {
        self.entry.borrow_mut().take();
    }
}
