#[cfg(test)]
#[path = "../../tests/unit/utils/window_test.rs"]
mod window_test;

use std::collections::VecDeque;

/// A bounded collection which keeps only the most recently added items.
#[derive(Clone, Debug)]
pub struct SlidingWindow<T> {
    items: VecDeque<T>,
    capacity: usize,
}

impl<T> SlidingWindow<T> {
    /// Creates a new window with given capacity. Zero capacity means unbounded.
    pub fn new(capacity: usize) -> Self {
        Self { items: VecDeque::with_capacity(capacity.min(1024)), capacity }
    }

    /// Adds an item, evicting the oldest one when the window is full.
    pub fn push(&mut self, item: T) {
        if self.capacity > 0 && self.items.len() == self.capacity {
            self.items.pop_front();
        }

        self.items.push_back(item);
    }

    /// Adds many items in given order.
    pub fn extend<I: IntoIterator<Item = T>>(&mut self, items: I) {
        items.into_iter().for_each(|item| self.push(item));
    }

    /// Returns an iterator from the oldest item to the newest one.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    /// Returns amount of kept items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if window has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Removes all items.
    pub fn clear(&mut self) {
        self.items.clear()
    }
}
