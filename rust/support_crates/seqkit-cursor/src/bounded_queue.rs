//! A fixed-capacity FIFO buffer.
//!
//! `BoundedQueue<T>` holds at most `capacity` elements. Elements enter at the tail
//! and leave at the head. Two insertion disciplines are offered:
//!
//! - [`BoundedQueue::push`] behaves as a ring buffer: when the queue is full, the
//!   oldest element is evicted and handed back to the caller.
//! - [`BoundedQueue::try_push`] behaves as a plain queue: when the queue is full,
//!   the new element is refused and handed back to the caller.
//!
//! Either way, `len() <= capacity()` holds after every call.

use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedQueue<T> {
    items: VecDeque<T>,
    capacity: usize,
}

impl<T> BoundedQueue<T> {
    /// Creates an empty queue that holds at most `capacity` elements.
    ///
    /// Storage is allocated lazily, so a large capacity over a short source
    /// costs no more than the source itself.
    pub fn with_capacity(capacity: usize) -> Self {
        BoundedQueue {
            items: VecDeque::new(),
            capacity,
        }
    }

    /// Appends `value` at the tail, evicting and returning the oldest element
    /// when the queue is already full.
    ///
    /// With a capacity of zero, `value` itself is returned.
    #[inline]
    pub fn push(&mut self, value: T) -> Option<T> {
        if self.capacity == 0 {
            return Some(value);
        }
        let evicted = if self.is_full() {
            self.items.pop_front()
        } else {
            None
        };
        self.items.push_back(value);
        debug_assert!(self.items.len() <= self.capacity);
        evicted
    }

    /// Appends `value` at the tail unless the queue is full, in which case
    /// `value` is handed back.
    #[inline]
    pub fn try_push(&mut self, value: T) -> Result<(), T> {
        if self.is_full() {
            Err(value)
        } else {
            self.items.push_back(value);
            Ok(())
        }
    }

    /// Removes and returns the oldest element.
    #[inline]
    pub fn pop_oldest(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    pub fn peek_oldest(&self) -> Option<&T> {
        self.items.front()
    }

    pub fn peek_newest(&self) -> Option<&T> {
        self.items.back()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    /// Iterates from the oldest to the newest element.
    pub fn iter(&self) -> std::collections::vec_deque::Iter<'_, T> {
        self.items.iter()
    }

    /// Removes every element, oldest first.
    pub fn drain(&mut self) -> std::collections::vec_deque::Drain<'_, T> {
        self.items.drain(..)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T: Clone> BoundedQueue<T> {
    /// Returns a freshly allocated copy of the contents, oldest first.
    ///
    /// The snapshot is independent of the queue: later pushes and pops do not
    /// affect it.
    pub fn to_vec(&self) -> Vec<T> {
        let mut snapshot = Vec::with_capacity(self.items.len());
        snapshot.extend(self.items.iter().cloned());
        snapshot
    }
}

impl<T> IntoIterator for BoundedQueue<T> {
    type Item = T;
    type IntoIter = std::collections::vec_deque::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
