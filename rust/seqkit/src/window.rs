//! Overlapping window adapters.
//!
//! All four adapters keep at most `size` source elements in a [`BoundedQueue`] and
//! emit each window as a freshly allocated `Vec`, so a window handed to the caller
//! never changes when the adapter advances.
//!
//! | adapter | windows for `N` source elements |
//! |---|---|
//! | [`Window`] (strict) | `N - size + 1` full windows, none when `N < size` |
//! | [`Window`] (partial) | as strict, plus one short window when `0 < N < size` |
//! | [`WindowLeft`] | `N` windows: `size, ..., size, size - 1, ..., 1` |
//! | [`WindowRight`] | `N` windows: `1, 2, ..., size, ..., size` |

use seqkit_common::{Result, verify_arg};
use seqkit_cursor::{BoundedQueue, Cursor};

/// What [`Window`] emits when the source is shorter than the window size.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum WindowBoundary {
    /// No window at all.
    #[default]
    Strict,
    /// A single window holding every source element (nothing for an empty source).
    Partial,
}

/// Full-size sliding windows over a source.
///
/// The first window is emitted after exactly `size` elements have been pulled;
/// every later window costs one more pull.
#[derive(Debug, Clone)]
pub struct Window<I: Iterator> {
    cursor: Cursor<I>,
    buffer: BoundedQueue<I::Item>,
    boundary: WindowBoundary,
    primed: bool,
}

impl<I: Iterator> Window<I> {
    /// Creates a window adapter.
    ///
    /// Fails with an invalid-argument error if `size` is zero.
    pub fn new(inner: I, size: usize, boundary: WindowBoundary) -> Result<Self> {
        verify_arg!(size, size > 0);
        Ok(Window {
            cursor: Cursor::new(inner),
            buffer: BoundedQueue::with_capacity(size),
            boundary,
            primed: false,
        })
    }

    pub fn boundary(&self) -> WindowBoundary {
        self.boundary
    }

    fn windows_for(&self, n: usize) -> usize {
        let size = self.buffer.capacity();
        if n >= size {
            n - size + 1
        } else if n > 0 && self.boundary == WindowBoundary::Partial {
            1
        } else {
            0
        }
    }
}

impl<I> Iterator for Window<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.primed {
            let value = self.cursor.advance()?;
            self.buffer.push(value);
            return Some(self.buffer.to_vec());
        }

        self.primed = true;
        while !self.buffer.is_full() {
            match self.cursor.advance() {
                Some(value) => {
                    self.buffer.push(value);
                }
                None => break,
            }
        }

        if self.buffer.is_full() {
            Some(self.buffer.to_vec())
        } else if self.boundary == WindowBoundary::Partial && !self.buffer.is_empty() {
            Some(self.buffer.drain().collect())
        } else {
            self.buffer.clear();
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.cursor.size_hint();
        if self.primed {
            (lower, upper)
        } else {
            (self.windows_for(lower), upper.map(|n| self.windows_for(n)))
        }
    }
}

/// Windows anchored to the left edge: full windows while the source lasts, then
/// windows shrinking by one element down to the last element alone.
#[derive(Debug, Clone)]
pub struct WindowLeft<I: Iterator> {
    cursor: Cursor<I>,
    buffer: BoundedQueue<I::Item>,
    primed: bool,
}

impl<I: Iterator> WindowLeft<I> {
    pub fn new(inner: I, size: usize) -> Result<Self> {
        verify_arg!(size, size > 0);
        Ok(WindowLeft {
            cursor: Cursor::new(inner),
            buffer: BoundedQueue::with_capacity(size),
            primed: false,
        })
    }
}

impl<I> Iterator for WindowLeft<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.primed {
            match self.cursor.advance() {
                Some(value) => {
                    self.buffer.push(value);
                }
                None => {
                    self.buffer.pop_oldest();
                }
            }
        } else {
            self.primed = true;
            while !self.buffer.is_full() {
                match self.cursor.advance() {
                    Some(value) => {
                        self.buffer.push(value);
                    }
                    None => break,
                }
            }
        }

        if self.buffer.is_empty() {
            None
        } else {
            Some(self.buffer.to_vec())
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.cursor.size_hint();
        // One more window for every pending source element, plus the shrinking
        // tail of whatever is still buffered beyond the current window.
        let tail = self.buffer.len().saturating_sub(1);
        (
            lower.saturating_add(tail),
            upper.and_then(|n| n.checked_add(tail)),
        )
    }
}

/// Windows anchored to the right edge: windows growing from one element up to
/// `size`, then full windows until the source ends.
#[derive(Debug, Clone)]
pub struct WindowRight<I: Iterator> {
    cursor: Cursor<I>,
    buffer: BoundedQueue<I::Item>,
}

impl<I: Iterator> WindowRight<I> {
    pub fn new(inner: I, size: usize) -> Result<Self> {
        verify_arg!(size, size > 0);
        Ok(WindowRight {
            cursor: Cursor::new(inner),
            buffer: BoundedQueue::with_capacity(size),
        })
    }
}

impl<I> Iterator for WindowRight<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = Vec<I::Item>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let value = self.cursor.advance()?;
        self.buffer.push(value);
        Some(self.buffer.to_vec())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.cursor.size_hint()
    }
}
