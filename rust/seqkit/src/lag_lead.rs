//! Lag and lead adapters: pairing each element with a neighbor a fixed distance
//! behind or ahead of it in the same sequence.

use seqkit_common::{Result, verify_arg};
use seqkit_cursor::{BoundedQueue, Cursor};

/// Pairs each element with the element `offset` positions earlier.
///
/// The first `offset` elements have no such predecessor and are paired with a
/// clone of the placeholder `default`. History is kept in a ring buffer of exactly
/// `offset` elements: pushing the current element evicts precisely the element
/// it has to be paired with.
#[derive(Debug, Clone)]
pub struct Lag<I: Iterator, F> {
    cursor: Cursor<I>,
    history: BoundedQueue<I::Item>,
    default: I::Item,
    selector: F,
}

impl<I, F, R> Lag<I, F>
where
    I: Iterator,
    I::Item: Clone,
    F: FnMut(I::Item, I::Item) -> R,
{
    /// Fails with an invalid-argument error if `offset` is zero.
    pub fn new(inner: I, offset: usize, default: I::Item, selector: F) -> Result<Self> {
        verify_arg!(offset, offset > 0);
        Ok(Lag {
            cursor: Cursor::new(inner),
            history: BoundedQueue::with_capacity(offset),
            default,
            selector,
        })
    }
}

impl<I, F, R> Iterator for Lag<I, F>
where
    I: Iterator,
    I::Item: Clone,
    F: FnMut(I::Item, I::Item) -> R,
{
    type Item = R;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let current = self.cursor.advance()?;
        let lagged = self
            .history
            .push(current.clone())
            .unwrap_or_else(|| self.default.clone());
        Some((self.selector)(current, lagged))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.cursor.size_hint()
    }
}

/// Pairs each element with the element `offset` positions later.
///
/// The last `offset` elements have no such successor and are paired with a
/// clone of the placeholder `default`. An element can only be emitted once its
/// successor has been pulled, so up to `offset` elements are held in a FIFO.
#[derive(Debug, Clone)]
pub struct Lead<I: Iterator, F> {
    cursor: Cursor<I>,
    pending: BoundedQueue<I::Item>,
    default: I::Item,
    selector: F,
}

impl<I, F, R> Lead<I, F>
where
    I: Iterator,
    I::Item: Clone,
    F: FnMut(I::Item, I::Item) -> R,
{
    /// Fails with an invalid-argument error if `offset` is zero.
    pub fn new(inner: I, offset: usize, default: I::Item, selector: F) -> Result<Self> {
        verify_arg!(offset, offset > 0);
        Ok(Lead {
            cursor: Cursor::new(inner),
            pending: BoundedQueue::with_capacity(offset),
            default,
            selector,
        })
    }
}

impl<I, F, R> Iterator for Lead<I, F>
where
    I: Iterator,
    I::Item: Clone,
    F: FnMut(I::Item, I::Item) -> R,
{
    type Item = R;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.pending.is_full() {
            match self.cursor.advance() {
                Some(value) => {
                    self.pending.push(value);
                }
                None => break,
            }
        }

        match self.cursor.advance() {
            Some(ahead) => {
                // The queue is full here, so the push always evicts the oldest
                // pending element, which is the one `ahead` leads.
                let current = self.pending.push(ahead.clone())?;
                Some((self.selector)(current, ahead))
            }
            None => {
                let current = self.pending.pop_oldest()?;
                Some((self.selector)(current, self.default.clone()))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.cursor.size_hint();
        let pending = self.pending.len();
        (
            lower.saturating_add(pending),
            upper.and_then(|n| n.checked_add(pending)),
        )
    }
}
