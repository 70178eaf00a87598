//! Annotating elements with their distance from the end of the sequence.
//!
//! Elements farther than `count` from the end are tagged `None`; the last
//! `count` elements are tagged `Some(d)` where `d` counts down to `0` at the last
//! element.

use seqkit_cursor::{BoundedQueue, Cursor};

/// Selector used by [`crate::SeqIteratorsExt::count_down`].
pub type TagFn<T> = fn(T, Option<usize>) -> (T, Option<usize>);

pub(crate) fn tag<T>(item: T, countdown: Option<usize>) -> (T, Option<usize>) {
    (item, countdown)
}

/// How [`CountDown`] learns where the sequence ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountDownStrategy {
    /// The source reported an exact length up front; countdowns are computed
    /// arithmetically and nothing is buffered.
    Counted,
    /// The length is unknown; up to `count` elements are held back until the
    /// source either produces more or ends.
    Buffered,
}

#[derive(Debug, Clone)]
enum State<T> {
    Counted { remaining: usize },
    Buffered { pending: BoundedQueue<T> },
}

/// Iterator adapter computing "distance from the end" annotations.
///
/// The strategy is fixed at construction from the source's `size_hint`: an exact
/// hint (`lower == upper`) is trusted as the source length.
#[derive(Debug, Clone)]
pub struct CountDown<I: Iterator, F> {
    cursor: Cursor<I>,
    count: usize,
    state: State<I::Item>,
    selector: F,
}

impl<I, F, R> CountDown<I, F>
where
    I: Iterator,
    F: FnMut(I::Item, Option<usize>) -> R,
{
    pub fn new(inner: I, count: usize, selector: F) -> Self {
        let state = match inner.size_hint() {
            (lower, Some(upper)) if lower == upper => State::Counted { remaining: lower },
            _ => State::Buffered {
                pending: BoundedQueue::with_capacity(count),
            },
        };
        log::trace!(
            "count_down count={count}: {}",
            match &state {
                State::Counted { remaining } => format!("counted, length {remaining}"),
                State::Buffered { .. } => "buffered".to_string(),
            }
        );
        CountDown {
            cursor: Cursor::new(inner),
            count,
            state,
            selector,
        }
    }

    pub fn strategy(&self) -> CountDownStrategy {
        match self.state {
            State::Counted { .. } => CountDownStrategy::Counted,
            State::Buffered { .. } => CountDownStrategy::Buffered,
        }
    }
}

impl<I, F, R> Iterator for CountDown<I, F>
where
    I: Iterator,
    F: FnMut(I::Item, Option<usize>) -> R,
{
    type Item = R;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.state {
            State::Counted { remaining } => {
                let item = self.cursor.advance()?;
                *remaining = remaining.saturating_sub(1);
                let countdown = (*remaining < self.count).then_some(*remaining);
                Some((self.selector)(item, countdown))
            }
            State::Buffered { pending } => {
                while !self.cursor.is_exhausted() {
                    match self.cursor.advance() {
                        Some(item) => {
                            // `count` elements are now known to follow the evicted one.
                            if let Some(evicted) = pending.push(item) {
                                return Some((self.selector)(evicted, None));
                            }
                        }
                        None => break,
                    }
                }
                let item = pending.pop_oldest()?;
                let countdown = pending.len();
                Some((self.selector)(item, Some(countdown)))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.cursor.size_hint();
        let pending = match &self.state {
            State::Counted { .. } => 0,
            State::Buffered { pending } => pending.len(),
        };
        (
            lower.saturating_add(pending),
            upper.and_then(|n| n.checked_add(pending)),
        )
    }
}
