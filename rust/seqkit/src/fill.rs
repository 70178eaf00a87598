//! Replacing missing elements with a neighboring present one.
//!
//! What counts as missing is decided by a caller-supplied predicate. For sources of
//! `Option<T>` the convenience constructors in [`crate::SeqIteratorsExt`] use
//! `Option::is_none`.

use std::collections::VecDeque;

use seqkit_cursor::Cursor;

/// Predicate used by `fill_forward()` / `fill_backward()` on `Option` sources.
pub type IsNoneFn<T> = fn(&Option<T>) -> bool;

/// Replaces every missing element with the most recent present one.
///
/// Missing elements before the first present one are passed through unchanged.
#[derive(Debug, Clone)]
pub struct FillForward<I: Iterator, P> {
    cursor: Cursor<I>,
    last_present: Option<I::Item>,
    is_missing: P,
}

impl<I, P> FillForward<I, P>
where
    I: Iterator,
    I::Item: Clone,
    P: FnMut(&I::Item) -> bool,
{
    pub fn new(inner: I, is_missing: P) -> Self {
        FillForward {
            cursor: Cursor::new(inner),
            last_present: None,
            is_missing,
        }
    }
}

impl<I, P> Iterator for FillForward<I, P>
where
    I: Iterator,
    I::Item: Clone,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let item = self.cursor.advance()?;
        if (self.is_missing)(&item) {
            Some(self.last_present.clone().unwrap_or(item))
        } else {
            self.last_present = Some(item.clone());
            Some(item)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.cursor.size_hint()
    }
}

/// Replaces every missing element with the next present one.
///
/// A run of missing elements is held back until the element closing the run has
/// been pulled; only the current run is buffered. Missing elements after the last
/// present one are passed through unchanged.
#[derive(Debug, Clone)]
pub struct FillBackward<I: Iterator, P> {
    cursor: Cursor<I>,
    run: VecDeque<I::Item>,
    filler: Option<I::Item>,
    closing: Option<I::Item>,
    is_missing: P,
}

impl<I, P> FillBackward<I, P>
where
    I: Iterator,
    I::Item: Clone,
    P: FnMut(&I::Item) -> bool,
{
    pub fn new(inner: I, is_missing: P) -> Self {
        FillBackward {
            cursor: Cursor::new(inner),
            run: VecDeque::new(),
            filler: None,
            closing: None,
            is_missing,
        }
    }

    /// Pulls the rest of a missing run that started with `first`.
    fn collect_run(&mut self, first: I::Item) {
        self.run.push_back(first);
        while let Some(item) = self.cursor.advance() {
            if (self.is_missing)(&item) {
                self.run.push_back(item);
            } else {
                self.filler = Some(item.clone());
                self.closing = Some(item);
                return;
            }
        }
        self.filler = None;
    }
}

impl<I, P> Iterator for FillBackward<I, P>
where
    I: Iterator,
    I::Item: Clone,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.run.is_empty() {
            if let Some(closing) = self.closing.take() {
                return Some(closing);
            }
            let item = self.cursor.advance()?;
            if !(self.is_missing)(&item) {
                return Some(item);
            }
            self.collect_run(item);
        }

        let missing = self.run.pop_front()?;
        Some(match &self.filler {
            Some(filler) => filler.clone(),
            None => missing,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.cursor.size_hint();
        let held = self.run.len() + usize::from(self.closing.is_some());
        (
            lower.saturating_add(held),
            upper.and_then(|n| n.checked_add(held)),
        )
    }
}
