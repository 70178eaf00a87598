//! Adjacent-pair mapping and right-associative scans.

use seqkit_cursor::Cursor;

/// Applies `selector(&previous, &current)` to every pair of adjacent elements.
///
/// A source of `N` elements yields `N - 1` results (none for `N < 2`). Only the
/// previous element is retained.
#[derive(Debug, Clone)]
pub struct Pairwise<I: Iterator, F> {
    cursor: Cursor<I>,
    previous: Option<I::Item>,
    selector: F,
}

impl<I, F, R> Pairwise<I, F>
where
    I: Iterator,
    F: FnMut(&I::Item, &I::Item) -> R,
{
    pub fn new(inner: I, selector: F) -> Self {
        Pairwise {
            cursor: Cursor::new(inner),
            previous: None,
            selector,
        }
    }
}

impl<I, F, R> Iterator for Pairwise<I, F>
where
    I: Iterator,
    F: FnMut(&I::Item, &I::Item) -> R,
{
    type Item = R;

    fn next(&mut self) -> Option<Self::Item> {
        if self.previous.is_none() {
            self.previous = Some(self.cursor.advance()?);
        }
        let current = self.cursor.advance()?;
        let result = (self.selector)(self.previous.as_ref()?, &current);
        self.previous = Some(current);
        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.cursor.size_hint();
        if self.previous.is_some() {
            (lower, upper)
        } else {
            (lower.saturating_sub(1), upper.map(|n| n.saturating_sub(1)))
        }
    }
}

#[derive(Debug, Clone)]
enum ScanState<I, A> {
    Pending(I),
    /// Accumulators in reverse output order; popping yields the next output.
    Ready(Vec<A>),
}

/// Right-associative scan: `[a, b, c]` becomes `[a ⊕ (b ⊕ c), b ⊕ c, c]`.
///
/// The rightmost element has to be known before the first result exists, so the
/// whole source is read on the first pull. Results are produced from the right,
/// stored once, and handed out without cloning.
#[derive(Debug, Clone)]
pub struct ScanRight<I: Iterator, F> {
    state: ScanState<I, I::Item>,
    func: F,
}

impl<I, F> ScanRight<I, F>
where
    I: Iterator,
    F: FnMut(I::Item, &I::Item) -> I::Item,
{
    pub fn new(inner: I, func: F) -> Self {
        ScanRight {
            state: ScanState::Pending(inner),
            func,
        }
    }
}

impl<I, F> Iterator for ScanRight<I, F>
where
    I: Iterator,
    F: FnMut(I::Item, &I::Item) -> I::Item,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if let ScanState::Pending(inner) = &mut self.state {
            let items: Vec<I::Item> = inner.collect();
            let mut accumulated: Vec<I::Item> = Vec::with_capacity(items.len());
            for item in items.into_iter().rev() {
                let next = match accumulated.last() {
                    Some(right) => (self.func)(item, right),
                    None => item,
                };
                accumulated.push(next);
            }
            self.state = ScanState::Ready(accumulated);
        }
        match &mut self.state {
            ScanState::Ready(accumulated) => accumulated.pop(),
            ScanState::Pending(_) => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.state {
            ScanState::Pending(inner) => inner.size_hint(),
            ScanState::Ready(accumulated) => (accumulated.len(), Some(accumulated.len())),
        }
    }
}

/// Right-associative scan starting from `seed`: `[a, b]` becomes
/// `[a ⊕ (b ⊕ seed), b ⊕ seed, seed]`, one more result than source elements.
#[derive(Debug, Clone)]
pub struct ScanRightSeeded<I, A, F> {
    state: ScanState<I, A>,
    seed: Option<A>,
    func: F,
}

impl<I, A, F> ScanRightSeeded<I, A, F>
where
    I: Iterator,
    F: FnMut(I::Item, &A) -> A,
{
    pub fn new(inner: I, seed: A, func: F) -> Self {
        ScanRightSeeded {
            state: ScanState::Pending(inner),
            seed: Some(seed),
            func,
        }
    }
}

impl<I, A, F> Iterator for ScanRightSeeded<I, A, F>
where
    I: Iterator,
    F: FnMut(I::Item, &A) -> A,
{
    type Item = A;

    fn next(&mut self) -> Option<Self::Item> {
        if let ScanState::Pending(inner) = &mut self.state {
            let items: Vec<I::Item> = inner.collect();
            let mut accumulated: Vec<A> = Vec::with_capacity(items.len() + 1);
            accumulated.extend(self.seed.take());
            for item in items.into_iter().rev() {
                let right = accumulated.last()?;
                let next = (self.func)(item, right);
                accumulated.push(next);
            }
            self.state = ScanState::Ready(accumulated);
        }
        match &mut self.state {
            ScanState::Ready(accumulated) => accumulated.pop(),
            ScanState::Pending(_) => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.state {
            ScanState::Pending(inner) => {
                let (lower, upper) = inner.size_hint();
                (
                    lower.saturating_add(1),
                    upper.and_then(|n| n.checked_add(1)),
                )
            }
            ScanState::Ready(accumulated) => (accumulated.len(), Some(accumulated.len())),
        }
    }
}
