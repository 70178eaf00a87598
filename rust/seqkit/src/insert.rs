//! Inserting one sequence into another at a position counted from either end.
//!
//! Whether the insertion position exists is only known once enough of the source
//! has been read, so both adapters yield `Result` items: the out-of-range error
//! surfaces as an `Err` item exactly where the source turns out to be too short,
//! after which iteration ends.

use seqkit_common::Result;
use seqkit_common::error::Error;
use seqkit_cursor::Cursor;

use crate::count_down::{CountDown, TagFn, tag};

#[derive(Debug, Clone)]
enum Phase<T> {
    Leading,
    Inserting { held: Option<T> },
    Trailing,
    Done,
}

/// Inserts `other` before the source element at `index`.
///
/// `index` equal to the source length appends `other`. A source shorter than
/// `index` yields all of its elements followed by an out-of-range error.
#[derive(Debug, Clone)]
pub struct Insert<I: Iterator, J> {
    cursor: Cursor<I>,
    other: Cursor<J>,
    index: usize,
    phase: Phase<I::Item>,
}

impl<I, J> Insert<I, J>
where
    I: Iterator,
    J: Iterator<Item = I::Item>,
{
    pub fn new(inner: I, other: J, index: usize) -> Self {
        Insert {
            cursor: Cursor::new(inner),
            other: Cursor::new(other),
            index,
            phase: Phase::Leading,
        }
    }
}

impl<I, J> Iterator for Insert<I, J>
where
    I: Iterator,
    J: Iterator<Item = I::Item>,
{
    type Item = Result<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.phase {
                Phase::Leading => {
                    if self.cursor.position() == self.index {
                        self.phase = Phase::Inserting { held: None };
                        continue;
                    }
                    match self.cursor.advance() {
                        Some(value) => return Some(Ok(value)),
                        None => {
                            self.phase = Phase::Done;
                            self.other.release();
                            return Some(Err(Error::index_out_of_range(
                                "index",
                                self.index,
                                self.cursor.position(),
                            )));
                        }
                    }
                }
                Phase::Inserting { .. } => match self.other.advance() {
                    Some(value) => return Some(Ok(value)),
                    None => self.phase = Phase::Trailing,
                },
                Phase::Trailing => return self.cursor.advance().map(Ok),
                Phase::Done => return None,
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.phase {
            Phase::Done => (0, Some(0)),
            _ => {
                let (lower, upper) = self.cursor.size_hint();
                let (other_lower, other_upper) = self.other.size_hint();
                // An out-of-range error replaces `other` with a single item.
                (
                    lower.saturating_add(other_lower.min(1)),
                    upper
                        .zip(other_upper)
                        .and_then(|(n, m)| n.checked_add(m.max(1))),
                )
            }
        }
    }
}

/// Inserts `other` so that it ends up `index` elements before the end of the source.
///
/// `index == 0` appends `other`; `index` equal to the source length prepends it.
/// A source shorter than `index` yields an out-of-range error at the point the
/// source is exhausted, without yielding any of its elements.
///
/// Built on [`CountDown`] with `count = index`: `other` goes right before the
/// element whose countdown is `index - 1`.
#[derive(Debug, Clone)]
pub struct Backsert<I: Iterator, J> {
    inner: CountDown<I, TagFn<I::Item>>,
    other: Cursor<J>,
    index: usize,
    phase: Phase<I::Item>,
}

impl<I, J> Backsert<I, J>
where
    I: Iterator,
    J: Iterator<Item = I::Item>,
{
    pub fn new(inner: I, other: J, index: usize) -> Self {
        Backsert {
            inner: CountDown::new(inner, index, tag as TagFn<I::Item>),
            other: Cursor::new(other),
            index,
            phase: Phase::Leading,
        }
    }

    fn fail(&mut self, len: usize) -> Option<Result<I::Item>> {
        self.phase = Phase::Done;
        self.other.release();
        Some(Err(Error::index_out_of_range("index", self.index, len)))
    }
}

impl<I, J> Iterator for Backsert<I, J>
where
    I: Iterator,
    J: Iterator<Item = I::Item>,
{
    type Item = Result<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match &mut self.phase {
                Phase::Leading => match self.inner.next() {
                    Some((item, countdown)) => {
                        if self.index == 0 {
                            return Some(Ok(item));
                        }
                        match countdown {
                            None => return Some(Ok(item)),
                            Some(n) if n + 1 == self.index => {
                                self.phase = Phase::Inserting { held: Some(item) };
                            }
                            // The first element already carries a countdown below
                            // `index - 1`: the whole source has `n + 1` elements.
                            Some(n) => return self.fail(n + 1),
                        }
                    }
                    None if self.index == 0 => self.phase = Phase::Inserting { held: None },
                    None => return self.fail(0),
                },
                Phase::Inserting { held } => match self.other.advance() {
                    Some(value) => return Some(Ok(value)),
                    None => {
                        let held = held.take();
                        self.phase = Phase::Trailing;
                        if let Some(item) = held {
                            return Some(Ok(item));
                        }
                    }
                },
                Phase::Trailing => return self.inner.next().map(|(item, _)| Ok(item)),
                Phase::Done => return None,
            }
        }
    }
}
