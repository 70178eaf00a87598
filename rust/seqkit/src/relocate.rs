//! Relocating a contiguous sub-range of a source without materializing it.
//!
//! [`MoveRange`] is the building block: it buffers a single contiguous span (either
//! the moved range or the gap it jumps over, whichever lies first in the source),
//! streams everything else through, and re-emits the buffered span at its new
//! position. [`SwapRange`] buffers the earlier range and the gap after it;
//! [`Exclude`] drops a range outright.

use seqkit_common::{Result, verify_arg};
use seqkit_cursor::{BoundedQueue, Cursor};

/// The buffering plan for a move, computed once from `(from, count, to)`.
///
/// The source is read as: `buffer_start` elements streamed through, then
/// `buffer_len` elements buffered, then `yield_between` elements streamed through,
/// then the buffer replayed, then the rest streamed through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovePlan {
    pub buffer_start: usize,
    pub buffer_len: usize,
    pub yield_between: usize,
}

impl MovePlan {
    /// Returns `None` when the move leaves the source unchanged.
    pub fn new(from: usize, count: usize, to: usize) -> Option<MovePlan> {
        if count == 0 || from == to {
            None
        } else if to < from {
            // Moving left: the gap `to..from` is buffered and replayed after the range.
            Some(MovePlan {
                buffer_start: to,
                buffer_len: from - to,
                yield_between: count,
            })
        } else {
            // Moving right: the range itself is buffered and replayed after the gap.
            Some(MovePlan {
                buffer_start: from,
                buffer_len: count,
                yield_between: to - from,
            })
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Leading { remaining: usize },
    Fill,
    Between { remaining: usize },
    Replay,
    Trailing,
}

/// Moves the `count` elements starting at `from` so that they start at `to` in
/// the output. `to` is measured after the range has been taken out, so
/// `move_range(to, count, from)` undoes `move_range(from, count, to)`.
///
/// A source shorter than `from + count` is not an error: whatever part of the
/// range exists is moved, and a `to` beyond the end moves it to the end.
#[derive(Debug, Clone)]
pub struct MoveRange<I: Iterator> {
    cursor: Cursor<I>,
    buffer: BoundedQueue<I::Item>,
    yield_between: usize,
    phase: Phase,
}

impl<I: Iterator> MoveRange<I> {
    pub fn new(inner: I, from: usize, count: usize, to: usize) -> Result<Self> {
        verify_arg!(count, from.checked_add(count).is_some());
        verify_arg!(count, to.checked_add(count).is_some());

        let plan = MovePlan::new(from, count, to);
        log::trace!("move_range from={from} count={count} to={to}: {plan:?}");
        let (buffer_len, yield_between, phase) = match plan {
            Some(plan) => (
                plan.buffer_len,
                plan.yield_between,
                Phase::Leading {
                    remaining: plan.buffer_start,
                },
            ),
            None => (0, 0, Phase::Trailing),
        };
        Ok(MoveRange {
            cursor: Cursor::new(inner),
            buffer: BoundedQueue::with_capacity(buffer_len),
            yield_between,
            phase,
        })
    }

    /// Returns `true` if the source is streamed through unchanged.
    pub fn is_passthrough(&self) -> bool {
        self.buffer.capacity() == 0
    }
}

impl<I: Iterator> Iterator for MoveRange<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match &mut self.phase {
                Phase::Leading { remaining } => {
                    if *remaining == 0 {
                        self.phase = Phase::Fill;
                        continue;
                    }
                    *remaining -= 1;
                    return self.cursor.advance();
                }
                Phase::Fill => {
                    while !self.buffer.is_full() {
                        match self.cursor.advance() {
                            Some(value) => {
                                let _ = self.buffer.try_push(value);
                            }
                            None => break,
                        }
                    }
                    self.phase = Phase::Between {
                        remaining: self.yield_between,
                    };
                }
                Phase::Between { remaining } => {
                    if *remaining > 0 {
                        *remaining -= 1;
                        if let Some(value) = self.cursor.advance() {
                            return Some(value);
                        }
                    }
                    self.phase = Phase::Replay;
                }
                Phase::Replay => {
                    if let Some(value) = self.buffer.pop_oldest() {
                        return Some(value);
                    }
                    self.phase = Phase::Trailing;
                }
                Phase::Trailing => return self.cursor.advance(),
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.cursor.size_hint();
        let buffered = self.buffer.len();
        (
            lower.saturating_add(buffered),
            upper.and_then(|n| n.checked_add(buffered)),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SwapPhase {
    Leading { remaining: usize },
    Fill,
    Later { remaining: usize },
    Replay,
    Trailing,
}

/// Swaps two equally long, non-overlapping ranges.
///
/// The earlier range and the elements between the two ranges are buffered; the
/// later range is streamed through in place of the earlier one, followed by the
/// buffered elements. When the later range is only partly present, its available
/// part is swapped with the whole earlier range; when it is absent, the source
/// is left unchanged.
#[derive(Debug, Clone)]
pub struct SwapRange<I: Iterator> {
    cursor: Cursor<I>,
    first: BoundedQueue<I::Item>,
    between: BoundedQueue<I::Item>,
    count: usize,
    swapped: bool,
    phase: SwapPhase,
}

impl<I: Iterator> SwapRange<I> {
    /// Fails with an invalid-argument error if the two ranges overlap.
    pub fn new(inner: I, first: usize, second: usize, count: usize) -> Result<Self> {
        let (a, b) = if first <= second {
            (first, second)
        } else {
            (second, first)
        };
        let passthrough = count == 0 || a == b;
        if !passthrough {
            verify_arg!(count, b.checked_add(count).is_some());
            verify_arg!(count, b - a >= count);
        }
        log::trace!("swap_range a={a} b={b} count={count} passthrough={passthrough}");

        let (first_len, between_len, phase) = if passthrough {
            (0, 0, SwapPhase::Trailing)
        } else {
            (count, b - a - count, SwapPhase::Leading { remaining: a })
        };
        Ok(SwapRange {
            cursor: Cursor::new(inner),
            first: BoundedQueue::with_capacity(first_len),
            between: BoundedQueue::with_capacity(between_len),
            count,
            swapped: false,
            phase,
        })
    }

    /// Returns `true` if the source is streamed through unchanged.
    pub fn is_passthrough(&self) -> bool {
        self.first.capacity() == 0
    }

    fn fill(queue: &mut BoundedQueue<I::Item>, cursor: &mut Cursor<I>) {
        while !queue.is_full() {
            match cursor.advance() {
                Some(value) => {
                    let _ = queue.try_push(value);
                }
                None => break,
            }
        }
    }
}

impl<I: Iterator> Iterator for SwapRange<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match &mut self.phase {
                SwapPhase::Leading { remaining } => {
                    if *remaining == 0 {
                        self.phase = SwapPhase::Fill;
                        continue;
                    }
                    *remaining -= 1;
                    return self.cursor.advance();
                }
                SwapPhase::Fill => {
                    Self::fill(&mut self.first, &mut self.cursor);
                    Self::fill(&mut self.between, &mut self.cursor);
                    self.phase = SwapPhase::Later {
                        remaining: self.count,
                    };
                }
                SwapPhase::Later { remaining } => {
                    if *remaining > 0 {
                        *remaining -= 1;
                        if let Some(value) = self.cursor.advance() {
                            self.swapped = true;
                            return Some(value);
                        }
                    }
                    self.phase = SwapPhase::Replay;
                }
                SwapPhase::Replay => {
                    let (head, tail) = if self.swapped {
                        (&mut self.between, &mut self.first)
                    } else {
                        (&mut self.first, &mut self.between)
                    };
                    if let Some(value) = head.pop_oldest().or_else(|| tail.pop_oldest()) {
                        return Some(value);
                    }
                    self.phase = SwapPhase::Trailing;
                }
                SwapPhase::Trailing => return self.cursor.advance(),
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.cursor.size_hint();
        let buffered = self.first.len() + self.between.len();
        (
            lower.saturating_add(buffered),
            upper.and_then(|n| n.checked_add(buffered)),
        )
    }
}

/// Skips the `count` elements starting at `start`.
#[derive(Debug, Clone)]
pub struct Exclude<I> {
    cursor: Cursor<I>,
    start: usize,
    count: usize,
    skipped: bool,
}

impl<I: Iterator> Exclude<I> {
    pub fn new(inner: I, start: usize, count: usize) -> Self {
        Exclude {
            cursor: Cursor::new(inner),
            start,
            count,
            skipped: count == 0,
        }
    }
}

impl<I: Iterator> Iterator for Exclude<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.skipped && self.cursor.position() == self.start {
            self.skipped = true;
            for _ in 0..self.count {
                self.cursor.advance()?;
            }
        }
        self.cursor.advance()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.cursor.size_hint();
        if self.skipped {
            return (lower, upper);
        }
        let ahead = self.start.saturating_sub(self.cursor.position());
        let dropped = |n: usize| n - n.saturating_sub(ahead).min(self.count);
        (dropped(lower), upper.map(dropped))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SeqIteratorsExt;

    fn moved(len: usize, from: usize, count: usize, to: usize) -> Vec<usize> {
        (0..len).move_range(from, count, to).unwrap().collect()
    }

    /// Reference result built with `Vec` splicing.
    fn spliced(len: usize, from: usize, count: usize, to: usize) -> Vec<usize> {
        let mut items: Vec<usize> = (0..len).collect();
        let start = from.min(len);
        let end = from.saturating_add(count).min(len);
        let range: Vec<usize> = items.drain(start..end).collect();
        let at = to.min(items.len());
        items.splice(at..at, range);
        items
    }

    #[test]
    fn test_move_left() {
        assert_eq!(moved(6, 3, 2, 0), vec![3, 4, 0, 1, 2, 5]);
    }

    #[test]
    fn test_move_right() {
        assert_eq!(moved(6, 0, 2, 3), vec![2, 3, 4, 0, 1, 5]);
    }

    #[test]
    fn test_move_round_trip() {
        let there: Vec<usize> = (0..6).move_range(3, 2, 0).unwrap().collect();
        let back: Vec<usize> = there.into_iter().move_range(0, 2, 3).unwrap().collect();
        assert_eq!(back, (0..6).collect::<Vec<_>>());
    }

    #[test]
    fn test_noop_moves_do_not_buffer() {
        assert!((0..6).move_range(2, 0, 4).unwrap().is_passthrough());
        assert!((0..6).move_range(2, 3, 2).unwrap().is_passthrough());
        assert_eq!(moved(6, 2, 3, 2), vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_move_past_end_is_graceful() {
        assert_eq!(moved(5, 3, 10, 0), vec![3, 4, 0, 1, 2]);
        assert_eq!(moved(5, 1, 2, 100), vec![0, 3, 4, 1, 2]);
        assert_eq!(moved(3, 5, 2, 0), vec![0, 1, 2]);
    }

    #[test]
    fn test_move_matches_splice() {
        let mut rng = fastrand::Rng::with_seed(3);
        for _ in 0..500 {
            let len = rng.usize(0..15);
            let from = rng.usize(0..18);
            let count = rng.usize(0..6);
            let to = rng.usize(0..18);
            assert_eq!(
                moved(len, from, count, to),
                spliced(len, from, count, to),
                "len={len} from={from} count={count} to={to}"
            );
        }
    }

    #[test]
    fn test_move_overflow_fails() {
        assert!((0..3).move_range(usize::MAX, 2, 0).is_err());
    }

    fn swapped(len: usize, first: usize, second: usize, count: usize) -> Vec<usize> {
        (0..len).swap_range(first, second, count).unwrap().collect()
    }

    /// Reference result: the earlier range trades places with whatever part of
    /// the later range the source holds.
    fn exchanged(len: usize, first: usize, second: usize, count: usize) -> Vec<usize> {
        let items: Vec<usize> = (0..len).collect();
        let (a, b) = (first.min(second), first.max(second));
        let later = b.min(len)..(b + count).min(len);
        if count == 0 || a == b || later.is_empty() {
            return items;
        }
        let mut result = items[..a].to_vec();
        result.extend_from_slice(&items[later.clone()]);
        result.extend_from_slice(&items[a + count..later.start]);
        result.extend_from_slice(&items[a..a + count]);
        result.extend_from_slice(&items[later.end..]);
        result
    }

    #[test]
    fn test_swap_range() {
        assert_eq!(swapped(7, 0, 4, 2), vec![4, 5, 2, 3, 0, 1, 6]);
        assert_eq!(swapped(5, 3, 1, 2), vec![0, 3, 4, 1, 2]);
        assert_eq!(swapped(4, 1, 1, 2), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_swap_short_source() {
        assert_eq!(swapped(5, 0, 10, 2), vec![0, 1, 2, 3, 4]);
        assert_eq!(swapped(5, 0, 4, 2), vec![4, 2, 3, 0, 1]);
        assert_eq!(swapped(5, 4, 0, 2), vec![4, 2, 3, 0, 1]);
        assert_eq!(swapped(3, 1, 3, 2), vec![0, 1, 2]);
        assert_eq!(swapped(0, 0, 2, 2), Vec::<usize>::new());
    }

    #[test]
    fn test_swap_matches_exchange() {
        let mut rng = fastrand::Rng::with_seed(11);
        for _ in 0..500 {
            let len = rng.usize(0..15);
            let first = rng.usize(0..18);
            let second = rng.usize(0..18);
            let count = rng.usize(0..6);
            let overlapping = first != second && first.abs_diff(second) < count;
            if overlapping {
                assert!((0..len).swap_range(first, second, count).is_err());
                continue;
            }
            assert_eq!(
                swapped(len, first, second, count),
                exchanged(len, first, second, count),
                "len={len} first={first} second={second} count={count}"
            );
        }
    }

    #[test]
    fn test_swap_is_lazy() {
        let (probe, stats) = seqkit_testkit::Probe::new(0..10);
        let mut it = probe.swap_range(2, 6, 2).unwrap();
        assert_eq!(it.next(), Some(0));
        assert_eq!(stats.pulls(), 1);
        assert_eq!(it.nth(1), Some(6));
        assert_eq!(stats.pulls(), 7);
        assert_eq!(it.collect::<Vec<_>>(), vec![7, 4, 5, 2, 3, 8, 9]);
    }

    #[test]
    fn test_swap_overlapping_fails() {
        let err = (0..10).swap_range(1, 2, 3).err().unwrap();
        assert!(err.is_invalid_arg());
    }

    #[test]
    fn test_exclude() {
        let result: Vec<u32> = (0..6).exclude(1, 3).collect();
        assert_eq!(result, vec![0, 4, 5]);
        let it = (0..6).exclude(4, 5);
        assert_eq!(it.size_hint(), (4, Some(4)));
        assert_eq!(it.collect::<Vec<_>>(), vec![0, 1, 2, 3]);
        assert_eq!((0..3).exclude(5, 1).collect::<Vec<_>>(), vec![0, 1, 2]);
        assert_eq!((0..3).exclude(0, 0).collect::<Vec<_>>(), vec![0, 1, 2]);
    }

    #[test]
    fn test_exclude_size_hint_after_short_skip() {
        let mut it = (0..3).exclude(1, 5);
        assert_eq!(it.by_ref().collect::<Vec<_>>(), vec![0]);
        assert_eq!(it.size_hint(), (0, Some(0)));
        assert_eq!(it.next(), None);
    }
}
