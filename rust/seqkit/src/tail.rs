//! Adapters that treat the last `n` elements of a source specially.

use seqkit_cursor::{BoundedQueue, Cursor};

/// Yields all but the last `count` elements.
///
/// Each element is held back until `count` further elements have been pulled,
/// so at most `count` elements are buffered.
#[derive(Debug, Clone)]
pub struct SkipLast<I: Iterator> {
    cursor: Cursor<I>,
    pending: BoundedQueue<I::Item>,
}

impl<I: Iterator> SkipLast<I> {
    pub fn new(inner: I, count: usize) -> Self {
        SkipLast {
            cursor: Cursor::new(inner),
            pending: BoundedQueue::with_capacity(count),
        }
    }
}

impl<I: Iterator> Iterator for SkipLast<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let value = self.cursor.advance()?;
            if let Some(evicted) = self.pending.push(value) {
                return Some(evicted);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.cursor.size_hint();
        let missing = self.pending.capacity() - self.pending.len();
        (
            lower.saturating_sub(missing),
            upper.map(|n| n.saturating_sub(missing)),
        )
    }
}

#[derive(Debug, Clone)]
enum TakeState<T> {
    Pending,
    /// The source length was known: the leading elements were skipped and the
    /// rest is streamed straight from the source.
    Streaming,
    Draining(BoundedQueue<T>),
}

/// Yields only the last `count` elements.
///
/// Nothing can be emitted before the source ends. When the source reports an
/// exact length, the leading elements are skipped and the tail is streamed;
/// otherwise a ring buffer of `count` elements keeps the most recent ones.
#[derive(Debug, Clone)]
pub struct TakeLast<I: Iterator> {
    cursor: Cursor<I>,
    count: usize,
    state: TakeState<I::Item>,
}

impl<I: Iterator> TakeLast<I> {
    pub fn new(inner: I, count: usize) -> Self {
        TakeLast {
            cursor: Cursor::new(inner),
            count,
            state: TakeState::Pending,
        }
    }

    fn start(&mut self) {
        if self.count == 0 {
            self.state = TakeState::Draining(BoundedQueue::with_capacity(0));
            return;
        }
        match self.cursor.size_hint() {
            (lower, Some(upper)) if lower == upper => {
                for _ in 0..lower.saturating_sub(self.count) {
                    if self.cursor.advance().is_none() {
                        break;
                    }
                }
                self.state = TakeState::Streaming;
            }
            _ => {
                let mut ring = BoundedQueue::with_capacity(self.count);
                while let Some(value) = self.cursor.advance() {
                    ring.push(value);
                }
                self.state = TakeState::Draining(ring);
            }
        }
    }
}

impl<I: Iterator> Iterator for TakeLast<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if matches!(self.state, TakeState::Pending) {
            self.start();
        }
        match &mut self.state {
            TakeState::Pending => None,
            TakeState::Streaming => self.cursor.advance(),
            TakeState::Draining(ring) => ring.pop_oldest(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.state {
            TakeState::Pending => {
                let (lower, upper) = self.cursor.size_hint();
                (lower.min(self.count), Some(upper.map_or(self.count, |n| n.min(self.count))))
            }
            TakeState::Streaming => self.cursor.size_hint(),
            TakeState::Draining(ring) => (ring.len(), Some(ring.len())),
        }
    }
}

#[cfg(test)]
mod tests {
    use seqkit_testkit::Probe;

    use crate::SeqIteratorsExt;

    #[test]
    fn test_skip_last() {
        assert_eq!((1..=5).skip_last(2).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!((1..=5).skip_last(0).collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
        assert_eq!((1..=2).skip_last(5).count(), 0);
    }

    #[test]
    fn test_skip_last_size_hint() {
        let mut it = (0..10).skip_last(3);
        assert_eq!(it.size_hint(), (7, Some(7)));
        it.next();
        assert_eq!(it.size_hint(), (6, Some(6)));
    }

    #[test]
    fn test_take_last() {
        assert_eq!((1..=5).take_last(2).collect::<Vec<_>>(), vec![4, 5]);
        assert_eq!((1..=2).take_last(5).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!((1..=5).take_last(0).count(), 0);
    }

    #[test]
    fn test_take_last_unknown_length() {
        let (probe, stats) = Probe::new(1..=6);
        let result: Vec<_> = probe.hide_size_hint().take_last(3).collect();
        assert_eq!(result, vec![4, 5, 6]);
        assert_eq!(stats.drops(), 1);
    }

    #[test]
    fn test_take_last_zero_does_not_touch_source() {
        let (probe, stats) = seqkit_testkit::probe::untouchable::<u32>();
        assert_eq!(probe.take_last(0).count(), 0);
        assert_eq!(stats.pulls(), 0);
    }

    #[test]
    fn test_tails_agree_with_slices() {
        let mut rng = fastrand::Rng::with_seed(11);
        for _ in 0..100 {
            let source = seqkit_testkit::data_gen::ascending(&mut rng, 25);
            let n = rng.usize(0..30);
            let keep = source.len().saturating_sub(n);
            let skipped: Vec<u32> = source.iter().copied().skip_last(n).collect();
            assert_eq!(skipped, source[..keep]);
            let (probe, _) = Probe::new(source.clone());
            let taken: Vec<u32> = probe.hide_size_hint().take_last(n).collect();
            assert_eq!(taken, source[keep..]);
            let taken: Vec<u32> = source.iter().copied().take_last(n).collect();
            assert_eq!(taken, source[keep..]);
        }
    }
}
