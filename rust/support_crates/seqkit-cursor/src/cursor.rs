//! A forward-only cursor over a single-pass source.
//!
//! `Cursor<I>` wraps an iterator `I` and drops it the moment it yields `None`,
//! so the resources held by the source are released at exhaustion rather than
//! when the owning adapter goes out of scope.

use std::iter::FusedIterator;

/// Forward-only cursor that releases its source on exhaustion.
///
/// After [`Cursor::advance`] returns `None` once, the wrapped iterator has been
/// dropped and every subsequent call returns `None` without touching it again.
#[derive(Debug, Clone)]
pub struct Cursor<I> {
    /// The underlying source; `None` once released.
    inner: Option<I>,
    /// Number of elements pulled from the source so far.
    position: usize,
}

impl<I: Iterator> Cursor<I> {
    /// Creates a cursor over `source`. Nothing is pulled until the first advance.
    pub fn new<S>(source: S) -> Self
    where
        S: IntoIterator<IntoIter = I>,
    {
        Cursor {
            inner: Some(source.into_iter()),
            position: 0,
        }
    }

    /// Pulls the next element, releasing the source when it is exhausted.
    #[inline]
    pub fn advance(&mut self) -> Option<I::Item> {
        let inner = self.inner.as_mut()?;
        match inner.next() {
            Some(value) => {
                self.position += 1;
                Some(value)
            }
            None => {
                self.release();
                None
            }
        }
    }

    /// Pulls up to `n` elements into `dest`, returning how many were appended.
    ///
    /// Fewer than `n` elements are appended only when the source is exhausted.
    pub fn advance_into(&mut self, n: usize, dest: &mut Vec<I::Item>) -> usize {
        let mut pulled = 0;
        while pulled < n {
            match self.advance() {
                Some(value) => dest.push(value),
                None => break,
            }
            pulled += 1;
        }
        pulled
    }

    /// Drops the underlying source, if it is still held.
    pub fn release(&mut self) {
        if self.inner.take().is_some() {
            log::trace!("cursor released after {} elements", self.position);
        }
    }

    /// Returns `true` once the source has been exhausted or released.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.inner.is_none()
    }

    /// Number of elements pulled from the source so far.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }
}

impl<I: Iterator> Iterator for Cursor<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.advance()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            Some(inner) => inner.size_hint(),
            None => (0, Some(0)),
        }
    }
}

impl<I: Iterator> FusedIterator for Cursor<I> {}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    struct Tracked<'a> {
        items: std::vec::IntoIter<u32>,
        drops: &'a Cell<usize>,
        pulls_after_end: Rc<Cell<usize>>,
        ended: bool,
    }

    impl Iterator for Tracked<'_> {
        type Item = u32;

        fn next(&mut self) -> Option<u32> {
            if self.ended {
                self.pulls_after_end.set(self.pulls_after_end.get() + 1);
            }
            let next = self.items.next();
            self.ended = next.is_none();
            next
        }
    }

    impl Drop for Tracked<'_> {
        fn drop(&mut self) {
            self.drops.set(self.drops.get() + 1);
        }
    }

    #[test]
    fn test_release_on_exhaustion() {
        let drops = Cell::new(0);
        let after_end = Rc::new(Cell::new(0));
        let mut cursor = Cursor::new(Tracked {
            items: vec![1, 2].into_iter(),
            drops: &drops,
            pulls_after_end: after_end.clone(),
            ended: false,
        });

        assert_eq!(cursor.advance(), Some(1));
        assert_eq!(cursor.advance(), Some(2));
        assert_eq!(drops.get(), 0);
        assert_eq!(cursor.advance(), None);
        assert_eq!(drops.get(), 1);
        assert!(cursor.is_exhausted());

        assert_eq!(cursor.advance(), None);
        assert_eq!(cursor.advance(), None);
        assert_eq!(after_end.get(), 0);
        assert_eq!(cursor.position(), 2);
        drop(cursor);
        assert_eq!(drops.get(), 1);
    }

    #[test]
    fn test_early_release() {
        let drops = Cell::new(0);
        let mut cursor = Cursor::new(Tracked {
            items: vec![1, 2, 3].into_iter(),
            drops: &drops,
            pulls_after_end: Rc::new(Cell::new(0)),
            ended: false,
        });
        assert_eq!(cursor.advance(), Some(1));
        cursor.release();
        assert_eq!(drops.get(), 1);
        assert_eq!(cursor.advance(), None);
        cursor.release();
        drop(cursor);
        assert_eq!(drops.get(), 1);
    }

    #[test]
    fn test_advance_into() {
        let mut cursor = Cursor::new(0..5);
        let mut dest = Vec::new();
        assert_eq!(cursor.advance_into(3, &mut dest), 3);
        assert_eq!(dest, vec![0, 1, 2]);
        assert_eq!(cursor.advance_into(3, &mut dest), 2);
        assert_eq!(dest, vec![0, 1, 2, 3, 4]);
        assert!(cursor.is_exhausted());
    }

    #[test]
    fn test_size_hint() {
        let mut cursor = Cursor::new(vec![1, 2, 3]);
        assert_eq!(cursor.size_hint(), (3, Some(3)));
        cursor.by_ref().for_each(drop);
        assert_eq!(cursor.size_hint(), (0, Some(0)));
    }

    #[test]
    fn test_random_lengths() {
        let mut rng = fastrand::Rng::with_seed(17);
        for _ in 0..50 {
            let len = rng.usize(0..40);
            let take = rng.usize(0..50);
            let mut cursor = Cursor::new(0..len);
            let mut dest = Vec::new();
            let pulled = cursor.advance_into(take, &mut dest);
            assert_eq!(pulled, take.min(len));
            assert_eq!(cursor.position(), pulled);
            assert_eq!(dest, (0..pulled).collect::<Vec<_>>());
        }
    }
}
