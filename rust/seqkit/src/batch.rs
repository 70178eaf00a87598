//! An iterator adapter that partitions a source into fixed-size chunks.

use seqkit_common::{Result, verify_arg};
use seqkit_cursor::Cursor;

/// Selector used by [`crate::SeqIteratorsExt::batch`]: each chunk is emitted as is.
pub type ChunkFn<T> = fn(Vec<T>) -> Vec<T>;

/// An iterator adapter that yields consecutive, non-overlapping chunks.
///
/// Every chunk holds exactly `size` elements except the last one, which holds
/// between 1 and `size`. An empty source yields no chunk at all. Each chunk is
/// passed through `selector` before it is emitted.
///
/// At most `size` source elements are held at any time.
#[derive(Debug, Clone)]
pub struct Batch<I, F> {
    /// The underlying source.
    cursor: Cursor<I>,
    /// The maximum number of elements per chunk.
    size: usize,
    /// Applied to every chunk.
    selector: F,
}

impl<I, F, R> Batch<I, F>
where
    I: Iterator,
    F: FnMut(Vec<I::Item>) -> R,
{
    /// Creates a new `Batch` iterator.
    ///
    /// # Arguments
    ///
    /// * `inner` - The underlying source.
    /// * `size` - The number of elements per chunk. Must be greater than 0.
    /// * `selector` - Applied to each chunk before it is yielded.
    pub fn new(inner: I, size: usize, selector: F) -> Result<Self> {
        verify_arg!(size, size > 0);
        Ok(Batch {
            cursor: Cursor::new(inner),
            size,
            selector,
        })
    }
}

impl<I, F, R> Iterator for Batch<I, F>
where
    I: Iterator,
    F: FnMut(Vec<I::Item>) -> R,
{
    type Item = R;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.cursor.advance()?;
        // Sized from the source hint so that a huge `size` over a short source
        // does not reserve memory it will never use.
        let expected = self.cursor.size_hint().0.saturating_add(1);
        let mut chunk = Vec::with_capacity(self.size.min(expected));
        chunk.push(first);
        self.cursor.advance_into(self.size - 1, &mut chunk);
        Some((self.selector)(chunk))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.cursor.size_hint();
        (
            lower.div_ceil(self.size),
            upper.map(|n| n.div_ceil(self.size)),
        )
    }
}
