//! Lazy, single-pass sequence operators with bounded lookahead.
//!
//! This crate extends [`Iterator`] with operators whose common concern is holding
//! a bounded buffer while reading a possibly infinite source exactly once:
//!
//! - **Windows**: [`Window`], [`WindowLeft`], [`WindowRight`]
//! - **Chunks**: [`Batch`]
//! - **Neighbors**: [`Lag`], [`Lead`], [`Pairwise`]
//! - **Distance from the end**: [`CountDown`], [`SkipLast`], [`TakeLast`]
//! - **Relocation**: [`MoveRange`], [`SwapRange`], [`Exclude`], [`Insert`], [`Backsert`]
//! - **Scans and gap filling**: [`ScanRight`], [`FillForward`], [`FillBackward`]
//!
//! Every adapter is deferred: constructing it pulls nothing from the source.
//! Dropping an adapter drops its source, and reaching the end of a source drops it
//! immediately. Parameter checks that need no source data are done at construction
//! and reported as [`seqkit_common::Result`]; checks that depend on the source length
//! are reported as `Err` items at the point the source turns out too short.
//!
//! All operators are available through the [`SeqIteratorsExt`] extension trait.

pub mod batch;
pub mod count_down;
pub mod fill;
pub mod insert;
pub mod lag_lead;
pub mod relocate;
pub mod scan;
pub mod tail;
pub mod window;

pub use batch::Batch;
pub use count_down::{CountDown, CountDownStrategy};
pub use fill::{FillBackward, FillForward};
pub use insert::{Backsert, Insert};
pub use lag_lead::{Lag, Lead};
pub use relocate::{Exclude, MovePlan, MoveRange, SwapRange};
pub use scan::{Pairwise, ScanRight, ScanRightSeeded};
pub use seqkit_common::{Result, error::Error, error::ErrorKind};
pub use tail::{SkipLast, TakeLast};
pub use window::{Window, WindowBoundary, WindowLeft, WindowRight};

use batch::ChunkFn;
use count_down::TagFn;
use fill::IsNoneFn;

/// Extension trait exposing the seqkit operators on every iterator.
pub trait SeqIteratorsExt: Iterator + Sized {
    /// Partitions the sequence into chunks of `size` elements; the last chunk may
    /// be shorter.
    ///
    /// # Errors
    ///
    /// Invalid argument if `size` is 0.
    fn batch(self, size: usize) -> Result<Batch<Self, ChunkFn<Self::Item>>> {
        Batch::new(self, size, std::convert::identity as ChunkFn<Self::Item>)
    }

    /// Like [`SeqIteratorsExt::batch`], passing each chunk through `selector`.
    ///
    /// # Errors
    ///
    /// Invalid argument if `size` is 0.
    fn batch_map<R, F>(self, size: usize, selector: F) -> Result<Batch<Self, F>>
    where
        F: FnMut(Vec<Self::Item>) -> R,
    {
        Batch::new(self, size, selector)
    }

    /// Full-size overlapping windows; nothing when the sequence is shorter than `size`.
    ///
    /// # Errors
    ///
    /// Invalid argument if `size` is 0.
    fn window(self, size: usize) -> Result<Window<Self>> {
        Window::new(self, size, WindowBoundary::Strict)
    }

    /// Full-size overlapping windows; a single short window when the sequence is
    /// non-empty but shorter than `size`.
    ///
    /// # Errors
    ///
    /// Invalid argument if `size` is 0.
    fn sliding_window(self, size: usize) -> Result<Window<Self>> {
        Window::new(self, size, WindowBoundary::Partial)
    }

    /// Full-size overlapping windows, with `boundary` deciding what a sequence
    /// shorter than `size` produces.
    ///
    /// # Errors
    ///
    /// Invalid argument if `size` is 0.
    fn window_with(self, size: usize, boundary: WindowBoundary) -> Result<Window<Self>> {
        Window::new(self, size, boundary)
    }

    /// One window per element, starting at that element and shrinking at the end.
    ///
    /// # Errors
    ///
    /// Invalid argument if `size` is 0.
    fn window_left(self, size: usize) -> Result<WindowLeft<Self>> {
        WindowLeft::new(self, size)
    }

    /// One window per element, ending at that element and growing at the start.
    ///
    /// # Errors
    ///
    /// Invalid argument if `size` is 0.
    fn window_right(self, size: usize) -> Result<WindowRight<Self>> {
        WindowRight::new(self, size)
    }

    /// Pairs each element with the one `offset` positions earlier, or `default`.
    ///
    /// # Errors
    ///
    /// Invalid argument if `offset` is 0.
    fn lag<R, F>(self, offset: usize, default: Self::Item, selector: F) -> Result<Lag<Self, F>>
    where
        Self::Item: Clone,
        F: FnMut(Self::Item, Self::Item) -> R,
    {
        Lag::new(self, offset, default, selector)
    }

    /// Like [`SeqIteratorsExt::lag`] with `Default::default()` as the placeholder.
    ///
    /// # Errors
    ///
    /// Invalid argument if `offset` is 0.
    fn lag_default<R, F>(self, offset: usize, selector: F) -> Result<Lag<Self, F>>
    where
        Self::Item: Clone + Default,
        F: FnMut(Self::Item, Self::Item) -> R,
    {
        Lag::new(self, offset, Default::default(), selector)
    }

    /// Pairs each element with the one `offset` positions later, or `default`.
    ///
    /// # Errors
    ///
    /// Invalid argument if `offset` is 0.
    fn lead<R, F>(self, offset: usize, default: Self::Item, selector: F) -> Result<Lead<Self, F>>
    where
        Self::Item: Clone,
        F: FnMut(Self::Item, Self::Item) -> R,
    {
        Lead::new(self, offset, default, selector)
    }

    /// Like [`SeqIteratorsExt::lead`] with `Default::default()` as the placeholder.
    ///
    /// # Errors
    ///
    /// Invalid argument if `offset` is 0.
    fn lead_default<R, F>(self, offset: usize, selector: F) -> Result<Lead<Self, F>>
    where
        Self::Item: Clone + Default,
        F: FnMut(Self::Item, Self::Item) -> R,
    {
        Lead::new(self, offset, Default::default(), selector)
    }

    /// Tags each element with its distance from the end when that distance is
    /// below `count`, and with `None` otherwise.
    fn count_down(self, count: usize) -> CountDown<Self, TagFn<Self::Item>> {
        CountDown::new(self, count, count_down::tag as TagFn<Self::Item>)
    }

    /// Like [`SeqIteratorsExt::count_down`], passing each element and its
    /// countdown through `selector`.
    fn count_down_map<R, F>(self, count: usize, selector: F) -> CountDown<Self, F>
    where
        F: FnMut(Self::Item, Option<usize>) -> R,
    {
        CountDown::new(self, count, selector)
    }

    /// Moves the `count` elements at `from` so that they start at output index `to`.
    ///
    /// # Errors
    ///
    /// Invalid argument if `from + count` or `to + count` overflows.
    fn move_range(self, from: usize, count: usize, to: usize) -> Result<MoveRange<Self>> {
        MoveRange::new(self, from, count, to)
    }

    /// Swaps the `count` elements at `first` with the `count` elements at `second`.
    ///
    /// # Errors
    ///
    /// Invalid argument if the two ranges overlap.
    fn swap_range(self, first: usize, second: usize, count: usize) -> Result<SwapRange<Self>> {
        SwapRange::new(self, first, second, count)
    }

    /// Drops the `count` elements starting at `start`.
    fn exclude(self, start: usize, count: usize) -> Exclude<Self> {
        Exclude::new(self, start, count)
    }

    /// Inserts `other` before the element at `index`.
    fn insert<J>(self, index: usize, other: J) -> Insert<Self, J::IntoIter>
    where
        J: IntoIterator<Item = Self::Item>,
    {
        Insert::new(self, other.into_iter(), index)
    }

    /// Inserts `other` `index` elements before the end.
    fn backsert<J>(self, index: usize, other: J) -> Backsert<Self, J::IntoIter>
    where
        J: IntoIterator<Item = Self::Item>,
    {
        Backsert::new(self, other.into_iter(), index)
    }

    /// Drops the last `count` elements, holding at most `count` back.
    fn skip_last(self, count: usize) -> SkipLast<Self> {
        SkipLast::new(self, count)
    }

    /// Yields only the last `count` elements.
    fn take_last(self, count: usize) -> TakeLast<Self> {
        TakeLast::new(self, count)
    }

    /// Maps every pair of adjacent elements through `selector(&previous, &current)`.
    fn pairwise<R, F>(self, selector: F) -> Pairwise<Self, F>
    where
        F: FnMut(&Self::Item, &Self::Item) -> R,
    {
        Pairwise::new(self, selector)
    }

    /// Right-associative scan without a seed: `[a, b, c]` becomes
    /// `[func(a, &func(b, &c)), func(b, &c), c]`. The whole source is read on the
    /// first pull.
    fn scan_right<F>(self, func: F) -> ScanRight<Self, F>
    where
        F: FnMut(Self::Item, &Self::Item) -> Self::Item,
    {
        ScanRight::new(self, func)
    }

    /// Right-associative scan folding into `seed`, yielding one more result than
    /// there are elements, the last being `seed` itself.
    fn scan_right_seeded<A, F>(self, seed: A, func: F) -> ScanRightSeeded<Self, A, F>
    where
        F: FnMut(Self::Item, &A) -> A,
    {
        ScanRightSeeded::new(self, seed, func)
    }

    /// Replaces each element matching `is_missing` with the most recent element
    /// that does not.
    fn fill_forward_by<P>(self, is_missing: P) -> FillForward<Self, P>
    where
        Self::Item: Clone,
        P: FnMut(&Self::Item) -> bool,
    {
        FillForward::new(self, is_missing)
    }

    /// Replaces each `None` with the most recent `Some`.
    fn fill_forward<T>(self) -> FillForward<Self, IsNoneFn<T>>
    where
        Self: Iterator<Item = Option<T>>,
        T: Clone,
    {
        FillForward::new(self, Option::is_none as IsNoneFn<T>)
    }

    /// Replaces each element matching `is_missing` with the next element that
    /// does not.
    fn fill_backward_by<P>(self, is_missing: P) -> FillBackward<Self, P>
    where
        Self::Item: Clone,
        P: FnMut(&Self::Item) -> bool,
    {
        FillBackward::new(self, is_missing)
    }

    /// Replaces each `None` with the next `Some`.
    fn fill_backward<T>(self) -> FillBackward<Self, IsNoneFn<T>>
    where
        Self: Iterator<Item = Option<T>>,
        T: Clone,
    {
        FillBackward::new(self, Option::is_none as IsNoneFn<T>)
    }
}

impl<I: Iterator> SeqIteratorsExt for I {}
