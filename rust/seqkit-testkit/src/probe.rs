//! Instrumented sources for laziness and resource-safety checks.

use std::cell::Cell;
use std::rc::Rc;

/// Shared counters observed by a [`Probe`] and by the test that created it.
#[derive(Debug, Clone, Default)]
pub struct ProbeStats {
    pulls: Rc<Cell<usize>>,
    drops: Rc<Cell<usize>>,
}

impl ProbeStats {
    /// Number of `next()` calls made on the probe, including ones that returned `None`.
    pub fn pulls(&self) -> usize {
        self.pulls.get()
    }

    /// Number of times the probe has been dropped.
    pub fn drops(&self) -> usize {
        self.drops.get()
    }
}

/// Iterator wrapper that reports pulls and drops through [`ProbeStats`].
///
/// A probe can additionally be configured to panic once it is pulled past a
/// given number of elements, standing in for a source that faults mid-stream,
/// and to hide its `size_hint`, standing in for a source of unknown length.
pub struct Probe<I> {
    inner: I,
    stats: ProbeStats,
    panic_after: Option<usize>,
    hide_size_hint: bool,
}

impl<I: Iterator> Probe<I> {
    pub fn new<S>(source: S) -> (Self, ProbeStats)
    where
        S: IntoIterator<IntoIter = I>,
    {
        let stats = ProbeStats::default();
        let probe = Probe {
            inner: source.into_iter(),
            stats: stats.clone(),
            panic_after: None,
            hide_size_hint: false,
        };
        (probe, stats)
    }

    /// Panics on the pull that would fetch element number `count` (zero-based).
    pub fn panic_after(mut self, count: usize) -> Self {
        self.panic_after = Some(count);
        self
    }

    /// Reports `(0, None)` as the size hint.
    pub fn hide_size_hint(mut self) -> Self {
        self.hide_size_hint = true;
        self
    }
}

impl<I: Iterator> Iterator for Probe<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let pulls = self.stats.pulls.get();
        if let Some(limit) = self.panic_after {
            if pulls >= limit {
                panic!("probe source touched past element {limit}");
            }
        }
        self.stats.pulls.set(pulls + 1);
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.hide_size_hint {
            (0, None)
        } else {
            self.inner.size_hint()
        }
    }
}

impl<I> Drop for Probe<I> {
    fn drop(&mut self) {
        self.stats.drops.set(self.stats.drops.get() + 1);
    }
}

/// A source that panics as soon as it is pulled.
pub fn untouchable<T>() -> (Probe<std::iter::Empty<T>>, ProbeStats) {
    let (probe, stats) = Probe::new(std::iter::empty());
    (probe.panic_after(0), stats)
}
