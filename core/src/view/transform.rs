//! Chainable operations.
//!
//! Every function here reads from `self` and returns a new [`SequenceView`]
//! backed by freshly allocated storage. The input view is never modified.

use ecow::EcoVec;

use super::SequenceView;

impl<T: Clone> SequenceView<T> {
    /// Apply `f` to every element, preserving order.
    ///
    /// The result has the same length as `self` and may have a different
    /// element type.
    ///
    /// # Examples
    /// - `[1, 2, 3].map(|x| x * 2)` → `[2, 4, 6]`
    /// - `["a", "bb"].map(|s| s.len())` → `[1, 2]`
    /// - `[].map(|x| x)` → `[]`
    pub fn map<U, F>(&self, f: F) -> SequenceView<U>
    where
        U: Clone,
        F: FnMut(&T) -> U,
    {
        let mut out = EcoVec::with_capacity(self.len());
        out.extend(self.iter().map(f));
        tracing::trace!(op = "map", len = out.len());
        SequenceView::from_storage(out)
    }

    /// Keep the elements for which `predicate` holds, in their original order.
    ///
    /// # Examples
    /// - `[1, 2, 3, 4].filter(|x| x % 2 == 0)` → `[2, 4]`
    /// - `[1, 3].filter(|x| x % 2 == 0)` → `[]`
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        let out: EcoVec<T> = self.iter().filter(|x| predicate(x)).cloned().collect();
        tracing::trace!(op = "filter", input = self.len(), output = out.len());
        Self::from_storage(out)
    }

    /// The same elements in reverse order.
    ///
    /// # Edge Cases
    ///
    /// - Empty view: `[].reverse()` → `[]`
    /// - Single element: `[1].reverse()` → `[1]`
    pub fn reverse(&self) -> Self {
        let mut out = EcoVec::with_capacity(self.len());
        out.extend(self.iter().rev().cloned());
        tracing::trace!(op = "reverse", len = out.len());
        Self::from_storage(out)
    }

    /// Elements in `start..end`.
    ///
    /// # Edge Cases
    ///
    /// - If `start >= end`, returns an empty view
    /// - If `start` is beyond the length, returns an empty view
    /// - If `end` is beyond the length, it's clamped to the length
    ///
    /// # Examples
    /// - `[1, 2, 3, 4, 5].slice(1, 4)` → `[2, 3, 4]`
    /// - `[1, 2, 3].slice(3, 1)` → `[]`
    /// - `[1, 2, 3].slice(1, 100)` → `[2, 3]`
    pub fn slice(&self, start: usize, end: usize) -> Self {
        let len = self.len();
        let start = start.min(len);
        let end = end.min(len);
        if start >= end {
            return Self::empty();
        }
        let mut out = EcoVec::with_capacity(end - start);
        out.extend_from_slice(&self.as_slice()[start..end]);
        tracing::trace!(op = "slice", input = len, output = out.len());
        Self::from_storage(out)
    }

    /// `self` followed by `other`.
    pub fn concat(&self, other: &Self) -> Self {
        let mut out = EcoVec::with_capacity(self.len() + other.len());
        out.extend_from_slice(self.as_slice());
        out.extend_from_slice(other.as_slice());
        tracing::trace!(op = "concat", len = out.len());
        Self::from_storage(out)
    }

    /// Pair elements positionally, stopping at the shorter of the two views.
    ///
    /// # Examples
    /// - `[1, 2].zip(["a", "b"])` → `[(1, "a"), (2, "b")]`
    /// - `[1, 2].zip([3, 4, 5, 6])` → `[(1, 3), (2, 4)]`
    pub fn zip<U: Clone>(&self, other: &SequenceView<U>) -> SequenceView<(T, U)> {
        let mut out = EcoVec::with_capacity(self.len().min(other.len()));
        out.extend(self.iter().cloned().zip(other.iter().cloned()));
        tracing::trace!(op = "zip", len = out.len());
        SequenceView::from_storage(out)
    }

    /// Apply `f` to every element and concatenate the resulting views.
    pub fn flat_map<U, F>(&self, mut f: F) -> SequenceView<U>
    where
        U: Clone,
        F: FnMut(&T) -> SequenceView<U>,
    {
        let mut out = EcoVec::new();
        for element in self.iter() {
            out.extend_from_slice(f(element).as_slice());
        }
        tracing::trace!(op = "flat_map", input = self.len(), output = out.len());
        SequenceView::from_storage(out)
    }
}

impl<T: Clone> SequenceView<SequenceView<T>> {
    /// Concatenate a view of views into a single view.
    ///
    /// # Examples
    /// - `[[1, 2], [3], []].flatten()` → `[1, 2, 3]`
    pub fn flatten(&self) -> SequenceView<T> {
        let total = self.iter().map(SequenceView::len).sum();
        let mut out = EcoVec::with_capacity(total);
        for inner in self.iter() {
            out.extend_from_slice(inner.as_slice());
        }
        tracing::trace!(op = "flatten", input = self.len(), output = out.len());
        SequenceView::from_storage(out)
    }
}

#[cfg(test)]
#[path = "transform_test.rs"]
mod transform_test;
