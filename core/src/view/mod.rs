//! The [`SequenceView`] type.
//!
//! Operations are split by kind: [`transform`] holds the chainable ones that
//! return a new view, [`terminal`] the ones that produce a plain value.

use alloc::vec::Vec;
use core::fmt;

use ecow::EcoVec;

use crate::traits::ElementView;

mod serialize;
pub mod terminal;
pub mod transform;

/// An immutable, ordered sequence of `T` with chainable operations.
///
/// Backed by a reference-counted [`EcoVec`]: cloning a view is O(1) and shares
/// its storage. Every transformation allocates fresh storage for its result,
/// so the elements seen through a view never change after construction.
#[derive(Clone, PartialEq, Eq)]
pub struct SequenceView<T: Clone> {
    elements: EcoVec<T>,
}

#[cfg(target_pointer_width = "64")]
static_assertions::assert_eq_size!(SequenceView<u8>, [usize; 2]);

impl<T: Clone> SequenceView<T> {
    /// Wrap a sequence of elements, preserving their order.
    pub fn new(elements: impl IntoIterator<Item = T, IntoIter: ExactSizeIterator>) -> Self {
        let elements = elements.into_iter();
        let mut storage = EcoVec::with_capacity(elements.len());
        storage.extend(elements);
        Self::from_storage(storage)
    }

    /// A view with no elements.
    pub fn empty() -> Self {
        Self::from_storage(EcoVec::new())
    }

    /// Copy the elements of any [`ElementView`] into a new view.
    pub fn copy_from<V>(source: &V) -> Self
    where
        V: ElementView<T> + ?Sized,
    {
        (0..source.len())
            .filter_map(|index| source.get(index).cloned())
            .collect()
    }

    pub(crate) fn from_storage(elements: EcoVec<T>) -> Self {
        Self { elements }
    }

    /// Number of elements in the view.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        self.elements.as_slice()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.elements.iter()
    }
}

impl<T: Clone> Default for SequenceView<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Clone> ElementView<T> for SequenceView<T> {
    fn len(&self) -> usize {
        self.elements.len()
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.elements.as_slice().get(index)
    }
}

// --- Conversions ---

impl<T: Clone> FromIterator<T> for SequenceView<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_storage(iter.into_iter().collect())
    }
}

impl<T: Clone> From<Vec<T>> for SequenceView<T> {
    fn from(elements: Vec<T>) -> Self {
        Self::new(elements)
    }
}

impl<T: Clone> From<&[T]> for SequenceView<T> {
    fn from(elements: &[T]) -> Self {
        Self::new(elements.iter().cloned())
    }
}

impl<T: Clone, const N: usize> From<[T; N]> for SequenceView<T> {
    fn from(elements: [T; N]) -> Self {
        Self::new(elements)
    }
}

impl<T: Clone> From<SequenceView<T>> for Vec<T> {
    fn from(view: SequenceView<T>) -> Self {
        view.collect()
    }
}

impl<T: Clone> AsRef<[T]> for SequenceView<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<'a, T: Clone> IntoIterator for &'a SequenceView<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Clone + PartialEq> PartialEq<[T]> for SequenceView<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: Clone + PartialEq> PartialEq<Vec<T>> for SequenceView<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Clone + PartialEq, const N: usize> PartialEq<[T; N]> for SequenceView<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

// --- Formatting ---

impl<T: Clone + fmt::Debug> fmt::Debug for SequenceView<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Space-separated elements inside brackets: `[4 16]`, `[]`.
impl<T: Clone + fmt::Display> fmt::Display for SequenceView<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, element) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            fmt::Display::fmt(element, f)?;
        }
        f.write_str("]")
    }
}
