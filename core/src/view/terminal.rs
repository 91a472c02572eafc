//! Terminal operations.
//!
//! These consume or read a view and produce a plain value. Absence of a
//! result is `None` for the `Option` accessors and [`Error`] for their `try_*`
//! counterparts. Nothing here panics.

use alloc::vec::Vec;

use super::SequenceView;
use crate::error::{Error, Result};

impl<T: Clone> SequenceView<T> {
    /// Fold the elements left to right, starting from `initial`.
    ///
    /// Returns `initial` unchanged for an empty view.
    ///
    /// # Examples
    /// - `[1, 2, 3, 4, 5].reduce(|acc, x| acc + x, 0)` → `15`
    /// - `[].reduce(|acc, x| acc + x, 10)` → `10`
    pub fn reduce<A, F>(&self, mut f: F, initial: A) -> A
    where
        F: FnMut(A, &T) -> A,
    {
        let mut acc = initial;
        for element in self.iter() {
            acc = f(acc, element);
        }
        acc
    }

    /// Call `f` once per element, in order.
    pub fn for_each<F>(&self, f: F)
    where
        F: FnMut(&T),
    {
        self.iter().for_each(f);
    }

    /// Whether at least one element satisfies `predicate`.
    ///
    /// Stops at the first match. `false` for an empty view.
    pub fn any<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().any(predicate)
    }

    /// Whether every element satisfies `predicate`.
    ///
    /// Stops at the first failure. `true` for an empty view.
    pub fn all<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().all(predicate)
    }

    /// The first element satisfying `predicate`.
    pub fn find<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().find(|x| predicate(x))
    }

    pub fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    pub fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// Number of elements. O(1).
    pub fn count(&self) -> usize {
        self.len()
    }

    /// The elements as a `Vec`, in order.
    ///
    /// Moves the elements out when this view holds the only reference to its
    /// storage and clones them otherwise.
    pub fn collect(self) -> Vec<T> {
        self.elements.into_iter().collect()
    }

    pub fn try_first(&self) -> Result<&T> {
        self.first().ok_or(Error::Empty { op: "first" })
    }

    pub fn try_last(&self) -> Result<&T> {
        self.last().ok_or(Error::Empty { op: "last" })
    }

    pub fn try_find<P>(&self, predicate: P) -> Result<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.find(predicate).ok_or(Error::NoMatch)
    }

    pub fn try_get(&self, index: usize) -> Result<&T> {
        self.get(index).ok_or(Error::OutOfBounds {
            index,
            len: self.len(),
        })
    }
}

#[cfg(test)]
#[path = "terminal_test.rs"]
mod terminal_test;
