//! Error type for the fallible accessors of [`SequenceView`](crate::SequenceView).
//!
//! The only failure a view can report is that the requested element does not
//! exist. The `Option`-returning accessors (`first`, `find`, `get`, ...) signal
//! that with `None`; the `try_*` accessors report it through [`Error`] so it can
//! be propagated with `?`.

use thiserror::Error;

/// A requested element does not exist.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// `first` or `last` on a view with no elements.
    #[error("`{op}` called on an empty sequence")]
    Empty { op: &'static str },

    /// No element satisfied the predicate passed to `find`.
    #[error("no element matched the predicate")]
    NoMatch,

    /// Positional access past the end of the view.
    #[error("index {index} out of bounds for sequence of length {len}")]
    OutOfBounds { index: usize, len: usize },
}

pub type Result<T> = core::result::Result<T, Error>;
