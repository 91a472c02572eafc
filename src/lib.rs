//! seqview - Chainable, immutable views over ordered sequences
//!
//! # Overview
//!
//! `seqview` wraps an ordered collection in a [`SequenceView`] and offers the
//! usual stream-style operations on it. Transformations return a new view and
//! never touch the one they were called on; terminal operations return a plain
//! value.
//!
//! - Transformations: `map`, `filter`, `reverse`, `slice`, `concat`, `zip`,
//!   `flat_map`, `flatten`
//! - Terminal operations: `reduce`, `for_each`, `any`, `all`, `find`, `first`,
//!   `last`, `get`, `count`, `collect`
//!
//! # Quick Start
//!
//! ```
//! use seqview::SequenceView;
//!
//! let numbers = SequenceView::from([1, 2, 3, 4, 5]);
//!
//! // Chain a filter and a map, then materialize
//! let squares = numbers.filter(|x| x % 2 == 0).map(|x| x * x);
//! assert_eq!(squares.to_string(), "[4 16]");
//!
//! // Fold to a single value
//! assert_eq!(numbers.reduce(|acc, x| acc + x, 0), 15);
//!
//! // The source view is unchanged
//! assert_eq!(numbers.collect(), vec![1, 2, 3, 4, 5]);
//! ```
//!
//! # Missing Elements
//!
//! `find`, `first`, `last` and `get` return `None` when there is nothing to
//! return. Their `try_*` counterparts return an [`Error`] instead, for use
//! with `?`:
//!
//! ```
//! use seqview::{Error, SequenceView};
//!
//! let empty = SequenceView::<i32>::empty();
//! assert_eq!(empty.first(), None);
//! assert_eq!(empty.try_first(), Err(Error::Empty { op: "first" }));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub use seqview_core::{ElementView, Error, Result, SequenceView, error, traits, view};
