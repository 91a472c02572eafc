#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![deny(unsafe_code)]

//! Chainable, immutable views over ordered sequences.
//!
//! A [`SequenceView`] wraps an ordered collection and exposes stream-style
//! operations. Transformations (`map`, `filter`, `reverse`, ...) return a new
//! view; terminal operations (`reduce`, `find`, `count`, `collect`, ...)
//! produce a plain value. No operation ever writes to the storage of an
//! existing view, so views can be cloned and shared freely.
//!
//! ```
//! use seqview_core::SequenceView;
//!
//! let view = SequenceView::from([1, 2, 3, 4, 5]);
//!
//! let squares = view.filter(|x| x % 2 == 0).map(|x| x * x).collect();
//! assert_eq!(squares, vec![4, 16]);
//!
//! assert_eq!(view.reduce(|acc, x| acc + x, 0), 15);
//! assert_eq!(view.find(|x| x % 2 == 0), Some(&2));
//! assert_eq!(view.count(), 5);
//! assert_eq!(view.reverse().collect(), vec![5, 4, 3, 2, 1]);
//! ```

// This works on std and no_std and is harmless.
extern crate alloc;

pub mod error;
pub mod traits;
pub mod view;

pub use error::{Error, Result};
pub use traits::ElementView;
pub use view::SequenceView;
