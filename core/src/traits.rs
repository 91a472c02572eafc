use alloc::vec::Vec;

/// Read-only positional access to an ordered collection.
///
/// Implemented by [`SequenceView`](crate::SequenceView), slices and `Vec`, so
/// code that only reads elements can accept any of them.
pub trait ElementView<T> {
    fn len(&self) -> usize;

    fn get(&self, index: usize) -> Option<&T>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> ElementView<T> for [T] {
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }
}

impl<T> ElementView<T> for Vec<T> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }
}
