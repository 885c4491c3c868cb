use core::slice;

use crate::tree::data::{Data, Id};
use crate::tree::Value;

/// An immutable iterator over a [`Sequence`][crate::tree::sequence::Sequence].
///
/// See [`Sequence::iter`][crate::tree::sequence::Sequence::iter].
pub struct Iter<'a> {
    data: &'a Data,
    iter: slice::Iter<'a, Id>,
}

impl<'a> Iter<'a> {
    #[inline]
    pub(crate) fn new(data: &'a Data, slice: &'a [Id]) -> Self {
        Self {
            data,
            iter: slice.iter(),
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = Value<'a>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let item = self.iter.next()?;
        Some(Value::new(self.data, *item))
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        let item = self.iter.nth(n)?;
        Some(Value::new(self.data, *item))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        let item = self.iter.next_back()?;
        Some(Value::new(self.data, *item))
    }

    #[inline]
    fn nth_back(&mut self, n: usize) -> Option<Self::Item> {
        let item = self.iter.nth_back(n)?;
        Some(Value::new(self.data, *item))
    }
}

impl ExactSizeIterator for Iter<'_> {}
