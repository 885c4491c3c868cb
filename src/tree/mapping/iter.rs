use core::slice;

use crate::tree::data::Data;
use crate::tree::raw::RawMappingItem;
use crate::tree::Value;

/// An immutable iterator over a [`Mapping`][crate::tree::mapping::Mapping].
///
/// See [`Mapping::iter`][crate::tree::mapping::Mapping::iter].
pub struct Iter<'a> {
    data: &'a Data,
    iter: slice::Iter<'a, RawMappingItem>,
}

impl<'a> Iter<'a> {
    #[inline]
    pub(crate) fn new(data: &'a Data, slice: &'a [RawMappingItem]) -> Self {
        Self {
            data,
            iter: slice.iter(),
        }
    }

    #[inline]
    fn entry(&self, item: &RawMappingItem) -> (&'a str, Value<'a>) {
        let key = self.data.str(item.key);
        let value = Value::new(self.data, item.value);
        (key, value)
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, Value<'a>);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let item = self.iter.next()?;
        Some(self.entry(item))
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        let item = self.iter.nth(n)?;
        Some(self.entry(item))
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
        Some(self.entry(item))
    }

    #[inline]
    fn nth_back(&mut self, n: usize) -> Option<Self::Item> {
        let item = self.iter.nth_back(n)?;
        Some(self.entry(item))
    }
}

impl ExactSizeIterator for Iter<'_> {}

/// An iterator over the keys of a [`Mapping`][crate::tree::mapping::Mapping].
///
/// See [`Mapping::keys`][crate::tree::mapping::Mapping::keys].
pub struct Keys<'a> {
    data: &'a Data,
    iter: slice::Iter<'a, RawMappingItem>,
}

impl<'a> Keys<'a> {
    #[inline]
    pub(crate) fn new(data: &'a Data, slice: &'a [RawMappingItem]) -> Self {
        Self {
            data,
            iter: slice.iter(),
        }
    }
}

impl<'a> Iterator for Keys<'a> {
    type Item = &'a str;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let item = self.iter.next()?;
        Some(self.data.str(item.key))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl DoubleEndedIterator for Keys<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        let item = self.iter.next_back()?;
        Some(self.data.str(item.key))
    }
}

impl ExactSizeIterator for Keys<'_> {}
