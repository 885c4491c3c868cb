use core::fmt;

use crate::node::Node;
use crate::tree::data::{Data, Id};
use crate::tree::sequence::Iter;
use crate::tree::{Error, Value};

/// Accessor for a sequence.
///
/// Elements are converted the same way as the values of a
/// [`Mapping`][crate::tree::Mapping]: nested mappings and sequences come back
/// as views, scalars as they are.
///
/// Indices are `usize`, so there is no end-relative indexing. Use
/// [`Sequence::last`] to get at the final element.
///
/// # Examples
///
/// ```
/// # #[cfg(feature = "xml")] {
/// use metaview::tree::{Error, Value};
///
/// let doc = metaview::from_document(r#"
/// <Pixels>
///     <Channel Name="DAPI"/>
///     <Channel Name="GFP"/>
///     <Channel Name="mCherry"/>
/// </Pixels>
/// "#)?;
///
/// let channels = doc.root().attr("channel")?;
/// let channels = channels.as_sequence().ok_or("not a sequence")?;
///
/// assert_eq!(channels.len(), 3);
/// assert_eq!(channels.at(0)?.attr("name")?, Value::String("DAPI"));
/// assert_eq!(channels.at(2)?.attr("name")?, Value::String("mCherry"));
/// assert!(matches!(channels.at(3), Err(Error::IndexOutOfRange { index: 3, len: 3 })));
/// # }
/// # Ok::<_, Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy)]
pub struct Sequence<'a> {
    data: &'a Data,
    pub(crate) id: Id,
}

impl<'a> Sequence<'a> {
    pub(crate) fn new(data: &'a Data, id: Id) -> Self {
        Self { data, id }
    }

    /// Get the opaque [`Id`] associated with this sequence.
    #[must_use]
    #[inline]
    pub fn id(&self) -> Id {
        self.id
    }

    /// Get the length of the sequence.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.data.sequence(self.id).items.len()
    }

    /// Test if the sequence is empty.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.sequence(self.id).items.is_empty()
    }

    /// Get the element at `index`, returning `None` if it is out of bounds.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Value<'a>> {
        let item = self.data.sequence(self.id).items.get(index)?;
        Some(Value::new(self.data, *item))
    }

    /// Get the element at `index`.
    ///
    /// # Errors
    ///
    /// Errors with [`Error::IndexOutOfRange`] if `index` is not smaller than
    /// the length of the sequence.
    pub fn at(&self, index: usize) -> Result<Value<'a>, Error> {
        self.get(index).ok_or_else(|| Error::IndexOutOfRange {
            index,
            len: self.len(),
        })
    }

    /// Get the first element.
    #[must_use]
    pub fn first(&self) -> Option<Value<'a>> {
        let item = self.data.sequence(self.id).items.first()?;
        Some(Value::new(self.data, *item))
    }

    /// Get the last element.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[cfg(feature = "xml")] {
    /// let doc = metaview::from_document(r#"<Z><Plane>1</Plane><Plane>2</Plane></Z>"#)?;
    /// let planes = doc.root().attr("plane")?;
    /// let planes = planes.as_sequence().ok_or("not a sequence")?;
    ///
    /// assert_eq!(planes.first().and_then(|v| v.as_i64()), Some(1));
    /// assert_eq!(planes.last().and_then(|v| v.as_i64()), Some(2));
    /// # }
    /// # Ok::<_, Box<dyn std::error::Error>>(())
    /// ```
    #[must_use]
    pub fn last(&self) -> Option<Value<'a>> {
        let item = self.data.sequence(self.id).items.last()?;
        Some(Value::new(self.data, *item))
    }

    /// Returns an iterator over the [`Sequence`].
    ///
    /// Every call produces a fresh iterator starting at the first element.
    #[must_use]
    #[inline]
    pub fn iter(&self) -> Iter<'a> {
        Iter::new(self.data, &self.data.sequence(self.id).items)
    }

    /// Copy the sequence and everything below it into owned [`Node`]s.
    #[must_use]
    pub fn to_node(&self) -> Vec<Node> {
        self.iter().map(|value| value.to_node()).collect()
    }
}

impl PartialEq for Sequence<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl fmt::Display for Sequence<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;

        let mut it = self.iter().peekable();

        while let Some(value) = it.next() {
            fmt::Display::fmt(&value, f)?;

            if it.peek().is_some() {
                f.write_str(", ")?;
            }
        }

        f.write_str("]")
    }
}

impl fmt::Debug for Sequence<'_> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a> IntoIterator for Sequence<'a> {
    type Item = Value<'a>;
    type IntoIter = Iter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &Sequence<'a> {
    type Item = Value<'a>;
    type IntoIter = Iter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
