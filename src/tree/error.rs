use thiserror::Error;

/// An error raised while navigating a [`Document`][crate::tree::Document].
///
/// Lookups never modify the tree, so after any of these errors the view it
/// was raised from is still usable.
///
/// # Examples
///
/// ```
/// use metaview::tree::{Document, Error};
/// use metaview::NodeMap;
///
/// let doc = Document::new(NodeMap::new());
/// let root = doc.root();
///
/// assert!(matches!(root.get("missing"), Err(Error::KeyNotFound { .. })));
/// assert!(matches!(root.attr("missing"), Err(Error::AttributeNotFound { .. })));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// A key lookup through [`Mapping::get`] missed.
    ///
    /// [`Mapping::get`]: crate::tree::Mapping::get
    #[error("key `{key}` not found")]
    KeyNotFound {
        /// The key which was looked up.
        key: String,
    },
    /// An attribute lookup through [`Mapping::attr`] missed.
    ///
    /// [`Mapping::attr`]: crate::tree::Mapping::attr
    #[error("mapping has no attribute `{key}`")]
    AttributeNotFound {
        /// The attribute which was looked up.
        key: String,
    },
    /// A sequence index was outside of `0..len`.
    #[error("index {index} out of range for sequence of length {len}")]
    IndexOutOfRange {
        /// The index which was requested.
        index: usize,
        /// The length of the sequence.
        len: usize,
    },
    /// A key or attribute lookup was applied to something other than a
    /// mapping.
    #[error("expected a mapping, found {found}")]
    ExpectedMapping {
        /// The kind of value which was found instead.
        found: &'static str,
    },
    /// An index lookup was applied to something other than a sequence.
    #[error("expected a sequence, found {found}")]
    ExpectedSequence {
        /// The kind of value which was found instead.
        found: &'static str,
    },
}

impl Error {
    #[inline]
    pub(crate) fn key_not_found(key: &str) -> Self {
        Self::KeyNotFound {
            key: key.to_owned(),
        }
    }

    #[inline]
    pub(crate) fn attribute_not_found(key: &str) -> Self {
        Self::AttributeNotFound {
            key: key.to_owned(),
        }
    }
}
