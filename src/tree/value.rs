use core::fmt;

use crate::node::Node;
use crate::tree::data::{Data, Id};
use crate::tree::raw::Raw;
use crate::tree::{Error, Mapping, Sequence};
use crate::units::{self, Convert, Quantity};

/// A value inside of a document.
///
/// Every access into a [`Mapping`] or a [`Sequence`] produces a value through
/// the same conversion: stored mappings come back as a [`Mapping`] view,
/// stored sequences as a [`Sequence`] view, and scalars are returned as they
/// are. Views are cheap handles into the document, nothing is copied.
///
/// # Examples
///
/// ```
/// # #[cfg(feature = "xml")] {
/// use metaview::tree::Value;
///
/// let doc = metaview::from_document(r#"<Image Name="cells"><Pixels SizeX="512"/></Image>"#)?;
/// let root = doc.root();
///
/// assert!(matches!(root.get("pixels")?, Value::Mapping(..)));
/// assert_eq!(root.get("name")?, Value::String("cells"));
/// assert_eq!(root.get("pixels")?.get("size_x")?, Value::Integer(512));
/// # }
/// # Ok::<_, anyhow::Error>(())
/// ```
#[derive(Clone, Copy)]
pub enum Value<'a> {
    /// A mapping view.
    Mapping(Mapping<'a>),
    /// A sequence view.
    Sequence(Sequence<'a>),
    /// An integer.
    Integer(i64),
    /// A floating point number.
    Float(f64),
    /// A string.
    String(&'a str),
}

impl<'a> Value<'a> {
    /// Wrap the raw value stored at `id`.
    pub(crate) fn new(data: &'a Data, id: Id) -> Self {
        match data.raw(id) {
            Raw::Mapping(..) => Value::Mapping(Mapping::new(data, id)),
            Raw::Sequence(..) => Value::Sequence(Sequence::new(data, id)),
            Raw::Integer(value) => Value::Integer(*value),
            Raw::Float(value) => Value::Float(*value),
            Raw::String(string) => Value::String(data.str(*string)),
        }
    }

    /// A short name describing the kind of the value.
    ///
    /// # Examples
    ///
    /// ```
    /// use metaview::tree::Value;
    ///
    /// assert_eq!(Value::Integer(1).kind(), "integer");
    /// assert_eq!(Value::String("x").kind(), "string");
    /// ```
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Mapping(..) => "mapping",
            Value::Sequence(..) => "sequence",
            Value::Integer(..) => "integer",
            Value::Float(..) => "float",
            Value::String(..) => "string",
        }
    }

    /// Test if the value is a scalar, that is neither a mapping nor a
    /// sequence.
    #[must_use]
    #[inline]
    pub fn is_scalar(&self) -> bool {
        !matches!(self, Value::Mapping(..) | Value::Sequence(..))
    }

    /// Get the value as a [`Mapping`].
    #[must_use]
    #[inline]
    pub fn as_mapping(&self) -> Option<Mapping<'a>> {
        match self {
            Value::Mapping(mapping) => Some(*mapping),
            _ => None,
        }
    }

    /// Get the value as a [`Sequence`].
    #[must_use]
    #[inline]
    pub fn as_sequence(&self) -> Option<Sequence<'a>> {
        match self {
            Value::Sequence(sequence) => Some(*sequence),
            _ => None,
        }
    }

    /// Get the value as an integer.
    #[must_use]
    #[inline]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(value) => Some(*value),
            _ => None,
        }
    }

    /// Get the value as a floating point number. Integers are widened.
    ///
    /// # Examples
    ///
    /// ```
    /// use metaview::tree::Value;
    ///
    /// assert_eq!(Value::Float(0.5).as_f64(), Some(0.5));
    /// assert_eq!(Value::Integer(2).as_f64(), Some(2.0));
    /// assert_eq!(Value::String("2").as_f64(), None);
    /// ```
    #[must_use]
    #[inline]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(value) => Some(*value),
            Value::Integer(value) => Some(*value as f64),
            _ => None,
        }
    }

    /// Get the value as a string.
    #[must_use]
    #[inline]
    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            Value::String(string) => Some(string),
            _ => None,
        }
    }

    /// Look up `key` in the value, which must be a mapping.
    ///
    /// See [`Mapping::get`].
    ///
    /// # Errors
    ///
    /// Errors with [`Error::ExpectedMapping`] if the value is not a mapping,
    /// or [`Error::KeyNotFound`] if the key is missing.
    pub fn get(&self, key: &str) -> Result<Value<'a>, Error> {
        self.expect_mapping()?.get(key)
    }

    /// Look up the attribute `key` in the value, which must be a mapping.
    ///
    /// See [`Mapping::attr`].
    ///
    /// # Errors
    ///
    /// Errors with [`Error::ExpectedMapping`] if the value is not a mapping,
    /// or [`Error::AttributeNotFound`] if the key is missing.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[cfg(feature = "xml")] {
    /// let doc = metaview::from_document(r#"
    /// <Pixels>
    ///     <Channel Name="DAPI"/>
    ///     <Channel Name="GFP"/>
    ///     <Channel Name="mCherry"/>
    /// </Pixels>
    /// "#)?;
    ///
    /// let name = doc.root().attr("channel")?.at(2)?.attr("name")?;
    /// assert_eq!(name.as_str(), Some("mCherry"));
    /// # }
    /// # Ok::<_, anyhow::Error>(())
    /// ```
    pub fn attr(&self, key: &str) -> Result<Value<'a>, Error> {
        self.expect_mapping()?.attr(key)
    }

    /// Get the element at `index` in the value, which must be a sequence.
    ///
    /// See [`Sequence::at`].
    ///
    /// # Errors
    ///
    /// Errors with [`Error::ExpectedSequence`] if the value is not a
    /// sequence, or [`Error::IndexOutOfRange`] if the index is out of bounds.
    pub fn at(&self, index: usize) -> Result<Value<'a>, Error> {
        self.expect_sequence()?.at(index)
    }

    /// Read a number and its unit from the value, which must be a mapping.
    ///
    /// See [`Mapping::quantity`].
    ///
    /// # Errors
    ///
    /// Errors with [`Error::ExpectedMapping`] if the value is not a mapping,
    /// or as described in [`Mapping::quantity`].
    pub fn quantity<U>(&self, key: &str) -> Result<Quantity<U>, units::Error>
    where
        U: Convert,
    {
        self.expect_mapping()?.quantity(key)
    }

    /// Read a number and its unit from the value, which must be a mapping.
    ///
    /// See [`Mapping::quantity_or`].
    ///
    /// # Errors
    ///
    /// Errors with [`Error::ExpectedMapping`] if the value is not a mapping,
    /// or as described in [`Mapping::quantity_or`].
    pub fn quantity_or<U>(&self, key: &str, default: U) -> Result<Quantity<U>, units::Error>
    where
        U: Convert,
    {
        self.expect_mapping()?.quantity_or(key, default)
    }

    /// Convert the value into an owned [`Node`], copying everything below it.
    #[must_use]
    pub fn to_node(&self) -> Node {
        match self {
            Value::Mapping(mapping) => Node::Mapping(mapping.to_node()),
            Value::Sequence(sequence) => Node::Sequence(sequence.to_node()),
            Value::Integer(value) => Node::Integer(*value),
            Value::Float(value) => Node::Float(*value),
            Value::String(string) => Node::String((*string).to_owned()),
        }
    }

    fn expect_mapping(&self) -> Result<Mapping<'a>, Error> {
        self.as_mapping().ok_or(Error::ExpectedMapping { found: self.kind() })
    }

    fn expect_sequence(&self) -> Result<Sequence<'a>, Error> {
        self.as_sequence()
            .ok_or(Error::ExpectedSequence { found: self.kind() })
    }
}

impl<'a> From<Mapping<'a>> for Value<'a> {
    #[inline]
    fn from(mapping: Mapping<'a>) -> Self {
        Value::Mapping(mapping)
    }
}

impl<'a> From<Sequence<'a>> for Value<'a> {
    #[inline]
    fn from(sequence: Sequence<'a>) -> Self {
        Value::Sequence(sequence)
    }
}

impl PartialEq for Value<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Mapping(a), Value::Mapping(b)) => a == b,
            (Value::Sequence(a), Value::Sequence(b)) => a == b,
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Mapping(mapping) => fmt::Display::fmt(mapping, f),
            Value::Sequence(sequence) => fmt::Display::fmt(sequence, f),
            Value::Integer(value) => f.write_str(itoa::Buffer::new().format(*value)),
            Value::Float(value) => f.write_str(ryu::Buffer::new().format(*value)),
            Value::String(string) => f.write_str(string),
        }
    }
}

impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Mapping(mapping) => fmt::Debug::fmt(mapping, f),
            Value::Sequence(sequence) => fmt::Debug::fmt(sequence, f),
            Value::Integer(value) => fmt::Debug::fmt(value, f),
            Value::Float(value) => fmt::Debug::fmt(value, f),
            Value::String(string) => fmt::Debug::fmt(string, f),
        }
    }
}
