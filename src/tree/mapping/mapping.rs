use core::fmt;

use crate::node::NodeMap;
use crate::tree::data::{Data, Id};
use crate::tree::mapping::{Iter, Keys};
use crate::tree::{Error, Value};
use crate::units::{self, Convert, Quantity};

/// Accessor for a mapping.
///
/// A mapping can be navigated in two ways which always agree on the value
/// they produce: with key lookups through [`Mapping::get`], and with
/// attribute lookups through [`Mapping::attr`]. They only differ in the
/// error raised when the key is missing.
///
/// # Examples
///
/// ```
/// # #[cfg(feature = "xml")] {
/// use metaview::tree::{Error, Value};
///
/// let doc = metaview::from_document(r#"
/// <Image Name="cells">
///     <Size X="100" Y="200"/>
/// </Image>
/// "#)?;
///
/// let root = doc.root();
///
/// let by_key = root.get("size")?.get("y")?;
/// let by_attr = root.attr("size")?.attr("y")?;
/// assert_eq!(by_key, by_attr);
/// assert_eq!(by_key, Value::Integer(200));
///
/// assert!(matches!(root.get("missing"), Err(Error::KeyNotFound { .. })));
/// assert!(matches!(root.attr("missing"), Err(Error::AttributeNotFound { .. })));
/// # }
/// # Ok::<_, anyhow::Error>(())
/// ```
#[derive(Clone, Copy)]
pub struct Mapping<'a> {
    data: &'a Data,
    pub(crate) id: Id,
}

impl<'a> Mapping<'a> {
    pub(crate) fn new(data: &'a Data, id: Id) -> Self {
        Self { data, id }
    }

    /// Get the opaque [`Id`] associated with this mapping.
    ///
    /// Two views of the same stored mapping share an identifier, even though
    /// each access constructs a fresh view.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[cfg(feature = "xml")] {
    /// let doc = metaview::from_document(r#"<Image><Pixels SizeX="1"/></Image>"#)?;
    ///
    /// let a = doc.root().attr("pixels")?;
    /// let b = doc.root().get("pixels")?;
    ///
    /// let a = a.as_mapping().ok_or("not a mapping")?;
    /// let b = b.as_mapping().ok_or("not a mapping")?;
    /// assert_eq!(a.id(), b.id());
    /// assert_eq!(a, b);
    /// # }
    /// # Ok::<_, Box<dyn std::error::Error>>(())
    /// ```
    #[must_use]
    #[inline]
    pub fn id(&self) -> Id {
        self.id
    }

    /// Get the length of the mapping.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.data.mapping(self.id).items.len()
    }

    /// Test if the mapping is empty.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.mapping(self.id).items.is_empty()
    }

    /// Find a value in the mapping by its key, returning `None` if it is
    /// missing.
    ///
    /// Both [`Mapping::get`] and [`Mapping::attr`] are implemented in terms
    /// of this.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[cfg(feature = "xml")] {
    /// let doc = metaview::from_document(r#"<Image Name="cells"/>"#)?;
    /// let root = doc.root();
    ///
    /// assert_eq!(root.find("name").and_then(|v| v.as_str()), Some("cells"));
    /// assert!(root.find("missing").is_none());
    /// # }
    /// # Ok::<_, anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn find(&self, key: &str) -> Option<Value<'a>> {
        let key = Data::string_id(key);
        let id = self.data.mapping(self.id).find(key)?;
        Some(Value::new(self.data, id))
    }

    /// Test if the mapping contains the given key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        let key = Data::string_id(key);
        self.data.mapping(self.id).find(key).is_some()
    }

    /// Get a value from the mapping by its key.
    ///
    /// # Errors
    ///
    /// Errors with [`Error::KeyNotFound`] if the key is missing.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[cfg(feature = "xml")] {
    /// use metaview::tree::Error;
    ///
    /// let doc = metaview::from_document(r#"<Image Name="cells"/>"#)?;
    /// let root = doc.root();
    ///
    /// assert_eq!(root.get("name")?.as_str(), Some("cells"));
    ///
    /// let error = root.get("missing").unwrap_err();
    /// assert_eq!(error, Error::KeyNotFound { key: String::from("missing") });
    /// # }
    /// # Ok::<_, anyhow::Error>(())
    /// ```
    pub fn get(&self, key: &str) -> Result<Value<'a>, Error> {
        self.find(key).ok_or_else(|| Error::key_not_found(key))
    }

    /// Get a value from the mapping through attribute-style access.
    ///
    /// This produces exactly the same values as [`Mapping::get`].
    ///
    /// # Errors
    ///
    /// Errors with [`Error::AttributeNotFound`] if the key is missing.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[cfg(feature = "xml")] {
    /// use metaview::tree::Error;
    ///
    /// let doc = metaview::from_document(r#"<Image Name="cells"/>"#)?;
    /// let root = doc.root();
    ///
    /// assert_eq!(root.attr("name")?.as_str(), Some("cells"));
    ///
    /// let error = root.attr("missing").unwrap_err();
    /// assert_eq!(error, Error::AttributeNotFound { key: String::from("missing") });
    /// # }
    /// # Ok::<_, anyhow::Error>(())
    /// ```
    pub fn attr(&self, key: &str) -> Result<Value<'a>, Error> {
        self.find(key).ok_or_else(|| Error::attribute_not_found(key))
    }

    /// Read the number stored at `key` together with its unit.
    ///
    /// The unit is looked up next to the value, under `{key}_unit` or under
    /// `{key}Unit` for documents parsed with verbatim keys.
    ///
    /// # Errors
    ///
    /// Errors if the key is missing, the value is not a number, the unit is
    /// missing or the unit is not a unit of kind `U`.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[cfg(feature = "xml")] {
    /// use metaview::units::{Length, Quantity};
    ///
    /// let doc = metaview::from_document(r#"<Pixels PhysicalSizeX="0.5" PhysicalSizeXUnit="mm"/>"#)?;
    ///
    /// let size = doc.root().quantity::<Length>("physical_size_x")?;
    /// assert_eq!(size, Quantity::new(0.5, Length::Millimeter));
    /// # }
    /// # Ok::<_, anyhow::Error>(())
    /// ```
    pub fn quantity<U>(&self, key: &str) -> Result<Quantity<U>, units::Error>
    where
        U: Convert,
    {
        self.quantity_with(key, None)
    }

    /// Read the number stored at `key` together with its unit, falling back
    /// to `default` if no unit is stored next to it.
    ///
    /// # Errors
    ///
    /// Errors if the key is missing, the value is not a number or the stored
    /// unit is not a unit of kind `U`.
    pub fn quantity_or<U>(&self, key: &str, default: U) -> Result<Quantity<U>, units::Error>
    where
        U: Convert,
    {
        self.quantity_with(key, Some(default))
    }

    fn quantity_with<U>(&self, key: &str, default: Option<U>) -> Result<Quantity<U>, units::Error>
    where
        U: Convert,
    {
        let value = self.get(key)?;

        let Some(number) = value.as_f64() else {
            return Err(units::Error::NotANumber {
                key: key.to_owned(),
                found: value.kind(),
            });
        };

        let stored = self
            .find(&format!("{key}_unit"))
            .or_else(|| self.find(&format!("{key}Unit")));

        let unit = match (stored, default) {
            (Some(Value::String(unit)), _) => unit.parse()?,
            (Some(unit), _) => {
                return Err(units::Error::UnknownUnit {
                    unit: unit.to_string(),
                })
            }
            (None, Some(default)) => default,
            (None, None) => {
                return Err(units::Error::MissingUnit {
                    key: key.to_owned(),
                })
            }
        };

        Ok(Quantity::new(number, unit))
    }

    /// Iterate over the keys of the mapping in the order they were parsed.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[cfg(feature = "xml")] {
    /// let doc = metaview::from_document(r#"<Image Name="cells" ID="Image:0"><Pixels/></Image>"#)?;
    /// assert!(doc.root().keys().eq(["name", "id", "pixels"]));
    ///
    /// let empty = doc.root().attr("pixels")?;
    /// let empty = empty.as_mapping().ok_or("not a mapping")?;
    /// assert_eq!(empty.keys().count(), 0);
    /// # }
    /// # Ok::<_, Box<dyn std::error::Error>>(())
    /// ```
    #[must_use]
    #[inline]
    pub fn keys(&self) -> Keys<'a> {
        Keys::new(self.data, &self.data.mapping(self.id).items)
    }

    /// Returns an iterator over the entries of the [`Mapping`].
    ///
    /// # Examples
    ///
    /// ```
    /// # #[cfg(feature = "xml")] {
    /// let doc = metaview::from_document(r#"<Size X="1" Y="2" Z="3"/>"#)?;
    /// let root = doc.root();
    ///
    /// assert!(root.iter().map(|(key, _)| key).eq(["x", "y", "z"]));
    /// assert!(root.iter().flat_map(|(_, value)| value.as_i64()).eq([1, 2, 3]));
    /// # }
    /// # Ok::<_, anyhow::Error>(())
    /// ```
    #[must_use]
    #[inline]
    pub fn iter(&self) -> Iter<'a> {
        Iter::new(self.data, &self.data.mapping(self.id).items)
    }

    /// Copy the mapping and everything below it into an owned [`NodeMap`].
    #[must_use]
    pub fn to_node(&self) -> NodeMap {
        self.iter()
            .map(|(key, value)| (key, value.to_node()))
            .collect()
    }
}

/// Mappings are equal if they hold the same keys with equal values,
/// regardless of the order of the keys.
impl PartialEq for Mapping<'_> {
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }

        self.iter()
            .all(|(key, value)| other.find(key).map_or(false, |o| o == value))
    }
}

impl fmt::Display for Mapping<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;

        let mut it = self.iter().peekable();

        while let Some((key, value)) = it.next() {
            write!(f, "{key}: {value}")?;

            if it.peek().is_some() {
                f.write_str(", ")?;
            }
        }

        f.write_str("}")
    }
}

impl fmt::Debug for Mapping<'_> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<'a> IntoIterator for Mapping<'a> {
    type Item = (&'a str, Value<'a>);
    type IntoIter = Iter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &Mapping<'a> {
    type Item = (&'a str, Value<'a>);
    type IntoIter = Iter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
