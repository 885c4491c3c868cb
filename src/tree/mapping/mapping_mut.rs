use crate::node::Node;
use crate::tree::data::{Data, Id};
use crate::tree::raw::{Raw, RawMappingItem};
use crate::tree::Mapping;

/// Mutator for a mapping.
///
/// Mutations write straight into the stored mapping, every view constructed
/// afterwards observes them.
///
/// Strings inserted into a document are interned and shared by every value
/// and key equal to them. Replacing or removing a value frees the value
/// itself but keeps its strings, so a long series of mutations with distinct
/// strings grows the document until [`Document::shrink_to_fit`] is called.
///
/// [`Document::shrink_to_fit`]: crate::tree::Document::shrink_to_fit
///
/// # Examples
///
/// ```
/// use metaview::tree::{Document, Value};
/// use metaview::NodeMap;
///
/// let mut doc = Document::new(NodeMap::new());
///
/// let mut root = doc.root_mut();
/// root.insert_str("name", "cells");
/// root.insert_i64("size_x", 512);
/// root.insert_f64("physical_size_x", 0.5);
///
/// let root = doc.root();
/// assert!(root.keys().eq(["name", "size_x", "physical_size_x"]));
/// assert_eq!(root.get("size_x")?, Value::Integer(512));
/// # Ok::<_, anyhow::Error>(())
/// ```
pub struct MappingMut<'a> {
    data: &'a mut Data,
    pub(crate) id: Id,
}

macro_rules! insert_scalar {
    ($name:ident, $ty:ty, $doc:literal, $variant:ident) => {
        #[doc = concat!("Insert ", $doc, " into the mapping.")]
        ///
        /// See [`MappingMut::insert`].
        pub fn $name(&mut self, key: &str, value: $ty) -> Id {
            self.insert(key, Node::$variant(value.into()))
        }
    };
}

impl<'a> MappingMut<'a> {
    pub(crate) fn new(data: &'a mut Data, id: Id) -> Self {
        Self { data, id }
    }

    /// Coerce a mutable mapping as an immutable [`Mapping`].
    #[must_use]
    #[inline]
    pub fn as_ref(&self) -> Mapping<'_> {
        Mapping::new(self.data, self.id)
    }

    /// Coerce a mutable mapping into an immutable [`Mapping`] with the
    /// lifetime of the current reference.
    #[must_use]
    #[inline]
    pub fn into_ref(self) -> Mapping<'a> {
        Mapping::new(self.data, self.id)
    }

    /// Insert a value into the mapping.
    ///
    /// If the key already exists its value is replaced and it keeps its
    /// position, otherwise the key is added at the end. Returns the
    /// identifier of the inserted value.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[cfg(feature = "xml")] {
    /// use metaview::tree::Value;
    /// use metaview::{Node, NodeMap};
    ///
    /// let mut doc = metaview::from_document(r#"<Image Name="a" ID="Image:0"/>"#)?;
    ///
    /// let mut pixels = NodeMap::new();
    /// pixels.insert("size_x", 10);
    ///
    /// let mut root = doc.root_mut();
    /// root.insert("name", "b");
    /// root.insert("pixels", pixels);
    ///
    /// let root = doc.root();
    /// assert!(root.keys().eq(["name", "id", "pixels"]));
    /// assert_eq!(root.get("name")?, Value::String("b"));
    /// assert_eq!(root.get("pixels")?.get("size_x")?, Value::Integer(10));
    /// # }
    /// # Ok::<_, anyhow::Error>(())
    /// ```
    pub fn insert<V>(&mut self, key: &str, value: V) -> Id
    where
        V: Into<Node>,
    {
        let raw = self.data.lower(value.into());
        let key = self.data.insert_str(key);

        if let Some(id) = self.data.mapping(self.id).find(key) {
            self.data.replace(id, raw);
            return id;
        }

        let value = self.data.insert(raw);
        self.data
            .mapping_mut(self.id)
            .items
            .push(RawMappingItem { key, value });
        value
    }

    insert_scalar!(insert_i64, i64, "an integer", Integer);
    insert_scalar!(insert_f64, f64, "a floating point number", Float);
    insert_scalar!(insert_str, &str, "a string", String);

    /// Insert every entry from `entries`, in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use metaview::tree::{Document, Value};
    /// use metaview::NodeMap;
    ///
    /// let mut doc = Document::new(NodeMap::new());
    /// doc.root_mut().update([("x", 1), ("y", 2), ("x", 3)]);
    ///
    /// let root = doc.root();
    /// assert!(root.keys().eq(["x", "y"]));
    /// assert_eq!(root.get("x")?, Value::Integer(3));
    /// # Ok::<_, anyhow::Error>(())
    /// ```
    pub fn update<I, K, V>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Node>,
    {
        for (key, value) in entries {
            self.insert(key.as_ref(), value);
        }
    }

    /// Get a nested mapping mutably by its key.
    ///
    /// Returns `None` if the key is missing or its value is not a mapping.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[cfg(feature = "xml")] {
    /// use metaview::tree::Value;
    ///
    /// let mut doc = metaview::from_document(r#"<Image><Pixels SizeX="1"/></Image>"#)?;
    ///
    /// let mut root = doc.root_mut();
    /// let mut pixels = root.get_mut("pixels").ok_or("missing pixels")?;
    /// pixels.insert_i64("size_x", 2);
    ///
    /// assert_eq!(doc.root().get("pixels")?.get("size_x")?, Value::Integer(2));
    /// # }
    /// # Ok::<_, Box<dyn std::error::Error>>(())
    /// ```
    pub fn get_mut(&mut self, key: &str) -> Option<MappingMut<'_>> {
        let id = self.find_mapping(key)?;
        Some(MappingMut::new(self.data, id))
    }

    /// Get a nested mapping mutably by its key, with the lifetime of the
    /// current reference.
    pub fn get_into_mut(self, key: &str) -> Option<MappingMut<'a>> {
        let id = self.find_mapping(key)?;
        Some(MappingMut::new(self.data, id))
    }

    /// Remove a key from the mapping, returning `true` if it was present.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[cfg(feature = "xml")] {
    /// let mut doc = metaview::from_document(r#"<Size X="1" Y="2" Z="3"/>"#)?;
    ///
    /// assert!(doc.root_mut().remove("y"));
    /// assert!(!doc.root_mut().remove("y"));
    /// assert!(doc.root().keys().eq(["x", "z"]));
    /// # }
    /// # Ok::<_, anyhow::Error>(())
    /// ```
    pub fn remove(&mut self, key: &str) -> bool {
        let key = Data::string_id(key);
        let items = &mut self.data.mapping_mut(self.id).items;

        let Some(index) = items.iter().position(|item| item.key == key) else {
            return false;
        };

        let item = items.remove(index);
        self.data.drop(item.value);
        true
    }

    /// Remove every entry of the mapping.
    pub fn clear(&mut self) {
        let items = std::mem::take(&mut self.data.mapping_mut(self.id).items);

        for item in items {
            self.data.drop(item.value);
        }
    }

    fn find_mapping(&self, key: &str) -> Option<Id> {
        let id = self.data.mapping(self.id).find(Data::string_id(key))?;

        match self.data.raw(id) {
            Raw::Mapping(..) => Some(id),
            _ => None,
        }
    }
}
