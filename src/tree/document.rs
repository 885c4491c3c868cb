use core::fmt;

use crate::node::NodeMap;
use crate::parse::Parse;
use crate::tree::data::{Data, Id};
use crate::tree::{Mapping, MappingMut, Value};

/// A parsed document, owning every value reachable from its root mapping.
///
/// Navigation happens through the views returned by [`Document::root`].
#[derive(Clone)]
pub struct Document {
    root: Id,
    data: Data,
}

impl Document {
    /// Construct a document from an already parsed root mapping.
    ///
    /// # Examples
    ///
    /// ```
    /// use metaview::tree::{Document, Value};
    /// use metaview::{Node, NodeMap};
    ///
    /// let mut image = NodeMap::new();
    /// image.insert("size", Node::from(vec![100, 200]));
    ///
    /// let mut root = NodeMap::new();
    /// root.insert("image", image);
    ///
    /// let doc = Document::new(root);
    /// assert_eq!(doc.root().get("image")?.get("size")?.at(1)?, Value::Integer(200));
    /// assert_eq!(doc.root().attr("image")?.attr("size")?.at(1)?, Value::Integer(200));
    /// # Ok::<_, anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn new(root: NodeMap) -> Self {
        let keys = root.len();
        let mut data = Data::default();
        let root = data.insert_mapping(root);
        tracing::debug!(keys, values = data.len(), "built document");
        Self { root, data }
    }

    /// Parse `text` with the given engine and wrap its output.
    ///
    /// Every call parses from scratch, nothing is cached between calls.
    ///
    /// # Errors
    ///
    /// Returns the engine's error unchanged if parsing fails.
    pub fn parse_with<P>(parser: &P, text: &str) -> Result<Self, P::Error>
    where
        P: ?Sized + Parse,
    {
        tracing::trace!(len = text.len(), "parsing document");
        let root = parser.parse(text)?;
        Ok(Self::new(root))
    }

    /// Parse an XML document with the default [`xml::Parser`].
    ///
    /// [`xml::Parser`]: crate::xml::Parser
    ///
    /// # Errors
    ///
    /// Errors in case the document is not well-formed XML.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[cfg(feature = "xml")] {
    /// use metaview::tree::Document;
    ///
    /// let doc = Document::from_xml(r#"<Image Name="cells"/>"#)?;
    /// assert_eq!(doc.root().attr("name")?.as_str(), Some("cells"));
    ///
    /// assert!(Document::from_xml("<Image>").is_err());
    /// # }
    /// # Ok::<_, anyhow::Error>(())
    /// ```
    #[cfg(feature = "xml")]
    #[cfg_attr(docsrs, doc(cfg(feature = "xml")))]
    pub fn from_xml(text: &str) -> Result<Self, crate::xml::Error> {
        Self::parse_with(&crate::xml::Parser::new(), text)
    }

    /// Get the root mapping of the document.
    #[must_use]
    #[inline]
    pub fn root(&self) -> Mapping<'_> {
        Mapping::new(&self.data, self.root)
    }

    /// Get the root mapping of the document for modification.
    #[inline]
    pub fn root_mut(&mut self) -> MappingMut<'_> {
        MappingMut::new(&mut self.data, self.root)
    }

    /// Look up a value by its identifier.
    ///
    /// Returns `None` if nothing is stored under the identifier. Identifiers
    /// are only meaningful for the document they were obtained from, and the
    /// identifier of a removed value may be reused by a later insertion.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[cfg(feature = "xml")] {
    /// let mut doc = metaview::from_document(r#"<Image><Pixels SizeX="1"/></Image>"#)?;
    ///
    /// let pixels = doc.root().attr("pixels")?;
    /// let id = pixels.as_mapping().ok_or("not a mapping")?.id();
    /// assert_eq!(doc.value(id), Some(pixels));
    ///
    /// doc.root_mut().remove("pixels");
    /// assert!(doc.value(id).is_none());
    /// # }
    /// # Ok::<_, Box<dyn std::error::Error>>(())
    /// ```
    #[must_use]
    pub fn value(&self, id: Id) -> Option<Value<'_>> {
        if !self.data.contains(id) {
            return None;
        }

        Some(Value::new(&self.data, id))
    }

    /// Release memory held for values which have been replaced or removed.
    ///
    /// Strings stored in a document are shared between all values and keys
    /// equal to them, so replacing or removing a value leaves its strings in
    /// place. A document which sees many mutations with distinct strings
    /// keeps growing until this is called. Identifiers of values which are
    /// still stored stay valid.
    ///
    /// # Examples
    ///
    /// ```
    /// use metaview::tree::{Document, Value};
    /// use metaview::NodeMap;
    ///
    /// let mut doc = Document::new(NodeMap::new());
    ///
    /// for n in 0..100 {
    ///     doc.root_mut().insert_str("name", &format!("image {n}"));
    /// }
    ///
    /// doc.shrink_to_fit();
    /// assert_eq!(doc.root().get("name")?, Value::String("image 99"));
    /// # Ok::<_, anyhow::Error>(())
    /// ```
    pub fn shrink_to_fit(&mut self) {
        let released = self.data.shrink_to_fit();
        tracing::trace!(released, values = self.data.len(), "shrunk document");
    }

    #[cfg(test)]
    pub(crate) fn strings_len(&self) -> usize {
        self.data.strings_len()
    }

    /// Copy the whole document into an owned [`NodeMap`].
    #[must_use]
    pub fn to_node(&self) -> NodeMap {
        self.root().to_node()
    }
}

impl From<NodeMap> for Document {
    #[inline]
    fn from(root: NodeMap) -> Self {
        Self::new(root)
    }
}

#[cfg(feature = "xml")]
impl core::str::FromStr for Document {
    type Err = crate::xml::Error;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_xml(s)
    }
}

impl PartialEq for Document {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.root() == other.root()
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("root", &self.root())
            .finish_non_exhaustive()
    }
}
