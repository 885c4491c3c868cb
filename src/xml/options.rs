/// How element and attribute names are turned into keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum KeyStyle {
    /// Convert names to `snake_case`, so `PhysicalSizeX` becomes
    /// `physical_size_x` and `ID` becomes `id`.
    #[default]
    SnakeCase,
    /// Use names as they appear in the document, minus any namespace prefix.
    Verbatim,
}

/// Options for the XML [`Parser`][crate::xml::Parser].
///
/// # Examples
///
/// ```
/// use metaview::tree::{Document, Value};
/// use metaview::xml::{Options, Parser};
///
/// let parser = Parser::with_options(Options::new().infer_scalars(false).sequence("channel"));
///
/// let doc = Document::parse_with(&parser, r#"<Pixels SizeX="512"><Channel Name="DAPI"/></Pixels>"#)?;
/// let root = doc.root();
///
/// assert_eq!(root.attr("size_x")?, Value::String("512"));
/// assert_eq!(root.attr("channel")?.at(0)?.attr("name")?, Value::String("DAPI"));
/// # Ok::<_, anyhow::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    pub(crate) key_style: KeyStyle,
    pub(crate) text_key: String,
    pub(crate) infer_scalars: bool,
    pub(crate) unwrap_root: bool,
    pub(crate) sequences: Vec<String>,
}

impl Options {
    /// Construct the default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how names are turned into keys. Defaults to
    /// [`KeyStyle::SnakeCase`].
    #[must_use]
    pub fn key_style(mut self, key_style: KeyStyle) -> Self {
        self.key_style = key_style;
        self
    }

    /// Set the key under which the text of an element with attributes or
    /// children is stored. Defaults to `"value"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use metaview::tree::{Document, Value};
    /// use metaview::xml::{Options, Parser};
    ///
    /// let text = r#"<Annotation ID="Annotation:0">a note</Annotation>"#;
    ///
    /// let doc = Document::parse_with(&Parser::new(), text)?;
    /// assert_eq!(doc.root().attr("value")?, Value::String("a note"));
    ///
    /// let doc = Document::parse_with(&Parser::with_options(Options::new().text_key("text")), text)?;
    /// assert_eq!(doc.root().attr("text")?, Value::String("a note"));
    /// # Ok::<_, anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn text_key<K>(mut self, text_key: K) -> Self
    where
        K: Into<String>,
    {
        self.text_key = text_key.into();
        self
    }

    /// Set whether numbers are recognized in attribute values and text.
    /// Defaults to `true`. When disabled every scalar is a string.
    #[must_use]
    pub fn infer_scalars(mut self, infer_scalars: bool) -> Self {
        self.infer_scalars = infer_scalars;
        self
    }

    /// Set whether the root element's own mapping becomes the root of the
    /// document. Defaults to `true`.
    ///
    /// When disabled, or when the root element is a plain scalar, the root of
    /// the document is a mapping with the root element as its only key.
    ///
    /// # Examples
    ///
    /// ```
    /// use metaview::tree::{Document, Value};
    /// use metaview::xml::{Options, Parser};
    ///
    /// let parser = Parser::with_options(Options::new().unwrap_root(false));
    /// let doc = Document::parse_with(&parser, r#"<OME><Image Name="cells"/></OME>"#)?;
    ///
    /// assert!(doc.root().keys().eq(["ome"]));
    /// assert_eq!(doc.root().attr("ome")?.attr("image")?.attr("name")?, Value::String("cells"));
    /// # Ok::<_, anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn unwrap_root(mut self, unwrap_root: bool) -> Self {
        self.unwrap_root = unwrap_root;
        self
    }

    /// Always store the given key as a sequence, even when the element or
    /// attribute only appears once.
    ///
    /// The key is matched after the [`KeyStyle`] has been applied.
    #[must_use]
    pub fn sequence<K>(mut self, key: K) -> Self
    where
        K: Into<String>,
    {
        self.sequences.push(key.into());
        self
    }

    pub(crate) fn is_sequence(&self, key: &str) -> bool {
        self.sequences.iter().any(|k| k == key)
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            key_style: KeyStyle::SnakeCase,
            text_key: String::from("value"),
            infer_scalars: true,
            unwrap_root: true,
            sequences: Vec::new(),
        }
    }
}
