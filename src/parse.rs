use crate::node::NodeMap;

/// A parsing engine which turns document text into a tree of [`Node`]s.
///
/// This is the only thing a [`Document`] needs from a source format. Errors
/// are the engine's own and are handed back to the caller untouched.
///
/// [`Node`]: crate::Node
/// [`Document`]: crate::tree::Document
///
/// # Examples
///
/// ```
/// use metaview::tree::{Document, Value};
/// use metaview::{NodeMap, Parse};
///
/// /// Parses `key=value` lines.
/// struct Lines;
///
/// impl Parse for Lines {
///     type Error = String;
///
///     fn parse(&self, text: &str) -> Result<NodeMap, Self::Error> {
///         let mut map = NodeMap::new();
///
///         for line in text.lines().filter(|l| !l.trim().is_empty()) {
///             let (key, value) = line.split_once('=').ok_or_else(|| format!("bad line: {line}"))?;
///             map.insert(key.trim(), value.trim());
///         }
///
///         Ok(map)
///     }
/// }
///
/// let doc = Document::parse_with(&Lines, "name = cells\nkind = image")?;
/// assert_eq!(doc.root().attr("kind")?, Value::String("image"));
///
/// assert_eq!(Document::parse_with(&Lines, "oops").unwrap_err(), "bad line: oops");
/// # Ok::<_, Box<dyn std::error::Error>>(())
/// ```
pub trait Parse {
    /// The error raised when the text cannot be parsed.
    type Error;

    /// Parse `text` into its root mapping.
    ///
    /// # Errors
    ///
    /// Errors in case the text is not a valid document for this engine.
    fn parse(&self, text: &str) -> Result<NodeMap, Self::Error>;
}

impl<P> Parse for &P
where
    P: ?Sized + Parse,
{
    type Error = P::Error;

    #[inline]
    fn parse(&self, text: &str) -> Result<NodeMap, Self::Error> {
        (**self).parse(text)
    }
}
