use core::str::Utf8Error;

use quick_xml::events::attributes::AttrError;
use thiserror::Error;

/// An error raised while parsing an XML document.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The document is not well-formed XML.
    #[error("malformed xml: {0}")]
    Xml(#[from] quick_xml::Error),
    /// An attribute could not be read.
    #[error("malformed attribute: {0}")]
    Attribute(#[from] AttrError),
    /// A name or character data section is not valid UTF-8.
    #[error("invalid utf-8: {0}")]
    Utf8(#[from] Utf8Error),
    /// The document does not contain any element.
    #[error("document has no root element")]
    NoRoot,
    /// Another element follows the root element.
    #[error("unexpected element `{name}` after the root element")]
    MultipleRoots {
        /// Name of the offending element.
        name: String,
    },
    /// The document ended while an element was still open.
    #[error("element `{name}` is never closed")]
    Unclosed {
        /// Name of the element which was left open.
        name: String,
    },
    /// A closing tag appeared without a matching opening tag.
    #[error("unexpected closing tag")]
    UnexpectedEnd,
}
