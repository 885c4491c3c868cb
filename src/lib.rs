//! Lazy key and attribute style navigation over parsed metadata documents.
//!
//! A document is parsed once into a [`Document`][tree::Document], from which
//! it can be walked with either of two interchangeable styles:
//!
//! * key lookups through [`Mapping::get`][tree::Mapping::get], failing with
//!   [`Error::KeyNotFound`][tree::Error::KeyNotFound],
//! * attribute lookups through [`Mapping::attr`][tree::Mapping::attr], failing
//!   with [`Error::AttributeNotFound`][tree::Error::AttributeNotFound].
//!
//! Every nested mapping or sequence is handed out as a fresh view over the
//! stored tree when it is accessed, so nothing is converted up front.
//!
//! The actual parsing is done by an engine implementing [`Parse`]. The
//! default one, [`xml::Parser`], reads XML metadata such as OME-XML.
//!
//! <br>
//!
//! ## Navigating a document
//!
//! ```
//! # #[cfg(feature = "xml")] {
//! use metaview::tree::Value;
//!
//! let doc = metaview::from_document(r#"
//! <OME>
//!     <Image ID="Image:0">
//!         <Pixels SizeX="100" SizeY="200" PhysicalSizeX="0.1">
//!             <Channel ID="Channel:0:0" Name="DAPI"/>
//!             <Channel ID="Channel:0:1" Name="GFP"/>
//!             <Channel ID="Channel:0:2" Name="mCherry"/>
//!         </Pixels>
//!     </Image>
//! </OME>
//! "#)?;
//!
//! let pixels = doc.root().attr("image")?.attr("pixels")?;
//!
//! assert_eq!(pixels.attr("size_y")?, Value::Integer(200));
//! assert_eq!(pixels.attr("physical_size_x")?.as_f64(), Some(0.1));
//! assert_eq!(pixels.attr("channel")?.at(2)?.attr("name")?.as_str(), Some("mCherry"));
//!
//! // Key lookups always agree with attribute lookups.
//! assert_eq!(pixels.get("channel")?.at(2)?.get("name")?, pixels.attr("channel")?.at(2)?.attr("name")?);
//! # }
//! # Ok::<_, anyhow::Error>(())
//! ```
//!
//! <br>
//!
//! ## Building from already parsed data
//!
//! ```
//! use metaview::tree::{Document, Value};
//! use metaview::{Node, NodeMap};
//!
//! let mut image = NodeMap::new();
//! image.insert("size", Node::from(vec![100, 200]));
//!
//! let mut root = NodeMap::new();
//! root.insert("image", image);
//!
//! let doc = Document::new(root);
//! assert_eq!(doc.root().get("image")?.get("size")?.at(1)?, Value::Integer(200));
//! # Ok::<_, anyhow::Error>(())
//! ```
//!
//! <br>
//!
//! ## Features
//!
//! * `xml` (default) - the [`xml`] parsing engine and [`from_document`].
//! * `serde` - deserialize any [`Value`][tree::Value] into your own types,
//!   see [`tree::serde`]. Units from [`units`] can be deserialized as well.

#![deny(missing_docs)]
#![allow(clippy::module_inception)]
#![allow(clippy::module_name_repetitions)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod node;
pub use self::node::{Node, NodeMap};

mod parse;
pub use self::parse::Parse;

pub mod tree;

pub mod units;

#[cfg(feature = "xml")]
#[cfg_attr(docsrs, doc(cfg(feature = "xml")))]
pub mod xml;

/// Parse an XML document and return it ready for navigation.
///
/// This is the same as [`Document::from_xml`][tree::Document::from_xml],
/// using the default [`xml::Options`].
///
/// # Errors
///
/// Errors in case the document cannot be parsed as XML.
///
/// # Examples
///
/// ```
/// # #[cfg(feature = "xml")] {
/// let doc = metaview::from_document(r#"<Image Name="cells"/>"#)?;
/// assert_eq!(doc.root().attr("name")?.as_str(), Some("cells"));
/// # }
/// # Ok::<_, anyhow::Error>(())
/// ```
#[cfg(feature = "xml")]
#[cfg_attr(docsrs, doc(cfg(feature = "xml")))]
pub fn from_document(text: &str) -> Result<tree::Document, xml::Error> {
    tree::Document::from_xml(text)
}
