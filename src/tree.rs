//! Lazy views over a parsed document.
//!
//! A [`Document`] owns the parsed tree. Everything else in this module is a
//! borrowed, `Copy` view into it: a [`Mapping`] for mappings, a [`Sequence`]
//! for sequences, and a [`Value`] for whatever a lookup produces.
//!
//! Lookups never convert more than one level. Asking a mapping for a key
//! whose value is itself a mapping produces a new [`Mapping`] view over the
//! stored value, and so on down the tree. Nothing is cached, so looking up
//! the same path twice constructs two views, which compare equal.
//!
//! Mappings can be navigated either with [`Mapping::get`] or with
//! [`Mapping::attr`]. Both produce the same values, they only differ in the
//! [`Error`] raised when a key is missing.
//!
//! # Examples
//!
//! ```
//! # #[cfg(feature = "xml")] {
//! use metaview::tree::{Error, Value};
//!
//! let doc = metaview::from_document(r#"
//! <OME>
//!     <Image ID="Image:0" Name="cells">
//!         <Pixels SizeX="512" SizeY="512" SizeC="3">
//!             <Channel Name="DAPI"/>
//!             <Channel Name="GFP"/>
//!             <Channel Name="mCherry"/>
//!         </Pixels>
//!     </Image>
//! </OME>
//! "#)?;
//!
//! let root = doc.root();
//!
//! let by_key = root.get("image")?.get("pixels")?.get("channel")?.at(2)?.get("name")?;
//! let by_attr = root.attr("image")?.attr("pixels")?.attr("channel")?.at(2)?.attr("name")?;
//!
//! assert_eq!(by_key, Value::String("mCherry"));
//! assert_eq!(by_key, by_attr);
//!
//! assert!(matches!(root.attr("images"), Err(Error::AttributeNotFound { .. })));
//! # }
//! # Ok::<_, anyhow::Error>(())
//! ```

#[cfg(test)]
mod tests;

mod data;
pub use self::data::Id;

mod error;
pub use self::error::Error;

mod document;
pub use self::document::Document;

mod raw;

mod value;
pub use self::value::Value;

pub mod sequence;
#[doc(inline)]
pub use self::sequence::Sequence;

pub mod mapping;
#[doc(inline)]
pub use self::mapping::{Mapping, MappingMut};

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
pub mod serde;

#[cfg(feature = "serde")]
#[doc(inline)]
pub use self::serde::from_value;
