//! Serde support for navigated documents.
//!
//! By enabling the `serde` feature [`Value`] implements [`Deserializer`] and
//! [`IntoDeserializer`], allowing any part of a document to be deserialized
//! into your own types. Strings are borrowed from the document where
//! possible.
//!
//! Some conveniences make metadata documents easier to consume:
//! * Numbers can be deserialized into strings, so identifiers which happen
//!   to look like numbers still fit a `String` field.
//! * A value which is not a sequence is accepted where a sequence is
//!   expected, as a sequence of one element. Repeated elements in XML only
//!   become sequences once they occur more than once.
//! * A string can be deserialized into a unit enum variant.
//!
//! [`Deserializer`]: serde::Deserializer
//! [`IntoDeserializer`]: serde::de::IntoDeserializer
//! [`Value`]: crate::tree::Value
//!
//! ```
//! # #[cfg(feature = "xml")] {
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Channel<'a> {
//!     name: &'a str,
//!     samples_per_pixel: Option<u32>,
//! }
//!
//! #[derive(Deserialize)]
//! struct Pixels<'a> {
//!     id: String,
//!     size_x: u32,
//!     size_y: u32,
//!     physical_size_x: f64,
//!     #[serde(borrow)]
//!     channel: Vec<Channel<'a>>,
//! }
//!
//! let doc = metaview::from_document(r#"
//! <Pixels ID="Pixels:0" SizeX="512" SizeY="256" PhysicalSizeX="1">
//!     <Channel Name="DAPI" SamplesPerPixel="1"/>
//! </Pixels>
//! "#)?;
//!
//! let pixels: Pixels<'_> = metaview::tree::from_value(doc.root().into())?;
//!
//! assert_eq!(pixels.id, "Pixels:0");
//! assert_eq!((pixels.size_x, pixels.size_y), (512, 256));
//! assert_eq!(pixels.physical_size_x, 1.0);
//! assert_eq!(pixels.channel.len(), 1);
//! assert_eq!(pixels.channel[0].name, "DAPI");
//! assert_eq!(pixels.channel[0].samples_per_pixel, Some(1));
//! # }
//! # Ok::<_, Box<dyn std::error::Error>>(())
//! ```

mod de;

mod error;
pub use self::error::Error;

use serde::Deserialize;

use crate::tree::Value;

/// Deserialize a value into `T`.
///
/// # Errors
///
/// Errors in case the value does not have the shape `T` expects.
///
/// # Examples
///
/// ```
/// # #[cfg(feature = "xml")] {
/// use std::collections::BTreeMap;
///
/// let doc = metaview::from_document(r#"<Size X="1" Y="2" Z="3"/>"#)?;
///
/// let size: BTreeMap<String, u8> = metaview::tree::from_value(doc.root().into())?;
/// assert_eq!(size.get("y"), Some(&2));
/// # }
/// # Ok::<_, Box<dyn std::error::Error>>(())
/// ```
pub fn from_value<'de, T>(value: Value<'de>) -> Result<T, Error>
where
    T: Deserialize<'de>,
{
    T::deserialize(value)
}
