//! A [`Mapping`] of values.
//!
//! # Examples
//!
//! ```
//! # #[cfg(feature = "xml")] {
//! use metaview::tree::Value;
//!
//! let doc = metaview::from_document(r#"
//! <Image ID="Image:0" Name="cells">
//!     <AcquisitionDate>2023-05-04T14:46:19</AcquisitionDate>
//!     <Pixels SizeX="512" SizeY="256" PhysicalSizeX="0.0645"/>
//! </Image>
//! "#)?;
//!
//! let root = doc.root();
//! assert!(root.keys().eq(["id", "name", "acquisition_date", "pixels"]));
//!
//! let pixels = root.attr("pixels")?;
//! assert_eq!(pixels.attr("size_x")?, Value::Integer(512));
//! assert_eq!(pixels.attr("physical_size_x")?, Value::Float(0.0645));
//! # }
//! # Ok::<_, anyhow::Error>(())
//! ```

mod iter;
pub use self::iter::{Iter, Keys};

mod mapping;
pub use self::mapping::Mapping;

mod mapping_mut;
pub use self::mapping_mut::MappingMut;
