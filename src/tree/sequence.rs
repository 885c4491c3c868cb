//! A [`Sequence`] of values.
//!
//! # Examples
//!
//! ```
//! # #[cfg(feature = "xml")] {
//! use metaview::tree::Value;
//!
//! let doc = metaview::from_document(r#"
//! <Pixels>
//!     <Plane TheZ="0" PositionZ="1.5"/>
//!     <Plane TheZ="1" PositionZ="2.5"/>
//! </Pixels>
//! "#)?;
//!
//! let planes = doc.root().attr("plane")?;
//! let planes = planes.as_sequence().ok_or("not a sequence")?;
//!
//! assert_eq!(planes.len(), 2);
//! assert_eq!(planes.at(1)?.attr("position_z")?, Value::Float(2.5));
//!
//! let the_z = planes.iter().map(|p| p.get("the_z").ok().and_then(|v| v.as_i64()));
//! assert!(the_z.eq([Some(0), Some(1)]));
//! # }
//! # Ok::<_, Box<dyn std::error::Error>>(())
//! ```

mod iter;
pub use self::iter::Iter;

mod sequence;
pub use self::sequence::Sequence;
