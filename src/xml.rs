//! The default parsing engine, for XML metadata such as OME-XML.
//!
//! Elements are turned into mappings. Attributes and child elements become
//! keys of the element's mapping in document order, and a child element which
//! is repeated becomes a sequence. An element holding nothing but text becomes
//! a scalar, with integers and floating point numbers recognized
//! automatically. Only text which is written the way the number would be
//! printed is recognized, so `007` or `1e3` stay strings.
//!
//! Text next to attributes or child elements is stored under
//! [`Options::text_key`]. It is trimmed at both ends but whitespace inside it is
//! kept as written. If the text key is also used by an attribute, both values
//! are kept in a sequence.
//!
//! Names are converted to `snake_case` by default, so `PhysicalSizeX` is
//! looked up as `physical_size_x`. See [`Options`] for how to tune this.
//!
//! # Examples
//!
//! ```
//! use metaview::tree::{Document, Value};
//! use metaview::xml::{KeyStyle, Options, Parser};
//!
//! let text = r#"<Pixels SizeX="512"><Channel Name="DAPI"/></Pixels>"#;
//!
//! let doc = Document::parse_with(&Parser::new(), text)?;
//! assert_eq!(doc.root().attr("size_x")?, Value::Integer(512));
//!
//! let parser = Parser::with_options(Options::new().key_style(KeyStyle::Verbatim).sequence("Channel"));
//! let doc = Document::parse_with(&parser, text)?;
//! assert_eq!(doc.root().attr("SizeX")?, Value::Integer(512));
//! assert_eq!(doc.root().attr("Channel")?.at(0)?.attr("Name")?, Value::String("DAPI"));
//! # Ok::<_, anyhow::Error>(())
//! ```

#[cfg(test)]
mod tests;

mod error;
pub use self::error::Error;

mod names;

mod options;
pub use self::options::{KeyStyle, Options};

mod parser;
pub use self::parser::Parser;
