use core::fmt;

use serde::de;
use thiserror::Error;

/// A error raised during deserialization.
///
/// See [`serde` module][crate::tree::serde] for documentation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// The document does not have the shape the type being deserialized
    /// expects, such as a missing field or a string where a number belongs.
    #[error("{message}")]
    Custom {
        /// The message produced by the type being deserialized.
        message: Box<str>,
    },
    /// A mapping value was requested before its key.
    #[error("value requested before its key")]
    MissingValue,
}

impl de::Error for Error {
    #[inline]
    fn custom<T>(msg: T) -> Self
    where
        T: fmt::Display,
    {
        Self::Custom {
            message: msg.to_string().into(),
        }
    }
}
