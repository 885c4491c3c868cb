use thiserror::Error;

/// An error raised while reading or converting a physical unit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// A unit symbol which is not known for the requested kind of unit.
    #[error("unknown unit `{unit}`")]
    UnknownUnit {
        /// The symbol which could not be recognized.
        unit: String,
    },
    /// The unit has no fixed size, like a pixel.
    #[error("size of {unit} is unknown")]
    NoScale {
        /// The symbol of the unit.
        unit: &'static str,
    },
    /// The unit can only be converted with an offset, like degrees Celsius.
    #[error("{unit} cannot be converted to K by multiplication only")]
    NotMultiplicative {
        /// The symbol of the unit.
        unit: &'static str,
    },
    /// Looking up the value or its unit in a document failed.
    #[error(transparent)]
    Lookup(#[from] crate::tree::Error),
    /// The value of a quantity is not a number.
    #[error("expected `{key}` to be a number, found {found}")]
    NotANumber {
        /// The key of the value.
        key: String,
        /// The kind of value which was found instead.
        found: &'static str,
    },
    /// The unit of a quantity is neither stored next to it nor given as a
    /// default.
    #[error("no unit found for `{key}`")]
    MissingUnit {
        /// The key of the value.
        key: String,
    },
}
