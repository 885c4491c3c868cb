//! Physical units as they appear next to values in metadata documents.
//!
//! Metadata commonly stores a measurement in one attribute and its unit in a
//! sibling, like `PhysicalSizeX="0.65" PhysicalSizeXUnit="µm"`. Such a pair is
//! read as a [`Quantity`] through [`Mapping::quantity`], and converted between
//! units with [`Convert`].
//!
//! [`Mapping::quantity`]: crate::tree::Mapping::quantity
//!
//! # Examples
//!
//! ```
//! # #[cfg(feature = "xml")] {
//! use metaview::units::{Length, Time};
//!
//! let doc = metaview::from_document(r#"
//! <Pixels PhysicalSizeX="0.65" PhysicalSizeXUnit="µm" TimeIncrement="2">
//!     <Plane DeltaT="1.5" DeltaTUnit="min"/>
//! </Pixels>
//! "#)?;
//!
//! let pixels = doc.root();
//!
//! let size = pixels.quantity::<Length>("physical_size_x")?;
//! assert_eq!(size.unit, Length::Micrometer);
//! assert!((size.to(Length::Nanometer)?.value - 650.0).abs() < 1e-9);
//!
//! let delta = pixels.get("plane")?.quantity::<Time>("delta_t")?;
//! assert_eq!(delta.to(Time::Second)?.value, 90.0);
//!
//! // Without a unit next to it, the default is used.
//! let increment = pixels.quantity_or("time_increment", Time::Second)?;
//! assert_eq!(increment.to_string(), "2 s");
//! # }
//! # Ok::<_, anyhow::Error>(())
//! ```


use core::fmt;
use core::str::FromStr;

mod error;
pub use self::error::Error;

mod kinds;
pub use self::kinds::{ElectricPotential, Frequency, Length, Power, Pressure, Temperature, Time};

/// Conversion between units of the same kind.
pub trait Convert: Copy + PartialEq + fmt::Display + FromStr<Err = Error> {
    /// The size of the unit in its SI unit.
    ///
    /// # Errors
    ///
    /// Errors if the unit has no fixed size, such as a pixel, or if it needs
    /// an offset to convert, such as degrees Celsius.
    fn as_si(&self) -> Result<f64, Error>;

    /// Convert `value` expressed in this unit to `unit`.
    ///
    /// Converting to the same unit always succeeds and returns the value
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Errors if either unit cannot be expressed in the SI unit, see
    /// [`Convert::as_si`].
    ///
    /// # Examples
    ///
    /// ```
    /// use metaview::units::{Convert, Length, Temperature};
    ///
    /// assert_eq!(Length::Kilometer.convert(&Length::Meter, 2.0)?, 2000.0);
    /// assert_eq!(Length::Pixel.convert(&Length::Pixel, 3.0)?, 3.0);
    /// assert!(Length::Pixel.convert(&Length::Micrometer, 3.0).is_err());
    /// assert_eq!(Temperature::Celsius.convert(&Temperature::Fahrenheit, 100.0)?, 212.0);
    /// # Ok::<_, metaview::units::Error>(())
    /// ```
    fn convert(&self, unit: &Self, value: f64) -> Result<f64, Error> {
        if self == unit {
            return Ok(value);
        }

        Ok(value * self.as_si()? / unit.as_si()?)
    }
}

/// A value together with its unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quantity<U> {
    /// The numerical value.
    pub value: f64,
    /// The unit the value is expressed in.
    pub unit: U,
}

impl<U> Quantity<U>
where
    U: Convert,
{
    /// Construct a new quantity.
    #[must_use]
    pub fn new(value: f64, unit: U) -> Self {
        Self { value, unit }
    }

    /// Convert the quantity to `unit`.
    ///
    /// # Errors
    ///
    /// Errors if the conversion is not possible, see [`Convert::convert`].
    pub fn to(&self, unit: U) -> Result<Self, Error> {
        let value = self.unit.convert(&unit, self.value)?;
        Ok(Self::new(value, unit))
    }
}

impl<U> fmt::Display for Quantity<U>
where
    U: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}
