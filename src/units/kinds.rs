use core::fmt;
use core::str::FromStr;

use crate::units::{Convert, Error};

macro_rules! units {
    (@factor) => {
        None
    };

    (@factor $factor:expr) => {
        Some($factor)
    };

    (
        $(#[doc = $doc:literal])*
        $vis:vis enum $name:ident {
            $($variant:ident($symbol:literal $(| $alias:literal)*) $(= $factor:expr)?),* $(,)?
        }
    ) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                #[doc = concat!("`", $symbol, "`")]
                $variant,
            )*
        }

        impl $name {
            /// Every unit of this kind in the order the schema lists them.
            pub const VARIANTS: &'static [Self] = &[$(Self::$variant),*];

            /// Every unit of this kind.
            #[must_use]
            #[inline]
            pub fn variants() -> &'static [Self] {
                Self::VARIANTS
            }

            /// The symbol the unit is written as in a document.
            #[must_use]
            pub fn symbol(&self) -> &'static str {
                match self {
                    $(Self::$variant => $symbol,)*
                }
            }

            /// The size of the unit in its SI base unit, if it is fixed.
            fn factor(&self) -> Option<f64> {
                match self {
                    $(Self::$variant => units!(@factor $($factor)?),)*
                }
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(unit: &str) -> Result<Self, Self::Err> {
                match unit {
                    $($symbol $(| $alias)* => Ok(Self::$variant),)*
                    _ => Err(Error::UnknownUnit {
                        unit: unit.to_owned(),
                    }),
                }
            }
        }

        impl fmt::Display for $name {
            #[inline]
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.symbol())
            }
        }

        #[cfg(feature = "serde")]
        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let unit = <String as serde::Deserialize>::deserialize(deserializer)?;
                unit.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

// Units which convert by multiplying with their size in the SI base unit.
macro_rules! scaled {
    ($($name:ident),* $(,)?) => {
        $(
            impl Convert for $name {
                fn as_si(&self) -> Result<f64, Error> {
                    self.factor().ok_or(Error::NoScale {
                        unit: self.symbol(),
                    })
                }
            }
        )*
    };
}

units! {
    /// A unit of length, the SI base unit being the meter.
    pub enum Length {
        Yottameter("Ym") = 1e24,
        Zettameter("Zm") = 1e21,
        Exameter("Em") = 1e18,
        Petameter("Pm") = 1e15,
        Terameter("Tm") = 1e12,
        Gigameter("Gm") = 1e9,
        Megameter("Mm") = 1e6,
        Kilometer("km") = 1e3,
        Hectometer("hm") = 1e2,
        Decameter("dam") = 1e1,
        Meter("m") = 1e0,
        Decimeter("dm") = 1e-1,
        Centimeter("cm") = 1e-2,
        Millimeter("mm") = 1e-3,
        Micrometer("µm" | "um") = 1e-6,
        Nanometer("nm") = 1e-9,
        Picometer("pm") = 1e-12,
        Femtometer("fm") = 1e-15,
        Attometer("am") = 1e-18,
        Zeptometer("zm") = 1e-21,
        Yoctometer("ym") = 1e-24,
        Angstrom("Å") = 1e-10,
        Thou("thou") = 2.54e-5,
        Li("li") = 5e2,
        Inch("in") = 2.54e-2,
        Foot("ft") = 3.048e-1,
        Yard("yd") = 9.144e-1,
        Mile("mi") = 1.609344e3,
        AstronomicalUnit("ua") = 1.496e11,
        LightYear("ly") = 9.461e15,
        Parsec("pc") = 3.086e16,
        Point("pt") = 3.52778e-4,
        Pixel("pixel"),
        ReferenceFrame("reference frame"),
    }
}

units! {
    /// A unit of time, the SI base unit being the second.
    pub enum Time {
        Yottasecond("Ys") = 1e24,
        Zettasecond("Zs") = 1e21,
        Exasecond("Es") = 1e18,
        Petasecond("Ps") = 1e15,
        Terasecond("Ts") = 1e12,
        Gigasecond("Gs") = 1e9,
        Megasecond("Ms") = 1e6,
        Kilosecond("ks") = 1e3,
        Hectosecond("hs") = 1e2,
        Decasecond("das") = 1e1,
        Second("s") = 1e0,
        Decisecond("ds") = 1e-1,
        Centisecond("cs") = 1e-2,
        Millisecond("ms") = 1e-3,
        Microsecond("µs" | "us") = 1e-6,
        Nanosecond("ns") = 1e-9,
        Picosecond("ps") = 1e-12,
        Femtosecond("fs") = 1e-15,
        Attosecond("as") = 1e-18,
        Zeptosecond("zs") = 1e-21,
        Yoctosecond("ys") = 1e-24,
        Minute("min") = 6e1,
        Hour("h") = 3.6e3,
        Day("d") = 8.64e4,
    }
}

units! {
    /// A unit of pressure, the SI unit being the pascal.
    pub enum Pressure {
        Yottapascal("YPa") = 1e24,
        Zettapascal("ZPa") = 1e21,
        Exapascal("EPa") = 1e18,
        Petapascal("PPa") = 1e15,
        Terapascal("TPa") = 1e12,
        Gigapascal("GPa") = 1e9,
        Megapascal("MPa") = 1e6,
        Kilopascal("kPa") = 1e3,
        Hectopascal("hPa") = 1e2,
        Decapascal("daPa") = 1e1,
        Pascal("Pa") = 1e0,
        Decipascal("dPa") = 1e-1,
        Centipascal("cPa") = 1e-2,
        Millipascal("mPa") = 1e-3,
        Micropascal("µPa" | "uPa") = 1e-6,
        Nanopascal("nPa") = 1e-9,
        Picopascal("pPa") = 1e-12,
        Femtopascal("fPa") = 1e-15,
        Attopascal("aPa") = 1e-18,
        Zeptopascal("zPa") = 1e-21,
        Yoctopascal("yPa") = 1e-24,
        Bar("bar") = 1e5,
        Megabar("Mbar") = 1e11,
        Kilobar("kbar") = 1e8,
        Decibar("dbar") = 1e4,
        Centibar("cbar") = 1e3,
        Millibar("mbar") = 1e2,
        Atmosphere("atm") = 1.01325e5,
        Psi("psi") = 6.89476e3,
        Torr("Torr") = 1.33322e2,
        Millitorr("mTorr") = 1.33322e-1,
        MillimeterOfMercury("mm Hg" | "mmHg") = 1.33322e2,
    }
}

units! {
    /// A unit of power, the SI unit being the watt.
    pub enum Power {
        Yottawatt("YW") = 1e24,
        Zettawatt("ZW") = 1e21,
        Exawatt("EW") = 1e18,
        Petawatt("PW") = 1e15,
        Terawatt("TW") = 1e12,
        Gigawatt("GW") = 1e9,
        Megawatt("MW") = 1e6,
        Kilowatt("kW") = 1e3,
        Hectowatt("hW") = 1e2,
        Decawatt("daW") = 1e1,
        Watt("W") = 1e0,
        Deciwatt("dW") = 1e-1,
        Centiwatt("cW") = 1e-2,
        Milliwatt("mW") = 1e-3,
        Microwatt("µW" | "uW") = 1e-6,
        Nanowatt("nW") = 1e-9,
        Picowatt("pW") = 1e-12,
        Femtowatt("fW") = 1e-15,
        Attowatt("aW") = 1e-18,
        Zeptowatt("zW") = 1e-21,
        Yoctowatt("yW") = 1e-24,
    }
}

units! {
    /// A unit of frequency, the SI unit being the hertz.
    pub enum Frequency {
        Yottahertz("YHz") = 1e24,
        Zettahertz("ZHz") = 1e21,
        Exahertz("EHz") = 1e18,
        Petahertz("PHz") = 1e15,
        Terahertz("THz") = 1e12,
        Gigahertz("GHz") = 1e9,
        Megahertz("MHz") = 1e6,
        Kilohertz("kHz") = 1e3,
        Hectohertz("hHz") = 1e2,
        Decahertz("daHz") = 1e1,
        Hertz("Hz") = 1e0,
        Decihertz("dHz") = 1e-1,
        Centihertz("cHz") = 1e-2,
        Millihertz("mHz") = 1e-3,
        Microhertz("µHz" | "uHz") = 1e-6,
        Nanohertz("nHz") = 1e-9,
        Picohertz("pHz") = 1e-12,
        Femtohertz("fHz") = 1e-15,
        Attohertz("aHz") = 1e-18,
        Zeptohertz("zHz") = 1e-21,
        Yoctohertz("yHz") = 1e-24,
    }
}

units! {
    /// A unit of electric potential, the SI unit being the volt.
    pub enum ElectricPotential {
        Yottavolt("YV") = 1e24,
        Zettavolt("ZV") = 1e21,
        Exavolt("EV") = 1e18,
        Petavolt("PV") = 1e15,
        Teravolt("TV") = 1e12,
        Gigavolt("GV") = 1e9,
        Megavolt("MV") = 1e6,
        Kilovolt("kV") = 1e3,
        Hectovolt("hV") = 1e2,
        Decavolt("daV") = 1e1,
        Volt("V") = 1e0,
        Decivolt("dV") = 1e-1,
        Centivolt("cV") = 1e-2,
        Millivolt("mV") = 1e-3,
        Microvolt("µV" | "uV") = 1e-6,
        Nanovolt("nV") = 1e-9,
        Picovolt("pV") = 1e-12,
        Femtovolt("fV") = 1e-15,
        Attovolt("aV") = 1e-18,
        Zeptovolt("zV") = 1e-21,
        Yoctovolt("yV") = 1e-24,
    }
}

units! {
    /// A unit of temperature, the SI base unit being the kelvin.
    ///
    /// Only [`Kelvin`][Temperature::Kelvin] and
    /// [`Rankine`][Temperature::Rankine] have a size in kelvin. Celsius and
    /// Fahrenheit need an offset, which [`Convert::convert`] applies.
    pub enum Temperature {
        Celsius("°C" | "C"),
        Fahrenheit("°F" | "F"),
        Kelvin("K") = 1.0,
        Rankine("°R" | "R") = 5.0 / 9.0,
    }
}

scaled!(Length, Time, Pressure, Power, Frequency, ElectricPotential);

const ABSOLUTE_ZERO_C: f64 = 273.15;
const ABSOLUTE_ZERO_F: f64 = 459.67;

impl Convert for Temperature {
    fn as_si(&self) -> Result<f64, Error> {
        self.factor().ok_or(Error::NotMultiplicative {
            unit: self.symbol(),
        })
    }

    fn convert(&self, unit: &Self, value: f64) -> Result<f64, Error> {
        use Temperature::{Celsius as C, Fahrenheit as F, Kelvin as K, Rankine as R};

        let value = match (self, unit) {
            (F, C) => (value - 32.0) * 5.0 / 9.0,
            (K, C) => value - ABSOLUTE_ZERO_C,
            (R, C) => value * 5.0 / 9.0 - ABSOLUTE_ZERO_C,
            (C, F) => value * 9.0 / 5.0 + 32.0,
            (K, F) => value * 9.0 / 5.0 - ABSOLUTE_ZERO_F,
            (R, F) => value - ABSOLUTE_ZERO_F,
            (C, K) => value + ABSOLUTE_ZERO_C,
            (F, K) => (value + ABSOLUTE_ZERO_F) * 5.0 / 9.0,
            (R, K) => value * 5.0 / 9.0,
            (C, R) => (value + ABSOLUTE_ZERO_C) * 9.0 / 5.0,
            (F, R) => value + ABSOLUTE_ZERO_F,
            (K, R) => value * 9.0 / 5.0,
            _ => value,
        };

        Ok(value)
    }
}
