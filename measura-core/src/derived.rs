//! Cross-domain derivation: length × length → area, area × length → volume.
//!
//! The unit of a derived quantity is picked from the **left operand's** unit through two hand-written tables:
//!
//! - [`LengthUnit::square`] maps every length unit to the area unit it spans and the side length that area is
//!   measured in (`Feet -> (SquareFeet, Feet)`).
//! - [`AreaUnit::extrusion`] maps every area unit to the volume unit it sweeps, the edge length of that volume and
//!   the face area it is built on (`Acres -> (CubicFeet, Feet, SquareFeet)`).
//!
//! Both tables are exhaustive `match`es: adding a unit to either enumeration does not compile until its image is
//! written down here.
//!
//! Before multiplying, both operands are expressed in the table's side (or face and edge) units, so magnitudes stay
//! physically meaningful even when the left unit has no cube of its own (an acre-foot is `43_560 ft³`).
//!
//! ```rust
//! use measura_core::area::{AreaLiterals, AreaUnit};
//! use measura_core::length::LengthLiterals;
//! use measura_core::volume::{VolumeLiterals, VolumeUnit};
//!
//! let floor = 2.feet() * 3.feet();
//! assert_eq!(floor.unit(), AreaUnit::SquareFeet);
//!
//! let pond = 1.acre() * 1.foot();
//! assert_eq!(pond.unit(), VolumeUnit::CubicFeet);
//! assert_eq!(pond, 43_560.cubic_feet());
//! ```

use crate::area::{Area, AreaUnit};
use crate::length::{Length, LengthUnit};
use crate::volume::{Volume, VolumeUnit};
use core::ops::Mul;

impl LengthUnit {
    /// The area unit this length squares into, paired with the side unit both factors are converted to.
    pub const fn square(self) -> (AreaUnit, LengthUnit) {
        match self {
            Self::Millimeters => (AreaUnit::SquareMillimeters, Self::Millimeters),
            Self::Centimeters => (AreaUnit::SquareCentimeters, Self::Centimeters),
            Self::Meters => (AreaUnit::SquareMeters, Self::Meters),
            Self::Kilometers => (AreaUnit::SquareKilometers, Self::Kilometers),
            Self::Inches => (AreaUnit::SquareInches, Self::Inches),
            Self::Feet => (AreaUnit::SquareFeet, Self::Feet),
            Self::Yards => (AreaUnit::SquareYards, Self::Yards),
            Self::Miles => (AreaUnit::SquareMiles, Self::Miles),
            Self::NauticalMiles => (AreaUnit::SquareMeters, Self::Meters),
        }
    }
}

impl AreaUnit {
    /// The volume unit this area extrudes into, with its edge length unit and the face area unit.
    pub const fn extrusion(self) -> (VolumeUnit, LengthUnit, AreaUnit) {
        match self {
            Self::SquareMillimeters => (
                VolumeUnit::CubicMillimeters,
                LengthUnit::Millimeters,
                Self::SquareMillimeters,
            ),
            Self::SquareCentimeters => (
                VolumeUnit::CubicCentimeters,
                LengthUnit::Centimeters,
                Self::SquareCentimeters,
            ),
            Self::SquareMeters => (VolumeUnit::CubicMeters, LengthUnit::Meters, Self::SquareMeters),
            Self::SquareKilometers => (
                VolumeUnit::CubicKilometers,
                LengthUnit::Kilometers,
                Self::SquareKilometers,
            ),
            Self::SquareInches => (VolumeUnit::CubicInches, LengthUnit::Inches, Self::SquareInches),
            Self::SquareFeet => (VolumeUnit::CubicFeet, LengthUnit::Feet, Self::SquareFeet),
            Self::SquareYards => (VolumeUnit::CubicYards, LengthUnit::Yards, Self::SquareYards),
            Self::SquareMiles => (VolumeUnit::CubicMiles, LengthUnit::Miles, Self::SquareMiles),
            Self::Acres => (VolumeUnit::CubicFeet, LengthUnit::Feet, Self::SquareFeet),
            Self::Hectares => (VolumeUnit::CubicMeters, LengthUnit::Meters, Self::SquareMeters),
        }
    }
}

impl Mul for Length {
    type Output = Area;

    /// `a * b` in the square of `a`'s unit.
    fn mul(self, rhs: Length) -> Area {
        let (area, side) = self.unit().square();
        Area::new(self.to(side).value() * rhs.to(side).value(), area)
    }
}

impl Mul<Length> for Area {
    type Output = Volume;

    /// `a * h` in the extrusion of `a`'s unit.
    fn mul(self, rhs: Length) -> Volume {
        let (volume, edge, face) = self.unit().extrusion();
        Volume::new(self.to(face).value() * rhs.to(edge).value(), volume)
    }
}

impl Length {
    /// `self * self`.
    ///
    /// ```rust
    /// use measura_core::area::AreaLiterals;
    /// use measura_core::length::LengthLiterals;
    ///
    /// assert_eq!(1.yard().squared(), 1.square_yard());
    /// ```
    #[inline]
    pub fn squared(self) -> Area {
        self * self
    }

    /// `self * self * self`.
    ///
    /// ```rust
    /// use measura_core::length::LengthLiterals;
    /// use measura_core::volume::VolumeLiterals;
    ///
    /// assert_eq!(3.feet().cubed(), 27.cubic_feet());
    /// ```
    #[inline]
    pub fn cubed(self) -> Volume {
        self.squared() * self
    }
}
