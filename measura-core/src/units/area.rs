//! Area units.
//!
//! The base unit for this domain is [`AreaUnit::SquareMeters`] (`ratio == 1.0`). Square units are the squares of
//! the exact length definitions; the acre is exactly `43_560 ft²` and the hectare exactly `10_000 m²`.
//!
//! Areas are usually obtained by multiplying two lengths (see [`crate::derived`]):
//!
//! ```rust
//! use measura_core::area::{AreaLiterals, AreaUnit};
//! use measura_core::length::LengthLiterals;
//!
//! let floor = 2.feet() * 3.feet();
//! assert_eq!(floor.unit(), AreaUnit::SquareFeet);
//! assert_eq!(floor, 6.square_feet());
//! ```

use crate::Quantity;
use measura_derive::Unit;

/// Closed set of area units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(dimension = "area", base = SquareMeters, literals = AreaLiterals)]
pub enum AreaUnit {
    /// Square millimetre (`1e-6 m²`).
    #[unit(
        ratio = 1e-6,
        symbol = "mm²",
        aliases = ["square_millimeter", "square millimeter"],
        abbreviations = ["sq_mm", "mm2"],
        tags = [SquareMillimeter]
    )]
    SquareMillimeters,
    /// Square centimetre (`1e-4 m²`).
    #[unit(
        ratio = 1e-4,
        symbol = "cm²",
        aliases = ["square_centimeter", "square centimeter"],
        abbreviations = ["sq_cm", "cm2"],
        tags = [SquareCentimeter]
    )]
    SquareCentimeters,
    /// Square metre (base unit).
    #[unit(
        ratio = 1.0,
        symbol = "m²",
        aliases = ["square_meter", "square meter", "square_metre"],
        abbreviations = ["sq_m", "m2"],
        tags = [SquareMeter]
    )]
    SquareMeters,
    /// Square kilometre (`1e6 m²`).
    #[unit(
        ratio = 1e6,
        symbol = "km²",
        aliases = ["square_kilometer", "square kilometer"],
        abbreviations = ["sq_km", "km2"],
        tags = [SquareKilometer]
    )]
    SquareKilometers,
    /// Square inch (`0.00064516 m²`).
    #[unit(
        ratio = 0.0254 * 0.0254,
        symbol = "in²",
        aliases = ["square_inch", "square inch"],
        abbreviations = ["sq_in", "in2"],
        tags = [SquareInch]
    )]
    SquareInches,
    /// Square foot (`0.09290304 m²`).
    #[unit(
        ratio = 0.3048 * 0.3048,
        symbol = "ft²",
        aliases = ["square_foot", "square foot"],
        abbreviations = ["sq_ft", "ft2"],
        tags = [SquareFoot]
    )]
    SquareFeet,
    /// Square yard (`0.83612736 m²`).
    #[unit(
        ratio = 0.9144 * 0.9144,
        symbol = "yd²",
        aliases = ["square_yard", "square yard"],
        abbreviations = ["sq_yd", "yd2"],
        tags = [SquareYard]
    )]
    SquareYards,
    /// Square mile (`2_589_988.110336 m²`).
    #[unit(
        ratio = 1_609.344 * 1_609.344,
        symbol = "mi²",
        aliases = ["square_mile", "square mile"],
        abbreviations = ["sq_mi", "mi2"],
        tags = [SquareMile]
    )]
    SquareMiles,
    /// Acre (`43_560 ft² = 4046.8564224 m²`).
    #[unit(
        ratio = 43_560.0 * 0.3048 * 0.3048,
        symbol = "ac",
        aliases = ["acre"],
        tags = [Acre]
    )]
    Acres,
    /// Hectare (`10_000 m²`).
    #[unit(ratio = 10_000.0, symbol = "ha", aliases = ["hectare"], tags = [Hectare])]
    Hectares,
}

/// A quantity of area.
pub type Area = Quantity<AreaUnit>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Unit;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn square_ratios_are_squares_of_lengths() {
        use crate::length::LengthUnit;

        let pairs = [
            (AreaUnit::SquareMillimeters, LengthUnit::Millimeters),
            (AreaUnit::SquareCentimeters, LengthUnit::Centimeters),
            (AreaUnit::SquareMeters, LengthUnit::Meters),
            (AreaUnit::SquareKilometers, LengthUnit::Kilometers),
            (AreaUnit::SquareInches, LengthUnit::Inches),
            (AreaUnit::SquareFeet, LengthUnit::Feet),
            (AreaUnit::SquareYards, LengthUnit::Yards),
            (AreaUnit::SquareMiles, LengthUnit::Miles),
        ];
        for (area, length) in pairs {
            assert_relative_eq!(area.ratio(), length.ratio() * length.ratio(), max_relative = 1e-12);
        }
    }

    #[test]
    fn acre_and_hectare() {
        assert_relative_eq!(1.acre().to(AreaUnit::SquareFeet).value(), 43_560.0, max_relative = 1e-12);
        assert_relative_eq!(
            1.acre().to(AreaUnit::SquareMeters).value(),
            4_046.856_422_4,
            max_relative = 1e-12
        );
        assert_relative_eq!(1.hectare().to(AreaUnit::SquareMeters).value(), 10_000.0, max_relative = 1e-12);
        assert_eq!(1.square_mile(), 640.acres());
        assert_eq!(1.sq_km(), 100.hectares());
    }

    #[test]
    fn acre_is_smaller_than_hectare() {
        assert!(1.acre() < 1.hectare());
        assert!(1.hectare() > 2.acres());
    }

    #[test]
    fn left_operand_unit_wins() {
        let sum = 1.hectare() + 1.acre();
        assert_eq!(sum.unit(), AreaUnit::Hectares);
        assert_relative_eq!(sum.value(), 1.404_685_642_24, max_relative = 1e-12);
    }

    #[test]
    fn parse_and_display() {
        assert_eq!("ft²".parse::<AreaUnit>().unwrap(), AreaUnit::SquareFeet);
        assert!("sq ft".parse::<AreaUnit>().is_err());
        assert_eq!("Square Feet".parse::<AreaUnit>().unwrap(), AreaUnit::SquareFeet);
        assert_eq!("m2".parse::<AreaUnit>().unwrap(), AreaUnit::SquareMeters);
        assert_eq!(6.square_feet().to_string(), "6 square feet");
        assert_eq!(AreaUnit::SquareYard.name(), "square_yards");
    }

    proptest! {
        #[test]
        fn prop_roundtrip_any_pair(
            a in -1e9..1e9f64,
            from in proptest::sample::select(AreaUnit::ALL),
            to in proptest::sample::select(AreaUnit::ALL)
        ) {
            let original = Area::new(a, from);
            prop_assert!(original.to(to).to(from) == original);
        }
    }
}
