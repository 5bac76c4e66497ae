//! Volume units.
//!
//! The base unit for this domain is [`VolumeUnit::Liters`] (`ratio == 1.0`).
//!
//! - **Metric**: millilitre through litre, plus the cubes of the metric lengths (`1 m³ = 1000 L`).
//! - **Cubic imperial**: cubes of the international inch, foot, yard and mile.
//! - **US customary liquid**: the gallon is exactly `231 in³ = 3.785411784 L`; quart, pint, cup, fluid ounce,
//!   tablespoon and teaspoon are exact fractions of it.
//! - **Imperial gallon**: exactly `4.54609 L`.
//!
//! ```rust
//! use measura_core::volume::{VolumeLiterals, VolumeUnit};
//!
//! let jug = 1.gallon();
//! assert_eq!(jug, 4.quarts());
//! assert_eq!(jug, 231.cubic_inches());
//! assert!(jug < 1.imperial_gallon());
//! ```

use crate::Quantity;
use measura_derive::Unit;

/// Closed set of volume units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(dimension = "volume", base = Liters, literals = VolumeLiterals)]
pub enum VolumeUnit {
    /// Millilitre (`1e-3 L`).
    #[unit(
        ratio = 1e-3,
        symbol = "ml",
        aliases = ["milliliter", "millilitre", "millilitres"],
        abbreviations = ["mL"],
        tags = [Milliliter]
    )]
    Milliliters,
    /// Centilitre (`1e-2 L`).
    #[unit(
        ratio = 1e-2,
        symbol = "cl",
        aliases = ["centiliter", "centilitre", "centilitres"],
        tags = [Centiliter]
    )]
    Centiliters,
    /// Decilitre (`1e-1 L`).
    #[unit(
        ratio = 1e-1,
        symbol = "dl",
        aliases = ["deciliter", "decilitre", "decilitres"],
        tags = [Deciliter]
    )]
    Deciliters,
    /// Litre (base unit).
    #[unit(
        ratio = 1.0,
        symbol = "l",
        aliases = ["liter", "litre", "litres"],
        abbreviations = ["L"],
        tags = [Liter, L]
    )]
    Liters,
    /// Cubic millimetre (`1e-6 L`).
    #[unit(
        ratio = 1e-6,
        symbol = "mm³",
        aliases = ["cubic_millimeter", "cubic millimeter"],
        abbreviations = ["cu_mm", "mm3"],
        tags = [CubicMillimeter]
    )]
    CubicMillimeters,
    /// Cubic centimetre (`1 mL`).
    #[unit(
        ratio = 1e-3,
        symbol = "cm³",
        aliases = ["cubic_centimeter", "cubic centimeter"],
        abbreviations = ["cu_cm", "cm3", "cc"],
        tags = [CubicCentimeter, CC]
    )]
    CubicCentimeters,
    /// Cubic metre (`1000 L`).
    #[unit(
        ratio = 1_000.0,
        symbol = "m³",
        aliases = ["cubic_meter", "cubic meter", "cubic_metre"],
        abbreviations = ["cu_m", "m3"],
        tags = [CubicMeter]
    )]
    CubicMeters,
    /// Cubic kilometre (`1e12 L`).
    #[unit(
        ratio = 1e12,
        symbol = "km³",
        aliases = ["cubic_kilometer", "cubic kilometer"],
        abbreviations = ["cu_km", "km3"],
        tags = [CubicKilometer]
    )]
    CubicKilometers,
    /// Cubic inch (`0.016387064 L`).
    #[unit(
        ratio = 0.0254 * 0.0254 * 0.0254 * 1_000.0,
        symbol = "in³",
        aliases = ["cubic_inch", "cubic inch"],
        abbreviations = ["cu_in", "in3"],
        tags = [CubicInch]
    )]
    CubicInches,
    /// Cubic foot (`28.316846592 L`).
    #[unit(
        ratio = 0.3048 * 0.3048 * 0.3048 * 1_000.0,
        symbol = "ft³",
        aliases = ["cubic_foot", "cubic foot"],
        abbreviations = ["cu_ft", "ft3"],
        tags = [CubicFoot]
    )]
    CubicFeet,
    /// Cubic yard (`764.554857984 L`).
    #[unit(
        ratio = 0.9144 * 0.9144 * 0.9144 * 1_000.0,
        symbol = "yd³",
        aliases = ["cubic_yard", "cubic yard"],
        abbreviations = ["cu_yd", "yd3"],
        tags = [CubicYard]
    )]
    CubicYards,
    /// Cubic mile.
    #[unit(
        ratio = 1_609.344 * 1_609.344 * 1_609.344 * 1_000.0,
        symbol = "mi³",
        aliases = ["cubic_mile", "cubic mile"],
        abbreviations = ["cu_mi", "mi3"],
        tags = [CubicMile]
    )]
    CubicMiles,
    /// US liquid gallon (`231 in³ = 3.785411784 L`).
    #[unit(
        ratio = 3.785_411_784,
        symbol = "gal",
        aliases = ["us_gallon", "us gallon", "gallon", "gallons"],
        tags = [UsGallon, Gallon]
    )]
    UsGallons,
    /// Imperial gallon (`4.54609 L`).
    #[unit(
        ratio = 4.546_09,
        symbol = "imp_gal",
        aliases = ["imperial_gallon", "imperial gallon", "uk_gallon"],
        tags = [ImperialGallon]
    )]
    ImperialGallons,
    /// US liquid quart (`1/4 gal`).
    #[unit(ratio = 3.785_411_784 / 4.0, symbol = "qt", aliases = ["quart"], tags = [Quart])]
    Quarts,
    /// US liquid pint (`1/8 gal`).
    #[unit(ratio = 3.785_411_784 / 8.0, symbol = "pt", aliases = ["pint"], tags = [Pint])]
    Pints,
    /// US customary cup (`1/16 gal`).
    #[unit(ratio = 3.785_411_784 / 16.0, symbol = "cup", tags = [Cup])]
    Cups,
    /// US fluid ounce (`1/128 gal`).
    #[unit(
        ratio = 3.785_411_784 / 128.0,
        symbol = "fl_oz",
        aliases = ["fluid_ounce", "fluid ounce"],
        abbreviations = ["fl oz"],
        tags = [FluidOunce]
    )]
    FluidOunces,
    /// US tablespoon (`1/2 fl oz`).
    #[unit(
        ratio = 3.785_411_784 / 256.0,
        symbol = "tbsp",
        aliases = ["tablespoon"],
        tags = [Tablespoon]
    )]
    Tablespoons,
    /// US teaspoon (`1/6 fl oz`).
    #[unit(
        ratio = 3.785_411_784 / 768.0,
        symbol = "tsp",
        aliases = ["teaspoon"],
        tags = [Teaspoon]
    )]
    Teaspoons,
}

/// A quantity of volume.
pub type Volume = Quantity<VolumeUnit>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Unit;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn metric_volumes() {
        assert_eq!(1.cubic_meter(), 1000.liters());
        assert_eq!(1.cc(), 1.ml());
        assert_eq!(1.l(), 10.dl());
        assert_eq!(1.dl(), 10.cl());
        assert_eq!(1.cubic_millimeter(), 0.001.ml());
        assert_eq!(1.cubic_kilometer(), 1_000_000_000.cubic_meters());
    }

    #[test]
    fn cubic_imperial_volumes() {
        assert_eq!(1.cubic_foot(), 1728.cubic_inches());
        assert_eq!(1.cubic_yard(), 27.cubic_feet());
        assert_relative_eq!(
            1.cubic_foot().to(VolumeUnit::Liters).value(),
            28.316_846_592,
            max_relative = 1e-12
        );
    }

    #[test]
    fn us_customary_ladder() {
        let gallon = 1.gallon();
        assert_eq!(gallon, 4.quarts());
        assert_eq!(gallon, 8.pints());
        assert_eq!(gallon, 16.cups());
        assert_eq!(gallon, 128.fl_oz());
        assert_eq!(gallon, 231.cubic_inches());
        assert_eq!(1.tablespoon(), 3.teaspoons());
        assert_eq!(1.fluid_ounce(), 2.tbsp());
    }

    #[test]
    fn imperial_gallon_is_larger() {
        assert!(1.imperial_gallon() > 1.us_gallon());
        assert_relative_eq!(
            1.imp_gal().to(VolumeUnit::Liters).value(),
            4.546_09,
            max_relative = 1e-12
        );
    }

    #[test]
    fn parse_and_display() {
        assert_eq!("L".parse::<VolumeUnit>().unwrap(), VolumeUnit::Liters);
        assert_eq!("mL".parse::<VolumeUnit>().unwrap(), VolumeUnit::Milliliters);
        assert!("ML".parse::<VolumeUnit>().is_err());
        assert_eq!("Liters".parse::<VolumeUnit>().unwrap(), VolumeUnit::Liters);
        assert_eq!("fl oz".parse::<VolumeUnit>().unwrap(), VolumeUnit::FluidOunces);
        assert_eq!("m³".parse::<VolumeUnit>().unwrap(), VolumeUnit::CubicMeters);
        assert_eq!(VolumeUnit::Gallon, VolumeUnit::UsGallons);
        assert_eq!(VolumeUnit::UsGallons.name(), "us_gallons");
        assert_eq!(2.gallons().to_string(), "2 us gallons");
        assert_eq!(0.25.liters().to_string(), "0.25 liters");
    }

    proptest! {
        #[test]
        fn prop_roundtrip_any_pair(
            v in -1e9..1e9f64,
            from in proptest::sample::select(VolumeUnit::ALL),
            to in proptest::sample::select(VolumeUnit::ALL)
        ) {
            let original = Volume::new(v, from);
            prop_assert!(original.to(to).to(from) == original);
        }
    }
}
