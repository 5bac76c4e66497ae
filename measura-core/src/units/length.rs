//! Length units.
//!
//! The base unit for this domain is [`LengthUnit::Meters`] (`ratio == 1.0`). Every other unit is expressed through
//! its exact international definition (the international inch is exactly `0.0254 m`, the statute mile exactly
//! `1609.344 m`, the nautical mile exactly `1852 m`).
//!
//! ```rust
//! use measura_core::length::{LengthLiterals, LengthUnit};
//!
//! let mile = 1.mile();
//! assert_eq!(mile, 5280.feet());
//! assert_eq!(mile.to(LengthUnit::Yards).value().round(), 1760.0);
//! ```

use crate::Quantity;
use measura_derive::Unit;

/// Closed set of length units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(dimension = "length", base = Meters, literals = LengthLiterals)]
pub enum LengthUnit {
    /// Millimetre (`1e-3 m`).
    #[unit(
        ratio = 1e-3,
        symbol = "mm",
        aliases = ["millimeter", "millimetre", "millimetres"],
        tags = [Millimeter, Mm]
    )]
    Millimeters,
    /// Centimetre (`1e-2 m`).
    #[unit(
        ratio = 1e-2,
        symbol = "cm",
        aliases = ["centimeter", "centimetre", "centimetres"],
        tags = [Centimeter, Cm]
    )]
    Centimeters,
    /// Metre (base unit).
    #[unit(
        ratio = 1.0,
        symbol = "m",
        aliases = ["meter", "metre", "metres"],
        tags = [Meter, M]
    )]
    Meters,
    /// Kilometre (`1000 m`).
    #[unit(
        ratio = 1_000.0,
        symbol = "km",
        aliases = ["kilometer", "kilometre", "kilometres"],
        tags = [Kilometer, Km]
    )]
    Kilometers,
    /// International inch (`0.0254 m`).
    #[unit(ratio = 0.0254, symbol = "in", aliases = ["inch"], tags = [Inch, In])]
    Inches,
    /// International foot (`12 in = 0.3048 m`).
    #[unit(ratio = 0.3048, symbol = "ft", aliases = ["foot"], tags = [Foot, Ft])]
    Feet,
    /// International yard (`3 ft = 0.9144 m`).
    #[unit(ratio = 0.9144, symbol = "yd", aliases = ["yard"], tags = [Yard, Yd])]
    Yards,
    /// Statute mile (`5280 ft = 1609.344 m`).
    #[unit(ratio = 1_609.344, symbol = "mi", aliases = ["mile"], tags = [Mile, Mi])]
    Miles,
    /// International nautical mile (`1852 m`).
    #[unit(
        ratio = 1_852.0,
        symbol = "nmi",
        aliases = ["nautical_mile", "nautical mile"],
        tags = [NauticalMile, Nmi]
    )]
    NauticalMiles,
}

/// A quantity of length.
pub type Length = Quantity<LengthUnit>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Unit;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use proptest::prelude::*;

    // ─────────────────────────────────────────────────────────────────────────────
    // Registry
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn base_unit_has_unit_ratio() {
        assert_eq!(LengthUnit::BASE, LengthUnit::Meters);
        assert_eq!(LengthUnit::BASE.ratio(), 1.0);
    }

    #[test]
    fn every_unit_has_positive_finite_ratio() {
        for unit in LengthUnit::ALL {
            assert!(unit.ratio().is_finite() && unit.ratio() > 0.0, "{:?}", unit);
        }
        assert_eq!(LengthUnit::ALL.len(), 9);
    }

    #[test]
    fn alias_tags_are_the_canonical_unit() {
        assert_eq!(LengthUnit::Ft, LengthUnit::Feet);
        assert_eq!(LengthUnit::Foot, LengthUnit::Feet);
        assert_eq!(LengthUnit::Mi, LengthUnit::Miles);
        assert_eq!(Length::new(3.0, LengthUnit::Ft), Length::new(3.0, LengthUnit::Feet));
    }

    #[test]
    fn names_and_labels() {
        assert_eq!(LengthUnit::Feet.name(), "feet");
        assert_eq!(LengthUnit::NauticalMiles.name(), "nautical_miles");
        assert_eq!(LengthUnit::NauticalMiles.label(), "nautical miles");
        assert_eq!(LengthUnit::Inches.symbol(), "in");
    }

    #[test]
    fn parse_accepts_every_alias() {
        for unit in LengthUnit::ALL {
            for alias in unit.aliases() {
                assert_eq!(alias.parse::<LengthUnit>().unwrap(), *unit, "{}", alias);
            }
        }
        assert_eq!("in".parse::<LengthUnit>().unwrap(), LengthUnit::Inches);
        assert_eq!("FEET".parse::<LengthUnit>().unwrap(), LengthUnit::Feet);
        assert!("IN".parse::<LengthUnit>().is_err());
        assert_eq!(" km ".parse::<LengthUnit>().unwrap(), LengthUnit::Kilometers);
    }

    #[test]
    fn parse_rejects_unknown() {
        let err = "furlongs".parse::<LengthUnit>().unwrap_err();
        assert_eq!(err.to_string(), "unknown length unit `furlongs`");
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Conversions
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn kilometers_to_meters() {
        let km = Length::new(1.0, LengthUnit::Kilometers);
        assert_abs_diff_eq!(km.to(LengthUnit::Meters).value(), 1000.0, epsilon = 1e-9);
    }

    #[test]
    fn mile_in_feet_and_yards() {
        let mile = Length::new(1.0, LengthUnit::Miles);
        assert_relative_eq!(mile.to(LengthUnit::Feet).value(), 5280.0, max_relative = 1e-12);
        assert_relative_eq!(mile.to(LengthUnit::Yards).value(), 1760.0, max_relative = 1e-12);
        assert_eq!(mile, Length::new(5280.0, LengthUnit::Feet));
        assert_eq!(mile, Length::new(1760.0, LengthUnit::Yards));
        assert_eq!(
            Length::new(5280.0, LengthUnit::Feet),
            Length::new(1760.0, LengthUnit::Yards)
        );
    }

    #[test]
    fn foot_in_inches() {
        let foot = Length::new(1.0, LengthUnit::Feet);
        assert_relative_eq!(foot.to(LengthUnit::Inches).value(), 12.0, max_relative = 1e-12);
    }

    #[test]
    fn nautical_mile_in_kilometers() {
        let nmi = Length::new(1.0, LengthUnit::NauticalMiles);
        assert_relative_eq!(nmi.to(LengthUnit::Kilometers).value(), 1.852, max_relative = 1e-12);
    }

    #[test]
    fn conversion_to_same_unit_is_identity() {
        let q = Length::new(0.1, LengthUnit::Miles);
        assert_eq!(q.to(LengthUnit::Miles).value(), 0.1);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Literals and formatting
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn literal_factories_cover_aliases() {
        assert_eq!(50.miles().unit(), LengthUnit::Miles);
        assert_eq!(50.mile().unit(), LengthUnit::Miles);
        assert_eq!(50.mi().unit(), LengthUnit::Miles);
        assert_eq!(2.5.feet().value(), 2.5);
        assert_eq!(1.inch(), 1.inches());
        assert_eq!(12.r#in(), 1.foot());
        assert_eq!(LengthUnit::Inches.to_string(), "inches");
        assert_eq!(1.metre(), 1.m());
        assert_eq!(1.nautical_mile(), 1852.meters());
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(50.miles().to_string(), "50 miles");
        assert_eq!(1.5.feet().to_string(), "1.5 feet");
        assert_eq!(3.nmi().to_string(), "3 nautical miles");
        assert_eq!(LengthUnit::Centimeters.to_string(), "centimeters");
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Property-based tests
    // ─────────────────────────────────────────────────────────────────────────────

    fn any_unit() -> impl Strategy<Value = LengthUnit> {
        proptest::sample::select(LengthUnit::ALL)
    }

    proptest! {
        #[test]
        fn prop_roundtrip_any_pair(m in -1e12..1e12f64, from in any_unit(), to in any_unit()) {
            let original = Length::new(m, from);
            let back = original.to(to).to(from);
            prop_assert_eq!(back.unit(), from);
            prop_assert!(back == original);
        }

        #[test]
        fn prop_feet_inches_ratio(ft in 1e-6..1e6f64) {
            let feet = Length::new(ft, LengthUnit::Feet);
            let inches = feet.to(LengthUnit::Inches);
            prop_assert!((inches.value() / feet.value() - 12.0).abs() < 1e-9);
        }
    }
}
