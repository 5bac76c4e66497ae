//! Weight (mass) units.
//!
//! The base unit for this domain is [`WeightUnit::Grams`] (`ratio == 1.0`).
//!
//! - **Metric**: microgram through metric ton.
//! - **Avoirdupois**: ounce, pound, stone, short ton and long ton, all derived from the exact pound
//!   (`1 lb = 0.45359237 kg`).
//! - **Carat**: `1 ct = 0.2 g` (exact).
//!
//! ```rust
//! use measura_core::weight::{WeightLiterals, WeightUnit};
//!
//! let kg = 1.kg();
//! assert!(kg > 2.pounds());
//! assert_eq!(WeightUnit::KG, WeightUnit::Kilograms);
//! ```

use crate::Quantity;
use measura_derive::Unit;

/// Closed set of weight units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(dimension = "weight", base = Grams, literals = WeightLiterals)]
pub enum WeightUnit {
    /// Microgram (`1e-6 g`).
    #[unit(
        ratio = 1e-6,
        symbol = "µg",
        aliases = ["microgram"],
        abbreviations = ["ug", "mcg"],
        tags = [Microgram, UG]
    )]
    Micrograms,
    /// Milligram (`1e-3 g`).
    #[unit(ratio = 1e-3, symbol = "mg", aliases = ["milligram"], tags = [Milligram, MG])]
    Milligrams,
    /// Gram (base unit).
    #[unit(ratio = 1.0, symbol = "g", aliases = ["gram"], tags = [Gram, G])]
    Grams,
    /// Kilogram (`1000 g`).
    #[unit(
        ratio = 1_000.0,
        symbol = "kg",
        aliases = ["kilogram", "kilo", "kilos"],
        abbreviations = ["KG"],
        tags = [Kilogram, KG]
    )]
    Kilograms,
    /// Metric ton, or tonne (`1_000_000 g`).
    #[unit(
        ratio = 1_000_000.0,
        symbol = "t",
        aliases = ["metric_ton", "metric ton", "tonne", "tonnes"],
        tags = [MetricTon, Tonne]
    )]
    MetricTons,
    /// Carat (`0.2 g`).
    #[unit(ratio = 1.0 / 5.0, symbol = "ct", aliases = ["carat"], tags = [Carat, CT])]
    Carats,
    /// Avoirdupois ounce (`1/16 lb`).
    #[unit(
        ratio = (45_359_237.0 / 100_000.0) / 16.0,
        symbol = "oz",
        aliases = ["ounce"],
        tags = [Ounce, OZ]
    )]
    Ounces,
    /// Avoirdupois pound (`453.59237 g`).
    #[unit(
        ratio = 45_359_237.0 / 100_000.0,
        symbol = "lb",
        aliases = ["pound"],
        abbreviations = ["lbs"],
        tags = [Pound, LB]
    )]
    Pounds,
    /// Avoirdupois stone (`14 lb`).
    #[unit(
        ratio = (45_359_237.0 / 100_000.0) * 14.0,
        symbol = "st",
        aliases = ["stone"],
        tags = [Stone, ST]
    )]
    Stones,
    /// Short ton, US customary (`2000 lb`).
    #[unit(
        ratio = (45_359_237.0 / 100_000.0) * 2_000.0,
        symbol = "ton_us",
        aliases = ["short_ton", "short ton", "ton", "tons"],
        tags = [ShortTon]
    )]
    ShortTons,
    /// Long ton, Imperial (`2240 lb`).
    #[unit(
        ratio = (45_359_237.0 / 100_000.0) * 2_240.0,
        symbol = "ton_uk",
        aliases = ["long_ton", "long ton"],
        tags = [LongTon]
    )]
    LongTons,
}

/// A quantity of weight.
pub type Weight = Quantity<WeightUnit>;
