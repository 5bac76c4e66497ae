//! Unit trait: the descriptor every domain implements.

use crate::QuantityError;
use core::fmt::{Debug, Display};
use core::hash::Hash;
use core::str::FromStr;

/// Trait implemented by every **unit enumeration** (one enum per domain).
///
/// The enumeration is closed: each variant is one canonical unit and every method below is an exhaustive `match`,
/// so there is no "unknown unit" at runtime once a value of the enum exists. Implementations are generated by
/// `#[derive(Unit)]` from a single annotated table.
///
/// * `ratio` is the conversion factor from a unit to the domain's *base unit*.
///   Example: metres are the base of length (`Meters.ratio() == 1.0`), so kilometres use `1000.0` because
///   `1 km = 1000 m`.
///
/// * `name` is the canonical snake_case name (`"square_feet"`), used for serialization.
///
/// * `label` is the human readable name (`"square feet"`), used by [`core::fmt::Display`].
///
/// * `symbol` is the conventional abbreviation (`"ft²"`, `"KiB"`). Symbols and other abbreviations are
///   case-sensitive when parsing; words are not.
///
/// # Invariants
///
/// - `ratio` is finite and strictly positive for every unit.
/// - `BASE.ratio() == 1.0`.
/// - No spelling returned by `aliases` belongs to two units of the same domain.
pub trait Unit:
    Copy + Eq + Hash + Debug + Display + FromStr<Err = QuantityError> + 'static
{
    /// Name of the domain (`"length"`, `"weight"`, ...).
    const DIMENSION: &'static str;

    /// The unit all ratios of this domain are normalized to.
    const BASE: Self;

    /// Every canonical unit of the domain, in declaration order.
    const ALL: &'static [Self];

    /// Whether quantities render compactly as `<value><symbol>` rather than `<value> <label>`.
    const COMPACT: bool = false;

    /// Base units per one of this unit.
    fn ratio(self) -> f64;

    /// Canonical snake_case name.
    fn name(self) -> &'static str;

    /// Human readable name.
    fn label(self) -> &'static str;

    /// Conventional abbreviation.
    fn symbol(self) -> &'static str;

    /// Every spelling that resolves to this unit, canonical name first.
    fn aliases(self) -> &'static [&'static str];

    /// The spellings among [`aliases`](Unit::aliases) that only match verbatim: the symbol and any declared
    /// abbreviation.
    fn abbreviations(self) -> &'static [&'static str];

    /// Resolves a name, symbol or alias to its canonical unit.
    ///
    /// Exact matches win. Otherwise words (names, labels, word aliases) are retried ignoring ASCII case, so
    /// `"Kilograms"` finds kilograms. Abbreviations never fold case: `"Mg"` is not milligrams and `"Kb"` is
    /// neither kilobits nor kilobytes.
    fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        let exact = Self::ALL
            .iter()
            .copied()
            .find(|unit| unit.aliases().contains(&name));
        exact.or_else(|| {
            Self::ALL.iter().copied().find(|unit| {
                unit.aliases()
                    .iter()
                    .filter(|alias| !unit.abbreviations().contains(*alias))
                    .any(|alias| alias.eq_ignore_ascii_case(name))
            })
        })
    }

    /// Factor that rescales a magnitude expressed in `self` into `target`.
    #[inline]
    fn factor_to(self, target: Self) -> f64 {
        if self == target {
            1.0
        } else {
            self.ratio() / target.ratio()
        }
    }
}
