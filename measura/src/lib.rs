//! Length, weight, area, volume and data-size quantities.
//!
//! `measura` is the user-facing crate in this workspace. It re-exports the full API from `measura-core` plus every
//! predefined domain, and a [`prelude`] that brings all literal constructors into scope.
//!
//! A value is always a `Quantity<U>`, where `U` is the unit enumeration of one domain. The domain is checked at
//! compile time; the unit inside the domain is a runtime tag, so `1 ft + 6 in` just works and yields feet.
//!
//! # What this crate solves
//!
//! - Prevents mixing incompatible domains (you can't add metres to kilograms).
//! - Mixed-unit arithmetic with a deterministic result unit: the left operand's.
//! - Tolerant equality across units (`5280.feet() == 1.mile()`).
//! - Length × length → area and area × length → volume.
//!
//! # What this crate does not try to solve
//!
//! - Exact arithmetic: quantities are backed by `f64`.
//! - Runtime-defined units; each domain is a closed set.
//! - Localized formatting.
//!
//! # Quick start
//!
//! ```rust
//! use measura::prelude::*;
//!
//! let run = 5.km() + 400.meters();
//! assert_eq!(run.unit(), LengthUnit::Kilometers);
//! assert_eq!(run, 5.4.km());
//!
//! let room = 12.feet() * 10.feet();
//! assert_eq!(room, 120.square_feet());
//!
//! assert_eq!(1.5.kib().to_string(), "1.5KiB");
//! ```
//!
//! Scalar division is fallible:
//!
//! ```rust
//! use measura::prelude::*;
//!
//! assert_eq!((6.kg() / 2.0).unwrap(), 3.kg());
//! assert_eq!(6.kg() / 0.0, Err(QuantityError::DivisionByZero));
//! ```
//!
//! # Incorrect usage (type error)
//!
//! ```compile_fail
//! use measura::prelude::*;
//!
//! let _ = 1.meter() + 1.kg(); // cannot add different domains
//! ```
//!
//! # Modules
//!
//! Units are grouped by domain under modules (also re-exported at the crate root for convenience):
//!
//! - `measura::length` (millimetres through nautical miles)
//! - `measura::weight` (micrograms through long tons)
//! - `measura::area` (square millimetres through acres and hectares)
//! - `measura::volume` (millilitres, cubic units, US and imperial liquid measures)
//! - `measura::data` (bits, bytes, decimal and binary prefixes)
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support in `measura-core`.
//! - `serde` (default): enables `serde` support; a quantity serializes as
//!   `{"magnitude": <f64>, "unit": "<canonical name>"}`.
//!
//! Disable default features for `no_std`:
//!
//! ```toml
//! [dependencies]
//! measura = { version = "0.1.0", default-features = false }
//! ```
//!
//! # Panics and errors
//!
//! Nothing panics. Scalar division, ratios and unit lookup return [`QuantityError`].
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor versions until `1.0`.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub use measura_core::*;

pub use measura_core::units::area;
pub use measura_core::units::data;
pub use measura_core::units::length;
pub use measura_core::units::volume;
pub use measura_core::units::weight;

pub use measura_core::units::area::*;
pub use measura_core::units::data::*;
pub use measura_core::units::length::*;
pub use measura_core::units::volume::*;
pub use measura_core::units::weight::*;

/// Everything needed for day-to-day use: the quantity types, unit enumerations and every literal-factory trait.
///
/// ```rust
/// use measura::prelude::*;
///
/// let total: Weight = [1.kg(), 500.grams(), 8.oz()].into_iter().sum();
/// assert_eq!(total.unit(), WeightUnit::Kilograms);
/// ```
pub mod prelude {
    pub use measura_core::area::{Area, AreaLiterals, AreaUnit};
    pub use measura_core::data::{Data, DataLiterals, DataUnit};
    pub use measura_core::length::{Length, LengthLiterals, LengthUnit};
    pub use measura_core::volume::{Volume, VolumeLiterals, VolumeUnit};
    pub use measura_core::weight::{Weight, WeightLiterals, WeightUnit};
    pub use measura_core::{Quantity, QuantityError, Unit};
}
