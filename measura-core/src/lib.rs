//! Core type system for measurements tagged with a runtime unit.
//!
//! `measura-core` provides a small quantity-with-unit model:
//!
//! - A *domain* (length, weight, area, volume, data) is a closed unit enumeration implementing [`Unit`].
//! - A value tagged with a unit of that domain is a [`Quantity<U>`], backed by an `f64`.
//! - Conversion is a table-driven scaling via [`Quantity::to`].
//! - Arithmetic between quantities of one domain keeps the **left operand's unit**.
//! - Equality is tolerant: two quantities are equal when their magnitudes, expressed in the left operand's unit,
//!   agree to within [`RELATIVE_EPSILON`].
//! - Length × length gives an area, area × length gives a volume (see [`derived`]).
//!
//! Most users should depend on `measura` (the facade crate) and import its prelude.
//!
//! # What this crate solves
//!
//! - Compile-time separation of domains (a length cannot be added to a weight).
//! - Free mixing of units inside a domain (`1 ft + 6 in`), with a deterministic result unit.
//! - One annotated table per domain as the single source of coefficients, names, aliases and literal constructors.
//!
//! # What this crate does not try to solve
//!
//! - Exact arithmetic (`Quantity` is `f64`).
//! - User-defined units or unit systems.
//! - Unit algebra beyond the length/area/volume products.
//!
//! # Quick start
//!
//! ```rust
//! use measura_core::length::{LengthLiterals, LengthUnit};
//!
//! let trip = 50.miles() + 10.km();
//! assert_eq!(trip.unit(), LengthUnit::Miles);
//! assert!((trip.value() - 56.213_711_922_373_34).abs() < 1e-9);
//! assert_eq!(5280.feet(), 1.mile());
//! ```
//!
//! Parsing unit names:
//!
//! ```rust
//! use measura_core::weight::{Weight, WeightUnit};
//!
//! let w = Weight::parse(3.0, "KG").unwrap();
//! assert_eq!(w.unit(), WeightUnit::Kilograms);
//! assert!(Weight::parse(3.0, "stoneweight").is_err());
//! ```
//!
//! # `no_std`
//!
//! Disable default features to build `measura-core` without `std`:
//!
//! ```toml
//! [dependencies]
//! measura-core = { version = "0.1.0", default-features = false }
//! ```
//!
//! When `std` is disabled, floating-point math that isn't available in `core` is provided via `libm`; the crate
//! still needs `alloc` for the unknown-unit error message.
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support.
//! - `serde` (default): enables `serde` support for every unit enumeration and for `Quantity<U>`; a quantity
//!   serializes as `{"magnitude": <f64>, "unit": "<canonical name>"}`.
//!
//! # Panics and errors
//!
//! Nothing in this crate panics. The fallible operations (scalar division, ratios, unit lookup) return
//! [`QuantityError`]. Conversions and the other arithmetic operators follow IEEE-754 behavior (NaN and infinities
//! propagate according to the underlying operation).
//!
//! # SemVer and stability
//!
//! This crate is currently `0.x`. Expect breaking changes between minor versions until `1.0`.

#![deny(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(not(feature = "std"))]
extern crate libm;

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

mod error;
mod quantity;
mod unit;

pub mod derived;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use error::QuantityError;
pub use quantity::{Quantity, RELATIVE_EPSILON};
pub use unit::Unit;

// ─────────────────────────────────────────────────────────────────────────────
// Predefined unit modules (grouped by domain)
// ─────────────────────────────────────────────────────────────────────────────

/// Predefined unit domains.
///
/// These live in `measura-core` so the derive can implement foreign traits (`Display`, `FromStr`, serde, the
/// literal traits on `f64`/`i64`) without running into Rust's orphan rules.
pub mod units;

pub use units::area;
pub use units::data;
pub use units::length;
pub use units::volume;
pub use units::weight;
