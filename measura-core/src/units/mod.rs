//! Predefined unit domains.
//!
//! Each domain is one closed unit enumeration plus the `Quantity` alias over it. Every enumeration is annotated
//! once and `#[derive(Unit)]` expands that table into coefficients, names, aliases, parsing, formatting and the
//! literal-factory trait.
//!
//! ## Modules
//!
//! - [`length`]: length units (metre is the base unit).
//! - [`weight`]: weight units (gram is the base unit).
//! - [`area`]: area units (square metre is the base unit).
//! - [`volume`]: volume units (litre is the base unit).
//! - [`data`]: data size units (byte is the base unit), rendered compactly.

pub mod area;
pub mod data;
pub mod length;
pub mod volume;
pub mod weight;
