//! Error type shared by every domain.

use alloc::string::{String, ToString};

/// Failures reported by quantity arithmetic and unit lookup.
///
/// Cross-domain misuse (adding a length to a weight) never reaches this type: it is rejected by the compiler
/// because every domain has its own unit enumeration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuantityError {
    /// A quantity was divided by a scalar (or quantity) of zero.
    #[error("division by zero")]
    DivisionByZero,

    /// A unit string matched none of the names, symbols or aliases of its domain.
    #[error("unknown {dimension} unit `{name}`")]
    UnknownUnit {
        /// Domain the lookup ran against (`"length"`, `"data"`, ...).
        dimension: &'static str,
        /// The rejected input.
        name: String,
    },
}

impl QuantityError {
    /// Builds an [`QuantityError::UnknownUnit`] for `name` in `dimension`.
    pub fn unknown_unit(dimension: &'static str, name: &str) -> Self {
        log::debug!("no {} unit matches {:?}", dimension, name);
        QuantityError::UnknownUnit {
            dimension,
            name: name.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn division_by_zero_message() {
        assert_eq!(QuantityError::DivisionByZero.to_string(), "division by zero");
    }

    #[test]
    fn unknown_unit_message() {
        let err = QuantityError::unknown_unit("length", "furlongs");
        assert_eq!(err.to_string(), "unknown length unit `furlongs`");
        assert_eq!(
            err,
            QuantityError::UnknownUnit {
                dimension: "length",
                name: "furlongs".into(),
            }
        );
    }
}
