//! Data size units.
//!
//! The base unit for this domain is [`DataUnit::Bytes`] (`ratio == 1.0`); a bit is `1/8` byte. Decimal (SI)
//! prefixes are powers of 1000 (`KB`, `MB`, ...), binary (IEC) prefixes powers of 1024 (`KiB`, `MiB`, ...).
//!
//! Data sizes render compactly with their case-sensitive symbol: `1KB`, `1.5KiB`, `8b`. Symbols and abbreviations
//! parse verbatim, so `"b"` is a bit, `"B"` a byte, and `"Kb"` is rejected rather than guessed.
//!
//! ```rust
//! use measura_core::data::{DataLiterals, DataUnit};
//!
//! assert_eq!(1.kb().to_string(), "1KB");
//! assert_eq!(1.5.kib().to_string(), "1.5KiB");
//! assert!(1.kb() < 1.kib());
//! assert_eq!(8.bits(), 1.byte());
//! assert_eq!("B".parse::<DataUnit>().unwrap(), DataUnit::Bytes);
//! assert!("Kb".parse::<DataUnit>().is_err());
//! ```

use crate::Quantity;
use measura_derive::Unit;

/// Closed set of data size units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(dimension = "data", base = Bytes, literals = DataLiterals, compact)]
pub enum DataUnit {
    /// Bit (`1/8 B`).
    #[unit(ratio = 0.125, symbol = "b", aliases = ["bit"], tags = [Bit])]
    Bits,
    /// Byte (base unit).
    #[unit(ratio = 1.0, symbol = "B", aliases = ["byte"], tags = [Byte])]
    Bytes,
    /// Kilobyte (`1000 B`).
    #[unit(
        ratio = 1e3,
        symbol = "KB",
        aliases = ["kilobyte"],
        abbreviations = ["kb"],
        tags = [Kilobyte, KB]
    )]
    Kilobytes,
    /// Kibibyte (`1024 B`).
    #[unit(
        ratio = 1_024.0,
        symbol = "KiB",
        aliases = ["kibibyte"],
        abbreviations = ["kib"],
        tags = [Kibibyte, KiB]
    )]
    Kibibytes,
    /// Megabyte (`1000² B`).
    #[unit(
        ratio = 1e6,
        symbol = "MB",
        aliases = ["megabyte"],
        abbreviations = ["mb"],
        tags = [Megabyte, MB]
    )]
    Megabytes,
    /// Mebibyte (`1024² B`).
    #[unit(
        ratio = 1_048_576.0,
        symbol = "MiB",
        aliases = ["mebibyte"],
        abbreviations = ["mib"],
        tags = [Mebibyte, MiB]
    )]
    Mebibytes,
    /// Gigabyte (`1000³ B`).
    #[unit(
        ratio = 1e9,
        symbol = "GB",
        aliases = ["gigabyte"],
        abbreviations = ["gb"],
        tags = [Gigabyte, GB]
    )]
    Gigabytes,
    /// Gibibyte (`1024³ B`).
    #[unit(
        ratio = 1_073_741_824.0,
        symbol = "GiB",
        aliases = ["gibibyte"],
        abbreviations = ["gib"],
        tags = [Gibibyte, GiB]
    )]
    Gibibytes,
    /// Terabyte (`1000⁴ B`).
    #[unit(
        ratio = 1e12,
        symbol = "TB",
        aliases = ["terabyte"],
        abbreviations = ["tb"],
        tags = [Terabyte, TB]
    )]
    Terabytes,
    /// Tebibyte (`1024⁴ B`).
    #[unit(
        ratio = 1_099_511_627_776.0,
        symbol = "TiB",
        aliases = ["tebibyte"],
        abbreviations = ["tib"],
        tags = [Tebibyte, TiB]
    )]
    Tebibytes,
    /// Petabyte (`1000⁵ B`).
    #[unit(
        ratio = 1e15,
        symbol = "PB",
        aliases = ["petabyte"],
        abbreviations = ["pb"],
        tags = [Petabyte, PB]
    )]
    Petabytes,
    /// Pebibyte (`1024⁵ B`).
    #[unit(
        ratio = 1_125_899_906_842_624.0,
        symbol = "PiB",
        aliases = ["pebibyte"],
        abbreviations = ["pib"],
        tags = [Pebibyte, PiB]
    )]
    Pebibytes,
}

/// A quantity of data.
pub type Data = Quantity<DataUnit>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{QuantityError, Unit};
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn decimal_and_binary_prefixes() {
        assert_eq!(1.kb(), 1000.bytes());
        assert_eq!(1.kib(), 1024.bytes());
        assert_eq!(1.mib(), 1024.kib());
        assert_eq!(1.gib(), 1024.mib());
        assert_eq!(1.tib(), 1024.gib());
        assert_eq!(1.pib(), 1024.tib());
        assert_eq!(1.pb(), 1000.tb());
        assert_eq!(1.gb(), 1_000_000.kb());
    }

    #[test]
    fn bits_and_bytes() {
        assert_eq!(8.bits(), 1.byte());
        assert_relative_eq!(1.kb().to(DataUnit::Bits).value(), 8_000.0, max_relative = 1e-12);
    }

    #[test]
    fn decimal_is_smaller_than_binary() {
        assert!(1.kb() < 1.kib());
        assert!(1.mb() < 1.mib());
        assert!(1.tib() > 1.tb());
    }

    #[test]
    fn compact_display() {
        assert_eq!(1.kb().to_string(), "1KB");
        assert_eq!(1.5.kib().to_string(), "1.5KiB");
        assert_eq!(8.bits().to_string(), "8b");
        assert_eq!(512.bytes().to_string(), "512B");
        assert_eq!(2.gigabytes().to_string(), "2GB");
        assert_eq!(DataUnit::Mebibytes.to_string(), "MiB");
    }

    #[test]
    fn symbols_are_case_sensitive() {
        assert_eq!("b".parse::<DataUnit>().unwrap(), DataUnit::Bits);
        assert_eq!("B".parse::<DataUnit>().unwrap(), DataUnit::Bytes);
        assert_eq!("KiB".parse::<DataUnit>().unwrap(), DataUnit::Kibibytes);
        assert_eq!("kib".parse::<DataUnit>().unwrap(), DataUnit::Kibibytes);
        assert_eq!(DataUnit::KiB, DataUnit::Kibibytes);
    }

    #[test]
    fn case_variants_of_symbols_are_rejected() {
        for spelling in ["Kb", "kB", "Mb", "mB", "KIB", "Gb"] {
            let err = spelling.parse::<DataUnit>().unwrap_err();
            assert_eq!(
                err,
                QuantityError::UnknownUnit {
                    dimension: "data",
                    name: spelling.into()
                },
                "{spelling}"
            );
        }
    }

    #[test]
    fn words_ignore_case() {
        assert_eq!("Megabytes".parse::<DataUnit>().unwrap(), DataUnit::Megabytes);
        assert_eq!("KILOBYTE".parse::<DataUnit>().unwrap(), DataUnit::Kilobytes);
        assert_eq!("Bits".parse::<DataUnit>().unwrap(), DataUnit::Bits);
    }

    #[test]
    fn compact_flag() {
        assert!(DataUnit::COMPACT);
        assert_eq!(DataUnit::BASE, DataUnit::Bytes);
        assert_eq!(DataUnit::ALL.len(), 12);
    }

    proptest! {
        #[test]
        fn prop_roundtrip_any_pair(
            v in 0.0..1e15f64,
            from in proptest::sample::select(DataUnit::ALL),
            to in proptest::sample::select(DataUnit::ALL)
        ) {
            let original = Data::new(v, from);
            prop_assert!(original.to(to).to(from) == original);
        }
    }
}
