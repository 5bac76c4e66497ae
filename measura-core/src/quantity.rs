//! Quantity type and its implementations.

use crate::unit::Unit;
use crate::QuantityError;
use core::cmp::Ordering;
use core::fmt::{Display, Formatter, Result as FmtResult};
use core::iter::Sum;
use core::ops::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Relative tolerance used by `==` (and by the `Equal` case of ordering) on quantities.
///
/// Two quantities are equal when their magnitudes, once both are expressed in the left operand's unit, differ by at
/// most this fraction of the larger one. Comparing in the operand's own unit rather than the base unit keeps
/// magnitudes near the ends of the `f64` range from overflowing to infinity or flushing to zero.
/// It absorbs the rounding of chained coefficient products (`1 mi == 5280 ft == 1760 yd`) while still telling
/// apart values that differ in the twelfth significant digit.
pub const RELATIVE_EPSILON: f64 = 1e-12;

/// A magnitude tagged with a unit of one domain.
///
/// `Quantity<U>` pairs an `f64` with a value of the unit enumeration `U`. The domain is part of the type, so adding a
/// length to a weight does not compile, while the unit inside a domain is a runtime value: operands expressed in
/// different units of the same domain combine freely.
///
/// Quantities are immutable values; every operation returns a new one.
///
/// # Examples
///
/// ```rust
/// use measura_core::length::LengthUnit;
/// use measura_core::Quantity;
///
/// let a = Quantity::new(1.0, LengthUnit::Feet);
/// let b = Quantity::new(6.0, LengthUnit::Inches);
/// let sum = a + b;
/// assert_eq!(sum.unit(), LengthUnit::Feet);
/// assert!((sum.value() - 1.5).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Quantity<U: Unit> {
    value: f64,
    unit: U,
}

impl<U: Unit> Quantity<U> {
    /// Creates a new quantity with the given magnitude and unit.
    ///
    /// ```rust
    /// use measura_core::length::{Length, LengthUnit};
    /// let d = Length::new(3.0, LengthUnit::Meters);
    /// assert_eq!(d.value(), 3.0);
    /// ```
    #[inline]
    pub const fn new(value: f64, unit: U) -> Self {
        Self { value, unit }
    }

    /// A zero magnitude in `unit`; the identity for addition.
    #[inline]
    pub const fn zero(unit: U) -> Self {
        Self::new(0.0, unit)
    }

    /// Creates a quantity from a unit name, symbol or alias.
    ///
    /// ```rust
    /// use measura_core::length::{Length, LengthUnit};
    /// let d = Length::parse(50.0, "mi").unwrap();
    /// assert_eq!(d.unit(), LengthUnit::Miles);
    /// assert!(Length::parse(1.0, "furlongs").is_err());
    /// ```
    pub fn parse(value: f64, unit: &str) -> Result<Self, QuantityError> {
        Ok(Self::new(value, unit.parse()?))
    }

    /// Returns the raw magnitude.
    #[inline]
    pub const fn value(self) -> f64 {
        self.value
    }

    /// Returns the unit tag.
    #[inline]
    pub const fn unit(self) -> U {
        self.unit
    }

    /// Converts this quantity to another unit of the same domain.
    ///
    /// ```rust
    /// use measura_core::length::{Length, LengthUnit};
    /// let km = Length::new(1.25, LengthUnit::Kilometers);
    /// let m = km.to(LengthUnit::Meters);
    /// assert!((m.value() - 1250.0).abs() < 1e-12);
    /// ```
    #[inline]
    pub fn to(self, target: U) -> Self {
        Self::new(self.value * self.unit.factor_to(target), target)
    }

    /// Converts this quantity to the domain's base unit.
    #[inline]
    pub fn to_base(self) -> Self {
        self.to(U::BASE)
    }

    /// Magnitude expressed in the domain's base unit.
    #[inline]
    pub fn base_value(self) -> f64 {
        self.value * self.unit.ratio()
    }

    /// Returns the absolute value, keeping the unit.
    #[inline]
    pub fn abs(self) -> Self {
        Self::new(fabs(self.value), self.unit)
    }

    /// Whether the magnitude is NaN.
    #[inline]
    pub fn is_nan(self) -> bool {
        self.value.is_nan()
    }

    /// Returns the smaller of two quantities, in its own unit.
    pub fn min(self, other: Self) -> Self {
        if other < self {
            other
        } else {
            self
        }
    }

    /// Returns the larger of two quantities, in its own unit.
    pub fn max(self, other: Self) -> Self {
        if other > self {
            other
        } else {
            self
        }
    }

    /// Tolerant comparison with a caller-chosen relative tolerance.
    ///
    /// `==` is `is_close(other, RELATIVE_EPSILON)`. `other` is converted into `self`'s unit first.
    pub fn is_close(self, other: Self, max_relative: f64) -> bool {
        relative_eq(self.value, other.to(self.unit).value, max_relative)
    }

    /// Divides the magnitude by a scalar.
    ///
    /// # Errors
    ///
    /// [`QuantityError::DivisionByZero`] when `divisor` is zero.
    pub fn try_div(self, divisor: f64) -> Result<Self, QuantityError> {
        if divisor == 0.0 {
            log::debug!("rejected division of {:?} by zero", self);
            return Err(QuantityError::DivisionByZero);
        }
        Ok(Self::new(self.value / divisor, self.unit))
    }

    /// Dimensionless ratio `self / other`, converting `other` into `self`'s unit first.
    ///
    /// ```rust
    /// use measura_core::length::{Length, LengthUnit};
    /// let yard = Length::new(1.0, LengthUnit::Yards);
    /// let foot = Length::new(1.0, LengthUnit::Feet);
    /// assert!((yard.ratio(foot).unwrap() - 3.0).abs() < 1e-12);
    /// ```
    ///
    /// # Errors
    ///
    /// [`QuantityError::DivisionByZero`] when `other` is zero.
    pub fn ratio(self, other: Self) -> Result<f64, QuantityError> {
        let divisor = other.to(self.unit).value;
        if divisor == 0.0 {
            log::debug!("rejected ratio of {:?} to a zero quantity", self);
            return Err(QuantityError::DivisionByZero);
        }
        Ok(self.value / divisor)
    }
}

#[inline]
fn fabs(x: f64) -> f64 {
    #[cfg(feature = "std")]
    {
        x.abs()
    }
    #[cfg(not(feature = "std"))]
    {
        libm::fabs(x)
    }
}

/// `|a - b| <= max(|a|, |b|) * max_relative`, with exact matches (including equal infinities) always equal.
fn relative_eq(a: f64, b: f64, max_relative: f64) -> bool {
    if a == b {
        return true;
    }
    let diff = fabs(a - b);
    if !diff.is_finite() {
        return false;
    }
    diff <= fabs(a).max(fabs(b)) * max_relative
}

// ─────────────────────────────────────────────────────────────────────────────
// Comparison
// ─────────────────────────────────────────────────────────────────────────────

impl<U: Unit> PartialEq for Quantity<U> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.is_close(*other, RELATIVE_EPSILON)
    }
}

impl<U: Unit> PartialOrd for Quantity<U> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            return Some(Ordering::Equal);
        }
        self.value.partial_cmp(&other.to(self.unit).value)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operator implementations
// ─────────────────────────────────────────────────────────────────────────────

impl<U: Unit> Add for Quantity<U> {
    type Output = Self;
    /// The result keeps the left operand's unit.
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.value + rhs.to(self.unit).value, self.unit)
    }
}

impl<U: Unit> AddAssign for Quantity<U> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<U: Unit> Sub for Quantity<U> {
    type Output = Self;
    /// The result keeps the left operand's unit.
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.value - rhs.to(self.unit).value, self.unit)
    }
}

impl<U: Unit> SubAssign for Quantity<U> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<U: Unit> Mul<f64> for Quantity<U> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.value * rhs, self.unit)
    }
}

impl<U: Unit> Mul<Quantity<U>> for f64 {
    type Output = Quantity<U>;
    #[inline]
    fn mul(self, rhs: Quantity<U>) -> Self::Output {
        rhs * self
    }
}

impl<U: Unit> MulAssign<f64> for Quantity<U> {
    #[inline]
    fn mul_assign(&mut self, rhs: f64) {
        self.value *= rhs;
    }
}

/// Scalar division is the one fallible operator: dividing by zero yields [`QuantityError::DivisionByZero`].
impl<U: Unit> Div<f64> for Quantity<U> {
    type Output = Result<Self, QuantityError>;
    #[inline]
    fn div(self, rhs: f64) -> Self::Output {
        self.try_div(rhs)
    }
}

impl<U: Unit> Neg for Quantity<U> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.value, self.unit)
    }
}

impl<U: Unit> Sum for Quantity<U> {
    /// Folds left to right, so the first element's unit wins. An empty sum is zero in the base unit.
    fn sum<I: Iterator<Item = Self>>(mut iter: I) -> Self {
        match iter.next() {
            Some(first) => iter.fold(first, |acc, q| acc + q),
            None => Self::zero(U::BASE),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Formatting
// ─────────────────────────────────────────────────────────────────────────────

impl<U: Unit> Display for Quantity<U> {
    /// `<value> <label>`, or `<value><symbol>` for compact domains. Precision flags apply to the value.
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.value, f)?;
        if U::COMPACT {
            f.write_str(self.unit.symbol())
        } else {
            write!(f, " {}", self.unit.label())
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────────────

/// Serializes as `{"magnitude": <f64>, "unit": "<canonical name>"}`.
#[cfg(feature = "serde")]
impl<U: Unit> Serialize for Quantity<U> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("Quantity", 2)?;
        state.serialize_field("magnitude", &self.value)?;
        state.serialize_field("unit", self.unit.name())?;
        state.end()
    }
}

/// Deserializes from `{"magnitude": <f64>, "unit": "<any accepted spelling>"}`; both fields are required.
#[cfg(feature = "serde")]
impl<'de, U: Unit> Deserialize<'de> for Quantity<U> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, MapAccess, Visitor};

        #[derive(Deserialize)]
        #[serde(field_identifier, rename_all = "lowercase")]
        enum Field {
            Magnitude,
            Unit,
        }

        struct QuantityVisitor<U>(core::marker::PhantomData<U>);

        impl<'de, U: Unit> Visitor<'de> for QuantityVisitor<U> {
            type Value = Quantity<U>;

            fn expecting(&self, formatter: &mut Formatter) -> FmtResult {
                write!(
                    formatter,
                    "struct Quantity with magnitude and {} unit fields",
                    U::DIMENSION
                )
            }

            fn visit_map<V>(self, mut map: V) -> Result<Quantity<U>, V::Error>
            where
                V: MapAccess<'de>,
            {
                let mut magnitude: Option<f64> = None;
                let mut unit: Option<U> = None;

                while let Some(key) = map.next_key()? {
                    match key {
                        Field::Magnitude => {
                            if magnitude.is_some() {
                                return Err(de::Error::duplicate_field("magnitude"));
                            }
                            magnitude = Some(map.next_value()?);
                        }
                        Field::Unit => {
                            if unit.is_some() {
                                return Err(de::Error::duplicate_field("unit"));
                            }
                            unit = Some(map.next_value_seed(UnitSeed::<U>(
                                core::marker::PhantomData,
                            ))?);
                        }
                    }
                }

                let magnitude = magnitude.ok_or_else(|| de::Error::missing_field("magnitude"))?;
                let unit = unit.ok_or_else(|| de::Error::missing_field("unit"))?;

                Ok(Quantity::new(magnitude, unit))
            }
        }

        deserializer.deserialize_struct(
            "Quantity",
            &["magnitude", "unit"],
            QuantityVisitor(core::marker::PhantomData),
        )
    }
}

/// Reads a unit from a string holding any of its accepted spellings.
///
/// Backs the derived `Deserialize` impl of every unit enumeration.
#[cfg(feature = "serde")]
pub(crate) fn deserialize_unit<'de, U, D>(deserializer: D) -> Result<U, D::Error>
where
    U: Unit,
    D: Deserializer<'de>,
{
    deserializer.deserialize_str(UnitVisitor::<U>(core::marker::PhantomData))
}

#[cfg(feature = "serde")]
struct UnitVisitor<U>(core::marker::PhantomData<U>);

#[cfg(feature = "serde")]
impl<'de, U: Unit> serde::de::Visitor<'de> for UnitVisitor<U> {
    type Value = U;

    fn expecting(&self, formatter: &mut Formatter) -> FmtResult {
        write!(formatter, "a {} unit name", U::DIMENSION)
    }

    fn visit_str<E>(self, v: &str) -> Result<U, E>
    where
        E: serde::de::Error,
    {
        v.parse().map_err(E::custom)
    }
}

#[cfg(feature = "serde")]
struct UnitSeed<U>(core::marker::PhantomData<U>);

#[cfg(feature = "serde")]
impl<'de, U: Unit> serde::de::DeserializeSeed<'de> for UnitSeed<U> {
    type Value = U;

    fn deserialize<D>(self, deserializer: D) -> Result<U, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserialize_unit(deserializer)
    }
}
