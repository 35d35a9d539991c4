//! # Dimensions Value Object
//!
//! Ordered length/width/height triple for a package.

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::units::UnitSystem;
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Package dimensions as an ordered `(length, width, height)` triple.
///
/// All three measurements are non-negative and expressed in the linear unit
/// of the tagged system (inches for imperial, centimetres for metric).
///
/// # Examples
///
/// ```
/// use parcel_rates::domain::value_objects::dimensions::Dimensions;
/// use parcel_rates::domain::value_objects::units::UnitSystem;
///
/// let dims = Dimensions::new(12.0, 12.0, 12.0, UnitSystem::Imperial).unwrap();
/// assert_eq!(dims.to_string(), "12x12x12");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    length: Decimal,
    width: Decimal,
    height: Decimal,
    system: UnitSystem,
}

impl Dimensions {
    /// Creates dimensions from raw numbers.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidDimensions`] if any measurement is
    /// negative or not a finite number.
    pub fn new(length: f64, width: f64, height: f64, system: UnitSystem) -> DomainResult<Self> {
        let length = Self::side("length", length)?;
        let width = Self::side("width", width)?;
        let height = Self::side("height", height)?;
        Ok(Self {
            length,
            width,
            height,
            system,
        })
    }

    /// Zero-sized dimensions, for setup paths that only know a weight.
    #[must_use]
    pub const fn zero(system: UnitSystem) -> Self {
        Self {
            length: Decimal::ZERO,
            width: Decimal::ZERO,
            height: Decimal::ZERO,
            system,
        }
    }

    fn side(name: &str, value: f64) -> DomainResult<Decimal> {
        let value = Decimal::from_f64(value).ok_or_else(|| {
            DomainError::invalid_dimensions(format!("{name} is not a finite number: {value}"))
        })?;
        if value.is_sign_negative() && !value.is_zero() {
            return Err(DomainError::invalid_dimensions(format!(
                "{name} cannot be negative: {value}"
            )));
        }
        Ok(value.normalize())
    }

    /// Returns the length.
    #[inline]
    #[must_use]
    pub fn length(&self) -> Decimal {
        self.length
    }

    /// Returns the width.
    #[inline]
    #[must_use]
    pub fn width(&self) -> Decimal {
        self.width
    }

    /// Returns the height.
    #[inline]
    #[must_use]
    pub fn height(&self) -> Decimal {
        self.height
    }

    /// Returns the measurement system.
    #[inline]
    #[must_use]
    pub fn system(&self) -> UnitSystem {
        self.system
    }

    /// Returns the ordered `(length, width, height)` triple.
    #[must_use]
    pub fn as_triple(&self) -> (Decimal, Decimal, Decimal) {
        (self.length, self.width, self.height)
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.length, self.width, self.height)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn triple_preserves_order() {
        let dims = Dimensions::new(1.0, 2.0, 3.0, UnitSystem::Metric).unwrap();
        assert_eq!(
            dims.as_triple(),
            (Decimal::from(1), Decimal::from(2), Decimal::from(3))
        );
    }

    #[test]
    fn negative_side_is_rejected() {
        let err = Dimensions::new(1.0, -2.0, 3.0, UnitSystem::Metric).unwrap_err();
        assert!(err.to_string().contains("width"));
    }

    #[test]
    fn non_finite_side_is_rejected() {
        assert!(Dimensions::new(f64::NAN, 1.0, 1.0, UnitSystem::Metric).is_err());
    }

    #[test]
    fn zero_dimensions() {
        let dims = Dimensions::zero(UnitSystem::Metric);
        assert_eq!(dims.to_string(), "0x0x0");
        assert_eq!(dims.system(), UnitSystem::Metric);
    }
}
