//! # Weight Value Object
//!
//! A validated, unit-tagged package weight.
//!
//! # Examples
//!
//! ```
//! use parcel_rates::domain::value_objects::weight::Weight;
//!
//! let weight = Weight::grams(8.0).unwrap();
//! assert_eq!(weight.to_string(), "8 grams");
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::units::{UnitSystem, WeightUnit};
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A non-negative weight tagged with its unit.
///
/// Immutable once constructed. Displays as `"<value> <unit>"`,
/// e.g. `"8 grams"` or `"120 ounces"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weight {
    /// The weight magnitude.
    value: Decimal,
    /// The unit the magnitude is expressed in.
    unit: WeightUnit,
}

impl Weight {
    /// Creates a weight from a raw number and unit.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidWeight`] if the value is negative or
    /// not a finite number.
    pub fn new(value: f64, unit: WeightUnit) -> DomainResult<Self> {
        let value = Decimal::from_f64(value)
            .ok_or_else(|| DomainError::invalid_weight(format!("not a finite number: {value}")))?;
        Self::from_decimal(value, unit)
    }

    /// Creates a weight from a decimal value and unit.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidWeight`] if the value is negative.
    pub fn from_decimal(value: Decimal, unit: WeightUnit) -> DomainResult<Self> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(DomainError::invalid_weight(format!(
                "weight cannot be negative: {value}"
            )));
        }
        Ok(Self {
            value: value.normalize(),
            unit,
        })
    }

    /// Creates a metric weight in grams.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidWeight`] if the value is negative or
    /// not a finite number.
    pub fn grams(value: f64) -> DomainResult<Self> {
        Self::new(value, WeightUnit::Grams)
    }

    /// Creates an imperial weight in ounces.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidWeight`] if the value is negative or
    /// not a finite number.
    pub fn ounces(value: f64) -> DomainResult<Self> {
        Self::new(value, WeightUnit::Ounces)
    }

    /// Returns the weight magnitude.
    #[inline]
    #[must_use]
    pub fn value(&self) -> Decimal {
        self.value
    }

    /// Returns the unit.
    #[inline]
    #[must_use]
    pub fn unit(&self) -> WeightUnit {
        self.unit
    }

    /// Returns the measurement system this weight belongs to.
    #[inline]
    #[must_use]
    pub fn system(&self) -> UnitSystem {
        self.unit.system()
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn renders_with_unit_suffix() {
        assert_eq!(Weight::grams(8.0).unwrap().to_string(), "8 grams");
        assert_eq!(
            Weight::ounces(7.5 * 16.0).unwrap().to_string(),
            "120 ounces"
        );
    }

    #[test]
    fn fractional_values_keep_precision() {
        assert_eq!(Weight::ounces(7.5).unwrap().to_string(), "7.5 ounces");
    }

    #[test]
    fn negative_is_rejected() {
        let err = Weight::grams(-1.0).unwrap_err();
        assert!(matches!(err, DomainError::InvalidWeight(_)));
    }

    #[test]
    fn non_finite_is_rejected() {
        assert!(Weight::grams(f64::NAN).is_err());
        assert!(Weight::grams(f64::INFINITY).is_err());
    }

    #[test]
    fn zero_is_allowed() {
        let weight = Weight::grams(0.0).unwrap();
        assert_eq!(weight.value(), Decimal::ZERO);
    }

    #[test]
    fn system_follows_unit() {
        assert_eq!(Weight::grams(1.0).unwrap().system(), UnitSystem::Metric);
        assert_eq!(Weight::ounces(1.0).unwrap().system(), UnitSystem::Imperial);
    }
}
