//! # Measurement Units
//!
//! Unit-system enumerations for package measurements.
//!
//! This module provides the unit vocabulary used by packages:
//!
//! - [`UnitSystem`] - Imperial or Metric measurement system
//! - [`WeightUnit`] - Weight unit derived from the system
//!
//! All enums implement `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`,
//! `Display`, `FromStr`, and Serde traits.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when parsing an enum from an unrecognized string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized {kind}: '{value}'")]
pub struct ParseEnumError {
    /// The kind of enum being parsed.
    kind: &'static str,
    /// The rejected input.
    value: String,
}

impl ParseEnumError {
    pub(crate) fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    /// Returns the rejected input value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Measurement system for a package.
///
/// # Examples
///
/// ```
/// use parcel_rates::domain::value_objects::units::{UnitSystem, WeightUnit};
///
/// assert_eq!(UnitSystem::Metric.weight_unit(), WeightUnit::Grams);
/// assert_eq!(UnitSystem::Imperial.to_string(), "imperial");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// Imperial units (ounces, inches).
    Imperial,
    /// Metric units (grams, centimetres).
    Metric,
}

impl UnitSystem {
    /// Returns the weight unit for this system.
    #[inline]
    #[must_use]
    pub const fn weight_unit(self) -> WeightUnit {
        match self {
            Self::Imperial => WeightUnit::Ounces,
            Self::Metric => WeightUnit::Grams,
        }
    }

    /// Returns true if this is the metric system.
    #[inline]
    #[must_use]
    pub const fn is_metric(self) -> bool {
        matches!(self, Self::Metric)
    }
}

impl Default for UnitSystem {
    /// Metric is the default system for simplified setup paths.
    fn default() -> Self {
        Self::Metric
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Imperial => write!(f, "imperial"),
            Self::Metric => write!(f, "metric"),
        }
    }
}

impl FromStr for UnitSystem {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "imperial" => Ok(Self::Imperial),
            "metric" => Ok(Self::Metric),
            other => Err(ParseEnumError::new("unit system", other)),
        }
    }
}

/// Unit a weight value is expressed in.
///
/// # Examples
///
/// ```
/// use parcel_rates::domain::value_objects::units::WeightUnit;
///
/// assert_eq!(WeightUnit::Grams.to_string(), "grams");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    /// Imperial ounces.
    Ounces,
    /// Metric grams.
    Grams,
}

impl WeightUnit {
    /// Returns the system this unit belongs to.
    #[inline]
    #[must_use]
    pub const fn system(self) -> UnitSystem {
        match self {
            Self::Ounces => UnitSystem::Imperial,
            Self::Grams => UnitSystem::Metric,
        }
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ounces => write!(f, "ounces"),
            Self::Grams => write!(f, "grams"),
        }
    }
}

impl FromStr for WeightUnit {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ounces" => Ok(Self::Ounces),
            "grams" => Ok(Self::Grams),
            other => Err(ParseEnumError::new("weight unit", other)),
        }
    }
}
