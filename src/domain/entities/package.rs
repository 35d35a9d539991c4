//! # Package Entity
//!
//! The physical parcel being shipped.
//!
//! A [`Package`] is a value object: weight, dimensions, and unit system,
//! immutable once constructed. The constructor enforces that weight and
//! dimensions agree with the declared system.
//!
//! # Examples
//!
//! ```
//! use parcel_rates::domain::entities::package::Package;
//!
//! // 7.5 lb parcel, 12x12x12 inches
//! let package = Package::imperial(7.5 * 16.0, [12.0, 12.0, 12.0]).unwrap();
//! assert_eq!(package.weight().to_string(), "120 ounces");
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::dimensions::Dimensions;
use crate::domain::value_objects::units::UnitSystem;
use crate::domain::value_objects::weight::Weight;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A parcel description: weight, dimensions, and unit system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    /// The parcel weight.
    weight: Weight,
    /// The parcel dimensions.
    dimensions: Dimensions,
    /// The measurement system both of the above are expressed in.
    units: UnitSystem,
}

impl Package {
    /// Creates a package, validating unit agreement.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::UnitMismatch`] if the weight or dimensions
    /// are expressed in a different system than `units`.
    pub fn new(weight: Weight, dimensions: Dimensions, units: UnitSystem) -> DomainResult<Self> {
        if weight.system() != units {
            return Err(DomainError::unit_mismatch(format!(
                "weight in {} but package is {units}",
                weight.unit()
            )));
        }
        if dimensions.system() != units {
            return Err(DomainError::unit_mismatch(format!(
                "dimensions in {} but package is {units}",
                dimensions.system()
            )));
        }
        Ok(Self {
            weight,
            dimensions,
            units,
        })
    }

    /// Creates an imperial package from a weight in ounces and dimensions
    /// in inches.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] if the weight or any dimension is negative
    /// or not finite.
    pub fn imperial(weight_ounces: f64, dimensions: [f64; 3]) -> DomainResult<Self> {
        let [length, width, height] = dimensions;
        Self::new(
            Weight::ounces(weight_ounces)?,
            Dimensions::new(length, width, height, UnitSystem::Imperial)?,
            UnitSystem::Imperial,
        )
    }

    /// Creates a metric package from a weight in grams, with zero-sized
    /// dimensions. Used by the simplified shipment setup path.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] if the weight is negative or not finite.
    pub fn metric_grams(weight_grams: f64) -> DomainResult<Self> {
        Self::new(
            Weight::grams(weight_grams)?,
            Dimensions::zero(UnitSystem::Metric),
            UnitSystem::Metric,
        )
    }

    /// Returns the weight.
    #[inline]
    #[must_use]
    pub fn weight(&self) -> &Weight {
        &self.weight
    }

    /// Returns the dimensions.
    #[inline]
    #[must_use]
    pub fn dimensions(&self) -> &Dimensions {
        &self.dimensions
    }

    /// Returns the unit system.
    #[inline]
    #[must_use]
    pub fn units(&self) -> UnitSystem {
        self.units
    }
}

impl fmt::Display for Package {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Package({}, {} {})",
            self.weight, self.dimensions, self.units
        )
    }
}
