//! # Shipment Request
//!
//! The façade entity for quoting a shipment.
//!
//! A [`ShipmentRequest`] owns one [`Package`] and two [`Location`]s. It can
//! be built three ways:
//!
//! - [`ShipmentRequest::new`] with fully constructed parts (always succeeds)
//! - [`ShipmentRequest::setup`] from a raw weight and two locations,
//!   defaulting units to metric grams
//! - [`ShipmentRequest::builder`], whose `build()` fails hard with a
//!   [`SetupError`] when a required input is missing — a partially-built
//!   shipment is never returned
//!
//! Quoting operations (`quote_for`, `quote_for_many`) are provided by the
//! application layer; see
//! [`QuoteAggregator`](crate::application::services::quote_aggregation::QuoteAggregator).
//!
//! # Examples
//!
//! ```
//! use parcel_rates::domain::entities::location::Location;
//! use parcel_rates::domain::entities::shipment::ShipmentRequest;
//!
//! let shipment = ShipmentRequest::setup(
//!     8.0,
//!     Location::city_state("Chicago", "IL").unwrap(),
//!     Location::city_state("Seattle", "Wa").unwrap(),
//! )
//! .unwrap();
//!
//! assert_eq!(shipment.origin().to_string(), "Chicago, IL");
//! assert_eq!(shipment.package().weight().to_string(), "8 grams");
//! ```

use crate::domain::entities::location::Location;
use crate::domain::entities::package::Package;
use crate::domain::errors::{SetupError, SetupResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A shipment to be quoted: one package, an origin, and a destination.
///
/// Owns its parts exclusively (value semantics, no sharing); quoting the
/// same request twice observes identical state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentRequest {
    package: Package,
    origin: Location,
    destination: Location,
}

impl ShipmentRequest {
    /// Creates a shipment request from fully constructed parts.
    #[must_use]
    pub fn new(package: Package, origin: Location, destination: Location) -> Self {
        Self {
            package,
            origin,
            destination,
        }
    }

    /// Convenience factory: raw weight plus two (possibly partial)
    /// locations. Units default to metric grams; dimensions default to
    /// zero.
    ///
    /// # Errors
    ///
    /// Returns a [`SetupError`] if the weight is negative or not finite.
    pub fn setup(weight: f64, origin: Location, destination: Location) -> SetupResult<Self> {
        let package = Package::metric_grams(weight)?;
        Ok(Self::new(package, origin, destination))
    }

    /// Returns a setup builder for callers assembling inputs piecemeal.
    #[must_use]
    pub fn builder() -> ShipmentSetup {
        ShipmentSetup::default()
    }

    /// Returns the package.
    #[inline]
    #[must_use]
    pub fn package(&self) -> &Package {
        &self.package
    }

    /// Returns the origin location.
    #[inline]
    #[must_use]
    pub fn origin(&self) -> &Location {
        &self.origin
    }

    /// Returns the destination location.
    #[inline]
    #[must_use]
    pub fn destination(&self) -> &Location {
        &self.destination
    }
}

impl fmt::Display for ShipmentRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} ({})",
            self.origin,
            self.destination,
            self.package.weight()
        )
    }
}

/// Builder for [`ShipmentRequest`] with hard validation at `build()`.
///
/// Each required input that was never supplied produces its own
/// [`SetupError`] variant, checked in weight / origin / destination order.
#[derive(Debug, Clone, Default)]
pub struct ShipmentSetup {
    weight: Option<f64>,
    origin: Option<Location>,
    destination: Option<Location>,
}

impl ShipmentSetup {
    /// Sets the package weight (metric grams).
    #[must_use]
    pub fn weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Sets the origin location.
    #[must_use]
    pub fn origin(mut self, origin: Location) -> Self {
        self.origin = Some(origin);
        self
    }

    /// Sets the destination location.
    #[must_use]
    pub fn destination(mut self, destination: Location) -> Self {
        self.destination = Some(destination);
        self
    }

    /// Builds the shipment request.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::MissingWeight`], [`SetupError::MissingOrigin`],
    /// or [`SetupError::MissingDestination`] for an unsupplied input, or a
    /// wrapped [`DomainError`](crate::domain::errors::DomainError) if a
    /// supplied input fails validation.
    pub fn build(self) -> SetupResult<ShipmentRequest> {
        let weight = self.weight.ok_or(SetupError::MissingWeight)?;
        let origin = self.origin.ok_or(SetupError::MissingOrigin)?;
        let destination = self.destination.ok_or(SetupError::MissingDestination)?;
        ShipmentRequest::setup(weight, origin, destination)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::value_objects::units::UnitSystem;

    fn chicago() -> Location {
        Location::city_state("Chicago", "IL").unwrap()
    }

    fn seattle() -> Location {
        Location::city_state("Seattle", "Wa").unwrap()
    }

    #[test]
    fn new_with_full_parts() {
        let package = Package::imperial(7.5 * 16.0, [12.0, 12.0, 12.0]).unwrap();
        let origin = Location::new("US", "CA", "Beverly Hills", "90210").unwrap();
        let destination = Location::new("US", "WA", "Seattle", "98101").unwrap();

        let shipment = ShipmentRequest::new(package, origin, destination);
        assert_eq!(shipment.package().units(), UnitSystem::Imperial);
        assert_eq!(shipment.origin().to_string(), "Beverly Hills, CA");
    }

    #[test]
    fn setup_defaults_to_metric_grams() {
        let shipment = ShipmentRequest::setup(8.0, chicago(), seattle()).unwrap();
        assert_eq!(shipment.origin().to_string(), "Chicago, IL");
        assert_eq!(shipment.destination().to_string(), "Seattle, Wa");
        assert_eq!(shipment.package().weight().to_string(), "8 grams");
    }

    #[test]
    fn setup_rejects_bad_weight() {
        let err = ShipmentRequest::setup(-8.0, chicago(), seattle()).unwrap_err();
        assert!(matches!(err, SetupError::Invalid(_)));
    }

    #[test]
    fn builder_with_all_inputs() {
        let shipment = ShipmentRequest::builder()
            .weight(8.0)
            .origin(chicago())
            .destination(seattle())
            .build()
            .unwrap();
        assert_eq!(shipment.package().weight().to_string(), "8 grams");
    }

    #[test]
    fn builder_missing_destination_fails_hard() {
        let err = ShipmentRequest::builder()
            .weight(8.0)
            .origin(chicago())
            .build()
            .unwrap_err();
        assert_eq!(err, SetupError::MissingDestination);
    }

    #[test]
    fn builder_missing_weight_fails_first() {
        let err = ShipmentRequest::builder()
            .origin(chicago())
            .destination(seattle())
            .build()
            .unwrap_err();
        assert_eq!(err, SetupError::MissingWeight);
    }

    #[test]
    fn builder_missing_origin() {
        let err = ShipmentRequest::builder()
            .weight(8.0)
            .destination(seattle())
            .build()
            .unwrap_err();
        assert_eq!(err, SetupError::MissingOrigin);
    }

    #[test]
    fn display() {
        let shipment = ShipmentRequest::setup(8.0, chicago(), seattle()).unwrap();
        assert_eq!(shipment.to_string(), "Chicago, IL -> Seattle, Wa (8 grams)");
    }
}
