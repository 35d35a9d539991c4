//! # Location Entity
//!
//! A shipment origin or destination address.
//!
//! Locations support partial construction: the simplified setup path only
//! knows a city and state, while the full path also carries country and
//! postal code. City and state are always required.
//!
//! # Examples
//!
//! ```
//! use parcel_rates::domain::entities::location::Location;
//!
//! let full = Location::new("US", "CA", "Beverly Hills", "90210").unwrap();
//! let partial = Location::city_state("Chicago", "IL").unwrap();
//!
//! assert_eq!(partial.to_string(), "Chicago, IL");
//! assert_eq!(full.postal_code(), Some("90210"));
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An address or partial address.
///
/// Immutable; renders as `"City, State"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// ISO country code, if known.
    country: Option<String>,
    /// State or region.
    state: String,
    /// City name.
    city: String,
    /// Postal code, if known.
    postal_code: Option<String>,
}

impl Location {
    /// Creates a fully specified location.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidLocation`] if city or state is blank.
    pub fn new(
        country: impl Into<String>,
        state: impl Into<String>,
        city: impl Into<String>,
        postal_code: impl Into<String>,
    ) -> DomainResult<Self> {
        Self::build(
            Some(country.into()),
            state.into(),
            city.into(),
            Some(postal_code.into()),
        )
    }

    /// Creates a partial location from city and state only.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidLocation`] if city or state is blank.
    pub fn city_state(city: impl Into<String>, state: impl Into<String>) -> DomainResult<Self> {
        Self::build(None, state.into(), city.into(), None)
    }

    fn build(
        country: Option<String>,
        state: String,
        city: String,
        postal_code: Option<String>,
    ) -> DomainResult<Self> {
        if city.trim().is_empty() {
            return Err(DomainError::invalid_location("city is required"));
        }
        if state.trim().is_empty() {
            return Err(DomainError::invalid_location("state is required"));
        }
        Ok(Self {
            country,
            state,
            city,
            postal_code,
        })
    }

    /// Returns the country code, if known.
    #[inline]
    #[must_use]
    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    /// Returns the state or region.
    #[inline]
    #[must_use]
    pub fn state(&self) -> &str {
        &self.state
    }

    /// Returns the city.
    #[inline]
    #[must_use]
    pub fn city(&self) -> &str {
        &self.city
    }

    /// Returns the postal code, if known.
    #[inline]
    #[must_use]
    pub fn postal_code(&self) -> Option<&str> {
        self.postal_code.as_deref()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.city, self.state)
    }
}
