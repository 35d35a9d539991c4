//! # Quote Entity
//!
//! The canonical shipping quote record.
//!
//! Every carrier response, whatever its raw shape, converges to this one
//! type at the normalization boundary: exactly two fields, a service name
//! and an integer cost. Quotes are transient — produced per request, never
//! persisted.
//!
//! # Examples
//!
//! ```
//! use parcel_rates::domain::entities::quote::Quote;
//! use parcel_rates::domain::value_objects::money::Cents;
//!
//! let quote = Quote::new("UPS Ground", Cents::new(1350)).unwrap();
//! assert_eq!(quote.name(), "UPS Ground");
//! assert_eq!(quote.cost().get(), 1350);
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::money::Cents;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A priced shipping option from a carrier.
///
/// # Invariants
///
/// - Exactly two fields: `name` and `cost`
/// - `name` is never empty
/// - `cost` is a non-negative integer in the smallest currency unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// The carrier's service name, e.g. `"UPS Ground"`.
    name: String,
    /// The quoted cost in the smallest currency unit.
    cost: Cents,
}

impl Quote {
    /// Creates a quote with validation.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidQuote`] if the name is blank.
    pub fn new(name: impl Into<String>, cost: Cents) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::invalid_quote("service name is required"));
        }
        Ok(Self { name, cost })
    }

    /// Returns the service name.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the cost.
    #[inline]
    #[must_use]
    pub fn cost(&self) -> Cents {
        self.cost
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.cost)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn new_creates_quote() {
        let quote = Quote::new("USPS Priority Mail", Cents::new(905)).unwrap();
        assert_eq!(quote.name(), "USPS Priority Mail");
        assert_eq!(quote.cost(), Cents::new(905));
    }

    #[test]
    fn blank_name_is_rejected() {
        assert!(Quote::new("", Cents::new(100)).is_err());
        assert!(Quote::new("   ", Cents::new(100)).is_err());
    }

    #[test]
    fn serializes_to_exactly_two_fields() {
        let quote = Quote::new("UPS Ground", Cents::new(1350)).unwrap();
        let value = serde_json::to_value(&quote).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert_eq!(object.get("name").unwrap(), "UPS Ground");
        assert_eq!(object.get("cost").unwrap(), 1350);
    }

    #[test]
    fn display() {
        let quote = Quote::new("UPS Ground", Cents::new(1350)).unwrap();
        assert_eq!(quote.to_string(), "UPS Ground: 1350");
    }
}
