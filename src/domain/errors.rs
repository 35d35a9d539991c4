//! # Domain Errors
//!
//! Error types for domain object construction and validation.
//!
//! Two distinct failure channels live here:
//!
//! - [`DomainError`] - a value object or entity rejected its inputs
//! - [`SetupError`] - the shipment setup path was given too few or invalid
//!   inputs; this is a hard failure, a shipment can never be quoted without
//!   a weight and both locations
//!
//! Absence of a carrier is *not* an error and is therefore not represented
//! here; see the registry, which signals it as `None`.
//!
//! # Examples
//!
//! ```
//! use parcel_rates::domain::errors::{DomainError, SetupError};
//!
//! let err = DomainError::invalid_weight("weight cannot be negative");
//! assert!(err.to_string().contains("negative"));
//!
//! let err = SetupError::MissingDestination;
//! assert!(err.to_string().contains("destination"));
//! ```

use thiserror::Error;

/// Error type for domain object validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Weight value rejected.
    #[error("invalid weight: {0}")]
    InvalidWeight(String),

    /// Dimension value rejected.
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// Location field rejected or missing.
    #[error("invalid location: {0}")]
    InvalidLocation(String),

    /// Quote field rejected.
    #[error("invalid quote: {0}")]
    InvalidQuote(String),

    /// Monetary amount could not be represented as integer cents.
    #[error("invalid cost: {0}")]
    InvalidCost(String),

    /// Package parts disagree on their measurement system.
    #[error("unit mismatch: {0}")]
    UnitMismatch(String),
}

impl DomainError {
    /// Creates an invalid weight error.
    #[must_use]
    pub fn invalid_weight(message: impl Into<String>) -> Self {
        Self::InvalidWeight(message.into())
    }

    /// Creates an invalid dimensions error.
    #[must_use]
    pub fn invalid_dimensions(message: impl Into<String>) -> Self {
        Self::InvalidDimensions(message.into())
    }

    /// Creates an invalid location error.
    #[must_use]
    pub fn invalid_location(message: impl Into<String>) -> Self {
        Self::InvalidLocation(message.into())
    }

    /// Creates an invalid quote error.
    #[must_use]
    pub fn invalid_quote(message: impl Into<String>) -> Self {
        Self::InvalidQuote(message.into())
    }

    /// Creates an invalid cost error.
    #[must_use]
    pub fn invalid_cost(message: impl Into<String>) -> Self {
        Self::InvalidCost(message.into())
    }

    /// Creates a unit mismatch error.
    #[must_use]
    pub fn unit_mismatch(message: impl Into<String>) -> Self {
        Self::UnitMismatch(message.into())
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

/// Error type for the shipment setup path.
///
/// Raised when [`ShipmentRequest::setup`] or the setup builder is missing a
/// required input. A partially-built shipment is never returned.
///
/// [`ShipmentRequest::setup`]: crate::domain::entities::shipment::ShipmentRequest::setup
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    /// No weight was supplied.
    #[error("setup requires a package weight")]
    MissingWeight,

    /// No origin location was supplied.
    #[error("setup requires an origin location")]
    MissingOrigin,

    /// No destination location was supplied.
    #[error("setup requires a destination location")]
    MissingDestination,

    /// A supplied input failed domain validation.
    #[error(transparent)]
    Invalid(#[from] DomainError),
}

/// Result type for shipment setup.
pub type SetupResult<T> = Result<T, SetupError>;
