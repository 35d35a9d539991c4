//! # Application Errors
//!
//! Error types for the aggregation layer.
//!
//! Only genuine failures live here. "Carrier not offered" is *not* an
//! error — the aggregator signals it as `None` so callers can distinguish
//! no-data from failure.

use crate::domain::value_objects::carrier::Carrier;
use crate::infrastructure::carriers::error::CarrierError;
use thiserror::Error;

/// Error type for single-carrier quote operations.
#[derive(Debug, Clone, Error)]
pub enum AggregationError {
    /// The carrier client or normalizer failed.
    #[error("{carrier}: {source}")]
    Carrier {
        /// The carrier that failed.
        carrier: Carrier,
        /// The underlying failure.
        #[source]
        source: CarrierError,
    },

    /// A fan-out task failed to complete.
    #[error("{carrier}: task failed: {message}")]
    TaskFailed {
        /// The carrier whose task failed.
        carrier: Carrier,
        /// Join error description.
        message: String,
    },
}

impl AggregationError {
    /// Creates a carrier failure.
    #[must_use]
    pub fn carrier(carrier: Carrier, source: CarrierError) -> Self {
        Self::Carrier { carrier, source }
    }

    /// Creates a task failure.
    #[must_use]
    pub fn task_failed(carrier: Carrier, message: impl Into<String>) -> Self {
        Self::TaskFailed {
            carrier,
            message: message.into(),
        }
    }

    /// Returns the carrier this failure belongs to.
    #[must_use]
    pub fn carrier_id(&self) -> Carrier {
        match self {
            Self::Carrier { carrier, .. } | Self::TaskFailed { carrier, .. } => *carrier,
        }
    }
}

/// Result type for aggregation operations.
pub type AggregationResult<T> = Result<T, AggregationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carrier_failure_names_the_carrier() {
        let err = AggregationError::carrier(Carrier::Ups, CarrierError::timeout("no response"));
        assert!(err.to_string().starts_with("ups:"));
        assert_eq!(err.carrier_id(), Carrier::Ups);
    }

    #[test]
    fn task_failure_display() {
        let err = AggregationError::task_failed(Carrier::Usps, "cancelled");
        assert!(err.to_string().contains("task failed"));
        assert_eq!(err.carrier_id(), Carrier::Usps);
    }
}
