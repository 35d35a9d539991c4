//! # Carrier Errors
//!
//! Error types for carrier client operations.
//!
//! Every failure mode of a carrier backend is a typed [`CarrierError`]
//! variant — nothing is silently swallowed at this layer. The aggregation
//! layer decides what is fatal; here we only classify.
//!
//! # Examples
//!
//! ```
//! use parcel_rates::infrastructure::carriers::error::CarrierError;
//!
//! let error = CarrierError::timeout("no response after 5000ms");
//! assert!(error.is_retryable());
//!
//! let error = CarrierError::rejected("invalid destination address");
//! assert!(error.is_client_error());
//! ```

use thiserror::Error;

/// Error type for carrier client operations.
#[derive(Debug, Clone, Error)]
pub enum CarrierError {
    /// Request timed out.
    #[error("carrier timeout: {message}")]
    Timeout {
        /// Error message.
        message: String,
        /// Timeout budget in milliseconds, if known.
        timeout_ms: Option<u64>,
    },

    /// Network or connection error.
    #[error("carrier connection error: {message}")]
    Connection {
        /// Error message.
        message: String,
    },

    /// Carrier-side rejection, e.g. an address it will not ship to.
    #[error("carrier rejected request: {message}")]
    Rejected {
        /// Error message.
        message: String,
    },

    /// Carrier returned a shape the normalizer cannot map.
    #[error("malformed carrier response: {message}")]
    MalformedResponse {
        /// Error message.
        message: String,
    },

    /// Internal or carrier-side server error.
    #[error("carrier internal error: {message}")]
    Internal {
        /// Error message.
        message: String,
    },
}

impl CarrierError {
    /// Creates a timeout error.
    #[must_use]
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout {
            message: message.into(),
            timeout_ms: None,
        }
    }

    /// Creates a timeout error with the budget that was exceeded.
    #[must_use]
    pub fn timeout_with_duration(message: impl Into<String>, timeout_ms: u64) -> Self {
        Self::Timeout {
            message: message.into(),
            timeout_ms: Some(timeout_ms),
        }
    }

    /// Creates a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Creates a rejection error.
    #[must_use]
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
        }
    }

    /// Creates a malformed response error.
    #[must_use]
    pub fn malformed_response(message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            message: message.into(),
        }
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Returns true if this error is transient and may succeed on retry.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Timeout { .. } | Self::Connection { .. } | Self::Internal { .. }
        )
    }

    /// Returns true if this error indicates a bad request, not a carrier
    /// fault.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }

    /// Returns the timeout budget in milliseconds, if applicable.
    #[must_use]
    pub fn timeout_ms(&self) -> Option<u64> {
        match self {
            Self::Timeout { timeout_ms, .. } => *timeout_ms,
            _ => None,
        }
    }
}

/// Result type for carrier operations.
pub type CarrierResult<T> = Result<T, CarrierError>;
