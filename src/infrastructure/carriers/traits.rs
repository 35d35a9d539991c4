//! # Carrier Client Trait
//!
//! Port definition for carrier integrations.
//!
//! Every supported carrier implements [`CarrierClient`]: adapt the shared
//! request shape (package, origin, destination) to the carrier's wire
//! protocol and return raw quotes. The transport itself is a black box —
//! this crate only depends on the `get_rates` contract.
//!
//! # Examples
//!
//! ```ignore
//! use parcel_rates::infrastructure::carriers::traits::{CarrierClient, RawQuote};
//!
//! #[derive(Debug)]
//! struct MyCarrier { /* ... */ }
//!
//! #[async_trait::async_trait]
//! impl CarrierClient for MyCarrier {
//!     // ... implement required methods
//! }
//! ```

use crate::domain::entities::location::Location;
use crate::domain::entities::package::Package;
use crate::domain::value_objects::carrier::Carrier;
use crate::infrastructure::carriers::error::CarrierResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A quote exactly as a carrier backend returned it.
///
/// Carriers disagree on shape: some return positional `[name, cost]` pairs,
/// others keyed `{"name": ..., "cost": ...}` records. A `RawQuote` carries
/// the payload untouched; the normalizer converges both shapes into the
/// canonical [`Quote`](crate::domain::entities::quote::Quote) and rejects
/// anything else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawQuote(Value);

impl RawQuote {
    /// Wraps a raw carrier payload.
    #[must_use]
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Builds a positional `[name, cost]` raw quote.
    #[must_use]
    pub fn positional(name: &str, cost: f64) -> Self {
        Self(serde_json::json!([name, cost]))
    }

    /// Builds a keyed `{"name": ..., "cost": ...}` raw quote.
    #[must_use]
    pub fn keyed(name: &str, cost: f64) -> Self {
        Self(serde_json::json!({ "name": name, "cost": cost }))
    }

    /// Returns the underlying payload.
    #[inline]
    #[must_use]
    pub fn value(&self) -> &Value {
        &self.0
    }
}

impl fmt::Display for RawQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Value> for RawQuote {
    fn from(value: Value) -> Self {
        Self::new(value)
    }
}

/// Trait defining the interface for carrier clients.
///
/// All carrier integrations implement this trait so the aggregator can
/// treat UPS, USPS, and any future carrier uniformly.
///
/// # Error Handling
///
/// `get_rates` returns `CarrierResult<Vec<RawQuote>>`. Implementations map
/// transport and carrier-specific failures to typed
/// [`CarrierError`](crate::infrastructure::carriers::error::CarrierError)
/// variants; nothing is swallowed here. An empty list is a legitimate
/// success — a carrier may offer zero rates for a route.
#[async_trait]
pub trait CarrierClient: Send + Sync + fmt::Debug {
    /// Returns the carrier this client speaks for.
    fn carrier(&self) -> Carrier;

    /// Returns the timeout in milliseconds for carrier operations.
    fn timeout_ms(&self) -> u64;

    /// Requests rate quotes for a package between two locations.
    ///
    /// # Errors
    ///
    /// - `CarrierError::Timeout` - request timed out
    /// - `CarrierError::Connection` - network failure
    /// - `CarrierError::Rejected` - carrier-side rejection (e.g. address)
    /// - `CarrierError::MalformedResponse` - undecodable response body
    async fn get_rates(
        &self,
        package: &Package,
        origin: &Location,
        destination: &Location,
    ) -> CarrierResult<Vec<RawQuote>>;
}
