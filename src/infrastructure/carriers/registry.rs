//! # Carrier Registry
//!
//! Maps carrier identifiers to client implementations.
//!
//! The registry is wired once at construction and is read-only afterwards;
//! no dynamic registration happens at runtime. Resolution is a
//! case-sensitive exact match, and an unknown identifier is a normal
//! outcome (`None`), never an error.
//!
//! # Examples
//!
//! ```
//! use parcel_rates::infrastructure::carriers::registry::CarrierRegistry;
//!
//! let registry = CarrierRegistry::new();
//! assert!(registry.resolve("ups").is_none()); // nothing wired yet
//! assert!(registry.is_empty());
//! ```

use crate::domain::value_objects::carrier::Carrier;
use crate::infrastructure::carriers::traits::CarrierClient;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// Configuration for one carrier client.
///
/// Deserializable so deployments can wire carriers from configuration
/// files.
///
/// # Examples
///
/// ```
/// use parcel_rates::infrastructure::carriers::registry::CarrierConfig;
///
/// let config = CarrierConfig::new("https://rates.example.com/ups")
///     .with_timeout_ms(3000);
/// assert!(config.is_enabled());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarrierConfig {
    /// Rate endpoint URL.
    endpoint: String,
    /// Request timeout in milliseconds.
    #[serde(default = "CarrierConfig::default_timeout_ms")]
    timeout_ms: u64,
    /// Whether this carrier is offered.
    #[serde(default = "CarrierConfig::default_enabled")]
    enabled: bool,
}

impl CarrierConfig {
    const fn default_timeout_ms() -> u64 {
        5000
    }

    const fn default_enabled() -> bool {
        true
    }

    /// Creates a configuration for the given endpoint with defaults.
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout_ms: Self::default_timeout_ms(),
            enabled: Self::default_enabled(),
        }
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Sets whether the carrier is offered.
    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Returns the rate endpoint URL.
    #[inline]
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Returns the request timeout in milliseconds.
    #[inline]
    #[must_use]
    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    /// Returns true if the carrier is offered.
    #[inline]
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

/// Registry mapping the closed [`Carrier`] set to client implementations.
#[derive(Debug, Default)]
pub struct CarrierRegistry {
    clients: HashMap<Carrier, Arc<dyn CarrierClient>>,
}

impl CarrierRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wires a client, keyed by the carrier it reports. Builder-style;
    /// wiring the same carrier twice keeps the later client.
    #[must_use]
    pub fn register(mut self, client: Arc<dyn CarrierClient>) -> Self {
        self.clients.insert(client.carrier(), client);
        self
    }

    /// Resolves a carrier identifier to its client.
    ///
    /// Case-sensitive exact match. `None` means the carrier is not
    /// offered — a valid, expected outcome for callers to branch on.
    #[must_use]
    pub fn resolve(&self, identifier: &str) -> Option<Arc<dyn CarrierClient>> {
        let carrier = Carrier::resolve(identifier)?;
        self.get(carrier)
    }

    /// Returns the client for a known carrier variant, if wired.
    #[must_use]
    pub fn get(&self, carrier: Carrier) -> Option<Arc<dyn CarrierClient>> {
        self.clients.get(&carrier).cloned()
    }

    /// Returns the wired carriers in identifier order.
    #[must_use]
    pub fn supported(&self) -> Vec<Carrier> {
        let mut carriers: Vec<Carrier> = self.clients.keys().copied().collect();
        carriers.sort_unstable();
        carriers
    }

    /// Returns the number of wired carriers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.clients.len()
    }

    /// Returns true if no carriers are wired.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }
}
