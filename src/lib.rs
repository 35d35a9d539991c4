//! # parcel-rates
//!
//! Multi-carrier shipping-quote aggregator.
//!
//! Given a [`ShipmentRequest`] (one package, an origin, a destination) and a
//! set of carrier identifiers, the [`QuoteAggregator`] fans out to each
//! wired carrier backend concurrently, normalizes their heterogeneous raw
//! responses into one canonical `{name, cost}` [`Quote`] shape, and merges
//! the results into a single ordered list.
//!
//! Design principles:
//!
//! - **Absence is not an error.** An unknown carrier identifier yields
//!   `None` (single-carrier) or a recorded skip (multi-carrier); callers
//!   can always tell "carrier not offered" apart from a failure.
//! - **Partial failure is tolerated.** One carrier timing out or answering
//!   garbage never hides the other carriers' quotes; its failure is
//!   recorded in the [`AggregationOutcome`] and logged.
//! - **Normalize at the boundary.** Carriers return positional pairs or
//!   keyed records; both converge to [`Quote`] at the client boundary, and
//!   nothing downstream ever branches on shape. Costs become integer cents
//!   with a single half-up rounding policy.
//!
//! # Examples
//!
//! ```ignore
//! use std::sync::Arc;
//! use parcel_rates::{
//!     CarrierConfig, CarrierRegistry, Location, QuoteAggregator, ShipmentRequest,
//!     UpsClient, UspsClient,
//! };
//!
//! let registry = CarrierRegistry::new()
//!     .register(Arc::new(UpsClient::new(CarrierConfig::new("https://rates.internal/ups"))?))
//!     .register(Arc::new(UspsClient::new(CarrierConfig::new("https://rates.internal/usps"))?));
//! let aggregator = QuoteAggregator::with_defaults(Arc::new(registry));
//!
//! let shipment = ShipmentRequest::setup(
//!     8.0,
//!     Location::city_state("Chicago", "IL")?,
//!     Location::city_state("Seattle", "Wa")?,
//! )?;
//!
//! let outcome = shipment.quote_for_many(&aggregator, &["ups", "usps"]).await;
//! for quote in &outcome.quotes {
//!     println!("{quote}");
//! }
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::error::{AggregationError, AggregationResult};
pub use application::services::quote_aggregation::{
    AggregationConfig, AggregationOutcome, CarrierFailure, QuoteAggregator,
};
pub use domain::entities::{Location, Package, Quote, ShipmentRequest, ShipmentSetup};
pub use domain::errors::{DomainError, DomainResult, SetupError, SetupResult};
pub use domain::value_objects::{Carrier, Cents, Dimensions, UnitSystem, Weight, WeightUnit};
pub use infrastructure::carriers::{
    CarrierClient, CarrierConfig, CarrierError, CarrierRegistry, CarrierResult, RawQuote,
    UpsClient, UspsClient,
};
