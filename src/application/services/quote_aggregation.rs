//! # Quote Aggregation
//!
//! Fan-out to carrier backends and ordered aggregation of their quotes.
//!
//! This module provides the [`QuoteAggregator`], which resolves carrier
//! identifiers through the registry, collects rates concurrently, runs each
//! raw response through the normalizer, and merges the results into one
//! flat list.
//!
//! Two rules govern the multi-carrier path:
//!
//! - an unknown carrier is skipped and recorded, never fatal
//! - a failing carrier is recorded and logged, never fatal to its siblings
//!
//! Output order is deterministic: carrier input order, then each carrier's
//! own rate order. No cross-carrier sorting by cost.

use crate::application::error::{AggregationError, AggregationResult};
use crate::domain::entities::quote::Quote;
use crate::domain::entities::shipment::ShipmentRequest;
use crate::domain::value_objects::carrier::Carrier;
use crate::infrastructure::carriers::error::{CarrierError, CarrierResult};
use crate::infrastructure::carriers::normalize::normalize_all;
use crate::infrastructure::carriers::registry::CarrierRegistry;
use crate::infrastructure::carriers::traits::CarrierClient;
use futures::future::join_all;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::timeout;

/// Configuration for quote aggregation.
#[derive(Debug, Clone)]
pub struct AggregationConfig {
    /// Per-carrier timeout in milliseconds.
    pub per_carrier_timeout_ms: u64,
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            per_carrier_timeout_ms: 5000,
        }
    }
}

impl AggregationConfig {
    /// Sets the per-carrier timeout.
    #[must_use]
    pub fn with_per_carrier_timeout(mut self, timeout_ms: u64) -> Self {
        self.per_carrier_timeout_ms = timeout_ms;
        self
    }
}

/// One carrier's failure within a multi-carrier aggregation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarrierFailure {
    /// The carrier that failed.
    pub carrier: Carrier,
    /// Human-readable failure description.
    pub message: String,
}

/// Result of a multi-carrier aggregation.
///
/// The quote list is flat and ordered; per-carrier problems are recorded
/// rather than raised, so one bad carrier never hides the others' quotes.
#[derive(Debug, Clone, Default)]
pub struct AggregationOutcome {
    /// Normalized quotes in carrier input order, then each carrier's own
    /// rate order.
    pub quotes: Vec<Quote>,
    /// Number of carrier identifiers requested.
    pub carriers_requested: usize,
    /// Number of identifiers that resolved to a wired carrier.
    pub carriers_resolved: usize,
    /// Identifiers that did not resolve (absence, not failure).
    pub unknown: Vec<String>,
    /// Carriers that resolved but failed to deliver quotes.
    pub failures: Vec<CarrierFailure>,
}

impl AggregationOutcome {
    /// Returns true if every requested carrier resolved and answered.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.unknown.is_empty() && self.failures.is_empty()
    }

    /// Consumes the outcome, returning just the quotes.
    #[must_use]
    pub fn into_quotes(self) -> Vec<Quote> {
        self.quotes
    }
}

/// Aggregates shipping quotes across carriers.
#[derive(Debug)]
pub struct QuoteAggregator {
    registry: Arc<CarrierRegistry>,
    config: AggregationConfig,
}

/// Fixed-position slot for one requested identifier during fan-out.
/// Keeps output order tied to input order, not completion order.
enum Slot {
    Unknown(String),
    InFlight(Carrier, JoinHandle<CarrierResult<Vec<Quote>>>),
}

enum SlotResult {
    Unknown(String),
    Quotes(Vec<Quote>),
    Failed(CarrierFailure),
}

impl QuoteAggregator {
    /// Creates an aggregator over a wired registry.
    #[must_use]
    pub fn new(registry: Arc<CarrierRegistry>, config: AggregationConfig) -> Self {
        Self { registry, config }
    }

    /// Creates an aggregator with default configuration.
    #[must_use]
    pub fn with_defaults(registry: Arc<CarrierRegistry>) -> Self {
        Self::new(registry, AggregationConfig::default())
    }

    /// Returns the current configuration.
    #[must_use]
    pub fn config(&self) -> &AggregationConfig {
        &self.config
    }

    /// Fetches normalized quotes from one carrier.
    ///
    /// Returns `Ok(None)` when the identifier is not offered — callers must
    /// distinguish this absence from a failure. An empty list inside
    /// `Some` is a legitimate zero-rate response.
    ///
    /// # Errors
    ///
    /// Returns [`AggregationError::Carrier`] when the resolved client times
    /// out, cannot be reached, or answers with a shape the normalizer
    /// rejects.
    pub async fn quote_for(
        &self,
        request: &ShipmentRequest,
        carrier_id: &str,
    ) -> AggregationResult<Option<Vec<Quote>>> {
        let Some(client) = self.registry.resolve(carrier_id) else {
            tracing::debug!(carrier = carrier_id, "carrier not offered, returning none");
            return Ok(None);
        };
        let carrier = client.carrier();
        let quotes = collect_rates(client, request.clone(), self.config.per_carrier_timeout_ms)
            .await
            .map_err(|source| AggregationError::carrier(carrier, source))?;
        Ok(Some(quotes))
    }

    /// Fetches and merges quotes from many carriers concurrently.
    ///
    /// Each resolved carrier runs as its own task with its own timeout
    /// budget; tasks share no mutable state. Results land in a slot indexed
    /// by input position and are flattened in that order after all tasks
    /// settle, so output is deterministic regardless of completion order.
    /// Unknown identifiers and per-carrier failures are recorded in the
    /// outcome, never raised.
    pub async fn quote_for_many(
        &self,
        request: &ShipmentRequest,
        carrier_ids: &[&str],
    ) -> AggregationOutcome {
        let mut slots = Vec::with_capacity(carrier_ids.len());
        for &id in carrier_ids {
            match self.registry.resolve(id) {
                Some(client) => {
                    let carrier = client.carrier();
                    let request = request.clone();
                    let budget = self.config.per_carrier_timeout_ms;
                    let handle = tokio::spawn(collect_rates(client, request, budget));
                    slots.push(Slot::InFlight(carrier, handle));
                }
                None => {
                    tracing::debug!(carrier = id, "carrier not offered, skipping");
                    slots.push(Slot::Unknown(id.to_owned()));
                }
            }
        }

        let results = join_all(slots.into_iter().map(settle_slot)).await;

        let mut outcome = AggregationOutcome {
            carriers_requested: carrier_ids.len(),
            ..AggregationOutcome::default()
        };
        for result in results {
            match result {
                SlotResult::Unknown(id) => outcome.unknown.push(id),
                SlotResult::Quotes(quotes) => {
                    outcome.carriers_resolved += 1;
                    outcome.quotes.extend(quotes);
                }
                SlotResult::Failed(failure) => {
                    outcome.carriers_resolved += 1;
                    tracing::warn!(
                        carrier = %failure.carrier,
                        error = %failure.message,
                        "carrier failed, continuing with remaining carriers"
                    );
                    outcome.failures.push(failure);
                }
            }
        }
        outcome
    }
}

/// Awaits one fan-out slot, mapping task-level failure onto the carrier.
async fn settle_slot(slot: Slot) -> SlotResult {
    match slot {
        Slot::Unknown(id) => SlotResult::Unknown(id),
        Slot::InFlight(carrier, handle) => match handle.await {
            Ok(Ok(quotes)) => SlotResult::Quotes(quotes),
            Ok(Err(error)) => SlotResult::Failed(CarrierFailure {
                carrier,
                message: error.to_string(),
            }),
            Err(join_error) => SlotResult::Failed(CarrierFailure {
                carrier,
                message: format!("task failed: {join_error}"),
            }),
        },
    }
}

/// Fetches raw rates from one client within a timeout budget and
/// normalizes them.
async fn collect_rates(
    client: Arc<dyn CarrierClient>,
    request: ShipmentRequest,
    budget_ms: u64,
) -> CarrierResult<Vec<Quote>> {
    let budget = Duration::from_millis(budget_ms);
    let raw = match timeout(
        budget,
        client.get_rates(request.package(), request.origin(), request.destination()),
    )
    .await
    {
        Ok(result) => result?,
        Err(_) => {
            return Err(CarrierError::timeout_with_duration(
                "carrier did not answer within budget",
                budget_ms,
            ));
        }
    };
    normalize_all(client.carrier(), &raw)
}

impl ShipmentRequest {
    /// Fetches quotes for this shipment from one carrier.
    ///
    /// Delegates to [`QuoteAggregator::quote_for`] with this request's own
    /// package and locations.
    ///
    /// # Errors
    ///
    /// See [`QuoteAggregator::quote_for`].
    pub async fn quote_for(
        &self,
        aggregator: &QuoteAggregator,
        carrier_id: &str,
    ) -> AggregationResult<Option<Vec<Quote>>> {
        aggregator.quote_for(self, carrier_id).await
    }

    /// Fetches and merges quotes for this shipment from many carriers.
    ///
    /// Delegates to [`QuoteAggregator::quote_for_many`].
    pub async fn quote_for_many(
        &self,
        aggregator: &QuoteAggregator,
        carrier_ids: &[&str],
    ) -> AggregationOutcome {
        aggregator.quote_for_many(self, carrier_ids).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::entities::location::Location;
    use crate::domain::entities::package::Package;
    use crate::infrastructure::carriers::traits::RawQuote;
    use async_trait::async_trait;
    use serde_json::json;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("parcel_rates=debug")
            .with_test_writer()
            .try_init();
    }

    #[derive(Debug)]
    struct MockCarrier {
        carrier: Carrier,
        response: CarrierResult<Vec<RawQuote>>,
        delay_ms: u64,
    }

    impl MockCarrier {
        fn with_rates(carrier: Carrier, rates: Vec<RawQuote>) -> Arc<Self> {
            Arc::new(Self {
                carrier,
                response: Ok(rates),
                delay_ms: 0,
            })
        }

        fn failing(carrier: Carrier, error: CarrierError) -> Arc<Self> {
            Arc::new(Self {
                carrier,
                response: Err(error),
                delay_ms: 0,
            })
        }

        fn slow(carrier: Carrier, delay_ms: u64) -> Arc<Self> {
            Arc::new(Self {
                carrier,
                response: Ok(vec![]),
                delay_ms,
            })
        }
    }

    #[async_trait]
    impl CarrierClient for MockCarrier {
        fn carrier(&self) -> Carrier {
            self.carrier
        }

        fn timeout_ms(&self) -> u64 {
            1000
        }

        async fn get_rates(
            &self,
            _package: &Package,
            _origin: &Location,
            _destination: &Location,
        ) -> CarrierResult<Vec<RawQuote>> {
            if self.delay_ms > 0 {
                tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
            }
            self.response.clone()
        }
    }

    // Reference fixture: 7 UPS rates (positional pairs) and 5 USPS rates
    // (keyed records), 12 quotes total.
    fn ups_fixture() -> Arc<MockCarrier> {
        MockCarrier::with_rates(
            Carrier::Ups,
            vec![
                RawQuote::positional("UPS Next Day Air Early", 8940.0),
                RawQuote::positional("UPS Next Day Air", 5820.0),
                RawQuote::positional("UPS Next Day Air Saver", 5510.0),
                RawQuote::positional("UPS 2nd Day Air A.M.", 3020.0),
                RawQuote::positional("UPS 2nd Day Air", 2710.0),
                RawQuote::positional("UPS 3 Day Select", 1890.0),
                RawQuote::positional("UPS Ground", 1350.0),
            ],
        )
    }

    fn usps_fixture() -> Arc<MockCarrier> {
        MockCarrier::with_rates(
            Carrier::Usps,
            vec![
                RawQuote::keyed("USPS Priority Mail Express", 4575.0),
                RawQuote::keyed("USPS Priority Mail", 905.0),
                RawQuote::keyed("USPS Ground Advantage", 612.0),
                RawQuote::keyed("USPS Media Mail", 412.0),
                RawQuote::keyed("USPS Library Mail", 392.0),
            ],
        )
    }

    fn aggregator(clients: Vec<Arc<MockCarrier>>) -> QuoteAggregator {
        let mut registry = CarrierRegistry::new();
        for client in clients {
            registry = registry.register(client);
        }
        QuoteAggregator::new(
            Arc::new(registry),
            AggregationConfig::default().with_per_carrier_timeout(500),
        )
    }

    fn test_request() -> ShipmentRequest {
        ShipmentRequest::new(
            Package::imperial(7.5 * 16.0, [12.0, 12.0, 12.0]).unwrap(),
            Location::new("US", "CA", "Beverly Hills", "90210").unwrap(),
            Location::new("US", "WA", "Seattle", "98101").unwrap(),
        )
    }

    #[tokio::test]
    async fn quote_for_supported_carrier() {
        let aggregator = aggregator(vec![ups_fixture(), usps_fixture()]);
        let request = test_request();

        let quotes = aggregator
            .quote_for(&request, "ups")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(quotes.len(), 7);

        // every element is exactly {name: string, cost: integer}
        for quote in &quotes {
            let value = serde_json::to_value(quote).unwrap();
            let object = value.as_object().unwrap();
            assert_eq!(object.len(), 2);
            assert!(object.get("name").unwrap().is_string());
            assert!(object.get("cost").unwrap().is_i64());
        }
    }

    #[tokio::test]
    async fn quote_for_unknown_carrier_is_none() {
        let aggregator = aggregator(vec![ups_fixture(), usps_fixture()]);
        let request = test_request();

        let result = aggregator.quote_for(&request, "Lucy's cargo").await;
        assert!(matches!(result, Ok(None)));
    }

    #[tokio::test]
    async fn quote_for_failure_is_distinct_from_none() {
        let aggregator = aggregator(vec![MockCarrier::failing(
            Carrier::Ups,
            CarrierError::connection("connection refused"),
        )]);
        let request = test_request();

        let err = aggregator.quote_for(&request, "ups").await.unwrap_err();
        assert_eq!(err.carrier_id(), Carrier::Ups);
    }

    #[tokio::test]
    async fn quote_for_zero_rates_is_some_empty() {
        let aggregator = aggregator(vec![MockCarrier::with_rates(Carrier::Ups, vec![])]);
        let request = test_request();

        let quotes = aggregator
            .quote_for(&request, "ups")
            .await
            .unwrap()
            .unwrap();
        assert!(quotes.is_empty());
    }

    #[tokio::test]
    async fn quote_for_many_total_is_sum_of_parts() {
        let aggregator = aggregator(vec![ups_fixture(), usps_fixture()]);
        let request = test_request();

        let ups_count = aggregator
            .quote_for(&request, "ups")
            .await
            .unwrap()
            .unwrap()
            .len();
        let usps_count = aggregator
            .quote_for(&request, "usps")
            .await
            .unwrap()
            .unwrap()
            .len();
        let outcome = aggregator.quote_for_many(&request, &["ups", "usps"]).await;

        assert_eq!(outcome.quotes.len(), ups_count + usps_count);
        assert_eq!(outcome.quotes.len(), 12);
        assert_eq!(outcome.carriers_requested, 2);
        assert_eq!(outcome.carriers_resolved, 2);
        assert!(outcome.is_complete());
    }

    #[tokio::test]
    async fn quote_for_many_preserves_input_then_rate_order() {
        let aggregator = aggregator(vec![ups_fixture(), usps_fixture()]);
        let request = test_request();

        let outcome = aggregator.quote_for_many(&request, &["usps", "ups"]).await;
        let names: Vec<&str> = outcome.quotes.iter().map(Quote::name).collect();

        assert_eq!(names.first().unwrap(), &"USPS Priority Mail Express");
        assert_eq!(names.get(5).unwrap(), &"UPS Next Day Air Early");
        assert_eq!(names.last().unwrap(), &"UPS Ground");
    }

    #[tokio::test]
    async fn quote_for_many_skips_unknown_carriers() {
        let aggregator = aggregator(vec![ups_fixture(), usps_fixture()]);
        let request = test_request();

        let outcome = aggregator
            .quote_for_many(&request, &["ups", "Lucy's cargo", "usps"])
            .await;

        assert_eq!(outcome.quotes.len(), 12);
        assert_eq!(outcome.carriers_requested, 3);
        assert_eq!(outcome.carriers_resolved, 2);
        assert_eq!(outcome.unknown, vec!["Lucy's cargo".to_owned()]);
        assert!(!outcome.is_complete());
    }

    #[tokio::test]
    async fn quote_for_many_isolates_carrier_failure() {
        init_tracing();
        let aggregator = aggregator(vec![
            MockCarrier::failing(Carrier::Ups, CarrierError::internal("backend down")),
            usps_fixture(),
        ]);
        let request = test_request();

        let outcome = aggregator.quote_for_many(&request, &["ups", "usps"]).await;

        assert_eq!(outcome.quotes.len(), 5);
        assert_eq!(outcome.failures.len(), 1);
        assert_eq!(outcome.failures.first().unwrap().carrier, Carrier::Ups);
        assert!(
            outcome
                .failures
                .first()
                .unwrap()
                .message
                .contains("backend down")
        );
    }

    #[tokio::test]
    async fn quote_for_many_records_malformed_response() {
        let aggregator = aggregator(vec![
            MockCarrier::with_rates(Carrier::Ups, vec![RawQuote::new(json!("garbage"))]),
            usps_fixture(),
        ]);
        let request = test_request();

        let outcome = aggregator.quote_for_many(&request, &["ups", "usps"]).await;

        assert_eq!(outcome.quotes.len(), 5);
        assert!(
            outcome
                .failures
                .first()
                .unwrap()
                .message
                .contains("malformed")
        );
    }

    #[tokio::test]
    async fn quote_for_many_times_out_slow_carrier() {
        let aggregator = aggregator(vec![
            MockCarrier::slow(Carrier::Ups, 5_000),
            usps_fixture(),
        ]);
        let request = test_request();

        let outcome = aggregator.quote_for_many(&request, &["ups", "usps"]).await;

        assert_eq!(outcome.quotes.len(), 5);
        assert_eq!(outcome.failures.len(), 1);
        assert!(
            outcome
                .failures
                .first()
                .unwrap()
                .message
                .contains("timeout")
        );
    }

    #[test]
    fn quote_for_is_idempotent() {
        tokio_test::block_on(async {
            let aggregator = aggregator(vec![ups_fixture(), usps_fixture()]);
            let request = test_request();

            let first = aggregator.quote_for(&request, "usps").await.unwrap();
            let second = aggregator.quote_for(&request, "usps").await.unwrap();
            assert_eq!(first, second);
        });
    }

    #[tokio::test]
    async fn shipment_request_delegates() {
        let aggregator = aggregator(vec![ups_fixture(), usps_fixture()]);
        let request = test_request();

        let quotes = request.quote_for(&aggregator, "ups").await.unwrap().unwrap();
        assert_eq!(quotes.len(), 7);

        let outcome = request.quote_for_many(&aggregator, &["ups", "usps"]).await;
        assert_eq!(outcome.quotes.len(), 12);
    }

    #[test]
    fn config_default_and_builder() {
        let config = AggregationConfig::default();
        assert_eq!(config.per_carrier_timeout_ms, 5000);

        let config = AggregationConfig::default().with_per_carrier_timeout(250);
        assert_eq!(config.per_carrier_timeout_ms, 250);
    }
}
