//! # USPS Carrier Client
//!
//! Rate client for the USPS backend.
//!
//! Unlike UPS, USPS takes a flat query document and answers with rates as
//! keyed `{"name": ..., "cost": ...}` records. Both shapes converge in the
//! normalizer; this client never reshapes payloads itself.

use crate::domain::entities::location::Location;
use crate::domain::entities::package::Package;
use crate::domain::value_objects::carrier::Carrier;
use crate::infrastructure::carriers::error::CarrierResult;
use crate::infrastructure::carriers::http::HttpClient;
use crate::infrastructure::carriers::registry::CarrierConfig;
use crate::infrastructure::carriers::traits::{CarrierClient, RawQuote};
use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::Serialize;

/// Client for the USPS rates backend.
#[derive(Debug)]
pub struct UspsClient {
    config: CarrierConfig,
    http: HttpClient,
}

impl UspsClient {
    /// Creates a USPS client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CarrierError::Internal`](crate::infrastructure::carriers::error::CarrierError::Internal)
    /// if the HTTP transport cannot be constructed.
    pub fn new(config: CarrierConfig) -> CarrierResult<Self> {
        let http = HttpClient::new(config.timeout_ms())?;
        Ok(Self { config, http })
    }

    /// Returns the client configuration.
    #[inline]
    #[must_use]
    pub fn config(&self) -> &CarrierConfig {
        &self.config
    }
}

/// USPS wire format: one flat query document.
#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
struct UspsRateQuery<'a> {
    origin_city: &'a str,
    origin_state: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    origin_zip: Option<&'a str>,
    destination_city: &'a str,
    destination_state: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    destination_zip: Option<&'a str>,
    weight: Decimal,
    weight_unit: String,
}

impl<'a> UspsRateQuery<'a> {
    fn new(package: &'a Package, origin: &'a Location, destination: &'a Location) -> Self {
        Self {
            origin_city: origin.city(),
            origin_state: origin.state(),
            origin_zip: origin.postal_code(),
            destination_city: destination.city(),
            destination_state: destination.state(),
            destination_zip: destination.postal_code(),
            weight: package.weight().value(),
            weight_unit: package.weight().unit().to_string(),
        }
    }
}

#[async_trait]
impl CarrierClient for UspsClient {
    fn carrier(&self) -> Carrier {
        Carrier::Usps
    }

    fn timeout_ms(&self) -> u64 {
        self.config.timeout_ms()
    }

    async fn get_rates(
        &self,
        package: &Package,
        origin: &Location,
        destination: &Location,
    ) -> CarrierResult<Vec<RawQuote>> {
        let query = UspsRateQuery::new(package, origin, destination);
        self.http.post_json(self.config.endpoint(), &query).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::infrastructure::carriers::error::CarrierError;
    use crate::infrastructure::carriers::normalize::normalize_all;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_shipment() -> (Package, Location, Location) {
        (
            Package::imperial(7.5 * 16.0, [12.0, 12.0, 12.0]).unwrap(),
            Location::new("US", "CA", "Beverly Hills", "90210").unwrap(),
            Location::new("US", "WA", "Seattle", "98101").unwrap(),
        )
    }

    fn client_for(server: &MockServer) -> UspsClient {
        UspsClient::new(CarrierConfig::new(format!("{}/usps/rates", server.uri()))).unwrap()
    }

    #[tokio::test]
    async fn get_rates_returns_keyed_records() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/usps/rates"))
            .and(body_partial_json(json!({
                "origin_zip": "90210",
                "destination_city": "Seattle"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "name": "USPS Priority Mail Express", "cost": 4575 },
                { "name": "USPS Priority Mail", "cost": 905 },
                { "name": "USPS Ground Advantage", "cost": 612 }
            ])))
            .mount(&server)
            .await;

        let (package, origin, destination) = test_shipment();
        let client = client_for(&server);
        let raw = client
            .get_rates(&package, &origin, &destination)
            .await
            .unwrap();
        assert_eq!(raw.len(), 3);

        let quotes = normalize_all(Carrier::Usps, &raw).unwrap();
        assert_eq!(quotes.last().unwrap().name(), "USPS Ground Advantage");
        assert_eq!(quotes.last().unwrap().cost().get(), 612);
    }

    #[tokio::test]
    async fn server_failure_surfaces_as_typed_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let (package, origin, destination) = test_shipment();
        let client = client_for(&server);
        let err = client
            .get_rates(&package, &origin, &destination)
            .await
            .unwrap_err();
        assert!(matches!(err, CarrierError::Internal { .. }));
    }

    #[test]
    fn reports_usps_identity() {
        let client = UspsClient::new(
            CarrierConfig::new("http://localhost/rates").with_timeout_ms(2500),
        )
        .unwrap();
        assert_eq!(client.carrier(), Carrier::Usps);
        assert_eq!(client.timeout_ms(), 2500);
    }
}
