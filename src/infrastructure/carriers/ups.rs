//! # UPS Carrier Client
//!
//! Rate client for the UPS backend.
//!
//! UPS takes a nested shipment document and answers with rates as
//! positional `[service, cost]` pairs. The pairs are passed through as
//! [`RawQuote`]s; shape convergence happens in the normalizer, never here.

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

/// Client for the UPS rates backend.
#[derive(Debug)]
pub struct UpsClient {
    config: CarrierConfig,
    http: HttpClient,
}

impl UpsClient {
    /// Creates a UPS client from configuration.
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

/// UPS wire format: a nested shipment document.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct UpsRateRequest<'a> {
    shipper: UpsAddress<'a>,
    ship_to: UpsAddress<'a>,
    package: UpsPackage,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct UpsAddress<'a> {
    city: &'a str,
    state: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    country: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    postal_code: Option<&'a str>,
}

impl<'a> From<&'a Location> for UpsAddress<'a> {
    fn from(location: &'a Location) -> Self {
        Self {
            city: location.city(),
            state: location.state(),
            country: location.country(),
            postal_code: location.postal_code(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct UpsPackage {
    weight: Decimal,
    weight_unit: String,
    dimensions: [Decimal; 3],
}

impl From<&Package> for UpsPackage {
    fn from(package: &Package) -> Self {
        let (length, width, height) = package.dimensions().as_triple();
        Self {
            weight: package.weight().value(),
            weight_unit: package.weight().unit().to_string(),
            dimensions: [length, width, height],
        }
    }
}

#[async_trait]
impl CarrierClient for UpsClient {
    fn carrier(&self) -> Carrier {
        Carrier::Ups
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
        let request = UpsRateRequest {
            shipper: origin.into(),
            ship_to: destination.into(),
            package: package.into(),
        };
        self.http.post_json(self.config.endpoint(), &request).await
    }
}
