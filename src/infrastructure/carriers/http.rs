//! # HTTP Transport
//!
//! Shared HTTP client wrapper for carrier integrations.
//!
//! Concrete carrier clients post a rate request and decode a JSON body
//! through this wrapper, which maps transport failures and HTTP status
//! codes onto the [`CarrierError`] taxonomy in one place.

use crate::infrastructure::carriers::error::{CarrierError, CarrierResult};
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// HTTP client wrapper for carrier clients.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    timeout_ms: u64,
}

impl HttpClient {
    /// Creates a client with the given request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`CarrierError::Internal`] if the underlying client cannot
    /// be constructed.
    pub fn new(timeout_ms: u64) -> CarrierResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .map_err(|e| CarrierError::internal(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client, timeout_ms })
    }

    /// Returns the configured timeout in milliseconds.
    #[inline]
    #[must_use]
    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    /// Posts a JSON body and decodes a JSON response.
    ///
    /// # Errors
    ///
    /// - [`CarrierError::Timeout`] - the request exceeded the budget
    /// - [`CarrierError::Connection`] - transport-level failure
    /// - [`CarrierError::Rejected`] - carrier answered with a 4xx status
    /// - [`CarrierError::Internal`] - carrier answered with a 5xx status
    /// - [`CarrierError::MalformedResponse`] - body was not valid JSON of
    ///   the expected type
    pub async fn post_json<B, T>(&self, url: &str, body: &B) -> CarrierResult<T>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| self.map_transport_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::map_status(status));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| CarrierError::malformed_response(format!("undecodable body: {e}")))
    }

    fn map_transport_error(&self, error: &reqwest::Error) -> CarrierError {
        if error.is_timeout() {
            CarrierError::timeout_with_duration(
                format!("no response within budget: {error}"),
                self.timeout_ms,
            )
        } else {
            CarrierError::connection(error.to_string())
        }
    }

    fn map_status(status: StatusCode) -> CarrierError {
        if status.is_client_error() {
            CarrierError::rejected(format!("carrier answered {status}"))
        } else {
            CarrierError::internal(format!("carrier answered {status}"))
        }
    }
}
