//! # Carrier Integrations
//!
//! Clients, registry, and normalization for carrier backends.
//!
//! - [`traits`]: the [`CarrierClient`](traits::CarrierClient) port and
//!   [`RawQuote`](traits::RawQuote)
//! - [`registry`]: identifier → client resolution over the closed carrier set
//! - [`normalize`]: heterogeneous raw shapes → canonical quotes
//! - [`ups`], [`usps`]: concrete clients over the shared [`http`] transport
//! - [`error`]: the typed failure taxonomy

pub mod error;
pub mod http;
pub mod normalize;
pub mod registry;
pub mod traits;
pub mod ups;
pub mod usps;

pub use error::{CarrierError, CarrierResult};
pub use http::HttpClient;
pub use normalize::{normalize, normalize_all};
pub use registry::{CarrierConfig, CarrierRegistry};
pub use traits::{CarrierClient, RawQuote};
pub use ups::UpsClient;
pub use usps::UspsClient;
