//! # Application Services
//!
//! Services that orchestrate domain logic and carrier infrastructure.
//!
//! - [`QuoteAggregator`]: concurrent quote collection across carriers

pub mod quote_aggregation;

pub use quote_aggregation::{
    AggregationConfig, AggregationOutcome, CarrierFailure, QuoteAggregator,
};
