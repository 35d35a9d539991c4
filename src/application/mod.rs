//! # Application Layer
//!
//! Use-case orchestration over the domain and carrier infrastructure.

pub mod error;
pub mod services;

pub use error::{AggregationError, AggregationResult};
