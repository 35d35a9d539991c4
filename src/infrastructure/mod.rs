//! # Infrastructure Layer
//!
//! Adapters to the outside world. Currently one concern: carrier
//! backends ([`carriers`]).

pub mod carriers;
