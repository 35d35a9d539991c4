//! # Value Objects
//!
//! Immutable types with validation and domain semantics.
//!
//! ## Measurement Types
//!
//! - [`Weight`]: unit-tagged, non-negative weight
//! - [`Dimensions`]: ordered length/width/height triple
//! - [`UnitSystem`], [`WeightUnit`]: measurement unit enums
//!
//! ## Monetary Types
//!
//! - [`Cents`]: integer cost in the smallest currency unit, with one
//!   explicit rounding policy (half up)
//!
//! ## Carrier Types
//!
//! - [`Carrier`]: closed enumeration of supported carriers

pub mod carrier;
pub mod dimensions;
pub mod money;
pub mod units;
pub mod weight;

pub use carrier::Carrier;
pub use dimensions::Dimensions;
pub use money::Cents;
pub use units::{ParseEnumError, UnitSystem, WeightUnit};
pub use weight::Weight;
