//! # Domain Entities
//!
//! Core business objects for shipment quoting.
//!
//! - [`Package`]: the physical parcel (weight, dimensions, units)
//! - [`Location`]: an address or partial address
//! - [`Quote`]: the canonical `{name, cost}` quote record
//! - [`ShipmentRequest`]: the façade owning one package and two locations

pub mod location;
pub mod package;
pub mod quote;
pub mod shipment;

pub use location::Location;
pub use package::Package;
pub use quote::Quote;
pub use shipment::{ShipmentRequest, ShipmentSetup};
