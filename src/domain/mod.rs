//! # Domain Layer
//!
//! Entities, value objects, and domain errors. No I/O, no carrier
//! knowledge beyond the closed [`Carrier`](value_objects::Carrier) set.

pub mod entities;
pub mod errors;
pub mod value_objects;
