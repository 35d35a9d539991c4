//! # Quote Normalizer
//!
//! Converges heterogeneous raw quote shapes into the canonical
//! [`Quote`](crate::domain::entities::quote::Quote).
//!
//! Two shapes are accepted at the client boundary:
//!
//! - positional two-element arrays: `["UPS Ground", 1350]`
//! - keyed records: `{"name": "Priority Mail", "cost": 905}` (with
//!   `service`/`amount` accepted as key aliases)
//!
//! Costs may arrive fractional; they are coerced to integer cents with the
//! crate-wide half-up policy. Anything else is a
//! [`CarrierError::MalformedResponse`] — reported, never dropped without
//! trace. Downstream aggregation never branches on shape.
//!
//! # Examples
//!
//! ```
//! use parcel_rates::domain::value_objects::carrier::Carrier;
//! use parcel_rates::infrastructure::carriers::normalize::normalize;
//! use parcel_rates::infrastructure::carriers::traits::RawQuote;
//!
//! let raw = RawQuote::positional("UPS Ground", 1350.0);
//! let quote = normalize(Carrier::Ups, &raw).unwrap();
//! assert_eq!(quote.name(), "UPS Ground");
//! assert_eq!(quote.cost().get(), 1350);
//! ```

use crate::domain::entities::quote::Quote;
use crate::domain::value_objects::carrier::Carrier;
use crate::domain::value_objects::money::Cents;
use crate::infrastructure::carriers::error::{CarrierError, CarrierResult};
use crate::infrastructure::carriers::traits::RawQuote;
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde_json::Value;

/// Normalizes one raw carrier quote into the canonical record.
///
/// # Errors
///
/// Returns [`CarrierError::MalformedResponse`] for any shape other than a
/// positional `[name, cost]` pair or a keyed `{name, cost}` record, or when
/// the cost cannot be represented as non-negative integer cents.
pub fn normalize(carrier: Carrier, raw: &RawQuote) -> CarrierResult<Quote> {
    let (name, cost) = match raw.value() {
        Value::Array(items) => match items.as_slice() {
            [name, cost] => (string_field(carrier, name)?, decimal_field(carrier, cost)?),
            _ => {
                return Err(malformed(
                    carrier,
                    format!("expected two-element array, got {} elements", items.len()),
                ));
            }
        },
        Value::Object(map) => {
            let name = map
                .get("name")
                .or_else(|| map.get("service"))
                .ok_or_else(|| malformed(carrier, "missing 'name' field"))?;
            let cost = map
                .get("cost")
                .or_else(|| map.get("amount"))
                .ok_or_else(|| malformed(carrier, "missing 'cost' field"))?;
            (string_field(carrier, name)?, decimal_field(carrier, cost)?)
        }
        other => {
            return Err(malformed(
                carrier,
                format!("expected array or object, got {other}"),
            ));
        }
    };

    let cost = Cents::from_decimal(cost).map_err(|e| malformed(carrier, e.to_string()))?;
    Quote::new(name, cost).map_err(|e| malformed(carrier, e.to_string()))
}

/// Normalizes a batch of raw quotes, preserving the carrier's own order.
///
/// # Errors
///
/// Fails on the first malformed quote; a carrier response is either
/// trusted whole or reported as a failure.
pub fn normalize_all(carrier: Carrier, raw: &[RawQuote]) -> CarrierResult<Vec<Quote>> {
    raw.iter().map(|quote| normalize(carrier, quote)).collect()
}

fn string_field(carrier: Carrier, value: &Value) -> CarrierResult<String> {
    value
        .as_str()
        .map(str::to_owned)
        .ok_or_else(|| malformed(carrier, format!("expected string name, got {value}")))
}

fn decimal_field(carrier: Carrier, value: &Value) -> CarrierResult<Decimal> {
    match value {
        Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(Decimal::from(int));
            }
            number
                .as_f64()
                .and_then(Decimal::from_f64)
                .ok_or_else(|| malformed(carrier, format!("unrepresentable cost: {number}")))
        }
        other => Err(malformed(
            carrier,
            format!("expected numeric cost, got {other}"),
        )),
    }
}

fn malformed(carrier: Carrier, message: impl std::fmt::Display) -> CarrierError {
    CarrierError::malformed_response(format!("{carrier}: {message}"))
}
