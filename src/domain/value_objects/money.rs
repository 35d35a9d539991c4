//! # Monetary Cost
//!
//! Integer cost in the smallest currency unit.
//!
//! Carrier backends quote amounts with varying precision; everything is
//! coerced to [`Cents`] at the normalization boundary with one explicit
//! rounding policy: **round half up** (midpoint away from zero). No other
//! rounding is applied anywhere in the crate.
//!
//! # Examples
//!
//! ```
//! use parcel_rates::domain::value_objects::money::Cents;
//! use rust_decimal::Decimal;
//!
//! let cost = Cents::from_decimal(Decimal::new(12345, 1)).unwrap(); // 1234.5
//! assert_eq!(cost.get(), 1235);
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A cost in the smallest currency unit (e.g. US cents).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Cents(i64);

impl Cents {
    /// Zero cost.
    pub const ZERO: Cents = Cents(0);

    /// Creates a cost from a known integer amount.
    #[inline]
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw integer amount.
    #[inline]
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Coerces a decimal amount (in smallest-unit terms) to integer cents.
    ///
    /// Fractional amounts round half up: `1234.5` becomes `1235`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidCost`] if the amount is negative or
    /// does not fit in an `i64`.
    pub fn from_decimal(amount: Decimal) -> DomainResult<Self> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(DomainError::invalid_cost(format!(
                "cost cannot be negative: {amount}"
            )));
        }
        let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        rounded
            .to_i64()
            .map(Self)
            .ok_or_else(|| DomainError::invalid_cost(format!("cost out of range: {amount}")))
    }
}

impl fmt::Display for Cents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Cents> for i64 {
    fn from(value: Cents) -> Self {
        value.get()
    }
}
