//! # Carrier Enumeration
//!
//! Closed set of supported shipping carriers.
//!
//! Carrier dispatch is deliberately a closed enumeration rather than
//! string-keyed lookup: every supported carrier is a [`Carrier`] variant with
//! an explicit client implementation, and unrecognized identifiers resolve to
//! `None` rather than an error — an unsupported carrier is a normal business
//! outcome, not a fault.
//!
//! # Examples
//!
//! ```
//! use parcel_rates::domain::value_objects::carrier::Carrier;
//!
//! assert_eq!(Carrier::resolve("ups"), Some(Carrier::Ups));
//! assert_eq!(Carrier::resolve("Lucy's cargo"), None);
//! // Lookup is case-sensitive exact match.
//! assert_eq!(Carrier::resolve("UPS"), None);
//! ```

use crate::domain::value_objects::units::ParseEnumError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A supported shipping carrier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Carrier {
    /// United Parcel Service.
    Ups,
    /// United States Postal Service.
    Usps,
}

impl Carrier {
    /// All supported carriers, in identifier order.
    pub const ALL: [Carrier; 2] = [Carrier::Ups, Carrier::Usps];

    /// Resolves a carrier identifier to a variant.
    ///
    /// Case-sensitive exact match. Returns `None` for unrecognized
    /// identifiers; callers treat absence as "carrier not offered",
    /// never as an error.
    #[must_use]
    pub fn resolve(identifier: &str) -> Option<Self> {
        match identifier {
            "ups" => Some(Self::Ups),
            "usps" => Some(Self::Usps),
            _ => None,
        }
    }

    /// Returns the canonical identifier for this carrier.
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ups => "ups",
            Self::Usps => "usps",
        }
    }
}

impl fmt::Display for Carrier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Carrier {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::resolve(s).ok_or_else(|| ParseEnumError::new("carrier", s))
    }
}
