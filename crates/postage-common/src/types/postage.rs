//! Postage Types - Price = Base + PerZone × Zones
//!
//! A mailable piece is charged the base rate of its class plus a per-zone
//! surcharge for every zone boundary between origin and destination.
//! Unmailable pieces carry no price at all.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::dimensions::Dimensions;
use super::mail_class::MailClass;

/// A postage amount in dollars, always held at two decimal places
///
/// Deserialized amounts go through [`Price::from_decimal`] like any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "Decimal", into = "Decimal")]
pub struct Price(Decimal);

impl Price {
    /// Decimal places kept in every price
    pub const SCALE: u32 = 2;

    /// Round an amount to cents, half-up
    pub fn from_decimal(amount: Decimal) -> Self {
        let mut rounded =
            amount.round_dp_with_strategy(Self::SCALE, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(Self::SCALE);
        Self(rounded)
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Whole number of cents, or `None` if it does not fit in an `i64`
    pub fn cents(&self) -> Option<i64> {
        self.0.checked_mul(Decimal::ONE_HUNDRED)?.to_i64()
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self::from_decimal(amount)
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Outcome of pricing a mail class
///
/// `Unmailable` is an expected business result, not a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Postage {
    Amount(Price),
    Unmailable,
}

impl Postage {
    pub fn is_unmailable(&self) -> bool {
        matches!(self, Postage::Unmailable)
    }

    /// The price, if the piece is mailable
    pub fn price(&self) -> Option<Price> {
        match self {
            Postage::Amount(price) => Some(*price),
            Postage::Unmailable => None,
        }
    }
}

impl fmt::Display for Postage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Postage::Amount(price) => price.fmt(f),
            Postage::Unmailable => f.write_str(MailClass::Unmailable.label()),
        }
    }
}

/// Request to rate a single mail piece
///
/// Zips are kept raw: an unmailable piece is rated without looking at them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostageRequest {
    /// Piece dimensions in inches
    pub dimensions: Dimensions,

    /// Origin zip, as parsed
    pub start_zip: i64,

    /// Destination zip, as parsed
    pub end_zip: i64,
}

impl PostageRequest {
    pub fn new(dimensions: Dimensions, start_zip: i64, end_zip: i64) -> Self {
        Self {
            dimensions,
            start_zip,
            end_zip,
        }
    }
}

/// Rated mail piece
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostageQuote {
    /// Piece dimensions in inches
    pub dimensions: Dimensions,

    /// Assigned mail class
    pub mail_class: MailClass,

    /// Zones travelled; not resolved for unmailable pieces
    pub zone_distance: Option<u8>,

    /// Final postage
    pub postage: Postage,
}

impl PostageQuote {
    /// Quote for a piece no tariff applies to
    pub fn unmailable(dimensions: Dimensions) -> Self {
        Self {
            dimensions,
            mail_class: MailClass::Unmailable,
            zone_distance: None,
            postage: Postage::Unmailable,
        }
    }
}
