//! Pricing module
//!
//! Provides tariff-based postage calculation with:
//! - A per-class linear tariff (base + per-zone surcharge)
//! - Half-up rounding to cents
//! - An unmailable sentinel instead of an error

pub mod calculator;
pub mod tariff;

pub use calculator::{price, PriceCalculator};
pub use tariff::{TariffRule, TariffTable};
