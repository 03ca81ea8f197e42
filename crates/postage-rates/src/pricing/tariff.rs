//! Per-class linear tariffs
//!
//! The tariff is data keyed by mail class, so adjusting a rate never
//! touches control flow. Alternative tables can be loaded from JSON:
//!
//! ```json
//! {
//!   "regular_postcard": { "base": "0.20", "per_zone": "0.03" },
//!   "package": { "base": "2.95", "per_zone": "0.25" }
//! }
//! ```
//!
//! A loaded table must list every mailable class.

use postage_common::{MailClass, PostageError, Price, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, instrument};

/// Base rate plus a surcharge per zone travelled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TariffRule {
    pub base: Decimal,
    pub per_zone: Decimal,
}

impl TariffRule {
    pub const fn new(base: Decimal, per_zone: Decimal) -> Self {
        Self { base, per_zone }
    }

    /// `round(base + per_zone * zones, 2)`
    pub fn charge(&self, zone_distance: u8) -> Price {
        Price::from_decimal(self.base + self.per_zone * Decimal::from(zone_distance))
    }
}

/// Tariff rows for every mailable class
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TariffTable {
    rules: BTreeMap<MailClass, TariffRule>,
}

impl TariffTable {
    /// Published rates
    pub fn standard() -> Self {
        let rules = BTreeMap::from([
            (MailClass::RegularPostcard, TariffRule::new(dec!(0.20), dec!(0.03))),
            (MailClass::LargePostcard, TariffRule::new(dec!(0.37), dec!(0.03))),
            (MailClass::Envelope, TariffRule::new(dec!(0.37), dec!(0.04))),
            (MailClass::LargeEnvelope, TariffRule::new(dec!(0.60), dec!(0.05))),
            (MailClass::Package, TariffRule::new(dec!(2.95), dec!(0.25))),
            (MailClass::LargePackage, TariffRule::new(dec!(3.95), dec!(0.35))),
        ]);
        Self { rules }
    }

    /// Build a table, checking it is complete and non-negative
    pub fn new(rules: BTreeMap<MailClass, TariffRule>) -> Result<Self> {
        let table = Self { rules };
        table.validate()?;
        Ok(table)
    }

    /// Parse a JSON table
    pub fn from_json_str(json: &str) -> Result<Self> {
        let rules: BTreeMap<MailClass, TariffRule> = serde_json::from_str(json)
            .map_err(|e| PostageError::Config(format!("Failed to parse tariff JSON: {}", e)))?;
        Self::new(rules)
    }

    /// Load a JSON table from disk
    #[instrument]
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            PostageError::Config(format!(
                "Failed to read tariff file {}: {}",
                path.display(),
                e
            ))
        })?;
        let table = Self::from_json_str(&content)?;
        debug!(classes = table.rules.len(), "Loaded tariff table");
        Ok(table)
    }

    /// Row for a class; `None` only for unmailable
    pub fn rule(&self, class: MailClass) -> Option<&TariffRule> {
        self.rules.get(&class)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&MailClass, &TariffRule)> {
        self.rules.iter()
    }

    fn validate(&self) -> Result<()> {
        if self.rules.contains_key(&MailClass::Unmailable) {
            return Err(PostageError::Config(
                "Tariff table must not price unmailable pieces".to_string(),
            ));
        }

        for class in MailClass::ALL.iter().filter(|c| c.is_mailable()) {
            let Some(rule) = self.rules.get(class) else {
                return Err(PostageError::Config(format!(
                    "Tariff table has no rate for {}",
                    class
                )));
            };
            if rule.base.is_sign_negative() || rule.per_zone.is_sign_negative() {
                return Err(PostageError::Config(format!(
                    "Tariff for {} has a negative rate",
                    class
                )));
            }
        }

        Ok(())
    }
}

impl Default for TariffTable {
    fn default() -> Self {
        Self::standard()
    }
}
