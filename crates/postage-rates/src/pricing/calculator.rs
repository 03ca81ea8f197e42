//! Postage calculation: Price = Base + PerZone × Zones

use postage_common::{MailClass, Postage};
use tracing::debug;

use super::tariff::TariffTable;

/// Prices a classified piece against a tariff table
#[derive(Debug, Clone, Default)]
pub struct PriceCalculator {
    tariffs: TariffTable,
}

impl PriceCalculator {
    pub fn new(tariffs: TariffTable) -> Self {
        Self { tariffs }
    }

    pub fn tariffs(&self) -> &TariffTable {
        &self.tariffs
    }

    /// Postage for a class and zone distance
    ///
    /// Unmailable short-circuits to the sentinel. Tables are complete for
    /// every mailable class by construction, so no other class reaches it.
    pub fn price(&self, class: MailClass, zone_distance: u8) -> Postage {
        let Some(rule) = self.tariffs.rule(class) else {
            return Postage::Unmailable;
        };

        let price = rule.charge(zone_distance);
        debug!(class = %class, zone_distance, price = %price, "Priced mail piece");
        Postage::Amount(price)
    }
}

/// Price with the standard tariff table
pub fn price(class: MailClass, zone_distance: u8) -> Postage {
    PriceCalculator::default().price(class, zone_distance)
}
