//! # Postage Rates
//!
//! Mail classification, zone resolution and tariff pricing.
//!
//! ## Pricing Formula
//!
//! ```text
//! Price = Base + PerZone × |zone(end) - zone(start)|
//! ```
//!
//! Where:
//! - Base, PerZone: tariff row of the piece's mail class
//! - zone(zip): one of six static zip ranges
//!
//! ## Pipeline
//!
//! ```text
//! (length, height, thickness) -> Classifier      -> MailClass
//! (start_zip, end_zip)        -> ZonePartition   -> zone distance
//! (MailClass, zone distance)  -> PriceCalculator -> Postage
//! ```
//!
//! Unmailable pieces stop after classification.

pub mod classify;
pub mod pricing;
pub mod zones;

use postage_common::{PostageQuote, PostageRequest, Result, ZipCode};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info, instrument, warn};

pub use classify::{classify, Classifier};
pub use pricing::{price, PriceCalculator, TariffRule, TariffTable};
pub use zones::{zone_distance, zone_index, ZonePartition, ZoneRange};

/// Engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// JSON tariff table replacing the published rates
    pub tariff_file: Option<PathBuf>,
}

/// Classifies, zones and prices mail pieces
///
/// Holds only read-only tables, so one engine can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct PostageEngine {
    classifier: Classifier,
    zones: ZonePartition,
    calculator: PriceCalculator,
}

impl PostageEngine {
    /// Build an engine from configuration
    pub fn new(config: &EngineConfig) -> Result<Self> {
        let tariffs = match &config.tariff_file {
            Some(path) => {
                info!(path = %path.display(), "Using custom tariff table");
                TariffTable::from_json_file(path)?
            }
            None => TariffTable::standard(),
        };

        Ok(Self::with_tables(ZonePartition::standard(), tariffs))
    }

    /// Build an engine from explicit tables
    pub fn with_tables(zones: ZonePartition, tariffs: TariffTable) -> Self {
        Self {
            classifier: Classifier::new(),
            zones,
            calculator: PriceCalculator::new(tariffs),
        }
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    pub fn zones(&self) -> &ZonePartition {
        &self.zones
    }

    pub fn calculator(&self) -> &PriceCalculator {
        &self.calculator
    }

    /// Rate a single piece
    ///
    /// Zips are only resolved for mailable pieces.
    #[instrument(skip(self))]
    pub fn quote(&self, request: &PostageRequest) -> Result<PostageQuote> {
        let mail_class = self.classifier.classify(&request.dimensions);
        if !mail_class.is_mailable() {
            debug!("Piece is unmailable, skipping zone lookup");
            return Ok(PostageQuote::unmailable(request.dimensions));
        }

        let start = ZipCode::from_raw(request.start_zip)?;
        let end = ZipCode::from_raw(request.end_zip)?;
        let zone_distance = self.zones.distance(start, end)?;
        let postage = self.calculator.price(mail_class, zone_distance);

        Ok(PostageQuote {
            dimensions: request.dimensions,
            mail_class,
            zone_distance: Some(zone_distance),
            postage,
        })
    }

    /// Rate many pieces independently; one failure does not affect the rest
    #[instrument(skip_all, fields(count = requests.len()))]
    pub fn quote_batch(&self, requests: &[PostageRequest]) -> Vec<Result<PostageQuote>> {
        requests
            .iter()
            .map(|request| {
                let result = self.quote(request);
                if let Err(e) = &result {
                    warn!(error = %e, "Failed to rate mail piece");
                }
                result
            })
            .collect()
    }
}
