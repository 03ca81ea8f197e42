//! Static zip-code-to-zone partition

use postage_common::{Result, ZipCode, ZoneError};
use serde::{Deserialize, Serialize};

/// Inclusive range of zips belonging to one zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneRange {
    pub low: u32,
    pub high: u32,
    /// 1-based zone index
    pub zone: u8,
}

impl ZoneRange {
    pub const fn new(low: u32, high: u32, zone: u8) -> Self {
        Self { low, high, zone }
    }

    pub fn contains(&self, zip: u32) -> bool {
        self.low <= zip && zip <= self.high
    }
}

/// Standard zones, ordered by zip
pub const STANDARD_ZONES: [ZoneRange; 6] = [
    ZoneRange::new(1, 6_999, 1),
    ZoneRange::new(7_000, 19_999, 2),
    ZoneRange::new(20_000, 35_999, 3),
    ZoneRange::new(36_000, 62_999, 4),
    ZoneRange::new(63_000, 84_999, 5),
    ZoneRange::new(85_000, 99_999, 6),
];

/// Ordered, contiguous, exhaustive partition of the zip domain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZonePartition {
    ranges: Vec<ZoneRange>,
}

impl ZonePartition {
    /// Build a partition, rejecting gaps, overlaps and misnumbered zones
    pub fn new(ranges: Vec<ZoneRange>) -> Result<Self> {
        let partition = Self { ranges };
        partition.validate()?;
        Ok(partition)
    }

    pub fn standard() -> Self {
        Self {
            ranges: STANDARD_ZONES.to_vec(),
        }
    }

    pub fn ranges(&self) -> &[ZoneRange] {
        &self.ranges
    }

    /// Check the partition covers `ZipCode::MIN..=ZipCode::MAX` exactly once
    pub fn validate(&self) -> Result<()> {
        let (Some(first), Some(last)) = (self.ranges.first(), self.ranges.last()) else {
            return Err(invalid("no zones defined"));
        };

        if first.low != ZipCode::MIN {
            return Err(invalid(format!(
                "first zone starts at {}, expected {}",
                first.low,
                ZipCode::MIN
            )));
        }
        if last.high != ZipCode::MAX {
            return Err(invalid(format!(
                "last zone ends at {}, expected {}",
                last.high,
                ZipCode::MAX
            )));
        }

        for (i, range) in self.ranges.iter().enumerate() {
            if range.low > range.high {
                return Err(invalid(format!(
                    "zone {} has low {} above high {}",
                    range.zone, range.low, range.high
                )));
            }
            if range.zone as usize != i + 1 {
                return Err(invalid(format!(
                    "zone at position {} is numbered {}",
                    i + 1,
                    range.zone
                )));
            }
        }

        for pair in self.ranges.windows(2) {
            if pair[0].high.checked_add(1) != Some(pair[1].low) {
                return Err(invalid(format!(
                    "zones {} and {} are not contiguous ({} then {})",
                    pair[0].zone, pair[1].zone, pair[0].high, pair[1].low
                )));
            }
        }

        Ok(())
    }

    /// Zone index of a zip; first matching range wins
    pub fn zone_of(&self, zip: ZipCode) -> Result<u8> {
        self.ranges
            .iter()
            .find(|range| range.contains(zip.value()))
            .map(|range| range.zone)
            .ok_or_else(|| invalid(format!("zip {} is not covered", zip)))
    }

    /// Zones between two zips; symmetric
    pub fn distance(&self, start: ZipCode, end: ZipCode) -> Result<u8> {
        let start_zone = self.zone_of(start)?;
        let end_zone = self.zone_of(end)?;
        Ok(end_zone.abs_diff(start_zone))
    }
}

impl Default for ZonePartition {
    fn default() -> Self {
        Self::standard()
    }
}

fn invalid(reason: impl Into<String>) -> postage_common::PostageError {
    ZoneError::InvalidPartition(reason.into()).into()
}
