//! Zone resolution
//!
//! Maps zip codes onto six geographic zones. The distance between two
//! zones, not mileage, drives the per-zone surcharge.

pub mod partition;

use postage_common::{Result, ZipCode};

pub use partition::{ZonePartition, ZoneRange, STANDARD_ZONES};

/// Zone index (1..=6) of a zip in the standard partition
pub fn zone_index(zip: u32) -> Result<u8> {
    ZonePartition::standard().zone_of(ZipCode::new(zip)?)
}

/// `|zone(end) - zone(start)|` in the standard partition
pub fn zone_distance(start_zip: u32, end_zip: u32) -> Result<u8> {
    let start = ZipCode::new(start_zip)?;
    let end = ZipCode::new(end_zip)?;
    ZonePartition::standard().distance(start, end)
}
