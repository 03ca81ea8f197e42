//! Five-digit postal codes

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{PostageError, Result, ZoneError};

/// A postal zip code in `ZipCode::MIN..=ZipCode::MAX`
///
/// Parsed as a number, so leading zeros carry no meaning here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct ZipCode(u32);

impl ZipCode {
    /// Lowest zip covered by the zone partition
    pub const MIN: u32 = 1;
    /// Highest five-digit zip
    pub const MAX: u32 = 99_999;

    /// Create a zip code, rejecting values outside the valid range
    pub fn new(zip: u32) -> Result<Self> {
        Self::from_raw(zip as i64)
    }

    /// Range-check a raw, possibly negative, parsed zip value
    pub fn from_raw(zip: i64) -> Result<Self> {
        if zip < Self::MIN as i64 || zip > Self::MAX as i64 {
            return Err(ZoneError::OutOfRangeZip {
                zip,
                min: Self::MIN,
                max: Self::MAX,
            }
            .into());
        }
        Ok(Self(zip as u32))
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl FromStr for ZipCode {
    type Err = PostageError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let zip: i64 = trimmed
            .parse()
            .map_err(|_| PostageError::Parse(format!("invalid zip code: {:?}", trimmed)))?;
        Self::from_raw(zip)
    }
}

impl TryFrom<u32> for ZipCode {
    type Error = PostageError;

    fn try_from(zip: u32) -> Result<Self> {
        Self::new(zip)
    }
}

impl From<ZipCode> for u32 {
    fn from(zip: ZipCode) -> Self {
        zip.0
    }
}

impl fmt::Display for ZipCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:05}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        assert!(ZipCode::new(1).is_ok());
        assert!(ZipCode::new(99_999).is_ok());
        assert!(ZipCode::new(0).is_err());
        assert!(ZipCode::new(100_000).is_err());
    }

    #[test]
    fn test_parse_trims_and_keeps_leading_zeros_numeric() {
        let zip: ZipCode = " 06999 ".parse().unwrap();
        assert_eq!(zip.value(), 6999);
        assert_eq!(zip.to_string(), "06999");
    }

    #[test]
    fn test_parse_negative_is_out_of_range() {
        let err = "-5".parse::<ZipCode>().unwrap_err();
        assert!(matches!(
            err,
            PostageError::Zone(ZoneError::OutOfRangeZip { zip: -5, .. })
        ));
    }

    #[test]
    fn test_parse_garbage() {
        assert!(matches!(
            "12a45".parse::<ZipCode>(),
            Err(PostageError::Parse(_))
        ));
    }

    #[test]
    fn test_serde_validates() {
        let zip: ZipCode = serde_json::from_str("20500").unwrap();
        assert_eq!(zip.value(), 20500);
        assert!(serde_json::from_str::<ZipCode>("0").is_err());
    }
}
