//! Physical dimensions of a mail piece, in inches

use serde::{Deserialize, Serialize};

use crate::error::{DimensionError, PostageError, Result};

/// Length, height and thickness of a mail piece
///
/// Values are validated on construction and deserialization: all three
/// must be finite and non-negative. There is no identity beyond the triple.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDimensions")]
pub struct Dimensions {
    length: f64,
    height: f64,
    thickness: f64,
}

/// Unchecked wire form of [`Dimensions`]
#[derive(Debug, Clone, Copy, Deserialize)]
struct RawDimensions {
    length: f64,
    height: f64,
    thickness: f64,
}

impl TryFrom<RawDimensions> for Dimensions {
    type Error = PostageError;

    fn try_from(raw: RawDimensions) -> Result<Self> {
        Self::new(raw.length, raw.height, raw.thickness)
    }
}

impl Dimensions {
    /// Create validated dimensions
    pub fn new(length: f64, height: f64, thickness: f64) -> Result<Self> {
        check("length", length)?;
        check("height", height)?;
        check("thickness", thickness)?;

        Ok(Self {
            length,
            height,
            thickness,
        })
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    /// Perimeter of the cross-section: `2 * height + 2 * thickness`
    pub fn perimeter(&self) -> f64 {
        2.0 * self.height + 2.0 * self.thickness
    }

    /// Length plus the cross-section perimeter
    pub fn girthed_length(&self) -> f64 {
        self.length + self.perimeter()
    }
}

fn check(name: &'static str, value: f64) -> std::result::Result<(), DimensionError> {
    if !value.is_finite() {
        return Err(DimensionError::NonFinite { name, value });
    }
    if value < 0.0 {
        return Err(DimensionError::Negative { name, value });
    }
    Ok(())
}
