//! # Postage Common
//!
//! Shared types and errors for the postage rating engine.
//!
//! ## Core Types
//!
//! - [`Dimensions`]: validated length, height and thickness of a piece
//! - [`MailClass`]: category assigned from the dimensions
//! - [`ZipCode`]: range-checked five-digit postal code
//! - [`Price`]/[`Postage`]: two-decimal amount, or the unmailable sentinel
//! - [`PostageRequest`]/[`PostageQuote`]: per-piece rating input and result

pub mod error;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{DimensionError, PostageError, Result, ZoneError};
pub use types::{
    dimensions::Dimensions,
    mail_class::MailClass,
    postage::{Postage, PostageQuote, PostageRequest, Price},
    zip_code::ZipCode,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of zones in the zip partition
pub const ZONE_COUNT: u8 = 6;

/// Largest possible zone distance
pub const MAX_ZONE_DISTANCE: u8 = ZONE_COUNT - 1;
