//! Core data types for postage rating

pub mod dimensions;
pub mod mail_class;
pub mod postage;
pub mod zip_code;
