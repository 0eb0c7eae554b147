//! Check-digit validation, VIN tables, and the [`Vin`] type.
//!
//! This module implements the ISO 3779 / NHTSA weighted checksum and
//! holds the static tables every other module decodes against.

mod checksum;
mod error;
pub mod tables;
mod types;

pub use checksum::*;
pub use error::*;
pub use tables::{VIN_LENGTH, transliterate};
pub use types::*;
