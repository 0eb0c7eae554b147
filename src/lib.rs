//! # vin-decode
//!
//! Vehicle Identification Number validation and decoding per ISO 3779
//! and the NHTSA check-digit rules: checksum validation, world
//! manufacturer lookup, and model year decoding.
//!
//! Every lookup runs against static tables compiled into the crate.
//! The plain functions never fail: an invalid or undecodable input
//! yields `false`, `""` or `0`. [`validate`], [`Vin::parse`] and
//! [`decode::decode`] report the reason with a [`VinError`] instead.
//!
//! ## Quick Start
//!
//! ```rust
//! use vin_decode::{is_valid, wmi, year};
//!
//! let vin = "1HGCM82633A004352";
//! assert!(is_valid(vin));
//! assert_eq!(wmi::world_manufacturer(vin), "Honda USA");
//! assert_eq!(year::model_year(vin, Some(1980)), 2003);
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` | Check-digit validation, [`Vin`], [`VinError`] |
//! | `wmi` | World manufacturer lookup |
//! | `year` | Model year decoding |
//! | `decode` | One-shot [`decode::DecodedVin`] report |
//! | `all` (default) | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "wmi")]
pub mod wmi;

#[cfg(feature = "year")]
pub mod year;

#[cfg(feature = "decode")]
pub mod decode;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
