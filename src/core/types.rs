use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::checksum::validate;
use super::error::VinError;
use super::tables::{CHECK_DIGIT_INDEX, VIN_LENGTH, YEAR_CODE_INDEX};

/// A Vehicle Identification Number that passed [`validate`].
///
/// Holding a `Vin` guarantees the value is 17 upper-case ASCII characters
/// from the VIN alphabet with a matching check character. The accessors
/// split it into the ISO 3779 sections:
///
/// ```text
///  1HG  CM826  3  3  A  004352
///  WMI  VDS    |  |  |  serial
///              |  |  plant code
///              |  model year code
///              check character
/// ```
///
/// Serializes as its string; deserialization re-validates.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Vin([u8; VIN_LENGTH]);

impl Vin {
    /// Parse and validate a VIN.
    ///
    /// # Errors
    ///
    /// Returns the first [`VinError`] found by [`validate`].
    pub fn parse(vin: &str) -> Result<Self, VinError> {
        validate(vin)?;
        // validated input is pure ASCII, so bytes and chars coincide
        let mut bytes = [0u8; VIN_LENGTH];
        bytes.copy_from_slice(vin.as_bytes());
        Ok(Self(bytes))
    }

    /// The VIN as a string slice.
    pub fn as_str(&self) -> &str {
        // All bytes come from a validated ASCII string.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }

    /// World Manufacturer Identifier, characters 1-3.
    ///
    /// Some manufacturers are identified by the first two characters
    /// only; see the `wmi` module for the lookup.
    pub fn wmi(&self) -> &str {
        &self.as_str()[..3]
    }

    /// Vehicle Descriptor Section, characters 4-8.
    pub fn vds(&self) -> &str {
        &self.as_str()[3..CHECK_DIGIT_INDEX]
    }

    /// Check character, position 9.
    pub fn check_character(&self) -> char {
        self.0[CHECK_DIGIT_INDEX] as char
    }

    /// Vehicle Identifier Section, characters 10-17.
    pub fn vis(&self) -> &str {
        &self.as_str()[YEAR_CODE_INDEX..]
    }

    /// Model year code, position 10.
    pub fn year_code(&self) -> char {
        self.0[YEAR_CODE_INDEX] as char
    }

    /// Assembly plant code, position 11.
    pub fn plant_code(&self) -> char {
        self.0[YEAR_CODE_INDEX + 1] as char
    }

    /// Sequential production number, characters 12-17.
    pub fn serial_number(&self) -> &str {
        &self.as_str()[YEAR_CODE_INDEX + 2..]
    }
}

impl fmt::Display for Vin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Vin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Vin").field(&self.as_str()).finish()
    }
}

impl AsRef<str> for Vin {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for Vin {
    type Err = VinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Vin {
    type Error = VinError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for Vin {
    type Error = VinError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Vin> for String {
    fn from(vin: Vin) -> Self {
        vin.as_str().to_owned()
    }
}
