//! One-shot VIN decoding.
//!
//! Validates a VIN and gathers everything the crate can derive from it
//! into a [`DecodedVin`] report.
//!
//! # Example
//!
//! ```rust
//! use vin_decode::decode::decode_at;
//!
//! let report = decode_at("1HGCM82633A004352", None, 2024).unwrap();
//! assert_eq!(report.manufacturer.as_deref(), Some("Honda USA"));
//! assert_eq!(report.model_year, Some(2003));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{Vin, VinError};
use crate::wmi::find_world_manufacturer;
use crate::year::{checked_model_year, current_year};

/// Everything decoded from a valid VIN.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedVin {
    /// The validated VIN.
    pub vin: Vin,
    /// World Manufacturer Identifier (characters 1-3).
    pub wmi: String,
    /// Manufacturer name, if the WMI is in the table.
    pub manufacturer: Option<String>,
    /// Vehicle Descriptor Section (characters 4-8).
    pub vds: String,
    /// Check character (position 9).
    pub check_character: char,
    /// Model year code (position 10).
    pub year_code: char,
    /// Decoded model year, `None` for an unrecognized year code or a
    /// year outside the `i32` range.
    pub model_year: Option<i32>,
    /// Assembly plant code (position 11).
    pub plant_code: char,
    /// Sequential production number (characters 12-17).
    pub serial_number: String,
}

/// Validate and decode a VIN relative to today's date.
///
/// `start_year` anchors the model year cycle as in
/// [`crate::year::model_year`].
///
/// # Errors
///
/// Returns the [`VinError`] from validation if `vin` is not a valid VIN.
pub fn decode(vin: &str, start_year: Option<i32>) -> Result<DecodedVin, VinError> {
    decode_at(vin, start_year, current_year())
}

/// Validate and decode a VIN as if the current year were `current_year`.
///
/// # Errors
///
/// Returns the [`VinError`] from validation if `vin` is not a valid VIN.
pub fn decode_at(
    vin: &str,
    start_year: Option<i32>,
    current_year: i32,
) -> Result<DecodedVin, VinError> {
    let vin = Vin::parse(vin)?;

    let model_year = checked_model_year(vin.year_code(), start_year, current_year);

    Ok(DecodedVin {
        vin,
        wmi: vin.wmi().to_owned(),
        manufacturer: find_world_manufacturer(vin.as_str()).map(str::to_owned),
        vds: vin.vds().to_owned(),
        check_character: vin.check_character(),
        year_code: vin.year_code(),
        model_year,
        plant_code: vin.plant_code(),
        serial_number: vin.serial_number().to_owned(),
    })
}

impl fmt::Display for DecodedVin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "VIN:             {}", self.vin)?;
        writeln!(
            f,
            "WMI:             {} ({})",
            self.wmi,
            self.manufacturer.as_deref().unwrap_or("unknown manufacturer")
        )?;
        writeln!(f, "VDS:             {}", self.vds)?;
        writeln!(f, "Check character: {}", self.check_character)?;
        match self.model_year {
            Some(year) => writeln!(f, "Model year:      {year} (code {})", self.year_code)?,
            None => writeln!(f, "Model year:      unknown (code {})", self.year_code)?,
        }
        writeln!(f, "Plant code:      {}", self.plant_code)?;
        write!(f, "Serial number:   {}", self.serial_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_honda() {
        let d = decode_at("1HGCM82633A004352", None, 2024).unwrap();
        assert_eq!(d.vin.as_str(), "1HGCM82633A004352");
        assert_eq!(d.wmi, "1HG");
        assert_eq!(d.manufacturer.as_deref(), Some("Honda USA"));
        assert_eq!(d.vds, "CM826");
        assert_eq!(d.check_character, '3');
        assert_eq!(d.year_code, '3');
        assert_eq!(d.model_year, Some(2003));
        assert_eq!(d.plant_code, 'A');
        assert_eq!(d.serial_number, "004352");
    }

    #[test]
    fn decode_rejects_invalid() {
        assert_eq!(
            decode_at("5YJSA1E14FF101183", None, 2024),
            Err(VinError::Checksum {
                expected: '1',
                found: '4'
            })
        );
        assert_eq!(decode("", None), Err(VinError::Length { found: 0 }));
    }

    #[test]
    fn unknown_manufacturer_and_year() {
        // All-ones VIN: valid checksum, no WMI "11"/"111", year code '1'.
        let d = decode_at("11111111111111111", Some(1980), 2024).unwrap();
        assert_eq!(d.manufacturer, None);
        assert_eq!(d.model_year, Some(2001));

        // 'U' is a VIN character but not a year code.
        let d = decode_at("1HGCM8261UA004352", None, 2024).unwrap();
        assert_eq!(d.manufacturer.as_deref(), Some("Honda USA"));
        assert_eq!(d.model_year, None);
        assert!(d.to_string().contains("Model year:      unknown (code U)"));
    }

    #[test]
    fn overflowing_start_year_is_unknown() {
        let d = decode_at("1HGCM82633A004352", Some(i32::MAX), 2024).unwrap();
        assert_eq!(d.model_year, None);
    }

    #[test]
    fn display_unknown() {
        let d = decode_at("11111111111111111", Some(1980), 2024).unwrap();
        let text = d.to_string();
        assert!(text.contains("WMI:             111 (unknown manufacturer)"));
        assert!(text.contains("Model year:      2001 (code 1)"));
    }
}
