//! Model year decoding from the 10th VIN character.
//!
//! Year codes repeat every 30 years (`A` is 1980, 2010, 2040, ...), so a
//! code alone is ambiguous. Decoding anchors the code to a start year,
//! by default the first year of the current 30-year cycle, and folds
//! results that land after next calendar year back one cycle. A vehicle
//! may carry next year's model year, so `current_year + 1` still counts
//! as "now".
//!
//! # Example
//!
//! ```rust
//! use vin_decode::year;
//!
//! assert_eq!(year::model_year_from_code('A', Some(1980)), 1980);
//! assert_eq!(year::resolve_model_year('3', None, 2024), 2003);
//! assert_eq!(year::model_year("1HGCM826", None), 0);
//! ```

use chrono::{Datelike, Local};

use crate::core::Vin;
use crate::core::tables::{YEAR_CODE_INDEX, YEAR_CYCLE, year_code_offset};

/// Decode the model year of a VIN.
///
/// Reads the 10th character and decodes it with
/// [`model_year_from_code`]. Returns `0` for input shorter than ten
/// characters or an unrecognized year code. The rest of the VIN is not
/// validated.
pub fn model_year(vin: &str, start_year: Option<i32>) -> i32 {
    match vin.chars().nth(YEAR_CODE_INDEX) {
        Some(code) => model_year_from_code(code, start_year),
        None => 0,
    }
}

/// Decode a single model year code relative to today's date.
///
/// `start_year` is the first year of the cycle to decode into; `None`
/// or `Some(0)` selects the cycle containing the current year. Returns
/// `0` if `code` is not a year code.
pub fn model_year_from_code(code: char, start_year: Option<i32>) -> i32 {
    resolve_model_year(code, start_year, current_year())
}

/// Decode a model year code as if the current year were `current_year`.
///
/// ```rust
/// use vin_decode::year::resolve_model_year;
///
/// assert_eq!(resolve_model_year('P', None, 2024), 2023);
/// assert_eq!(resolve_model_year('P', None, 2021), 1993);
/// assert_eq!(resolve_model_year('P', Some(1980), 2024), 1993);
/// ```
pub fn resolve_model_year(code: char, start_year: Option<i32>, current_year: i32) -> i32 {
    checked_model_year(code, start_year, current_year).unwrap_or(0)
}

/// Decode a model year code as if the current year were `current_year`.
///
/// Returns `None` if `code` is not a year code or the year does not fit
/// in an `i32`.
pub fn checked_model_year(code: char, start_year: Option<i32>, current_year: i32) -> Option<i32> {
    let offset = year_code_offset(code)?;
    let start = match start_year {
        Some(year) if year != 0 => year,
        _ => default_start_year(current_year),
    };

    let year = start.checked_add(offset)?;
    if year > current_year.saturating_add(1) {
        year.checked_sub(YEAR_CYCLE)
    } else {
        Some(year)
    }
}

/// First year of the 30-year cycle containing `current_year`.
///
/// Saturates at `i32::MIN` for years below the first representable cycle.
pub fn default_start_year(current_year: i32) -> i32 {
    current_year.saturating_sub(current_year.rem_euclid(YEAR_CYCLE))
}

/// The current calendar year in local time.
pub fn current_year() -> i32 {
    Local::now().year()
}

impl Vin {
    /// Model year of this VIN, or `None` if the year code is unknown or
    /// the year does not fit in an `i32`.
    pub fn model_year(&self, start_year: Option<i32>) -> Option<i32> {
        checked_model_year(self.year_code(), start_year, current_year())
    }
}
