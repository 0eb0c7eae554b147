use super::error::VinError;
use super::tables::{
    CHARACTER_WEIGHTS, CHECK_DIGIT_INDEX, VIN_LENGTH, check_character_for, check_character_value,
    transliterate,
};

/// Check whether `vin` is a valid VIN.
///
/// A valid VIN is exactly 17 characters from the VIN alphabet (no `I`,
/// `O` or `Q`, upper case only) whose 9th character matches the ISO 3779
/// weighted checksum. Never panics; every rejection is just `false`.
///
/// ```rust
/// assert!(vin_decode::is_valid("1HGCM82633A004352"));
/// assert!(!vin_decode::is_valid("1HGCM82633A00435"));
/// ```
pub fn is_valid(vin: &str) -> bool {
    validate(vin).is_ok()
}

/// Validate `vin` and report why it was rejected.
///
/// Runs the same checks as [`is_valid`] in the same order and returns
/// the first failure.
///
/// # Errors
///
/// - [`VinError::Length`] if the input is not 17 characters,
/// - [`VinError::CheckCharacter`] if position 9 is not `0`-`9`/`X`,
/// - [`VinError::Character`] for the first character outside the VIN alphabet,
/// - [`VinError::Checksum`] if the check character does not match.
pub fn validate(vin: &str) -> Result<(), VinError> {
    let found = vin.chars().count();
    if found != VIN_LENGTH {
        return Err(VinError::Length { found });
    }

    let check = vin.chars().nth(CHECK_DIGIT_INDEX).unwrap_or_default();
    let Some(check_value) = check_character_value(check) else {
        return Err(VinError::CheckCharacter { found: check });
    };

    let mut sum = 0;
    for (i, c) in vin.chars().enumerate() {
        let Some(value) = transliterate(c) else {
            return Err(VinError::Character {
                position: i + 1,
                found: c,
            });
        };
        sum += CHARACTER_WEIGHTS[i] * value;
    }

    let remainder = sum % 11;
    if remainder != check_value {
        return Err(VinError::Checksum {
            expected: check_character_for(remainder),
            found: check,
        });
    }

    Ok(())
}
