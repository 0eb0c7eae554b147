//! ISO 3779 check-digit tables.
//!
//! Weights, transliteration values, the check-character alphabet and the
//! model-year code cycle. All lookups are `const fn` matches, so the
//! tables live in the binary and need no initialization.

/// Number of characters in a VIN.
pub const VIN_LENGTH: usize = 17;

/// 0-based index of the check character (position 9).
pub const CHECK_DIGIT_INDEX: usize = 8;

/// 0-based index of the model year code (position 10).
pub const YEAR_CODE_INDEX: usize = 9;

/// Length of the model year cycle.
pub const YEAR_CYCLE: i32 = 30;

/// Per-position checksum weights. The check character itself weighs 0.
pub const CHARACTER_WEIGHTS: [u32; VIN_LENGTH] =
    [8, 7, 6, 5, 4, 3, 2, 10, 0, 9, 8, 7, 6, 5, 4, 3, 2];

/// Numeric value of a VIN character for checksum arithmetic.
///
/// Returns `None` for characters that never appear in a VIN: `I`, `O`,
/// `Q`, lower case, and anything that is not an ASCII letter or digit.
pub const fn transliterate(c: char) -> Option<u32> {
    let value = match c {
        'A' | 'J' => 1,
        'B' | 'K' | 'S' => 2,
        'C' | 'L' | 'T' => 3,
        'D' | 'M' | 'U' => 4,
        'E' | 'N' | 'V' => 5,
        'F' | 'W' => 6,
        'G' | 'P' | 'X' => 7,
        'H' | 'Y' => 8,
        'R' | 'Z' => 9,
        '0'..='9' => c as u32 - '0' as u32,
        _ => return None,
    };
    Some(value)
}

/// Value encoded by a check character: `0`-`9` as themselves, `X` as 10.
pub const fn check_character_value(c: char) -> Option<u32> {
    match c {
        '0'..='9' => Some(c as u32 - '0' as u32),
        'X' => Some(10),
        _ => None,
    }
}

/// Check character for a checksum remainder (0..=10).
pub(crate) const fn check_character_for(remainder: u32) -> char {
    match remainder {
        10 => 'X',
        r => (b'0' + (r % 10) as u8) as char,
    }
}

/// Offset of a model year code within its 30-year cycle.
///
/// `A` is the first year of a cycle (1980, 2010, ...), `9` the last.
/// `I`, `O`, `Q`, `U`, `Z` and `0` are not year codes.
pub const fn year_code_offset(c: char) -> Option<i32> {
    let offset = match c {
        'A' => 0,
        'B' => 1,
        'C' => 2,
        'D' => 3,
        'E' => 4,
        'F' => 5,
        'G' => 6,
        'H' => 7,
        'J' => 8,
        'K' => 9,
        'L' => 10,
        'M' => 11,
        'N' => 12,
        'P' => 13,
        'R' => 14,
        'S' => 15,
        'T' => 16,
        'V' => 17,
        'W' => 18,
        'X' => 19,
        'Y' => 20,
        '1'..='9' => 20 + (c as i32 - '0' as i32),
        _ => return None,
    };
    Some(offset)
}
