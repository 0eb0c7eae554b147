use thiserror::Error;

/// Reasons a string is rejected as a VIN.
///
/// Variants are reported in the order the checks run: length first,
/// then the check character, then every character left to right, and
/// the checksum last.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum VinError {
    /// The input is not exactly 17 characters long.
    #[error("invalid length: expected 17 characters, found {found}")]
    Length {
        /// Number of characters in the input.
        found: usize,
    },

    /// Position 9 holds something other than `0`-`9` or `X`.
    #[error("invalid check character '{found}' at position 9")]
    CheckCharacter {
        /// The character found at position 9.
        found: char,
    },

    /// A character outside the VIN alphabet (e.g. `I`, `O`, `Q`).
    #[error("invalid character '{found}' at position {position}")]
    Character {
        /// 1-based position of the first offending character.
        position: usize,
        /// The offending character.
        found: char,
    },

    /// The weighted checksum does not match the check character.
    #[error("check digit mismatch: computed '{expected}', found '{found}'")]
    Checksum {
        /// Check character computed from the other 16 characters.
        expected: char,
        /// Check character present in the input.
        found: char,
    },
}
