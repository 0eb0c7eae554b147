//! Check-digit validation against real-world VINs.

#![cfg(feature = "core")]

use vin_decode::{VIN_LENGTH, Vin, VinError, is_valid, validate};

/// Real VINs with a correct check digit.
const VALID_VINS: &[&str] = &[
    "1HGCM82633A004352", // Honda Accord
    "1M8GDM9AXKP042788", // check digit X
    "1GNEK13ZX3R298984", // check digit X
    "JH4KA7561PC008269", // Acura Legend
    "5YJSA1E11FF101183", // Tesla Model S
    "11111111111111111",
];

// ---------------------------------------------------------------------------
// Valid VINs
// ---------------------------------------------------------------------------

#[test]
fn known_valid_vins() {
    for vin in VALID_VINS {
        assert!(is_valid(vin), "{vin} should be valid");
        assert_eq!(validate(vin), Ok(()), "{vin}");
    }
}

#[test]
fn vin_type_accepts_valid() {
    for vin in VALID_VINS {
        let parsed = Vin::parse(vin).unwrap();
        assert_eq!(parsed.as_str(), *vin);
        assert_eq!(parsed.to_string(), *vin);
    }
}

// ---------------------------------------------------------------------------
// Length
// ---------------------------------------------------------------------------

#[test]
fn empty_is_invalid() {
    assert!(!is_valid(""));
}

#[test]
fn one_short_one_long() {
    assert!(!is_valid("1HGCM82633A00435"));
    assert!(!is_valid("1HGCM82633A0043520"));
    assert!(!is_valid(" 1HGCM82633A004352"));
    assert!(!is_valid("1HGCM82633A004352\n"));
}

#[test]
fn length_counts_characters() {
    assert_eq!(validate("ÄÄÄ"), Err(VinError::Length { found: 3 }));
}

// ---------------------------------------------------------------------------
// Alphabet
// ---------------------------------------------------------------------------

#[test]
fn i_o_q_are_never_valid() {
    for bad in ['I', 'O', 'Q'] {
        for pos in 0..VIN_LENGTH {
            let mut chars: Vec<char> = "1HGCM82633A004352".chars().collect();
            chars[pos] = bad;
            let vin: String = chars.into_iter().collect();
            assert!(!is_valid(&vin), "{vin}");
        }
    }
}

#[test]
fn lower_case_is_invalid() {
    assert!(!is_valid("1hgcm82633a004352"));
    assert_eq!(
        validate("1HGCM82633a004352"),
        Err(VinError::Character {
            position: 11,
            found: 'a'
        })
    );
}

#[test]
fn punctuation_is_invalid() {
    assert!(!is_valid("1HGCM-2633A004352"));
    assert!(!is_valid("1HGCM 2633A004352"));
}

// ---------------------------------------------------------------------------
// Checksum
// ---------------------------------------------------------------------------

#[test]
fn wrong_check_digit() {
    assert!(!is_valid("5YJSA1E14FF101183"));
    assert_eq!(
        validate("5YJSA1E14FF101183"),
        Err(VinError::Checksum {
            expected: '1',
            found: '4'
        })
    );
}

#[test]
fn every_other_check_character_fails() {
    for c in "0123456789X".chars().filter(|c| *c != '3') {
        let vin = format!("1HGCM826{c}3A004352");
        assert!(!is_valid(&vin), "{vin}");
    }
}

#[test]
fn transposed_characters_fail() {
    // Swapping positions 1 and 2 ('1' <-> 'H') changes the weighted sum.
    assert!(!is_valid("H1GCM82633A004352"));
}

#[test]
fn same_transliteration_is_indistinguishable() {
    // 'A' and 'J' both transliterate to 1, so swapping them keeps the sum.
    assert!(is_valid("1HGCM82633J004352"));
}

// ---------------------------------------------------------------------------
// Error messages
// ---------------------------------------------------------------------------

#[test]
fn error_messages() {
    assert_eq!(
        validate("1HGC").unwrap_err().to_string(),
        "invalid length: expected 17 characters, found 4"
    );
    assert_eq!(
        validate("1HGCM826Z3A004352").unwrap_err().to_string(),
        "invalid check character 'Z' at position 9"
    );
    assert_eq!(
        validate("1HGCM8263QA004352").unwrap_err().to_string(),
        "invalid character 'Q' at position 10"
    );
    assert_eq!(
        validate("1HGCM82603A004352").unwrap_err().to_string(),
        "check digit mismatch: computed '3', found '0'"
    );
}

#[test]
fn errors_are_std_errors() {
    let err: Box<dyn std::error::Error> = Box::new(Vin::parse("").unwrap_err());
    assert!(err.to_string().contains("found 0"));
}
