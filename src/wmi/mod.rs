//! World manufacturer lookup by WMI prefix.
//!
//! Resolves the first two or three characters of a VIN to a manufacturer
//! name. Some manufacturers own a whole 2-character prefix (`1H` is
//! Honda USA), others a single 3-character code (`5YJ` is Tesla), so a
//! 3-character match is tried first and the 2-character prefix second.
//!
//! # Example
//!
//! ```rust
//! use vin_decode::wmi;
//!
//! assert_eq!(wmi::world_manufacturer("1HGCM82633A004352"), "Honda USA");
//! assert_eq!(wmi::world_manufacturer("5YJ"), "Tesla Motors");
//! assert_eq!(wmi::world_manufacturer("??"), "");
//! ```

mod table;

use table::WORLD_MANUFACTURERS;

use crate::core::Vin;

/// Look up the manufacturer for a VIN or bare WMI prefix.
///
/// Returns an empty string when nothing matches. The input is not
/// validated as a VIN; any string of two or more characters is
/// treated as a prefix.
pub fn world_manufacturer(vin_or_wmi: &str) -> &'static str {
    find_world_manufacturer(vin_or_wmi).unwrap_or_default()
}

/// Look up the manufacturer for a VIN or bare WMI prefix.
///
/// Inputs longer than two characters try their 3-character prefix
/// first; every input of at least two characters then falls back to its
/// 2-character prefix. Matching is case-sensitive.
pub fn find_world_manufacturer(vin_or_wmi: &str) -> Option<&'static str> {
    char_prefix(vin_or_wmi, 3)
        .and_then(lookup)
        .or_else(|| char_prefix(vin_or_wmi, 2).and_then(lookup))
}

/// Number of WMI prefixes known to the table.
pub fn known_wmi_count() -> usize {
    WORLD_MANUFACTURERS.len()
}

impl Vin {
    /// Manufacturer name for this VIN's WMI, if known.
    pub fn manufacturer(&self) -> Option<&'static str> {
        find_world_manufacturer(self.as_str())
    }
}

fn lookup(code: &str) -> Option<&'static str> {
    WORLD_MANUFACTURERS
        .binary_search_by(|(key, _)| (*key).cmp(code))
        .ok()
        .map(|i| WORLD_MANUFACTURERS[i].1)
}

/// The first `n` characters of `s`, or `None` if `s` is shorter.
fn char_prefix(s: &str, n: usize) -> Option<&str> {
    s.char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(s.len()))
        .nth(n)
        .map(|end| &s[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_character_fallback() {
        // "1HG" is not in the table, "1H" is.
        assert_eq!(world_manufacturer("1HGCM82633A004352"), "Honda USA");
        assert_eq!(world_manufacturer("1H"), "Honda USA");
    }

    #[test]
    fn three_character_precedence() {
        assert_eq!(world_manufacturer("1HD1KB4197Y123456"), "Harley-Davidson");
        assert_eq!(world_manufacturer("5YJSA1E14FF101183"), "Tesla Motors");
        assert_eq!(world_manufacturer("JA3AJ26E0BU000000"), "Mitsubishi");
        assert_eq!(world_manufacturer("JAA"), "Isuzu");
    }

    #[test]
    fn empty_and_short() {
        assert_eq!(world_manufacturer(""), "");
        assert_eq!(world_manufacturer("1"), "");
        assert_eq!(find_world_manufacturer("W"), None);
    }

    #[test]
    fn unknown_prefix() {
        assert_eq!(world_manufacturer("ZZZZZ"), "");
        assert_eq!(find_world_manufacturer("5Y"), None);
    }

    #[test]
    fn case_sensitive() {
        assert_eq!(world_manufacturer("wvw"), "");
        assert_eq!(world_manufacturer("WVW"), "Volkswagen");
    }

    #[test]
    fn non_ascii_input() {
        assert_eq!(world_manufacturer("1Hé"), "Honda USA");
        assert_eq!(world_manufacturer("éé"), "");
        assert_eq!(world_manufacturer("ü"), "");
    }

    #[test]
    fn char_prefix_boundaries() {
        assert_eq!(char_prefix("ABC", 3), Some("ABC"));
        assert_eq!(char_prefix("AB", 3), None);
        assert_eq!(char_prefix("ÄBC", 2), Some("ÄB"));
    }

    #[test]
    fn vin_manufacturer() {
        let vin = Vin::parse("JH4KA7561PC008269").unwrap();
        assert_eq!(vin.manufacturer(), Some("Honda"));
    }
}
