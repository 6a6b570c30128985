//! County FIPS code normalization.
//!
//! A county FIPS code is five digits: a two-digit state prefix followed
//! by a three-digit county number. Tabular sources routinely store the
//! code as a number, dropping the leading zero of states 01-09, so the
//! raw column value must be re-padded before it can join the boundary
//! file.

/// US state FIPS prefixes for the 50 states + DC.
pub const STATE_FIPS: &[&str] = &[
    "01", "02", "04", "05", "06", "08", "09", "10", "11", "12", "13", "15", "16", "17", "18", "19",
    "20", "21", "22", "23", "24", "25", "26", "27", "28", "29", "30", "31", "32", "33", "34", "35",
    "36", "37", "38", "39", "40", "41", "42", "44", "45", "46", "47", "48", "49", "50", "51", "53",
    "54", "55", "56",
];

/// Normalizes a raw county FIPS value to its canonical five-digit form.
///
/// Accepts four-digit values (leading zero dropped by a numeric column)
/// and five-digit values. Returns `None` if the value is not all digits,
/// has an impossible length, or its state prefix is not a real state.
#[must_use]
pub fn normalize_county(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let padded = match trimmed.len() {
        4 => format!("0{trimmed}"),
        5 => trimmed.to_owned(),
        _ => return None,
    };

    if STATE_FIPS.contains(&&padded[..2]) {
        Some(padded)
    } else {
        None
    }
}

/// Returns `true` if `fips` is already a canonical five-digit county
/// FIPS code with a real state prefix.
#[must_use]
pub fn is_valid_county(fips: &str) -> bool {
    fips.len() == 5
        && fips.bytes().all(|b| b.is_ascii_digit())
        && STATE_FIPS.contains(&&fips[..2])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fips_count() {
        assert_eq!(STATE_FIPS.len(), 51);
    }

    #[test]
    fn pads_four_digit_codes() {
        assert_eq!(normalize_county("1001").as_deref(), Some("01001"));
        assert_eq!(normalize_county("9001").as_deref(), Some("09001"));
    }

    #[test]
    fn passes_through_five_digit_codes() {
        assert_eq!(normalize_county("06037").as_deref(), Some("06037"));
        assert_eq!(normalize_county("48201").as_deref(), Some("48201"));
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(normalize_county(" 06037 ").as_deref(), Some("06037"));
    }

    #[test]
    fn rejects_unknown_state_prefix() {
        // 99 is not a state, padded or not.
        assert_eq!(normalize_county("99001"), None);
        assert_eq!(normalize_county("9901"), None);
    }

    #[test]
    fn rejects_malformed_values() {
        assert_eq!(normalize_county(""), None);
        assert_eq!(normalize_county("abcde"), None);
        assert_eq!(normalize_county("123"), None);
        assert_eq!(normalize_county("123456"), None);
        assert_eq!(normalize_county("06-37"), None);
    }

    #[test]
    fn validates_canonical_codes() {
        assert!(is_valid_county("06037"));
        assert!(!is_valid_county("6037"));
        assert!(!is_valid_county("99001"));
        for fips in STATE_FIPS {
            assert!(is_valid_county(&format!("{fips}001")), "prefix {fips}");
        }
    }
}
