//! Contact number normalization

/// Local mobile prefix rewritten to the international form
const LOCAL_MOBILE_PREFIX: &str = "010";

/// Country calling code that replaces the leading `0`
const COUNTRY_CALLING_CODE: &str = "+82";

/// Normalize a contact number.
///
/// Every non-digit character is dropped. Numbers starting with `010` have
/// their leading `0` replaced with `+82`; anything else is returned as bare
/// digits without a country code.
///
/// The result is not stable under re-normalization: `+821012345678` becomes
/// `821012345678`.
pub fn normalize_contact(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();

    if digits.starts_with(LOCAL_MOBILE_PREFIX) {
        // Drop the trunk `0`
        format!("{}{}", COUNTRY_CALLING_CODE, &digits[1..])
    } else {
        digits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashed_mobile_number() {
        assert_eq!(normalize_contact("010-1234-5678"), "+821012345678");
    }

    #[test]
    fn test_bare_mobile_number() {
        assert_eq!(normalize_contact("01012345678"), "+821012345678");
    }

    #[test]
    fn test_mobile_number_with_spaces_and_parens() {
        assert_eq!(normalize_contact(" (010) 1234 5678 "), "+821012345678");
    }

    #[test]
    fn test_landline_keeps_digits_only() {
        assert_eq!(normalize_contact("02-910-6681"), "029106681");
    }

    #[test]
    fn test_other_mobile_prefix_is_not_internationalized() {
        assert_eq!(normalize_contact("011-123-4567"), "0111234567");
    }

    #[test]
    fn test_canonical_output_is_not_idempotent() {
        let once = normalize_contact("010-1234-5678");
        assert_eq!(normalize_contact(&once), "821012345678");
    }

    #[test]
    fn test_empty_and_non_digit_input() {
        assert_eq!(normalize_contact(""), "");
        assert_eq!(normalize_contact("n/a"), "");
        assert_eq!(normalize_contact("0"), "0");
        assert_eq!(normalize_contact("01"), "01");
    }

    #[test]
    fn test_non_ascii_digits_are_dropped() {
        assert_eq!(normalize_contact("010-１２３４-5678"), "+82105678");
    }
}
