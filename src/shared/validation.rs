use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// State code: exactly two decimal digits
    /// - Valid: "01", "24"
    /// - Invalid: "1", "001", "0a"
    pub static ref STATE_CODE_REGEX: Regex = Regex::new(r"^[0-9]{2}$").unwrap();

    /// Municipality code: four digits, optionally padded with the "00" parish placeholder
    /// - Valid: "0701", "070100"
    /// - Invalid: "070", "070101", "07010"
    pub static ref MUNICIPALITY_CODE_REGEX: Regex = Regex::new(r"^[0-9]{4}(?:00)?$").unwrap();

    /// Parish code: exactly six decimal digits
    /// - Valid: "070101"
    /// - Invalid: "07010", "0701010", "07-101"
    pub static ref PARISH_CODE_REGEX: Regex = Regex::new(r"^[0-9]{6}$").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_code_regex() {
        assert!(STATE_CODE_REGEX.is_match("01"));
        assert!(STATE_CODE_REGEX.is_match("24"));
        assert!(!STATE_CODE_REGEX.is_match("1"));
        assert!(!STATE_CODE_REGEX.is_match("001"));
        assert!(!STATE_CODE_REGEX.is_match("0a"));
        assert!(!STATE_CODE_REGEX.is_match(""));
    }

    #[test]
    fn test_municipality_code_regex() {
        assert!(MUNICIPALITY_CODE_REGEX.is_match("0701"));
        assert!(MUNICIPALITY_CODE_REGEX.is_match("070100"));
        assert!(!MUNICIPALITY_CODE_REGEX.is_match("070"));
        assert!(!MUNICIPALITY_CODE_REGEX.is_match("070101")); // parish code
        assert!(!MUNICIPALITY_CODE_REGEX.is_match("07010"));
    }

    #[test]
    fn test_parish_code_regex() {
        assert!(PARISH_CODE_REGEX.is_match("070101"));
        assert!(!PARISH_CODE_REGEX.is_match("07010"));
        assert!(!PARISH_CODE_REGEX.is_match("0701010"));
        assert!(!PARISH_CODE_REGEX.is_match("07-101"));
    }
}
