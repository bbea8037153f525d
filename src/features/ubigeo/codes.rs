//! Code prefix arithmetic for the state → municipality → parish hierarchy.
//!
//! Codes carry no parent pointer: a child's code starts with its parent's
//! code. Everything here is a pure function over `&str`.

use crate::shared::constants::{
    MUNICIPALITY_CODE_LEN, MUNICIPALITY_PLACEHOLDER_SUFFIX, PARISH_CODE_LEN, STATE_CODE_LEN,
};

/// Level of the administrative hierarchy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    State,
    Municipality,
    Parish,
}

impl Level {
    /// Number of leading digits that identify an entity at this level
    pub const fn width(self) -> usize {
        match self {
            Level::State => STATE_CODE_LEN,
            Level::Municipality => MUNICIPALITY_CODE_LEN,
            Level::Parish => PARISH_CODE_LEN,
        }
    }
}

/// Prefix of `code` identifying its ancestor at `level`.
///
/// Returns `None` when the code is shorter than the level width or the cut
/// does not fall on a character boundary.
pub fn parent_code(code: &str, level: Level) -> Option<&str> {
    code.get(..level.width())
}

/// Canonical four-digit key of a municipality code.
///
/// Accepts both "0701" and the placeholder form "070100".
pub fn municipality_key(code: &str) -> Option<&str> {
    let len = code.len();
    if len == Level::Municipality.width() {
        Some(code)
    } else if len == Level::Parish.width() && code.ends_with(MUNICIPALITY_PLACEHOLDER_SUFFIX) {
        parent_code(code, Level::Municipality)
    } else {
        None
    }
}

/// Synthetic municipality code owning a parish: `code[0:4] + "00"`
pub fn municipality_code_for_parish(code: &str) -> Option<String> {
    parent_code(code, Level::Municipality)
        .map(|prefix| format!("{}{}", prefix, MUNICIPALITY_PLACEHOLDER_SUFFIX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parent_code_by_level() {
        assert_eq!(parent_code("070101", Level::State), Some("07"));
        assert_eq!(parent_code("070101", Level::Municipality), Some("0701"));
        assert_eq!(parent_code("070101", Level::Parish), Some("070101"));
        assert_eq!(parent_code("0701", Level::State), Some("07"));
    }

    #[test]
    fn test_parent_code_too_short() {
        assert_eq!(parent_code("0", Level::State), None);
        assert_eq!(parent_code("070", Level::Municipality), None);
        assert_eq!(parent_code("", Level::State), None);
    }

    #[test]
    fn test_parent_code_non_ascii_boundary() {
        // 'á' is two bytes; a cut in the middle must not panic
        assert_eq!(parent_code("á1", Level::State), Some("á"));
        assert_eq!(parent_code("1á", Level::State), None);
    }

    #[test]
    fn test_municipality_key() {
        assert_eq!(municipality_key("0701"), Some("0701"));
        assert_eq!(municipality_key("070100"), Some("0701"));
        assert_eq!(municipality_key("070101"), None);
        assert_eq!(municipality_key("07"), None);
        assert_eq!(municipality_key("07010000"), None);
    }

    #[test]
    fn test_municipality_code_for_parish() {
        assert_eq!(
            municipality_code_for_parish("070101"),
            Some("070100".to_string())
        );
        assert_eq!(
            municipality_code_for_parish("010122"),
            Some("010100".to_string())
        );
        assert_eq!(municipality_code_for_parish("070"), None);
    }
}
