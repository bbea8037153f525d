//! Text folding used for every name comparison in the hierarchy.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Fold a human-entered name into its comparable form.
///
/// Lowercases, decomposes (NFD), drops combining marks and transliterates the
/// handful of Latin letters that have no canonical decomposition. Whitespace
/// and punctuation are kept as-is.
///
/// - "Táchira" -> "tachira"
/// - "PEÑA" -> "pena"
pub fn normalize_name(text: &str) -> String {
    let mut folded = String::with_capacity(text.len());

    for c in text.to_lowercase().nfd() {
        if is_combining_mark(c) {
            continue;
        }
        match c {
            'ø' => folded.push('o'),
            'æ' => folded.push_str("ae"),
            'œ' => folded.push_str("oe"),
            'ß' => folded.push_str("ss"),
            'ł' => folded.push('l'),
            'đ' => folded.push('d'),
            _ => folded.push(c),
        }
    }

    folded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_accents_and_case() {
        assert_eq!(normalize_name("Táchira"), "tachira");
        assert_eq!(normalize_name("MÉRIDA"), "merida");
        assert_eq!(normalize_name("Peña"), "pena");
        assert_eq!(normalize_name("Güiria"), "guiria");
        assert_eq!(normalize_name("Falcón"), "falcon");
    }

    #[test]
    fn test_normalize_keeps_spaces_and_digits() {
        assert_eq!(normalize_name("23 de Enero"), "23 de enero");
        assert_eq!(normalize_name("  Distrito Capital "), "  distrito capital ");
    }

    #[test]
    fn test_normalize_transliterates_undecomposable_letters() {
        assert_eq!(normalize_name("Øre"), "ore");
        assert_eq!(normalize_name("Straße"), "strasse");
        assert_eq!(normalize_name("Łódź"), "lodz");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let samples = [
            "Táchira",
            "Cárdenas",
            "San Cristóbal",
            "ÑAÑA",
            "Ørsted",
            "İstanbul",
            "",
            "déjà vu",
        ];
        for sample in samples {
            let once = normalize_name(sample);
            assert_eq!(normalize_name(&once), once, "not idempotent for {sample:?}");
        }
    }

    #[test]
    fn test_accent_variants_fold_together() {
        assert_eq!(normalize_name("Táchira"), normalize_name("tachira"));
        assert_eq!(normalize_name("cardenas"), normalize_name("CÁRDENAS"));
        assert_ne!(normalize_name("Cárdenas"), normalize_name("Cardenas "));
    }
}
