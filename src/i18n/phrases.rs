//! Literal phrase substitution for externally sourced free text.
//!
//! Core status updates arrive from the upstream API as English free text.
//! This utility swaps known phrase fragments for their localized
//! equivalents. Replacements are literal (no patterns) and applied in
//! table order: an earlier entry consumes its matches before a later one
//! runs, so overlapping fragments produce repeatable output.

use crate::i18n::translations::PhraseTable;

/// Replace every occurrence of each known phrase with its localized form.
///
/// No-op when the text or the phrase table is empty. Empty needles are
/// skipped. Needles are English fragments and replacements are not, so no
/// replacement reintroduces a needle.
pub fn localize_phrases(text: &str, phrases: PhraseTable) -> String {
    if text.is_empty() || phrases.is_empty() {
        return text.to_string();
    }

    let mut result = text.to_string();
    for (needle, replacement) in phrases {
        if needle.is_empty() {
            continue;
        }
        result = result.replace(needle, replacement);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_table_is_noop() {
        let text = "Landed on OCISLY after the CRS-19 mission";
        assert_eq!(localize_phrases(text, &[]), text);
    }

    #[test]
    fn test_empty_text_is_noop() {
        assert_eq!(localize_phrases("", &[("Landed on", "Aterrizó en")]), "");
    }

    #[test]
    fn test_single_replacement() {
        let phrases: &[(&str, &str)] = &[("Landed on", "Aterrizó en")];
        assert_eq!(
            localize_phrases("Landed on OCISLY", phrases),
            "Aterrizó en OCISLY"
        );
    }

    #[test]
    fn test_replaces_all_occurrences() {
        let phrases: &[(&str, &str)] = &[("Landed on", "Aterrizó en")];
        assert_eq!(
            localize_phrases("Landed on JRTI. Landed on LZ-1.", phrases),
            "Aterrizó en JRTI. Aterrizó en LZ-1."
        );
    }

    #[test]
    fn test_table_order_is_stable() {
        // "Landed" alone would also match inside "Landed on"; the longer
        // fragment listed first wins its matches.
        let phrases: &[(&str, &str)] = &[("Landed on", "Aterrizó en"), ("Landed", "Aterrizó")];
        assert_eq!(
            localize_phrases("Landed on JRTI, then Landed again", phrases),
            "Aterrizó en JRTI, then Aterrizó again"
        );
    }

    #[test]
    fn test_deterministic() {
        let phrases: &[(&str, &str)] = &[
            ("Landed on", "Gelandet auf"),
            ("Retired", "Ausgemustert"),
        ];
        let text = "Retired after Landed on OCISLY";
        let first = localize_phrases(text, phrases);
        let second = localize_phrases(text, phrases);
        assert_eq!(first, second);
    }

    #[test]
    fn test_unknown_text_unchanged() {
        let phrases: &[(&str, &str)] = &[("Landed on", "Aterrizó en")];
        let text = "Scheduled for refurbishment";
        assert_eq!(localize_phrases(text, phrases), text);
    }

    #[test]
    fn test_empty_needle_skipped() {
        let phrases: &[(&str, &str)] = &[("", "oops"), ("Lost at sea", "Perdido en el mar")];
        assert_eq!(
            localize_phrases("Lost at sea in 2018", phrases),
            "Perdido en el mar in 2018"
        );
    }
}
