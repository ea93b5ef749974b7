//! Ordinal, case-insensitive text matching.
//!
//! Folding maps each character to its single-character uppercase form. A character
//! whose uppercase expands to several characters (`ß`) is kept as is, and no locale
//! rules or collation apply, so `"ELECTRONICS"` and `"electronics"` compare equal on
//! every machine while the Kelvin sign never equals `k`.

/// Folds one character to its uppercase form when that form is a single character.
fn fold_char(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(folded), None) => folded,
        _ => c,
    }
}

/// Case-folds `text` one character at a time.
pub fn fold_case(text: &str) -> String {
    text.chars().map(fold_char).collect()
}

/// Case-insensitive equality.
pub fn eq_ignore_case(left: &str, right: &str) -> bool {
    left.chars().map(fold_char).eq(right.chars().map(fold_char))
}

/// Case-insensitive substring containment of `needle` in `haystack`.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    fold_case(haystack).contains(&fold_case(needle))
}

/// True when the text is absent, empty, or whitespace only.
pub fn is_blank(text: Option<&str>) -> bool {
    text.map_or(true, |t| t.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eq_ignore_case_matches_any_casing() {
        assert!(eq_ignore_case("Electronics", "electronics"));
        assert!(eq_ignore_case("Electronics", "ELECTRONICS"));
        assert!(!eq_ignore_case("Electronics", "Electronic"));
        assert!(!eq_ignore_case("Audio", "Audio "));
    }

    #[test]
    fn eq_ignore_case_folds_non_ascii() {
        assert!(eq_ignore_case("ÉCOLE", "école"));
    }

    #[test]
    fn folding_is_one_character_to_one_character() {
        assert!(!eq_ignore_case("\u{212A}", "k"));
        assert!(!contains_ignore_case("İstanbul", "i"));
        assert!(eq_ignore_case("straße", "STRAßE"));
        assert!(!eq_ignore_case("straße", "STRASSE"));
        assert_eq!(fold_case("İstanbul").chars().count(), 8);
    }

    #[test]
    fn contains_ignore_case_finds_substrings() {
        assert!(contains_ignore_case("Smartphone", "PHONE"));
        assert!(contains_ignore_case("Noise-cancelling headphones", "Phone"));
        assert!(!contains_ignore_case("Mouse", "phone"));
    }

    #[test]
    fn contains_ignore_case_does_not_trim_the_needle() {
        assert!(!contains_ignore_case("Smartphone", " phone"));
        assert!(contains_ignore_case("Latest model smartphone", " smart"));
    }

    #[test]
    fn blank_covers_absent_empty_and_whitespace() {
        assert!(is_blank(None));
        assert!(is_blank(Some("")));
        assert!(is_blank(Some("   ")));
        assert!(is_blank(Some("\t\n")));
        assert!(!is_blank(Some(" a ")));
    }
}
