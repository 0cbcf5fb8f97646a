//! String Collation
//!
//! Locale-style comparison for display names, modelled on the default
//! Unicode collation used by browsers:
//! 1. Primary: base letters, case-insensitive, Latin-1 accents folded
//! 2. Secondary: accents (unaccented first)
//! 3. Tertiary: case (lowercase first)
//!
//! Raw code point order breaks any remaining tie so the result is total.

use std::cmp::Ordering;

/// Compare two strings the way a reader expects a sorted list to look
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    primary_chars(a)
        .cmp(primary_chars(b))
        .then_with(|| lowercase_chars(a).cmp(lowercase_chars(b)))
        .then_with(|| case_flags(a).cmp(case_flags(b)))
        .then_with(|| a.cmp(b))
}

fn lowercase_chars(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().flat_map(char::to_lowercase)
}

fn primary_chars(s: &str) -> impl Iterator<Item = char> + '_ {
    lowercase_chars(s).map(base_letter)
}

fn case_flags(s: &str) -> impl Iterator<Item = bool> + '_ {
    s.chars().map(char::is_uppercase)
}

/// Strip the accent from a lowercase Latin-1 letter
fn base_letter(c: char) -> char {
    match c {
        'à'..='å' => 'a',
        'ç' => 'c',
        'è'..='ë' => 'e',
        'ì'..='ï' => 'i',
        'ñ' => 'n',
        'ò'..='ö' | 'ø' => 'o',
        'ù'..='ü' => 'u',
        'ý' | 'ÿ' => 'y',
        _ => c,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_before_letters() {
        assert_eq!(locale_compare("911", "Cayman"), Ordering::Less);
        assert_eq!(locale_compare("Cayman", "911"), Ordering::Greater);
    }

    #[test]
    fn test_case_insensitive_primary() {
        // Plain byte order would put "Z" before "a"
        assert_eq!(locale_compare("macan", "Panamera"), Ordering::Less);
        assert_eq!(locale_compare("Zuffenhausen", "boxster"), Ordering::Greater);
    }

    #[test]
    fn test_lowercase_before_uppercase_on_tie() {
        assert_eq!(locale_compare("gts", "GTS"), Ordering::Less);
        assert_eq!(locale_compare("GTS", "gts"), Ordering::Greater);
    }

    #[test]
    fn test_accents_fold_then_break_ties() {
        assert_eq!(locale_compare("Élan", "Emory"), Ordering::Less);
        assert_eq!(locale_compare("Elan", "Élan"), Ordering::Less);
    }

    #[test]
    fn test_prefix_sorts_first() {
        assert_eq!(locale_compare("911", "911 Turbo"), Ordering::Less);
        assert_eq!(locale_compare("", "a"), Ordering::Less);
    }

    #[test]
    fn test_equal_strings() {
        assert_eq!(locale_compare("Taycan", "Taycan"), Ordering::Equal);
    }
}
