//! Single-position lookup by display column.

use crate::length::wide_length;
use crate::slice::wide_slice;

/// Return the character at display column `idx`, with wide characters
/// counting as two columns.
///
/// A wide character is returned whole when `idx` addresses its first column,
/// so the result can measure two columns. When `idx` addresses the second
/// column, the character cannot be halved and a single `pad_char` comes back
/// instead. An out-of-range `idx` yields `""`.
pub fn wide_char_at(s: &str, idx: isize, pad_char: char) -> String {
    if idx < 0 || idx as usize >= wide_length(s) {
        return String::new();
    }
    // A two-column window always covers the addressed character whole;
    // the slice then starts with it (or with its padding substitute).
    let window = wide_slice(s, idx, idx.checked_add(2), pad_char);
    match window.chars().next() {
        Some(c) => c.to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds_returns_empty() {
        assert_eq!(wide_char_at("abc", 10, ' '), "");
        assert_eq!(wide_char_at("abc", -10, ' '), "");
        assert_eq!(wide_char_at("abc", -1, ' '), "");
        assert_eq!(wide_char_at("abc", 3, ' '), "");
        assert_eq!(wide_char_at("", 0, ' '), "");
        assert_eq!(wide_char_at("あ", 2, ' '), "");
    }

    #[test]
    fn test_plain_characters() {
        assert_eq!(wide_char_at("abc", 0, ' '), "a");
        assert_eq!(wide_char_at("abc", 1, ' '), "b");
        assert_eq!(wide_char_at("abc", 2, ' '), "c");
    }

    #[test]
    fn test_wide_character_first_column() {
        assert_eq!(wide_char_at("abあ", 2, ' '), "あ");
        assert_eq!(wide_char_at("abえ", 2, ' '), "え");
        assert_eq!(wide_char_at("abえaa", 2, ' '), "え");
        assert_eq!(wide_char_at("abえaaい", 2, ' '), "え");
        assert_eq!(wide_char_at("abえaaいzz", 2, ' '), "え");
        assert_eq!(wide_char_at("abえaaいzz", 6, ' '), "い");
        // The whole character comes back, measuring two columns
        assert_eq!(wide_length(&wide_char_at("abあ", 2, ' ')), 2);
    }

    #[test]
    fn test_wide_character_second_column() {
        assert_eq!(wide_char_at("あ", 1, ' '), " ");
        assert_eq!(wide_char_at("あ", 1, '!'), "!");
        assert_eq!(wide_char_at("abあcd", 3, '!'), "!");
        assert_eq!(wide_char_at("あいえ", 3, '!'), "!");
    }
}
