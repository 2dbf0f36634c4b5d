//! Length measurement and truncation in UTF-16 code units.
//!
//! Agent context budgets are counted the way JavaScript-based clients count
//! string length, so limits here are expressed in UTF-16 code units rather
//! than bytes or chars.

/// Number of UTF-16 code units needed to encode `input`.
pub fn utf16_len(input: &str) -> usize {
    input.chars().map(char::len_utf16).sum()
}

/// Longest prefix of `input` that fits in `max_units` UTF-16 code units.
///
/// The cut always falls between whole characters: a character that would
/// straddle the limit (e.g. an astral-plane emoji encoded as a surrogate pair)
/// is left out entirely.
pub fn truncate_utf16_safe(input: &str, max_units: usize) -> &str {
    let mut units = 0;
    for (idx, ch) in input.char_indices() {
        units += ch.len_utf16();
        if units > max_units {
            return &input[..idx];
        }
    }
    input
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_surrogate_pairs_as_two_units() {
        assert_eq!(utf16_len("abc"), 3);
        assert_eq!(utf16_len("é"), 1);
        assert_eq!(utf16_len("😀"), 2);
        assert_eq!(utf16_len(""), 0);
    }

    #[test]
    fn short_input_is_untouched() {
        assert_eq!(truncate_utf16_safe("hello", 5), "hello");
        assert_eq!(truncate_utf16_safe("hello", 50), "hello");
    }

    #[test]
    fn cuts_ascii_at_limit() {
        assert_eq!(truncate_utf16_safe("hello world", 5), "hello");
        assert_eq!(truncate_utf16_safe("hello", 0), "");
    }

    #[test]
    fn never_splits_a_surrogate_pair() {
        // "a" + 😀 is three units; a limit of two lands inside the emoji.
        assert_eq!(truncate_utf16_safe("a😀b", 2), "a");
        assert_eq!(truncate_utf16_safe("a😀b", 3), "a😀");
    }

    #[test]
    fn multibyte_bmp_chars_count_once() {
        // Each CJK char is one UTF-16 unit but three UTF-8 bytes.
        assert_eq!(truncate_utf16_safe("日本語テキスト", 3), "日本語");
    }
}
