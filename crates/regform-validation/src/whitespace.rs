//! Whitespace as browsers define it for `\s` and `String.prototype.trim`
//!
//! Differs from Rust's Unicode `White_Space`: U+FEFF counts, U+0085 does not.

/// Regex character-class body matching one whitespace character
pub const WHITESPACE_CLASS: &str =
    r"\t\n\x0B\x0C\r \xA0\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

pub fn is_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Strip leading and trailing whitespace
pub fn trim(value: &str) -> &str {
    value.trim_matches(is_whitespace)
}
