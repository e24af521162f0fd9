use std::sync::OnceLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Latin presentation-form ligatures and their expansions.
const LIGATURES: [(char, &str); 5] = [
    ('\u{FB00}', "ff"),
    ('\u{FB01}', "fi"),
    ('\u{FB02}', "fl"),
    ('\u{FB03}', "ffi"),
    ('\u{FB04}', "ffl"),
];

/// Normalize text decoded from a content stream.
///
/// NFC composition, ligature expansion, removal of U+FFFD and control
/// characters, and tabs or runs of spaces collapsed to one space. Leading and
/// trailing whitespace is kept; the outline engine trims where it matters.
pub fn normalize_text(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.nfc() {
        match LIGATURES.iter().find(|(lig, _)| *lig == c) {
            Some((_, expansion)) => result.push_str(expansion),
            None if c == '\u{FFFD}' || (c.is_control() && c != '\t') => {}
            None => result.push(c),
        }
    }

    static RE_SPACES: OnceLock<Regex> = OnceLock::new();
    let re_spaces = RE_SPACES.get_or_init(|| Regex::new(r"[ \t\u{00A0}]{2,}|\t").unwrap());
    re_spaces.replace_all(&result, " ").into_owned()
}
