//! Speech cleanup for names and descriptions coming back from the API.

use regex::Regex;
use std::sync::OnceLock;

fn char_ref_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"&?#[0-9]+;").expect("Invalid character reference regex"))
}

/// Get a string ready for speaking.
///
/// Decimal character references (`&#257;`, or a bare `#257;`) are dropped
/// since the speech layer has no use for diacritics, then every remaining
/// `&` is spoken as "and".
pub fn clean_string(s: &str) -> String {
    char_ref_pattern().replace_all(s, "").replace('&', "and")
}
