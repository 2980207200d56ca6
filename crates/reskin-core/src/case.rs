//! String case conversion.

use regex::Regex;
use std::sync::LazyLock;

// Any run of whitespace or punctuation.
static WORD_SEPARATORS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r##"[\s\u{2000}-\u{206F}\u{2E00}-\u{2E7F}\\'!"#$%&()*+,\-./:;<=>?@\[\]^_`{|}~]+"##,
    )
    .expect("Invalid word separator regex")
});

static CAPITALS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Z\u{00C0}-\u{00D6}\u{00D9}-\u{00DD}]").expect("Invalid capitals regex")
});

/// Convert a string to kebab-case.
///
/// Every uppercase letter starts a new word, so runs of capitals are split one
/// letter at a time:
///
/// ```
/// use reskin_core::kebab_case;
///
/// assert_eq!(kebab_case("strokeWidth"), "stroke-width");
/// assert_eq!(kebab_case("theQUICKBrownFox"), "the-q-u-i-c-k-brown-fox");
/// ```
pub fn kebab_case(input: &str) -> String {
    let spaced = CAPITALS.replace_all(input, |caps: &regex::Captures<'_>| {
        format!(" {}", caps[0].to_lowercase())
    });

    WORD_SEPARATORS
        .split(spaced.trim())
        .collect::<Vec<_>>()
        .join("-")
}
