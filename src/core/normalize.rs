use std::collections::HashSet;

/// Unicode `White_Space` plus the ASCII information separators U+001C..=U+001F
#[inline]
fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Canonicalize text for comparison
///
/// Lowercases, trims, and collapses every run of whitespace (including the
/// information separators U+001C..=U+001F) to a single space.
///
/// # Examples
/// ```
/// use persona_assist::core::normalize::normalize;
/// assert_eq!(normalize("  Hi   THERE! "), "hi there!");
/// ```
pub fn normalize(text: &str) -> String {
    text.split(is_separator)
        .filter(|token| !token.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Set of whitespace-separated tokens of the normalized text
#[inline]
pub fn tokenize(text: &str) -> HashSet<String> {
    normalize(text)
        .split(' ')
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
        .collect()
}
