//! Plain-text helpers for multi-paragraph CMS fields.

/// Split a field into lines, one rendered paragraph each.
pub fn lines(text: &str) -> impl Iterator<Item = &str> + '_ {
    text.split('\n')
}

/// Split a field into paragraphs separated by a blank line.
pub fn paragraphs(text: &str) -> impl Iterator<Item = &str> + '_ {
    text.split("\n\n")
}
