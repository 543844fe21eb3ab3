//! Tag field normalization.
//!
//! The form takes tags as one free-text field, e.g. `react, javascript, firebase`.
//! Rules:
//! - Split on `,`
//! - Trim surrounding whitespace from each piece
//! - Drop pieces that are empty after trimming
//! - Keep the original order
//!
//! Duplicates are kept as typed.

/// Parses a comma separated tag field.
///
/// # Examples
/// ```
/// use postdesk::tags::parse_tags;
///
/// assert_eq!(parse_tags("a, b ,c"), vec!["a", "b", "c"]);
/// assert!(parse_tags("  ,, ").is_empty());
/// ```
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}
