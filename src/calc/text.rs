//! String utilities.

/// True when `text` reads the same reversed, compared per Unicode scalar value.
///
/// Case and whitespace are significant.
pub fn is_palindrome(text: &str) -> bool {
    text.chars().eq(text.chars().rev())
}
