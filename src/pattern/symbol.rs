/// Symbol matching any character, accepted only as a standalone alternative
pub const WILDCARD: char = '?';

/// Separates alternatives within a pattern
pub(crate) const ALTERNATIVE_DELIMITER: char = ',';

/// Separates the two ends of a range alternative
pub(crate) const RANGE_DELIMITER: char = '-';

/// Returns true for characters that may appear as range endpoints: ASCII
/// digits and uppercase letters.
#[inline]
pub fn is_range_symbol(c: char) -> bool {
    c.is_ascii_digit() || c.is_ascii_uppercase()
}

/// Returns true for characters that may appear as a single-symbol alternative.
#[inline]
pub fn is_symbol(c: char) -> bool {
    is_range_symbol(c) || c == WILDCARD
}
