//! Floor-level normalization.
//!
//! The historical dataset records the floor as free text such as `"2 out of 4"`,
//! `"Ground out of 2"` or `"Lower Basement"`. Only the leading token carries
//! the level; the remainder (`"out of N"`) is the building height and is not
//! used. The mapping is:
//!
//! | Leading token          | Level |
//! |------------------------|-------|
//! | `Ground…` / `Upper…`   | 0     |
//! | `Lower…`               | -1    |
//! | one or two digits      | that integer |
//!
//! Anything else is unrecognized and must be surfaced by the caller; silently
//! dropping a row would bias the fitted statistics.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Leading numeric (one or two digits) or alphabetic token of a descriptor.
    static ref LEADING_TOKEN: Regex = Regex::new(r"^(\d{1,2}|[A-Za-z]+)").unwrap();
}

/// Parse a free-text floor descriptor into an integer floor level.
///
/// Returns `None` when the descriptor does not match any recognized pattern.
pub fn parse_floor_level(descriptor: &str) -> Option<i32> {
    let token = LEADING_TOKEN.find(descriptor.trim())?.as_str();

    if let Ok(level) = token.parse::<i32>() {
        return Some(level);
    }
    if token.starts_with("Ground") || token.starts_with("Upper") {
        return Some(0);
    }
    if token.starts_with("Lower") {
        return Some(-1);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_lead() {
        assert_eq!(parse_floor_level("2 out of 4"), Some(2));
        assert_eq!(parse_floor_level("11 out of 22"), Some(11));
        assert_eq!(parse_floor_level("1"), Some(1));
    }

    #[test]
    fn test_ground_variants() {
        assert_eq!(parse_floor_level("Ground out of 2"), Some(0));
        assert_eq!(parse_floor_level("Ground"), Some(0));
    }

    #[test]
    fn test_upper_variants() {
        assert_eq!(parse_floor_level("Upper Basement"), Some(0));
    }

    #[test]
    fn test_lower_variants() {
        assert_eq!(parse_floor_level("Lower Basement"), Some(-1));
    }

    #[test]
    fn test_leading_whitespace() {
        assert_eq!(parse_floor_level("  3 out of 5"), Some(3));
    }

    #[test]
    fn test_unrecognized_alpha_token() {
        assert_eq!(parse_floor_level("Top Floor"), None);
        assert_eq!(parse_floor_level("basement"), None); // case-sensitive
    }

    #[test]
    fn test_unrecognized_empty_or_symbol() {
        assert_eq!(parse_floor_level(""), None);
        assert_eq!(parse_floor_level("-1 out of 3"), None);
    }
}
