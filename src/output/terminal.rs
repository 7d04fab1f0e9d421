//! Terminal output utilities.
//!
//! Provides formatting helpers for column aligned output.

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let quoted = format!("\"{}\"", value.to_string());
    format!("{quoted:>width$}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_field_short() {
        assert_eq!(format_field("10.0.0.0/8", 14), "  \"10.0.0.0/8\"");
    }

    #[test]
    fn test_format_field_long() {
        assert_eq!(format_field("2001:db8::/32", 5), "\"2001:db8::/32\"");
    }

    #[test]
    fn test_format_field_number() {
        assert_eq!(format_field(24, 6), "  \"24\"");
    }
}
