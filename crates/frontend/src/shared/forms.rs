//! Client-side form validation
//!
//! Required numeric fields are checked before submission; a failed check
//! blocks the submit so no partial record is ever written.

/// Parse a required numeric form field, with a message naming the field.
pub fn parse_required_number(label: &str, raw: &str) -> Result<f64, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(format!("{label} is required"));
    }
    trimmed
        .parse::<f64>()
        .map_err(|_| format!("{label} must be a number"))
}

/// Required free-text field.
pub fn parse_required_text(label: &str, raw: &str) -> Result<String, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(format!("{label} is required"));
    }
    Ok(trimmed.to_string())
}

/// Live cost preview while the user types: unparseable input counts as 0,
/// mirroring how absent numerics aggregate.
pub fn preview_number(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_numbers_with_whitespace() {
        assert_eq!(parse_required_number("Quantity", " 500 "), Ok(500.0));
        assert_eq!(parse_required_number("Rate", "87.5"), Ok(87.5));
    }

    #[test]
    fn rejects_empty_and_non_numeric() {
        assert_eq!(
            parse_required_number("Quantity", ""),
            Err("Quantity is required".to_string())
        );
        assert_eq!(
            parse_required_number("Rate", "abc"),
            Err("Rate must be a number".to_string())
        );
    }

    #[test]
    fn text_field_trims() {
        assert_eq!(
            parse_required_text("Item name", "  Steel Rods "),
            Ok("Steel Rods".to_string())
        );
        assert!(parse_required_text("Item name", "   ").is_err());
    }

    #[test]
    fn preview_defaults_to_zero() {
        assert_eq!(preview_number("500"), 500.0);
        assert_eq!(preview_number(""), 0.0);
        assert_eq!(preview_number("abc"), 0.0);
    }
}
