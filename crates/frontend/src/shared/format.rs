//! Number formatting for money and percentages

/// "₹42500.00"-style money string
pub fn format_money(value: f64) -> String {
    format!("₹{value:.2}")
}

/// Signed variance like "+1.7%" / "-3.2%", one decimal
pub fn format_signed_percent(value: f64) -> String {
    if value >= 0.0 {
        format!("+{value:.1}%")
    } else {
        format!("{value:.1}%")
    }
}

/// Quantity display: a trailing `.0` is dropped ("450"), fractional
/// values print as-is ("87.5")
pub fn format_quantity(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_has_two_decimals() {
        assert_eq!(format_money(42500.0), "₹42500.00");
        assert_eq!(format_money(0.5), "₹0.50");
    }

    #[test]
    fn percent_carries_its_sign() {
        assert_eq!(format_signed_percent(1.74), "+1.7%");
        assert_eq!(format_signed_percent(-3.21), "-3.2%");
        assert_eq!(format_signed_percent(0.0), "+0.0%");
    }

    #[test]
    fn quantities_drop_only_a_trailing_point_zero() {
        assert_eq!(format_quantity(450.0), "450");
        assert_eq!(format_quantity(87.5), "87.5");
        assert_eq!(format_quantity(0.25), "0.25");
    }
}
