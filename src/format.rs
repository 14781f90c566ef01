//! Display Formatting
//!
//! Text written back into the deal page after a successful update.

use crate::config::{CURRENCY_SUFFIX, EXPIRE_PREFIX};

/// `"100"` -> `"100 ₽"`
pub fn format_price(value: &str) -> String {
    format!("{}{}", value, CURRENCY_SUFFIX)
}

/// `year-month-day` to `day.month.year`. Parts are reversed verbatim, so
/// padding and invalid dates pass through unchanged.
pub fn format_expiry_date(iso: &str) -> String {
    iso.split('-').rev().collect::<Vec<_>>().join(".")
}

/// Text that follows the calendar icon in the expiry node
pub fn expiry_label(iso: &str) -> String {
    format!("{}{}", EXPIRE_PREFIX, format_expiry_date(iso))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price("100"), "100 ₽");
        assert_eq!(format_price("80"), "80 ₽");
        assert_eq!(format_price("99.90"), "99.90 ₽");
    }

    #[test]
    fn test_format_expiry_date() {
        assert_eq!(format_expiry_date("2024-01-15"), "15.01.2024");
        assert_eq!(format_expiry_date("1999-12-31"), "31.12.1999");
    }

    #[test]
    fn test_format_expiry_date_keeps_parts() {
        // No zero padding added
        assert_eq!(format_expiry_date("2024-1-5"), "5.1.2024");
        // Not a real date, parts are still reversed
        assert_eq!(format_expiry_date("2024-02-30"), "30.02.2024");
        assert_eq!(format_expiry_date("2024-1"), "1.2024");
        assert_eq!(format_expiry_date(""), "");
    }

    #[test]
    fn test_expiry_label() {
        assert_eq!(expiry_label("2024-01-15"), " Действует до 15.01.2024");
    }
}
