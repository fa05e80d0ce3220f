//! Money Display
//!
//! Prices stay in integer cents everywhere; this module only renders them.

/// Format an amount in cents as a USD display string, e.g. `"$29.99"`.
pub fn format_usd(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    format!("{}${}.{:02}", sign, cents / 100, cents % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(2999), "$29.99");
        assert_eq!(format_usd(1000), "$10.00");
        assert_eq!(format_usd(5), "$0.05");
        assert_eq!(format_usd(0), "$0.00");
    }

    #[test]
    fn test_format_usd_negative() {
        assert_eq!(format_usd(-150), "-$1.50");
    }
}
