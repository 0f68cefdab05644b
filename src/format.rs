//! Amount Formatting
//!
//! Currency amounts render with exactly two decimal places, thousands
//! separators, and a trailing currency code.

/// Replacement text while a balance is hidden
pub const MASKED_BALANCE: &str = "•••••";

/// `format_amount(1234.5, "USD") == "1,234.50 USD"`
pub fn format_amount(value: f64, currency: &str) -> String {
    format!("{} {}", format_decimal(value), currency)
}

/// Signed PnL: always carries an explicit `+` or `-` prefix.
pub fn format_signed(value: f64) -> String {
    if value >= 0.0 {
        format!("+{}", format_decimal(value))
    } else {
        format!("-{}", format_decimal(-value))
    }
}

/// What a balance element shows for a given visibility state. Toggling
/// twice always restores the original text.
pub fn masked_or(hidden: bool, text: &str) -> String {
    if hidden {
        MASKED_BALANCE.to_string()
    } else {
        text.to_string()
    }
}

/// Two decimals with thousands separators, no currency code.
pub fn format_decimal(value: f64) -> String {
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if negative && cents > 0 { "-" } else { "" };
    format!("{}{}.{:02}", sign, grouped, frac)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_decimals_and_trailing_code() {
        assert_eq!(format_amount(1234.5, "USD"), "1,234.50 USD");
        assert_eq!(format_amount(0.0, "USD"), "0.00 USD");
        assert_eq!(format_amount(999.999, "EUR"), "1,000.00 EUR");
        assert_eq!(format_amount(1_000_000.0, "USD"), "1,000,000.00 USD");
        assert_eq!(format_amount(12.3, "GBP"), "12.30 GBP");
    }

    #[test]
    fn test_negative_amounts() {
        assert_eq!(format_amount(-1234.5, "USD"), "-1,234.50 USD");
        // Rounds to zero: no negative sign on "-0.00"
        assert_eq!(format_amount(-0.001, "USD"), "0.00 USD");
    }

    #[test]
    fn test_signed_pnl() {
        assert_eq!(format_signed(42.0), "+42.00");
        assert_eq!(format_signed(0.0), "+0.00");
        assert_eq!(format_signed(-3.145), "-3.15");
        assert_eq!(format_signed(1250.5), "+1,250.50");
    }

    #[test]
    fn test_hide_toggle_round_trip() {
        let original = format_amount(1234.5, "USD");
        let hidden = masked_or(true, &original);
        assert_eq!(hidden, MASKED_BALANCE);
        let restored = masked_or(false, &original);
        assert_eq!(restored, original);
    }
}
