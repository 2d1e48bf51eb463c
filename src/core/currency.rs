use rust_decimal::Decimal;

/// Decimal places kept for stored and displayed amounts.
pub const DISPLAY_SCALE: u32 = 2;

/// Currency glyph prefixed to every displayed amount.
pub const CURRENCY_GLYPH: &str = "$";

/// Rounds an amount to the display scale.
///
/// Stored totals keep full precision; rounding happens only at display time.
pub fn round_for_display(amount: Decimal) -> Decimal {
    amount.round_dp(DISPLAY_SCALE)
}

/// Formats an amount for display: glyph prefix, thousands separators,
/// two decimal places. `1234.5` becomes `$1,234.50`.
pub fn format_amount(amount: Decimal) -> String {
    let rounded = round_for_display(amount);
    let negative = rounded.is_sign_negative();
    let fixed = format!("{:.1$}", rounded.abs(), DISPLAY_SCALE as usize);

    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i.to_string(), f.to_string()),
        None => (fixed, "00".to_string()),
    };

    let grouped = group_thousands(&int_part);

    if negative {
        format!("-{}{}.{}", CURRENCY_GLYPH, grouped, frac_part)
    } else {
        format!("{}{}.{}", CURRENCY_GLYPH, grouped, frac_part)
    }
}

/// Inserts a comma every three digits, counting from the right.
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let len = digits.len();

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}
