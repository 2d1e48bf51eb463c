// Plain-text receipt rendering for a completed sale.
//
// The receipt is a fixed-width ticket: header, one line per item, total.
// Printing it is the platform's job; this only builds the text.

use crate::core::currency::format_amount;
use crate::modules::sales::models::Sale;

const RECEIPT_WIDTH: usize = 38;

/// Render a sale as a printable plain-text receipt.
pub fn render_receipt(sale: &Sale) -> String {
    let rule = "-".repeat(RECEIPT_WIDTH);
    let mut out = String::new();

    out.push_str(&center("TILLPOINT"));
    out.push('\n');
    out.push_str(&center(&format!("Receipt {}", short_id(&sale.id))));
    out.push('\n');
    out.push_str(&center(
        &sale.recorded_at.format("%Y-%m-%d %H:%M").to_string(),
    ));
    out.push('\n');
    out.push_str(&rule);
    out.push('\n');

    for item in &sale.items {
        let left = format!("{} x{}", item.name, item.quantity);
        out.push_str(&two_column(&left, &format_amount(item.line_total)));
        out.push('\n');
    }

    out.push_str(&rule);
    out.push('\n');
    out.push_str(&two_column("TOTAL", &format_amount(sale.total_amount)));
    out.push('\n');

    out
}

/// First segment of a UUID, enough to read back to a cashier.
fn short_id(id: &str) -> &str {
    id.split('-').next().unwrap_or(id)
}

fn center(text: &str) -> String {
    if text.len() >= RECEIPT_WIDTH {
        return text.to_string();
    }
    let pad = (RECEIPT_WIDTH - text.len()) / 2;
    format!("{}{}", " ".repeat(pad), text)
}

fn two_column(left: &str, right: &str) -> String {
    let used = left.len() + right.len();
    if used >= RECEIPT_WIDTH {
        return format!("{} {}", left, right);
    }
    format!("{}{}{}", left, " ".repeat(RECEIPT_WIDTH - used), right)
}
