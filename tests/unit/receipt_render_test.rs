// Unit tests for plain-text receipt rendering.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal_macros::dec;

use tillpoint::modules::sales::models::{Sale, SaleItem};
use tillpoint::modules::sales::services::render_receipt;

fn ts() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 15)
        .unwrap()
        .and_hms_opt(10, 0, 0)
        .unwrap()
}

fn sample_sale() -> Sale {
    let sale_id = "4f1c2d3e-aaaa-bbbb-cccc-121212121212".to_string();
    Sale {
        id: sale_id.clone(),
        user_id: "user-1".to_string(),
        total_amount: dec!(9.25),
        recorded_at: ts(),
        items: vec![
            SaleItem {
                id: "item-1".to_string(),
                sale_id: sale_id.clone(),
                product_id: "prod-1".to_string(),
                name: "Espresso".to_string(),
                quantity: 2,
                unit_price: dec!(3.50),
                line_total: dec!(7.00),
            },
            SaleItem {
                id: "item-2".to_string(),
                sale_id,
                product_id: "prod-2".to_string(),
                name: "Croissant".to_string(),
                quantity: 1,
                unit_price: dec!(2.25),
                line_total: dec!(2.25),
            },
        ],
    }
}

#[test]
fn receipt_contains_header_items_and_total() {
    let receipt = render_receipt(&sample_sale());

    assert!(receipt.contains("TILLPOINT"));
    assert!(receipt.contains("Receipt 4f1c2d3e"));
    assert!(receipt.contains("2024-03-15 10:00"));
    assert!(receipt.contains("Espresso x2"));
    assert!(receipt.contains("$7.00"));
    assert!(receipt.contains("Croissant x1"));
    assert!(receipt.contains("$2.25"));
    assert!(receipt.contains("TOTAL"));
    assert!(receipt.contains("$9.25"));
}

#[test]
fn receipt_lines_order_items_then_total() {
    let receipt = render_receipt(&sample_sale());
    let lines: Vec<&str> = receipt.lines().collect();

    let espresso = lines.iter().position(|l| l.contains("Espresso")).unwrap();
    let croissant = lines.iter().position(|l| l.contains("Croissant")).unwrap();
    let total = lines.iter().position(|l| l.contains("TOTAL")).unwrap();

    assert!(espresso < croissant);
    assert!(croissant < total);
    assert_eq!(total, lines.len() - 1);
}

#[test]
fn receipt_total_is_right_aligned() {
    let receipt = render_receipt(&sample_sale());
    let total_line = receipt
        .lines()
        .find(|l| l.starts_with("TOTAL"))
        .unwrap();

    assert!(total_line.ends_with("$9.25"));
    assert_eq!(total_line.len(), 38);
}
