//! Pins the lenient-numerics policy at the deserialization boundary:
//! malformed numeric fields coerce to zero for display robustness instead
//! of failing the whole request or dashboard render. Deliberate behavior,
//! not a bug to fix.

use axum_order_desk::models::{LineItem, LineItemDraft, Order, OrderDraft, Payment};
use axum_order_desk::summary::aggregate;
use chrono::NaiveDate;
use serde_json::json;
use uuid::Uuid;

#[test]
fn non_numeric_quantity_becomes_zero() {
    let draft: LineItemDraft = serde_json::from_value(json!({
        "product_model": "9070",
        "quantity": "abc",
        "unit_price": 300,
    }))
    .unwrap();
    assert_eq!(draft.quantity, 0);
    assert_eq!(draft.unit_price, 300);
}

#[test]
fn numeric_strings_parse() {
    let draft: LineItemDraft = serde_json::from_value(json!({
        "product_model": "9070",
        "quantity": "2",
        "unit_price": " 300 ",
    }))
    .unwrap();
    assert_eq!(draft.quantity, 2);
    assert_eq!(draft.unit_price, 300);
}

#[test]
fn negative_quantity_clamps_to_zero() {
    let draft: LineItemDraft = serde_json::from_value(json!({
        "product_model": "9070",
        "quantity": -5,
        "unit_price": 300,
    }))
    .unwrap();
    assert_eq!(draft.quantity, 0);

    // The clamp applies again when a draft becomes an item.
    let item = LineItemDraft {
        quantity: 3,
        ..draft
    }
    .into_item("2024010501");
    assert_eq!(item.quantity, 3);
}

#[test]
fn null_and_missing_fields_default_to_zero() {
    let payment: Payment = serde_json::from_value(json!({
        "order_number": "2024010501",
        "amount": null,
    }))
    .unwrap();
    assert_eq!(payment.amount, 0);

    let payment: Payment = serde_json::from_value(json!({
        "order_number": "2024010501",
    }))
    .unwrap();
    assert_eq!(payment.amount, 0);
}

#[test]
fn incoming_total_price_is_ignored_and_recomputed() {
    let item: LineItem = serde_json::from_value(json!({
        "id": Uuid::new_v4(),
        "order_number": "2024010501",
        "product_model": "9070",
        "color": null,
        "specification": null,
        "quantity": 2,
        "unit_price": 300,
        "total_price": 999999,
    }))
    .unwrap();
    assert_eq!(item.line_total(), 600);
}

#[test]
fn draft_final_price_null_means_not_entered() {
    let draft: OrderDraft = serde_json::from_value(json!({
        "order_number_suffix": "01",
        "order_date": "2024-01-05",
        "customer_name": "Sharif",
        "final_price": null,
    }))
    .unwrap();
    assert_eq!(draft.final_price, None);

    let draft: OrderDraft = serde_json::from_value(json!({
        "order_number_suffix": "01",
        "order_date": "2024-01-05",
        "customer_name": "Sharif",
        "final_price": "n/a",
    }))
    .unwrap();
    assert_eq!(draft.final_price, Some(0));
}

// The policy carried end to end: a record with a garbage quantity shows up
// as zero in the computed view rather than erroring the aggregation.
#[test]
fn coerced_records_aggregate_to_zero_contributions() {
    let order: Order = serde_json::from_value(json!({
        "order_number": "A",
        "order_date": "2024-01-05",
        "customer_name": "Sharif",
        "final_price": "oops",
    }))
    .unwrap();
    assert_eq!(order.final_price, 0);

    let item: LineItem = serde_json::from_value(json!({
        "id": Uuid::new_v4(),
        "order_number": "A",
        "product_model": "9070",
        "color": null,
        "specification": null,
        "quantity": "abc",
        "unit_price": 300,
    }))
    .unwrap();

    let result = aggregate(vec![order], vec![item], vec![]);
    let view = &result.orders[0];
    assert_eq!(view.order_date, NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
    assert_eq!(view.total_quantity, 0);
    assert_eq!(view.items[0].line_total(), 0);
    assert_eq!(view.receivable, 0);
}
