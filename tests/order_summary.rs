use axum_order_desk::models::{LineItem, Order, Payment};
use axum_order_desk::summary::aggregate;
use chrono::NaiveDate;
use uuid::Uuid;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn order(number: &str, order_date: NaiveDate, customer: &str, final_price: i64) -> Order {
    Order {
        order_number: number.to_string(),
        order_date,
        customer_name: customer.to_string(),
        final_price,
    }
}

fn item(order_number: &str, quantity: i64, unit_price: i64, shipped: bool) -> LineItem {
    LineItem {
        id: Uuid::new_v4(),
        order_number: order_number.to_string(),
        product_model: "9070".to_string(),
        color: None,
        specification: None,
        quantity,
        unit_price,
        is_shipped: shipped,
    }
}

fn payment(order_number: &str, amount: i64) -> Payment {
    Payment {
        order_number: order_number.to_string(),
        amount,
    }
}

#[test]
fn partially_paid_unshipped_order() {
    let result = aggregate(
        vec![order("A", date(2024, 1, 5), "Sharif", 1000)],
        vec![item("A", 2, 300, false)],
        vec![payment("A", 600)],
    );

    assert_eq!(result.orders.len(), 1);
    let view = &result.orders[0];
    assert_eq!(view.total_quantity, 2);
    assert_eq!(view.paid, 600);
    assert_eq!(view.receivable, 400);
    assert!(!view.settled);
    assert!(!view.fully_shipped);
    assert!(!view.completed);
    // Line totals are always recomputed, never read back from storage.
    assert_eq!(view.items[0].line_total(), 600);
}

#[test]
fn settled_and_shipped_means_completed() {
    let result = aggregate(
        vec![order("A", date(2024, 1, 5), "Sharif", 1000)],
        vec![item("A", 2, 300, true)],
        vec![payment("A", 600), payment("A", 400)],
    );

    let view = &result.orders[0];
    assert_eq!(view.paid, 1000);
    assert_eq!(view.receivable, 0);
    assert!(view.settled);
    assert!(view.fully_shipped);
    assert!(view.completed);
}

#[test]
fn overpayment_still_settles() {
    let result = aggregate(
        vec![order("A", date(2024, 1, 5), "Sharif", 1000)],
        vec![],
        vec![payment("A", 1200)],
    );
    let view = &result.orders[0];
    assert_eq!(view.receivable, -200);
    assert!(view.settled);
}

#[test]
fn orphaned_records_are_dropped_and_counted() {
    let result = aggregate(
        vec![order("A", date(2024, 1, 5), "Sharif", 1000)],
        vec![item("A", 1, 100, false), item("B", 5, 100, false)],
        vec![payment("B", 600)],
    );

    assert_eq!(result.orders.len(), 1);
    assert_eq!(result.orders[0].order_number, "A");
    assert_eq!(result.orders[0].total_quantity, 1);
    assert_eq!(result.orders[0].paid, 0);
    assert_eq!(result.dropped_items, 1);
    assert_eq!(result.dropped_payments, 1);
}

#[test]
fn no_items_is_vacuously_fully_shipped() {
    let result = aggregate(
        vec![order("A", date(2024, 1, 5), "Sharif", 0)],
        vec![],
        vec![],
    );
    let view = &result.orders[0];
    assert!(view.fully_shipped);
    assert!(view.settled);
    assert!(view.completed);
}

#[test]
fn one_unshipped_item_blocks_fully_shipped() {
    let result = aggregate(
        vec![order("A", date(2024, 1, 5), "Sharif", 0)],
        vec![item("A", 1, 100, true), item("A", 1, 100, false)],
        vec![],
    );
    assert!(!result.orders[0].fully_shipped);
    assert!(!result.orders[0].completed);
}

#[test]
fn customer_sequence_follows_ascending_order_date() {
    // Input deliberately out of date order.
    let result = aggregate(
        vec![
            order("C", date(2024, 3, 1), "Sharif", 0),
            order("A", date(2024, 1, 5), "Sharif", 0),
            order("U1", date(2024, 2, 1), "Uruma", 0),
            order("B", date(2024, 2, 10), "Sharif", 0),
        ],
        vec![],
        vec![],
    );

    let seq_of = |number: &str| {
        result
            .orders
            .iter()
            .find(|v| v.order_number == number)
            .unwrap()
            .customer_order_seq
    };

    assert_eq!(seq_of("A"), 1);
    assert_eq!(seq_of("B"), 2);
    assert_eq!(seq_of("C"), 3);
    assert_eq!(seq_of("U1"), 1);

    // Per customer, the sequence numbers are a permutation of 1..=k.
    let mut sharif: Vec<u32> = result
        .orders
        .iter()
        .filter(|v| v.customer_name == "Sharif")
        .map(|v| v.customer_order_seq)
        .collect();
    sharif.sort();
    assert_eq!(sharif, vec![1, 2, 3]);
}

#[test]
fn same_day_ties_break_by_input_order() {
    let result = aggregate(
        vec![
            order("A1", date(2024, 1, 5), "Sharif", 0),
            order("A2", date(2024, 1, 5), "Sharif", 0),
        ],
        vec![],
        vec![],
    );
    let seq_of = |number: &str| {
        result
            .orders
            .iter()
            .find(|v| v.order_number == number)
            .unwrap()
            .customer_order_seq
    };
    assert_eq!(seq_of("A1"), 1);
    assert_eq!(seq_of("A2"), 2);
}

#[test]
fn display_order_is_descending_date() {
    let result = aggregate(
        vec![
            order("A", date(2024, 1, 5), "Sharif", 0),
            order("C", date(2024, 3, 1), "Sharif", 0),
            order("B", date(2024, 2, 10), "Uruma", 0),
        ],
        vec![],
        vec![],
    );
    let numbers: Vec<&str> = result
        .orders
        .iter()
        .map(|v| v.order_number.as_str())
        .collect();
    assert_eq!(numbers, vec!["C", "B", "A"]);
}

#[test]
fn aggregation_is_idempotent() {
    let orders = vec![
        order("A", date(2024, 1, 5), "Sharif", 1000),
        order("B", date(2024, 2, 10), "Uruma", 500),
    ];
    let items = vec![item("A", 2, 300, false), item("B", 1, 500, true)];
    let payments = vec![payment("A", 600), payment("B", 500)];

    let first = aggregate(orders.clone(), items.clone(), payments.clone());
    let second = aggregate(orders, items, payments);
    assert_eq!(first, second);
}
