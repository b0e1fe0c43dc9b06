use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{LineItem, Order, Payment};

/// Computed per-order view for the dashboard. Never persisted; recomputed
/// on every aggregation pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderSummary {
    pub order_number: String,
    pub order_date: NaiveDate,
    pub customer_name: String,
    /// Nth order for this customer, 1-based, by ascending order date.
    /// Same-day ties fall back to input order, which is deterministic but
    /// otherwise arbitrary.
    pub customer_order_seq: u32,
    pub items: Vec<LineItem>,
    pub total_quantity: i64,
    pub final_price: i64,
    pub paid: i64,
    pub receivable: i64,
    pub settled: bool,
    pub fully_shipped: bool,
    pub completed: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Aggregation {
    /// Summaries in display order (descending order date).
    pub orders: Vec<OrderSummary>,
    /// Line items referencing an order number not present in the input.
    pub dropped_items: usize,
    /// Payments referencing an order number not present in the input.
    pub dropped_payments: usize,
}

/// Join the three independently-fetched collections into one computed view
/// per order.
///
/// Items and payments whose order number has no header are dropped, not
/// rejected: under a partial-failure fetch they can legitimately exist, and
/// the dashboard favors best-effort display over strict validation. The
/// drop counts are reported so operators can spot orphaned rows.
pub fn aggregate(orders: Vec<Order>, items: Vec<LineItem>, payments: Vec<Payment>) -> Aggregation {
    // Ascending date pass assigns per-customer sequence numbers. Stable
    // sort keeps same-day orders in input order.
    let mut ordered = orders;
    ordered.sort_by_key(|order| order.order_date);

    let mut summaries: Vec<OrderSummary> = Vec::with_capacity(ordered.len());
    let mut index_by_number: HashMap<String, usize> = HashMap::with_capacity(ordered.len());
    let mut orders_per_customer: HashMap<String, u32> = HashMap::new();

    for order in ordered {
        let seq = orders_per_customer
            .entry(order.customer_name.clone())
            .and_modify(|count| *count += 1)
            .or_insert(1);

        index_by_number.insert(order.order_number.clone(), summaries.len());
        summaries.push(OrderSummary {
            order_number: order.order_number,
            order_date: order.order_date,
            customer_name: order.customer_name,
            customer_order_seq: *seq,
            items: Vec::new(),
            total_quantity: 0,
            final_price: order.final_price,
            paid: 0,
            receivable: 0,
            settled: false,
            fully_shipped: false,
            completed: false,
        });
    }

    let mut dropped_items = 0;
    for item in items {
        match index_by_number.get(&item.order_number) {
            Some(&at) => {
                let summary = &mut summaries[at];
                summary.total_quantity += item.quantity;
                summary.items.push(item);
            }
            None => dropped_items += 1,
        }
    }

    let mut dropped_payments = 0;
    for payment in payments {
        match index_by_number.get(&payment.order_number) {
            Some(&at) => summaries[at].paid += payment.amount,
            None => dropped_payments += 1,
        }
    }

    for summary in &mut summaries {
        summary.receivable = summary.final_price - summary.paid;
        summary.settled = summary.receivable <= 0;
        // Vacuously true for an order with no items.
        summary.fully_shipped = summary.items.iter().all(|item| item.is_shipped);
        summary.completed = summary.settled && summary.fully_shipped;
    }

    // Display pass: newest first. Intentionally a second, separate sort;
    // the ascending pass above feeds sequence numbering only. Stable, so
    // same-day orders keep their ascending-pass order.
    summaries.sort_by(|a, b| b.order_date.cmp(&a.order_date));

    Aggregation {
        orders: summaries,
        dropped_items,
        dropped_payments,
    }
}
