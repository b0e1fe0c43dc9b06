use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::dto::orders::LineItemDto;
use crate::summary::{Aggregation, OrderSummary};

#[derive(Debug, Deserialize, ToSchema)]
pub struct DashboardQuery {
    /// Case-insensitive substring filter on customer name.
    pub q: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderSummaryDto {
    pub order_number: String,
    pub order_date: NaiveDate,
    pub customer_name: String,
    pub customer_order_seq: u32,
    pub items: Vec<LineItemDto>,
    pub total_quantity: i64,
    pub final_price: i64,
    pub paid: i64,
    pub receivable: i64,
    pub settled: bool,
    pub fully_shipped: bool,
    pub completed: bool,
}

impl From<OrderSummary> for OrderSummaryDto {
    fn from(summary: OrderSummary) -> Self {
        Self {
            order_number: summary.order_number,
            order_date: summary.order_date,
            customer_name: summary.customer_name,
            customer_order_seq: summary.customer_order_seq,
            items: summary.items.into_iter().map(LineItemDto::from).collect(),
            total_quantity: summary.total_quantity,
            final_price: summary.final_price,
            paid: summary.paid,
            receivable: summary.receivable,
            settled: summary.settled,
            fully_shipped: summary.fully_shipped,
            completed: summary.completed,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DashboardData {
    /// Newest order date first.
    pub orders: Vec<OrderSummaryDto>,
    /// Orphaned rows skipped during aggregation, for operability.
    pub dropped_items: usize,
    pub dropped_payments: usize,
}

impl From<Aggregation> for DashboardData {
    fn from(aggregation: Aggregation) -> Self {
        Self {
            orders: aggregation
                .orders
                .into_iter()
                .map(OrderSummaryDto::from)
                .collect(),
            dropped_items: aggregation.dropped_items,
            dropped_payments: aggregation.dropped_payments,
        }
    }
}
