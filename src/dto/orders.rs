use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::confirm::ConfirmationState;
use crate::models::{LineItem, LineItemDraft, OrderDraft};

/// One submission attempt of the order form, for both create and edit.
/// `confirmation` is the client-held two-phase submit state; it defaults
/// to `draft` and must be reset by the client on any field edit.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SubmitOrderRequest {
    pub header: OrderDraft,
    #[serde(default)]
    pub items: Vec<LineItemDraft>,
    #[serde(default)]
    pub confirmation: ConfirmationState,
}

/// Result of a submission attempt. A blocked submission is a normal
/// outcome, not an error: the caller renders the novel values and waits
/// for a repeated submit carrying `pending_confirmation`.
#[derive(Debug, Serialize, ToSchema)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SubmitOutcome {
    ConfirmationRequired {
        novel_fields: Vec<String>,
        next_state: ConfirmationState,
    },
    Saved {
        order_number: String,
        item_count: usize,
    },
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LineItemDto {
    pub id: Uuid,
    pub order_number: String,
    pub product_model: String,
    pub color: Option<String>,
    pub specification: Option<String>,
    pub quantity: i64,
    pub unit_price: i64,
    /// Derived on every read; there is no stored total column.
    pub total_price: i64,
    pub is_shipped: bool,
}

impl From<LineItem> for LineItemDto {
    fn from(item: LineItem) -> Self {
        let total_price = item.line_total();
        Self {
            id: item.id,
            order_number: item.order_number,
            product_model: item.product_model,
            color: item.color,
            specification: item.specification,
            quantity: item.quantity,
            unit_price: item.unit_price,
            total_price,
            is_shipped: item.is_shipped,
        }
    }
}

/// Everything the edit form needs to repopulate itself.
#[derive(Debug, Serialize, ToSchema)]
pub struct OrderDetail {
    pub order_number: String,
    /// The operator-supplied part past the 8-digit date prefix.
    pub order_number_suffix: String,
    pub order_date: NaiveDate,
    pub customer_name: String,
    pub final_price: i64,
    pub items: Vec<LineItemDto>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct RecordPaymentRequest {
    #[serde(default, deserialize_with = "crate::models::lenient_amount")]
    pub amount: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaymentDto {
    pub id: Uuid,
    pub order_number: String,
    pub amount: i64,
}
