use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Operator account. The original tool is single-user, so there is no
/// role column; any authenticated operator may do everything.
#[derive(Debug, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
pub struct Operator {
    pub id: Uuid,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Order header as stored. `final_price` is the negotiated total and is
/// authoritative; it is never derived from the line items after submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Order {
    pub order_number: String,
    pub order_date: NaiveDate,
    pub customer_name: String,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub final_price: i64,
}

/// One product row within an order. The line total is always derived from
/// `quantity * unit_price`; a `total_price` field arriving on the wire is
/// ignored rather than trusted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LineItem {
    pub id: Uuid,
    pub order_number: String,
    pub product_model: String,
    pub color: Option<String>,
    pub specification: Option<String>,
    #[serde(default, deserialize_with = "lenient_quantity")]
    pub quantity: i64,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub unit_price: i64,
    #[serde(default)]
    pub is_shipped: bool,
}

impl LineItem {
    pub fn line_total(&self) -> i64 {
        self.quantity * self.unit_price
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Payment {
    pub order_number: String,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub amount: i64,
}

/// Order header fields as submitted by the form, before the order number
/// is assembled from the date prefix and the operator-supplied suffix.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrderDraft {
    #[serde(default)]
    pub order_number_suffix: String,
    #[serde(default)]
    pub order_date: Option<NaiveDate>,
    #[serde(default)]
    pub customer_name: String,
    /// Absent or null means "no negotiated price entered"; the service
    /// falls back to the sum of the line totals.
    #[serde(default, deserialize_with = "lenient_amount_opt")]
    pub final_price: Option<i64>,
}

/// Line item as submitted by the form. Items created during the edit
/// session have no id yet; one is assigned in [`LineItemDraft::into_item`]
/// so the diff reconciler always sees durable identifiers.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LineItemDraft {
    #[serde(default)]
    pub id: Option<Uuid>,
    #[serde(default)]
    pub product_model: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub specification: String,
    #[serde(default, deserialize_with = "lenient_quantity")]
    pub quantity: i64,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub unit_price: i64,
    #[serde(default)]
    pub is_shipped: bool,
}

impl LineItemDraft {
    pub fn into_item(self, order_number: &str) -> LineItem {
        LineItem {
            id: self.id.unwrap_or_else(Uuid::new_v4),
            order_number: order_number.to_string(),
            product_model: self.product_model.trim().to_string(),
            color: none_if_blank(self.color),
            specification: none_if_blank(self.specification),
            quantity: self.quantity.max(0),
            unit_price: self.unit_price.max(0),
            is_shipped: self.is_shipped,
        }
    }
}

fn none_if_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Coerce a loosely-typed JSON value to an amount. Numeric strings are
/// accepted; anything unparseable becomes 0 instead of an error, keeping
/// a single malformed record from taking down a whole dashboard render.
pub fn coerce_amount(value: &serde_json::Value) -> i64 {
    match value {
        serde_json::Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0),
        serde_json::Value::String(s) => {
            let trimmed = s.trim();
            trimmed
                .parse::<i64>()
                .ok()
                .or_else(|| trimmed.parse::<f64>().ok().map(|f| f as i64))
                .unwrap_or(0)
        }
        _ => 0,
    }
}

pub(crate) fn lenient_amount<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(coerce_amount(&value))
}

// Quantities are additionally clamped at zero on every mutation.
pub(crate) fn lenient_quantity<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(coerce_amount(&value).max(0))
}

fn lenient_amount_opt<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    Ok(Some(coerce_amount(&value)))
}

/// Full order number: `YYYYMMDD` date prefix plus the operator-supplied
/// sequence suffix. Treated as an opaque key everywhere else.
pub fn build_order_number(order_date: NaiveDate, suffix: &str) -> String {
    format!("{}{}", order_date.format("%Y%m%d"), suffix.trim())
}

/// Inverse convenience for the edit form: everything past the 8-digit
/// date prefix.
pub fn order_number_suffix(order_number: &str) -> &str {
    order_number.get(8..).unwrap_or("")
}
