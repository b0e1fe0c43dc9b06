use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::sea_query::Expr;
use sea_orm::{Condition, EntityTrait, QueryFilter};

use crate::{
    dto::dashboard::{DashboardData, DashboardQuery},
    entity::{
        line_items::{Entity as LineItems, Model as LineItemModel},
        orders::{Column as OrderCol, Entity as Orders, Model as OrderModel},
        payments::{Entity as Payments, Model as PaymentModel},
    },
    error::{AppError, AppResult},
    models::{LineItem, Order, Payment},
    response::{ApiResponse, Meta},
    state::AppState,
    summary,
};

/// The aggregation read path behind the dashboard.
///
/// The three reads are independent and dispatched concurrently; the
/// aggregator only ever runs once all three have landed. If any one read
/// fails the whole pass is aborted rather than aggregated from partial
/// data, and the caller retries the triple.
pub async fn dashboard(
    state: &AppState,
    query: DashboardQuery,
) -> AppResult<ApiResponse<DashboardData>> {
    let mut condition = Condition::all();
    if let Some(term) = query.q.as_ref().map(|q| q.trim()).filter(|q| !q.is_empty()) {
        condition = condition.add(Expr::col(OrderCol::CustomerName).ilike(format!("%{term}%")));
    }

    let orders = Orders::find().filter(condition).all(&state.orm);
    let items = LineItems::find().all(&state.orm);
    let payments = Payments::find().all(&state.orm);

    let (orders, items, payments) =
        tokio::try_join!(orders, items, payments).map_err(AppError::PartialFetch)?;

    let aggregation = summary::aggregate(
        orders.into_iter().map(order_from_entity).collect(),
        items.into_iter().map(item_from_entity).collect(),
        payments.into_iter().map(payment_from_entity).collect(),
    );

    if aggregation.dropped_items > 0 || aggregation.dropped_payments > 0 {
        tracing::warn!(
            dropped_items = aggregation.dropped_items,
            dropped_payments = aggregation.dropped_payments,
            "aggregation dropped records referencing unknown orders"
        );
    }

    let total = aggregation.orders.len() as i64;
    Ok(ApiResponse::success(
        "Ok",
        DashboardData::from(aggregation),
        Some(Meta::total(total)),
    ))
}

fn order_from_entity(model: OrderModel) -> Order {
    Order {
        order_number: model.order_number,
        order_date: model.order_date,
        customer_name: model.customer_name,
        final_price: model.final_price,
    }
}

fn item_from_entity(model: LineItemModel) -> LineItem {
    LineItem {
        id: model.id,
        order_number: model.order_number,
        product_model: model.product_model,
        color: model.color,
        specification: model.specification,
        quantity: model.quantity,
        unit_price: model.unit_price,
        is_shipped: model.is_shipped,
    }
}

fn payment_from_entity(model: PaymentModel) -> Payment {
    Payment {
        order_number: model.order_number,
        amount: model.amount,
    }
}
