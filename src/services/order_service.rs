use chrono::{NaiveDate, Utc};
use sea_orm::ActiveValue::NotSet;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, SqlErr,
    TransactionTrait,
};
use uuid::Uuid;

use crate::{
    audit::log_audit,
    confirm,
    diff,
    dto::orders::{
        LineItemDto, OrderDetail, PaymentDto, RecordPaymentRequest, SubmitOrderRequest,
        SubmitOutcome,
    },
    entity::{
        line_items::{
            ActiveModel as LineItemActive, Column as LineItemCol, Entity as LineItems,
            Model as LineItemModel,
        },
        orders::{ActiveModel as OrderActive, Column as OrderCol, Entity as Orders},
        payments::ActiveModel as PaymentActive,
    },
    error::{AppError, AppResult},
    middleware::auth::AuthOperator,
    models::{self, LineItem, OrderDraft},
    response::{ApiResponse, Meta},
    services::suggestion_service,
    state::AppState,
};

/// First submission of a new order: gate, validate, then insert header and
/// items in one transaction. A duplicate order number surfaces as a
/// constraint violation, never a silent overwrite.
pub async fn create_order(
    state: &AppState,
    operator: &AuthOperator,
    payload: SubmitOrderRequest,
) -> AppResult<ApiResponse<SubmitOutcome>> {
    let vocabulary = suggestion_service::load_vocabulary(&state.orm).await?;
    let gate = confirm::evaluate(
        &payload.header,
        &payload.items,
        &vocabulary,
        payload.confirmation,
    );
    if !gate.proceed {
        return Ok(blocked_response(gate));
    }

    let (order_number, order_date) = validated_order_number(&payload.header)?;

    let items: Vec<LineItem> = payload
        .items
        .into_iter()
        .map(|draft| draft.into_item(&order_number))
        .collect();
    let final_price = payload
        .header
        .final_price
        .unwrap_or_else(|| items.iter().map(LineItem::line_total).sum());

    let txn = state.orm.begin().await?;

    let header = OrderActive {
        order_number: Set(order_number.clone()),
        order_date: Set(order_date),
        customer_name: Set(payload.header.customer_name.trim().to_string()),
        final_price: Set(final_price),
        created_at: NotSet,
        updated_at: NotSet,
    };
    header
        .insert(&txn)
        .await
        .map_err(|err| map_duplicate_order(err, &order_number))?;

    if !items.is_empty() {
        LineItems::insert_many(items.iter().map(item_to_active))
            .exec(&txn)
            .await?;
    }

    txn.commit().await?;

    if let Err(err) = log_audit(
        &state.pool,
        Some(operator.operator_id),
        "order_created",
        Some("orders"),
        Some(serde_json::json!({ "order_number": &order_number, "items": items.len() })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(ApiResponse::success(
        "Order created",
        SubmitOutcome::Saved {
            order_number,
            item_count: items.len(),
        },
        Some(Meta::empty()),
    ))
}

/// Re-submission of an existing order: gate, reconcile the edited item
/// collection against the stored snapshot, then apply header upsert, item
/// deletes and item upserts in one transaction.
pub async fn update_order(
    state: &AppState,
    operator: &AuthOperator,
    existing_order_number: &str,
    payload: SubmitOrderRequest,
) -> AppResult<ApiResponse<SubmitOutcome>> {
    let vocabulary = suggestion_service::load_vocabulary(&state.orm).await?;
    let gate = confirm::evaluate(
        &payload.header,
        &payload.items,
        &vocabulary,
        payload.confirmation,
    );
    if !gate.proceed {
        return Ok(blocked_response(gate));
    }

    if Orders::find_by_id(existing_order_number.to_string())
        .one(&state.orm)
        .await?
        .is_none()
    {
        return Err(AppError::NotFound);
    }

    let (order_number, order_date) = validated_order_number(&payload.header)?;

    let prior: Vec<LineItem> = LineItems::find()
        .filter(LineItemCol::OrderNumber.eq(existing_order_number))
        .all(&state.orm)
        .await?
        .into_iter()
        .map(item_from_entity)
        .collect();

    let current: Vec<LineItem> = payload
        .items
        .into_iter()
        .map(|draft| draft.into_item(&order_number))
        .collect();
    let final_price = payload
        .header
        .final_price
        .unwrap_or_else(|| current.iter().map(LineItem::line_total).sum());

    let plan = diff::reconcile(&prior, current);

    let txn = state.orm.begin().await?;

    let header = OrderActive {
        order_number: Set(order_number.clone()),
        order_date: Set(order_date),
        customer_name: Set(payload.header.customer_name.trim().to_string()),
        final_price: Set(final_price),
        created_at: NotSet,
        updated_at: Set(Utc::now().into()),
    };
    Orders::insert(header)
        .on_conflict(
            OnConflict::column(OrderCol::OrderNumber)
                .update_columns([
                    OrderCol::OrderDate,
                    OrderCol::CustomerName,
                    OrderCol::FinalPrice,
                    OrderCol::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec(&txn)
        .await?;

    if !plan.to_delete.is_empty() {
        LineItems::delete_many()
            .filter(LineItemCol::Id.is_in(plan.to_delete.clone()))
            .exec(&txn)
            .await?;
    }

    if !plan.to_upsert.is_empty() {
        LineItems::insert_many(plan.to_upsert.iter().map(item_to_active))
            .on_conflict(
                OnConflict::column(LineItemCol::Id)
                    .update_columns([
                        LineItemCol::OrderNumber,
                        LineItemCol::ProductModel,
                        LineItemCol::Color,
                        LineItemCol::Specification,
                        LineItemCol::Quantity,
                        LineItemCol::UnitPrice,
                        LineItemCol::IsShipped,
                    ])
                    .to_owned(),
            )
            .exec(&txn)
            .await?;
    }

    txn.commit().await?;

    if let Err(err) = log_audit(
        &state.pool,
        Some(operator.operator_id),
        "order_updated",
        Some("orders"),
        Some(serde_json::json!({
            "order_number": &order_number,
            "upserted": plan.to_upsert.len(),
            "deleted": plan.to_delete.len(),
        })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(ApiResponse::success(
        "Order updated",
        SubmitOutcome::Saved {
            order_number,
            item_count: plan.to_upsert.len(),
        },
        Some(Meta::empty()),
    ))
}

/// Read one order with its items, shaped for the edit form.
pub async fn get_order(
    state: &AppState,
    order_number: &str,
) -> AppResult<ApiResponse<OrderDetail>> {
    let order = Orders::find_by_id(order_number.to_string())
        .one(&state.orm)
        .await?;
    let order = match order {
        Some(o) => o,
        None => return Err(AppError::NotFound),
    };

    let items: Vec<LineItemDto> = LineItems::find()
        .filter(LineItemCol::OrderNumber.eq(order_number))
        .order_by_asc(LineItemCol::CreatedAt)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(item_from_entity)
        .map(LineItemDto::from)
        .collect();

    let detail = OrderDetail {
        order_number_suffix: models::order_number_suffix(&order.order_number).to_string(),
        order_number: order.order_number,
        order_date: order.order_date,
        customer_name: order.customer_name,
        final_price: order.final_price,
        items,
    };

    Ok(ApiResponse::success("Ok", detail, Some(Meta::empty())))
}

/// Remove an order outright. Line items and payments go with it via the
/// cascading foreign keys; nothing in the reconciliation core calls this.
pub async fn delete_order(
    state: &AppState,
    operator: &AuthOperator,
    order_number: &str,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let result = Orders::delete_by_id(order_number.to_string())
        .exec(&state.orm)
        .await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    if let Err(err) = log_audit(
        &state.pool,
        Some(operator.operator_id),
        "order_deleted",
        Some("orders"),
        Some(serde_json::json!({ "order_number": order_number })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(ApiResponse::success(
        "Order deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

/// Record one payment against an order.
pub async fn record_payment(
    state: &AppState,
    operator: &AuthOperator,
    order_number: &str,
    payload: RecordPaymentRequest,
) -> AppResult<ApiResponse<PaymentDto>> {
    if payload.amount <= 0 {
        return Err(AppError::BadRequest(
            "amount must be greater than 0".to_string(),
        ));
    }

    if Orders::find_by_id(order_number.to_string())
        .one(&state.orm)
        .await?
        .is_none()
    {
        return Err(AppError::NotFound);
    }

    let payment = PaymentActive {
        id: Set(Uuid::new_v4()),
        order_number: Set(order_number.to_string()),
        amount: Set(payload.amount),
        created_at: NotSet,
    }
    .insert(&state.orm)
    .await?;

    if let Err(err) = log_audit(
        &state.pool,
        Some(operator.operator_id),
        "payment_recorded",
        Some("payments"),
        Some(serde_json::json!({ "order_number": order_number, "amount": payment.amount })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(ApiResponse::success(
        "Payment recorded",
        PaymentDto {
            id: payment.id,
            order_number: payment.order_number,
            amount: payment.amount,
        },
        Some(Meta::empty()),
    ))
}

fn blocked_response(gate: confirm::GateOutcome) -> ApiResponse<SubmitOutcome> {
    ApiResponse::success(
        "Values outside the suggestion lists, submit again to confirm",
        SubmitOutcome::ConfirmationRequired {
            novel_fields: gate.novel_fields,
            next_state: gate.next_state,
        },
        Some(Meta::empty()),
    )
}

fn validated_order_number(header: &OrderDraft) -> AppResult<(String, NaiveDate)> {
    let order_date = header.order_date.ok_or(AppError::MissingInput("order date"))?;
    let suffix = header.order_number_suffix.trim();
    if suffix.is_empty() {
        return Err(AppError::MissingInput("order number suffix"));
    }
    Ok((models::build_order_number(order_date, suffix), order_date))
}

fn map_duplicate_order(err: sea_orm::DbErr, order_number: &str) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => AppError::ConstraintViolation(format!(
            "order number '{order_number}' already exists"
        )),
        _ => AppError::OrmError(err),
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

fn item_to_active(item: &LineItem) -> LineItemActive {
    LineItemActive {
        id: Set(item.id),
        order_number: Set(item.order_number.clone()),
        product_model: Set(item.product_model.clone()),
        color: Set(item.color.clone()),
        specification: Set(item.specification.clone()),
        quantity: Set(item.quantity),
        unit_price: Set(item.unit_price),
        is_shipped: Set(item.is_shipped),
        created_at: NotSet,
    }
}
