use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};

use crate::{
    dto::orders::{
        OrderDetail, PaymentDto, RecordPaymentRequest, SubmitOrderRequest, SubmitOutcome,
    },
    error::AppResult,
    middleware::auth::AuthOperator,
    response::ApiResponse,
    services::order_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_order))
        .route(
            "/{order_number}",
            get(get_order).put(update_order).delete(delete_order),
        )
        .route("/{order_number}/payments", post(record_payment))
}

#[utoipa::path(
    post,
    path = "/api/orders",
    request_body = SubmitOrderRequest,
    responses(
        (status = 200, description = "Created, or blocked pending confirmation", body = ApiResponse<SubmitOutcome>),
        (status = 409, description = "Duplicate order number"),
        (status = 422, description = "Missing order date or order number suffix")
    ),
    tag = "Orders"
)]
pub async fn create_order(
    State(state): State<AppState>,
    operator: AuthOperator,
    Json(payload): Json<SubmitOrderRequest>,
) -> AppResult<Json<ApiResponse<SubmitOutcome>>> {
    let resp = order_service::create_order(&state, &operator, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/orders/{order_number}",
    responses(
        (status = 200, description = "Order with items", body = ApiResponse<OrderDetail>),
        (status = 404, description = "Unknown order number")
    ),
    tag = "Orders"
)]
pub async fn get_order(
    State(state): State<AppState>,
    _operator: AuthOperator,
    Path(order_number): Path<String>,
) -> AppResult<Json<ApiResponse<OrderDetail>>> {
    let resp = order_service::get_order(&state, &order_number).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/orders/{order_number}",
    request_body = SubmitOrderRequest,
    responses(
        (status = 200, description = "Updated, or blocked pending confirmation", body = ApiResponse<SubmitOutcome>),
        (status = 404, description = "Unknown order number")
    ),
    tag = "Orders"
)]
pub async fn update_order(
    State(state): State<AppState>,
    operator: AuthOperator,
    Path(order_number): Path<String>,
    Json(payload): Json<SubmitOrderRequest>,
) -> AppResult<Json<ApiResponse<SubmitOutcome>>> {
    let resp = order_service::update_order(&state, &operator, &order_number, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/orders/{order_number}",
    responses(
        (status = 200, description = "Order removed"),
        (status = 404, description = "Unknown order number")
    ),
    tag = "Orders"
)]
pub async fn delete_order(
    State(state): State<AppState>,
    operator: AuthOperator,
    Path(order_number): Path<String>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = order_service::delete_order(&state, &operator, &order_number).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/orders/{order_number}/payments",
    request_body = RecordPaymentRequest,
    responses(
        (status = 200, description = "Payment recorded", body = ApiResponse<PaymentDto>),
        (status = 404, description = "Unknown order number")
    ),
    tag = "Orders"
)]
pub async fn record_payment(
    State(state): State<AppState>,
    operator: AuthOperator,
    Path(order_number): Path<String>,
    Json(payload): Json<RecordPaymentRequest>,
) -> AppResult<Json<ApiResponse<PaymentDto>>> {
    let resp = order_service::record_payment(&state, &operator, &order_number, payload).await?;
    Ok(Json(resp))
}
